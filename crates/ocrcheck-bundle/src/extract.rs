use std::fs::File;
use std::io;
use std::path::Path;

use ocrcheck_platform::PlatformTag;
use tracing::debug;
use zip::ZipArchive;

use crate::error::{Error, Result};
use crate::session::Session;

/// Bundle prefix holding OCR language data, preserved with structure.
pub const TESSDATA_PREFIX: &str = "tessdata/";

/// Bundle prefix holding the native libraries for one platform tag.
/// Entries under it are flattened into the session root.
pub fn native_prefix(tag: &PlatformTag) -> String {
    format!("native/{tag}/")
}

/// What one extraction run pulled out of the bundle.
#[derive(Clone, Copy, Debug, Default)]
pub struct ExtractReport {
    pub native_count: usize,
    pub data_count: usize,
    pub total_bytes: u64,
}

/// Extract the platform's native libraries and all OCR data files from
/// the zip bundle at `archive` into a fresh [`Session`].
///
/// The session is created before the archive is opened so a failure
/// partway through still releases the partial directory on drop. An
/// archive with no matching entries is not an error; the returned
/// report will simply show zero counts and the engine owns the
/// resulting init failure.
pub fn extract(archive: &Path, tag: &PlatformTag) -> Result<(Session, ExtractReport)> {
    if !archive.is_file() {
        return Err(Error::ArchiveNotFound {
            path: archive.to_path_buf(),
        });
    }

    let session = Session::create()?;

    let reader = File::open(archive)?;
    let mut bundle = ZipArchive::new(reader).map_err(|e| Error::ArchiveRead {
        path: archive.to_path_buf(),
        source: e,
    })?;

    let native_prefix = native_prefix(tag);
    let mut report = ExtractReport::default();

    for i in 0..bundle.len() {
        let mut entry = bundle.by_index(i).map_err(|e| Error::ArchiveRead {
            path: archive.to_path_buf(),
            source: e,
        })?;

        if entry.is_dir() {
            continue;
        }
        let name = entry.name().to_string();

        let target = if name.starts_with(&native_prefix) {
            // Flatten nested structure: only the final component lands
            // in the session root, where the loader searches.
            let enclosed = entry.enclosed_name().ok_or_else(|| Error::InvalidEntry {
                entry: name.clone(),
            })?;
            let file_name = enclosed
                .file_name()
                .ok_or_else(|| Error::InvalidEntry {
                    entry: name.clone(),
                })?
                .to_os_string();
            report.native_count += 1;
            session.root().join(file_name)
        } else if name.starts_with(TESSDATA_PREFIX) {
            let enclosed = entry.enclosed_name().ok_or_else(|| Error::InvalidEntry {
                entry: name.clone(),
            })?;
            let relative = enclosed
                .strip_prefix("tessdata")
                .map_err(|_| Error::InvalidEntry {
                    entry: name.clone(),
                })?
                .to_path_buf();
            report.data_count += 1;
            session.tessdata_dir().join(relative)
        } else {
            continue;
        };

        report.total_bytes += entry.size();
        write_entry(&mut entry, &target)?;
        debug!(entry = %name, target = %target.display(), "extracted bundle entry");
    }

    Ok((session, report))
}

fn write_entry<R: io::Read>(entry: &mut R, target: &Path) -> Result<()> {
    if let Some(parent) = target.parent() {
        if !parent.exists() {
            std::fs::create_dir_all(parent).map_err(|e| Error::Extraction {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }
    }

    let mut out = File::create(target).map_err(|e| Error::Extraction {
        path: target.to_path_buf(),
        source: e,
    })?;
    io::copy(entry, &mut out).map_err(|e| Error::Extraction {
        path: target.to_path_buf(),
        source: e,
    })?;
    Ok(())
}
