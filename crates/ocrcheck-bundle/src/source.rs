use std::env;
use std::path::{Path, PathBuf};

use tracing::debug;
use url::Url;

/// Environment override naming the bundle location. The value may be a
/// plain path, a `file:` URI, or an archive-scheme URI with the `!`
/// inner-path marker.
pub const BUNDLE_ENV: &str = "OCRCHECK_BUNDLE";

/// Development-tree resource root used when running unpackaged.
pub const DEV_RESOURCE_ROOT: &str = "resources";

/// Where the native libraries and OCR data come from.
///
/// Running unpackaged is a supported development scenario, not an
/// error: any location that does not resolve to an existing bundle
/// archive falls back to the on-disk resource tree.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ResourceSource {
    /// A zip bundle to extract into a temp session.
    Packaged { archive: PathBuf },
    /// An unpacked tree: `<root>/native/<tag>` and `<root>/tessdata`.
    Development { root: PathBuf },
}

impl ResourceSource {
    /// Resolve a raw location string.
    ///
    /// Archive-scheme URIs carry the path inside the archive after a
    /// `!` marker; everything from the marker onward is stripped to
    /// obtain the outer archive's filesystem path. `file:` URIs are
    /// percent-decoded, so paths with spaces survive the round trip.
    pub fn from_location(raw: &str, dev_root: &Path) -> Self {
        let raw = raw.strip_prefix("jar:").unwrap_or(raw);
        let outer = match raw.find('!') {
            Some(idx) => &raw[..idx],
            None => raw,
        };

        let path = if outer.starts_with("file:") {
            match Url::parse(outer).ok().and_then(|u| u.to_file_path().ok()) {
                Some(p) => p,
                None => {
                    debug!(location = outer, "unparseable bundle URI, using development tree");
                    return Self::development(dev_root);
                }
            }
        } else {
            PathBuf::from(outer)
        };

        if is_bundle_archive(&path) {
            Self::Packaged { archive: path }
        } else {
            debug!(path = %path.display(), "no bundle archive at location, using development tree");
            Self::development(dev_root)
        }
    }

    /// Resolve the source for this process: the `OCRCHECK_BUNDLE`
    /// override if set, otherwise the bundle sitting next to the
    /// executable, otherwise the development tree.
    pub fn detect(dev_root: &Path) -> std::io::Result<Self> {
        if let Ok(raw) = env::var(BUNDLE_ENV) {
            return Ok(Self::from_location(&raw, dev_root));
        }

        let exe = env::current_exe()?;
        let sibling = sibling_bundle(&exe);
        if is_bundle_archive(&sibling) {
            Ok(Self::Packaged { archive: sibling })
        } else {
            Ok(Self::development(dev_root))
        }
    }

    pub fn development(root: &Path) -> Self {
        Self::Development {
            root: root.to_path_buf(),
        }
    }

    pub fn is_packaged(&self) -> bool {
        matches!(self, Self::Packaged { .. })
    }
}

fn sibling_bundle(exe: &Path) -> PathBuf {
    let stem = exe
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "ocrcheck".to_string());
    exe.with_file_name(format!("{stem}-resources.zip"))
}

fn is_bundle_archive(path: &Path) -> bool {
    if !path.is_file() {
        return false;
    }
    matches!(
        path.extension().and_then(|e| e.to_str()),
        Some(ext) if ext.eq_ignore_ascii_case("zip") || ext.eq_ignore_ascii_case("jar")
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn touch(path: &Path) {
        std::fs::write(path, b"PK\x03\x04").unwrap();
    }

    #[test]
    fn plain_path_to_existing_bundle() {
        let dir = tempfile::tempdir().unwrap();
        let bundle = dir.path().join("resources.zip");
        touch(&bundle);

        let source = ResourceSource::from_location(bundle.to_str().unwrap(), Path::new("dev"));
        assert_eq!(source, ResourceSource::Packaged { archive: bundle });
    }

    #[test]
    fn archive_uri_with_inner_marker() {
        let dir = tempfile::tempdir().unwrap();
        let bundle = dir.path().join("app.jar");
        touch(&bundle);

        let url = Url::from_file_path(&bundle).unwrap();
        let raw = format!("jar:{url}!/native/linux-x86_64/liba.so");
        let source = ResourceSource::from_location(&raw, Path::new("dev"));
        assert_eq!(source, ResourceSource::Packaged { archive: bundle });
    }

    #[test]
    fn file_uri_with_spaces_is_decoded() {
        let dir = tempfile::tempdir().unwrap();
        let spaced = dir.path().join("my app");
        std::fs::create_dir(&spaced).unwrap();
        let bundle = spaced.join("resources.zip");
        touch(&bundle);

        let url = Url::from_file_path(&bundle).unwrap();
        assert!(url.as_str().contains("%20"));

        let source = ResourceSource::from_location(url.as_str(), Path::new("dev"));
        assert_eq!(source, ResourceSource::Packaged { archive: bundle });
    }

    #[test]
    fn missing_archive_falls_back_to_development() {
        let source = ResourceSource::from_location("/nope/resources.zip", Path::new("dev"));
        assert_eq!(
            source,
            ResourceSource::Development {
                root: PathBuf::from("dev")
            }
        );
        assert!(!source.is_packaged());
    }

    #[test]
    fn wrong_extension_falls_back_to_development() {
        let dir = tempfile::tempdir().unwrap();
        let not_bundle = dir.path().join("resources.tar");
        touch(&not_bundle);

        let source = ResourceSource::from_location(not_bundle.to_str().unwrap(), Path::new("dev"));
        assert!(!source.is_packaged());
    }

    #[test]
    fn unparseable_uri_falls_back_to_development() {
        let source = ResourceSource::from_location("file:%%bad", Path::new("dev"));
        assert!(!source.is_packaged());
    }
}
