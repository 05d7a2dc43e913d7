use std::io;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use tracing::{debug, warn};

use crate::error::{Error, Result};

/// One extraction run's temporary directory, owned by the caller.
///
/// While the session is live its root exists on disk and belongs
/// exclusively to this process. Cleanup is explicit via [`cleanup`],
/// and `Drop` removes the tree best-effort so every exit path,
/// including unwinding, releases the directory.
///
/// [`cleanup`]: Session::cleanup
#[derive(Debug)]
pub struct Session {
    root: PathBuf,
    created_at: SystemTime,
    dir: Option<tempfile::TempDir>,
}

/// Outcome of a cleanup attempt. Removal failures are reported here
/// and logged, never raised: a stuck temp directory must not mask the
/// primary program outcome.
#[derive(Debug)]
pub struct CleanupReport {
    pub removed: bool,
    pub warning: Option<io::Error>,
}

impl CleanupReport {
    pub fn is_clean(&self) -> bool {
        self.warning.is_none()
    }
}

impl Session {
    /// Create a fresh uniquely-named directory under the platform temp
    /// location.
    pub fn create() -> Result<Self> {
        let dir = tempfile::Builder::new()
            .prefix("ocrcheck-resources-")
            .tempdir()
            .map_err(|e| Error::SessionCreate { source: e })?;

        let root = dir.path().to_path_buf();
        debug!(root = %root.display(), "extraction session created");

        Ok(Self {
            root,
            created_at: SystemTime::now(),
            dir: Some(dir),
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Where the OCR language data lands inside this session.
    pub fn tessdata_dir(&self) -> PathBuf {
        self.root.join("tessdata")
    }

    pub fn created_at(&self) -> SystemTime {
        self.created_at
    }

    pub fn is_live(&self) -> bool {
        self.dir.is_some()
    }

    /// Recursively remove the session directory. Idempotent: calling
    /// again after a successful or failed removal is a no-op.
    pub fn cleanup(&mut self) -> CleanupReport {
        let Some(dir) = self.dir.take() else {
            return CleanupReport {
                removed: false,
                warning: None,
            };
        };

        match dir.close() {
            Ok(()) => {
                debug!(root = %self.root.display(), "extraction session removed");
                CleanupReport {
                    removed: true,
                    warning: None,
                }
            }
            Err(e) => {
                warn!(root = %self.root.display(), error = %e, "failed to remove extraction session");
                CleanupReport {
                    removed: false,
                    warning: Some(e),
                }
            }
        }
    }
}

impl Drop for Session {
    fn drop(&mut self) {
        if self.dir.is_some() {
            self.cleanup();
        }
    }
}
