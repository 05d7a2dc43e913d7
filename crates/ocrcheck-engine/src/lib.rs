//! Thin wrapper over the Tesseract binding.
//!
//! Recognition itself is owned entirely by the native library; this
//! crate only pins down the init-with-datapath / recognize-file
//! surface the driver needs and maps binding failures into one error
//! type. The native shared libraries must already be reachable through
//! the loader search path when [`Engine::new`] runs.

use std::path::Path;

use leptess::LepTess;
use tracing::debug;

pub use error::{Error, Result};

mod error;

/// Languages requested when the caller does not override them.
pub const DEFAULT_LANGUAGES: &str = "eng+ita";

/// One initialized OCR engine instance.
pub struct Engine {
    inner: LepTess,
}

impl Engine {
    /// Initialize the engine against the language data under
    /// `datapath` (`None` lets the binding consult its own defaults).
    ///
    /// Missing or partial language data surfaces here as an init
    /// failure, not earlier: extraction deliberately succeeds on an
    /// incomplete bundle.
    pub fn new(datapath: Option<&Path>, languages: &str) -> Result<Self> {
        let datapath_str = datapath.map(|p| p.to_string_lossy().into_owned());
        debug!(datapath = ?datapath_str, languages, "initializing OCR engine");

        let inner = LepTess::new(datapath_str.as_deref(), languages).map_err(|e| Error::Init {
            languages: languages.to_string(),
            message: e.to_string(),
        })?;

        Ok(Self { inner })
    }

    /// Run recognition over the image file and return the raw text.
    pub fn recognize(&mut self, image: &Path) -> Result<String> {
        self.inner.set_image(image).map_err(|e| Error::Image {
            path: image.to_path_buf(),
            message: e.to_string(),
        })?;

        let text = self
            .inner
            .get_utf8_text()
            .map_err(|e| Error::Text {
                message: e.to_string(),
            })?;

        debug!(image = %image.display(), chars = text.len(), "recognition finished");
        Ok(text)
    }
}
