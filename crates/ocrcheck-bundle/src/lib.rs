//! Resource bundle location, extraction and temp-session lifecycle.
//!
//! # Architecture
//!
//! - `source.rs` - Bundle location (packaged archive vs development tree)
//! - `extract.rs` - Prefix-routed extraction out of the zip bundle
//! - `session.rs` - Owned temp directory with guaranteed cleanup
//!
//! The native OCR binding expects its shared libraries and language
//! data on disk. A packaged build carries both inside a zip bundle;
//! `extract` unpacks the subset matching the host platform tag into a
//! fresh `Session` whose `Drop` removes it again.

pub use error::{Error, Result};
pub use extract::{ExtractReport, TESSDATA_PREFIX, extract, native_prefix};
pub use session::{CleanupReport, Session};
pub use source::{BUNDLE_ENV, DEV_RESOURCE_ROOT, ResourceSource};

mod error;
mod extract;
mod session;
mod source;
