//! Host platform identification and loader-path publishing.
//!
//! # Architecture
//!
//! - `os.rs` - Operating system detection
//! - `arch.rs` - CPU architecture detection
//! - `tag.rs` - Canonical platform tag (bundle selection key)
//! - `env.rs` - Native-library search path publishing

pub use error::{Error, Result};
pub use tag::{PlatformTag, platform_tag};

pub mod arch;
pub mod env;
mod error;
pub mod os;
pub mod tag;
