use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("unsupported platform for native extraction: {os}-{arch}")]
    UnsupportedPlatform { os: String, arch: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
