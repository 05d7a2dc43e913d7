use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("engine init failed for languages '{languages}': {message}")]
    Init { languages: String, message: String },

    #[error("failed to load image '{path}': {message}")]
    Image { path: PathBuf, message: String },

    #[error("failed to read recognized text: {message}")]
    Text { message: String },
}
