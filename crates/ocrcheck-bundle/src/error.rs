use std::io;
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("resource bundle not found: {path}")]
    ArchiveNotFound { path: PathBuf },

    #[error("failed to read resource bundle '{path}': {source}")]
    ArchiveRead {
        path: PathBuf,
        #[source]
        source: zip::result::ZipError,
    },

    #[error("bundle entry has an unsafe path: '{entry}'")]
    InvalidEntry { entry: String },

    #[error("failed to extract '{path}': {source}")]
    Extraction {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to create extraction directory: {source}")]
    SessionCreate {
        #[source]
        source: io::Error,
    },

    #[error(transparent)]
    Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
