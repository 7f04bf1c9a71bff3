use crate::core::io::error::FormatError;
use std::path::Path;
use thiserror::Error;

pub use crate::core::io::error::MalformedIndexError;

#[derive(Debug, Error)]
pub enum IndexError {
    #[error("File I/O error for '{path}': {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("Malformed search index: {0}")]
    Malformed(#[from] MalformedIndexError),

    #[error("Failed to serialize search index: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl IndexError {
    pub(crate) fn from_format(path: &Path, err: FormatError) -> Self {
        match err {
            FormatError::Io(source) => Self::Io {
                path: path.to_string_lossy().to_string(),
                source,
            },
            FormatError::Malformed(e) => Self::Malformed(e),
            FormatError::Serialize(e) => Self::Serialize(e),
        }
    }
}
