//! Error types for icon rendering and batch generation.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum IconError {
    /// The linked imaging backend can't do what we need (e.g. no PNG encoder).
    #[error("Missing imaging capability: {0}")]
    MissingCapability(&'static str),

    #[error("Invalid icon size {0}: size must be a positive number of pixels")]
    InvalidSize(u32),

    #[error("I/O error at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("PNG encoding failed: {0}")]
    Encode(#[from] image::ImageError),

    #[error("Failed to serialize manifest: {0}")]
    Manifest(#[from] serde_json::Error),
}

impl IconError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        IconError::Io {
            path: path.into(),
            source,
        }
    }
}

pub type IconResult<T> = Result<T, IconError>;
