use std::path::PathBuf;

use clr_dither::{KernelError, PaletteError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClrError {
    #[error("{0}")]
    Usage(String),

    #[error("'{0}' is not a valid hex colour")]
    InvalidHex(String),

    #[error("invalid dithering algorithm '{0}'")]
    UnknownKernel(String),

    #[error("cannot infer image format from extension '{0}'")]
    UnsupportedFormat(String),

    #[error("could not load '{}': {reason}", path.display())]
    Decode { path: PathBuf, reason: String },

    #[error("unable to write image to '{}': {reason}", path.display())]
    Encode { path: PathBuf, reason: String },

    #[error("could not read '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("config error: {0}")]
    Config(String),
}

impl ClrError {
    /// Errors caused by how the tool was invoked, as opposed to what it was
    /// asked to process. These get a pointer to `--help`.
    pub fn is_usage(&self) -> bool {
        matches!(
            self,
            ClrError::Usage(_)
                | ClrError::InvalidHex(_)
                | ClrError::UnknownKernel(_)
                | ClrError::UnsupportedFormat(_)
        )
    }
}

impl From<KernelError> for ClrError {
    fn from(e: KernelError) -> Self {
        match e {
            KernelError::Unknown(name) => ClrError::UnknownKernel(name),
            other => ClrError::Usage(other.to_string()),
        }
    }
}

impl From<PaletteError> for ClrError {
    fn from(e: PaletteError) -> Self {
        match e {
            PaletteError::ParseColor(e) => ClrError::InvalidHex(e.input().to_string()),
            other => ClrError::Usage(other.to_string()),
        }
    }
}
