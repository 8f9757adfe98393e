//! Error types for the stamping pipeline.
//!
//! The position resolver and compositor are pure and cannot fail; every
//! failure surfaces at the decode/encode boundary or in configuration, and is
//! returned to the immediate caller as a typed error. A failing file never
//! aborts the rest of a batch.

use std::fmt;
use std::path::{Path, PathBuf};

/// Errors that can occur while stamping an image.
#[derive(Debug, Clone)]
pub enum StampError {
    /// File path does not exist or cannot be opened
    NotFound { path: PathBuf },

    /// File exists but is not a valid or supported image
    Decode { path: PathBuf, message: String },

    /// Failed writing the output file
    Encode { path: PathBuf, message: String },

    /// Invalid settings (non-PNG watermark, empty paths, ...)
    Config(String),
}

impl fmt::Display for StampError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound { path } => write!(f, "Cannot open file: {}", path.display()),
            Self::Decode { path, message } => {
                write!(f, "Failed to decode image {}: {}", path.display(), message)
            }
            Self::Encode { path, message } => {
                write!(f, "Failed to encode image {}: {}", path.display(), message)
            }
            Self::Config(message) => write!(f, "Configuration error: {}", message),
        }
    }
}

impl std::error::Error for StampError {}

impl StampError {
    /// Helper constructors for common error patterns
    pub fn not_found(path: impl Into<PathBuf>) -> Self {
        Self::NotFound { path: path.into() }
    }

    pub fn decode(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::Decode {
            path: path.into(),
            message: message.into(),
        }
    }

    pub fn encode(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::Encode {
            path: path.into(),
            message: message.into(),
        }
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// The file this error refers to, when the error is file-scoped.
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::NotFound { path } | Self::Decode { path, .. } | Self::Encode { path, .. } => {
                Some(path)
            }
            Self::Config(_) => None,
        }
    }
}
