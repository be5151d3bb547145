//! Error types for file loading.

use alphavision_core::CoreError;
use alphavision_portfolio::PortfolioError;
use std::path::Path;
use thiserror::Error;

/// Result type for file operations.
pub type FileResult<T> = Result<T, FileError>;

/// Errors that can occur while loading files.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FileError {
    /// The file could not be read.
    #[error("Cannot read {path}: {message}")]
    Io {
        /// File path.
        path: String,
        /// Underlying error message.
        message: String,
    },

    /// The file was read but its contents are malformed.
    #[error("Cannot parse {path}: {message}")]
    Parse {
        /// File path, or `<inline>` for in-memory input.
        path: String,
        /// Underlying error message.
        message: String,
    },

    /// A parsed record failed domain validation.
    #[error(transparent)]
    Portfolio(#[from] PortfolioError),

    /// A parsed value could not be converted to a core type.
    #[error(transparent)]
    Core(#[from] CoreError),
}

impl FileError {
    /// Create an I/O error for `path`.
    #[must_use]
    pub fn io(path: &Path, err: impl std::fmt::Display) -> Self {
        Self::Io {
            path: path.display().to_string(),
            message: err.to_string(),
        }
    }

    /// Create a parse error for `path`.
    #[must_use]
    pub fn parse(path: impl Into<String>, err: impl std::fmt::Display) -> Self {
        Self::Parse {
            path: path.into(),
            message: err.to_string(),
        }
    }
}

/// Path label used for errors on in-memory input.
pub(crate) const INLINE: &str = "<inline>";
