//! Error types for AlphaVision core.
//!
//! This module defines the error types shared by the AlphaVision crates,
//! providing structured error handling with context.

use thiserror::Error;

/// A specialized Result type for core operations.
pub type CoreResult<T> = Result<T, CoreError>;

/// The main error type for core operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CoreError {
    /// Error in date parsing or an invalid calendar date.
    #[error("Invalid date: {message}")]
    InvalidDate {
        /// Description of the date error.
        message: String,
    },

    /// A value could not be represented for rounding or formatting.
    #[error("Invalid number: {value} - {reason}")]
    InvalidNumber {
        /// The offending value.
        value: f64,
        /// Reason for invalidity.
        reason: String,
    },
}

impl CoreError {
    /// Creates an invalid date error.
    #[must_use]
    pub fn invalid_date(message: impl Into<String>) -> Self {
        Self::InvalidDate {
            message: message.into(),
        }
    }

    /// Creates an invalid number error.
    #[must_use]
    pub fn invalid_number(value: f64, reason: impl Into<String>) -> Self {
        Self::InvalidNumber {
            value,
            reason: reason.into(),
        }
    }
}
