//! Error types for portfolio analytics.
//!
//! Most degenerate inputs (unknown tickers, zero-sum weights, empty
//! selections) are defined cases rather than failures. The errors here cover
//! catalog construction, weight editing and strict history alignment.

use alphavision_core::{CoreError, Date};
use thiserror::Error;

/// Result type for portfolio operations.
pub type PortfolioResult<T> = Result<T, PortfolioError>;

/// Errors that can occur during portfolio operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PortfolioError {
    /// Missing required field during construction.
    #[error("Missing required field: {field}")]
    MissingField {
        /// The name of the missing field.
        field: String,
    },

    /// Invalid asset data.
    #[error("Invalid asset '{ticker}': {reason}")]
    InvalidAsset {
        /// The asset ticker.
        ticker: String,
        /// The reason the asset is invalid.
        reason: String,
    },

    /// Two catalog entries share a ticker.
    #[error("Duplicate ticker in catalog: {ticker}")]
    DuplicateTicker {
        /// The repeated ticker.
        ticker: String,
    },

    /// Invalid weight (out of range or NaN).
    #[error("Invalid weight for asset '{ticker}': {value}")]
    InvalidWeight {
        /// The asset ticker.
        ticker: String,
        /// The invalid weight value.
        value: f64,
    },

    /// An asset's history does not cover a date on the reference axis.
    #[error("Asset '{ticker}' has no observation for {date}")]
    MisalignedHistory {
        /// The asset ticker.
        ticker: String,
        /// The reference date with no observation.
        date: Date,
    },

    /// Error from the core crate.
    #[error(transparent)]
    Core(#[from] CoreError),
}

impl PortfolioError {
    /// Create a missing field error.
    #[must_use]
    pub fn missing_field(field: impl Into<String>) -> Self {
        Self::MissingField {
            field: field.into(),
        }
    }

    /// Create an invalid asset error.
    #[must_use]
    pub fn invalid_asset(ticker: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidAsset {
            ticker: ticker.into(),
            reason: reason.into(),
        }
    }

    /// Create an invalid weight error.
    #[must_use]
    pub fn invalid_weight(ticker: impl Into<String>, value: f64) -> Self {
        Self::InvalidWeight {
            ticker: ticker.into(),
            value,
        }
    }

    /// Create a misaligned history error.
    #[must_use]
    pub fn misaligned(ticker: impl Into<String>, date: Date) -> Self {
        Self::MisalignedHistory {
            ticker: ticker.into(),
            date,
        }
    }
}
