//! # AlphaVision Core
//!
//! Core types and helpers shared by the AlphaVision portfolio analytics crates.
//!
//! This crate provides the foundational building blocks:
//!
//! - **Types**: [`Date`] for daily observations
//! - **Rounding**: Decimal-exact rounding of reported figures ([`rounding`])
//! - **Formatting**: Display helpers for prices, percentages and market caps ([`format`])
//!
//! ## Example
//!
//! ```rust
//! use alphavision_core::prelude::*;
//!
//! let date = Date::from_ymd(2025, 1, 15).unwrap();
//! assert_eq!(date.to_string(), "2025-01-15");
//! assert_eq!(round_dp(0.125, 2, RoundingRule::HalfAwayFromZero), 0.13);
//! assert_eq!(format_percent(4.2), "+4.20%");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::float_cmp)]

pub mod error;
pub mod format;
pub mod rounding;
pub mod types;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{CoreError, CoreResult};
    pub use crate::format::{format_market_cap, format_percent, format_price};
    pub use crate::rounding::{round2, round_dp, RoundingRule};
    pub use crate::types::Date;
}

// Re-export commonly used types at crate root
pub use error::{CoreError, CoreResult};
pub use rounding::RoundingRule;
pub use types::Date;
