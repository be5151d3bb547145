//! Decimal rounding for reported figures.
//!
//! Aggregated figures are reported to a fixed number of decimal places. Rounding
//! a binary `f64` directly (`(x * 100.0).round() / 100.0`) misrounds values such
//! as `1.005`, whose nearest `f64` lies just below the midpoint. The helpers here
//! round the shortest decimal representation of the value instead, using
//! `rust_decimal` so the midpoint rule is applied to the digits a reader sees.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Midpoint rule used when rounding reported figures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoundingRule {
    /// Midpoints round away from zero (`0.125 -> 0.13`, `-0.125 -> -0.13`).
    #[default]
    HalfAwayFromZero,

    /// Midpoints round to the nearest even digit (`0.125 -> 0.12`).
    Bankers,
}

impl RoundingRule {
    /// Returns a human-readable name for the rule.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::HalfAwayFromZero => "Half Away From Zero",
            Self::Bankers => "Banker's",
        }
    }

    fn strategy(self) -> RoundingStrategy {
        match self {
            Self::HalfAwayFromZero => RoundingStrategy::MidpointAwayFromZero,
            Self::Bankers => RoundingStrategy::MidpointNearestEven,
        }
    }
}

impl fmt::Display for RoundingRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Rounds `value` to `dp` decimal places using `rule`.
///
/// Non-finite values are returned unchanged. Values outside the range of
/// `Decimal` fall back to binary rounding.
///
/// # Example
///
/// ```rust
/// use alphavision_core::rounding::{round_dp, RoundingRule};
///
/// assert_eq!(round_dp(1.005, 2, RoundingRule::HalfAwayFromZero), 1.01);
/// assert_eq!(round_dp(0.125, 2, RoundingRule::Bankers), 0.12);
/// ```
#[must_use]
pub fn round_dp(value: f64, dp: u32, rule: RoundingRule) -> f64 {
    if !value.is_finite() {
        return value;
    }

    // f64 Display is the shortest representation that round-trips
    match Decimal::from_str(&value.to_string()) {
        Ok(decimal) => decimal
            .round_dp_with_strategy(dp, rule.strategy())
            .to_f64()
            .unwrap_or(value),
        Err(_) => binary_round(value, dp, rule),
    }
}

/// Rounds to 2 decimal places, half away from zero.
#[must_use]
pub fn round2(value: f64) -> f64 {
    round_dp(value, 2, RoundingRule::HalfAwayFromZero)
}

fn binary_round(value: f64, dp: u32, rule: RoundingRule) -> f64 {
    let factor = 10f64.powi(dp.min(300) as i32);
    let scaled = value * factor;
    let rounded = match rule {
        RoundingRule::HalfAwayFromZero => scaled.round(),
        RoundingRule::Bankers => {
            let floor = scaled.floor();
            let diff = scaled - floor;
            if (diff - 0.5).abs() < f64::EPSILON {
                if floor % 2.0 == 0.0 {
                    floor
                } else {
                    floor + 1.0
                }
            } else {
                scaled.round()
            }
        }
    };
    rounded / factor
}
