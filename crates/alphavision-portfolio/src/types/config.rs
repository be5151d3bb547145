//! Configuration for portfolio analytics computation.

use super::AlignmentPolicy;
use alphavision_core::RoundingRule;
use serde::{Deserialize, Serialize};

/// Default risk-free rate, in percentage points (2%).
pub const DEFAULT_RISK_FREE_RATE: f64 = 2.0;

/// Configuration for portfolio analytics computation.
///
/// Controls the Sharpe ratio's risk-free rate, reporting precision, history
/// alignment and parallelism.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyticsConfig {
    /// Risk-free rate in percentage points, same units as returns.
    pub risk_free_rate: f64,

    /// Midpoint rule used when rounding reported figures.
    pub rounding: RoundingRule,

    /// How series aggregation treats dates missing from some assets.
    pub alignment: AlignmentPolicy,

    /// Enable parallel processing (requires 'parallel' feature).
    pub parallel: bool,

    /// Minimum selected-asset count to trigger parallel processing.
    /// Below this threshold, sequential is faster due to thread overhead.
    pub parallel_threshold: usize,
}

impl Default for AnalyticsConfig {
    fn default() -> Self {
        Self {
            risk_free_rate: DEFAULT_RISK_FREE_RATE,
            rounding: RoundingRule::HalfAwayFromZero,
            alignment: AlignmentPolicy::Intersect,
            parallel: true,
            parallel_threshold: 100, // Use parallel if >100 assets
        }
    }
}

impl AnalyticsConfig {
    /// Creates a new config with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a config that always uses sequential processing.
    #[must_use]
    pub fn sequential() -> Self {
        Self {
            parallel: false,
            ..Self::default()
        }
    }

    /// Sets the risk-free rate (percentage points).
    #[must_use]
    pub fn with_risk_free_rate(mut self, rate: f64) -> Self {
        self.risk_free_rate = rate;
        self
    }

    /// Sets the rounding rule.
    #[must_use]
    pub fn with_rounding(mut self, rule: RoundingRule) -> Self {
        self.rounding = rule;
        self
    }

    /// Sets the alignment policy.
    #[must_use]
    pub fn with_alignment(mut self, policy: AlignmentPolicy) -> Self {
        self.alignment = policy;
        self
    }

    /// Sets whether to use parallel processing.
    #[must_use]
    pub fn with_parallel(mut self, enabled: bool) -> Self {
        self.parallel = enabled;
        self
    }

    /// Sets the threshold for parallel processing.
    #[must_use]
    pub fn with_threshold(mut self, threshold: usize) -> Self {
        self.parallel_threshold = threshold;
        self
    }

    /// Returns true if parallel processing should be used for the given count.
    #[must_use]
    pub fn should_parallelize(&self, count: usize) -> bool {
        cfg!(feature = "parallel") && self.parallel && count >= self.parallel_threshold
    }

    /// Rounds a reported figure to 2 decimal places.
    #[must_use]
    pub fn round2(&self, value: f64) -> f64 {
        alphavision_core::rounding::round_dp(value, 2, self.rounding)
    }

    /// Rounds a reported figure to a whole number.
    #[must_use]
    pub fn round0(&self, value: f64) -> f64 {
        alphavision_core::rounding::round_dp(value, 0, self.rounding)
    }
}
