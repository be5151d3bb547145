//! Precomputed per-asset risk and performance metrics.

use serde::{Deserialize, Serialize};

/// Pre-calculated risk metrics for an asset.
///
/// The caller provides these values; the portfolio module only combines them.
/// VaR figures are positive percentage-loss magnitudes, volatility and returns
/// are percentages, and maximum drawdown is a non-positive percentage.
/// Fields missing on deserialization default to 0.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RiskMetrics {
    // =========================================================================
    // VALUE AT RISK (95%)
    // =========================================================================
    /// Parametric (variance-covariance) VaR at 95% confidence.
    #[serde(rename = "parametricVaR95")]
    pub parametric_var95: f64,

    /// Monte Carlo VaR at 95% confidence.
    #[serde(rename = "monteCarloVaR95")]
    pub monte_carlo_var95: f64,

    /// Deep-model VaR at 95% confidence.
    #[serde(rename = "deepVaR95")]
    pub deep_var95: f64,

    // =========================================================================
    // VALUE AT RISK (99%)
    // =========================================================================
    /// Parametric VaR at 99% confidence.
    #[serde(rename = "parametricVaR99")]
    pub parametric_var99: f64,

    /// Monte Carlo VaR at 99% confidence.
    #[serde(rename = "monteCarloVaR99")]
    pub monte_carlo_var99: f64,

    /// Deep-model VaR at 99% confidence.
    #[serde(rename = "deepVaR99")]
    pub deep_var99: f64,

    // =========================================================================
    // PERFORMANCE
    // =========================================================================
    /// Sharpe ratio.
    pub sharpe_ratio: f64,

    /// Annualized volatility (%).
    pub volatility: f64,

    /// Period return (%).
    pub returns: f64,

    /// Maximum drawdown (%, <= 0).
    pub max_drawdown: f64,
}

impl RiskMetrics {
    /// Creates new zeroed metrics.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the three 95% VaR figures.
    #[must_use]
    pub fn with_var95(mut self, parametric: f64, monte_carlo: f64, deep: f64) -> Self {
        self.parametric_var95 = parametric;
        self.monte_carlo_var95 = monte_carlo;
        self.deep_var95 = deep;
        self
    }

    /// Sets the three 99% VaR figures.
    #[must_use]
    pub fn with_var99(mut self, parametric: f64, monte_carlo: f64, deep: f64) -> Self {
        self.parametric_var99 = parametric;
        self.monte_carlo_var99 = monte_carlo;
        self.deep_var99 = deep;
        self
    }

    /// Sets the Sharpe ratio.
    #[must_use]
    pub fn with_sharpe_ratio(mut self, sharpe: f64) -> Self {
        self.sharpe_ratio = sharpe;
        self
    }

    /// Sets the annualized volatility.
    #[must_use]
    pub fn with_volatility(mut self, volatility: f64) -> Self {
        self.volatility = volatility;
        self
    }

    /// Sets the period return.
    #[must_use]
    pub fn with_returns(mut self, returns: f64) -> Self {
        self.returns = returns;
        self
    }

    /// Sets the maximum drawdown.
    #[must_use]
    pub fn with_max_drawdown(mut self, drawdown: f64) -> Self {
        self.max_drawdown = drawdown;
        self
    }

    /// Returns the worst (largest) 95% VaR across the three models.
    #[must_use]
    pub fn worst_var95(&self) -> f64 {
        self.parametric_var95
            .max(self.monte_carlo_var95)
            .max(self.deep_var95)
    }

    /// Returns the worst (largest) 99% VaR across the three models.
    #[must_use]
    pub fn worst_var99(&self) -> f64 {
        self.parametric_var99
            .max(self.monte_carlo_var99)
            .max(self.deep_var99)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_pattern() {
        let metrics = RiskMetrics::new()
            .with_var95(1.8, 2.1, 1.6)
            .with_var99(3.2, 3.9, 2.8)
            .with_sharpe_ratio(1.2)
            .with_volatility(18.5)
            .with_returns(12.3)
            .with_max_drawdown(-15.2);

        assert_eq!(metrics.monte_carlo_var95, 2.1);
        assert_eq!(metrics.deep_var99, 2.8);
        assert_eq!(metrics.max_drawdown, -15.2);
        assert_eq!(metrics.worst_var95(), 2.1);
        assert_eq!(metrics.worst_var99(), 3.9);
    }

    #[test]
    fn test_serde_field_names() {
        let metrics = RiskMetrics::new().with_var95(1.0, 2.0, 3.0).with_returns(4.0);
        let json = serde_json::to_value(metrics).unwrap();
        assert_eq!(json["parametricVaR95"], 1.0);
        assert_eq!(json["monteCarloVaR95"], 2.0);
        assert_eq!(json["deepVaR95"], 3.0);
        assert_eq!(json["returns"], 4.0);
        assert!(json.get("maxDrawdown").is_some());
        assert!(json.get("sharpeRatio").is_some());
    }
}
