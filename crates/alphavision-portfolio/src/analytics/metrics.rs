//! Weighted portfolio risk metrics.

use super::normalize::normalize_weights;
use super::parallel::maybe_parallel_fold;
use crate::catalog::{resolve_selection, AssetCatalog};
use crate::types::{AnalyticsConfig, Asset, RiskMetrics, WeightMap};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Portfolio-level risk metrics.
///
/// VaR figures, returns and volatility are weighted sums of the selected
/// assets' figures. The Sharpe ratio is recomputed from the aggregated
/// returns and volatility rather than averaged. There is no portfolio
/// drawdown: drawdowns do not combine linearly.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioMetrics {
    /// Weighted parametric VaR at 95%.
    #[serde(rename = "parametricVaR95")]
    pub parametric_var95: f64,

    /// Weighted Monte Carlo VaR at 95%.
    #[serde(rename = "monteCarloVaR95")]
    pub monte_carlo_var95: f64,

    /// Weighted deep-model VaR at 95%.
    #[serde(rename = "deepVaR95")]
    pub deep_var95: f64,

    /// Weighted parametric VaR at 99%.
    #[serde(rename = "parametricVaR99")]
    pub parametric_var99: f64,

    /// Weighted Monte Carlo VaR at 99%.
    #[serde(rename = "monteCarloVaR99")]
    pub monte_carlo_var99: f64,

    /// Weighted deep-model VaR at 99%.
    #[serde(rename = "deepVaR99")]
    pub deep_var99: f64,

    /// Sharpe ratio of the aggregated returns and volatility.
    pub sharpe_ratio: f64,

    /// Weighted volatility (%).
    pub volatility: f64,

    /// Weighted return (%).
    pub returns: f64,
}

impl PortfolioMetrics {
    /// Returns the all-zero record produced for an empty selection.
    #[must_use]
    pub fn zero() -> Self {
        Self::default()
    }

    /// Returns the largest of the three 95% VaR estimates.
    #[must_use]
    pub fn worst_var95(&self) -> f64 {
        self.parametric_var95
            .max(self.monte_carlo_var95)
            .max(self.deep_var95)
    }

    /// Returns the largest of the three 99% VaR estimates.
    #[must_use]
    pub fn worst_var99(&self) -> f64 {
        self.parametric_var99
            .max(self.monte_carlo_var99)
            .max(self.deep_var99)
    }

    fn accumulate(mut self, metrics: &RiskMetrics, weight: f64) -> Self {
        self.parametric_var95 += metrics.parametric_var95 * weight;
        self.monte_carlo_var95 += metrics.monte_carlo_var95 * weight;
        self.deep_var95 += metrics.deep_var95 * weight;
        self.parametric_var99 += metrics.parametric_var99 * weight;
        self.monte_carlo_var99 += metrics.monte_carlo_var99 * weight;
        self.deep_var99 += metrics.deep_var99 * weight;
        self.returns += metrics.returns * weight;
        self.volatility += metrics.volatility * weight;
        self
    }

    fn combine(self, other: Self) -> Self {
        Self {
            parametric_var95: self.parametric_var95 + other.parametric_var95,
            monte_carlo_var95: self.monte_carlo_var95 + other.monte_carlo_var95,
            deep_var95: self.deep_var95 + other.deep_var95,
            parametric_var99: self.parametric_var99 + other.parametric_var99,
            monte_carlo_var99: self.monte_carlo_var99 + other.monte_carlo_var99,
            deep_var99: self.deep_var99 + other.deep_var99,
            sharpe_ratio: 0.0,
            volatility: self.volatility + other.volatility,
            returns: self.returns + other.returns,
        }
    }

    fn rounded(self, config: &AnalyticsConfig) -> Self {
        Self {
            parametric_var95: config.round2(self.parametric_var95),
            monte_carlo_var95: config.round2(self.monte_carlo_var95),
            deep_var95: config.round2(self.deep_var95),
            parametric_var99: config.round2(self.parametric_var99),
            monte_carlo_var99: config.round2(self.monte_carlo_var99),
            deep_var99: config.round2(self.deep_var99),
            sharpe_ratio: config.round2(self.sharpe_ratio),
            volatility: config.round2(self.volatility),
            returns: config.round2(self.returns),
        }
    }
}

/// Calculates the Sharpe ratio from a return and a volatility.
///
/// ## Formula
///
/// ```text
/// Sharpe = (returns - risk_free_rate) / volatility
/// ```
///
/// All three inputs are in percentage points. Zero volatility yields 0.
#[must_use]
pub fn sharpe_ratio(returns: f64, volatility: f64, risk_free_rate: f64) -> f64 {
    if volatility == 0.0 {
        return 0.0;
    }
    (returns - risk_free_rate) / volatility
}

/// Aggregates the selected assets' metrics into portfolio metrics.
///
/// Selected tickers are resolved against `catalog` in order; unknown tickers
/// and repeats are skipped. Weights are normalized over the whole map, then
/// each resolved asset contributes `metric * weight`. A selected asset with
/// no entry in `weights` contributes nothing. Every field is rounded to 2
/// decimals with the configured rounding rule.
///
/// An empty selection (or one where nothing resolves) yields
/// [`PortfolioMetrics::zero`].
#[must_use]
pub fn aggregate_portfolio_metrics<C, S>(
    catalog: &C,
    selected: &[S],
    weights: &WeightMap,
    config: &AnalyticsConfig,
) -> PortfolioMetrics
where
    C: AssetCatalog + ?Sized,
    S: AsRef<str>,
{
    let assets = resolve_selection(catalog, selected);
    if assets.is_empty() {
        return PortfolioMetrics::zero();
    }

    let normalized = normalize_weights(weights);
    let sums = weighted_sums(&assets, &normalized, config);

    debug!(
        "Aggregated metrics over {} of {} selected tickers",
        assets.len(),
        selected.len()
    );

    PortfolioMetrics {
        sharpe_ratio: sharpe_ratio(sums.returns, sums.volatility, config.risk_free_rate),
        ..sums
    }
    .rounded(config)
}

fn weighted_sums(
    assets: &[&Asset],
    weights: &WeightMap,
    config: &AnalyticsConfig,
) -> PortfolioMetrics {
    maybe_parallel_fold(
        assets,
        config,
        PortfolioMetrics::zero(),
        |acc, asset| acc.accumulate(&asset.metrics, weights.get(&asset.ticker)),
        PortfolioMetrics::combine,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::InMemoryCatalog;
    use approx::assert_relative_eq;

    fn asset(ticker: &str, metrics: RiskMetrics) -> Asset {
        Asset::builder()
            .ticker(ticker)
            .metrics(metrics)
            .build()
            .unwrap()
    }

    fn catalog() -> InMemoryCatalog {
        InMemoryCatalog::new(vec![
            asset(
                "AAPL",
                RiskMetrics::new()
                    .with_var95(2.0, 2.2, 2.4)
                    .with_var99(3.0, 3.3, 3.6)
                    .with_returns(12.0)
                    .with_volatility(22.0)
                    .with_sharpe_ratio(1.4)
                    .with_max_drawdown(-12.0),
            ),
            asset(
                "MSFT",
                RiskMetrics::new()
                    .with_var95(1.0, 1.2, 1.4)
                    .with_var99(2.0, 2.3, 2.6)
                    .with_returns(8.0)
                    .with_volatility(18.0)
                    .with_sharpe_ratio(0.9)
                    .with_max_drawdown(-8.0),
            ),
        ])
        .unwrap()
    }

    #[test]
    fn test_sharpe_ratio() {
        assert_relative_eq!(sharpe_ratio(10.0, 20.0, 2.0), 0.4);
        assert_relative_eq!(sharpe_ratio(1.0, 10.0, 2.0), -0.1);
        assert_eq!(sharpe_ratio(10.0, 0.0, 2.0), 0.0);
    }

    #[test]
    fn test_equal_weights() {
        let catalog = catalog();
        let weights = WeightMap::from([("AAPL", 0.5), ("MSFT", 0.5)]);
        let m = aggregate_portfolio_metrics(
            &catalog,
            &["AAPL", "MSFT"],
            &weights,
            &AnalyticsConfig::default(),
        );

        assert_eq!(m.parametric_var95, 1.5);
        assert_eq!(m.monte_carlo_var95, 1.7);
        assert_eq!(m.deep_var95, 1.9);
        assert_eq!(m.parametric_var99, 2.5);
        assert_eq!(m.monte_carlo_var99, 2.8);
        assert_eq!(m.deep_var99, 3.1);
        assert_eq!(m.returns, 10.0);
        assert_eq!(m.volatility, 20.0);
        assert_eq!(m.sharpe_ratio, 0.4);
    }

    #[test]
    fn test_sharpe_is_recomputed_not_averaged() {
        let catalog = catalog();
        let weights = WeightMap::from([("AAPL", 1.0), ("MSFT", 1.0)]);
        let m = aggregate_portfolio_metrics(
            &catalog,
            &["AAPL", "MSFT"],
            &weights,
            &AnalyticsConfig::default(),
        );
        // Averaging the per-asset ratios would give 1.15
        assert_eq!(m.sharpe_ratio, 0.4);
    }

    #[test]
    fn test_risk_free_rate_from_config() {
        let catalog = catalog();
        let weights = WeightMap::from([("AAPL", 1.0)]);
        let config = AnalyticsConfig::default().with_risk_free_rate(0.0);
        let m = aggregate_portfolio_metrics(&catalog, &["AAPL"], &weights, &config);
        assert_eq!(m.sharpe_ratio, 0.55);
    }

    #[test]
    fn test_empty_selection() {
        let catalog = catalog();
        let weights = WeightMap::from([("AAPL", 1.0)]);
        let empty: [&str; 0] = [];
        let m = aggregate_portfolio_metrics(&catalog, &empty, &weights, &AnalyticsConfig::default());
        assert_eq!(m, PortfolioMetrics::zero());
    }

    #[test]
    fn test_unknown_tickers_only() {
        let catalog = catalog();
        let weights = WeightMap::from([("NOPE", 1.0)]);
        let m =
            aggregate_portfolio_metrics(&catalog, &["NOPE"], &weights, &AnalyticsConfig::default());
        assert_eq!(m, PortfolioMetrics::zero());
    }

    #[test]
    fn test_zero_weights_give_zero_aggregate() {
        let catalog = catalog();
        let weights = WeightMap::from([("AAPL", 0.0), ("MSFT", 0.0)]);
        let m = aggregate_portfolio_metrics(
            &catalog,
            &["AAPL", "MSFT"],
            &weights,
            &AnalyticsConfig::default(),
        );
        assert_eq!(m.returns, 0.0);
        assert_eq!(m.volatility, 0.0);
        assert_eq!(m.sharpe_ratio, 0.0);
    }

    #[test]
    fn test_missing_weight_contributes_nothing() {
        let catalog = catalog();
        let weights = WeightMap::from([("AAPL", 1.0)]);
        let m = aggregate_portfolio_metrics(
            &catalog,
            &["AAPL", "MSFT"],
            &weights,
            &AnalyticsConfig::default(),
        );
        assert_eq!(m.returns, 12.0);
        assert_eq!(m.volatility, 22.0);
    }

    #[test]
    fn test_duplicate_selection_counted_once() {
        let catalog = catalog();
        let weights = WeightMap::from([("AAPL", 1.0)]);
        let m = aggregate_portfolio_metrics(
            &catalog,
            &["AAPL", "AAPL"],
            &weights,
            &AnalyticsConfig::default(),
        );
        assert_eq!(m.returns, 12.0);
    }

    #[test]
    fn test_worst_var() {
        let m = PortfolioMetrics {
            parametric_var95: 1.5,
            monte_carlo_var95: 1.9,
            deep_var95: 1.7,
            deep_var99: 3.2,
            ..PortfolioMetrics::zero()
        };
        assert_eq!(m.worst_var95(), 1.9);
        assert_eq!(m.worst_var99(), 3.2);
    }

    #[test]
    fn test_serde_field_names() {
        let json = serde_json::to_value(PortfolioMetrics::zero()).unwrap();
        for key in [
            "parametricVaR95",
            "monteCarloVaR95",
            "deepVaR95",
            "parametricVaR99",
            "monteCarloVaR99",
            "deepVaR99",
            "sharpeRatio",
            "volatility",
            "returns",
        ] {
            assert!(json.get(key).is_some(), "missing {key}");
        }
        assert!(json.get("maxDrawdown").is_none());
    }
}
