//! Price floors implied by the portfolio's 95% VaR.

use super::metrics::{aggregate_portfolio_metrics, PortfolioMetrics};
use super::series::{aggregate_portfolio_series, PortfolioSeriesPoint};
use crate::catalog::AssetCatalog;
use crate::types::{AnalyticsConfig, WeightMap};
use crate::PortfolioResult;
use alphavision_core::Date;
use serde::{Deserialize, Serialize};

/// A series point with the loss floor under each VaR model.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VarBandPoint {
    /// Reference date.
    pub date: Date,

    /// Aggregated portfolio price.
    pub price: f64,

    /// Price after a parametric 95% VaR loss.
    pub parametric_floor: f64,

    /// Price after a Monte Carlo 95% VaR loss.
    pub monte_carlo_floor: f64,

    /// Price after a deep-model 95% VaR loss.
    pub deep_floor: f64,
}

/// Builds VaR bands for the selected portfolio.
///
/// Each floor is `price * (1 - var95 / 100)` using the aggregated 95% VaR of
/// the corresponding model, rounded to 2 decimals.
///
/// # Errors
///
/// Propagates series alignment errors from [`aggregate_portfolio_series`].
pub fn calculate_var_bands<C, S>(
    catalog: &C,
    selected: &[S],
    weights: &WeightMap,
    config: &AnalyticsConfig,
) -> PortfolioResult<Vec<VarBandPoint>>
where
    C: AssetCatalog + ?Sized,
    S: AsRef<str>,
{
    let series = aggregate_portfolio_series(catalog, selected, weights, config)?;
    let metrics = aggregate_portfolio_metrics(catalog, selected, weights, config);
    Ok(var_bands_for(&series, &metrics, config))
}

/// Builds VaR bands from an already aggregated series and metrics.
#[must_use]
pub fn var_bands_for(
    series: &[PortfolioSeriesPoint],
    metrics: &PortfolioMetrics,
    config: &AnalyticsConfig,
) -> Vec<VarBandPoint> {
    let floor = |price: f64, var_pct: f64| config.round2(price * (1.0 - var_pct / 100.0));

    series
        .iter()
        .map(|point| VarBandPoint {
            date: point.date,
            price: point.price,
            parametric_floor: floor(point.price, metrics.parametric_var95),
            monte_carlo_floor: floor(point.price, metrics.monte_carlo_var95),
            deep_floor: floor(point.price, metrics.deep_var95),
        })
        .collect()
}
