//! Portfolio analytics calculations.
//!
//! All functions are pure: they take a catalog, a selection, weights and an
//! [`AnalyticsConfig`](crate::types::AnalyticsConfig), and return values
//! without touching shared state.
//!
//! - [`normalize`]: weight normalization
//! - [`metrics`]: weighted VaR, return, volatility and recomputed Sharpe
//! - [`series`]: date-aligned weighted price, sentiment and volume
//! - [`var_bands`]: price floors implied by the aggregated 95% VaR
//! - [`assessment`]: qualitative labels for metric values
//! - [`parallel`]: conditional rayon iteration

pub mod assessment;
pub mod metrics;
pub mod normalize;
pub mod parallel;
pub mod series;
pub mod var_bands;

pub use assessment::{
    assess_portfolio_metrics, assess_risk_metrics, DrawdownSeverity, MetricsAssessment,
    ReturnDirection, SharpeAssessment, VolatilityLevel,
};
pub use metrics::{aggregate_portfolio_metrics, sharpe_ratio, PortfolioMetrics};
pub use normalize::normalize_weights;
pub use parallel::{maybe_parallel_fold, maybe_parallel_map};
pub use series::{
    aggregate_portfolio_series, trailing_window, PortfolioSeriesPoint, DEFAULT_WINDOW_DAYS,
};
pub use var_bands::{calculate_var_bands, var_bands_for, VarBandPoint};
