//! Domain types for portfolio analytics.
//!
//! This module provides type-safe representations of portfolio concepts:
//!
//! - [`Asset`]: A catalog entry with daily history and pre-calculated metrics
//! - [`PricePoint`]: One day's price, sentiment and volume
//! - [`RiskMetrics`]: Per-asset VaR, Sharpe, volatility, return and drawdown
//! - [`WeightMap`]: Sparse ticker -> weight mapping
//! - [`AnalyticsConfig`]: Configuration for analytics computation

mod alignment;
mod asset;
mod config;
mod price_point;
mod risk_metrics;
mod weights;

// Re-export all types
pub use alignment::AlignmentPolicy;
pub use asset::{Asset, AssetBuilder};
pub use config::{AnalyticsConfig, DEFAULT_RISK_FREE_RATE};
pub use price_point::PricePoint;
pub use risk_metrics::RiskMetrics;
pub use weights::WeightMap;
