//! # AlphaVision Portfolio
//!
//! Weighted portfolio analytics over a catalog of assets.
//!
//! Each asset in the catalog carries a daily price/sentiment/volume history
//! and pre-calculated risk metrics. This crate combines a user's selection of
//! tickers and their weights into portfolio-level figures.
//!
//! ## Design Philosophy
//!
//! - **Pure functions**: Aggregators are stateless, with the catalog, selection,
//!   weights and config passed explicitly
//! - **Injected catalog**: Any [`AssetCatalog`] implementation, never a global
//! - **Date alignment**: Histories are matched by date under an [`AlignmentPolicy`]
//! - **Config-driven parallelism**: Optional rayon support with threshold-based switching
//!
//! ## Features
//!
//! - **Weight normalization**: Rescale any weight map to sum to 1
//! - **Portfolio metrics**: Weighted VaR (3 models x 2 confidence levels),
//!   returns and volatility, with the Sharpe ratio recomputed
//! - **Portfolio series**: Weighted daily price, sentiment and volume
//! - **Allocation editing**: Equal-weight select/deselect and proportional reweighting
//! - **VaR bands**: Price floors implied by the aggregated 95% VaR
//! - **Classification**: Sector bucketing and qualitative metric labels
//!
//! ## Quick Start
//!
//! ```rust
//! use alphavision_portfolio::prelude::*;
//!
//! let day = |d| Date::from_ymd(2025, 1, d).unwrap();
//! let catalog = InMemoryCatalog::new(vec![
//!     Asset::builder()
//!         .ticker("X")
//!         .add_observation(PricePoint::new(day(2), 100.0, 0.5, 1_000.0))
//!         .metrics(RiskMetrics::new().with_returns(10.0).with_volatility(20.0))
//!         .build()?,
//!     Asset::builder()
//!         .ticker("Y")
//!         .add_observation(PricePoint::new(day(2), 200.0, -0.5, 3_000.0))
//!         .metrics(RiskMetrics::new().with_returns(10.0).with_volatility(20.0))
//!         .build()?,
//! ])?;
//!
//! let allocation = Allocation::equal_weight(&["X", "Y"]);
//! let config = AnalyticsConfig::default();
//!
//! let metrics = allocation.metrics(&catalog, &config);
//! assert_eq!(metrics.sharpe_ratio, 0.4);
//!
//! let series = allocation.series(&catalog, &config)?;
//! assert_eq!(series[0].price, 150.0);
//! # Ok::<(), PortfolioError>(())
//! ```
//!
//! ## Module Overview
//!
//! - [`allocation`] - Selection and weight editing, allocation breakdown
//! - [`analytics`] - Normalization, metrics, series, VaR bands, assessments
//! - [`bucketing`] - Classification by sector
//! - [`catalog`] - Asset catalog trait and in-memory implementation
//! - [`types`] - Core types (Asset, PricePoint, RiskMetrics, WeightMap, Config)
//!
//! ## Feature Flags
//!
//! - `parallel`: Enable rayon-based parallel processing for large selections

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![allow(clippy::module_name_repetitions)]

// Module declarations
pub mod allocation;
pub mod analytics;
pub mod bucketing;
pub mod catalog;
pub mod error;
pub mod types;

// Re-export error types at crate root
pub use error::{PortfolioError, PortfolioResult};

// Re-export main types
pub use types::{
    // Config
    AlignmentPolicy,
    AnalyticsConfig,
    // Asset
    Asset,
    AssetBuilder,
    PricePoint,
    RiskMetrics,
    // Weights
    WeightMap,
    DEFAULT_RISK_FREE_RATE,
};

// Re-export catalog types
pub use catalog::{resolve_selection, AssetCatalog, InMemoryCatalog};

// Re-export allocation types and functions
pub use allocation::{allocation_breakdown, Allocation, AllocationSlice};

// Re-export analytics types and functions
pub use analytics::{
    // Metrics
    aggregate_portfolio_metrics,
    // Series
    aggregate_portfolio_series,
    // Assessment
    assess_portfolio_metrics,
    assess_risk_metrics,
    // VaR bands
    calculate_var_bands,
    // Parallel utilities
    maybe_parallel_fold,
    maybe_parallel_map,
    // Normalization
    normalize_weights,
    sharpe_ratio,
    trailing_window,
    var_bands_for,
    DrawdownSeverity,
    MetricsAssessment,
    PortfolioMetrics,
    PortfolioSeriesPoint,
    ReturnDirection,
    SharpeAssessment,
    VarBandPoint,
    VolatilityLevel,
    DEFAULT_WINDOW_DAYS,
};

// Re-export bucketing types and functions
pub use bucketing::{bucket_by_sector, SectorBucket, SectorDistribution};

/// Prelude module for convenient imports.
///
/// ```rust
/// use alphavision_portfolio::prelude::*;
/// ```
pub mod prelude {
    // Error types
    pub use crate::error::{PortfolioError, PortfolioResult};

    // Asset types
    pub use crate::types::{Asset, AssetBuilder, PricePoint, RiskMetrics};

    // Config and weights
    pub use crate::types::{AlignmentPolicy, AnalyticsConfig, WeightMap};

    // Catalog
    pub use crate::catalog::{AssetCatalog, InMemoryCatalog};

    // Allocation
    pub use crate::allocation::{allocation_breakdown, Allocation, AllocationSlice};

    // Analytics
    pub use crate::analytics::{
        aggregate_portfolio_metrics, aggregate_portfolio_series, assess_portfolio_metrics,
        assess_risk_metrics, calculate_var_bands, normalize_weights, trailing_window,
        MetricsAssessment, PortfolioMetrics, PortfolioSeriesPoint, VarBandPoint,
    };

    // Bucketing
    pub use crate::bucketing::{bucket_by_sector, SectorDistribution};

    // Re-export commonly used types from dependencies
    pub use alphavision_core::types::Date;
    pub use alphavision_core::RoundingRule;
}
