//! Property-based tests for portfolio invariants.
//!
//! These tests verify key mathematical properties that should always hold:
//! - Normalized weights sum to 1
//! - Aggregates are invariant to weight scale
//! - A single fully weighted asset reproduces its own metrics
//! - Sector weights sum to 100%

use alphavision_portfolio::prelude::*;
use proptest::prelude::*;

// =============================================================================
// TEST DATA GENERATORS
// =============================================================================

const SECTORS: [&str; 5] = [
    "Technology",
    "Healthcare",
    "Financial Services",
    "Energy",
    "Consumer Cyclical",
];

/// Generates a catalog of `n` assets sharing a 30-day calendar.
fn generate_catalog(n: usize, seed: u64) -> InMemoryCatalog {
    let start = Date::from_ymd(2025, 1, 1).unwrap();
    let mut assets = Vec::with_capacity(n);

    for i in 0..n {
        // Use deterministic pseudo-random values based on seed and index
        let hash = simple_hash(seed, i as u64);

        let price = 20.0 + (hash % 50_000) as f64 / 100.0;
        let var95 = 1.0 + (hash % 300) as f64 / 100.0; // 1-4%
        let returns = -10.0 + (hash % 4_000) as f64 / 100.0; // -10% to 30%
        let volatility = 10.0 + (hash % 3_000) as f64 / 100.0; // 10-40%

        let history = (0..30)
            .map(|d| {
                let h = simple_hash(hash, d);
                PricePoint::new(
                    start.add_days(d as i64),
                    price * (1.0 + (h % 200) as f64 / 10_000.0),
                    ((h % 200) as f64 / 100.0) - 1.0,
                    (1_000_000 + h % 9_000_000) as f64,
                )
            })
            .collect();

        let asset = Asset::builder()
            .ticker(format!("T{i}"))
            .sector(SECTORS[hash as usize % SECTORS.len()])
            .price_history(history)
            .metrics(
                RiskMetrics::new()
                    .with_var95(var95, var95 * 1.1, var95 * 0.95)
                    .with_var99(var95 * 1.5, var95 * 1.6, var95 * 1.4)
                    .with_returns(returns)
                    .with_volatility(volatility),
            )
            .build()
            .unwrap();

        assets.push(asset);
    }

    InMemoryCatalog::new(assets).unwrap()
}

/// Generates raw (unnormalized) weights for every ticker in the catalog.
fn generate_weights(catalog: &InMemoryCatalog, seed: u64) -> WeightMap {
    catalog
        .tickers()
        .into_iter()
        .enumerate()
        .map(|(i, t)| (t, 1.0 + (simple_hash(seed, i as u64) % 1_000) as f64))
        .collect()
}

/// Simple deterministic hash for test data generation.
fn simple_hash(seed: u64, i: u64) -> u64 {
    let mut x = seed.wrapping_add(i).wrapping_mul(0x517cc1b727220a95);
    x ^= x >> 32;
    x = x.wrapping_mul(0x517cc1b727220a95);
    x ^= x >> 32;
    x
}

// =============================================================================
// PROPERTY: NORMALIZED WEIGHTS SUM TO 1
// =============================================================================

proptest! {
    #[test]
    fn prop_normalized_weights_sum_to_one(
        raw in prop::collection::vec(0.0f64..1_000.0, 1..50)
    ) {
        let weights: WeightMap = raw
            .iter()
            .enumerate()
            .map(|(i, w)| (format!("T{i}"), *w))
            .collect();
        prop_assume!(weights.total() > 0.0);

        let normalized = normalize_weights(&weights);
        prop_assert!((normalized.total() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn prop_zero_sum_weights_are_unchanged(w in -100.0f64..100.0, zeros in 0usize..10) {
        let mut weights = WeightMap::new().with("NEG", -w).with("POS", w);
        for i in 0..zeros {
            weights.set(format!("Z{i}"), 0.0);
        }

        prop_assert_eq!(normalize_weights(&weights), weights);
    }

    #[test]
    fn prop_scale_invariance(seed in 0u64..500, scale in 0.01f64..1_000.0) {
        let catalog = generate_catalog(8, seed);
        let config = AnalyticsConfig::default();
        let selected = catalog.tickers();
        let weights = generate_weights(&catalog, seed);
        let scaled: WeightMap = weights.iter().map(|(t, w)| (t, w * scale)).collect();

        let a = aggregate_portfolio_metrics(&catalog, &selected, &weights, &config);
        let b = aggregate_portfolio_metrics(&catalog, &selected, &scaled, &config);

        prop_assert!((a.returns - b.returns).abs() <= 0.01 + 1e-9);
        prop_assert!((a.volatility - b.volatility).abs() <= 0.01 + 1e-9);
        prop_assert!((a.parametric_var95 - b.parametric_var95).abs() <= 0.01 + 1e-9);
    }
}

// =============================================================================
// PROPERTY: SINGLE ASSET REPRODUCES ITS METRICS
// =============================================================================

#[test]
fn property_single_asset_identity() {
    let config = AnalyticsConfig::default();

    for seed in 0..10 {
        let catalog = generate_catalog(10, seed);
        for asset in catalog.iter() {
            let weights = WeightMap::new().with(asset.ticker.as_str(), 1.0);
            let m = aggregate_portfolio_metrics(&catalog, &[&asset.ticker], &weights, &config);

            assert_eq!(m.returns, config.round2(asset.metrics.returns));
            assert_eq!(m.volatility, config.round2(asset.metrics.volatility));
            assert_eq!(m.deep_var99, config.round2(asset.metrics.deep_var99));

            let expected_sharpe =
                (asset.metrics.returns - config.risk_free_rate) / asset.metrics.volatility;
            assert_eq!(m.sharpe_ratio, config.round2(expected_sharpe));

            let series = aggregate_portfolio_series(&catalog, &[&asset.ticker], &weights, &config)
                .unwrap();
            assert_eq!(series.len(), asset.history_len());
            for (point, obs) in series.iter().zip(&asset.price_history) {
                assert_eq!(point.date, obs.date);
                assert_eq!(point.price, config.round2(obs.price));
                assert_eq!(point.volume, config.round0(obs.volume));
            }
        }
    }
}

// =============================================================================
// PROPERTY: AGGREGATES STAY WITHIN THE CONSTITUENTS' RANGE
// =============================================================================

#[test]
fn property_aggregate_bounded_by_constituents() {
    let config = AnalyticsConfig::default();

    for seed in 0..10 {
        for size in [2, 5, 25] {
            let catalog = generate_catalog(size, seed);
            let selected = catalog.tickers();
            let weights = generate_weights(&catalog, seed);

            let m = aggregate_portfolio_metrics(&catalog, &selected, &weights, &config);
            let (lo, hi) = catalog.iter().fold((f64::MAX, f64::MIN), |(lo, hi), a| {
                (lo.min(a.metrics.returns), hi.max(a.metrics.returns))
            });

            assert!(
                m.returns >= lo - 0.005 && m.returns <= hi + 0.005,
                "Portfolio return {} outside [{}, {}] for size={}, seed={}",
                m.returns,
                lo,
                hi,
                size,
                seed
            );
        }
    }
}

// =============================================================================
// PROPERTY: SECTOR WEIGHTS SUM TO 100%
// =============================================================================

#[test]
fn property_sector_weights_sum_to_100() {
    for seed in 0..10 {
        for size in [5, 10, 25, 50] {
            let catalog = generate_catalog(size, seed);
            let selected = catalog.tickers();
            let weights = generate_weights(&catalog, seed);
            let dist = bucket_by_sector(&catalog, &selected, &weights);

            let total: f64 = dist.by_sector.values().map(|b| b.weight_pct).sum();
            let count: usize = dist.by_sector.values().map(|b| b.count).sum();

            assert!(
                (total - 100.0).abs() < 0.05,
                "Sector weights should sum to 100%, got {} for size={}, seed={}",
                total,
                size,
                seed
            );
            assert_eq!(count, size);
        }
    }
}

// =============================================================================
// PROPERTY: ALLOCATION EDITS KEEP THE MAP NORMALIZED
// =============================================================================

#[test]
fn property_allocation_edits_sum_to_one() {
    for seed in 0..20 {
        let catalog = generate_catalog(6, seed);
        let tickers = catalog.tickers();
        let mut allocation = Allocation::equal_weight(&tickers[..3]);

        for step in 0..10u64 {
            let hash = simple_hash(seed, step);
            let ticker = tickers[hash as usize % tickers.len()];
            match hash % 3 {
                0 => allocation.select(ticker),
                1 => allocation.deselect(ticker),
                _ => {
                    if allocation.is_selected(ticker) && allocation.len() > 1 {
                        let w = 0.01 + (hash % 99) as f64 / 100.0;
                        allocation.set_weight(ticker, w).unwrap();
                    }
                }
            }

            if !allocation.is_empty() {
                let total = allocation.weights().total();
                assert!(
                    (total - 1.0).abs() < 1e-9,
                    "Weights sum to {} after step {} (seed {})",
                    total,
                    step,
                    seed
                );
            }
        }
    }
}
