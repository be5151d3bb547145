//! Weighted portfolio price series.

use super::normalize::normalize_weights;
use super::parallel::maybe_parallel_map;
use crate::catalog::{resolve_selection, AssetCatalog};
use crate::types::{AlignmentPolicy, AnalyticsConfig, Asset, PricePoint, WeightMap};
use crate::{PortfolioError, PortfolioResult};
use alphavision_core::Date;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Number of trailing days shown by default in a chart window.
pub const DEFAULT_WINDOW_DAYS: usize = 30;

/// One day of the aggregated portfolio series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioSeriesPoint {
    /// Reference date.
    pub date: Date,

    /// Weighted price, rounded to 2 decimals.
    pub price: f64,

    /// Weighted sentiment, rounded to 2 decimals.
    pub sentiment: f64,

    /// Weighted volume, rounded to a whole number.
    pub volume: f64,
}

/// Aggregates the selected assets' histories into a weighted daily series.
///
/// Assets are resolved in selection order, not catalog order, so the first
/// resolved asset is the first selected ticker the catalog knows. Its history
/// supplies the date axis. Every other
/// resolved asset is matched to each reference date by date; what happens
/// when it has no observation for that date depends on
/// [`AnalyticsConfig::alignment`]:
///
/// - [`AlignmentPolicy::Intersect`] drops the date from the output.
/// - [`AlignmentPolicy::Strict`] fails.
///
/// Weights are normalized over the whole map. Price and sentiment are rounded
/// to 2 decimals, volume to the nearest integer.
///
/// # Errors
///
/// Returns [`PortfolioError::MisalignedHistory`] under the strict policy if a
/// resolved asset is missing a reference date.
pub fn aggregate_portfolio_series<C, S>(
    catalog: &C,
    selected: &[S],
    weights: &WeightMap,
    config: &AnalyticsConfig,
) -> PortfolioResult<Vec<PortfolioSeriesPoint>>
where
    C: AssetCatalog + ?Sized,
    S: AsRef<str>,
{
    let assets = resolve_selection(catalog, selected);
    let Some(&reference) = assets.first() else {
        return Ok(Vec::new());
    };

    let normalized = normalize_weights(weights);
    let asset_weights: Vec<f64> = assets.iter().map(|a| normalized.get(&a.ticker)).collect();

    let rows = align_rows(reference, &assets, config.alignment)?;

    debug!(
        "Aggregating {} dates across {} assets",
        rows.len(),
        assets.len()
    );

    Ok(maybe_parallel_map(&rows, config, |row| {
        weighted_point(row, &asset_weights, config)
    }))
}

/// Returns the last `days` points of a series, or all of it if shorter.
#[must_use]
pub fn trailing_window(points: &[PortfolioSeriesPoint], days: usize) -> &[PortfolioSeriesPoint] {
    &points[points.len().saturating_sub(days)..]
}

/// A reference date with one observation per resolved asset, in selection
/// order.
struct AlignedRow<'a> {
    date: Date,
    observations: Vec<&'a PricePoint>,
}

fn align_rows<'a>(
    reference: &'a Asset,
    assets: &[&'a Asset],
    policy: AlignmentPolicy,
) -> PortfolioResult<Vec<AlignedRow<'a>>> {
    let mut rows = Vec::with_capacity(reference.history_len());
    let mut dropped = 0usize;

    'dates: for (idx, point) in reference.price_history.iter().enumerate() {
        let mut observations = Vec::with_capacity(assets.len());

        for &asset in assets {
            match observation_at(asset, idx, point.date) {
                Some(obs) => observations.push(obs),
                None => match policy {
                    AlignmentPolicy::Strict => {
                        return Err(PortfolioError::misaligned(&asset.ticker, point.date));
                    }
                    AlignmentPolicy::Intersect => {
                        dropped += 1;
                        continue 'dates;
                    }
                },
            }
        }

        rows.push(AlignedRow {
            date: point.date,
            observations,
        });
    }

    if dropped > 0 {
        warn!(
            "Dropped {} of {} reference dates not covered by every selected asset",
            dropped,
            reference.history_len()
        );
    }

    Ok(rows)
}

/// Looks up `asset`'s observation for `date`, trying position `idx` first
/// since catalogs usually share one calendar.
fn observation_at(asset: &Asset, idx: usize, date: Date) -> Option<&PricePoint> {
    match asset.price_history.get(idx) {
        Some(point) if point.date == date => Some(point),
        _ => asset.observation_on(date),
    }
}

fn weighted_point(
    row: &AlignedRow<'_>,
    weights: &[f64],
    config: &AnalyticsConfig,
) -> PortfolioSeriesPoint {
    let (price, sentiment, volume) = row.observations.iter().zip(weights).fold(
        (0.0, 0.0, 0.0),
        |(price, sentiment, volume), (obs, w)| {
            (
                price + obs.price * w,
                sentiment + obs.sentiment * w,
                volume + obs.volume * w,
            )
        },
    );

    PortfolioSeriesPoint {
        date: row.date,
        price: config.round2(price),
        sentiment: config.round2(sentiment),
        volume: config.round0(volume),
    }
}
