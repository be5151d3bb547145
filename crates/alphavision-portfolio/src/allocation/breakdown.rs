//! Per-ticker allocation percentages.

use crate::analytics::normalize_weights;
use crate::catalog::AssetCatalog;
use crate::types::WeightMap;
use alphavision_core::rounding::round2;
use serde::{Deserialize, Serialize};

/// One selected ticker's share of the portfolio.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AllocationSlice {
    /// Ticker as selected.
    pub ticker: String,

    /// Display name, if the ticker is in the catalog.
    pub name: Option<String>,

    /// Normalized weight as a percentage (0-100), 2 decimals.
    pub weight_pct: f64,
}

/// Lists each selected ticker with its normalized weight in percent.
///
/// Every selected ticker appears once, in selection order, including tickers
/// the catalog does not know (with no name).
#[must_use]
pub fn allocation_breakdown<C, S>(
    catalog: &C,
    selected: &[S],
    weights: &WeightMap,
) -> Vec<AllocationSlice>
where
    C: AssetCatalog + ?Sized,
    S: AsRef<str>,
{
    let normalized = normalize_weights(weights);
    let mut slices: Vec<AllocationSlice> = Vec::with_capacity(selected.len());

    for ticker in selected {
        let ticker = ticker.as_ref();
        if slices.iter().any(|s| s.ticker == ticker) {
            continue;
        }
        slices.push(AllocationSlice {
            ticker: ticker.to_string(),
            name: catalog.get(ticker).map(|a| a.name.clone()),
            weight_pct: round2(normalized.get(ticker) * 100.0),
        });
    }

    slices
}
