//! Weight normalization.

use crate::types::WeightMap;
use tracing::warn;

/// Rescales `weights` so they sum to 1.
///
/// ## Formula
///
/// ```text
/// w_i' = w_i / Σ(w_j)     over every entry in the map
/// ```
///
/// The sum runs over the whole map, including tickers that are not part of
/// the current selection. A caller that keeps stale entries for deselected
/// assets therefore dilutes the selected ones.
///
/// A map that already sums to exactly 1 is returned unchanged. A map whose
/// sum is 0 is also returned unchanged rather than divided, which yields a
/// zero aggregate downstream for all-zero maps. A map whose sum is not finite
/// is treated the same way: every entry is set to 0, so NaN and infinity
/// never reach the aggregates.
#[must_use]
pub fn normalize_weights(weights: &WeightMap) -> WeightMap {
    let total = weights.total();

    if total == 1.0 {
        return weights.clone();
    }

    if total == 0.0 {
        if !weights.is_empty() {
            warn!(
                "Weight total is 0 across {} entries, skipping normalization",
                weights.len()
            );
        }
        return weights.clone();
    }

    if !total.is_finite() {
        warn!(
            "Weight total is {} across {} entries, zeroing all weights",
            total,
            weights.len()
        );
        let mut zeroed = weights.clone();
        for value in zeroed.values_mut() {
            *value = 0.0;
        }
        return zeroed;
    }

    let mut normalized = weights.clone();
    for value in normalized.values_mut() {
        *value /= total;
    }
    normalized
}
