//! Conditional parallel iteration.
//!
//! Aggregations over the selected assets (and over aligned history rows) go
//! through these helpers so a single switch in [`AnalyticsConfig`] decides
//! between rayon and a plain iterator.

use crate::types::AnalyticsConfig;

/// Maps `f` over `items`, using rayon when the config and size allow it.
///
/// Output order always matches input order.
#[allow(unused_variables)]
pub fn maybe_parallel_map<T, U, F>(items: &[T], config: &AnalyticsConfig, f: F) -> Vec<U>
where
    T: Sync,
    U: Send,
    F: Fn(&T) -> U + Sync + Send,
{
    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;
        if config.should_parallelize(items.len()) {
            return items.par_iter().map(f).collect();
        }
    }

    items.iter().map(f).collect()
}

/// Folds over `items` with a combining step, using rayon when the config
/// and size allow it.
///
/// `reduce` must be associative and `identity` neutral for it; parallel
/// execution splits the input into arbitrary chunks.
///
/// # Example
///
/// ```ignore
/// let weighted_returns = maybe_parallel_fold(
///     &assets,
///     &config,
///     0.0,
///     |acc, asset| acc + asset.metrics.returns * weights.get(&asset.ticker),
///     |a, b| a + b,
/// );
/// ```
#[allow(unused_variables)]
pub fn maybe_parallel_fold<T, U, F, R>(
    items: &[T],
    config: &AnalyticsConfig,
    identity: U,
    fold: F,
    reduce: R,
) -> U
where
    T: Sync,
    U: Send + Sync + Clone,
    F: Fn(U, &T) -> U + Sync + Send,
    R: Fn(U, U) -> U + Sync + Send,
{
    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;
        if config.should_parallelize(items.len()) {
            return items
                .par_iter()
                .fold(|| identity.clone(), &fold)
                .reduce(|| identity.clone(), reduce);
        }
    }

    items.iter().fold(identity, fold)
}
