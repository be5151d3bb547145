//! Sparse ticker -> weight map.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Mapping from ticker to a raw portfolio weight.
///
/// Weights need not sum to 1 and are not required to be non-negative. A
/// ticker with no entry has weight 0. Entries are kept in ticker order so
/// iteration and summation are deterministic.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WeightMap(BTreeMap<String, f64>);

impl WeightMap {
    /// Creates an empty weight map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a map giving each ticker weight `1 / n`.
    ///
    /// Repeated tickers are counted once.
    #[must_use]
    pub fn equal_weight<S: AsRef<str>>(tickers: &[S]) -> Self {
        let mut map = Self::new();
        for ticker in tickers {
            map.set(ticker.as_ref(), 0.0);
        }
        let n = map.len();
        if n > 0 {
            let weight = 1.0 / n as f64;
            for value in map.0.values_mut() {
                *value = weight;
            }
        }
        map
    }

    /// Sets the weight for `ticker`, returning the previous weight if any.
    pub fn set(&mut self, ticker: impl Into<String>, weight: f64) -> Option<f64> {
        self.0.insert(ticker.into(), weight)
    }

    /// Sets the weight for `ticker` (builder style).
    #[must_use]
    pub fn with(mut self, ticker: impl Into<String>, weight: f64) -> Self {
        self.set(ticker, weight);
        self
    }

    /// Removes `ticker`, returning its weight if present.
    pub fn remove(&mut self, ticker: &str) -> Option<f64> {
        self.0.remove(ticker)
    }

    /// Returns the weight for `ticker`, or 0 if absent.
    #[must_use]
    pub fn get(&self, ticker: &str) -> f64 {
        self.0.get(ticker).copied().unwrap_or(0.0)
    }

    /// Returns true if `ticker` has an entry.
    #[must_use]
    pub fn contains(&self, ticker: &str) -> bool {
        self.0.contains_key(ticker)
    }

    /// Returns the sum of all weights in the map.
    #[must_use]
    pub fn total(&self) -> f64 {
        self.0.values().sum()
    }

    /// Returns the number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if the map has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates over `(ticker, weight)` pairs in ticker order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.0.iter().map(|(k, v)| (k.as_str(), *v))
    }

    /// Mutable access to the weights, in ticker order.
    pub(crate) fn values_mut(&mut self) -> impl Iterator<Item = &mut f64> {
        self.0.values_mut()
    }

    /// Mutable `(ticker, weight)` pairs, in ticker order.
    pub(crate) fn iter_mut(&mut self) -> impl Iterator<Item = (&str, &mut f64)> {
        self.0.iter_mut().map(|(k, v)| (k.as_str(), v))
    }

    /// Returns a normalized copy. See [`crate::analytics::normalize_weights`].
    #[must_use]
    pub fn normalized(&self) -> Self {
        crate::analytics::normalize_weights(self)
    }
}

impl<K: Into<String>> FromIterator<(K, f64)> for WeightMap {
    fn from_iter<I: IntoIterator<Item = (K, f64)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}

impl<K: Into<String>, const N: usize> From<[(K, f64); N]> for WeightMap {
    fn from(entries: [(K, f64); N]) -> Self {
        entries.into_iter().collect()
    }
}
