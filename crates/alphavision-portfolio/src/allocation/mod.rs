//! Portfolio allocation editing.
//!
//! An [`Allocation`] pairs an ordered ticker selection with its weights and
//! keeps them consistent as assets are added, removed or reweighted:
//!
//! - selecting or deselecting resets the selected tickers to equal weight
//! - setting one weight rescales the others so the map sums to 1
//!
//! The aggregators do not require either property; they normalize whatever
//! map they are given.

mod breakdown;

pub use breakdown::{allocation_breakdown, AllocationSlice};

use crate::analytics::{
    aggregate_portfolio_metrics, aggregate_portfolio_series, PortfolioMetrics,
    PortfolioSeriesPoint,
};
use crate::catalog::AssetCatalog;
use crate::types::{AnalyticsConfig, WeightMap};
use crate::{PortfolioError, PortfolioResult};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// An ordered selection of tickers with weights.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Allocation {
    selected: Vec<String>,
    weights: WeightMap,
}

impl Allocation {
    /// Creates an empty allocation.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an allocation with each ticker at weight `1/n`.
    ///
    /// Repeated tickers are kept once.
    #[must_use]
    pub fn equal_weight<S: AsRef<str>>(tickers: &[S]) -> Self {
        let mut selected: Vec<String> = Vec::with_capacity(tickers.len());
        for ticker in tickers {
            let ticker = ticker.as_ref();
            if !selected.iter().any(|t| t == ticker) {
                selected.push(ticker.to_string());
            }
        }
        let weights = WeightMap::equal_weight(&selected);
        Self { selected, weights }
    }

    /// Creates an allocation from an explicit selection and weight map.
    ///
    /// The map is kept as given; it may contain tickers outside the
    /// selection, which still count toward normalization.
    #[must_use]
    pub fn from_parts(selected: Vec<String>, weights: WeightMap) -> Self {
        Self { selected, weights }
    }

    /// Returns the selected tickers in selection order.
    #[must_use]
    pub fn selected(&self) -> &[String] {
        &self.selected
    }

    /// Returns the weight map.
    #[must_use]
    pub fn weights(&self) -> &WeightMap {
        &self.weights
    }

    /// Returns true if `ticker` is selected.
    #[must_use]
    pub fn is_selected(&self, ticker: &str) -> bool {
        self.selected.iter().any(|t| t == ticker)
    }

    /// Returns the number of selected tickers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.selected.len()
    }

    /// Returns true if nothing is selected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    /// Consumes the allocation, returning the selection and weights.
    #[must_use]
    pub fn into_parts(self) -> (Vec<String>, WeightMap) {
        (self.selected, self.weights)
    }

    /// Adds `ticker` to the selection and resets every selected ticker to
    /// weight `1/n`.
    ///
    /// Selecting an already selected ticker changes nothing.
    pub fn select(&mut self, ticker: impl Into<String>) {
        let ticker = ticker.into();
        if self.is_selected(&ticker) {
            return;
        }
        self.selected.push(ticker);
        self.reset_to_equal();
    }

    /// Removes `ticker` and its weight, then resets the remaining selected
    /// tickers to weight `1/n`.
    ///
    /// Deselecting a ticker that is not selected changes nothing.
    pub fn deselect(&mut self, ticker: &str) {
        let Some(pos) = self.selected.iter().position(|t| t == ticker) else {
            return;
        };
        self.selected.remove(pos);
        self.weights.remove(ticker);
        self.reset_to_equal();
    }

    /// Sets `ticker`'s weight and rescales every other entry in the map by
    /// `(1 - weight) / others_total`, so the map sums to 1.
    ///
    /// When the other entries sum to zero they are left as they are.
    ///
    /// # Errors
    ///
    /// Returns [`PortfolioError::InvalidWeight`] if `weight` is not finite or
    /// outside `[0, 1]`.
    pub fn set_weight(&mut self, ticker: &str, weight: f64) -> PortfolioResult<()> {
        if !weight.is_finite() || !(0.0..=1.0).contains(&weight) {
            return Err(PortfolioError::invalid_weight(ticker, weight));
        }

        let others_total: f64 = self
            .weights
            .iter()
            .filter(|(t, _)| *t != ticker)
            .map(|(_, w)| w)
            .sum();

        self.weights.set(ticker, weight);

        if others_total > 0.0 {
            let scale = (1.0 - weight) / others_total;
            for (t, w) in self.weights.iter_mut() {
                if t != ticker {
                    *w *= scale;
                }
            }
        } else {
            debug!(
                "No other weight to rescale after setting {} to {}",
                ticker, weight
            );
        }

        Ok(())
    }

    /// Aggregates this allocation's metrics.
    #[must_use]
    pub fn metrics<C>(&self, catalog: &C, config: &AnalyticsConfig) -> PortfolioMetrics
    where
        C: AssetCatalog + ?Sized,
    {
        aggregate_portfolio_metrics(catalog, &self.selected, &self.weights, config)
    }

    /// Aggregates this allocation's daily series.
    ///
    /// # Errors
    ///
    /// See [`aggregate_portfolio_series`].
    pub fn series<C>(
        &self,
        catalog: &C,
        config: &AnalyticsConfig,
    ) -> PortfolioResult<Vec<PortfolioSeriesPoint>>
    where
        C: AssetCatalog + ?Sized,
    {
        aggregate_portfolio_series(catalog, &self.selected, &self.weights, config)
    }

    fn reset_to_equal(&mut self) {
        if self.selected.is_empty() {
            return;
        }
        #[allow(clippy::cast_precision_loss)]
        let weight = 1.0 / self.selected.len() as f64;
        for ticker in &self.selected {
            self.weights.set(ticker.as_str(), weight);
        }
    }
}
