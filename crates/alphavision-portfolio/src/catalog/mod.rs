//! Read-only asset catalog.
//!
//! The aggregators never reach for a global asset list; the caller injects a
//! catalog implementing [`AssetCatalog`]. [`InMemoryCatalog`] is the standard
//! implementation, built once at startup and shared read-only.

use crate::types::Asset;
use crate::{PortfolioError, PortfolioResult};
use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use tracing::{debug, info};

/// Lookup of assets by ticker.
///
/// Implementations must be immutable for the lifetime of the process so
/// concurrent aggregations can share them without coordination.
pub trait AssetCatalog: Send + Sync {
    /// Returns the asset for `ticker`, if present.
    fn get(&self, ticker: &str) -> Option<&Asset>;

    /// Returns every ticker in catalog order.
    fn tickers(&self) -> Vec<&str>;

    /// Returns the number of assets.
    fn len(&self) -> usize {
        self.tickers().len()
    }

    /// Returns true if the catalog has no assets.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns true if `ticker` is in the catalog.
    fn contains(&self, ticker: &str) -> bool {
        self.get(ticker).is_some()
    }
}

impl<C: AssetCatalog + ?Sized> AssetCatalog for &C {
    fn get(&self, ticker: &str) -> Option<&Asset> {
        (**self).get(ticker)
    }

    fn tickers(&self) -> Vec<&str> {
        (**self).tickers()
    }

    fn len(&self) -> usize {
        (**self).len()
    }
}

impl<C: AssetCatalog + ?Sized> AssetCatalog for Arc<C> {
    fn get(&self, ticker: &str) -> Option<&Asset> {
        (**self).get(ticker)
    }

    fn tickers(&self) -> Vec<&str> {
        (**self).tickers()
    }

    fn len(&self) -> usize {
        (**self).len()
    }
}

/// Catalog held in memory, indexed by ticker.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCatalog {
    assets: Vec<Asset>,
    index: HashMap<String, usize>,
}

impl InMemoryCatalog {
    /// Builds a catalog from `assets`, preserving their order.
    ///
    /// # Errors
    ///
    /// Returns an error if any asset fails validation or two assets share a
    /// ticker.
    pub fn new(assets: Vec<Asset>) -> PortfolioResult<Self> {
        let mut index = HashMap::with_capacity(assets.len());

        for (idx, asset) in assets.iter().enumerate() {
            asset.validate()?;
            if index.insert(asset.ticker.clone(), idx).is_some() {
                return Err(PortfolioError::DuplicateTicker {
                    ticker: asset.ticker.clone(),
                });
            }
        }

        info!("Asset catalog built with {} assets", assets.len());

        Ok(Self { assets, index })
    }

    /// Iterates over assets in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = &Asset> {
        self.assets.iter()
    }

    /// Returns the assets as a slice.
    #[must_use]
    pub fn assets(&self) -> &[Asset] {
        &self.assets
    }

    /// Consumes the catalog, returning its assets.
    #[must_use]
    pub fn into_assets(self) -> Vec<Asset> {
        self.assets
    }
}

impl AssetCatalog for InMemoryCatalog {
    fn get(&self, ticker: &str) -> Option<&Asset> {
        self.index.get(ticker).map(|&idx| &self.assets[idx])
    }

    fn tickers(&self) -> Vec<&str> {
        self.assets.iter().map(|a| a.ticker.as_str()).collect()
    }

    fn len(&self) -> usize {
        self.assets.len()
    }
}

/// Resolves a selection against the catalog.
///
/// Keeps selection order. Tickers with no catalog entry are skipped, and a
/// ticker selected more than once contributes only its first occurrence.
pub fn resolve_selection<'a, C, S>(catalog: &'a C, selected: &[S]) -> Vec<&'a Asset>
where
    C: AssetCatalog + ?Sized,
    S: AsRef<str>,
{
    let mut seen = HashSet::with_capacity(selected.len());
    let mut resolved = Vec::with_capacity(selected.len());

    for ticker in selected {
        let ticker = ticker.as_ref();
        if !seen.insert(ticker) {
            debug!("Ticker {} selected more than once, ignoring repeat", ticker);
            continue;
        }
        match catalog.get(ticker) {
            Some(asset) => resolved.push(asset),
            None => debug!("Ticker {} not in catalog, skipping", ticker),
        }
    }

    resolved
}
