//! Sector-based portfolio bucketing.

use crate::analytics::normalize_weights;
use crate::catalog::{resolve_selection, AssetCatalog};
use crate::types::WeightMap;
use alphavision_core::rounding::round2;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Aggregated allocation for one sector.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectorBucket {
    /// Number of selected assets in this sector.
    pub count: usize,

    /// Summed normalized weight as a percentage (0-100), 2 decimals.
    pub weight_pct: f64,

    /// Tickers in this sector, in selection order.
    pub tickers: Vec<String>,
}

impl SectorBucket {
    /// Returns true if this bucket is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }
}

/// Distribution of the selected assets by sector.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectorDistribution {
    /// Buckets keyed by sector label.
    pub by_sector: BTreeMap<String, SectorBucket>,
}

impl SectorDistribution {
    /// Returns the bucket for `sector`.
    #[must_use]
    pub fn get(&self, sector: &str) -> Option<&SectorBucket> {
        self.by_sector.get(sector)
    }

    /// Returns the number of distinct sectors.
    #[must_use]
    pub fn sector_count(&self) -> usize {
        self.by_sector.len()
    }

    /// Returns sectors sorted by weight descending, ties by name.
    #[must_use]
    pub fn sorted_by_weight(&self) -> Vec<(&str, &SectorBucket)> {
        let mut result: Vec<_> = self
            .by_sector
            .iter()
            .map(|(s, b)| (s.as_str(), b))
            .collect();
        result.sort_by(|a, b| {
            b.1.weight_pct
                .partial_cmp(&a.1.weight_pct)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        result
    }
}

/// Buckets the selected assets by sector.
///
/// Weights are normalized over the whole map. Tickers the catalog does not
/// know are left out.
#[must_use]
pub fn bucket_by_sector<C, S>(catalog: &C, selected: &[S], weights: &WeightMap) -> SectorDistribution
where
    C: AssetCatalog + ?Sized,
    S: AsRef<str>,
{
    let assets = resolve_selection(catalog, selected);
    if assets.is_empty() {
        return SectorDistribution::default();
    }

    let normalized = normalize_weights(weights);
    let mut raw: BTreeMap<String, (SectorBucket, f64)> = BTreeMap::new();

    for asset in assets {
        let (bucket, weight) = raw.entry(asset.sector.clone()).or_default();
        bucket.count += 1;
        bucket.tickers.push(asset.ticker.clone());
        *weight += normalized.get(&asset.ticker);
    }

    let by_sector = raw
        .into_iter()
        .map(|(sector, (mut bucket, weight))| {
            bucket.weight_pct = round2(weight * 100.0);
            (sector, bucket)
        })
        .collect();

    SectorDistribution { by_sector }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::InMemoryCatalog;
    use crate::types::Asset;

    fn asset(ticker: &str, sector: &str) -> Asset {
        Asset::builder()
            .ticker(ticker)
            .sector(sector)
            .build()
            .unwrap()
    }

    fn catalog() -> InMemoryCatalog {
        InMemoryCatalog::new(vec![
            asset("AAPL", "Technology"),
            asset("MSFT", "Technology"),
            asset("JPM", "Financial Services"),
            asset("XOM", "Energy"),
        ])
        .unwrap()
    }

    #[test]
    fn test_bucket_by_sector() {
        let weights = WeightMap::from([("AAPL", 0.3), ("MSFT", 0.3), ("JPM", 0.4)]);
        let dist = bucket_by_sector(&catalog(), &["AAPL", "JPM", "MSFT"], &weights);

        assert_eq!(dist.sector_count(), 2);
        let tech = dist.get("Technology").unwrap();
        assert_eq!(tech.count, 2);
        assert_eq!(tech.weight_pct, 60.0);
        assert_eq!(tech.tickers, vec!["AAPL", "MSFT"]);
        assert_eq!(dist.get("Financial Services").unwrap().weight_pct, 40.0);
        assert!(dist.get("Energy").is_none());
    }

    #[test]
    fn test_sorted_by_weight() {
        let weights = WeightMap::from([("AAPL", 0.1), ("JPM", 0.2), ("XOM", 0.7)]);
        let dist = bucket_by_sector(&catalog(), &["AAPL", "JPM", "XOM"], &weights);
        let order: Vec<&str> = dist.sorted_by_weight().into_iter().map(|(s, _)| s).collect();
        assert_eq!(order, vec!["Energy", "Financial Services", "Technology"]);
    }

    #[test]
    fn test_unknown_and_empty() {
        let weights = WeightMap::from([("NOPE", 1.0)]);
        let dist = bucket_by_sector(&catalog(), &["NOPE"], &weights);
        assert_eq!(dist.sector_count(), 0);

        let empty: [&str; 0] = [];
        assert_eq!(
            bucket_by_sector(&catalog(), &empty, &weights),
            SectorDistribution::default()
        );
    }
}
