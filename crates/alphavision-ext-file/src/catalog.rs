//! JSON asset catalogs.
//!
//! The catalog file is a JSON array of assets in the dashboard's camelCase
//! layout:
//!
//! ```json
//! [
//!   {
//!     "ticker": "AAPL",
//!     "name": "Apple Inc.",
//!     "sector": "Technology",
//!     "price": 187.12,
//!     "marketCap": 2890000000000,
//!     "priceHistory": [{"date": "2025-01-02", "price": 187.12, "sentiment": 0.35, "volume": 51234000}],
//!     "metrics": {"parametricVaR95": 2.1, "returns": 12.5, "volatility": 22.0}
//!   }
//! ]
//! ```
//!
//! Only `ticker` is required. A missing `priceHistory` can be filled from a
//! directory of per-ticker CSV files with [`load_catalog_with_histories`].

use crate::error::{FileError, FileResult, INLINE};
use crate::history::load_price_history_csv;
use alphavision_portfolio::{Asset, InMemoryCatalog, PricePoint, RiskMetrics};
use serde::Deserialize;
use std::path::Path;
use tracing::{debug, info};

/// JSON record for one asset.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AssetRecord {
    ticker: String,
    name: Option<String>,
    sector: Option<String>,
    price: Option<f64>,
    #[serde(default)]
    market_cap: f64,
    #[serde(default)]
    price_history: Vec<PricePoint>,
    #[serde(default)]
    metrics: RiskMetrics,
}

impl AssetRecord {
    fn into_asset(self) -> FileResult<Asset> {
        let mut builder = Asset::builder()
            .ticker(self.ticker)
            .market_cap(self.market_cap)
            .price_history(self.price_history)
            .metrics(self.metrics);
        if let Some(name) = self.name {
            builder = builder.name(name);
        }
        if let Some(sector) = self.sector {
            builder = builder.sector(sector);
        }
        if let Some(price) = self.price {
            builder = builder.price(price);
        }
        Ok(builder.build()?)
    }
}

/// Loads an asset catalog from a JSON file.
pub fn load_catalog_json(path: impl AsRef<Path>) -> FileResult<InMemoryCatalog> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|e| FileError::io(path, e))?;
    let records = parse_records(&content, &path.display().to_string())?;
    info!("Loaded {} assets from {}", records.len(), path.display());
    build_catalog(records)
}

/// Parses an asset catalog from JSON text.
pub fn parse_catalog_json(content: &str) -> FileResult<InMemoryCatalog> {
    build_catalog(parse_records(content, INLINE)?)
}

/// Loads a JSON catalog, filling each asset's empty history from
/// `<history_dir>/<TICKER>.csv` when that file exists.
///
/// Histories embedded in the JSON take precedence over CSV files.
pub fn load_catalog_with_histories(
    catalog_path: impl AsRef<Path>,
    history_dir: impl AsRef<Path>,
) -> FileResult<InMemoryCatalog> {
    let catalog_path = catalog_path.as_ref();
    let history_dir = history_dir.as_ref();

    let content =
        std::fs::read_to_string(catalog_path).map_err(|e| FileError::io(catalog_path, e))?;
    let mut records = parse_records(&content, &catalog_path.display().to_string())?;

    for record in records.iter_mut().filter(|r| r.price_history.is_empty()) {
        let csv_path = history_dir.join(format!("{}.csv", record.ticker));
        if csv_path.is_file() {
            record.price_history = load_price_history_csv(&csv_path)?;
        } else {
            debug!("No history file for {} at {}", record.ticker, csv_path.display());
        }
    }

    info!(
        "Loaded {} assets from {} with histories from {}",
        records.len(),
        catalog_path.display(),
        history_dir.display()
    );
    build_catalog(records)
}

fn parse_records(content: &str, label: &str) -> FileResult<Vec<AssetRecord>> {
    serde_json::from_str(content).map_err(|e| FileError::parse(label, e))
}

fn build_catalog(records: Vec<AssetRecord>) -> FileResult<InMemoryCatalog> {
    let assets = records
        .into_iter()
        .map(AssetRecord::into_asset)
        .collect::<FileResult<Vec<_>>>()?;
    Ok(InMemoryCatalog::new(assets)?)
}
