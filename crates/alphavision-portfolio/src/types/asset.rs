//! Catalog asset with history and precomputed metrics.

use super::{PricePoint, RiskMetrics};
use crate::{PortfolioError, PortfolioResult};
use alphavision_core::Date;
use serde::{Deserialize, Serialize};

/// An immutable catalog entry.
///
/// Carries a daily history in ascending date order and the metrics the
/// caller computed for it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Asset {
    /// Ticker, unique within a catalog.
    pub ticker: String,

    /// Display name.
    pub name: String,

    /// Sector label (e.g. "Technology").
    pub sector: String,

    /// Current price.
    pub price: f64,

    /// Market capitalization.
    pub market_cap: f64,

    /// Daily observations, ascending by date.
    pub price_history: Vec<PricePoint>,

    /// Pre-calculated metrics.
    pub metrics: RiskMetrics,
}

impl Asset {
    /// Creates a new asset builder.
    #[must_use]
    pub fn builder() -> AssetBuilder {
        AssetBuilder::new()
    }

    /// Returns the number of daily observations.
    #[must_use]
    pub fn history_len(&self) -> usize {
        self.price_history.len()
    }

    /// Returns the first and last observation dates.
    #[must_use]
    pub fn date_range(&self) -> Option<(Date, Date)> {
        match (self.price_history.first(), self.price_history.last()) {
            (Some(first), Some(last)) => Some((first.date, last.date)),
            _ => None,
        }
    }

    /// Finds the observation for `date`.
    ///
    /// The history is ascending, so this is a binary search.
    #[must_use]
    pub fn observation_on(&self, date: Date) -> Option<&PricePoint> {
        self.price_history
            .binary_search_by(|p| p.date.cmp(&date))
            .ok()
            .map(|idx| &self.price_history[idx])
    }

    /// Validates the asset.
    ///
    /// Checks for:
    /// - Non-empty ticker
    /// - Strictly ascending history dates
    pub fn validate(&self) -> PortfolioResult<()> {
        if self.ticker.trim().is_empty() {
            return Err(PortfolioError::missing_field("ticker"));
        }

        for pair in self.price_history.windows(2) {
            if pair[1].date <= pair[0].date {
                return Err(PortfolioError::invalid_asset(
                    &self.ticker,
                    format!(
                        "price history not strictly ascending at {} -> {}",
                        pair[0].date, pair[1].date
                    ),
                ));
            }
        }

        Ok(())
    }
}

/// Builder for constructing an [`Asset`].
#[derive(Debug, Clone, Default)]
pub struct AssetBuilder {
    ticker: Option<String>,
    name: Option<String>,
    sector: Option<String>,
    price: Option<f64>,
    market_cap: f64,
    price_history: Vec<PricePoint>,
    metrics: RiskMetrics,
}

impl AssetBuilder {
    /// Creates a new builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the ticker.
    #[must_use]
    pub fn ticker(mut self, ticker: impl Into<String>) -> Self {
        self.ticker = Some(ticker.into());
        self
    }

    /// Sets the display name. Defaults to the ticker.
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets the sector. Defaults to "Unclassified".
    #[must_use]
    pub fn sector(mut self, sector: impl Into<String>) -> Self {
        self.sector = Some(sector.into());
        self
    }

    /// Sets the current price. Defaults to the last observed price.
    #[must_use]
    pub fn price(mut self, price: f64) -> Self {
        self.price = Some(price);
        self
    }

    /// Sets the market capitalization.
    #[must_use]
    pub fn market_cap(mut self, market_cap: f64) -> Self {
        self.market_cap = market_cap;
        self
    }

    /// Sets the daily history (replacing any existing).
    #[must_use]
    pub fn price_history(mut self, history: Vec<PricePoint>) -> Self {
        self.price_history = history;
        self
    }

    /// Appends one daily observation.
    #[must_use]
    pub fn add_observation(mut self, point: PricePoint) -> Self {
        self.price_history.push(point);
        self
    }

    /// Sets the pre-calculated metrics.
    #[must_use]
    pub fn metrics(mut self, metrics: RiskMetrics) -> Self {
        self.metrics = metrics;
        self
    }

    /// Builds the asset.
    ///
    /// # Errors
    ///
    /// Returns an error if the ticker is missing or the history is not
    /// strictly ascending.
    pub fn build(self) -> PortfolioResult<Asset> {
        let ticker = self
            .ticker
            .ok_or_else(|| PortfolioError::missing_field("ticker"))?;

        let price = self
            .price
            .or_else(|| self.price_history.last().map(|p| p.price))
            .unwrap_or(0.0);

        let asset = Asset {
            name: self.name.unwrap_or_else(|| ticker.clone()),
            sector: self.sector.unwrap_or_else(|| "Unclassified".to_string()),
            ticker,
            price,
            market_cap: self.market_cap,
            price_history: self.price_history,
            metrics: self.metrics,
        };

        asset.validate()?;

        Ok(asset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(d: u32) -> Date {
        Date::from_ymd(2025, 1, d).unwrap()
    }

    #[test]
    fn test_basic_build() {
        let asset = Asset::builder()
            .ticker("AAPL")
            .name("Apple Inc.")
            .sector("Technology")
            .market_cap(2.9e12)
            .add_observation(PricePoint::new(day(2), 184.0, 0.1, 40_000.0))
            .add_observation(PricePoint::new(day(3), 185.92, 0.2, 42_000.0))
            .build()
            .unwrap();

        assert_eq!(asset.ticker, "AAPL");
        assert_eq!(asset.price, 185.92);
        assert_eq!(asset.history_len(), 2);
        assert_eq!(asset.date_range(), Some((day(2), day(3))));
    }

    #[test]
    fn test_defaults() {
        let asset = Asset::builder().ticker("XYZ").build().unwrap();
        assert_eq!(asset.name, "XYZ");
        assert_eq!(asset.sector, "Unclassified");
        assert_eq!(asset.price, 0.0);
        assert!(asset.date_range().is_none());
    }

    #[test]
    fn test_missing_ticker() {
        let result = Asset::builder().name("Nameless").build();
        assert!(result.unwrap_err().to_string().contains("ticker"));

        let result = Asset::builder().ticker("  ").build();
        assert!(result.is_err());
    }

    #[test]
    fn test_unordered_history_rejected() {
        let result = Asset::builder()
            .ticker("BAD")
            .add_observation(PricePoint::new(day(3), 10.0, 0.0, 1.0))
            .add_observation(PricePoint::new(day(2), 11.0, 0.0, 1.0))
            .build();
        assert!(matches!(result, Err(PortfolioError::InvalidAsset { .. })));

        let result = Asset::builder()
            .ticker("DUP")
            .add_observation(PricePoint::new(day(2), 10.0, 0.0, 1.0))
            .add_observation(PricePoint::new(day(2), 11.0, 0.0, 1.0))
            .build();
        assert!(result.is_err());
    }

    #[test]
    fn test_observation_on() {
        let asset = Asset::builder()
            .ticker("MSFT")
            .add_observation(PricePoint::new(day(2), 420.0, 0.0, 1.0))
            .add_observation(PricePoint::new(day(3), 421.0, 0.0, 1.0))
            .add_observation(PricePoint::new(day(6), 425.5, 0.0, 1.0))
            .build()
            .unwrap();

        assert_eq!(asset.observation_on(day(6)).map(|p| p.price), Some(425.5));
        assert!(asset.observation_on(day(4)).is_none());
    }
}
