//! Daily price observation.

use alphavision_core::Date;
use serde::{Deserialize, Serialize};

/// One calendar day's observation for an asset.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricePoint {
    /// Observation date.
    pub date: Date,

    /// Closing price (positive).
    pub price: f64,

    /// News sentiment score in [-1, 1].
    pub sentiment: f64,

    /// Traded volume (non-negative, integer valued).
    pub volume: f64,
}

impl PricePoint {
    /// Creates a new observation.
    #[must_use]
    pub fn new(date: Date, price: f64, sentiment: f64, volume: f64) -> Self {
        Self {
            date,
            price,
            sentiment,
            volume,
        }
    }

    /// Returns true if every field is finite and within its documented range.
    #[must_use]
    pub fn is_well_formed(&self) -> bool {
        self.price.is_finite()
            && self.price > 0.0
            && (-1.0..=1.0).contains(&self.sentiment)
            && self.volume.is_finite()
            && self.volume >= 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(d: u32) -> Date {
        Date::from_ymd(2025, 1, d).unwrap()
    }

    #[test]
    fn test_well_formed() {
        assert!(PricePoint::new(day(2), 185.92, 0.35, 45_000.0).is_well_formed());
        assert!(!PricePoint::new(day(2), 0.0, 0.0, 1.0).is_well_formed());
        assert!(!PricePoint::new(day(2), 10.0, 1.2, 1.0).is_well_formed());
        assert!(!PricePoint::new(day(2), 10.0, 0.0, -1.0).is_well_formed());
        assert!(!PricePoint::new(day(2), f64::NAN, 0.0, 1.0).is_well_formed());
    }

    #[test]
    fn test_serde_layout() {
        let json = r#"{"date":"2025-01-02","price":101.5,"sentiment":-0.25,"volume":52000}"#;
        let point: PricePoint = serde_json::from_str(json).unwrap();
        assert_eq!(point.date, day(2));
        assert_eq!(point.price, 101.5);
        assert_eq!(point.sentiment, -0.25);
        assert_eq!(point.volume, 52_000.0);
    }
}
