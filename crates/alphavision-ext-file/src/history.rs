//! CSV price histories.
//!
//! One file per asset, with a header row:
//!
//! ```text
//! date,price,sentiment,volume
//! 2025-01-02,187.12,0.35,51234000
//! 2025-01-03,188.40,0.12,48710000
//! ```

use crate::error::{FileError, FileResult, INLINE};
use alphavision_core::Date;
use alphavision_portfolio::PricePoint;
use serde::Deserialize;
use std::io::Read;
use std::path::Path;
use tracing::{debug, warn};

/// CSV record for one day.
#[derive(Debug, Deserialize)]
struct PriceRecord {
    date: String,
    price: f64,
    sentiment: f64,
    volume: f64,
}

impl PriceRecord {
    fn into_point(self) -> FileResult<PricePoint> {
        let date = Date::parse(&self.date)?;
        Ok(PricePoint::new(date, self.price, self.sentiment, self.volume))
    }
}

/// Loads a price history from a CSV file.
///
/// Rows are returned in file order. Rows whose values fall outside their
/// documented ranges are kept and logged.
pub fn load_price_history_csv(path: impl AsRef<Path>) -> FileResult<Vec<PricePoint>> {
    let path = path.as_ref();
    let reader = csv::Reader::from_path(path).map_err(|e| FileError::io(path, e))?;
    let points = read_points(reader, &path.display().to_string())?;
    debug!("Loaded {} observations from {}", points.len(), path.display());
    Ok(points)
}

/// Parses a price history from CSV text.
pub fn parse_price_history_csv(content: &str) -> FileResult<Vec<PricePoint>> {
    read_points(csv::Reader::from_reader(content.as_bytes()), INLINE)
}

fn read_points<R: Read>(mut reader: csv::Reader<R>, label: &str) -> FileResult<Vec<PricePoint>> {
    let mut points = Vec::new();

    for result in reader.deserialize() {
        let record: PriceRecord = result.map_err(|e| FileError::parse(label, e))?;
        let point = record.into_point()?;
        if !point.is_well_formed() {
            warn!("Out-of-range observation in {} on {}", label, point.date);
        }
        points.push(point);
    }

    Ok(points)
}
