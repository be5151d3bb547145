//! TOML analytics configuration.
//!
//! Every key is optional; missing keys take their defaults.
//!
//! ```toml
//! risk_free_rate = 4.5
//! rounding = "bankers"          # or "half_away_from_zero"
//! alignment = "strict"          # or "intersect"
//! parallel = true
//! parallel_threshold = 250
//! ```

use crate::error::{FileError, FileResult, INLINE};
use alphavision_portfolio::AnalyticsConfig;
use std::path::Path;
use tracing::info;

/// Loads an [`AnalyticsConfig`] from a TOML file.
pub fn load_config(path: impl AsRef<Path>) -> FileResult<AnalyticsConfig> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|e| FileError::io(path, e))?;
    let config: AnalyticsConfig =
        toml::from_str(&content).map_err(|e| FileError::parse(path.display().to_string(), e))?;
    info!(
        "Loaded analytics config from {} (risk-free {}%, {} alignment, {} rounding)",
        path.display(),
        config.risk_free_rate,
        config.alignment,
        config.rounding
    );
    Ok(config)
}

/// Parses an [`AnalyticsConfig`] from TOML text.
pub fn parse_config(content: &str) -> FileResult<AnalyticsConfig> {
    toml::from_str(content).map_err(|e| FileError::parse(INLINE, e))
}
