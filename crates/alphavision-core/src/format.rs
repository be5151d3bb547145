//! Display formatting for prices, percentages and market capitalization.

/// Formats a market capitalization with a `T`/`B`/`M`/`K` suffix.
///
/// ```rust
/// use alphavision_core::format::format_market_cap;
///
/// assert_eq!(format_market_cap(2_900_000_000_000.0), "$2.90T");
/// assert_eq!(format_market_cap(365_000_000_000.0), "$365.00B");
/// ```
#[must_use]
pub fn format_market_cap(market_cap: f64) -> String {
    const TRILLION: f64 = 1_000_000_000_000.0;
    const BILLION: f64 = 1_000_000_000.0;
    const MILLION: f64 = 1_000_000.0;

    if market_cap >= TRILLION {
        format!("${:.2}T", market_cap / TRILLION)
    } else if market_cap >= BILLION {
        format!("${:.2}B", market_cap / BILLION)
    } else if market_cap >= MILLION {
        format!("${:.2}M", market_cap / MILLION)
    } else {
        format!("${:.2}K", market_cap / 1_000.0)
    }
}

/// Formats a price with a dollar sign and two decimals.
#[must_use]
pub fn format_price(price: f64) -> String {
    format!("${price:.2}")
}

/// Formats a signed percentage. Positive values carry an explicit `+`.
#[must_use]
pub fn format_percent(value: f64) -> String {
    if value > 0.0 {
        format!("+{value:.2}%")
    } else {
        format!("{value:.2}%")
    }
}
