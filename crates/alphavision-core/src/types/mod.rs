//! Domain-specific types shared across AlphaVision.

mod date;

pub use date::Date;
