//! Portfolio bucketing and classification.
//!
//! Groups the selected assets by a catalog attribute and reports each
//! group's share of the normalized weights. All functions are pure.
//!
//! # Example
//!
//! ```rust,ignore
//! use alphavision_portfolio::bucketing::*;
//!
//! let by_sector = bucket_by_sector(&catalog, &selected, &weights);
//! for (sector, bucket) in by_sector.sorted_by_weight() {
//!     println!("{}: {:.2}% weight", sector, bucket.weight_pct);
//! }
//! ```

mod sector;

pub use sector::*;
