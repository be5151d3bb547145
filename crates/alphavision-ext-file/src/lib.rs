//! # AlphaVision Ext File
//!
//! File-based inputs for AlphaVision portfolio analytics.
//!
//! This crate provides loaders for static data:
//! - JSON asset catalog (assets with metrics and optional embedded history)
//! - CSV price histories, one file per ticker
//! - TOML analytics configuration
//!
//! Loading is synchronous and happens once at startup; the resulting
//! [`InMemoryCatalog`](alphavision_portfolio::InMemoryCatalog) is then shared
//! read-only by the aggregators.

#![warn(missing_docs)]
#![warn(clippy::all)]

mod catalog;
mod config;
mod error;
mod history;

pub use catalog::*;
pub use config::*;
pub use error::{FileError, FileResult};
pub use history::*;
