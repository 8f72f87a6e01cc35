//! Boundary I/O for the chooser-rust workspace.
//!
//! Loads the processed daily feature table from CSV into a validated
//! `pricer_backtest::MarketSeries`, optionally deriving the feature
//! columns (rolling volatility, dividend-yield proxy, sentiment proxy)
//! that the upstream pipeline may not have materialised.
//!
//! All I/O happens here, before the pricing core is invoked; the core
//! itself never touches the filesystem.

mod csv_loader;
mod error;
pub mod features;

pub use csv_loader::{load_series, load_series_enriched};
pub use error::LoaderError;
