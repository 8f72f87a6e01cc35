//! Core types and maths for the chooser-rust pricing workspace.
//!
//! This crate is the foundation layer: it owns the validated market-data
//! bundle ([`MarketSnapshot`]), the workspace-wide error taxonomy
//! ([`PricingError`]), and the standard normal distribution functions used
//! by every analytic formula above it.
//!
//! Nothing in this crate performs I/O or holds mutable state; all types are
//! plain values constructed once and consumed by the pricer layers.

pub mod math;
pub mod types;

pub use math::distributions::{norm_cdf, norm_pdf};
pub use types::{MarketSnapshot, PricingError};
