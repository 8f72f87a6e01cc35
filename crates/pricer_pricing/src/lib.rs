//! Monte Carlo pricing engine for the chooser-rust workspace.
//!
//! The engine is assembled from three pieces:
//!
//! 1. [`rng::PricerRng`] - seeded random number generation with
//!    deterministic sub-streams for chunked simulation
//! 2. [`mc::simulate_paths`] - two-horizon conditional GBM path generation
//! 3. [`mc::ChooserMcPricer`] - payoff evaluation, discounting, and
//!    aggregation into a [`mc::PricingResult`]
//!
//! [`ChooserMethod`] dispatches between the Monte Carlo estimator and the
//! Rubinstein closed form behind one entry point.
//!
//! # Determinism
//!
//! Everything is seeded explicitly. Path chunks are simulated on
//! independent sub-streams derived from the base seed and reduced in chunk
//! order, so a fixed configuration produces bit-identical results
//! regardless of how rayon schedules the chunks.

pub mod mc;
pub mod method;
pub mod rng;

pub use mc::{ChooserMcPricer, MonteCarloConfig, PricingResult, SimulatedPath};
pub use method::ChooserMethod;
pub use rng::PricerRng;
