//! Monte Carlo simulation of the chooser option.

mod config;
mod error;
mod paths;
mod pricer;

pub use config::{MonteCarloConfig, MonteCarloConfigBuilder, MAX_PATHS};
pub use error::McError;
pub use paths::{simulate_paths, SimulatedPath};
pub use pricer::{ChooserMcPricer, PricingResult};
