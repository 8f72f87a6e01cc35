//! Closed-form pricing under Black-Scholes-Merton assumptions.

mod black_scholes;
mod chooser;
mod error;

pub use black_scholes::BlackScholes;
pub use chooser::rubinstein;
pub use error::AnalyticalError;
