//! Error types for analytical pricing operations.

use pricer_core::PricingError;
use thiserror::Error;

/// Analytical pricing errors.
///
/// # Variants
/// - `InvalidSpot`: non-positive spot price
/// - `InvalidVolatility`: negative volatility
/// - `InvalidDividendYield`: negative dividend yield
/// - `NonFiniteInput`: NaN or infinite parameter
///
/// # Examples
/// ```
/// use pricer_models::AnalyticalError;
///
/// let err = AnalyticalError::InvalidVolatility { volatility: -0.2 };
/// assert!(format!("{}", err).contains("volatility"));
/// ```
#[derive(Debug, Clone, Error, PartialEq)]
pub enum AnalyticalError {
    /// Non-positive spot price.
    #[error("invalid spot price: S = {spot}")]
    InvalidSpot {
        /// The rejected spot value
        spot: f64,
    },

    /// Negative volatility (zero is a valid degenerate case).
    #[error("invalid volatility: sigma = {volatility}")]
    InvalidVolatility {
        /// The rejected volatility value
        volatility: f64,
    },

    /// Negative continuous dividend yield.
    #[error("invalid dividend yield: q = {dividend_yield}")]
    InvalidDividendYield {
        /// The rejected dividend yield value
        dividend_yield: f64,
    },

    /// NaN or infinite parameter.
    #[error("non-finite input: {name} = {value}")]
    NonFiniteInput {
        /// Name of the offending parameter
        name: &'static str,
        /// The rejected value
        value: f64,
    },
}

impl From<AnalyticalError> for PricingError {
    fn from(err: AnalyticalError) -> Self {
        match err {
            AnalyticalError::InvalidSpot { spot } => PricingError::InvalidInput {
                name: "spot",
                value: spot,
            },
            AnalyticalError::InvalidVolatility { volatility } => PricingError::InvalidInput {
                name: "volatility",
                value: volatility,
            },
            AnalyticalError::InvalidDividendYield { dividend_yield } => {
                PricingError::InvalidInput {
                    name: "dividend_yield",
                    value: dividend_yield,
                }
            }
            AnalyticalError::NonFiniteInput { name, value } => {
                PricingError::InvalidInput { name, value }
            }
        }
    }
}
