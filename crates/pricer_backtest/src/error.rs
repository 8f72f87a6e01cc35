//! Error types for backtesting operations.

use chrono::NaiveDate;
use pricer_core::PricingError;
use pricer_pricing::mc::McError;
use thiserror::Error;

/// Backtesting errors.
///
/// Series-shape problems get their own variants; pricing-layer failures
/// (including `InsufficientHistory` and `MissingMarketData`) pass through
/// the core [`PricingError`] taxonomy unchanged.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum BacktestError {
    /// Series contains no rows.
    #[error("empty market series")]
    EmptySeries,

    /// Dates are not strictly increasing.
    #[error("market series dates not strictly increasing at index {index}")]
    NonChronological {
        /// Index of the first out-of-order row
        index: usize,
    },

    /// Close price missing, non-finite, or non-positive.
    #[error("invalid close price at {date}: {value}")]
    InvalidClose {
        /// Date of the offending row
        date: NaiveDate,
        /// The rejected close value
        value: f64,
    },

    /// Malformed backtest parameter bundle.
    #[error("invalid backtest parameter: {name} = {value}")]
    InvalidParameter {
        /// Parameter name
        name: &'static str,
        /// The rejected value
        value: f64,
    },

    /// Pricing-layer failure (invalid input, missing data, insufficient
    /// history, numerical instability).
    #[error(transparent)]
    Pricing(#[from] PricingError),

    /// Monte Carlo configuration failure.
    #[error(transparent)]
    MonteCarlo(#[from] McError),
}
