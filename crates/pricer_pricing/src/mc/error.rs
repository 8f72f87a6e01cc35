//! Error types for the Monte Carlo engine.

use pricer_core::PricingError;
use thiserror::Error;

/// Monte Carlo configuration and simulation errors.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum McError {
    /// Path count of 0 or above [`super::MAX_PATHS`].
    #[error("invalid path count: {0}")]
    InvalidPathCount(usize),

    /// Chunk size of 0.
    #[error("invalid chunk size: {0}")]
    InvalidChunkSize(usize),

    /// Missing or malformed configuration parameter.
    #[error("invalid parameter: {name} {reason}")]
    InvalidParameter {
        /// Parameter name
        name: &'static str,
        /// Why the value was rejected
        reason: &'static str,
    },
}

impl From<McError> for PricingError {
    fn from(err: McError) -> Self {
        match err {
            McError::InvalidPathCount(n) => PricingError::InvalidInput {
                name: "n_paths",
                value: n as f64,
            },
            McError::InvalidChunkSize(n) => PricingError::InvalidInput {
                name: "chunk_size",
                value: n as f64,
            },
            McError::InvalidParameter { name, .. } => PricingError::InvalidInput {
                name,
                value: f64::NAN,
            },
        }
    }
}
