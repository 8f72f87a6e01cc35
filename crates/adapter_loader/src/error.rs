//! Error types for data loading.

use pricer_backtest::BacktestError;
use thiserror::Error;

/// Data-loading errors.
#[derive(Debug, Error)]
pub enum LoaderError {
    /// Filesystem failure.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed CSV content.
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    /// Loaded rows failed series validation.
    #[error(transparent)]
    Series(#[from] BacktestError),

    /// File parsed but produced no rows.
    #[error("no rows loaded from {path}")]
    NoRows {
        /// Offending file path
        path: String,
    },
}
