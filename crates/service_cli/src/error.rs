//! CLI error type.

use thiserror::Error;

/// Errors surfaced at the command-line boundary.
#[derive(Debug, Error)]
pub enum CliError {
    /// Input file does not exist.
    #[error("file not found: {0}")]
    FileNotFound(String),

    /// Malformed command-line argument.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Data-loading failure.
    #[error(transparent)]
    Loader(#[from] adapter_loader::LoaderError),

    /// Backtest failure.
    #[error(transparent)]
    Backtest(#[from] pricer_backtest::BacktestError),

    /// Pricing failure.
    #[error(transparent)]
    Pricing(#[from] pricer_core::PricingError),

    /// Monte Carlo configuration failure.
    #[error(transparent)]
    MonteCarlo(#[from] pricer_pricing::mc::McError),

    /// Record-export failure.
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    /// Filesystem failure.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience alias used throughout the CLI.
pub type Result<T> = std::result::Result<T, CliError>;
