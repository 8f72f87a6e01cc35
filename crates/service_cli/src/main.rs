//! Chooser CLI - command-line operations for chooser option pricing
//!
//! # Commands
//!
//! - `chooser price` - price one chooser from explicit market inputs
//! - `chooser backtest` - run the realized-proxy backtest over a feature table
//! - `chooser report` - backtest plus regime-conditioned metric tables
//!
//! # Architecture
//!
//! As the service layer of the workspace, this crate wires the adapter
//! (CSV loading) into the pricer crates and formats their plain numeric
//! outputs; no pricing logic lives here.

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod error;

use commands::{MethodArg, PolicyArg, RunArgs};
pub use error::{CliError, Result};

/// Chooser option pricing and backtesting CLI
#[derive(Parser)]
#[command(name = "chooser")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Price one chooser option from explicit market inputs
    Price {
        /// Spot price (S0)
        #[arg(long)]
        spot: f64,

        /// Strike price (K)
        #[arg(short = 'k', long)]
        strike: f64,

        /// Risk-free rate, continuously compounded
        #[arg(long, default_value = "0.0015")]
        rate: f64,

        /// Annualised volatility
        #[arg(long)]
        volatility: f64,

        /// Continuous dividend yield
        #[arg(long, default_value = "0.0")]
        dividend_yield: f64,

        /// Decision horizon in years
        #[arg(long, default_value = "0.5")]
        t1: f64,

        /// Maturity horizon in years
        #[arg(long, default_value = "1.0")]
        t2: f64,

        /// Valuation method
        #[arg(long, value_enum, default_value = "analytic")]
        method: MethodArg,

        /// Number of Monte Carlo paths
        #[arg(long, default_value = "10000")]
        paths: usize,

        /// Random seed
        #[arg(long, default_value = "42")]
        seed: u64,

        /// Exercise decision rule (Monte Carlo only)
        #[arg(long, value_enum, default_value = "simplified")]
        policy: PolicyArg,
    },

    /// Run the realized-proxy backtest over a feature-table CSV
    Backtest {
        #[command(flatten)]
        run: RunArgs,

        /// Write the proxy records to this CSV path
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Backtest plus regime-conditioned metric tables
    Report {
        #[command(flatten)]
        run: RunArgs,

        /// VIX threshold separating high_vol from normal_vol
        #[arg(long, default_value = "30.0")]
        vix_threshold: f64,

        /// Sentiment threshold separating low_sentiment from normal_sentiment
        #[arg(long, default_value = "0.3")]
        sentiment_threshold: f64,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Price {
            spot,
            strike,
            rate,
            volatility,
            dividend_yield,
            t1,
            t2,
            method,
            paths,
            seed,
            policy,
        } => commands::price::run(commands::price::PriceArgs {
            spot,
            strike,
            rate,
            volatility,
            dividend_yield,
            t1,
            t2,
            method,
            paths,
            seed,
            policy,
        }),
        Commands::Backtest { run, output } => commands::backtest::run(&run, output.as_deref()),
        Commands::Report {
            run,
            vix_threshold,
            sentiment_threshold,
        } => commands::report::run(&run, vix_threshold, sentiment_threshold),
    }
}
