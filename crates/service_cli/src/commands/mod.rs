//! CLI subcommand implementations.

pub mod backtest;
pub mod price;
pub mod report;

use chrono::NaiveDate;
use clap::{Args, ValueEnum};

use adapter_loader::load_series_enriched;
use pricer_backtest::{run_backtest, BacktestParams, BacktestSample, MetricSummary};
use pricer_models::DecisionPolicy;
use pricer_pricing::{ChooserMethod, MonteCarloConfig};

use crate::{CliError, Result};

/// Exercise decision rule, as a CLI argument.
#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum PolicyArg {
    /// Call iff S_T1 > K
    Simplified,
    /// Call iff the BSM call value at T1 beats the put value
    Proper,
}

impl From<PolicyArg> for DecisionPolicy {
    fn from(arg: PolicyArg) -> Self {
        match arg {
            PolicyArg::Simplified => DecisionPolicy::Simplified,
            PolicyArg::Proper => DecisionPolicy::Proper,
        }
    }
}

/// Valuation method, as a CLI argument.
#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum MethodArg {
    /// Rubinstein (1991) closed form
    Analytic,
    /// Monte Carlo simulation
    Mc,
}

/// Arguments shared by the `backtest` and `report` commands.
#[derive(Args, Debug)]
pub struct RunArgs {
    /// Path to the feature-table CSV
    #[arg(short, long)]
    pub data: String,

    /// Strike price (K)
    #[arg(short = 'k', long)]
    pub strike: f64,

    /// Decision offset in trading days
    #[arg(long, default_value = "126")]
    pub t1_days: usize,

    /// Maturity offset in trading days
    #[arg(long, default_value = "252")]
    pub t2_days: usize,

    /// Decision horizon in years
    #[arg(long, default_value = "0.5")]
    pub t1_years: f64,

    /// Maturity horizon in years
    #[arg(long, default_value = "1.0")]
    pub t2_years: f64,

    /// Valuation method for the prediction leg
    #[arg(long, value_enum, default_value = "analytic")]
    pub method: MethodArg,

    /// Number of Monte Carlo paths
    #[arg(long, default_value = "10000")]
    pub paths: usize,

    /// Random seed
    #[arg(long, default_value = "42")]
    pub seed: u64,

    /// Exercise decision rule for prediction and proxy alike
    #[arg(long, value_enum, default_value = "simplified")]
    pub policy: PolicyArg,

    /// Rate used for dates whose row carries none (e.g. 0.04); omitting
    /// it makes a missing rate a hard error
    #[arg(long)]
    pub fallback_rate: Option<f64>,

    /// First valuation date (YYYY-MM-DD, inclusive)
    #[arg(long)]
    pub start: Option<NaiveDate>,

    /// Last valuation date (YYYY-MM-DD, inclusive)
    #[arg(long)]
    pub end: Option<NaiveDate>,
}

impl RunArgs {
    /// Builds the backtest parameter bundle.
    pub fn params(&self) -> BacktestParams {
        BacktestParams {
            strike: self.strike,
            t1_days: self.t1_days,
            t2_days: self.t2_days,
            t1_years: self.t1_years,
            t2_years: self.t2_years,
            policy: self.policy.into(),
            fallback_rate: self.fallback_rate,
            start: self.start,
            end: self.end,
        }
    }

    /// Builds the prediction method.
    pub fn method(&self) -> Result<ChooserMethod> {
        Ok(match self.method {
            MethodArg::Analytic => ChooserMethod::Analytic,
            MethodArg::Mc => ChooserMethod::MonteCarlo(
                MonteCarloConfig::builder()
                    .n_paths(self.paths)
                    .seed(self.seed)
                    .policy(self.policy.into())
                    .build()?,
            ),
        })
    }
}

/// Loads the series and runs the backtest described by `args`.
pub fn execute(args: &RunArgs) -> Result<BacktestSample> {
    if !std::path::Path::new(&args.data).exists() {
        return Err(CliError::FileNotFound(args.data.clone()));
    }
    let series = load_series_enriched(&args.data)?;
    let sample = run_backtest(&series, &args.params(), &args.method()?)?;
    Ok(sample)
}

/// Prints one metric row of the summary table.
pub fn print_summary_row(label: &str, summary: &MetricSummary) {
    let mape = summary
        .mape
        .map(|m| format!("{:>10.4}", m))
        .unwrap_or_else(|| format!("{:>10}", "n/a"));
    println!(
        "| {:<18} | {:>7} | {:>10.4} | {:>10.4} | {} |",
        label, summary.count, summary.mae, summary.rmse, mape
    );
}

/// Prints the header of the summary table.
pub fn print_summary_header() {
    println!(
        "| {:<18} | {:>7} | {:>10} | {:>10} | {:>10} |",
        "regime", "count", "mae", "rmse", "mape"
    );
    println!("|{}|{}|{}|{}|{}|", "-".repeat(20), "-".repeat(9), "-".repeat(12), "-".repeat(12), "-".repeat(12));
}
