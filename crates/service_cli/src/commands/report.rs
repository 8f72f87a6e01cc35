//! Report command implementation.
//!
//! Runs the backtest and prints the overall metric table together with the
//! volatility- and sentiment-regime partitions.

use pricer_backtest::{partition_by, sentiment_regime, summarise, vix_regime};

use super::{execute, print_summary_header, print_summary_row, RunArgs};
use crate::Result;

/// Run the report command.
pub fn run(args: &RunArgs, vix_threshold: f64, sentiment_threshold: f64) -> Result<()> {
    let sample = execute(args)?;

    println!(
        "backtest: {} records, {} dates skipped (no forward history)",
        sample.records.len(),
        sample.skipped
    );

    print_summary_header();
    print_summary_row("overall", &summarise(&sample.records));

    for (label, summary) in partition_by(&sample.records, vix_regime(vix_threshold)) {
        print_summary_row(label, &summary);
    }
    for (label, summary) in partition_by(&sample.records, sentiment_regime(sentiment_threshold)) {
        print_summary_row(label, &summary);
    }

    Ok(())
}
