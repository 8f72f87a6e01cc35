//! Backtest command implementation.

use tracing::info;

use pricer_backtest::summarise;

use super::{execute, print_summary_header, print_summary_row, RunArgs};
use crate::Result;

/// Run the backtest command.
pub fn run(args: &RunArgs, output: Option<&str>) -> Result<()> {
    let sample = execute(args)?;
    let summary = summarise(&sample.records);

    println!(
        "backtest: {} records, {} dates skipped (no forward history)",
        sample.records.len(),
        sample.skipped
    );
    print_summary_header();
    print_summary_row("overall", &summary);
    if summary.mape_excluded > 0 {
        println!(
            "note: {} records excluded from MAPE (proxy below epsilon)",
            summary.mape_excluded
        );
    }

    if let Some(path) = output {
        let mut writer = csv::Writer::from_path(path)?;
        for record in &sample.records {
            writer.serialize(record)?;
        }
        writer.flush()?;
        info!(path, records = sample.records.len(), "records exported");
        println!("records written to {}", path);
    }

    Ok(())
}
