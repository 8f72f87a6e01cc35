//! CSV loading of the processed daily feature table.
//!
//! Expected columns (extra columns are ignored, optional ones may be
//! absent or empty):
//!
//! ```text
//! Date,Close,High,Low,Volume,Dividends,vix_close,treasury_10y,
//! vol_252d,dividend_yield_proxy,sentiment_proxy
//! ```
//!
//! `treasury_10y` is a decimal rate (0.0246, not 2.46); conversion from
//! percentage points is the data pipeline's job.

use std::path::Path;

use serde::Deserialize;
use tracing::info;

use pricer_backtest::{MarketRow, MarketSeries};

use crate::error::LoaderError;
use crate::features;

/// One CSV row as written by the preprocessing pipeline.
#[derive(Debug, Deserialize)]
struct RawRecord {
    #[serde(rename = "Date")]
    date: chrono::NaiveDate,
    #[serde(rename = "Close")]
    close: f64,
    #[serde(rename = "High", default)]
    high: Option<f64>,
    #[serde(rename = "Low", default)]
    low: Option<f64>,
    #[serde(rename = "Volume", default)]
    volume: Option<f64>,
    #[serde(rename = "Dividends", default)]
    dividends: Option<f64>,
    #[serde(rename = "vix_close", default)]
    vix_close: Option<f64>,
    #[serde(rename = "treasury_10y", default)]
    treasury_10y: Option<f64>,
    #[serde(rename = "vol_252d", default)]
    vol_252d: Option<f64>,
    #[serde(rename = "dividend_yield_proxy", default)]
    dividend_yield_proxy: Option<f64>,
    #[serde(rename = "sentiment_proxy", default)]
    sentiment_proxy: Option<f64>,
}

impl From<RawRecord> for MarketRow {
    fn from(raw: RawRecord) -> Self {
        MarketRow {
            date: raw.date,
            close: raw.close,
            high: raw.high,
            low: raw.low,
            volume: raw.volume,
            dividend: raw.dividends,
            volatility: raw.vol_252d,
            vix: raw.vix_close,
            rate: raw.treasury_10y,
            dividend_yield: raw.dividend_yield_proxy,
            sentiment: raw.sentiment_proxy,
        }
    }
}

/// Loads a feature-table CSV into a validated series.
///
/// # Errors
/// I/O and CSV parse failures, plus series validation failures
/// (non-chronological dates, bad closes).
pub fn load_series<P: AsRef<Path>>(path: P) -> Result<MarketSeries, LoaderError> {
    let path = path.as_ref();
    let mut reader = csv::Reader::from_path(path)?;

    let mut rows: Vec<MarketRow> = Vec::new();
    for record in reader.deserialize::<RawRecord>() {
        rows.push(record?.into());
    }

    if rows.is_empty() {
        return Err(LoaderError::NoRows {
            path: path.display().to_string(),
        });
    }

    info!(rows = rows.len(), path = %path.display(), "loaded feature table");
    MarketSeries::from_rows(rows).map_err(LoaderError::from)
}

/// Loads a feature-table CSV and derives any feature column the file does
/// not already carry (volatility, dividend-yield proxy, sentiment proxy).
///
/// Pre-existing values are kept untouched; only gaps are filled, and only
/// from strictly backward-looking windows.
pub fn load_series_enriched<P: AsRef<Path>>(path: P) -> Result<MarketSeries, LoaderError> {
    let path = path.as_ref();
    let mut reader = csv::Reader::from_path(path)?;

    let mut rows: Vec<MarketRow> = Vec::new();
    for record in reader.deserialize::<RawRecord>() {
        rows.push(record?.into());
    }
    if rows.is_empty() {
        return Err(LoaderError::NoRows {
            path: path.display().to_string(),
        });
    }

    enrich(&mut rows);

    info!(rows = rows.len(), path = %path.display(), "loaded and enriched feature table");
    MarketSeries::from_rows(rows).map_err(LoaderError::from)
}

/// Fills missing derived-feature fields in place.
fn enrich(rows: &mut [MarketRow]) {
    let closes: Vec<f64> = rows.iter().map(|r| r.close).collect();

    if rows.iter().any(|r| r.volatility.is_none()) {
        let vol = features::rolling_volatility(&features::log_returns(&closes), features::TRADING_DAYS);
        for (row, value) in rows.iter_mut().zip(vol) {
            if row.volatility.is_none() {
                row.volatility = value;
            }
        }
    }

    if rows.iter().any(|r| r.dividend_yield.is_none()) {
        let dividends: Vec<f64> = rows.iter().map(|r| r.dividend.unwrap_or(0.0)).collect();
        let proxy = features::dividend_yield_proxy(&dividends, &closes, features::TRADING_DAYS);
        for (row, value) in rows.iter_mut().zip(proxy) {
            if row.dividend_yield.is_none() {
                row.dividend_yield = Some(value);
            }
        }
    }

    let vix: Option<Vec<f64>> = rows.iter().map(|r| r.vix).collect();
    if let Some(vix) = vix {
        if rows.iter().any(|r| r.sentiment.is_none()) {
            let sentiment = features::sentiment_proxy(&vix, features::TRADING_DAYS);
            for (row, value) in rows.iter_mut().zip(sentiment) {
                if row.sentiment.is_none() {
                    row.sentiment = value;
                }
            }
        }
    }
}
