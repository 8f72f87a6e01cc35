//! Realized-proxy construction and the backtest driver.
//!
//! The proxy treats history as one realized GBM draw: for a valuation date
//! t it looks up the prices that actually printed T1 and T2 trading days
//! later, applies the chooser exercise rule to them, and discounts the
//! resulting payoff back to t with the rate in force at t. Comparing the
//! model prediction at t against this proxy across many dates yields the
//! backtest sample.

use chrono::NaiveDate;
use tracing::{debug, info};

use pricer_core::{MarketSnapshot, PricingError};
use pricer_models::{decide, DecisionPolicy, OptionType};
use pricer_pricing::ChooserMethod;

use crate::error::BacktestError;
use crate::series::MarketSeries;

/// Default decision-date offset in trading days (~6 months).
pub const DEFAULT_T1_DAYS: usize = 126;

/// Default maturity offset in trading days (~12 months).
pub const DEFAULT_T2_DAYS: usize = 252;

/// Static parameter bundle for one backtest run.
///
/// Horizons are carried twice: in trading days (to index the realized
/// path) and in years (to build snapshots and discount). The fallback rate
/// is consulted only for dates whose row has none; leaving it `None` makes
/// a missing rate a hard [`PricingError::MissingMarketData`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BacktestParams {
    /// Strike price (K)
    pub strike: f64,
    /// Decision offset in trading days
    pub t1_days: usize,
    /// Maturity offset in trading days
    pub t2_days: usize,
    /// Decision horizon in years
    pub t1_years: f64,
    /// Maturity horizon in years
    pub t2_years: f64,
    /// Exercise rule used for prediction and proxy alike
    pub policy: DecisionPolicy,
    /// Rate used when a row carries none (caller-side policy)
    pub fallback_rate: Option<f64>,
    /// First valuation date (inclusive); series start when `None`
    pub start: Option<NaiveDate>,
    /// Last valuation date (inclusive); series end when `None`
    pub end: Option<NaiveDate>,
}

impl BacktestParams {
    /// Creates a bundle with the standard 126/252-day, 0.5/1.0-year
    /// horizons and the simplified rule.
    pub fn new(strike: f64) -> Self {
        Self {
            strike,
            t1_days: DEFAULT_T1_DAYS,
            t2_days: DEFAULT_T2_DAYS,
            t1_years: 0.5,
            t2_years: 1.0,
            policy: DecisionPolicy::Simplified,
            fallback_rate: None,
            start: None,
            end: None,
        }
    }

    /// Validates the bundle.
    ///
    /// # Errors
    /// `BacktestError::InvalidParameter` naming the offending field.
    pub fn validate(&self) -> Result<(), BacktestError> {
        if !self.strike.is_finite() || self.strike <= 0.0 {
            return Err(BacktestError::InvalidParameter {
                name: "strike",
                value: self.strike,
            });
        }
        if self.t1_days == 0 || self.t2_days < self.t1_days {
            return Err(BacktestError::InvalidParameter {
                name: "t2_days",
                value: self.t2_days as f64,
            });
        }
        if !self.t1_years.is_finite() || self.t1_years <= 0.0 {
            return Err(BacktestError::InvalidParameter {
                name: "t1_years",
                value: self.t1_years,
            });
        }
        if !self.t2_years.is_finite() || self.t2_years < self.t1_years {
            return Err(BacktestError::InvalidParameter {
                name: "t2_years",
                value: self.t2_years,
            });
        }
        Ok(())
    }
}

/// One row of the backtest sample.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ProxyRecord {
    /// Valuation date t
    pub date: NaiveDate,
    /// Model prediction at t
    pub predicted: f64,
    /// Realized discounted payoff proxy at t
    pub actual: f64,
    /// VIX level at t, for regime labelling
    pub vix: Option<f64>,
    /// Sentiment proxy at t, for regime labelling
    pub sentiment: Option<f64>,
}

/// Chronological backtest output plus the skip count.
#[derive(Debug, Clone, PartialEq)]
pub struct BacktestSample {
    /// One record per valuation date with full forward history
    pub records: Vec<ProxyRecord>,
    /// Dates skipped for lack of forward history (reported, not hidden)
    pub skipped: usize,
}

/// Builds the pricing snapshot for valuation index `t_idx`.
///
/// Reads the spot, volatility, rate, and dividend yield of the row at t
/// and nothing else. Missing required fields fail explicitly.
fn snapshot_at(
    series: &MarketSeries,
    params: &BacktestParams,
    t_idx: usize,
) -> Result<MarketSnapshot, BacktestError> {
    let row = series.row(t_idx);
    let snapshot = MarketSnapshot::new(
        row.close,
        params.strike,
        row.require_rate(params.fallback_rate)?,
        row.require_volatility()?,
        row.require_dividend_yield()?,
        params.t1_years,
        params.t2_years,
    )?;
    Ok(snapshot)
}

/// Computes the realized discounted payoff proxy for valuation index
/// `t_idx`.
///
/// Reads the rows at `t_idx + t1_days` and `t_idx + t2_days` (strictly
/// after t) and the discount rate at t. Under the proper rule the decision
/// additionally uses the volatility/yield parameters observed at t, never
/// anything later.
///
/// # Errors
/// - `PricingError::InsufficientHistory` when the series ends before
///   `t_idx + t2_days`
/// - `PricingError::MissingMarketData` for absent required fields at t
pub fn realized_proxy(
    series: &MarketSeries,
    params: &BacktestParams,
    t_idx: usize,
) -> Result<f64, BacktestError> {
    params.validate()?;

    let row_t = series.row(t_idx);
    let have = series.len() - 1 - t_idx;
    if have < params.t2_days {
        return Err(PricingError::InsufficientHistory {
            date: row_t.date,
            need: params.t2_days,
            have,
        }
        .into());
    }

    let s_t1 = series.row(t_idx + params.t1_days).close;
    let s_t2 = series.row(t_idx + params.t2_days).close;

    let decision = match params.policy {
        DecisionPolicy::Simplified => {
            if s_t1 > params.strike {
                OptionType::Call
            } else {
                OptionType::Put
            }
        }
        // The proper rule needs the full parameter set observed at t
        DecisionPolicy::Proper => decide(
            DecisionPolicy::Proper,
            s_t1,
            &snapshot_at(series, params, t_idx)?,
        ),
    };

    let payoff = decision.payoff(s_t2, params.strike);
    let rate = row_t.require_rate(params.fallback_rate)?;
    Ok((-rate * params.t2_years).exp() * payoff)
}

/// Runs the backtest over every in-range valuation date.
///
/// For each date with full forward history the model prediction (via
/// `method`) is paired with the realized proxy into a [`ProxyRecord`];
/// dates near the end of the series that lack forward history are skipped
/// and counted. Any other failure (missing fields, invalid parameters)
/// aborts the run; the caller decides whether to repair its data.
pub fn run_backtest(
    series: &MarketSeries,
    params: &BacktestParams,
    method: &ChooserMethod,
) -> Result<BacktestSample, BacktestError> {
    params.validate()?;

    let mut records = Vec::new();
    let mut skipped = 0usize;

    for t_idx in 0..series.len() {
        let row = series.row(t_idx);
        if params.start.is_some_and(|start| row.date < start) {
            continue;
        }
        if params.end.is_some_and(|end| row.date > end) {
            break;
        }

        let actual = match realized_proxy(series, params, t_idx) {
            Ok(value) => value,
            Err(BacktestError::Pricing(PricingError::InsufficientHistory { .. })) => {
                debug!(date = %row.date, "skipping date without forward history");
                skipped += 1;
                continue;
            }
            Err(err) => return Err(err),
        };

        let snapshot = snapshot_at(series, params, t_idx)?;
        let predicted = method.price(&snapshot)?.price;

        records.push(ProxyRecord {
            date: row.date,
            predicted,
            actual,
            vix: row.vix,
            sentiment: row.sentiment,
        });
    }

    info!(
        records = records.len(),
        skipped, "backtest sample constructed"
    );
    Ok(BacktestSample { records, skipped })
}
