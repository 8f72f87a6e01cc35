//! Backtesting of chooser price predictions against a realized proxy.
//!
//! The backtest walks a historical [`MarketSeries`] date by date. For each
//! valuation date it produces a model prediction (Monte Carlo or analytic,
//! via `pricer_pricing::ChooserMethod`) and a "ground-truth" proxy: the
//! discounted payoff the chooser would actually have delivered, obtained by
//! applying the exercise rule to the realized prices at fixed trading-day
//! offsets ahead of the valuation date.
//!
//! # No look-ahead
//!
//! The proxy for date t reads parameters (rate, volatility, yields) at t
//! and prices strictly after t; nothing before t enters the proxy, and
//! predictions use only data at t. All forward reads are indexed by
//! explicit offsets from t. Dates without enough forward history are
//! skipped and counted, never padded.

mod error;
mod metrics;
mod proxy;
mod series;

pub use error::BacktestError;
pub use metrics::{
    partition_by, sentiment_regime, summarise, vix_regime, MetricSummary, MAPE_EPSILON,
};
pub use proxy::{realized_proxy, run_backtest, BacktestParams, BacktestSample, ProxyRecord};
pub use series::{MarketRow, MarketSeries};
