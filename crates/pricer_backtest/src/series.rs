//! Time-indexed market-data table.
//!
//! The series is the boundary contract with the data layer: rows arrive
//! pre-aligned and gap-filled from the loader, one per trading day, in
//! strictly increasing date order. The core performs no missing-value
//! repair: a required field absent for a date it is asked to price is an
//! explicit [`PricingError::MissingMarketData`].

use chrono::NaiveDate;
use pricer_core::PricingError;

use crate::error::BacktestError;

/// One trading day of market data.
///
/// `date` and `close` are mandatory; everything else is optional and only
/// demanded (with a typed error) by operations that need it.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MarketRow {
    /// Trading date
    pub date: NaiveDate,
    /// Close price
    pub close: f64,
    /// Intraday high
    pub high: Option<f64>,
    /// Intraday low
    pub low: Option<f64>,
    /// Traded volume
    pub volume: Option<f64>,
    /// Cash dividend paid on this date
    pub dividend: Option<f64>,
    /// Annualised volatility estimate (e.g. rolling 252-day realised)
    pub volatility: Option<f64>,
    /// Implied-volatility index level (VIX)
    pub vix: Option<f64>,
    /// Risk-free rate as a decimal (e.g. 10Y treasury)
    pub rate: Option<f64>,
    /// Continuous dividend yield (or rolling proxy)
    pub dividend_yield: Option<f64>,
    /// Sentiment proxy in [0, 1]; high VIX maps to low sentiment
    pub sentiment: Option<f64>,
}

impl MarketRow {
    /// Creates a row with only the mandatory fields set.
    pub fn new(date: NaiveDate, close: f64) -> Self {
        Self {
            date,
            close,
            high: None,
            low: None,
            volume: None,
            dividend: None,
            volatility: None,
            vix: None,
            rate: None,
            dividend_yield: None,
            sentiment: None,
        }
    }

    /// Sets the volatility estimate.
    pub fn with_volatility(mut self, volatility: f64) -> Self {
        self.volatility = Some(volatility);
        self
    }

    /// Sets the risk-free rate.
    pub fn with_rate(mut self, rate: f64) -> Self {
        self.rate = Some(rate);
        self
    }

    /// Sets the dividend yield.
    pub fn with_dividend_yield(mut self, dividend_yield: f64) -> Self {
        self.dividend_yield = Some(dividend_yield);
        self
    }

    /// Sets the VIX level.
    pub fn with_vix(mut self, vix: f64) -> Self {
        self.vix = Some(vix);
        self
    }

    /// Sets the sentiment proxy.
    pub fn with_sentiment(mut self, sentiment: f64) -> Self {
        self.sentiment = Some(sentiment);
        self
    }

    /// Demands the volatility estimate.
    ///
    /// # Errors
    /// `PricingError::MissingMarketData` when absent.
    pub fn require_volatility(&self) -> Result<f64, PricingError> {
        self.volatility.ok_or(PricingError::MissingMarketData {
            date: self.date,
            field: "volatility",
        })
    }

    /// Demands the dividend yield.
    pub fn require_dividend_yield(&self) -> Result<f64, PricingError> {
        self.dividend_yield.ok_or(PricingError::MissingMarketData {
            date: self.date,
            field: "dividend_yield",
        })
    }

    /// Demands the risk-free rate, consulting `fallback` only when the row
    /// itself carries none. Passing the fallback is a caller-side policy
    /// decision; the core never substitutes one on its own.
    pub fn require_rate(&self, fallback: Option<f64>) -> Result<f64, PricingError> {
        self.rate
            .or(fallback)
            .ok_or(PricingError::MissingMarketData {
                date: self.date,
                field: "rate",
            })
    }
}

/// Chronological, validated collection of [`MarketRow`]s.
///
/// # Examples
/// ```
/// use chrono::NaiveDate;
/// use pricer_backtest::{MarketRow, MarketSeries};
///
/// let rows = vec![
///     MarketRow::new(NaiveDate::from_ymd_opt(2021, 1, 4).unwrap(), 100.0),
///     MarketRow::new(NaiveDate::from_ymd_opt(2021, 1, 5).unwrap(), 101.5),
/// ];
/// let series = MarketSeries::from_rows(rows).unwrap();
/// assert_eq!(series.len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct MarketSeries {
    rows: Vec<MarketRow>,
}

impl MarketSeries {
    /// Builds a series, validating shape and ordering.
    ///
    /// # Errors
    /// - `BacktestError::EmptySeries` for zero rows
    /// - `BacktestError::InvalidClose` for non-finite or non-positive closes
    /// - `BacktestError::NonChronological` when dates are not strictly
    ///   increasing
    pub fn from_rows(rows: Vec<MarketRow>) -> Result<Self, BacktestError> {
        if rows.is_empty() {
            return Err(BacktestError::EmptySeries);
        }
        for (index, row) in rows.iter().enumerate() {
            if !row.close.is_finite() || row.close <= 0.0 {
                return Err(BacktestError::InvalidClose {
                    date: row.date,
                    value: row.close,
                });
            }
            if index > 0 && rows[index - 1].date >= row.date {
                return Err(BacktestError::NonChronological { index });
            }
        }
        Ok(Self { rows })
    }

    /// Number of trading days in the series.
    #[inline]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// True when the series holds no rows (unreachable after validation).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Row at position `index`.
    #[inline]
    pub fn row(&self, index: usize) -> &MarketRow {
        &self.rows[index]
    }

    /// All rows in chronological order.
    #[inline]
    pub fn rows(&self) -> &[MarketRow] {
        &self.rows
    }

    /// Position of `date`, if present.
    pub fn index_of(&self, date: NaiveDate) -> Option<usize> {
        self.rows.binary_search_by_key(&date, |row| row.date).ok()
    }
}
