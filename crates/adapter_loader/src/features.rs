//! Derived market features.
//!
//! Rolling-window features over the daily series, mirroring the upstream
//! preprocessing pipeline. Every window is strictly backward-looking: the
//! value at index i uses observations at indices <= i only, and indices
//! that have not accumulated the minimum observation count yield `None`
//! rather than a padded value.

/// Trading days per year, used for annualisation.
pub const TRADING_DAYS: usize = 252;

/// Minimum observations before the sentiment min-max window is trusted.
const SENTIMENT_MIN_PERIODS: usize = 21;

/// Daily log returns; index 0 has no predecessor and is `None`.
pub fn log_returns(closes: &[f64]) -> Vec<Option<f64>> {
    let mut out = vec![None; closes.len()];
    for i in 1..closes.len() {
        out[i] = Some((closes[i] / closes[i - 1]).ln());
    }
    out
}

/// Rolling annualised volatility of log returns.
///
/// Sample standard deviation over the trailing `window` observations,
/// scaled by sqrt(252). Indices with fewer than `window / 2` available
/// returns yield `None` (warmup).
pub fn rolling_volatility(returns: &[Option<f64>], window: usize) -> Vec<Option<f64>> {
    let min_periods = (window / 2).max(2);
    let mut out = vec![None; returns.len()];

    for i in 0..returns.len() {
        let start = (i + 1).saturating_sub(window);
        let obs: Vec<f64> = returns[start..=i].iter().flatten().copied().collect();
        if obs.len() < min_periods {
            continue;
        }
        let n = obs.len() as f64;
        let mean = obs.iter().sum::<f64>() / n;
        let var = obs.iter().map(|r| (r - mean).powi(2)).sum::<f64>() / (n - 1.0);
        out[i] = Some(var.sqrt() * (TRADING_DAYS as f64).sqrt());
    }
    out
}

/// Rolling dividend-yield proxy: trailing `window`-day dividend sum over
/// the close, an annualised fraction when `window` = 252.
pub fn dividend_yield_proxy(dividends: &[f64], closes: &[f64], window: usize) -> Vec<f64> {
    debug_assert_eq!(dividends.len(), closes.len());
    let mut out = vec![0.0; closes.len()];
    let mut rolling_sum = 0.0;
    for i in 0..closes.len() {
        rolling_sum += dividends[i];
        if i >= window {
            rolling_sum -= dividends[i - window];
        }
        out[i] = rolling_sum / closes[i];
    }
    out
}

/// Sentiment proxy from the VIX: 1 - minmax_norm(VIX) over a trailing
/// `window`, mapped to [0, 1] with high VIX meaning low sentiment.
///
/// `None` during warmup (fewer than 21 observations) and where the
/// trailing min and max coincide (zero spread).
pub fn sentiment_proxy(vix: &[f64], window: usize) -> Vec<Option<f64>> {
    let mut out = vec![None; vix.len()];
    for i in 0..vix.len() {
        let start = (i + 1).saturating_sub(window);
        let trailing = &vix[start..=i];
        if trailing.len() < SENTIMENT_MIN_PERIODS {
            continue;
        }
        let min = trailing.iter().cloned().fold(f64::INFINITY, f64::min);
        let max = trailing.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
        let spread = max - min;
        if spread > 0.0 {
            out[i] = Some(1.0 - (vix[i] - min) / spread);
        }
    }
    out
}
