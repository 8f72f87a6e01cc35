//! Error metrics and regime-conditioned diagnostics.
//!
//! Metrics are recomputed fresh on every call from the record slice; no
//! aggregate state is kept anywhere. MAPE is undefined where the proxy is
//! (near-)zero; such records are excluded from the MAPE mean and the
//! exclusion count is surfaced, a documented instability rather than a
//! silent clamp.

use std::collections::BTreeMap;

use crate::proxy::ProxyRecord;

/// Records with |actual| below this threshold are excluded from MAPE.
pub const MAPE_EPSILON: f64 = 1e-8;

/// Aggregate error statistics over a set of [`ProxyRecord`]s.
///
/// An empty input yields `count = 0` with NaN point metrics and no MAPE:
/// empty regime partitions are data, not errors.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MetricSummary {
    /// Number of records aggregated
    pub count: usize,
    /// Mean absolute error
    pub mae: f64,
    /// Root mean squared error
    pub rmse: f64,
    /// Mean absolute percentage error (x100); `None` when every record
    /// was excluded by [`MAPE_EPSILON`]
    pub mape: Option<f64>,
    /// Records excluded from the MAPE mean
    pub mape_excluded: usize,
}

/// Computes MAE, RMSE, and MAPE over `records`.
///
/// # Examples
/// ```
/// use chrono::NaiveDate;
/// use pricer_backtest::{summarise, ProxyRecord};
///
/// let records = vec![ProxyRecord {
///     date: NaiveDate::from_ymd_opt(2021, 1, 4).unwrap(),
///     predicted: 12.0,
///     actual: 10.0,
///     vix: None,
///     sentiment: None,
/// }];
/// let summary = summarise(&records);
/// assert_eq!(summary.count, 1);
/// assert_eq!(summary.mae, 2.0);
/// assert_eq!(summary.mape, Some(20.0));
/// ```
pub fn summarise(records: &[ProxyRecord]) -> MetricSummary {
    let count = records.len();
    if count == 0 {
        return MetricSummary {
            count: 0,
            mae: f64::NAN,
            rmse: f64::NAN,
            mape: None,
            mape_excluded: 0,
        };
    }

    let n = count as f64;
    let mut abs_sum = 0.0;
    let mut sq_sum = 0.0;
    let mut pct_sum = 0.0;
    let mut pct_count = 0usize;

    for record in records {
        let err = record.predicted - record.actual;
        abs_sum += err.abs();
        sq_sum += err * err;
        if record.actual.abs() >= MAPE_EPSILON {
            pct_sum += err.abs() / record.actual.abs();
            pct_count += 1;
        }
    }

    MetricSummary {
        count,
        mae: abs_sum / n,
        rmse: (sq_sum / n).sqrt(),
        mape: (pct_count > 0).then(|| pct_sum / pct_count as f64 * 100.0),
        mape_excluded: count - pct_count,
    }
}

/// Partitions `records` by `label` and summarises each partition.
///
/// The labelling function must be total; records map to exactly one
/// partition, so the partition counts always sum to the overall count.
pub fn partition_by<F>(records: &[ProxyRecord], label: F) -> BTreeMap<&'static str, MetricSummary>
where
    F: Fn(&ProxyRecord) -> &'static str,
{
    let mut buckets: BTreeMap<&'static str, Vec<ProxyRecord>> = BTreeMap::new();
    for record in records {
        buckets.entry(label(record)).or_default().push(*record);
    }
    buckets
        .into_iter()
        .map(|(name, bucket)| (name, summarise(&bucket)))
        .collect()
}

/// Volatility-regime labeller: VIX at or above `threshold` is "high_vol".
///
/// Records without a VIX level are labelled "unlabelled" so that partition
/// counts still sum to the total.
pub fn vix_regime(threshold: f64) -> impl Fn(&ProxyRecord) -> &'static str {
    move |record| match record.vix {
        Some(vix) if vix >= threshold => "high_vol",
        Some(_) => "normal_vol",
        None => "unlabelled",
    }
}

/// Sentiment-regime labeller: sentiment at or below `threshold` is
/// "low_sentiment".
pub fn sentiment_regime(threshold: f64) -> impl Fn(&ProxyRecord) -> &'static str {
    move |record| match record.sentiment {
        Some(sentiment) if sentiment <= threshold => "low_sentiment",
        Some(_) => "normal_sentiment",
        None => "unlabelled",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use chrono::{Days, NaiveDate};

    fn record(day_offset: u64, predicted: f64, actual: f64) -> ProxyRecord {
        ProxyRecord {
            date: NaiveDate::from_ymd_opt(2021, 1, 4).unwrap() + Days::new(day_offset),
            predicted,
            actual,
            vix: None,
            sentiment: None,
        }
    }

    #[test]
    fn test_summarise_known_values() {
        // Errors: +2, -1, +3 -> MAE = 2, RMSE = sqrt(14/3)
        let records = vec![
            record(0, 12.0, 10.0),
            record(1, 9.0, 10.0),
            record(2, 13.0, 10.0),
        ];
        let summary = summarise(&records);
        assert_eq!(summary.count, 3);
        assert_relative_eq!(summary.mae, 2.0, epsilon = 1e-12);
        assert_relative_eq!(summary.rmse, (14.0_f64 / 3.0).sqrt(), epsilon = 1e-12);
        assert_relative_eq!(summary.mape.unwrap(), 20.0, epsilon = 1e-12);
        assert_eq!(summary.mape_excluded, 0);
    }

    #[test]
    fn test_summarise_empty_is_nan_not_panic() {
        let summary = summarise(&[]);
        assert_eq!(summary.count, 0);
        assert!(summary.mae.is_nan());
        assert!(summary.rmse.is_nan());
        assert_eq!(summary.mape, None);
    }

    #[test]
    fn test_mape_excludes_near_zero_actuals() {
        let records = vec![
            record(0, 12.0, 10.0),  // 20% error
            record(1, 5.0, 0.0),    // excluded: |actual| < epsilon
            record(2, 1.0, 1e-12),  // excluded
        ];
        let summary = summarise(&records);
        assert_eq!(summary.count, 3);
        assert_eq!(summary.mape_excluded, 2);
        assert_relative_eq!(summary.mape.unwrap(), 20.0, epsilon = 1e-9);
        // MAE/RMSE still cover every record
        assert_relative_eq!(summary.mae, (2.0 + 5.0 + 1.0) / 3.0, epsilon = 1e-9);
    }

    #[test]
    fn test_mape_none_when_all_excluded() {
        let summary = summarise(&[record(0, 5.0, 0.0)]);
        assert_eq!(summary.mape, None);
        assert_eq!(summary.mape_excluded, 1);
        assert_relative_eq!(summary.mae, 5.0, epsilon = 1e-12);
    }

    #[test]
    fn test_rmse_at_least_mae() {
        let records = vec![
            record(0, 12.0, 10.0),
            record(1, 8.5, 10.0),
            record(2, 17.0, 10.0),
        ];
        let summary = summarise(&records);
        assert!(summary.rmse >= summary.mae);
    }

    #[test]
    fn test_partition_counts_sum_to_total() {
        let mut records = Vec::new();
        for i in 0..10u64 {
            let mut r = record(i, 11.0, 10.0);
            r.vix = Some(if i < 3 { 35.0 } else { 20.0 });
            records.push(r);
        }

        let partitions = partition_by(&records, vix_regime(30.0));
        assert_eq!(partitions["high_vol"].count, 3);
        assert_eq!(partitions["normal_vol"].count, 7);
        let total: usize = partitions.values().map(|s| s.count).sum();
        assert_eq!(total, records.len());
    }

    #[test]
    fn test_vix_regime_threshold_inclusive() {
        let mut r = record(0, 1.0, 1.0);
        r.vix = Some(30.0);
        assert_eq!(vix_regime(30.0)(&r), "high_vol");
        r.vix = Some(29.999);
        assert_eq!(vix_regime(30.0)(&r), "normal_vol");
        r.vix = None;
        assert_eq!(vix_regime(30.0)(&r), "unlabelled");
    }

    #[test]
    fn test_sentiment_regime() {
        let mut r = record(0, 1.0, 1.0);
        r.sentiment = Some(0.25);
        assert_eq!(sentiment_regime(0.3)(&r), "low_sentiment");
        r.sentiment = Some(0.8);
        assert_eq!(sentiment_regime(0.3)(&r), "normal_sentiment");
    }

    #[test]
    fn test_empty_partition_tolerated() {
        // All records on one side of the threshold: the other side simply
        // does not appear, and querying it is the caller's concern.
        let mut records = Vec::new();
        for i in 0..4u64 {
            let mut r = record(i, 11.0, 10.0);
            r.vix = Some(15.0);
            records.push(r);
        }
        let partitions = partition_by(&records, vix_regime(30.0));
        assert!(!partitions.contains_key("high_vol"));
        assert_eq!(partitions["normal_vol"].count, 4);

        // An explicitly empty slice still summarises
        assert_eq!(summarise(&[]).count, 0);
    }

    #[test]
    fn test_summaries_recomputed_fresh() {
        let records = vec![record(0, 12.0, 10.0)];
        let first = summarise(&records);
        let second = summarise(&records);
        assert_eq!(first, second);
    }
}
