//! Causality and fixture-shape tests for the backtest core.

use chrono::{Days, NaiveDate};

use pricer_backtest::{
    partition_by, realized_proxy, run_backtest, summarise, vix_regime, BacktestParams, MarketRow,
    MarketSeries, ProxyRecord,
};
use pricer_pricing::ChooserMethod;

fn start_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2015, 1, 2).unwrap()
}

/// Synthetic trending series with full parameter columns.
fn synthetic_closes(n: usize) -> Vec<f64> {
    (0..n)
        .map(|i| 100.0 + (i as f64 * 0.07).sin() * 15.0 + i as f64 * 0.01)
        .collect()
}

fn series_from_closes(closes: &[f64]) -> MarketSeries {
    let rows = closes
        .iter()
        .enumerate()
        .map(|(i, &close)| {
            MarketRow::new(start_date() + Days::new(i as u64), close)
                .with_volatility(0.25)
                .with_rate(0.02)
                .with_dividend_yield(0.015)
                .with_vix(20.0)
                .with_sentiment(0.5)
        })
        .collect();
    MarketSeries::from_rows(rows).unwrap()
}

fn params() -> BacktestParams {
    BacktestParams {
        t1_days: 21,
        t2_days: 42,
        t1_years: 1.0 / 12.0,
        t2_years: 2.0 / 12.0,
        ..BacktestParams::new(105.0)
    }
}

#[test]
fn proxy_ignores_data_before_valuation_date() {
    // Corrupting every close strictly before t must leave the proxy at t
    // unchanged: the realized path only reads at and after t.
    let closes = synthetic_closes(120);
    let t_idx = 40;

    let baseline = realized_proxy(&series_from_closes(&closes), &params(), t_idx).unwrap();

    let mut corrupted = closes.clone();
    for value in corrupted.iter_mut().take(t_idx) {
        *value *= 5.0;
    }
    let corrupted_proxy = realized_proxy(&series_from_closes(&corrupted), &params(), t_idx).unwrap();

    assert_eq!(baseline, corrupted_proxy);
}

#[test]
fn proxy_ignores_data_beyond_maturity_offset() {
    // Corrupting everything after t + t2_days must be equally invisible.
    let closes = synthetic_closes(120);
    let t_idx = 40;
    let p = params();

    let baseline = realized_proxy(&series_from_closes(&closes), &p, t_idx).unwrap();

    let mut corrupted = closes.clone();
    for value in corrupted.iter_mut().skip(t_idx + p.t2_days + 1) {
        *value *= 5.0;
    }
    let corrupted_proxy = realized_proxy(&series_from_closes(&corrupted), &p, t_idx).unwrap();

    assert_eq!(baseline, corrupted_proxy);
}

#[test]
fn proxies_before_corruption_point_unaffected() {
    // Corrupting the series from some future index onward only disturbs
    // valuation dates whose maturity offset reaches into the corruption.
    let closes = synthetic_closes(200);
    let p = params();
    let corruption_start = 150;

    let clean = series_from_closes(&closes);
    let mut corrupted_closes = closes.clone();
    for value in corrupted_closes.iter_mut().skip(corruption_start) {
        *value *= 3.0;
    }
    let corrupted = series_from_closes(&corrupted_closes);

    for t_idx in 0..(corruption_start - p.t2_days) {
        let a = realized_proxy(&clean, &p, t_idx).unwrap();
        let b = realized_proxy(&corrupted, &p, t_idx).unwrap();
        assert_eq!(a, b, "look-ahead detected at index {}", t_idx);
    }
}

#[test]
fn backtest_sample_accounts_for_every_date() {
    let closes = synthetic_closes(150);
    let series = series_from_closes(&closes);
    let sample = run_backtest(&series, &params(), &ChooserMethod::Analytic).unwrap();

    assert_eq!(sample.records.len() + sample.skipped, series.len());
    assert_eq!(sample.skipped, params().t2_days);
}

#[test]
fn regime_fixture_shape_137_high_vol_of_1308() {
    // Mirror of the reference backtest shape: 1308 records of which 137
    // carry VIX >= 30. Partition counts must reproduce the split exactly
    // and sum back to the total.
    let base = start_date();
    let records: Vec<ProxyRecord> = (0..1308u64)
        .map(|i| ProxyRecord {
            date: base + Days::new(i),
            predicted: 25.0 + (i as f64 * 0.01).cos(),
            actual: 24.0 + (i as f64 * 0.013).sin(),
            vix: Some(if i < 137 { 42.0 } else { 17.0 }),
            sentiment: Some(0.5),
        })
        .collect();

    let overall = summarise(&records);
    assert_eq!(overall.count, 1308);

    let partitions = partition_by(&records, vix_regime(30.0));
    assert_eq!(partitions["high_vol"].count, 137);
    assert_eq!(partitions["normal_vol"].count, 1171);
    assert_eq!(
        partitions.values().map(|s| s.count).sum::<usize>(),
        overall.count
    );
}

#[test]
fn monte_carlo_backtest_is_deterministic() {
    use pricer_pricing::MonteCarloConfig;

    let closes = synthetic_closes(80);
    let series = series_from_closes(&closes);
    let config = MonteCarloConfig::builder()
        .n_paths(2_000)
        .seed(42)
        .build()
        .unwrap();
    let method = ChooserMethod::MonteCarlo(config);

    let a = run_backtest(&series, &params(), &method).unwrap();
    let b = run_backtest(&series, &params(), &method).unwrap();
    assert_eq!(a, b);
}
