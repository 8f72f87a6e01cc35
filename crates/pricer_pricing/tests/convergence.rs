//! Convergence and reference-scenario tests for the Monte Carlo engine.

use approx::assert_relative_eq;
use pricer_core::MarketSnapshot;
use pricer_models::analytical::{rubinstein, BlackScholes};
use pricer_models::DecisionPolicy;
use pricer_pricing::{ChooserMcPricer, MonteCarloConfig};

/// Huang, Wang & Wan (2021) JPM parameter set.
fn jpm_snapshot() -> MarketSnapshot {
    MarketSnapshot::new(156.70, 150.0, 0.0015, 0.282, 0.0233, 0.5, 1.0).unwrap()
}

fn price(n_paths: usize, seed: u64, policy: DecisionPolicy) -> pricer_pricing::PricingResult {
    let config = MonteCarloConfig::builder()
        .n_paths(n_paths)
        .seed(seed)
        .policy(policy)
        .build()
        .unwrap();
    ChooserMcPricer::new(config).unwrap().price(&jpm_snapshot())
}

#[test]
fn mc_converges_to_rubinstein() {
    // Under the value-maximising rule the estimator targets the closed
    // form; at 100k paths the two must agree within 2% relative.
    let analytic = rubinstein(&jpm_snapshot());
    let mc = price(100_000, 42, DecisionPolicy::Proper);
    assert!(
        (mc.price - analytic).abs() / analytic < 0.02,
        "mc = {}, analytic = {}",
        mc.price,
        analytic
    );
}

#[test]
fn standard_error_decays_as_inverse_sqrt_n() {
    // Quadrupling the path count should roughly halve the standard error.
    let se_10k = price(10_000, 42, DecisionPolicy::Simplified)
        .std_error
        .unwrap();
    let se_40k = price(40_000, 42, DecisionPolicy::Simplified)
        .std_error
        .unwrap();
    let ratio = se_10k / se_40k;
    assert!(
        (1.7..=2.3).contains(&ratio),
        "se(10k)/se(40k) = {}, expected ~2",
        ratio
    );
}

#[test]
fn jpm_scenario_reference_values() {
    // Reference figures for the JPM parameter set: MC chooser ~ 28.97,
    // Rubinstein ~ 29.13, call-exercise ratio ~ 0.524.
    let analytic = rubinstein(&jpm_snapshot());
    assert_relative_eq!(analytic, 29.13, epsilon = 0.1);

    let mc = price(10_000, 42, DecisionPolicy::Simplified);
    assert!(
        (mc.price - 28.97).abs() < 0.5,
        "mc price = {} outside 28.97 +/- 0.5",
        mc.price
    );
    assert!(
        (mc.call_ratio.unwrap() - 0.524).abs() < 0.02,
        "call ratio = {}",
        mc.call_ratio.unwrap()
    );
}

#[test]
fn chooser_dominates_call_and_sits_below_straddle() {
    let snap = jpm_snapshot();
    let bs = BlackScholes::from_snapshot(&snap);
    let call = bs.price_call(snap.strike(), snap.t2());
    let straddle = bs.price_straddle(snap.strike(), snap.t2());
    assert_relative_eq!(call, 18.69, epsilon = 0.05);
    assert_relative_eq!(straddle, 34.06, epsilon = 0.1);

    let mc = price(10_000, 42, DecisionPolicy::Simplified);
    assert!(mc.price > call);
    assert!(mc.price < straddle);

    let analytic = rubinstein(&snap);
    assert!(analytic > call);
    assert!(analytic < straddle);
}

#[test]
fn fixed_seed_reproduces_identical_results() {
    let a = price(25_000, 7, DecisionPolicy::Proper);
    let b = price(25_000, 7, DecisionPolicy::Proper);
    assert_eq!(a, b);
}

#[test]
fn call_ratio_tracks_exercise_probability() {
    // Under the simplified rule the call ratio estimates
    // P(S_T1 > K) = N(d) with d evaluated at the T1 horizon.
    let snap = jpm_snapshot();
    let sigma = snap.volatility();
    let nu = snap.rate() - snap.dividend_yield() - 0.5 * sigma * sigma;
    let d = ((snap.spot() / snap.strike()).ln() + nu * snap.t1()) / (sigma * snap.t1().sqrt());
    let expected = pricer_core::norm_cdf(d);

    let mc = price(200_000, 42, DecisionPolicy::Simplified);
    assert!(
        (mc.call_ratio.unwrap() - expected).abs() < 0.01,
        "ratio = {}, expected = {}",
        mc.call_ratio.unwrap(),
        expected
    );
}
