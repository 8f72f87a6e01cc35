//! Rubinstein (1991) closed-form valuation of the simple chooser option.
//!
//! A simple chooser gives the holder the right, at T1, to nominate the
//! contract as a European call or put with common strike K and maturity T2.
//! Rubinstein's decomposition writes its value as a T2-call plus a
//! T1-dated modified put:
//!
//! ```text
//! V = S·e^(-q·T2)·N(d1) - K·e^(-r·T2)·N(d2)
//!     - S·e^(-q·T2)·N(-y1) + K·e^(-r·T2)·N(-y2)
//! ```
//!
//! where
//!
//! ```text
//! d1 = [ln(S/K) + (r - q + σ²/2)·T2] / (σ√T2)      d2 = d1 - σ√T2
//! y1 = [ln(S/K) + (r - q)·T2 + (σ²/2)·T1] / (σ√T1)  y2 = y1 - σ√T1
//! ```
//!
//! The formula embeds the value-maximising (proper) decision at T1; the
//! Monte Carlo pricer under the simplified spot-vs-strike rule converges to
//! a slightly lower value near the strike.

use pricer_core::{norm_cdf, MarketSnapshot};

use super::black_scholes::BlackScholes;

/// Prices a simple chooser option in closed form.
///
/// Degenerate regimes are delegated to the vanilla pricer's explicit
/// branches: with σ = 0 the decision at T1 is deterministic and the chooser
/// collapses to the better of the zero-volatility call and put. With
/// T1 = T2 the formula itself reduces to the straddle (y1 = d1, y2 = d2).
///
/// # Examples
/// ```
/// use pricer_core::MarketSnapshot;
/// use pricer_models::rubinstein;
///
/// let snap = MarketSnapshot::new(156.70, 150.0, 0.0015, 0.282, 0.0233, 0.5, 1.0).unwrap();
/// let price = rubinstein(&snap);
/// assert!((price - 29.13).abs() < 0.1);
/// ```
pub fn rubinstein(snapshot: &MarketSnapshot) -> f64 {
    let bs = BlackScholes::from_snapshot(snapshot);
    let (strike, t1, t2) = (snapshot.strike(), snapshot.t1(), snapshot.t2());

    if snapshot.volatility() == 0.0 {
        // Deterministic trajectory: the T1 decision is known today
        return bs.price_call(strike, t2).max(bs.price_put(strike, t2));
    }

    let sigma = snapshot.volatility();
    let (r, q) = (snapshot.rate(), snapshot.dividend_yield());

    let d1 = bs.d1(strike, t2);
    let d2 = bs.d2(strike, t2);

    let log_moneyness = (snapshot.spot() / strike).ln();
    let y1 = (log_moneyness + (r - q) * t2 + 0.5 * sigma * sigma * t1) / (sigma * t1.sqrt());
    let y2 = y1 - sigma * t1.sqrt();

    let spot_leg = snapshot.spot() * (-q * t2).exp();
    let strike_leg = strike * (-r * t2).exp();

    spot_leg * norm_cdf(d1) - strike_leg * norm_cdf(d2) - spot_leg * norm_cdf(-y1)
        + strike_leg * norm_cdf(-y2)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn spec_snapshot() -> MarketSnapshot {
        MarketSnapshot::new(156.70, 150.0, 0.0015, 0.282, 0.0233, 0.5, 1.0).unwrap()
    }

    #[test]
    fn test_reference_value() {
        // Huang, Wang & Wan (2021) JPM parameter set
        let price = rubinstein(&spec_snapshot());
        assert_relative_eq!(price, 29.13, epsilon = 0.1);
    }

    #[test]
    fn test_exceeds_vanilla_call() {
        let snap = spec_snapshot();
        let bs = BlackScholes::from_snapshot(&snap);
        let call = bs.price_call(snap.strike(), snap.t2());
        assert!(rubinstein(&snap) > call);
    }

    #[test]
    fn test_below_straddle() {
        let snap = spec_snapshot();
        let bs = BlackScholes::from_snapshot(&snap);
        let straddle = bs.price_straddle(snap.strike(), snap.t2());
        assert!(rubinstein(&snap) < straddle);
    }

    #[test]
    fn test_exceeds_vanilla_put() {
        let snap = spec_snapshot();
        let bs = BlackScholes::from_snapshot(&snap);
        let put = bs.price_put(snap.strike(), snap.t2());
        assert!(rubinstein(&snap) > put);
    }

    #[test]
    fn test_equal_horizons_reduce_to_straddle() {
        // T1 = T2: the holder decides at maturity, i.e. owns a straddle
        let snap = MarketSnapshot::new(100.0, 100.0, 0.03, 0.2, 0.01, 1.0, 1.0).unwrap();
        let bs = BlackScholes::from_snapshot(&snap);
        assert_relative_eq!(
            rubinstein(&snap),
            bs.price_straddle(100.0, 1.0),
            epsilon = 1e-9
        );
    }

    #[test]
    fn test_early_decision_shrinks_value() {
        // Later decision dates carry more optionality
        let early = MarketSnapshot::new(100.0, 100.0, 0.03, 0.2, 0.01, 0.1, 1.0).unwrap();
        let late = MarketSnapshot::new(100.0, 100.0, 0.03, 0.2, 0.01, 0.9, 1.0).unwrap();
        assert!(rubinstein(&early) < rubinstein(&late));
    }

    #[test]
    fn test_zero_volatility_collapses_to_best_deterministic_leg() {
        let snap = MarketSnapshot::new(110.0, 100.0, 0.02, 0.0, 0.0, 0.5, 1.0).unwrap();
        let bs = BlackScholes::from_snapshot(&snap);
        let expected = bs.price_call(100.0, 1.0).max(bs.price_put(100.0, 1.0));
        assert_relative_eq!(rubinstein(&snap), expected, epsilon = 1e-12);
        assert!(rubinstein(&snap) > 0.0);
    }

    #[test]
    fn test_price_non_negative_across_moneyness() {
        for spot in [40.0, 80.0, 100.0, 120.0, 250.0] {
            let snap = MarketSnapshot::new(spot, 100.0, 0.02, 0.3, 0.01, 0.5, 1.0).unwrap();
            assert!(rubinstein(&snap) >= 0.0, "negative price at spot {}", spot);
        }
    }
}
