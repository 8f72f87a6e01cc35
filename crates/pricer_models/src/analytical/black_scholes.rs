//! Black-Scholes-Merton pricing for European options with continuous
//! dividends.
//!
//! ## Mathematical Formulas
//!
//! **Call Price**: C = S·e^(-qT)·N(d1) - K·e^(-rT)·N(d2)
//! **Put Price**:  P = K·e^(-rT)·N(-d2) - S·e^(-qT)·N(-d1)
//!
//! Where:
//! - d1 = (ln(S/K) + (r - q + σ²/2)T) / (σ√T)
//! - d2 = d1 - σ√T
//!
//! Two degenerate regimes are handled by explicit branches rather than by
//! letting the d1/d2 quotient blow up:
//! - T = 0: intrinsic value max(S-K, 0) / max(K-S, 0)
//! - σ = 0: the diffusion vanishes and the price is the discounted payoff
//!   of the deterministic forward

use pricer_core::{norm_cdf, MarketSnapshot};

use super::error::AnalyticalError;

/// Magnitude used for d1/d2 in the degenerate regimes where the true limit
/// is +/- infinity; N(+/-40) is exactly 1/0 in double precision.
const D_SATURATED: f64 = 40.0;

/// Black-Scholes-Merton model for European option pricing.
///
/// Holds the market state (spot, rate, dividend yield, volatility); strike
/// and expiry are supplied per call so one model instance prices the whole
/// strip of options a chooser decomposes into.
///
/// # Examples
/// ```
/// use pricer_models::BlackScholes;
///
/// let bs = BlackScholes::new(100.0, 0.05, 0.0, 0.2).unwrap();
/// let call = bs.price_call(100.0, 1.0);
/// let put = bs.price_put(100.0, 1.0);
///
/// // Put-call parity: C - P = S·e^(-qT) - K·e^(-rT)
/// let forward = 100.0 - 100.0 * (-0.05_f64).exp();
/// assert!((call - put - forward).abs() < 1e-10);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlackScholes {
    /// Spot price (S)
    spot: f64,
    /// Risk-free rate (r), continuously compounded
    rate: f64,
    /// Continuous dividend yield (q)
    dividend_yield: f64,
    /// Volatility (sigma), annualised; zero is a valid degenerate case
    volatility: f64,
}

impl BlackScholes {
    /// Creates a new model, validating the market state.
    ///
    /// # Errors
    /// - `AnalyticalError::NonFiniteInput` for NaN/infinite parameters
    /// - `AnalyticalError::InvalidSpot` if spot <= 0
    /// - `AnalyticalError::InvalidVolatility` if volatility < 0
    /// - `AnalyticalError::InvalidDividendYield` if dividend yield < 0
    pub fn new(
        spot: f64,
        rate: f64,
        dividend_yield: f64,
        volatility: f64,
    ) -> Result<Self, AnalyticalError> {
        for (name, value) in [
            ("spot", spot),
            ("rate", rate),
            ("dividend_yield", dividend_yield),
            ("volatility", volatility),
        ] {
            if !value.is_finite() {
                return Err(AnalyticalError::NonFiniteInput { name, value });
            }
        }
        if spot <= 0.0 {
            return Err(AnalyticalError::InvalidSpot { spot });
        }
        if volatility < 0.0 {
            return Err(AnalyticalError::InvalidVolatility { volatility });
        }
        if dividend_yield < 0.0 {
            return Err(AnalyticalError::InvalidDividendYield { dividend_yield });
        }

        Ok(Self {
            spot,
            rate,
            dividend_yield,
            volatility,
        })
    }

    /// Builds a model from an already-validated snapshot, re-anchored at a
    /// new spot (e.g. a simulated or realized price at T1).
    ///
    /// Infallible: the snapshot invariants cover rate, dividend yield, and
    /// volatility, and GBM trajectories and validated price series keep the
    /// spot strictly positive.
    #[inline]
    pub fn from_snapshot_at(spot: f64, snapshot: &MarketSnapshot) -> Self {
        debug_assert!(spot > 0.0 && spot.is_finite());
        Self {
            spot,
            rate: snapshot.rate(),
            dividend_yield: snapshot.dividend_yield(),
            volatility: snapshot.volatility(),
        }
    }

    /// Builds a model from a snapshot at its own spot.
    #[inline]
    pub fn from_snapshot(snapshot: &MarketSnapshot) -> Self {
        Self::from_snapshot_at(snapshot.spot(), snapshot)
    }

    /// Returns the spot price.
    #[inline]
    pub fn spot(&self) -> f64 {
        self.spot
    }

    /// Returns the risk-free rate.
    #[inline]
    pub fn rate(&self) -> f64 {
        self.rate
    }

    /// Returns the continuous dividend yield.
    #[inline]
    pub fn dividend_yield(&self) -> f64 {
        self.dividend_yield
    }

    /// Returns the volatility.
    #[inline]
    pub fn volatility(&self) -> f64 {
        self.volatility
    }

    /// Computes the d1 term.
    ///
    /// d1 = (ln(S/K) + (r - q + σ²/2)T) / (σ√T)
    ///
    /// In the degenerate regimes (T = 0 or σ = 0) the quotient has no
    /// finite value; a saturated +/-40 is returned so that N(d1) evaluates
    /// to exactly 0 or 1.
    #[inline]
    pub fn d1(&self, strike: f64, expiry: f64) -> f64 {
        let vol_sqrt_t = self.volatility * expiry.max(0.0).sqrt();
        if vol_sqrt_t == 0.0 {
            let forward = self.spot * ((self.rate - self.dividend_yield) * expiry).exp();
            return if forward >= strike {
                D_SATURATED
            } else {
                -D_SATURATED
            };
        }

        let log_moneyness = (self.spot / strike).ln();
        let drift =
            (self.rate - self.dividend_yield + 0.5 * self.volatility * self.volatility) * expiry;
        (log_moneyness + drift) / vol_sqrt_t
    }

    /// Computes the d2 term, d2 = d1 - σ√T.
    #[inline]
    pub fn d2(&self, strike: f64, expiry: f64) -> f64 {
        self.d1(strike, expiry) - self.volatility * expiry.max(0.0).sqrt()
    }

    /// European call price.
    ///
    /// C = S·e^(-qT)·N(d1) - K·e^(-rT)·N(d2)
    #[inline]
    pub fn price_call(&self, strike: f64, expiry: f64) -> f64 {
        if expiry <= 0.0 {
            return (self.spot - strike).max(0.0);
        }
        if self.volatility == 0.0 {
            // No diffusion: discounted payoff of the deterministic forward
            let forward = self.spot * ((self.rate - self.dividend_yield) * expiry).exp();
            return (-self.rate * expiry).exp() * (forward - strike).max(0.0);
        }

        let d1 = self.d1(strike, expiry);
        let d2 = self.d2(strike, expiry);
        let spot_leg = self.spot * (-self.dividend_yield * expiry).exp();
        let strike_leg = strike * (-self.rate * expiry).exp();

        spot_leg * norm_cdf(d1) - strike_leg * norm_cdf(d2)
    }

    /// European put price.
    ///
    /// P = K·e^(-rT)·N(-d2) - S·e^(-qT)·N(-d1)
    #[inline]
    pub fn price_put(&self, strike: f64, expiry: f64) -> f64 {
        if expiry <= 0.0 {
            return (strike - self.spot).max(0.0);
        }
        if self.volatility == 0.0 {
            let forward = self.spot * ((self.rate - self.dividend_yield) * expiry).exp();
            return (-self.rate * expiry).exp() * (strike - forward).max(0.0);
        }

        let d1 = self.d1(strike, expiry);
        let d2 = self.d2(strike, expiry);
        let spot_leg = self.spot * (-self.dividend_yield * expiry).exp();
        let strike_leg = strike * (-self.rate * expiry).exp();

        strike_leg * norm_cdf(-d2) - spot_leg * norm_cdf(-d1)
    }

    /// Straddle price: call + put at the same strike and expiry.
    ///
    /// Upper bound for the simple chooser, which it reaches when T1 = T2.
    #[inline]
    pub fn price_straddle(&self, strike: f64, expiry: f64) -> f64 {
        self.price_call(strike, expiry) + self.price_put(strike, expiry)
    }
}
