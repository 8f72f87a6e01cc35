//! Immutable market-data bundle for one pricing evaluation.

use super::error::PricingError;

/// Validated input bundle for one chooser pricing evaluation.
///
/// Holds the spot, strike, rates, volatility, and the two horizons of the
/// chooser contract. The constructor enforces the domain invariants
/// (T2 >= T1 > 0, sigma >= 0, q >= 0, S0 > 0, K > 0, everything finite) so
/// downstream pricers can assume well-formed inputs and never re-validate.
///
/// Snapshots are created per valuation date from the external feature
/// table and never mutated.
///
/// # Examples
/// ```
/// use pricer_core::MarketSnapshot;
///
/// let snap = MarketSnapshot::new(156.70, 150.0, 0.0015, 0.282, 0.0233, 0.5, 1.0).unwrap();
/// assert_eq!(snap.tau(), 0.5);
///
/// // T2 < T1 is rejected
/// assert!(MarketSnapshot::new(156.70, 150.0, 0.0015, 0.282, 0.0233, 1.0, 0.5).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MarketSnapshot {
    /// Spot price (S0)
    spot: f64,
    /// Strike price (K)
    strike: f64,
    /// Risk-free rate (r), continuously compounded, may be negative
    rate: f64,
    /// Volatility (sigma), annualised
    volatility: f64,
    /// Continuous dividend yield (q)
    dividend_yield: f64,
    /// Decision horizon (T1), years
    t1: f64,
    /// Maturity horizon (T2), years
    t2: f64,
}

impl MarketSnapshot {
    /// Creates a new snapshot, validating every invariant.
    ///
    /// # Arguments
    /// * `spot` - Spot price (must be positive)
    /// * `strike` - Strike price (must be positive)
    /// * `rate` - Risk-free rate (may be negative)
    /// * `volatility` - Annualised volatility (must be non-negative)
    /// * `dividend_yield` - Continuous dividend yield (must be non-negative)
    /// * `t1` - Decision horizon in years (must be positive)
    /// * `t2` - Maturity horizon in years (must satisfy T2 >= T1)
    ///
    /// # Errors
    /// `PricingError::InvalidInput` naming the first offending parameter.
    /// Non-finite values are rejected before any sign or ordering check.
    pub fn new(
        spot: f64,
        strike: f64,
        rate: f64,
        volatility: f64,
        dividend_yield: f64,
        t1: f64,
        t2: f64,
    ) -> Result<Self, PricingError> {
        let spot = PricingError::require_finite("spot", spot)?;
        let strike = PricingError::require_finite("strike", strike)?;
        let rate = PricingError::require_finite("rate", rate)?;
        let volatility = PricingError::require_finite("volatility", volatility)?;
        let dividend_yield = PricingError::require_finite("dividend_yield", dividend_yield)?;
        let t1 = PricingError::require_finite("t1", t1)?;
        let t2 = PricingError::require_finite("t2", t2)?;

        if spot <= 0.0 {
            return Err(PricingError::InvalidInput {
                name: "spot",
                value: spot,
            });
        }
        if strike <= 0.0 {
            return Err(PricingError::InvalidInput {
                name: "strike",
                value: strike,
            });
        }
        if volatility < 0.0 {
            return Err(PricingError::InvalidInput {
                name: "volatility",
                value: volatility,
            });
        }
        if dividend_yield < 0.0 {
            return Err(PricingError::InvalidInput {
                name: "dividend_yield",
                value: dividend_yield,
            });
        }
        if t1 <= 0.0 {
            return Err(PricingError::InvalidInput {
                name: "t1",
                value: t1,
            });
        }
        if t2 < t1 {
            return Err(PricingError::InvalidInput {
                name: "t2",
                value: t2,
            });
        }

        Ok(Self {
            spot,
            strike,
            rate,
            volatility,
            dividend_yield,
            t1,
            t2,
        })
    }

    /// Returns the spot price (S0).
    #[inline]
    pub fn spot(&self) -> f64 {
        self.spot
    }

    /// Returns the strike price (K).
    #[inline]
    pub fn strike(&self) -> f64 {
        self.strike
    }

    /// Returns the risk-free rate (r).
    #[inline]
    pub fn rate(&self) -> f64 {
        self.rate
    }

    /// Returns the annualised volatility (sigma).
    #[inline]
    pub fn volatility(&self) -> f64 {
        self.volatility
    }

    /// Returns the continuous dividend yield (q).
    #[inline]
    pub fn dividend_yield(&self) -> f64 {
        self.dividend_yield
    }

    /// Returns the decision horizon (T1) in years.
    #[inline]
    pub fn t1(&self) -> f64 {
        self.t1
    }

    /// Returns the maturity horizon (T2) in years.
    #[inline]
    pub fn t2(&self) -> f64 {
        self.t2
    }

    /// Returns the interval between decision and maturity, T2 - T1.
    #[inline]
    pub fn tau(&self) -> f64 {
        self.t2 - self.t1
    }

    /// Discount factor e^(-r*t) for a horizon of `t` years.
    #[inline]
    pub fn discount_factor(&self, t: f64) -> f64 {
        (-self.rate * t).exp()
    }
}
