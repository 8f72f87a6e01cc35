//! Error taxonomy for pricing and backtesting operations.
//!
//! Every fallible operation in the workspace reports one of the variants
//! below, either directly or via a crate-local error type that converts
//! into it. Failures are raised immediately; values are never silently
//! clamped or defaulted on the caller's behalf.

use chrono::NaiveDate;
use thiserror::Error;

/// Categorised pricing errors.
///
/// # Variants
/// - `InvalidInput`: non-finite, negative-where-disallowed, or
///   order-violating parameters (e.g. T2 < T1, sigma < 0, N = 0)
/// - `InsufficientHistory`: a valuation date lacks enough forward price
///   history to construct a realized proxy
/// - `MissingMarketData`: a required field is absent for a requested date
/// - `NumericalInstability`: degenerate inputs that would divide by
///   (near-)zero, handled by explicit branch logic
///
/// # Examples
/// ```
/// use pricer_core::PricingError;
///
/// let err = PricingError::InvalidInput { name: "volatility", value: -0.2 };
/// assert_eq!(format!("{}", err), "invalid input: volatility = -0.2");
/// ```
#[derive(Debug, Clone, Error, PartialEq)]
pub enum PricingError {
    /// Non-finite, mis-signed, or order-violating parameter.
    #[error("invalid input: {name} = {value}")]
    InvalidInput {
        /// Name of the offending parameter
        name: &'static str,
        /// The rejected value
        value: f64,
    },

    /// Valuation date lacks enough forward history for a realized proxy.
    #[error("insufficient history at {date}: need {need} forward trading days, have {have}")]
    InsufficientHistory {
        /// Valuation date that was skipped
        date: NaiveDate,
        /// Forward trading days required (maturity offset)
        need: usize,
        /// Forward trading days actually available
        have: usize,
    },

    /// Required market-data field absent for a requested date.
    #[error("missing market data: {field} at {date}")]
    MissingMarketData {
        /// Date the field was requested for
        date: NaiveDate,
        /// Name of the missing field
        field: &'static str,
    },

    /// Numerical instability during computation.
    #[error("numerical instability: {0}")]
    NumericalInstability(String),
}

impl PricingError {
    /// Builds an `InvalidInput` error after checking a value is finite.
    ///
    /// Returns `Ok(value)` when finite, the typed error otherwise. Used by
    /// constructors to reject NaN/inf before any arithmetic happens.
    pub fn require_finite(name: &'static str, value: f64) -> Result<f64, PricingError> {
        if value.is_finite() {
            Ok(value)
        } else {
            Err(PricingError::InvalidInput { name, value })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_input_display() {
        let err = PricingError::InvalidInput {
            name: "spot",
            value: -100.0,
        };
        assert_eq!(format!("{}", err), "invalid input: spot = -100");
    }

    #[test]
    fn test_insufficient_history_display() {
        let err = PricingError::InsufficientHistory {
            date: NaiveDate::from_ymd_opt(2021, 6, 1).unwrap(),
            need: 252,
            have: 17,
        };
        assert_eq!(
            format!("{}", err),
            "insufficient history at 2021-06-01: need 252 forward trading days, have 17"
        );
    }

    #[test]
    fn test_missing_market_data_display() {
        let err = PricingError::MissingMarketData {
            date: NaiveDate::from_ymd_opt(2020, 3, 16).unwrap(),
            field: "treasury_10y",
        };
        assert_eq!(
            format!("{}", err),
            "missing market data: treasury_10y at 2020-03-16"
        );
    }

    #[test]
    fn test_numerical_instability_display() {
        let err = PricingError::NumericalInstability("MAPE divisor below epsilon".to_string());
        assert_eq!(
            format!("{}", err),
            "numerical instability: MAPE divisor below epsilon"
        );
    }

    #[test]
    fn test_require_finite_passes_finite() {
        assert_eq!(PricingError::require_finite("rate", 0.0015), Ok(0.0015));
    }

    #[test]
    fn test_require_finite_rejects_nan() {
        let result = PricingError::require_finite("rate", f64::NAN);
        assert!(matches!(
            result,
            Err(PricingError::InvalidInput { name: "rate", .. })
        ));
    }

    #[test]
    fn test_require_finite_rejects_infinity() {
        let result = PricingError::require_finite("strike", f64::INFINITY);
        assert!(result.is_err());
    }

    #[test]
    fn test_error_trait_implementation() {
        let err = PricingError::NumericalInstability("test".to_string());
        let _: &dyn std::error::Error = &err;
    }

    #[test]
    fn test_clone_and_equality() {
        let err1 = PricingError::InvalidInput {
            name: "t2",
            value: 0.25,
        };
        let err2 = err1.clone();
        assert_eq!(err1, err2);
    }
}
