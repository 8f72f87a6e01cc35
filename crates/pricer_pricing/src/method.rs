//! Unified dispatch over the two chooser valuation methods.

use pricer_core::MarketSnapshot;
use pricer_models::analytical::rubinstein;

use crate::mc::{ChooserMcPricer, McError, MonteCarloConfig, PricingResult};

/// Chooser valuation method.
///
/// Both methods consume the same [`MarketSnapshot`]; they differ in the
/// estimator. The closed form embeds the value-maximising exercise rule,
/// the Monte Carlo estimator applies whichever [`DecisionPolicy`] its
/// configuration carries.
///
/// [`DecisionPolicy`]: pricer_models::DecisionPolicy
///
/// # Examples
/// ```
/// use pricer_core::MarketSnapshot;
/// use pricer_pricing::{ChooserMethod, MonteCarloConfig};
///
/// let snap = MarketSnapshot::new(156.70, 150.0, 0.0015, 0.282, 0.0233, 0.5, 1.0).unwrap();
///
/// let analytic = ChooserMethod::Analytic.price(&snap).unwrap();
/// assert!(analytic.std_error.is_none());
///
/// let config = MonteCarloConfig::builder().n_paths(10_000).seed(42).build().unwrap();
/// let mc = ChooserMethod::MonteCarlo(config).price(&snap).unwrap();
/// assert!(mc.std_error.is_some());
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ChooserMethod {
    /// Rubinstein (1991) closed form.
    Analytic,
    /// Monte Carlo simulation with the given configuration.
    MonteCarlo(MonteCarloConfig),
}

impl ChooserMethod {
    /// Prices the chooser described by `snapshot`.
    ///
    /// # Errors
    /// `McError` when the Monte Carlo configuration is invalid; the
    /// analytic path cannot fail on a validated snapshot.
    pub fn price(&self, snapshot: &MarketSnapshot) -> Result<PricingResult, McError> {
        match self {
            ChooserMethod::Analytic => Ok(PricingResult::analytic(rubinstein(snapshot))),
            ChooserMethod::MonteCarlo(config) => {
                Ok(ChooserMcPricer::new(*config)?.price(snapshot))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot() -> MarketSnapshot {
        MarketSnapshot::new(156.70, 150.0, 0.0015, 0.282, 0.0233, 0.5, 1.0).unwrap()
    }

    #[test]
    fn test_analytic_has_no_diagnostics() {
        let result = ChooserMethod::Analytic.price(&snapshot()).unwrap();
        assert!(result.price > 0.0);
        assert_eq!(result.std_error, None);
        assert_eq!(result.call_ratio, None);
        assert_eq!(result.policy, None);
    }

    #[test]
    fn test_monte_carlo_dispatch() {
        let config = MonteCarloConfig::builder()
            .n_paths(20_000)
            .seed(42)
            .build()
            .unwrap();
        let result = ChooserMethod::MonteCarlo(config).price(&snapshot()).unwrap();
        assert!(result.std_error.is_some());
        assert!(result.call_ratio.is_some());
    }

    #[test]
    fn test_methods_agree_roughly() {
        let snap = snapshot();
        let analytic = ChooserMethod::Analytic.price(&snap).unwrap().price;
        let config = MonteCarloConfig::builder()
            .n_paths(100_000)
            .seed(42)
            .build()
            .unwrap();
        let mc = ChooserMethod::MonteCarlo(config).price(&snap).unwrap().price;
        assert!((mc - analytic).abs() / analytic < 0.05);
    }
}
