//! Chooser exercise decision and payoff evaluation.
//!
//! At T1 the holder nominates the contract as a call or a put; at T2 the
//! payoff of the nominated type is realised against the common strike. Two
//! decision policies are supported and selected per call via an explicit
//! [`DecisionPolicy`] value, never via global configuration:
//!
//! - [`DecisionPolicy::Simplified`]: call iff S_T1 > K (the rule the
//!   source paper applies, and the default for proxy construction).
//! - [`DecisionPolicy::Proper`]: compare the BSM call and put values over
//!   the remaining interval T2 - T1 at spot S_T1 and take the richer one.
//!
//! The rules disagree in a band around the strike whose width is set by
//! the carry (r - q) over the remaining interval.

use pricer_core::MarketSnapshot;

use crate::analytical::BlackScholes;

/// The contract type nominated at the decision date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OptionType {
    /// European call: pays max(S - K, 0) at maturity
    Call,
    /// European put: pays max(K - S, 0) at maturity
    Put,
}

impl OptionType {
    /// Terminal payoff of this option type against strike `strike` at
    /// terminal price `s`.
    #[inline]
    pub fn payoff(self, s: f64, strike: f64) -> f64 {
        match self {
            OptionType::Call => (s - strike).max(0.0),
            OptionType::Put => (strike - s).max(0.0),
        }
    }

    /// True for `Call`.
    #[inline]
    pub fn is_call(self) -> bool {
        matches!(self, OptionType::Call)
    }
}

/// Exercise decision rule applied at T1.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DecisionPolicy {
    /// Call iff S_T1 > K.
    #[default]
    Simplified,
    /// Call iff the BSM call value at T1 is at least the put value.
    Proper,
}

impl DecisionPolicy {
    /// Stable lower-case name, used in logs and CLI output.
    pub fn name(self) -> &'static str {
        match self {
            DecisionPolicy::Simplified => "simplified",
            DecisionPolicy::Proper => "proper",
        }
    }
}

/// Applies the decision rule at T1.
///
/// For the proper rule the call and put are valued with the snapshot's
/// rate, dividend yield, and volatility over the remaining interval
/// tau = T2 - T1, re-anchored at the observed price `s_t1`. Ties go to the
/// call.
#[inline]
pub fn decide(policy: DecisionPolicy, s_t1: f64, snapshot: &MarketSnapshot) -> OptionType {
    let chooses_call = match policy {
        DecisionPolicy::Simplified => s_t1 > snapshot.strike(),
        DecisionPolicy::Proper => {
            let bs = BlackScholes::from_snapshot_at(s_t1, snapshot);
            let tau = snapshot.tau();
            bs.price_call(snapshot.strike(), tau) >= bs.price_put(snapshot.strike(), tau)
        }
    };
    if chooses_call {
        OptionType::Call
    } else {
        OptionType::Put
    }
}

/// Evaluates the chooser payoff for one (simulated or realized) price pair.
///
/// Returns the nominated type together with the undiscounted payoff at T2.
#[inline]
pub fn chooser_payoff(
    policy: DecisionPolicy,
    s_t1: f64,
    s_t2: f64,
    snapshot: &MarketSnapshot,
) -> (OptionType, f64) {
    let decision = decide(policy, s_t1, snapshot);
    (decision, decision.payoff(s_t2, snapshot.strike()))
}
