//! Monte Carlo chooser pricer.
//!
//! Orchestrates path generation ([`simulate_paths`]), payoff evaluation
//! (`pricer_models::chooser_payoff`), discounting, and aggregation.
//!
//! # Chunked simulation
//!
//! Paths are simulated in fixed-size chunks, each on an RNG sub-stream
//! derived from (base seed, chunk index). Chunks run in parallel under
//! rayon; their partial sums are collected and reduced sequentially in
//! chunk order, so the aggregate is bit-identical for a fixed
//! configuration no matter how the chunks were scheduled.

use rayon::prelude::*;

use pricer_core::MarketSnapshot;
use pricer_models::{chooser_payoff, DecisionPolicy};

use super::config::MonteCarloConfig;
use super::error::McError;
use super::paths::simulate_paths;
use crate::rng::PricerRng;

/// Output of one chooser pricing call.
///
/// The Monte Carlo estimator fills every field; the analytic method leaves
/// the sampling diagnostics `None`.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PricingResult {
    /// Present value of the chooser.
    pub price: f64,
    /// Standard error of the estimate (population std / sqrt(N)).
    pub std_error: Option<f64>,
    /// Fraction of paths on which the holder nominated a call.
    pub call_ratio: Option<f64>,
    /// Decision rule the estimate was produced under.
    pub policy: Option<DecisionPolicy>,
}

impl PricingResult {
    /// Wraps an analytic price with no sampling diagnostics.
    #[inline]
    pub fn analytic(price: f64) -> Self {
        Self {
            price,
            std_error: None,
            call_ratio: None,
            policy: None,
        }
    }

    /// 95% confidence half-width, when a standard error is available.
    #[inline]
    pub fn confidence_95(&self) -> Option<f64> {
        self.std_error.map(|se| 1.96 * se)
    }

    /// 99% confidence half-width, when a standard error is available.
    #[inline]
    pub fn confidence_99(&self) -> Option<f64> {
        self.std_error.map(|se| 2.576 * se)
    }
}

/// Partial sums for one simulated chunk.
///
/// Sum and sum-of-squares commute under addition, so chunk results can be
/// combined in any fixed order without affecting the estimator.
#[derive(Clone, Copy, Debug, Default)]
struct ChunkStats {
    sum: f64,
    sum_sq: f64,
    calls: usize,
    n: usize,
}

impl ChunkStats {
    fn merge(self, other: ChunkStats) -> ChunkStats {
        ChunkStats {
            sum: self.sum + other.sum,
            sum_sq: self.sum_sq + other.sum_sq,
            calls: self.calls + other.calls,
            n: self.n + other.n,
        }
    }
}

/// Monte Carlo chooser pricing engine.
///
/// # Examples
/// ```
/// use pricer_core::MarketSnapshot;
/// use pricer_pricing::{ChooserMcPricer, MonteCarloConfig};
///
/// let snap = MarketSnapshot::new(156.70, 150.0, 0.0015, 0.282, 0.0233, 0.5, 1.0).unwrap();
/// let config = MonteCarloConfig::builder().n_paths(10_000).seed(42).build().unwrap();
/// let pricer = ChooserMcPricer::new(config).unwrap();
///
/// let result = pricer.price(&snap);
/// assert!(result.price > 0.0);
/// assert!(result.std_error.unwrap() > 0.0);
/// ```
pub struct ChooserMcPricer {
    config: MonteCarloConfig,
}

impl ChooserMcPricer {
    /// Creates a pricer with the given configuration.
    ///
    /// # Errors
    /// `McError` if the configuration is invalid.
    pub fn new(config: MonteCarloConfig) -> Result<Self, McError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Returns a reference to the configuration.
    #[inline]
    pub fn config(&self) -> &MonteCarloConfig {
        &self.config
    }

    /// Prices a chooser by simulation.
    ///
    /// Simulates N joint (S_T1, S_T2) pairs, applies the configured
    /// decision rule at T1, discounts each T2 payoff by e^(-r*T2), and
    /// returns the sample mean with its standard error and the realised
    /// call-exercise ratio.
    pub fn price(&self, snapshot: &MarketSnapshot) -> PricingResult {
        let n_paths = self.config.n_paths();
        let chunk_size = self.config.chunk_size();
        let policy = self.config.policy();
        let base_rng = PricerRng::from_seed(self.config.seed());

        let n_chunks = n_paths.div_ceil(chunk_size);
        let chunk_stats: Vec<ChunkStats> = (0..n_chunks)
            .into_par_iter()
            .map(|chunk_idx| {
                let start = chunk_idx * chunk_size;
                let len = chunk_size.min(n_paths - start);
                let mut rng = base_rng.substream(chunk_idx as u64);

                let mut stats = ChunkStats::default();
                for path in simulate_paths(snapshot, len, &mut rng) {
                    let (decision, payoff) =
                        chooser_payoff(policy, path.s_t1, path.s_t2, snapshot);
                    stats.sum += payoff;
                    stats.sum_sq += payoff * payoff;
                    stats.calls += decision.is_call() as usize;
                    stats.n += 1;
                }
                stats
            })
            .collect();

        // Sequential reduction in chunk order keeps the result independent
        // of rayon's scheduling.
        let total = chunk_stats
            .into_iter()
            .fold(ChunkStats::default(), ChunkStats::merge);

        let n = total.n as f64;
        let discount = snapshot.discount_factor(snapshot.t2());
        let mean_payoff = total.sum / n;
        let var_payoff = (total.sum_sq / n - mean_payoff * mean_payoff).max(0.0);

        PricingResult {
            price: discount * mean_payoff,
            std_error: Some(discount * (var_payoff / n).sqrt()),
            call_ratio: Some(total.calls as f64 / n),
            policy: Some(policy),
        }
    }
}
