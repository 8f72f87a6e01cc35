//! Two-horizon conditional GBM path generation.
//!
//! A chooser needs the asset price at the decision date T1 and at maturity
//! T2 along the *same* trajectory. Each path is therefore built in two
//! stages of the log-space exact GBM solution:
//!
//! ```text
//! S_T1 = S0   · exp((r - q - σ²/2)·T1       + σ·√T1       · Z1)
//! S_T2 = S_T1 · exp((r - q - σ²/2)·(T2-T1)  + σ·√(T2-T1)  · Z2)
//! ```
//!
//! with Z1, Z2 independent standard normals. Simulating S_T2 directly from
//! S0 would break the joint distribution the exercise decision depends on.

use pricer_core::MarketSnapshot;

use crate::rng::PricerRng;

/// Terminal prices of one simulated trajectory at the two chooser horizons.
///
/// Ephemeral: generated in bulk for one pricing call and discarded after
/// aggregation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimulatedPath {
    /// Asset price at the decision date T1
    pub s_t1: f64,
    /// Asset price at maturity T2, conditional on `s_t1`
    pub s_t2: f64,
}

/// Simulates `n_paths` joint (S_T1, S_T2) pairs under risk-neutral GBM.
///
/// Draws are interleaved per path (Z1 then Z2), so a fixed seed, path
/// count, and snapshot reproduce identical paths. Snapshot invariants
/// guarantee finite parameters and T2 >= T1 > 0; path counts are validated
/// by the pricer configuration.
pub fn simulate_paths(
    snapshot: &MarketSnapshot,
    n_paths: usize,
    rng: &mut PricerRng,
) -> Vec<SimulatedPath> {
    let sigma = snapshot.volatility();
    let nu = snapshot.rate() - snapshot.dividend_yield() - 0.5 * sigma * sigma;
    let tau = snapshot.tau();

    // Precomputed per-stage drift and diffusion terms
    let drift_1 = nu * snapshot.t1();
    let vol_1 = sigma * snapshot.t1().sqrt();
    let drift_2 = nu * tau;
    let vol_2 = sigma * tau.sqrt();

    let mut paths = Vec::with_capacity(n_paths);
    for _ in 0..n_paths {
        let z1 = rng.gen_normal();
        let z2 = rng.gen_normal();
        let s_t1 = snapshot.spot() * (drift_1 + vol_1 * z1).exp();
        let s_t2 = s_t1 * (drift_2 + vol_2 * z2).exp();
        paths.push(SimulatedPath { s_t1, s_t2 });
    }
    paths
}
