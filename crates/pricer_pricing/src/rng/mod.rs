//! Pseudo-random number generation for Monte Carlo simulation.

use rand::rngs::StdRng;
use rand::SeedableRng;
use rand_distr::{Distribution, StandardNormal};

/// Seeded random number generator for Monte Carlo simulations.
///
/// Wraps [`StdRng`] with explicit seeding so identical seeds always
/// reproduce identical draw sequences, and derives independent sub-streams
/// for chunked parallel simulation.
///
/// # Examples
/// ```
/// use pricer_pricing::PricerRng;
///
/// let mut a = PricerRng::from_seed(42);
/// let mut b = PricerRng::from_seed(42);
/// assert_eq!(a.gen_normal(), b.gen_normal());
/// ```
pub struct PricerRng {
    inner: StdRng,
    /// Seed used for initialisation, kept for sub-stream derivation.
    seed: u64,
}

impl PricerRng {
    /// Creates a generator from a 64-bit seed.
    #[inline]
    pub fn from_seed(seed: u64) -> Self {
        Self {
            inner: StdRng::seed_from_u64(seed),
            seed,
        }
    }

    /// Returns the seed used for initialisation.
    #[inline]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Draws one standard normal variate.
    #[inline]
    pub fn gen_normal(&mut self) -> f64 {
        StandardNormal.sample(&mut self.inner)
    }

    /// Fills `buffer` with standard normal variates. Zero-allocation; an
    /// empty buffer is a no-op.
    pub fn fill_normal(&mut self, buffer: &mut [f64]) {
        for slot in buffer.iter_mut() {
            *slot = StandardNormal.sample(&mut self.inner);
        }
    }

    /// Derives the generator for sub-stream `index`.
    ///
    /// The chunk index is scrambled through a SplitMix64 round before
    /// seeding, so adjacent indices land on unrelated points of the state
    /// space. Derivation depends only on (seed, index), which keeps chunked
    /// parallel simulation reproducible.
    pub fn substream(&self, index: u64) -> PricerRng {
        let mut z = self
            .seed
            .wrapping_add(index.wrapping_mul(0x9E37_79B9_7F4A_7C15));
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
        PricerRng::from_seed(z ^ (z >> 31))
    }
}
