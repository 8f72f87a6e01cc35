//! Monte Carlo simulation configuration.

use pricer_models::DecisionPolicy;

use super::error::McError;

/// Maximum number of simulation paths allowed.
pub const MAX_PATHS: usize = 10_000_000;

/// Default number of paths per simulation chunk.
///
/// Chunks are simulated on independent RNG sub-streams and reduced in
/// chunk order, so this value affects throughput but not results.
const DEFAULT_CHUNK_SIZE: usize = 16_384;

/// Monte Carlo chooser pricing configuration.
///
/// Immutable once built. Use [`MonteCarloConfig::builder`] to construct.
///
/// # Examples
/// ```
/// use pricer_pricing::MonteCarloConfig;
/// use pricer_models::DecisionPolicy;
///
/// let config = MonteCarloConfig::builder()
///     .n_paths(10_000)
///     .seed(42)
///     .policy(DecisionPolicy::Simplified)
///     .build()
///     .unwrap();
///
/// assert_eq!(config.n_paths(), 10_000);
/// assert_eq!(config.seed(), 42);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MonteCarloConfig {
    n_paths: usize,
    seed: u64,
    policy: DecisionPolicy,
    chunk_size: usize,
}

impl MonteCarloConfig {
    /// Creates a new configuration builder.
    #[inline]
    pub fn builder() -> MonteCarloConfigBuilder {
        MonteCarloConfigBuilder::default()
    }

    /// Returns the number of simulation paths.
    #[inline]
    pub fn n_paths(&self) -> usize {
        self.n_paths
    }

    /// Returns the RNG seed.
    #[inline]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Returns the exercise decision policy.
    #[inline]
    pub fn policy(&self) -> DecisionPolicy {
        self.policy
    }

    /// Returns the chunk size used for parallel simulation.
    #[inline]
    pub fn chunk_size(&self) -> usize {
        self.chunk_size
    }

    /// Validates the configuration.
    ///
    /// # Errors
    /// - `McError::InvalidPathCount` if `n_paths` is 0 or above [`MAX_PATHS`]
    /// - `McError::InvalidChunkSize` if `chunk_size` is 0
    pub fn validate(&self) -> Result<(), McError> {
        if self.n_paths == 0 || self.n_paths > MAX_PATHS {
            return Err(McError::InvalidPathCount(self.n_paths));
        }
        if self.chunk_size == 0 {
            return Err(McError::InvalidChunkSize(self.chunk_size));
        }
        Ok(())
    }
}

/// Builder for [`MonteCarloConfig`].
#[derive(Clone, Debug, Default)]
pub struct MonteCarloConfigBuilder {
    n_paths: Option<usize>,
    seed: Option<u64>,
    policy: DecisionPolicy,
    chunk_size: Option<usize>,
}

impl MonteCarloConfigBuilder {
    /// Sets the number of simulation paths (required, in [1, 10_000_000]).
    #[inline]
    pub fn n_paths(mut self, n_paths: usize) -> Self {
        self.n_paths = Some(n_paths);
        self
    }

    /// Sets the RNG seed (defaults to 0).
    #[inline]
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Sets the exercise decision policy (defaults to `Simplified`).
    #[inline]
    pub fn policy(mut self, policy: DecisionPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Overrides the chunk size used for parallel simulation.
    #[inline]
    pub fn chunk_size(mut self, chunk_size: usize) -> Self {
        self.chunk_size = Some(chunk_size);
        self
    }

    /// Builds the configuration.
    ///
    /// # Errors
    /// `McError` when `n_paths` is missing or any value is out of range.
    pub fn build(self) -> Result<MonteCarloConfig, McError> {
        let n_paths = self.n_paths.ok_or(McError::InvalidParameter {
            name: "n_paths",
            reason: "must be specified",
        })?;

        let config = MonteCarloConfig {
            n_paths,
            seed: self.seed.unwrap_or(0),
            policy: self.policy,
            chunk_size: self.chunk_size.unwrap_or(DEFAULT_CHUNK_SIZE),
        };

        config.validate()?;
        Ok(config)
    }
}
