//! GA configuration.
//!
//! [`GaConfig`] holds all parameters that control the evolutionary loop.

use crate::error::ConfigError;

/// Configuration for the Genetic Algorithm.
///
/// # Defaults
///
/// ```
/// use u_tdtsp::ga::GaConfig;
///
/// let config = GaConfig::default();
/// assert_eq!(config.population_size, 100);
/// assert_eq!(config.max_generations, 1000);
/// assert_eq!(config.elite_size, 2);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use u_tdtsp::ga::GaConfig;
///
/// let config = GaConfig::default()
///     .with_population_size(200)
///     .with_mutation_rate(0.2)
///     .with_num_threads(4)
///     .with_seed(7);
/// assert!(config.validate().is_ok());
/// ```
///
/// Builders store values as given; [`validate`](GaConfig::validate) rejects
/// out-of-range parameters instead of clamping them.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase", default, deny_unknown_fields)
)]
pub struct GaConfig {
    /// Number of individuals in every generation.
    pub population_size: usize,

    /// Probability of applying a swap mutation to each offspring (0.0–1.0).
    pub mutation_rate: f64,

    /// Number of generations to run. The run never stops earlier.
    pub max_generations: usize,

    /// Number of best individuals copied unchanged into the next generation.
    ///
    /// Values above `population_size` are tolerated and act as
    /// `population_size`; see [`effective_elite_size`](Self::effective_elite_size).
    pub elite_size: usize,

    /// Evaluation workers. `1` evaluates sequentially on the calling thread.
    pub num_threads: usize,

    /// Number of individuals sampled (with replacement) per tournament.
    pub tournament_size: usize,

    /// Random seed for reproducibility.
    ///
    /// `None` uses a random seed.
    pub seed: Option<u64>,
}

impl Default for GaConfig {
    fn default() -> Self {
        Self {
            population_size: 100,
            mutation_rate: 0.1,
            max_generations: 1000,
            elite_size: 2,
            num_threads: 1,
            tournament_size: 5,
            seed: None,
        }
    }
}

impl GaConfig {
    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the mutation rate.
    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate;
        self
    }

    /// Sets the number of generations.
    pub fn with_max_generations(mut self, n: usize) -> Self {
        self.max_generations = n;
        self
    }

    /// Sets the elite count.
    pub fn with_elite_size(mut self, n: usize) -> Self {
        self.elite_size = n;
        self
    }

    /// Sets the number of evaluation workers.
    pub fn with_num_threads(mut self, n: usize) -> Self {
        self.num_threads = n;
        self
    }

    /// Sets the tournament size.
    pub fn with_tournament_size(mut self, k: usize) -> Self {
        self.tournament_size = k;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Elite count actually carried over: `min(elite_size, population_size)`.
    pub fn effective_elite_size(&self) -> usize {
        self.elite_size.min(self.population_size)
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.population_size == 0 {
            return Err(ConfigError::EmptyPopulation);
        }
        if !(0.0..=1.0).contains(&self.mutation_rate) {
            return Err(ConfigError::MutationRate(self.mutation_rate));
        }
        if self.num_threads == 0 {
            return Err(ConfigError::NoThreads);
        }
        if self.tournament_size == 0 {
            return Err(ConfigError::EmptyTournament);
        }
        Ok(())
    }
}
