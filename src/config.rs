//! GA configuration.
//!
//! [`GaConfig`] holds all numeric parameters of a run. The fitness function
//! is passed separately to the runner.

use crate::error::GaError;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Configuration for the Genetic Algorithm.
///
/// # Defaults
///
/// ```
/// use u_bitga::GaConfig;
///
/// let config = GaConfig::default();
/// assert_eq!(config.population_size, 100);
/// assert_eq!(config.max_generations, 500);
/// assert!(config.validate().is_ok());
/// ```
///
/// # Builder Pattern
///
/// ```
/// use u_bitga::GaConfig;
///
/// let config = GaConfig::default()
///     .with_population_size(200)
///     .with_genome_length(64)
///     .with_mutation_rate(0.05)
///     .with_seed(42);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GaConfig {
    /// Number of individuals in every generation. Must be even.
    pub population_size: usize,

    /// Number of generations to breed after the initial population.
    ///
    /// 0 returns the best of the initial population.
    pub max_generations: usize,

    /// Number of bits in every genome.
    pub genome_length: usize,

    /// Probability that a child has one of its bits flipped (0.0–1.0).
    pub mutation_rate: f64,

    /// Probability of one-point crossover for a pair of parents (0.0–1.0).
    ///
    /// When crossover is not applied, the children start as copies of the
    /// parents.
    pub crossover_rate: f64,

    /// Whether to evaluate children in parallel using rayon.
    ///
    /// Only takes effect with the `parallel` feature. Results are identical
    /// either way.
    pub parallel: bool,

    /// Random seed for reproducibility.
    ///
    /// `None` uses a random seed.
    pub seed: Option<u64>,
}

impl Default for GaConfig {
    fn default() -> Self {
        Self {
            population_size: 100,
            max_generations: 500,
            genome_length: 32,
            mutation_rate: 0.1,
            crossover_rate: 0.9,
            parallel: false,
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

    /// Sets the maximum number of generations.
    pub fn with_max_generations(mut self, n: usize) -> Self {
        self.max_generations = n;
        self
    }

    /// Sets the genome length in bits.
    pub fn with_genome_length(mut self, k: usize) -> Self {
        self.genome_length = k;
        self
    }

    /// Sets the mutation rate. Out-of-range values are reported by
    /// [`validate`](Self::validate).
    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate;
        self
    }

    /// Sets the crossover rate. Out-of-range values are reported by
    /// [`validate`](Self::validate).
    pub fn with_crossover_rate(mut self, rate: f64) -> Self {
        self.crossover_rate = rate;
        self
    }

    /// Enables or disables parallel evaluation.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// [`GaError::InvalidConfiguration`] describing the first invalid
    /// parameter.
    pub fn validate(&self) -> Result<(), GaError> {
        if self.genome_length < 1 {
            return Err(invalid("genome_length must be at least 1"));
        }
        if self.population_size < 1 {
            return Err(invalid("population_size must be at least 1"));
        }
        if self.population_size % 2 != 0 {
            return Err(invalid(
                "population_size must be even: children are bred in pairs",
            ));
        }
        if !(0.0..=1.0).contains(&self.mutation_rate) {
            return Err(invalid("mutation_rate must be within [0, 1]"));
        }
        if !(0.0..=1.0).contains(&self.crossover_rate) {
            return Err(invalid("crossover_rate must be within [0, 1]"));
        }
        Ok(())
    }
}

fn invalid(msg: &str) -> GaError {
    GaError::InvalidConfiguration(msg.into())
}
