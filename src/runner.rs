//! GA evolutionary loop execution.
//!
//! [`GaRunner`] orchestrates the complete evolutionary process:
//! initialization → selection → crossover → mutation → evaluation → repeat,
//! keeping the best individual seen across every generation.

use crate::config::GaConfig;
use crate::error::GaError;
use crate::generation::make_next_generation_with;
use crate::random::{RandomSource, RngSource};
use crate::statistics::{compare_fitness, statistics, GenerationStats};
use crate::types::{random_population, FitnessFunction, Individual};
use tracing::{debug, info, instrument};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Result of a GA optimization run.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GaResult {
    /// The best individual found during the entire run.
    pub best: Individual,

    /// Total number of generations bred.
    pub generations: usize,

    /// Best-so-far fitness after the initial population and after each
    /// generation. Never decreases.
    pub fitness_history: Vec<f64>,
}

/// Receives progress notifications from a run.
///
/// Both methods default to no-ops.
pub trait GaObserver {
    /// Called once with the best individual of the initial population,
    /// before any generation is bred.
    fn on_start(&mut self, _best: &Individual) {}

    /// Called after each generation has been bred and scored.
    fn on_generation(&mut self, _stats: &GenerationStats) {}
}

/// An observer that ignores every notification.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl GaObserver for NoopObserver {}

/// Executes the GA evolutionary loop.
///
/// # Usage
///
/// ```
/// use u_bitga::{GaConfig, GaRunner, Genome};
///
/// let onemax = |g: &Genome| g.count_ones() as f64;
/// let config = GaConfig::default()
///     .with_population_size(20)
///     .with_genome_length(16)
///     .with_max_generations(10)
///     .with_seed(42);
///
/// let result = GaRunner::run(&onemax, &config).unwrap();
/// assert_eq!(result.best.genome().len(), 16);
/// assert_eq!(result.fitness_history.len(), 11);
/// ```
pub struct GaRunner;

impl GaRunner {
    /// Runs the GA with a source seeded from `config.seed`.
    pub fn run<F>(fitness_fn: &F, config: &GaConfig) -> Result<GaResult, GaError>
    where
        F: FitnessFunction + ?Sized,
    {
        Self::run_with_observer(fitness_fn, config, &mut NoopObserver)
    }

    /// Runs the GA with a source seeded from `config.seed`, reporting
    /// progress to `observer`.
    pub fn run_with_observer<F, O>(
        fitness_fn: &F,
        config: &GaConfig,
        observer: &mut O,
    ) -> Result<GaResult, GaError>
    where
        F: FitnessFunction + ?Sized,
        O: GaObserver + ?Sized,
    {
        let mut rng = match config.seed {
            Some(seed) => RngSource::seeded(seed),
            None => RngSource::from_entropy(),
        };
        Self::run_with_source(fitness_fn, config, &mut rng, observer)
    }

    /// Runs the GA drawing every random decision from `rng`.
    ///
    /// The configuration is validated before any draw is made. Errors raised
    /// mid-run abort the run; no partial result is returned.
    #[instrument(
        level = "info",
        skip_all,
        fields(
            population_size = config.population_size,
            genome_length = config.genome_length,
            max_generations = config.max_generations
        )
    )]
    pub fn run_with_source<F, S, O>(
        fitness_fn: &F,
        config: &GaConfig,
        rng: &mut S,
        observer: &mut O,
    ) -> Result<GaResult, GaError>
    where
        F: FitnessFunction + ?Sized,
        S: RandomSource + ?Sized,
        O: GaObserver + ?Sized,
    {
        config.validate()?;

        let mut population = random_population(
            config.population_size,
            config.genome_length,
            fitness_fn,
            rng,
        )?;
        let mut best = statistics(&population)?.clone();
        info!(
            fitness = best.fitness(),
            genome = %best.genome(),
            "initial population best"
        );
        observer.on_start(&best);

        let mut fitness_history = Vec::with_capacity(config.max_generations + 1);
        fitness_history.push(best.fitness());

        for generation in 1..=config.max_generations {
            population = make_next_generation_with(
                &population,
                config.population_size,
                fitness_fn,
                config.mutation_rate,
                config.crossover_rate,
                config.parallel,
                rng,
            )?;

            best = compare_fitness(&best, statistics(&population)?).clone();
            fitness_history.push(best.fitness());

            let stats = GenerationStats::from_population(generation, &population, &best)?;
            debug!(
                generation,
                best_fitness = stats.best_fitness,
                mean_fitness = stats.mean_fitness,
                best_so_far = stats.best_so_far,
                "generation complete"
            );
            observer.on_generation(&stats);
        }

        info!(
            fitness = best.fitness(),
            genome = %best.genome(),
            "run finished"
        );
        Ok(GaResult {
            best,
            generations: config.max_generations,
            fitness_history,
        })
    }
}

/// Runs the GA and returns only the best individual found.
pub fn genetic_algorithm<F, S>(
    fitness_fn: &F,
    config: &GaConfig,
    rng: &mut S,
) -> Result<Individual, GaError>
where
    F: FitnessFunction + ?Sized,
    S: RandomSource + ?Sized,
{
    GaRunner::run_with_source(fitness_fn, config, rng, &mut NoopObserver).map(|r| r.best)
}

// ============================================================================
// Tests
// ============================================================================
