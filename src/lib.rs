//! Bit-string genetic algorithm engine.
//!
//! Evolves a population of fixed-length bit strings against a caller-supplied
//! fitness function (larger is better) and returns the best individual seen
//! across the run.
//!
//! - **Genomes**: [`Genome`] bit strings, scored into [`Individual`]s.
//! - **Operators**: single-locus bit-flip [`mutate`], one-point [`crossover`],
//!   and [`breed`] which composes both.
//! - **Selection**: fitness-proportionate roulette wheel
//!   ([`calculate_sampling_probabilities`], [`roulette_wheel_selection`]).
//! - **Generations**: [`make_next_generation`] replaces the whole population
//!   each round; there is no elitism.
//! - **Driver**: [`GaRunner`] runs the loop and tracks the best-so-far.
//!
//! Every random decision is drawn from an explicit [`RandomSource`]. A run
//! seeded with [`RngSource::seeded`] or replayed from a [`ReplaySource`] is
//! fully reproducible.
//!
//! # Example
//!
//! ```
//! use u_bitga::{GaConfig, GaRunner, Genome};
//!
//! let onemax = |g: &Genome| g.count_ones() as f64;
//! let config = GaConfig::default()
//!     .with_population_size(40)
//!     .with_genome_length(24)
//!     .with_max_generations(50)
//!     .with_seed(42);
//!
//! let result = GaRunner::run(&onemax, &config).unwrap();
//! println!("best: {} ({})", result.best.genome(), result.best.fitness());
//! ```
//!
//! # Features
//!
//! - `parallel`: evaluate children with rayon. Draw order is unchanged, so
//!   results are identical to a sequential run.
//! - `serde`: `Serialize`/`Deserialize` for configs, genomes and results.
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*

mod config;
mod error;
mod generation;
mod operators;
mod random;
mod runner;
mod selection;
mod statistics;
mod types;

pub use config::GaConfig;
pub use error::GaError;
pub use generation::{make_next_generation, make_next_generation_with, pair_off_and_breed};
pub use operators::{breed, cross, crossover, mutate};
pub use random::{RandomSource, ReplaySource, RngSource};
pub use runner::{genetic_algorithm, GaObserver, GaResult, GaRunner, NoopObserver};
pub use selection::{calculate_sampling_probabilities, roulette_wheel_selection};
pub use statistics::{compare_fitness, statistics, GenerationStats};
pub use types::{
    random_genome, random_individual, random_population, FitnessFunction, Genome, Individual,
};
