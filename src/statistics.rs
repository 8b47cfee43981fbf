//! Population statistics.
//!
//! [`statistics`] reduces a population to its fittest individual;
//! [`GenerationStats`] summarizes a scored generation for logging and
//! observers.

use crate::error::GaError;
use crate::types::Individual;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Returns the fitter of two individuals, preferring `a` on ties.
pub fn compare_fitness<'a>(a: &'a Individual, b: &'a Individual) -> &'a Individual {
    if a.fitness() < b.fitness() {
        b
    } else {
        a
    }
}

/// Returns the fittest individual, the first one on ties.
///
/// # Errors
///
/// [`GaError::EmptyPopulation`] if `population` is empty.
pub fn statistics(population: &[Individual]) -> Result<&Individual, GaError> {
    let (first, rest) = population.split_first().ok_or(GaError::EmptyPopulation)?;
    Ok(rest.iter().fold(first, compare_fitness))
}

/// Summary of one scored generation.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GenerationStats {
    /// Generation number; 0 is the initial population.
    pub generation: usize,

    /// Fitness of the fittest individual in this generation.
    pub best_fitness: f64,

    /// Mean fitness across the generation.
    pub mean_fitness: f64,

    /// Fitness of the best individual seen so far in the run.
    pub best_so_far: f64,
}

impl GenerationStats {
    /// Summarizes `population` as generation number `generation`.
    pub fn from_population(
        generation: usize,
        population: &[Individual],
        best_so_far: &Individual,
    ) -> Result<Self, GaError> {
        let best = statistics(population)?;
        let total: f64 = population.iter().map(Individual::fitness).sum();
        Ok(Self {
            generation,
            best_fitness: best.fitness(),
            mean_fitness: total / population.len() as f64,
            best_so_far: best_so_far.fitness(),
        })
    }
}
