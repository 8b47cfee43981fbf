//! Generation driver.
//!
//! Builds the next population from the current one: the sampling
//! distribution is computed once, then parents are drawn in pairs and bred
//! until the new population is full. There is no elitism; every member of
//! the next generation is a freshly bred child.

use crate::error::GaError;
use crate::operators::breed;
use crate::random::RandomSource;
use crate::selection::{calculate_sampling_probabilities, roulette_wheel_selection};
use crate::types::{FitnessFunction, Individual};
use tracing::instrument;

#[cfg(feature = "parallel")]
use crate::operators::breed_genomes;
#[cfg(feature = "parallel")]
use crate::types::Genome;
#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Draws two parents independently. They may be the same individual.
fn select_parents<'a, S: RandomSource + ?Sized>(
    population: &'a [Individual],
    probabilities: &[f64],
    rng: &mut S,
) -> Result<(&'a Individual, &'a Individual), GaError> {
    if probabilities.len() != population.len() {
        return Err(GaError::InvalidConfiguration(format!(
            "sampling distribution has {} entries for {} individuals",
            probabilities.len(),
            population.len()
        )));
    }
    let dad = roulette_wheel_selection(probabilities, rng)?;
    let mom = roulette_wheel_selection(probabilities, rng)?;
    Ok((&population[dad], &population[mom]))
}

/// Selects two parents by roulette wheel and breeds them.
///
/// `probabilities` must be the distribution computed from `population`.
pub fn pair_off_and_breed<F, S>(
    population: &[Individual],
    probabilities: &[f64],
    fitness_fn: &F,
    mutation_rate: f64,
    crossover_rate: f64,
    rng: &mut S,
) -> Result<(Individual, Individual), GaError>
where
    F: FitnessFunction + ?Sized,
    S: RandomSource + ?Sized,
{
    let (dad, mom) = select_parents(population, probabilities, rng)?;
    breed(dad, mom, fitness_fn, mutation_rate, crossover_rate, rng)
}

/// Breeds a new population of `n` children from `population`.
///
/// Equivalent to [`make_next_generation_with`] with `parallel = false`.
pub fn make_next_generation<F, S>(
    population: &[Individual],
    n: usize,
    fitness_fn: &F,
    mutation_rate: f64,
    crossover_rate: f64,
    rng: &mut S,
) -> Result<Vec<Individual>, GaError>
where
    F: FitnessFunction + ?Sized,
    S: RandomSource + ?Sized,
{
    make_next_generation_with(
        population,
        n,
        fitness_fn,
        mutation_rate,
        crossover_rate,
        false,
        rng,
    )
}

/// Breeds a new population of `n` children from `population`.
///
/// The sampling distribution is frozen for the whole round, then
/// [`pair_off_and_breed`] runs `n / 2` times. `n` must be a positive even
/// number; an odd size would silently lose one individual per generation.
///
/// With `parallel` set and the `parallel` feature enabled, children are
/// evaluated with rayon after all random draws have been made in the
/// sequential order, so the result is identical to the sequential one.
/// Without the feature the flag is ignored.
///
/// # Errors
///
/// - [`GaError::InvalidConfiguration`] if `n` is zero or odd.
/// - [`GaError::FitnessSumNonPositive`] or [`GaError::FitnessSumNotFinite`]
///   if the population's total fitness is not a positive finite number.
/// - Any error from the random source.
#[instrument(
    level = "debug",
    skip(population, fitness_fn, rng),
    fields(population_size = population.len())
)]
pub fn make_next_generation_with<F, S>(
    population: &[Individual],
    n: usize,
    fitness_fn: &F,
    mutation_rate: f64,
    crossover_rate: f64,
    parallel: bool,
    rng: &mut S,
) -> Result<Vec<Individual>, GaError>
where
    F: FitnessFunction + ?Sized,
    S: RandomSource + ?Sized,
{
    if n == 0 || n % 2 != 0 {
        return Err(GaError::InvalidConfiguration(format!(
            "population size must be a positive even number, got {n}"
        )));
    }
    let probabilities = calculate_sampling_probabilities(population)?;

    #[cfg(feature = "parallel")]
    if parallel {
        return breed_in_parallel(
            population,
            &probabilities,
            n,
            fitness_fn,
            mutation_rate,
            crossover_rate,
            rng,
        );
    }
    #[cfg(not(feature = "parallel"))]
    let _ = parallel;

    let mut next_gen = Vec::with_capacity(n);
    for _ in 0..n / 2 {
        let (first, second) = pair_off_and_breed(
            population,
            &probabilities,
            fitness_fn,
            mutation_rate,
            crossover_rate,
            rng,
        )?;
        next_gen.push(first);
        next_gen.push(second);
    }
    Ok(next_gen)
}

/// Makes every draw in the sequential order, then evaluates the children
/// with rayon.
#[cfg(feature = "parallel")]
fn breed_in_parallel<F, S>(
    population: &[Individual],
    probabilities: &[f64],
    n: usize,
    fitness_fn: &F,
    mutation_rate: f64,
    crossover_rate: f64,
    rng: &mut S,
) -> Result<Vec<Individual>, GaError>
where
    F: FitnessFunction + ?Sized,
    S: RandomSource + ?Sized,
{
    let mut genomes: Vec<Genome> = Vec::with_capacity(n);
    for _ in 0..n / 2 {
        let (dad, mom) = select_parents(population, probabilities, rng)?;
        let (first, second) = breed_genomes(
            dad.genome(),
            mom.genome(),
            mutation_rate,
            crossover_rate,
            rng,
        )?;
        genomes.push(first);
        genomes.push(second);
    }
    Ok(genomes
        .into_par_iter()
        .map(|g| Individual::evaluate(g, fitness_fn))
        .collect())
}
