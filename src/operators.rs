//! Genetic operators for bit-string genomes.
//!
//! All operators are pure: they take genomes by reference and return new
//! ones. Random decisions are drawn from the caller's [`RandomSource`] in a
//! fixed order:
//!
//! 1. [`crossover`]: one unit draw decides whether to splice, then one index
//!    draw picks the point (only when splicing).
//! 2. [`mutate`]: one unit draw decides whether to flip, then one index draw
//!    picks the locus (only when flipping).
//!
//! [`breed`] runs crossover once and mutation once per child, in that order.
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*

use crate::error::GaError;
use crate::random::RandomSource;
use crate::types::{FitnessFunction, Genome, Individual};
use tracing::instrument;

// ============================================================================
// Mutation
// ============================================================================

/// Single-locus bit-flip mutation.
///
/// With probability `mutation_rate`, flips exactly one uniformly chosen bit;
/// otherwise returns an equal copy. The result never differs from `genome`
/// in more than one position.
///
/// `genome` must not be empty when the flip fires; configuration validation
/// rules that out before a run starts.
pub fn mutate<S: RandomSource + ?Sized>(
    genome: &Genome,
    mutation_rate: f64,
    rng: &mut S,
) -> Result<Genome, GaError> {
    if rng.next_unit()? >= mutation_rate {
        return Ok(genome.clone());
    }
    let locus = rng.next_index(genome.len())?;
    genome.flip(locus).ok_or(GaError::DrawOutOfRange {
        value: locus as f64,
        bound: genome.len() as f64,
    })
}

// ============================================================================
// Crossover
// ============================================================================

/// One-point splice: `front[..point]` followed by `back[point..]`.
///
/// # Errors
///
/// - [`GaError::GenomeLengthMismatch`] if the genomes differ in length.
/// - [`GaError::CrossoverPointOutOfRange`] if `point > front.len()`.
pub fn cross(front: &Genome, back: &Genome, point: usize) -> Result<Genome, GaError> {
    check_same_length(front, back)?;
    if point > front.len() {
        return Err(GaError::CrossoverPointOutOfRange {
            point,
            len: front.len(),
        });
    }
    Ok(front.bits()[..point]
        .iter()
        .chain(&back.bits()[point..])
        .copied()
        .collect())
}

/// One-point crossover of two parents.
///
/// With probability `crossover_rate`, draws a point in `[0, k)` and returns
/// `(cross(dad, mom, p), cross(mom, dad, p))`; otherwise returns copies of
/// the parents unchanged. Both children share the same point.
#[instrument(level = "trace", skip(dad, mom, rng), fields(genome_length = dad.len()))]
pub fn crossover<S: RandomSource + ?Sized>(
    dad: &Genome,
    mom: &Genome,
    crossover_rate: f64,
    rng: &mut S,
) -> Result<(Genome, Genome), GaError> {
    check_same_length(dad, mom)?;
    if rng.next_unit()? >= crossover_rate {
        return Ok((dad.clone(), mom.clone()));
    }
    let point = rng.next_index(dad.len())?;
    Ok((cross(dad, mom, point)?, cross(mom, dad, point)?))
}

fn check_same_length(a: &Genome, b: &Genome) -> Result<(), GaError> {
    if a.len() != b.len() {
        return Err(GaError::GenomeLengthMismatch {
            expected: a.len(),
            actual: b.len(),
        });
    }
    Ok(())
}

// ============================================================================
// Breeding
// ============================================================================

/// Crossover followed by independent mutation of each child, without
/// evaluation. Shared by [`breed`] and the parallel generation path so both
/// consume draws in the same order.
pub(crate) fn breed_genomes<S: RandomSource + ?Sized>(
    dad: &Genome,
    mom: &Genome,
    mutation_rate: f64,
    crossover_rate: f64,
    rng: &mut S,
) -> Result<(Genome, Genome), GaError> {
    let (first, second) = crossover(dad, mom, crossover_rate, rng)?;
    let first = mutate(&first, mutation_rate, rng)?;
    let second = mutate(&second, mutation_rate, rng)?;
    Ok((first, second))
}

/// Produces two children from two parents.
///
/// Applies [`crossover`] to the parents' genomes, [`mutate`] to each
/// resulting genome, and evaluates both children with `fitness_fn`.
pub fn breed<F, S>(
    dad: &Individual,
    mom: &Individual,
    fitness_fn: &F,
    mutation_rate: f64,
    crossover_rate: f64,
    rng: &mut S,
) -> Result<(Individual, Individual), GaError>
where
    F: FitnessFunction + ?Sized,
    S: RandomSource + ?Sized,
{
    let (first, second) = breed_genomes(
        dad.genome(),
        mom.genome(),
        mutation_rate,
        crossover_rate,
        rng,
    )?;
    Ok((
        Individual::evaluate(first, fitness_fn),
        Individual::evaluate(second, fitness_fn),
    ))
}

// ============================================================================
// Tests
// ============================================================================
