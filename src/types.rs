//! Genome and individual model.
//!
//! A [`Genome`] is an immutable fixed-length bit string. An [`Individual`]
//! pairs a genome with the fitness computed from it; the only way to build
//! one is [`Individual::evaluate`], so the cached fitness always matches the
//! genome.

use crate::error::GaError;
use crate::random::RandomSource;
use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Scores a genome. Larger is better.
///
/// Implementations must be pure: the same genome always yields the same
/// score. Selection relies on this, and parallel evaluation calls it from
/// several threads at once.
///
/// Any `Fn(&Genome) -> f64 + Send + Sync` is a fitness function:
///
/// ```
/// use u_bitga::{FitnessFunction, Genome};
///
/// let onemax = |g: &Genome| g.count_ones() as f64;
/// let genome: Genome = "1101".parse().unwrap();
/// assert_eq!(onemax.evaluate(&genome), 3.0);
/// ```
pub trait FitnessFunction: Send + Sync {
    /// Returns the fitness of `genome`.
    fn evaluate(&self, genome: &Genome) -> f64;
}

impl<F> FitnessFunction for F
where
    F: Fn(&Genome) -> f64 + Send + Sync,
{
    fn evaluate(&self, genome: &Genome) -> f64 {
        self(genome)
    }
}

/// A fixed-length bit string.
///
/// Genomes are never modified in place; operators such as
/// [`flip`](Genome::flip) and [`cross`](crate::cross) return new values.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Genome {
    bits: Vec<bool>,
}

impl Genome {
    /// Number of loci.
    pub fn len(&self) -> usize {
        self.bits.len()
    }

    /// Returns `true` for the zero-length genome.
    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// The bits, locus 0 first.
    pub fn bits(&self) -> &[bool] {
        &self.bits
    }

    /// Number of set bits.
    pub fn count_ones(&self) -> usize {
        self.bits.iter().filter(|&&b| b).count()
    }

    /// Returns a copy with the bit at `locus` inverted.
    ///
    /// Returns `None` if `locus` is out of range.
    pub fn flip(&self, locus: usize) -> Option<Genome> {
        if locus >= self.bits.len() {
            return None;
        }
        let mut bits = self.bits.clone();
        bits[locus] = !bits[locus];
        Some(Genome { bits })
    }

    /// Number of loci at which `self` and `other` differ.
    ///
    /// Loci past the end of the shorter genome are not counted.
    pub fn hamming_distance(&self, other: &Genome) -> usize {
        self.bits
            .iter()
            .zip(other.bits.iter())
            .filter(|(a, b)| a != b)
            .count()
    }
}

impl From<Vec<bool>> for Genome {
    fn from(bits: Vec<bool>) -> Self {
        Self { bits }
    }
}

impl FromIterator<bool> for Genome {
    fn from_iter<T: IntoIterator<Item = bool>>(iter: T) -> Self {
        Self {
            bits: iter.into_iter().collect(),
        }
    }
}

impl fmt::Display for Genome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &bit in &self.bits {
            f.write_str(if bit { "1" } else { "0" })?;
        }
        Ok(())
    }
}

impl FromStr for Genome {
    type Err = GaError;

    /// Parses a string of `0` and `1` characters, locus 0 first.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.chars()
            .map(|c| match c {
                '0' => Ok(false),
                '1' => Ok(true),
                other => Err(GaError::InvalidBit(other)),
            })
            .collect()
    }
}

/// A genome together with its fitness.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Individual {
    genome: Genome,
    fitness: f64,
}

impl Individual {
    /// Scores `genome` with `fitness_fn` and wraps both.
    pub fn evaluate<F: FitnessFunction + ?Sized>(genome: Genome, fitness_fn: &F) -> Self {
        let fitness = fitness_fn.evaluate(&genome);
        Self { genome, fitness }
    }

    /// The genome this individual was scored from.
    pub fn genome(&self) -> &Genome {
        &self.genome
    }

    /// Fitness of [`genome`](Self::genome), computed at construction.
    pub fn fitness(&self) -> f64 {
        self.fitness
    }

    /// Splits the individual into its genome and fitness.
    pub fn into_parts(self) -> (Genome, f64) {
        (self.genome, self.fitness)
    }
}

/// Draws a genome of `k` independent fair bits, one index draw per bit.
pub fn random_genome<S: RandomSource + ?Sized>(k: usize, rng: &mut S) -> Result<Genome, GaError> {
    if k < 1 {
        return Err(GaError::InvalidConfiguration(
            "genome length must be at least 1".into(),
        ));
    }
    (0..k)
        .map(|_| rng.next_index(2).map(|bit| bit == 1))
        .collect()
}

/// Draws a random genome of length `k` and evaluates it.
pub fn random_individual<F, S>(k: usize, fitness_fn: &F, rng: &mut S) -> Result<Individual, GaError>
where
    F: FitnessFunction + ?Sized,
    S: RandomSource + ?Sized,
{
    let genome = random_genome(k, rng)?;
    Ok(Individual::evaluate(genome, fitness_fn))
}

/// Builds `n` independent random individuals of genome length `k`.
pub fn random_population<F, S>(
    n: usize,
    k: usize,
    fitness_fn: &F,
    rng: &mut S,
) -> Result<Vec<Individual>, GaError>
where
    F: FitnessFunction + ?Sized,
    S: RandomSource + ?Sized,
{
    if n < 1 {
        return Err(GaError::InvalidConfiguration(
            "population size must be at least 1".into(),
        ));
    }
    (0..n)
        .map(|_| random_individual(k, fitness_fn, rng))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::{ReplaySource, RngSource};

    fn onemax(g: &Genome) -> f64 {
        g.count_ones() as f64
    }

    #[test]
    fn test_random_genome_length() {
        let mut rng = RngSource::seeded(42);
        for k in 1..50 {
            let g = random_genome(k, &mut rng).unwrap();
            assert_eq!(g.len(), k);
        }
    }

    #[test]
    fn test_random_genome_follows_draws() {
        let mut rng = ReplaySource::new(vec![], vec![1, 0, 0, 1, 1]);
        let g = random_genome(5, &mut rng).unwrap();
        assert_eq!(g.to_string(), "10011");
        assert!(rng.is_exhausted());
    }

    #[test]
    fn test_random_genome_zero_length() {
        let mut rng = RngSource::seeded(42);
        assert!(matches!(
            random_genome(0, &mut rng),
            Err(GaError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn test_random_individual_is_evaluated() {
        let mut rng = ReplaySource::new(vec![], vec![1, 1, 0]);
        let ind = random_individual(3, &onemax, &mut rng).unwrap();
        assert_eq!(ind.genome().to_string(), "110");
        assert_eq!(ind.fitness(), 2.0);
    }

    #[test]
    fn test_random_individual_zero_length() {
        let mut rng = RngSource::seeded(1);
        assert!(random_individual(0, &onemax, &mut rng).is_err());
    }

    #[test]
    fn test_random_population() {
        let mut rng = RngSource::seeded(42);
        let pop = random_population(10, 8, &onemax, &mut rng).unwrap();
        assert_eq!(pop.len(), 10);
        for ind in &pop {
            assert_eq!(ind.genome().len(), 8);
            assert_eq!(ind.fitness(), onemax(ind.genome()));
        }
    }

    #[test]
    fn test_random_population_empty() {
        let mut rng = RngSource::seeded(42);
        assert!(matches!(
            random_population(0, 8, &onemax, &mut rng),
            Err(GaError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn test_random_population_propagates_exhaustion() {
        // Two individuals of three bits need six draws.
        let mut rng = ReplaySource::new(vec![], vec![0, 1, 0, 1, 1]);
        assert!(matches!(
            random_population(2, 3, &onemax, &mut rng),
            Err(GaError::ExhaustedRandomSource { draw: "index", .. })
        ));
    }

    #[test]
    fn test_genome_parse_and_display() {
        let g: Genome = "01101".parse().unwrap();
        assert_eq!(g.len(), 5);
        assert_eq!(g.bits(), &[false, true, true, false, true]);
        assert_eq!(g.to_string(), "01101");
        assert_eq!("01x".parse::<Genome>(), Err(GaError::InvalidBit('x')));
    }

    #[test]
    fn test_flip_returns_new_genome() {
        let g: Genome = "000".parse().unwrap();
        let flipped = g.flip(1).unwrap();
        assert_eq!(flipped.to_string(), "010");
        assert_eq!(g.to_string(), "000");
        assert!(g.flip(3).is_none());
    }

    #[test]
    fn test_hamming_distance() {
        let a: Genome = "10110".parse().unwrap();
        let b: Genome = "00111".parse().unwrap();
        assert_eq!(a.hamming_distance(&b), 2);
        assert_eq!(a.hamming_distance(&a), 0);
    }

    #[test]
    fn test_into_parts() {
        let g: Genome = "111".parse().unwrap();
        let (genome, fitness) = Individual::evaluate(g.clone(), &onemax).into_parts();
        assert_eq!(genome, g);
        assert_eq!(fitness, 3.0);
    }
}
