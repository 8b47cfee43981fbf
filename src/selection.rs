//! Fitness-proportionate (roulette wheel) selection.
//!
//! Selection is split in two so the distribution is computed once per
//! generation and then sampled many times:
//!
//! 1. [`calculate_sampling_probabilities`]: `p_i = f_i / Σf`.
//! 2. [`roulette_wheel_selection`]: one unit draw, walked across `p`.
//!
//! Fitness is maximized: larger fitness means a larger slice of the wheel.
//! Fitness values are expected to be non-negative.
//!
//! # References
//!
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and
//!   Machine Learning*, ch. 1
//! - Blickle & Thiele (1996), "A Comparison of Selection Schemes used in
//!   Evolutionary Algorithms"

use crate::error::GaError;
use crate::random::RandomSource;
use crate::types::Individual;

/// Computes each individual's share of the total fitness.
///
/// The result has one entry per individual, in population order, and sums
/// to 1 within floating tolerance.
///
/// # Errors
///
/// - [`GaError::FitnessSumNonPositive`] when the total fitness is zero,
///   negative, or NaN (this includes the empty population).
/// - [`GaError::FitnessSumNotFinite`] when the total is infinite, either
///   from an infinite fitness or from overflow.
pub fn calculate_sampling_probabilities(population: &[Individual]) -> Result<Vec<f64>, GaError> {
    let total: f64 = population.iter().map(Individual::fitness).sum();
    if total.is_nan() || total <= 0.0 {
        return Err(GaError::FitnessSumNonPositive { total });
    }
    if total.is_infinite() {
        return Err(GaError::FitnessSumNotFinite { total });
    }
    Ok(population.iter().map(|ind| ind.fitness() / total).collect())
}

/// Draws an index with probability `probabilities[i]`.
///
/// Consumes exactly one unit draw `mark`, then walks the slots in order,
/// subtracting each slot's mass until `mark` falls inside one. If rounding
/// leaves `mark` past the last slot, the last index is returned.
///
/// # Errors
///
/// [`GaError::EmptyPopulation`] if `probabilities` is empty (no draw is
/// consumed).
pub fn roulette_wheel_selection<S: RandomSource + ?Sized>(
    probabilities: &[f64],
    rng: &mut S,
) -> Result<usize, GaError> {
    let last = probabilities
        .len()
        .checked_sub(1)
        .ok_or(GaError::EmptyPopulation)?;
    let mut mark = rng.next_unit()?;
    for (i, &p) in probabilities.iter().enumerate() {
        if mark < p {
            return Ok(i);
        }
        mark -= p;
    }
    Ok(last) // floating-point fallback
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::{ReplaySource, RngSource};
    use crate::types::Genome;

    fn scored(fitness: f64) -> Individual {
        let genome: Genome = "1".parse().unwrap();
        Individual::evaluate(genome, &move |_: &Genome| fitness)
    }

    fn make_population(fitnesses: &[f64]) -> Vec<Individual> {
        fitnesses.iter().map(|&f| scored(f)).collect()
    }

    #[test]
    fn test_probabilities_are_proportional() {
        let pop = make_population(&[1.0, 3.0, 4.0]);
        let p = calculate_sampling_probabilities(&pop).unwrap();
        assert_eq!(p.len(), 3);
        assert!((p[0] - 0.125).abs() < 1e-12);
        assert!((p[1] - 0.375).abs() < 1e-12);
        assert!((p[2] - 0.5).abs() < 1e-12);
        assert!((p.iter().sum::<f64>() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_probabilities_zero_total() {
        let pop = make_population(&[0.0, 0.0]);
        assert_eq!(
            calculate_sampling_probabilities(&pop),
            Err(GaError::FitnessSumNonPositive { total: 0.0 })
        );
    }

    #[test]
    fn test_probabilities_negative_total() {
        let pop = make_population(&[1.0, -4.0]);
        assert!(matches!(
            calculate_sampling_probabilities(&pop),
            Err(GaError::FitnessSumNonPositive { .. })
        ));
    }

    #[test]
    fn test_probabilities_nan_total() {
        let pop = make_population(&[1.0, f64::NAN]);
        assert!(matches!(
            calculate_sampling_probabilities(&pop),
            Err(GaError::FitnessSumNonPositive { .. })
        ));
    }

    #[test]
    fn test_probabilities_infinite_total() {
        let pop = make_population(&[f64::INFINITY, 1.0]);
        assert_eq!(
            calculate_sampling_probabilities(&pop),
            Err(GaError::FitnessSumNotFinite {
                total: f64::INFINITY
            })
        );
    }

    #[test]
    fn test_probabilities_overflowing_total() {
        let pop = make_population(&[f64::MAX, f64::MAX]);
        assert!(matches!(
            calculate_sampling_probabilities(&pop),
            Err(GaError::FitnessSumNotFinite { .. })
        ));
    }

    #[test]
    fn test_probabilities_empty_population() {
        assert!(matches!(
            calculate_sampling_probabilities(&[]),
            Err(GaError::FitnessSumNonPositive { .. })
        ));
    }

    #[test]
    fn test_wheel_walk() {
        let p = [0.25, 0.25, 0.5];
        let pick = |mark: f64| {
            let mut rng = ReplaySource::new(vec![mark], vec![]);
            roulette_wheel_selection(&p, &mut rng).unwrap()
        };
        assert_eq!(pick(0.0), 0);
        assert_eq!(pick(0.2), 0);
        assert_eq!(pick(0.25), 1);
        assert_eq!(pick(0.49), 1);
        assert_eq!(pick(0.5), 2);
        assert_eq!(pick(0.99), 2);
    }

    #[test]
    fn test_wheel_clamps_on_drift() {
        // Masses sum short of 1, so a high mark walks off the end.
        let p = [0.3, 0.3, 0.3];
        let mut rng = ReplaySource::new(vec![0.95], vec![]);
        assert_eq!(roulette_wheel_selection(&p, &mut rng).unwrap(), 2);
    }

    #[test]
    fn test_wheel_skips_zero_slots() {
        let p = [0.0, 1.0, 0.0];
        let mut rng = RngSource::seeded(42);
        for _ in 0..1000 {
            assert_eq!(roulette_wheel_selection(&p, &mut rng).unwrap(), 1);
        }
    }

    #[test]
    fn test_wheel_favors_fitter() {
        let pop = make_population(&[1.0, 50.0, 100.0, 10.0]);
        let p = calculate_sampling_probabilities(&pop).unwrap();
        let mut rng = RngSource::seeded(42);

        let mut counts = [0u32; 4];
        let n = 10_000;
        for _ in 0..n {
            counts[roulette_wheel_selection(&p, &mut rng).unwrap()] += 1;
        }
        assert!(
            counts[2] > counts[1] && counts[1] > counts[3] && counts[3] > counts[0],
            "selection counts should follow fitness order, got {counts:?}"
        );
    }

    #[test]
    fn test_wheel_empty() {
        let mut rng = ReplaySource::new(vec![0.5], vec![]);
        assert_eq!(
            roulette_wheel_selection(&[], &mut rng),
            Err(GaError::EmptyPopulation)
        );
        assert_eq!(rng.remaining_units(), 1);
    }
}
