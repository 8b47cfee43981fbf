//! Randomness sources.
//!
//! Every stochastic step of the GA draws from a [`RandomSource`] passed in
//! by the caller, never from a global generator. Two implementations ship
//! with the crate:
//!
//! - [`RngSource`]: adapts any [`rand::Rng`]; [`RngSource::seeded`] gives a
//!   reproducible PCG64 stream.
//! - [`ReplaySource`]: replays literal lists of draws and fails loudly when
//!   they run out. Used to pin down exact operator behaviour in tests.

use crate::error::GaError;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg64;

/// Uniform draws consumed by the GA.
///
/// Each call consumes exactly one draw. Reproducibility of a run depends on
/// the order of these calls, which is fixed by the operators.
pub trait RandomSource {
    /// Draws a real number uniformly from `[0, 1)`.
    fn next_unit(&mut self) -> Result<f64, GaError>;

    /// Draws an integer uniformly from `[0, n)`.
    ///
    /// Fails with [`GaError::InvalidConfiguration`] when `n == 0`.
    fn next_index(&mut self, n: usize) -> Result<usize, GaError>;
}

/// A [`RandomSource`] backed by a `rand` generator.
#[derive(Debug, Clone)]
pub struct RngSource<R> {
    rng: R,
}

impl<R: Rng> RngSource<R> {
    /// Wraps an existing generator.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RngSource<Pcg64> {
    /// Creates a reproducible source from a 64-bit seed.
    ///
    /// PCG64's output stream is fixed by its algorithm, so the same seed
    /// yields the same run across platforms and `rand` releases.
    pub fn seeded(seed: u64) -> Self {
        Self::new(Pcg64::seed_from_u64(seed))
    }

    /// Creates a source with a random seed.
    pub fn from_entropy() -> Self {
        Self::seeded(rand::random())
    }
}

impl<R: Rng> RandomSource for RngSource<R> {
    fn next_unit(&mut self) -> Result<f64, GaError> {
        Ok(self.rng.random::<f64>())
    }

    fn next_index(&mut self, n: usize) -> Result<usize, GaError> {
        if n == 0 {
            return Err(GaError::InvalidConfiguration(
                "cannot draw an index from an empty range".into(),
            ));
        }
        Ok(self.rng.random_range(0..n))
    }
}

/// A [`RandomSource`] that replays canned draws.
///
/// Unit draws and index draws come from two independent lists, each with
/// its own cursor. Asking for a draw past the end of a list fails with
/// [`GaError::ExhaustedRandomSource`]; a canned value outside the requested
/// range fails with [`GaError::DrawOutOfRange`].
///
/// ```
/// use u_bitga::{RandomSource, ReplaySource};
///
/// let mut source = ReplaySource::new(vec![0.25], vec![3]);
/// assert_eq!(source.next_unit().unwrap(), 0.25);
/// assert_eq!(source.next_index(5).unwrap(), 3);
/// assert!(source.next_unit().is_err());
/// ```
#[derive(Debug, Clone, Default)]
pub struct ReplaySource {
    units: Vec<f64>,
    indices: Vec<usize>,
    unit_cursor: usize,
    index_cursor: usize,
}

impl ReplaySource {
    /// Creates a source replaying `units` for [`next_unit`](RandomSource::next_unit)
    /// and `indices` for [`next_index`](RandomSource::next_index).
    pub fn new(units: Vec<f64>, indices: Vec<usize>) -> Self {
        Self {
            units,
            indices,
            unit_cursor: 0,
            index_cursor: 0,
        }
    }

    /// Number of unit draws not yet consumed.
    pub fn remaining_units(&self) -> usize {
        self.units.len() - self.unit_cursor
    }

    /// Number of index draws not yet consumed.
    pub fn remaining_indices(&self) -> usize {
        self.indices.len() - self.index_cursor
    }

    /// Returns `true` once every canned draw has been consumed.
    pub fn is_exhausted(&self) -> bool {
        self.remaining_units() == 0 && self.remaining_indices() == 0
    }
}

impl RandomSource for ReplaySource {
    fn next_unit(&mut self) -> Result<f64, GaError> {
        let value = *self
            .units
            .get(self.unit_cursor)
            .ok_or(GaError::ExhaustedRandomSource {
                draw: "unit",
                consumed: self.unit_cursor,
            })?;
        if !(0.0..1.0).contains(&value) {
            return Err(GaError::DrawOutOfRange { value, bound: 1.0 });
        }
        self.unit_cursor += 1;
        Ok(value)
    }

    fn next_index(&mut self, n: usize) -> Result<usize, GaError> {
        let value = *self
            .indices
            .get(self.index_cursor)
            .ok_or(GaError::ExhaustedRandomSource {
                draw: "index",
                consumed: self.index_cursor,
            })?;
        if value >= n {
            return Err(GaError::DrawOutOfRange {
                value: value as f64,
                bound: n as f64,
            });
        }
        self.index_cursor += 1;
        Ok(value)
    }
}
