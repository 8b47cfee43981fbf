//! Error types for the GA engine.
//!
//! Every fallible operation in the crate returns [`GaError`]. Configuration
//! errors are detected before the generational loop starts; anything raised
//! mid-run aborts the run without a partial result.

use thiserror::Error;

/// Error type for all GA operations.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum GaError {
    /// A configuration parameter is out of its legal range.
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// Total population fitness is not positive, so proportional selection
    /// has no meaningful distribution.
    #[error("Total population fitness must be positive, got {total}")]
    FitnessSumNonPositive { total: f64 },

    /// Total population fitness overflowed to infinity, so every share of
    /// the wheel would be zero or NaN.
    #[error("Total population fitness must be finite, got {total}")]
    FitnessSumNotFinite { total: f64 },

    /// A replay source was asked for more draws than it was given.
    #[error("Random source exhausted: no {draw} draw left after {consumed} consumed")]
    ExhaustedRandomSource { draw: &'static str, consumed: usize },

    /// A canned draw lies outside the range the caller asked for.
    #[error("Random draw {value} outside [0, {bound})")]
    DrawOutOfRange { value: f64, bound: f64 },

    /// Two genomes that must be spliced have different lengths.
    #[error("Genome length mismatch: expected {expected}, got {actual}")]
    GenomeLengthMismatch { expected: usize, actual: usize },

    /// A crossover point lies beyond the end of the genome.
    #[error("Crossover point {point} out of range for genome of length {len}")]
    CrossoverPointOutOfRange { point: usize, len: usize },

    /// An operation that needs at least one individual got none.
    #[error("Population is empty")]
    EmptyPopulation,

    /// A genome literal contained something other than `0` or `1`.
    #[error("Invalid bit {0:?}: expected '0' or '1'")]
    InvalidBit(char),
}
