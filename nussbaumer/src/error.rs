//! This module defines the errors that may occur while
//! transforming or multiplying polynomials.

use algebra::AlgebraError;

use crate::backend::Stage;

/// Errors that may occur.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum NussbaumerError {
    /// Error that occurs when the given size is not a supported power of two.
    #[error("Size {size} is not a power of two between 2 and 2^{max_log}!", max_log = crate::Decomposition::MAX_LOG_N)]
    InvalidSize {
        /// The rejected size.
        size: usize,
    },
    /// Error that occurs when an operand does not have the length the engine expects.
    #[error("Expected an operand of length {expected}, found length {found}!")]
    LengthMismatch {
        /// The length the engine expects.
        expected: usize,
        /// The length that was passed in.
        found: usize,
    },
    /// Error that occurs when the correction factor has no inverse with the ring's modulus.
    #[error("Correction factor {factor} has no inverse element with the modulus {modulus}!")]
    NonInvertibleFactor {
        /// The correction factor of the engine.
        factor: u64,
        /// The modulus of the ring.
        modulus: u64,
    },
    /// Error that occurs when a backend disagrees with the reference engine.
    #[error("{stage} output differs at index {index}: expected {expected}, found {found}")]
    Conformance {
        /// The backend stage that was checked.
        stage: Stage,
        /// Position in the backend's buffer.
        index: usize,
        /// The value computed by the engine.
        expected: u64,
        /// The value produced by the backend.
        found: u64,
    },
    /// Error that occurs when a backend produces a value above its declared bound.
    #[error("{stage} value {value} at index {index} is not below {bound}")]
    OutOfRange {
        /// The backend stage that was checked.
        stage: Stage,
        /// Position in the backend's buffer.
        index: usize,
        /// The offending value.
        value: u64,
        /// The exclusive bound.
        bound: u64,
    },
    /// Error from the ring or polynomial layer.
    #[error(transparent)]
    Algebra(#[from] AlgebraError),
}
