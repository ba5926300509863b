//! This module defines some errors that
//! may occur during the execution of the library.

use thiserror::Error;

/// Errors that may occur.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AlgebraError {
    /// Error that occurs when the given value has no inverse element with the given modulus.
    #[error("Value {value} has no inverse element with the modulus {modulus}!")]
    NoInverse {
        /// The value being inverted.
        value: u64,
        /// The modulus.
        modulus: u64,
    },
    /// Error that occurs when a coefficient is accessed beyond the length of a polynomial.
    #[error("Coefficient index {index} is out of range for a polynomial of length {len}")]
    IndexOutOfRange {
        /// The requested index.
        index: usize,
        /// The length of the polynomial.
        len: usize,
    },
    /// Error that occurs when two operands do not have a compatible length.
    #[error("Operand lengths {lhs} and {rhs} are not compatible")]
    SizeMismatch {
        /// Length of the left operand.
        lhs: usize,
        /// Length of the right operand.
        rhs: usize,
    },
    /// Error that occurs when an operation needs a power-of-two length.
    #[error("Length {len} is not a power of two")]
    NotPowerOfTwo {
        /// The offending length.
        len: usize,
    },
}
