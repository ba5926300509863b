//! This place defines the ring of integers modulo `Q` that polynomial coefficients live in.

use std::fmt::{Debug, Display};

use crate::{AlgebraError, RingOps};

mod zq;

pub use zq::{Zq, Zq12289, Zq2047};

/// A trait defining an element of the ring `Z/QZ`.
///
/// Implementors keep the arithmetic of `+`, `-`, `*` and unary `-` closed in the ring
/// through the operator traits bundled in [`RingOps`]. The Nussbaumer engine is written
/// against this trait only, so any modular integer type can be plugged in.
///
/// Two elements compare equal when their difference is divisible by the modulus.
pub trait Ring:
    Sized + Copy + Clone + Debug + Display + Default + Eq + PartialEq + Send + Sync + RingOps
{
    /// Returns the modulus `Q`.
    fn modulus_value() -> u64;

    /// Creates an element from a signed integer, reducing it into the ring.
    fn from_i64(value: i64) -> Self;

    /// Returns the canonical representative in `[0, Q)`, widened to `u64`.
    fn to_u64(self) -> u64;

    /// Return `self * scalar`, where `scalar` is a small integer.
    fn mul_scalar(self, scalar: i64) -> Self;

    /// Calculates the multiplicative inverse of `self`.
    ///
    /// Fails when `gcd(self, Q) != 1`.
    fn try_inv(self) -> Result<Self, AlgebraError>;
}
