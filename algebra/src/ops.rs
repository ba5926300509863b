//! Operator bundles shared by ring elements and polynomials.

use std::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use num_traits::{ConstOne, ConstZero};

/// Addition by value and by reference, with a constant zero.
pub trait AddOps
where
    Self: Copy
        + ConstZero
        + Add<Self, Output = Self>
        + AddAssign<Self>
        + for<'a> Add<&'a Self, Output = Self>
        + for<'a> AddAssign<&'a Self>,
{
}

impl<T> AddOps for T where
    Self: Copy
        + ConstZero
        + Add<Self, Output = Self>
        + AddAssign<Self>
        + for<'a> Add<&'a Self, Output = Self>
        + for<'a> AddAssign<&'a Self>
{
}

/// Subtraction by value and by reference, with a constant zero.
pub trait SubOps
where
    Self: Copy
        + ConstZero
        + Sub<Self, Output = Self>
        + SubAssign<Self>
        + for<'a> Sub<&'a Self, Output = Self>
        + for<'a> SubAssign<&'a Self>,
{
}

impl<T> SubOps for T where
    Self: Copy
        + ConstZero
        + Sub<Self, Output = Self>
        + SubAssign<Self>
        + for<'a> Sub<&'a Self, Output = Self>
        + for<'a> SubAssign<&'a Self>
{
}

/// Multiplication by value and by reference, with a constant one.
pub trait MulOps
where
    Self: Copy
        + ConstOne
        + Mul<Self, Output = Self>
        + MulAssign<Self>
        + for<'a> Mul<&'a Self, Output = Self>
        + for<'a> MulAssign<&'a Self>,
{
}

impl<T> MulOps for T where
    Self: Copy
        + ConstOne
        + Mul<Self, Output = Self>
        + MulAssign<Self>
        + for<'a> Mul<&'a Self, Output = Self>
        + for<'a> MulAssign<&'a Self>
{
}

/// Everything a coefficient needs for polynomial arithmetic.
pub trait RingOps: AddOps + SubOps + MulOps + Neg<Output = Self> {}

impl<T> RingOps for T where T: AddOps + SubOps + MulOps + Neg<Output = T> {}
