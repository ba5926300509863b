use std::fmt;
use std::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use num_traits::{ConstOne, ConstZero, One, Zero};
use serde::{Deserialize, Serialize};

use crate::{arith::Xgcd, AlgebraError};

use super::Ring;

/// An integer modulo `Q`.
///
/// The stored value is always the canonical representative in `[0, Q)`, every
/// operation reduces its result. Products are widened to `u64` before the reduction,
/// so no modulus below `2^32` can overflow.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(from = "u32", into = "u32")]
pub struct Zq<const Q: u32>(u32);

/// The ring `Z/2047Z`, small enough for exhaustive tests.
pub type Zq2047 = Zq<2047>;

/// The ring `Z/12289Z` used by NewHope.
pub type Zq12289 = Zq<12289>;

impl<const Q: u32> Zq<Q> {
    /// The modulus.
    pub const MODULUS: u32 = Q;

    const VALID_MODULUS: () = assert!(Q >= 2, "the modulus must be at least 2");

    /// Creates a new [`Zq<Q>`], reducing `value` modulo `Q`.
    #[inline]
    pub const fn new(value: u32) -> Self {
        #[allow(clippy::let_unit_value)]
        let () = Self::VALID_MODULUS;
        Self(value % Q)
    }

    /// Returns the canonical value in `[0, Q)`.
    #[inline]
    pub const fn value(self) -> u32 {
        self.0
    }

    #[inline]
    fn add_reduce(self, rhs: Self) -> Self {
        let sum = self.0 as u64 + rhs.0 as u64;
        if sum >= Q as u64 {
            Self((sum - Q as u64) as u32)
        } else {
            Self(sum as u32)
        }
    }

    #[inline]
    fn sub_reduce(self, rhs: Self) -> Self {
        if self.0 >= rhs.0 {
            Self(self.0 - rhs.0)
        } else {
            Self((self.0 as u64 + Q as u64 - rhs.0 as u64) as u32)
        }
    }

    #[inline]
    fn mul_reduce(self, rhs: Self) -> Self {
        Self(((self.0 as u64 * rhs.0 as u64) % Q as u64) as u32)
    }
}

impl<const Q: u32> From<u32> for Zq<Q> {
    #[inline]
    fn from(value: u32) -> Self {
        Self::new(value)
    }
}

impl<const Q: u32> From<Zq<Q>> for u32 {
    #[inline]
    fn from(value: Zq<Q>) -> Self {
        value.0
    }
}

impl<const Q: u32> fmt::Display for Zq<Q> {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

macro_rules! impl_binary_op {
    ($Op:ident, $op:ident, $OpAssign:ident, $op_assign:ident, $reduce:ident) => {
        impl<const Q: u32> $Op<Self> for Zq<Q> {
            type Output = Self;

            #[inline]
            fn $op(self, rhs: Self) -> Self::Output {
                self.$reduce(rhs)
            }
        }

        impl<const Q: u32> $Op<&Self> for Zq<Q> {
            type Output = Self;

            #[inline]
            fn $op(self, rhs: &Self) -> Self::Output {
                self.$reduce(*rhs)
            }
        }

        impl<const Q: u32> $OpAssign<Self> for Zq<Q> {
            #[inline]
            fn $op_assign(&mut self, rhs: Self) {
                *self = self.$reduce(rhs);
            }
        }

        impl<const Q: u32> $OpAssign<&Self> for Zq<Q> {
            #[inline]
            fn $op_assign(&mut self, rhs: &Self) {
                *self = self.$reduce(*rhs);
            }
        }
    };
}

impl_binary_op!(Add, add, AddAssign, add_assign, add_reduce);
impl_binary_op!(Sub, sub, SubAssign, sub_assign, sub_reduce);
impl_binary_op!(Mul, mul, MulAssign, mul_assign, mul_reduce);

impl<const Q: u32> Neg for Zq<Q> {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self::Output {
        if self.0 == 0 {
            self
        } else {
            Self(Q - self.0)
        }
    }
}

impl<const Q: u32> Zero for Zq<Q> {
    #[inline]
    fn zero() -> Self {
        Self(0)
    }

    #[inline]
    fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl<const Q: u32> ConstZero for Zq<Q> {
    const ZERO: Self = Self(0);
}

impl<const Q: u32> One for Zq<Q> {
    #[inline]
    fn one() -> Self {
        Self(1)
    }
}

impl<const Q: u32> ConstOne for Zq<Q> {
    const ONE: Self = Self(1);
}

impl<const Q: u32> Ring for Zq<Q> {
    #[inline]
    fn modulus_value() -> u64 {
        Q as u64
    }

    #[inline]
    fn from_i64(value: i64) -> Self {
        Self(value.rem_euclid(Q as i64) as u32)
    }

    #[inline]
    fn to_u64(self) -> u64 {
        self.0 as u64
    }

    #[inline]
    fn mul_scalar(self, scalar: i64) -> Self {
        Self((self.0 as i128 * scalar as i128).rem_euclid(Q as i128) as u32)
    }

    fn try_inv(self) -> Result<Self, AlgebraError> {
        let (inv, gcd) = u32::gcdinv(self.0, Q);
        if gcd != 1 {
            return Err(AlgebraError::NoInverse {
                value: self.0 as u64,
                modulus: Q as u64,
            });
        }
        Ok(Self(inv))
    }
}

#[cfg(test)]
mod tests {
    use rand::prelude::*;

    use super::*;

    type R = Zq2047;
    const P: u32 = 2047;

    #[test]
    fn test_add_sub_neg() {
        let a = R::new(2000);
        let b = R::new(100);

        assert_eq!(a + b, R::new(53));
        assert_eq!(b - a, R::new(147));
        assert_eq!(a - b, R::new(1900));
        assert_eq!(-a, R::new(47));
        assert_eq!(-R::ZERO, R::ZERO);
        assert_eq!(a + (-a), R::ZERO);
    }

    #[test]
    fn test_reduce_on_construction() {
        assert_eq!(R::new(P), R::ZERO);
        assert_eq!(R::new(P + 5), R::new(5));
        assert_eq!(R::from_i64(-48), R::new(1999));
        assert_eq!(R::from_i64(-(P as i64) * 3), R::ZERO);
        assert_eq!(R::from_i64(-48).value(), 1999);
        assert_eq!(R::from_i64(-48).to_u64(), 1999);
    }

    #[test]
    fn test_mul() {
        let mut rng = thread_rng();
        for _ in 0..100 {
            let x = rng.gen_range(0..P);
            let y = rng.gen_range(0..P);
            assert_eq!(R::new(x) * R::new(y), R::new((x * y) % P));
        }

        assert_eq!(R::new(9).mul_scalar(-7), R::from_i64(-63));
        assert_eq!(R::new(P - 1).mul_scalar(i64::MAX), R::from_i64(-(i64::MAX % P as i64)));
    }

    #[test]
    fn test_max_values_do_not_overflow() {
        type Big = Zq<{ u32::MAX - 4 }>;
        let max = Big::new(u32::MAX - 5);
        assert_eq!(max + max, Big::new(u32::MAX - 6));
        assert_eq!(max * max, Big::ONE);
        assert_eq!(Big::ZERO - max, Big::ONE);
    }

    #[test]
    fn test_inverse() {
        for x in [1u32, 2, 4, 8192 % P, 1000, 2046] {
            let v = R::new(x);
            let inv = v.try_inv().unwrap();
            assert_eq!(v * inv, R::ONE);
        }

        // 2047 = 23 * 89
        assert_eq!(
            R::new(89).try_inv(),
            Err(AlgebraError::NoInverse {
                value: 89,
                modulus: 2047
            })
        );
        assert!(R::ZERO.try_inv().is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(R::from_i64(-1).to_string(), "2046");
    }
}
