use std::ops::{Mul, MulAssign};

use crate::{AlgebraError, Ring, RingOps};

use super::Polynomial;

impl<F: RingOps> Polynomial<F> {
    /// Returns `self` with every coefficient multiplied by `scalar`.
    #[inline]
    pub fn mul_scalar(&self, scalar: F) -> Self {
        Self::new(self.iter().map(|&v| v * scalar).collect())
    }

    /// Schoolbook multiplication. The product of sizes `a` and `b` has size `a + b - 1`,
    /// and is empty when either operand is.
    pub fn schoolbook_mul(&self, rhs: &Self) -> Self {
        if self.coeff_count() == 0 || rhs.coeff_count() == 0 {
            return Self::new(Vec::new());
        }

        let mut product = Self::zero(self.coeff_count() + rhs.coeff_count() - 1);
        for (i, &a) in self.iter().enumerate() {
            for (p, &b) in product[i..].iter_mut().zip(rhs) {
                *p += a * b;
            }
        }
        product
    }

    /// Calculates `self * rhs` reduced modulo `x^n + 1` in quadratic time.
    ///
    /// The operands may be of any size. Each term `c x^i` with `i >= n` is removed by
    /// subtracting `c x^(i-n) (x^n + 1)`, going from the highest term down, and the
    /// result is then sized to exactly `n`.
    pub fn negacyclic_mul_naive(&self, rhs: &Self, n: usize) -> Self {
        let mut product = self.schoolbook_mul(rhs);

        for i in (n..product.coeff_count()).rev() {
            let high = product[i];
            product[i - n] -= high;
        }

        product.resize(n);
        product
    }

    /// Karatsuba multiplication of two polynomials of the same power-of-two size.
    ///
    /// The product has size `2n - 1`.
    pub fn karatsuba_mul(&self, rhs: &Self) -> Result<Self, AlgebraError> {
        let n = self.coeff_count();
        if n != rhs.coeff_count() {
            return Err(AlgebraError::SizeMismatch {
                lhs: n,
                rhs: rhs.coeff_count(),
            });
        }
        if !n.is_power_of_two() {
            return Err(AlgebraError::NotPowerOfTwo { len: n });
        }
        Ok(Self::new(karatsuba(self.as_slice(), rhs.as_slice())))
    }
}

impl<F: Ring> Polynomial<F> {
    /// Returns `self` with every coefficient multiplied by the small integer `scalar`.
    #[inline]
    pub fn mul_integer(&self, scalar: i64) -> Self {
        Self::new(self.iter().map(|&v| v.mul_scalar(scalar)).collect())
    }
}

/// `(a + b x^m)(c + d x^m) = ac + ((a + b)(c + d) - ac - bd) x^m + bd x^2m`
fn karatsuba<F: RingOps>(lhs: &[F], rhs: &[F]) -> Vec<F> {
    let n = lhs.len();
    if n == 1 {
        return vec![lhs[0] * rhs[0]];
    }

    let m = n / 2;
    let (a, b) = lhs.split_at(m);
    let (c, d) = rhs.split_at(m);

    let ac = karatsuba(a, c);
    let bd = karatsuba(b, d);
    let a_b: Vec<F> = a.iter().zip(b).map(|(&x, &y)| x + y).collect();
    let c_d: Vec<F> = c.iter().zip(d).map(|(&x, &y)| x + y).collect();
    let middle = karatsuba(&a_b, &c_d);

    let mut product = vec![F::ZERO; 2 * n - 1];
    for (i, ((&mid, &low), &high)) in middle.iter().zip(&ac).zip(&bd).enumerate() {
        product[i] += low;
        product[i + m] += mid - low - high;
        product[i + n] += high;
    }
    product
}

impl<F: RingOps> MulAssign<&Self> for Polynomial<F> {
    #[inline]
    fn mul_assign(&mut self, rhs: &Self) {
        *self = self.schoolbook_mul(rhs);
    }
}

impl<F: RingOps> MulAssign<Self> for Polynomial<F> {
    #[inline]
    fn mul_assign(&mut self, rhs: Self) {
        *self = self.schoolbook_mul(&rhs);
    }
}

impl<F: RingOps> Mul<Self> for Polynomial<F> {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self::Output {
        self.schoolbook_mul(&rhs)
    }
}

impl<F: RingOps> Mul<&Self> for Polynomial<F> {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: &Self) -> Self::Output {
        self.schoolbook_mul(rhs)
    }
}

impl<F: RingOps> Mul<&Polynomial<F>> for &Polynomial<F> {
    type Output = Polynomial<F>;

    #[inline]
    fn mul(self, rhs: &Polynomial<F>) -> Self::Output {
        self.schoolbook_mul(rhs)
    }
}
