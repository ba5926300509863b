//! Definition and implementation of polynomials.

use std::fmt;
use std::ops::{Index, IndexMut};
use std::slice::{Iter, IterMut, SliceIndex};

use num_traits::ConstZero;
use serde::{Deserialize, Serialize};

use crate::AlgebraError;

mod add;
mod mul;
mod neg;
mod random;
mod sub;

/// Represents a polynomial whose coefficients are elements of `F`.
///
/// The coefficients are stored in a vector `data`, with the `i`-th element
/// representing the coefficient of the `xⁱ` term. A polynomial has a size rather than
/// a degree: trailing zero coefficients are kept until the polynomial is explicitly
/// resized.
///
/// # Examples
/// ```
/// use algebra::{Polynomial, Zq2047};
///
/// let poly = Polynomial::new(vec![Zq2047::new(1), Zq2047::new(2), Zq2047::new(3)]);
/// // `poly` now represents the polynomial 1 + 2x + 3x^2.
/// assert_eq!(poly.coeff_count(), 3);
/// ```
#[derive(Clone, Default, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Polynomial<F> {
    data: Vec<F>,
}

impl<F> From<Vec<F>> for Polynomial<F> {
    #[inline]
    fn from(data: Vec<F>) -> Self {
        Self { data }
    }
}

impl<F> Polynomial<F> {
    /// Creates a new [`Polynomial<F>`].
    #[inline]
    pub fn new(polynomial: Vec<F>) -> Self {
        Self { data: polynomial }
    }

    /// Extracts a slice containing the entire vector.
    #[inline]
    pub fn as_slice(&self) -> &[F] {
        self.data.as_slice()
    }

    /// Get the coefficient counts of polynomial.
    #[inline]
    pub fn coeff_count(&self) -> usize {
        self.data.len()
    }

    /// Returns the coefficient at `index`, or `None` when it is out of range.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&F> {
        self.data.get(index)
    }

    /// Returns an iterator that allows reading each value or coefficient of the polynomial.
    #[inline]
    pub fn iter(&self) -> Iter<F> {
        self.data.iter()
    }

    /// Returns an iterator that allows modifying each value or coefficient of the polynomial.
    #[inline]
    pub fn iter_mut(&mut self) -> IterMut<F> {
        self.data.iter_mut()
    }
}

impl<F: Copy> Polynomial<F> {
    /// Returns a copy of the coefficient at `index`.
    #[inline]
    pub fn try_coeff(&self, index: usize) -> Result<F, AlgebraError> {
        self.data
            .get(index)
            .copied()
            .ok_or(AlgebraError::IndexOutOfRange {
                index,
                len: self.data.len(),
            })
    }
}

impl<F> Polynomial<F>
where
    F: Copy + ConstZero,
{
    /// Creates a [`Polynomial<F>`] with all coefficients equal to zero.
    #[inline]
    pub fn zero(coeff_count: usize) -> Self {
        Self {
            data: vec![F::ZERO; coeff_count],
        }
    }

    /// Returns `true` if `self` is equal to `0`.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.data.iter().all(F::is_zero)
    }

    /// Sets `self` to `0`.
    #[inline]
    pub fn set_zero(&mut self) {
        self.data.fill(F::ZERO);
    }

    /// Changes the coefficient count. New coefficients are zero, removed ones are dropped.
    #[inline]
    pub fn resize(&mut self, new_len: usize) {
        self.data.resize(new_len, F::ZERO);
    }
}

impl<F, I: SliceIndex<[F]>> Index<I> for Polynomial<F> {
    type Output = I::Output;

    #[inline]
    fn index(&self, index: I) -> &Self::Output {
        Index::index(&*self.data, index)
    }
}

impl<F, I: SliceIndex<[F]>> IndexMut<I> for Polynomial<F> {
    #[inline]
    fn index_mut(&mut self, index: I) -> &mut Self::Output {
        IndexMut::index_mut(&mut *self.data, index)
    }
}

impl<F> IntoIterator for Polynomial<F> {
    type Item = F;

    type IntoIter = std::vec::IntoIter<Self::Item>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.data.into_iter()
    }
}

impl<'a, F> IntoIterator for &'a Polynomial<F> {
    type Item = &'a F;

    type IntoIter = Iter<'a, F>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}

impl<'a, F> IntoIterator for &'a mut Polynomial<F> {
    type Item = &'a mut F;

    type IntoIter = IterMut<'a, F>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.data.iter_mut()
    }
}

impl<F: fmt::Display> fmt::Display for Polynomial<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, coeff) in self.data.iter().enumerate() {
            if i > 0 {
                f.write_str(" + ")?;
            }
            write!(f, "{coeff}*X^{i}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::Zq2047;

    use super::*;

    type PolyR = Polynomial<Zq2047>;

    #[test]
    fn test_resize_keeps_trailing_zeros() {
        let mut a = PolyR::new(vec![Zq2047::new(1), Zq2047::ZERO]);
        assert_eq!(a.coeff_count(), 2);

        a.resize(4);
        assert_eq!(a.coeff_count(), 4);
        assert_eq!(a[3], Zq2047::ZERO);

        a.resize(1);
        assert_eq!(a, PolyR::new(vec![Zq2047::new(1)]));
    }

    #[test]
    fn test_checked_access() {
        let a = PolyR::zero(3);
        assert_eq!(a.get(3), None);
        assert_eq!(
            a.try_coeff(3),
            Err(AlgebraError::IndexOutOfRange { index: 3, len: 3 })
        );
        assert_eq!(a.try_coeff(2), Ok(Zq2047::ZERO));
    }

    #[test]
    #[should_panic]
    fn test_index_out_of_range_panics() {
        let a = PolyR::zero(3);
        let _ = a[3];
    }

    #[test]
    fn test_display() {
        let a = PolyR::new(vec![Zq2047::new(5), Zq2047::from(2050)]);
        assert_eq!(a.to_string(), "5*X^0 + 3*X^1");
    }
}
