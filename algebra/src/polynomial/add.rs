use std::ops::{Add, AddAssign};

use crate::AddOps;

use super::Polynomial;

impl<F: AddOps> Polynomial<F> {
    /// Pads `self` with zeros so that it is at least `len` coefficients long.
    #[inline]
    pub(crate) fn pad_to(&mut self, len: usize) {
        if self.coeff_count() < len {
            self.resize(len);
        }
    }
}

impl<F: AddOps> AddAssign<&Self> for Polynomial<F> {
    /// Adds `rhs` to `self`. The shorter operand is treated as padded with zeros,
    /// so the result has the length of the longer one.
    #[inline]
    fn add_assign(&mut self, rhs: &Self) {
        self.pad_to(rhs.coeff_count());
        self.iter_mut().zip(rhs).for_each(|(l, &r)| *l += r);
    }
}

impl<F: AddOps> AddAssign<Self> for Polynomial<F> {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        AddAssign::add_assign(self, &rhs);
    }
}

impl<F: AddOps> Add<Self> for Polynomial<F> {
    type Output = Self;

    #[inline]
    fn add(mut self, rhs: Self) -> Self::Output {
        AddAssign::add_assign(&mut self, &rhs);
        self
    }
}

impl<F: AddOps> Add<&Self> for Polynomial<F> {
    type Output = Self;

    #[inline]
    fn add(mut self, rhs: &Self) -> Self::Output {
        AddAssign::add_assign(&mut self, rhs);
        self
    }
}

impl<F: AddOps> Add<Polynomial<F>> for &Polynomial<F> {
    type Output = Polynomial<F>;

    #[inline]
    fn add(self, mut rhs: Polynomial<F>) -> Self::Output {
        AddAssign::add_assign(&mut rhs, self);
        rhs
    }
}

impl<F: AddOps> Add<&Polynomial<F>> for &Polynomial<F> {
    type Output = Polynomial<F>;

    #[inline]
    fn add(self, rhs: &Polynomial<F>) -> Self::Output {
        let mut sum = self.clone();
        AddAssign::add_assign(&mut sum, rhs);
        sum
    }
}
