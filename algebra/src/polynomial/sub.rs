use std::ops::{Sub, SubAssign};

use crate::{AddOps, SubOps};

use super::Polynomial;

impl<F: AddOps + SubOps> SubAssign<&Self> for Polynomial<F> {
    /// Subtracts `rhs` from `self`. The shorter operand is treated as padded with zeros.
    #[inline]
    fn sub_assign(&mut self, rhs: &Self) {
        self.pad_to(rhs.coeff_count());
        self.iter_mut().zip(rhs).for_each(|(l, &r)| *l -= r);
    }
}

impl<F: AddOps + SubOps> SubAssign<Self> for Polynomial<F> {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        SubAssign::sub_assign(self, &rhs);
    }
}

impl<F: AddOps + SubOps> Sub<Self> for Polynomial<F> {
    type Output = Self;

    #[inline]
    fn sub(mut self, rhs: Self) -> Self::Output {
        SubAssign::sub_assign(&mut self, &rhs);
        self
    }
}

impl<F: AddOps + SubOps> Sub<&Self> for Polynomial<F> {
    type Output = Self;

    #[inline]
    fn sub(mut self, rhs: &Self) -> Self::Output {
        SubAssign::sub_assign(&mut self, rhs);
        self
    }
}

impl<F: AddOps + SubOps> Sub<Polynomial<F>> for &Polynomial<F> {
    type Output = Polynomial<F>;

    #[inline]
    fn sub(self, rhs: Polynomial<F>) -> Self::Output {
        let mut difference = self.clone();
        SubAssign::sub_assign(&mut difference, &rhs);
        difference
    }
}

impl<F: AddOps + SubOps> Sub<&Polynomial<F>> for &Polynomial<F> {
    type Output = Polynomial<F>;

    #[inline]
    fn sub(self, rhs: &Polynomial<F>) -> Self::Output {
        let mut difference = self.clone();
        SubAssign::sub_assign(&mut difference, rhs);
        difference
    }
}
