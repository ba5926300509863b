use std::ops::Neg;

use super::Polynomial;

impl<F: Copy + Neg<Output = F>> Polynomial<F> {
    /// Negates every coefficient in place.
    #[inline]
    pub fn neg_assign(&mut self) {
        self.iter_mut().for_each(|v| *v = -*v);
    }
}

impl<F: Copy + Neg<Output = F>> Neg for Polynomial<F> {
    type Output = Self;

    #[inline]
    fn neg(mut self) -> Self::Output {
        self.neg_assign();
        self
    }
}

impl<F: Copy + Neg<Output = F>> Neg for &Polynomial<F> {
    type Output = Polynomial<F>;

    #[inline]
    fn neg(self) -> Self::Output {
        Polynomial::new(self.iter().map(|&v| -v).collect())
    }
}
