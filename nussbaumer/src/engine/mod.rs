//! The recursive Nussbaumer engine.
//!
//! A multiplication of size `N = m·r` modulo `x^N + 1` is turned into `2m - 1`
//! multiplications of size `r` modulo `u^r + 1` by the forward transforms, done by a
//! smaller engine in [`NussbaumerEngine::componentwise`], and mapped back by
//! [`NussbaumerEngine::inverse_transform`].

use std::sync::Arc;

use algebra::{OpCount, Polynomial, Ring};
use log::trace;

use crate::rotate::{add_rotated, check_len};
use crate::{Decomposition, NussbaumerError, Transformed};

mod forward;
mod inverse;

/// Negacyclic convolution of polynomials of one fixed size `N` with Nussbaumer's
/// polynomial transform.
///
/// # Examples
/// ```
/// use algebra::{Polynomial, Zq2047};
/// use nussbaumer::NussbaumerEngine;
///
/// let engine = NussbaumerEngine::<Zq2047>::new(2).unwrap();
/// let a = Polynomial::new(vec![Zq2047::new(5), Zq2047::new(9)]);
/// let b = Polynomial::new(vec![Zq2047::new(3), Zq2047::new(7)]);
/// let c = engine.multiply(&a, &b).unwrap();
/// assert_eq!(c, Polynomial::new(vec![Zq2047::new(1999), Zq2047::new(62)]));
/// ```
#[derive(Debug, Clone)]
pub struct NussbaumerEngine<R: Ring> {
    params: Decomposition,
    factor_inv: R,
    counter: Option<Arc<OpCount>>,
}

impl<R: Ring> NussbaumerEngine<R> {
    /// Creates an engine for polynomials of size `n`.
    ///
    /// Fails when `n` is not a supported power of two, or when the correction factor of
    /// `n` is not invertible modulo the ring's modulus.
    pub fn new(n: usize) -> Result<Self, NussbaumerError> {
        Self::with_params(Decomposition::new(n)?, None)
    }

    /// Creates an engine for polynomials of size `n` that records its ring operations,
    /// and those of the smaller engines it uses, in `counter`.
    pub fn with_counter(n: usize, counter: Arc<OpCount>) -> Result<Self, NussbaumerError> {
        Self::with_params(Decomposition::new(n)?, Some(counter))
    }

    pub(crate) fn with_params(
        params: Decomposition,
        counter: Option<Arc<OpCount>>,
    ) -> Result<Self, NussbaumerError> {
        let factor = params.factor();
        let factor_inv = R::from_i64(factor as i64).try_inv().map_err(|_| {
            NussbaumerError::NonInvertibleFactor {
                factor,
                modulus: R::modulus_value(),
            }
        })?;

        trace!(
            "nussbaumer engine: n = {}, m = {}, r = {}, factor = {}",
            params.n(),
            params.m(),
            params.r(),
            factor
        );

        Ok(Self {
            params,
            factor_inv,
            counter,
        })
    }

    /// The engine for the recursive multiplications, of size `r`.
    pub(crate) fn sub_engine(&self, params: Decomposition) -> Result<Self, NussbaumerError> {
        Self::with_params(params, self.counter.clone())
    }

    /// Returns the size `N` this engine multiplies.
    #[inline]
    pub fn size(&self) -> usize {
        self.params.n()
    }

    /// Returns the decomposition of this engine's size.
    #[inline]
    pub fn decomposition(&self) -> Decomposition {
        self.params
    }

    /// Returns the correction factor removed by [`Self::correct`].
    #[inline]
    pub fn factor(&self) -> u64 {
        self.params.factor()
    }

    /// Returns the operation counter, if any.
    #[inline]
    pub fn counter(&self) -> Option<&Arc<OpCount>> {
        self.counter.as_ref()
    }

    /// Divides every coefficient of `p` by the correction factor.
    pub fn correct(&self, p: &Polynomial<R>) -> Polynomial<R> {
        self.count_const_mults(p.coeff_count());
        p.mul_scalar(self.factor_inv)
    }

    /// Multiplies `p1` and `p2` modulo `x^N + 1`.
    pub fn multiply(
        &self,
        p1: &Polynomial<R>,
        p2: &Polynomial<R>,
    ) -> Result<Polynomial<R>, NussbaumerError> {
        self.multiply_with(p1, p2, true)
    }

    /// Multiplication used by the recursion. The correction is done once by the
    /// outermost engine, so it is left out here.
    fn multiply_with(
        &self,
        p1: &Polynomial<R>,
        p2: &Polynomial<R>,
        fix_factor: bool,
    ) -> Result<Polynomial<R>, NussbaumerError> {
        let slow = self.transform_slow(p1, fix_factor)?;
        let fast = self.transform_fast(p2)?;
        let product = self.componentwise(&slow, &fast)?;
        self.inverse_transform(product)
    }

    /// Multiplies two transformed operands entry by entry, with `slow` from
    /// [`Self::transform_slow`] and `fast` from [`Self::transform_fast`].
    ///
    /// Entry `0` of the result is zero, entry `i` is the product of the entries `i`
    /// modulo `u^r + 1`, computed by an engine of size `r`.
    pub fn componentwise(
        &self,
        slow: &Transformed<R>,
        fast: &Transformed<R>,
    ) -> Result<Transformed<R>, NussbaumerError> {
        self.check_transformed(slow)?;
        self.check_transformed(fast)?;

        let Some(next) = self.params.next() else {
            return Ok(Transformed::new(vec![
                self.base_componentwise(&slow[0], &fast[0])?
            ]));
        };

        let sub = self.sub_engine(next)?;
        let mut entries = Vec::with_capacity(slow.len());
        entries.push(Polynomial::zero(next.n()));
        for (s, f) in slow.iter().zip(fast).skip(1) {
            entries.push(sub.multiply_with(s, f, false)?);
        }
        Ok(Transformed::new(entries))
    }

    /// The closed form for `N = 2`, where `slow = [a0, a0 + a1, a1 - a0]` and
    /// `fast = [b0, b1, b0 + b1]`.
    pub(crate) fn base_componentwise(
        &self,
        slow: &Polynomial<R>,
        fast: &Polynomial<R>,
    ) -> Result<Polynomial<R>, NussbaumerError> {
        check_len(slow, 3)?;
        check_len(fast, 3)?;

        let t = slow[0] * fast[2];
        self.count_multiplications(3);
        self.count_additions(2);
        Ok(Polynomial::new(vec![
            t - slow[1] * fast[1],
            t + slow[2] * fast[0],
        ]))
    }

    /// `p1 + u^steps * p2`, counted.
    #[inline]
    fn butterfly(
        &self,
        p1: &Polynomial<R>,
        p2: &Polynomial<R>,
        steps: i64,
    ) -> Result<Polynomial<R>, NussbaumerError> {
        self.count_additions(p1.coeff_count());
        add_rotated(p1, p2, steps)
    }

    fn check_transformed(&self, t: &Transformed<R>) -> Result<(), NussbaumerError> {
        let (count, len) = if self.params.is_base_case() {
            (1, 3)
        } else {
            (2 * self.params.m(), self.params.r())
        };
        if t.len() != count {
            return Err(NussbaumerError::LengthMismatch {
                expected: count,
                found: t.len(),
            });
        }
        t.iter().try_for_each(|p| check_len(p, len))
    }

    #[inline]
    fn count_additions(&self, count: usize) {
        if let Some(counter) = &self.counter {
            counter.count_additions(count);
        }
    }

    #[inline]
    fn count_multiplications(&self, count: usize) {
        if let Some(counter) = &self.counter {
            counter.count_multiplications(count);
        }
    }

    #[inline]
    fn count_const_mults(&self, count: usize) {
        if let Some(counter) = &self.counter {
            counter.count_const_mults(count);
        }
    }
}

/// Multiplies `p1` and `p2` modulo `x^n + 1`.
///
/// Builds a [`NussbaumerEngine`] for `n`; keep an engine around instead when
/// multiplying many polynomials of the same size.
pub fn multiply<R: Ring>(
    n: usize,
    p1: &Polynomial<R>,
    p2: &Polynomial<R>,
) -> Result<Polynomial<R>, NussbaumerError> {
    NussbaumerEngine::new(n)?.multiply(p1, p2)
}
