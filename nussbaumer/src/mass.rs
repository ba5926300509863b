//! The iterative form of the engine.
//!
//! Instead of recursing through [`NussbaumerEngine::componentwise`], every level of the
//! recursion is computed at once: the non-zero entries of all transforms of one level are
//! transformed again at the next smaller size, down to size `2`. The base products are
//! then taken in a single pass and the inverse transforms are applied level by level.
//! Transforms within a level are independent and run on the rayon thread pool.

use algebra::{Polynomial, Ring};
use itertools::Itertools;
use log::debug;
use rayon::prelude::*;

use crate::{Decomposition, NussbaumerEngine, NussbaumerError, Transformed};

/// The base-level operands (or products) of a polynomial of size `size`, in the order
/// the recursion would visit them.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MassTransformed<R> {
    size: usize,
    entries: Vec<Polynomial<R>>,
}

impl<R> MassTransformed<R> {
    /// Returns the size of the polynomial these entries belong to.
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns the base-level entries.
    #[inline]
    pub fn entries(&self) -> &[Polynomial<R>] {
        &self.entries
    }

    /// Returns the number of base-level entries.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if there are no entries.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Number of base-level entries of a polynomial with decomposition `params`.
fn base_count(params: Decomposition) -> usize {
    params
        .levels()
        .take_while(|d| !d.is_base_case())
        .map(|d| 2 * d.m() - 1)
        .product()
}

impl<R: Ring> NussbaumerEngine<R> {
    /// Transforms `p` through every level of the recursion.
    ///
    /// With `slow` the top level uses [`Self::transform_slow`] with the correction and
    /// all deeper levels use it without; otherwise every level uses
    /// [`Self::transform_fast`].
    pub fn mass_transform(
        &self,
        p: &Polynomial<R>,
        slow: bool,
    ) -> Result<MassTransformed<R>, NussbaumerError> {
        let top = if slow {
            self.transform_slow(p, true)?
        } else {
            self.transform_fast(p)?
        };

        let mut current = vec![top];
        let mut params = self.decomposition();
        while let Some(next) = params.next() {
            let engine = self.sub_engine(next)?;
            let inputs: Vec<&Polynomial<R>> = current
                .iter()
                .flat_map(|t| t.entries()[1..].iter())
                .collect();
            debug!(
                "mass transform: {} polynomials of size {}",
                inputs.len(),
                next.n()
            );

            current = inputs
                .into_par_iter()
                .map(|q| {
                    if slow {
                        engine.transform_slow(q, false)
                    } else {
                        engine.transform_fast(q)
                    }
                })
                .collect::<Result<Vec<_>, _>>()?;
            params = next;
        }

        Ok(MassTransformed {
            size: self.size(),
            entries: current
                .into_iter()
                .flat_map(Transformed::into_entries)
                .collect(),
        })
    }

    /// Multiplies the base-level entries of a slow and a fast mass transform pairwise.
    pub fn mass_component_wise(
        &self,
        slow: &MassTransformed<R>,
        fast: &MassTransformed<R>,
    ) -> Result<MassTransformed<R>, NussbaumerError> {
        self.check_mass(slow)?;
        self.check_mass(fast)?;

        let entries = slow
            .entries
            .par_iter()
            .zip(fast.entries.par_iter())
            .map(|(s, f)| self.base_componentwise(s, f))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(MassTransformed {
            size: self.size(),
            entries,
        })
    }

    /// Maps the base-level products back to a polynomial of size `N`.
    pub fn mass_inverse_transform(
        &self,
        t: MassTransformed<R>,
    ) -> Result<Polynomial<R>, NussbaumerError> {
        self.check_mass(&t)?;

        let levels: Vec<Decomposition> = self.decomposition().levels().collect();
        let mut current: Vec<Transformed<R>> = t
            .entries
            .into_iter()
            .map(|e| Transformed::new(vec![e]))
            .collect();

        for pair in levels.windows(2).rev() {
            let (parent, child) = (pair[0], pair[1]);
            let engine = self.sub_engine(child)?;
            debug!(
                "mass inverse transform: {} polynomials of size {}",
                current.len(),
                child.n()
            );

            let products = current
                .into_par_iter()
                .map(|c| engine.inverse_transform(c))
                .collect::<Result<Vec<_>, _>>()?;

            // Regroup into transforms of the parent size, with the zero entry in front.
            let groups = products.into_iter().chunks(2 * parent.m() - 1);
            current = groups
                .into_iter()
                .map(|chunk| {
                    std::iter::once(Polynomial::zero(parent.r()))
                        .chain(chunk)
                        .collect::<Vec<_>>()
                        .into()
                })
                .collect();
        }

        let top = current.pop().ok_or(NussbaumerError::LengthMismatch {
            expected: 1,
            found: 0,
        })?;
        self.inverse_transform(top)
    }

    /// Multiplies `p1` and `p2` modulo `x^N + 1` with the iterative pipeline.
    pub fn mass_multiply(
        &self,
        p1: &Polynomial<R>,
        p2: &Polynomial<R>,
    ) -> Result<Polynomial<R>, NussbaumerError> {
        let slow = self.mass_transform(p1, true)?;
        let fast = self.mass_transform(p2, false)?;
        let product = self.mass_component_wise(&slow, &fast)?;
        self.mass_inverse_transform(product)
    }

    fn check_mass(&self, t: &MassTransformed<R>) -> Result<(), NussbaumerError> {
        if t.size != self.size() {
            return Err(NussbaumerError::LengthMismatch {
                expected: self.size(),
                found: t.size,
            });
        }
        let expected = base_count(self.decomposition());
        if t.entries.len() != expected {
            return Err(NussbaumerError::LengthMismatch {
                expected,
                found: t.entries.len(),
            });
        }
        Ok(())
    }
}
