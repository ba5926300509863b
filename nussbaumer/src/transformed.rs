use std::ops::{Index, IndexMut};
use std::slice::Iter;

use algebra::Polynomial;

/// The transformed representation of a polynomial of size `N = m·r`: `2m` polynomials
/// of length `r`, the first of which is always zero.
///
/// The base case `N = 2` is encoded as a single polynomial of length three.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Transformed<R> {
    entries: Vec<Polynomial<R>>,
}

impl<R> Transformed<R> {
    /// Creates a new [`Transformed<R>`].
    #[inline]
    pub fn new(entries: Vec<Polynomial<R>>) -> Self {
        Self { entries }
    }

    /// Returns the polynomials of this representation.
    #[inline]
    pub fn entries(&self) -> &[Polynomial<R>] {
        &self.entries
    }

    /// Drop self, and return the polynomials.
    #[inline]
    pub fn into_entries(self) -> Vec<Polynomial<R>> {
        self.entries
    }

    /// Returns the number of polynomials.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if there are no polynomials.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns an iterator over the polynomials.
    #[inline]
    pub fn iter(&self) -> Iter<Polynomial<R>> {
        self.entries.iter()
    }
}

impl<R> From<Vec<Polynomial<R>>> for Transformed<R> {
    #[inline]
    fn from(entries: Vec<Polynomial<R>>) -> Self {
        Self { entries }
    }
}

impl<R> Index<usize> for Transformed<R> {
    type Output = Polynomial<R>;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.entries[index]
    }
}

impl<R> IndexMut<usize> for Transformed<R> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.entries[index]
    }
}

impl<'a, R> IntoIterator for &'a Transformed<R> {
    type Item = &'a Polynomial<R>;

    type IntoIter = Iter<'a, Polynomial<R>>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
