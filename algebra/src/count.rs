//! Counting of ring operations, used to compare multiplication algorithms.

use std::fmt;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Keeps track of the number of ring operations performed by whoever holds it.
///
/// The counters are atomic so a single counter can be shared by the parallel parts of
/// the mass transform.
#[derive(Debug, Default)]
pub struct OpCount {
    additions: AtomicUsize,
    multiplications: AtomicUsize,
    const_mults: AtomicUsize,
}

/// A point-in-time copy of an [`OpCount`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct OpCountSnapshot {
    /// Number of additions and subtractions (negations count as one).
    pub additions: usize,
    /// Number of multiplications of two ring elements.
    pub multiplications: usize,
    /// Number of multiplications by a constant.
    pub const_mults: usize,
}

impl OpCount {
    /// Creates a counter with all counts at zero.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Counts `count` additions.
    #[inline]
    pub fn count_additions(&self, count: usize) {
        self.additions.fetch_add(count, Ordering::Relaxed);
    }

    /// Counts `count` multiplications.
    #[inline]
    pub fn count_multiplications(&self, count: usize) {
        self.multiplications.fetch_add(count, Ordering::Relaxed);
    }

    /// Counts `count` constant multiplications.
    #[inline]
    pub fn count_const_mults(&self, count: usize) {
        self.const_mults.fetch_add(count, Ordering::Relaxed);
    }

    /// Returns the current counts.
    #[inline]
    pub fn snapshot(&self) -> OpCountSnapshot {
        OpCountSnapshot {
            additions: self.additions.load(Ordering::Relaxed),
            multiplications: self.multiplications.load(Ordering::Relaxed),
            const_mults: self.const_mults.load(Ordering::Relaxed),
        }
    }

    /// Returns the current counts and sets all of them back to zero.
    #[inline]
    pub fn reset(&self) -> OpCountSnapshot {
        OpCountSnapshot {
            additions: self.additions.swap(0, Ordering::Relaxed),
            multiplications: self.multiplications.swap(0, Ordering::Relaxed),
            const_mults: self.const_mults.swap(0, Ordering::Relaxed),
        }
    }
}

impl fmt::Display for OpCountSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} additions, {} multiplications, {} constant multiplications",
            self.additions, self.multiplications, self.const_mults
        )
    }
}

impl fmt::Display for OpCount {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.snapshot().fmt(f)
    }
}
