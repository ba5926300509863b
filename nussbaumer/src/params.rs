use crate::NussbaumerError;

/// The split of a size `N = 2^n` into `m = 2^⌊n/2⌋` polynomials of length `r = 2^⌈n/2⌉`.
///
/// Every engine owns one of these; the recursion continues with the decomposition of
/// `r` until the base case `N = 2` is reached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Decomposition {
    log_n: u32,
    log_m: u32,
    log_r: u32,
}

impl Decomposition {
    /// Largest supported `log2(N)`. It bounds the recursion depth explicitly.
    pub const MAX_LOG_N: u32 = 30;

    /// Creates the decomposition of `n`.
    pub fn new(n: usize) -> Result<Self, NussbaumerError> {
        if n < 2 || !n.is_power_of_two() || n.trailing_zeros() > Self::MAX_LOG_N {
            return Err(NussbaumerError::InvalidSize { size: n });
        }
        Ok(Self::from_log(n.trailing_zeros()))
    }

    #[inline]
    fn from_log(log_n: u32) -> Self {
        let log_m = log_n >> 1;
        Self {
            log_n,
            log_m,
            log_r: log_n - log_m,
        }
    }

    /// Returns the size `N`.
    #[inline]
    pub fn n(&self) -> usize {
        1 << self.log_n
    }

    /// Returns `log2(N)`.
    #[inline]
    pub fn log_n(&self) -> u32 {
        self.log_n
    }

    /// Returns the number of coefficient columns `m`.
    #[inline]
    pub fn m(&self) -> usize {
        1 << self.log_m
    }

    /// Returns `log2(m)`.
    #[inline]
    pub fn log_m(&self) -> u32 {
        self.log_m
    }

    /// Returns the length `r` of each transformed polynomial.
    #[inline]
    pub fn r(&self) -> usize {
        1 << self.log_r
    }

    /// Returns `log2(r)`.
    #[inline]
    pub fn log_r(&self) -> u32 {
        self.log_r
    }

    /// Whether this is the closed form `N = 2` case.
    #[inline]
    pub fn is_base_case(&self) -> bool {
        self.log_n == 1
    }

    /// Number of polynomials in a transformed representation, `2m`.
    ///
    /// A forward transform directly followed by the inverse transform scales its input
    /// by this amount.
    #[inline]
    pub fn level_factor(&self) -> u64 {
        2 << self.log_m
    }

    /// The scaling introduced by a complete multiplication, the product of
    /// [`Self::level_factor`] over this level and all deeper ones.
    pub fn factor(&self) -> u64 {
        self.levels()
            .take_while(|d| !d.is_base_case())
            .map(|d| d.level_factor())
            .product()
    }

    /// The decomposition used for the recursive multiplications of size `r`,
    /// `None` at the base case.
    #[inline]
    pub fn next(&self) -> Option<Self> {
        if self.is_base_case() {
            None
        } else {
            Some(Self::from_log(self.log_r))
        }
    }

    /// Iterates over this decomposition and every deeper one, ending with the base case.
    #[inline]
    pub fn levels(&self) -> impl Iterator<Item = Self> {
        std::iter::successors(Some(*self), Self::next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split() {
        let d = Decomposition::new(1024).unwrap();
        assert_eq!((d.log_n(), d.m(), d.r()), (10, 32, 32));

        let d = Decomposition::new(8).unwrap();
        assert_eq!((d.m(), d.r()), (2, 4));
        assert_eq!(d.m() * d.r(), d.n());

        let d = Decomposition::new(2).unwrap();
        assert!(d.is_base_case());
        assert_eq!((d.m(), d.r()), (1, 2));
        assert_eq!(d.next(), None);
    }

    #[test]
    fn test_invalid_sizes() {
        for size in [0, 1, 3, 6, 1000, 1 << 31] {
            assert_eq!(
                Decomposition::new(size),
                Err(NussbaumerError::InvalidSize { size })
            );
        }
    }

    #[test]
    fn test_factor() {
        let expected = [
            (2, 1),
            (4, 4),
            (8, 16),
            (16, 32),
            (32, 128),
            (64, 256),
            (128, 512),
            (256, 1024),
            (1024, 8192),
        ];
        for (n, factor) in expected {
            assert_eq!(Decomposition::new(n).unwrap().factor(), factor, "n = {n}");
        }
    }

    #[test]
    fn test_levels_end_at_base_case() {
        let sizes: Vec<usize> = Decomposition::new(1024)
            .unwrap()
            .levels()
            .map(|d| d.n())
            .collect();
        assert_eq!(sizes, vec![1024, 32, 8, 4, 2]);
    }
}
