//! Sampling of ring elements with `rand`.

use rand::{distributions::Standard, Rng};
use rand_distr::Distribution;

use crate::Zq;

/// Samples an element uniformly from `[0, Q)`.
impl<const Q: u32> Distribution<Zq<Q>> for Standard {
    #[inline]
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Zq<Q> {
        Zq::new(rng.gen_range(0..Q))
    }
}

#[cfg(test)]
mod tests {
    use rand::thread_rng;

    use super::*;

    #[test]
    fn test_standard_sample_in_range() {
        let mut rng = thread_rng();
        let values: Vec<Zq<17>> = Standard.sample_iter(&mut rng).take(1000).collect();
        assert!(values.iter().all(|v| v.value() < 17));
        // Every residue shows up in a thousand draws.
        for r in 0..17 {
            assert!(values.iter().any(|v| v.value() == r));
        }
    }
}
