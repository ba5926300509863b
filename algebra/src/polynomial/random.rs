use rand::{distributions::Standard, CryptoRng, Rng};
use rand_distr::Distribution;

use super::Polynomial;

impl<F> Polynomial<F>
where
    Standard: Distribution<F>,
{
    /// Generate a random [`Polynomial<F>`] with `n` uniformly sampled coefficients.
    #[inline]
    pub fn random<R>(n: usize, rng: &mut R) -> Self
    where
        R: Rng + CryptoRng,
    {
        Self::new(Standard.sample_iter(rng).take(n).collect())
    }
}
