use algebra::{Polynomial, Ring};

use crate::rotate::{check_len, rotate};
use crate::{NussbaumerError, Transformed};

use super::NussbaumerEngine;

impl<R: Ring> NussbaumerEngine<R> {
    /// Maps a product of transformed operands back to a polynomial of size `N`.
    ///
    /// Runs the decimation-in-time butterflies on the unordered entries, multiplies
    /// entry `i` by `u^-i` and reads the coefficients out column by column. The base
    /// case returns its single entry unchanged.
    ///
    /// Applied directly to [`Self::transform_slow`] without the correction, this
    /// returns the input scaled by [`crate::Decomposition::level_factor`].
    pub fn inverse_transform(&self, t: Transformed<R>) -> Result<Polynomial<R>, NussbaumerError> {
        let n = self.size();
        let mut z = t.into_entries();

        if self.params.is_base_case() {
            if z.len() != 1 {
                return Err(NussbaumerError::LengthMismatch {
                    expected: 1,
                    found: z.len(),
                });
            }
            check_len(&z[0], n)?;
            return Ok(z.swap_remove(0));
        }

        let m = self.params.m();
        let r = self.params.r();
        let log_m = self.params.log_m();
        if z.len() != 2 * m {
            return Err(NussbaumerError::LengthMismatch {
                expected: 2 * m,
                found: z.len(),
            });
        }
        z.iter().try_for_each(|p| check_len(p, r))?;

        let ratio = (r / m) as i64;
        for j in 0..=log_m {
            let width = 1usize << j;
            for offset in 0..width {
                let k = ratio * (offset << (log_m - j)) as i64;
                for start in (0..2 * m).step_by(width << 1) {
                    let e = start + offset;
                    let f = e + width;
                    if j == 0 && e == 0 {
                        // Entry 0 was never computed, entry 1 alone carries both halves.
                        self.count_additions(r);
                        let negated = -&z[f];
                        z[e] = std::mem::replace(&mut z[f], negated);
                        continue;
                    }

                    let low = self.butterfly(&z[e], &z[f], k)?;
                    if j != log_m {
                        z[f] = self.butterfly(&z[e], &z[f], k + r as i64)?;
                    }
                    z[e] = low;
                }
            }
        }

        z[1..m].reverse();
        for entry in &mut z[1..m] {
            *entry = rotate(entry, 2 * r as i64 - 1);
        }

        let mut result = Polynomial::zero(n);
        for (i, entry) in z.iter().take(m).enumerate() {
            for (j, &c) in entry.iter().enumerate() {
                result[m * j + i] = c;
            }
        }
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use algebra::Zq2047;
    use rand::SeedableRng;
    use rand_chacha::ChaCha12Rng;

    use super::*;

    type PolyR = Polynomial<Zq2047>;

    #[test]
    fn test_round_trip_scales_by_level_factor() {
        let mut rng = ChaCha12Rng::seed_from_u64(5);
        for n in [4, 8, 16, 32, 64, 1024] {
            let engine = NussbaumerEngine::<Zq2047>::new(n).unwrap();
            let p = PolyR::random(n, &mut rng);

            let t = engine.transform_slow(&p, false).unwrap();
            let back = engine.inverse_transform(t).unwrap();
            let scale = engine.decomposition().level_factor() as i64;
            assert_eq!(back, p.mul_integer(scale), "n = {n}");
        }
    }

    #[test]
    fn test_round_trip_n16() {
        // 1 + x scales by 2m = 8.
        let engine = NussbaumerEngine::<Zq2047>::new(16).unwrap();
        let mut p = PolyR::zero(16);
        p[0] = Zq2047::new(1);
        p[1] = Zq2047::new(1);

        let back = engine
            .inverse_transform(engine.transform_slow(&p, false).unwrap())
            .unwrap();
        let mut expected = PolyR::zero(16);
        expected[0] = Zq2047::new(8);
        expected[1] = Zq2047::new(8);
        assert_eq!(back, expected);
    }

    #[test]
    fn test_base_case_checks_length() {
        let engine = NussbaumerEngine::<Zq2047>::new(2).unwrap();
        let t = engine.transform_slow(&PolyR::zero(2), false).unwrap();
        assert_eq!(
            engine.inverse_transform(t),
            Err(NussbaumerError::LengthMismatch {
                expected: 2,
                found: 3
            })
        );
    }
}
