use algebra::{Polynomial, Ring};

use crate::rotate::check_len;
use crate::{NussbaumerError, Transformed};

use super::NussbaumerEngine;

impl<R: Ring> NussbaumerEngine<R> {
    /// Transforms the first operand of a multiplication.
    ///
    /// The wrap-around of `x^N + 1` is folded into the initial layout, which costs one
    /// butterfly level more than [`Self::transform_fast`]. With `fix_factor` the input is
    /// first divided by the correction factor, so exactly one operand of a
    /// multiplication should be transformed this way.
    pub fn transform_slow(
        &self,
        p: &Polynomial<R>,
        fix_factor: bool,
    ) -> Result<Transformed<R>, NussbaumerError> {
        check_len(p, self.size())?;

        let corrected;
        let p = if fix_factor {
            corrected = self.correct(p);
            &corrected
        } else {
            p
        };

        if self.params.is_base_case() {
            self.count_additions(2);
            return Ok(Transformed::new(vec![Polynomial::new(vec![
                p[0],
                p[0] + p[1],
                p[1] - p[0],
            ])]));
        }

        let m = self.params.m();
        let r = self.params.r();
        let mut t = vec![Polynomial::zero(r); 2 * m];

        for j in 0..r {
            t[0][j] = p[m * j];
        }
        for i in 1..m {
            t[i][0] = -p[m * (r - 1) + m - i];
            for j in 1..r {
                t[i][j] = p[m * (j - 1) + m - i];
            }
        }

        for i in 0..m - 1 {
            t[m + i][0] = -t[i][r - 1];
            for j in 1..r {
                t[m + i][j] = t[i][j - 1];
            }
        }

        let mut last = -&t[0];
        for entry in &t[1..2 * m - 1] {
            last -= entry;
        }
        t[2 * m - 1] = last;
        self.count_additions(2 * (m - 1) + (2 * m - 1) * r);

        self.butterflies(&mut t, self.params.log_m() + 1, -1)?;
        Ok(Transformed::new(t))
    }

    /// Transforms the second operand of a multiplication. The coefficients are only
    /// distributed over the `2m` polynomials before the butterflies.
    pub fn transform_fast(&self, p: &Polynomial<R>) -> Result<Transformed<R>, NussbaumerError> {
        check_len(p, self.size())?;

        if self.params.is_base_case() {
            self.count_additions(1);
            return Ok(Transformed::new(vec![Polynomial::new(vec![
                p[0],
                p[1],
                p[0] + p[1],
            ])]));
        }

        let m = self.params.m();
        let r = self.params.r();
        let mut t: Vec<Polynomial<R>> = (0..2 * m)
            .map(|i| (0..r).map(|j| p[m * j + i % m]).collect::<Vec<R>>().into())
            .collect();

        self.butterflies(&mut t, self.params.log_m(), 1)?;
        Ok(Transformed::new(t))
    }

    /// The decimation-in-frequency butterfly levels `levels - 1` down to `0`.
    ///
    /// Entries `e` and `f = e + 2^j` become `e + u^k f` and `e - u^k f`, with `k` the
    /// bit-reversed group index scaled by `r/m` and signed by `sign`. Entry `0` of the
    /// last level is never read by the inverse transform and stays zero.
    fn butterflies(
        &self,
        t: &mut [Polynomial<R>],
        levels: u32,
        sign: i64,
    ) -> Result<(), NussbaumerError> {
        let m = self.params.m();
        let r = self.params.r();
        let ratio = (r / m) as i64;

        for j in (0..levels).rev() {
            let width = 1usize << j;
            for group in 0..(m >> j) {
                let start = group << (j + 1);
                let k = sign * ratio * (bit_reverse(group, self.params.log_m() - j) << j) as i64;

                for e in start..start + width {
                    let f = e + width;
                    let high = self.butterfly(&t[e], &t[f], k + r as i64)?;
                    if e == 0 && j == 0 {
                        t[e].set_zero();
                    } else {
                        t[e] = self.butterfly(&t[e], &t[f], k)?;
                    }
                    t[f] = high;
                }
            }
        }
        Ok(())
    }
}

/// Reverses the lowest `bits` bits of `value`.
#[inline]
fn bit_reverse(value: usize, bits: u32) -> usize {
    if bits == 0 {
        0
    } else {
        value.reverse_bits() >> (usize::BITS - bits)
    }
}
