//! Multiplication by powers of `u` in `R[u] / (u^r + 1)`.
//!
//! Multiplying by `u` shifts every coefficient one place up, and the coefficient that
//! wraps past `u^r` comes back negated because `u^r = -1`. These are the butterflies of
//! every transform, so all rotation arithmetic lives here.

use algebra::{Polynomial, Ring};

use crate::NussbaumerError;

/// For each output index of `u^steps * p`, where `p` has length `len`, yields the index
/// of the source coefficient and whether it is negated.
fn rotation_sources(len: usize, steps: i64) -> impl Iterator<Item = (usize, bool)> {
    let len_i = len as i64;
    let period = 2 * len_i;

    // Bring steps into (-2r, 0], so every source index below is non-negative. An empty
    // polynomial has no period and nothing to rotate.
    let mut steps = steps.checked_rem(period).unwrap_or(0);
    if steps > 0 {
        steps -= period;
    }

    (0..len_i).map(move |i| {
        let src = i - steps;
        ((src % len_i) as usize, (src / len_i) & 1 == 1)
    })
}

#[inline]
pub(crate) fn check_len<R>(p: &Polynomial<R>, expected: usize) -> Result<(), NussbaumerError> {
    if p.coeff_count() == expected {
        Ok(())
    } else {
        Err(NussbaumerError::LengthMismatch {
            expected,
            found: p.coeff_count(),
        })
    }
}

/// Calculates `p1 + u^steps * p2 mod (u^r + 1)`, where `r` is the common length of
/// `p1` and `p2`. `steps` may have any sign or magnitude.
pub fn add_rotated<R: Ring>(
    p1: &Polynomial<R>,
    p2: &Polynomial<R>,
    steps: i64,
) -> Result<Polynomial<R>, NussbaumerError> {
    let r = p1.coeff_count();
    check_len(p2, r)?;

    let data = rotation_sources(r, steps)
        .zip(p1)
        .map(|((src, negate), &a)| if negate { a - p2[src] } else { a + p2[src] })
        .collect();
    Ok(Polynomial::new(data))
}

/// Calculates `u^steps * p mod (u^r + 1)`, where `r` is the length of `p`.
pub fn rotate<R: Ring>(p: &Polynomial<R>, steps: i64) -> Polynomial<R> {
    rotation_sources(p.coeff_count(), steps)
        .map(|(src, negate)| if negate { -p[src] } else { p[src] })
        .collect::<Vec<R>>()
        .into()
}
