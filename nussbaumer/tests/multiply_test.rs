use std::sync::Arc;

use algebra::{OpCount, Polynomial, Ring, Zq, Zq12289, Zq2047};
use nussbaumer::{multiply, NussbaumerEngine, NussbaumerError};
use rand::SeedableRng;
use rand_chacha::ChaCha12Rng;

fn check_against_naive<R: Ring>(n: usize, rng: &mut ChaCha12Rng)
where
    rand::distributions::Standard: rand::distributions::Distribution<R>,
{
    let engine = NussbaumerEngine::<R>::new(n).unwrap();
    let a = Polynomial::<R>::random(n, rng);
    let b = Polynomial::<R>::random(n, rng);

    let c = engine.multiply(&a, &b).unwrap();
    assert_eq!(c.coeff_count(), n);
    assert_eq!(c, a.negacyclic_mul_naive(&b, n), "n = {n}");
}

#[test]
fn test_multiply_matches_naive() {
    let mut rng = ChaCha12Rng::seed_from_u64(42);
    for log_n in 1..=10 {
        check_against_naive::<Zq2047>(1 << log_n, &mut rng);
        check_against_naive::<Zq12289>(1 << log_n, &mut rng);
    }
}

#[test]
fn test_multiply_size_two() {
    let a = Polynomial::new(vec![Zq2047::new(5), Zq2047::new(9)]);
    let b = Polynomial::new(vec![Zq2047::new(3), Zq2047::new(7)]);

    let c = multiply(2, &a, &b).unwrap();
    assert_eq!(c, Polynomial::new(vec![Zq2047::new(1999), Zq2047::new(62)]));
    assert_eq!(c[0], Zq2047::from_i64(5 * 3 - 9 * 7));
}

#[test]
fn test_multiply_by_x() {
    // x * x^(n-1) = x^n = -1
    let n = 64;
    let mut x = Polynomial::<Zq12289>::zero(n);
    x[1] = Zq12289::new(1);
    let mut top = Polynomial::<Zq12289>::zero(n);
    top[n - 1] = Zq12289::new(1);

    let mut expected = Polynomial::<Zq12289>::zero(n);
    expected[0] = Zq12289::from_i64(-1);
    assert_eq!(multiply(n, &x, &top).unwrap(), expected);
}

#[test]
fn test_max_values() {
    for n in [4, 32, 256, 1024] {
        let max = Polynomial::new(vec![Zq2047::from_i64(-1); n]);
        let c = multiply(n, &max, &max).unwrap();
        assert_eq!(c, max.negacyclic_mul_naive(&max, n), "n = {n}");
        assert!(c.iter().all(|v| v.value() < 2047));
    }

    type Big = Zq<{ u32::MAX - 4 }>;
    let max = Polynomial::new(vec![Big::from_i64(-1); 16]);
    assert_eq!(
        multiply(16, &max, &max).unwrap(),
        max.negacyclic_mul_naive(&max, 16)
    );
}

#[test]
fn test_invalid_sizes() {
    let p = Polynomial::<Zq2047>::zero(6);
    for n in [0, 1, 6, 12] {
        assert_eq!(
            multiply(n, &p, &p),
            Err(NussbaumerError::InvalidSize { size: n })
        );
    }

    let short = Polynomial::<Zq2047>::zero(4);
    let full = Polynomial::<Zq2047>::zero(8);
    assert_eq!(
        multiply(8, &full, &short),
        Err(NussbaumerError::LengthMismatch {
            expected: 8,
            found: 4
        })
    );
}

#[test]
fn test_modulus_must_be_coprime_to_factor() {
    let p = Polynomial::<Zq<4096>>::zero(1024);
    assert_eq!(
        multiply(1024, &p, &p),
        Err(NussbaumerError::NonInvertibleFactor {
            factor: 8192,
            modulus: 4096
        })
    );
}

#[test]
fn test_counter_does_not_change_result() {
    let mut rng = ChaCha12Rng::seed_from_u64(8);
    let n = 256;
    let a = Polynomial::<Zq2047>::random(n, &mut rng);
    let b = Polynomial::<Zq2047>::random(n, &mut rng);

    let counter = Arc::new(OpCount::new());
    let counted = NussbaumerEngine::with_counter(n, counter.clone()).unwrap();
    let plain = NussbaumerEngine::new(n).unwrap();

    assert_eq!(
        counted.multiply(&a, &b).unwrap(),
        plain.multiply(&a, &b).unwrap()
    );
    let counts = counter.reset();
    assert!(counts.multiplications > 0);
    assert!(counts.multiplications < n * n);
    assert_eq!(counter.snapshot().additions, 0);
}

#[test]
fn test_matches_karatsuba_on_reduced_product() {
    let mut rng = ChaCha12Rng::seed_from_u64(13);
    let n = 128;
    let a = Polynomial::<Zq12289>::random(n, &mut rng);
    let b = Polynomial::<Zq12289>::random(n, &mut rng);

    let full = a.karatsuba_mul(&b).unwrap();
    let mut reduced = Polynomial::<Zq12289>::zero(n);
    for (i, &c) in full.iter().enumerate() {
        if i < n {
            reduced[i] += c;
        } else {
            reduced[i - n] -= c;
        }
    }
    assert_eq!(multiply(n, &a, &b).unwrap(), reduced);
}
