use algebra::{AlgebraError, Ring, Zq, Zq12289, Zq2047};
use num_traits::{ConstOne, Zero};
use rand::{distributions::Standard, Rng, SeedableRng};
use rand_chacha::ChaCha12Rng;

#[test]
fn test_ring_laws() {
    let mut rng = ChaCha12Rng::seed_from_u64(1);
    for _ in 0..1000 {
        let a: Zq12289 = rng.sample(Standard);
        let b: Zq12289 = rng.sample(Standard);
        let c: Zq12289 = rng.sample(Standard);

        assert_eq!(a + b, b + a);
        assert_eq!(a * (b + c), a * b + a * c);
        assert_eq!(a - b, a + (-b));
        assert!((a - a).is_zero());
        assert_eq!(a.mul_scalar(3), a + a + a);
    }
}

#[test]
fn test_inverse_of_every_unit() {
    for v in 1..Zq12289::MODULUS {
        let a = Zq12289::new(v);
        assert_eq!(a * a.try_inv().unwrap(), Zq12289::ONE);
    }

    // 2047 = 23 * 89
    let units = (1..2047u32)
        .filter(|v| Zq2047::new(*v).try_inv().is_ok())
        .count();
    assert_eq!(units, 22 * 88);
}

#[test]
fn test_equality_is_congruence() {
    assert_eq!(Zq2047::from_i64(-48), Zq2047::new(1999));
    assert_eq!(Zq2047::from_i64(2047 * 5 + 1), Zq2047::ONE);
    assert_eq!(Zq2047::new(4094), Zq2047::from_i64(0));
}

#[test]
fn test_serialize() {
    let a = Zq2047::new(1234);
    let bytes = bincode::serialize(&a).unwrap();
    assert_eq!(bytes, bincode::serialize(&1234u32).unwrap());
    assert_eq!(bincode::deserialize::<Zq2047>(&bytes).unwrap(), a);
}

#[test]
fn test_even_modulus_units() {
    type Z = Zq<2048>;
    assert_eq!(
        Z::new(1024).try_inv(),
        Err(AlgebraError::NoInverse {
            value: 1024,
            modulus: 2048
        })
    );
    assert_eq!(Z::new(3) * Z::new(3).try_inv().unwrap(), Z::ONE);
}

fn canonical<R: Ring>(value: i64) -> u64 {
    R::from_i64(value).to_u64()
}

#[test]
fn test_generic_and_concrete_values_agree() {
    for v in [-4095i64, -48, -1, 0, 1, 2046, 2047, 1 << 40] {
        assert_eq!(canonical::<Zq2047>(v), Zq2047::from_i64(v).value() as u64);
        assert_eq!(canonical::<Zq12289>(v), Zq12289::from_i64(v).value() as u64);
    }
    assert_eq!(canonical::<Zq2047>(-48), 1999);
}
