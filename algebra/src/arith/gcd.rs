/// Greatest common divisor and modular inverse cofactor.
pub trait Xgcd: Sized {
    /// Returns the greatest common divisor `g` of `x` and `y` and computes
    /// `a` such that `0 ≤ a < y` and `a x = gcd(x, y) mod y`.
    /// We require `x < y`.
    ///
    /// When `y = 1` the greatest common divisor is set to `1` and `a` is
    /// set to `0`.
    ///
    /// This is the extended Euclidean algorithm computing just one cofactor
    /// and reducing it modulo `y`.
    fn gcdinv(x: Self, y: Self) -> (Self, Self);
}

macro_rules! impl_extended_gcd {
    (impl Xgcd for $SelfT:ty; SignedType: $SignedT:ty) => {
        impl Xgcd for $SelfT {
            fn gcdinv(x: Self, y: Self) -> (Self, Self) {
                assert!(y > x);

                if y == 1 {
                    return (0, 1);
                }

                let mut t: $SignedT = 0;
                let mut t_new: $SignedT = 1;
                let mut r = y as $SignedT;
                let mut r_new = x as $SignedT;

                while r_new != 0 {
                    let quot = r / r_new;
                    (t, t_new) = (t_new, t - quot * t_new);
                    (r, r_new) = (r_new, r - quot * r_new);
                }

                if t < 0 {
                    t += y as $SignedT;
                }

                (t as Self, r as Self)
            }
        }
    };
}

impl_extended_gcd!(impl Xgcd for u32; SignedType: i64);
impl_extended_gcd!(impl Xgcd for u64; SignedType: i128);

#[cfg(test)]
mod tests {
    use rand::prelude::*;

    use super::*;

    type ValueT = u64;
    type WideT = u128;

    #[test]
    fn test_gcdinv() {
        let mut rng = thread_rng();

        let y = rng.gen_range(2..ValueT::MAX >> 1);
        let x = rng.gen_range(0..y);

        let (a, d) = ValueT::gcdinv(x, y);
        assert_eq!((a as WideT * x as WideT) % y as WideT, d as WideT % y as WideT);
        assert_eq!(x % d, 0);
        assert_eq!(y % d, 0);
    }

    #[test]
    fn test_gcdinv_small_modulus() {
        // 4 * 512 = 2048 = 2047 + 1
        let (a, d) = u32::gcdinv(4, 2047);
        assert_eq!(d, 1);
        assert_eq!(a, 512);

        let (_, d) = u32::gcdinv(89, 2047);
        assert_eq!(d, 89);

        // 8192 is the correction factor of 1024, and 12 shares 4 with it.
        assert_eq!(u32::gcdinv(12, 8192).1, 4);
        assert_eq!(u32::gcdinv(0, 7), (0, 7));
    }
}
