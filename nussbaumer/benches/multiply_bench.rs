use algebra::{Polynomial, Zq12289, Zq2047};
use criterion::{criterion_group, criterion_main, Criterion};
use nussbaumer::NussbaumerEngine;
use rand::thread_rng;

pub fn criterion_benchmark(c: &mut Criterion) {
    let mut rng = thread_rng();

    let n = 1024;
    let engine = NussbaumerEngine::<Zq2047>::new(n).unwrap();
    let a = Polynomial::<Zq2047>::random(n, &mut rng);
    let b = Polynomial::<Zq2047>::random(n, &mut rng);

    c.bench_function(&format!("nussbaumer {}", n), |bench| {
        bench.iter(|| engine.multiply(&a, &b))
    });

    c.bench_function(&format!("mass nussbaumer {}", n), |bench| {
        bench.iter(|| engine.mass_multiply(&a, &b))
    });

    c.bench_function(&format!("forward transform {}", n), |bench| {
        bench.iter(|| engine.transform_fast(&a))
    });

    c.bench_function(&format!("karatsuba {}", n), |bench| {
        bench.iter(|| a.karatsuba_mul(&b))
    });

    c.bench_function(&format!("schoolbook negacyclic {}", n), |bench| {
        bench.iter(|| a.negacyclic_mul_naive(&b, n))
    });

    let n = 512;
    let engine = NussbaumerEngine::<Zq12289>::new(n).unwrap();
    let a = Polynomial::<Zq12289>::random(n, &mut rng);
    let b = Polynomial::<Zq12289>::random(n, &mut rng);

    c.bench_function(&format!("nussbaumer q = 12289, {}", n), |bench| {
        bench.iter(|| engine.multiply(&a, &b))
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
