use std::hint::black_box;

use algebra::{Ring, Xgcd, Zq12289};
use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use rand::{distributions::Uniform, thread_rng, Rng};

pub fn criterion_benchmark(c: &mut Criterion) {
    let modulus = Zq12289::MODULUS;
    let mut rng = thread_rng();
    let dis = Uniform::new(1, modulus);

    c.bench_function("gcdinv", |b| {
        b.iter_batched(
            || rng.sample(dis),
            |v| u32::gcdinv(black_box(v), black_box(modulus)),
            BatchSize::SmallInput,
        );
    });

    c.bench_function("ring inverse", |b| {
        b.iter_batched(
            || Zq12289::new(rng.sample(dis)),
            |v| black_box(v).try_inv(),
            BatchSize::SmallInput,
        );
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
