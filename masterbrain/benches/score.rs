use std::time::Duration;

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use masterbrain::{score::compute_feedback, secret};
use rand::SeedableRng;
use rand_xorshift::XorShiftRng;

pub fn criterion_benchmark(criterion: &mut Criterion) {
    let mut rng = XorShiftRng::seed_from_u64(0);
    criterion.bench_function("generate", |b| {
        b.iter(|| secret::generate(&mut rng));
    });
    let guess = secret::generate(&mut rng);
    let answer = secret::generate(&mut rng);
    criterion.bench_function("score", |b| {
        b.iter(|| compute_feedback(black_box(&guess), black_box(&answer)));
    });
}

criterion_group! {
    name = benches;
    config = Criterion::default().sample_size(300).warm_up_time(Duration::from_secs(3));
    targets = criterion_benchmark
}
criterion_main!(benches);
