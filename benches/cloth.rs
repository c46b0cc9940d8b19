//! Benchmarks for the cloth simulation.

use criterion::{criterion_group, criterion_main, Criterion};
use drape::{Cloth, ClothConfig, SimParams};

fn bench_cloth_update(c: &mut Criterion) {
    c.bench_function("cloth_31x41_60_steps", |b| {
        b.iter(|| {
            let mut cloth: Cloth<f32> = Cloth::new(&ClothConfig::default()).unwrap();
            let params = SimParams::new();
            for _ in 0..60 {
                cloth.update(&params);
            }
            cloth.position_at(30, 20)
        });
    });
}

fn bench_cloth_update_unconstrained(c: &mut Criterion) {
    c.bench_function("cloth_31x41_60_steps_no_constraints", |b| {
        b.iter(|| {
            let mut cloth: Cloth<f32> = Cloth::new(&ClothConfig::default()).unwrap();
            let params = SimParams::new().with_constraints_enabled(false);
            for _ in 0..60 {
                cloth.update(&params);
            }
            cloth.position_at(30, 20)
        });
    });
}

criterion_group!(benches, bench_cloth_update, bench_cloth_update_unconstrained);
criterion_main!(benches);
