//! Performance measurement for the sprite generation pipeline

// Criterion macros generate undocumented functions
#![allow(missing_docs)]

use cellsprite::automaton::evolution::evolve;
use cellsprite::generator::noise::noise_grid;
use cellsprite::generator::pipeline::{generate_bitmap, generate_sprite};
use cellsprite::raster::ColorConfig;
use criterion::{Criterion, criterion_group, criterion_main};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::hint::black_box;

/// Measures one evolution step on a seeded noise grid
fn bench_evolution_step(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(12345);
    let grid = noise_grid(&mut rng);

    c.bench_function("evolution_step", |b| {
        b.iter(|| evolve(black_box(&grid)));
    });
}

/// Measures bitmap assembly from noise to mirrored grid
fn bench_generate_bitmap(c: &mut Criterion) {
    c.bench_function("generate_bitmap", |b| {
        let mut rng = StdRng::seed_from_u64(12345);
        b.iter(|| generate_bitmap(black_box(&mut rng)));
    });
}

/// Measures full sprite generation including rasterization
fn bench_generate_sprite(c: &mut Criterion) {
    let colors = ColorConfig::default();

    c.bench_function("generate_sprite", |b| {
        let mut rng = StdRng::seed_from_u64(12345);
        b.iter(|| generate_sprite(black_box(&mut rng), black_box(&colors)));
    });
}

criterion_group!(
    benches,
    bench_evolution_step,
    bench_generate_bitmap,
    bench_generate_sprite
);
criterion_main!(benches);
