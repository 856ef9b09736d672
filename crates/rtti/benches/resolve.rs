// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 rtti contributors

//! Hot-path benchmarks: descriptor resolution and the generic walk.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rtti::{dump, resolve, Reflect};

#[derive(Default, Reflect)]
struct Sample {
    id: u32,
    label: String,
    readings: Vec<f64>,
}

fn bench_resolve(c: &mut Criterion) {
    c.bench_function("resolve_struct", |b| b.iter(|| black_box(resolve::<Sample>())));
    c.bench_function("resolve_sequence", |b| {
        b.iter(|| black_box(resolve::<Vec<f64>>()))
    });
}

fn bench_dump(c: &mut Criterion) {
    let sample = Sample {
        id: 7,
        label: String::from("bench"),
        readings: vec![0.25; 32],
    };
    c.bench_function("dump_struct", |b| b.iter(|| black_box(dump(&sample))));
}

criterion_group!(benches, bench_resolve, bench_dump);
criterion_main!(benches);
