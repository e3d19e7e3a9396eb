#![allow(missing_docs)]

use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use megophone::{DoubleMetaphone, double_metaphone};

const NAMES: &[&str] = &[
    "bach",
    "caesar",
    "character",
    "church",
    "czerny",
    "focaccia",
    "michael",
    "orchestra",
    "schmidt",
    "wechsler",
];

fn bench_encode(c: &mut Criterion) {
    let mut group = c.benchmark_group("encode");

    group.bench_function("double_metaphone", |b| {
        b.iter(|| {
            for name in NAMES {
                black_box(double_metaphone(black_box(name)));
            }
        });
    });

    let encoder = DoubleMetaphone::new();
    group.bench_function("reused_encoder", |b| {
        b.iter(|| {
            for name in NAMES {
                black_box(encoder.encode(black_box(name)));
            }
        });
    });

    let long = "bachchiacaesarczfocaccia".repeat(64);
    group.bench_function("long_word", |b| {
        b.iter(|| black_box(encoder.encode(black_box(&long))));
    });

    group.finish();
}

criterion_group!(benches, bench_encode);
criterion_main!(benches);
