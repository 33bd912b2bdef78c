//! Criterion micro-benchmarks for string building and splitting.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use strata_bench::fold_words;
use strata_str::Str;
use strata_test_utils::fixtures::{self, SAMPLE_WORDS};

/// Benchmark: concatenate two short strings into a fresh arena slot.
fn bench_concat(c: &mut Criterion) {
    let mut arena = fixtures::arena(64 * 1024);
    c.bench_function("str_concat_100", |b| {
        b.iter(|| {
            for _ in 0..100 {
                black_box(Str::concat(&arena, Str::from("hello, "), Str::from("world")));
            }
            arena.reset();
        });
    });
}

/// Benchmark: split 1K `key=value` lines and count the `=` in each.
fn bench_split_lines(c: &mut Criterion) {
    let text = fixtures::key_value_lines(1000);
    c.bench_function("str_split_1k_lines", |b| {
        b.iter(|| {
            let mut eq = 0;
            for line in Str::from(text.as_str()).iter().splits(b'\n') {
                eq += line.count(b'=');
            }
            black_box(eq)
        });
    });
}

/// Benchmark: split and upper-case a sentence.
fn bench_fold_words(c: &mut Criterion) {
    let mut arena = fixtures::arena(4096);
    c.bench_function("str_fold_words", |b| {
        b.iter(|| {
            black_box(fold_words(&arena, Str::from(SAMPLE_WORDS)).unwrap());
            arena.reset();
        });
    });
}

criterion_group!(benches, bench_concat, bench_split_lines, bench_fold_words);
criterion_main!(benches);
