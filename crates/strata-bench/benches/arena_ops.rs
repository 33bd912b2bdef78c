//! Criterion micro-benchmarks for bump allocation and temporary regions.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use strata_bench::nested_scratch;
use strata_test_utils::fixtures;

/// Benchmark: 1K small bump allocations, then a reset.
fn bench_bump_1k(c: &mut Criterion) {
    let mut arena = fixtures::arena(64 * 1024);
    c.bench_function("arena_bump_1k", |b| {
        b.iter(|| {
            for _ in 0..1000 {
                black_box(arena.alloc(32).unwrap());
            }
            arena.reset();
        });
    });
}

/// Benchmark: the same allocations without zeroing.
fn bench_bump_1k_unzeroed(c: &mut Criterion) {
    let mut arena = fixtures::unzeroed_arena(64 * 1024);
    c.bench_function("arena_bump_1k_unzeroed", |b| {
        b.iter(|| {
            for _ in 0..1000 {
                black_box(arena.alloc(32).unwrap());
            }
            arena.reset();
        });
    });
}

/// Benchmark: open and release one temporary region.
fn bench_temp_cycle(c: &mut Criterion) {
    let arena = fixtures::arena(64 * 1024);
    c.bench_function("arena_temp_cycle", |b| {
        b.iter(|| {
            let mut temp = arena.temp(black_box(4096)).unwrap();
            black_box(temp.alloc(64).unwrap());
            temp.release().unwrap();
        });
    });
}

/// Benchmark: 16 nested temporary regions, each with one allocation.
fn bench_nested_16(c: &mut Criterion) {
    let arena = fixtures::arena(64 * 1024);
    c.bench_function("arena_nested_16", |b| {
        b.iter(|| black_box(nested_scratch(&arena, 16, 256).unwrap()));
    });
}

criterion_group!(
    benches,
    bench_bump_1k,
    bench_bump_1k_unzeroed,
    bench_temp_cycle,
    bench_nested_16
);
criterion_main!(benches);
