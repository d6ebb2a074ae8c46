//! # Atomic Counter Benchmark
//!
//! Compares wait-free fetch-and-add against the CAS retry loop, uncontended
//! and with several threads hammering the same cell.
//!
//! Run with: `cargo bench --package axiom_sync`

// Benchmarks don't need docs
#![allow(missing_docs)]

use axiom_sync::{atomic_add, atomic_multiply};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use std::sync::atomic::AtomicU64;
use std::thread;

const OPS_PER_THREAD: usize = 10_000;

/// Benchmark: single-threaded add vs multiply.
fn bench_uncontended(c: &mut Criterion) {
    let cell = AtomicU64::new(1);

    c.bench_function("atomic_add_uncontended", |b| {
        b.iter(|| atomic_add(&cell, black_box(1)));
    });

    c.bench_function("atomic_multiply_uncontended", |b| {
        b.iter(|| atomic_multiply(&cell, black_box(1)));
    });
}

/// Benchmark: N threads updating one cell.
fn bench_contended(c: &mut Criterion) {
    let mut group = c.benchmark_group("contended");

    for threads in [2, 4, 8] {
        group.bench_with_input(BenchmarkId::new("add", threads), &threads, |b, &threads| {
            b.iter(|| {
                let cell = AtomicU64::new(0);
                thread::scope(|s| {
                    for _ in 0..threads {
                        s.spawn(|| {
                            for _ in 0..OPS_PER_THREAD {
                                atomic_add(&cell, 1);
                            }
                        });
                    }
                });
                cell
            });
        });

        group.bench_with_input(BenchmarkId::new("multiply", threads), &threads, |b, &threads| {
            b.iter(|| {
                let cell = AtomicU64::new(1);
                thread::scope(|s| {
                    for _ in 0..threads {
                        s.spawn(|| {
                            for _ in 0..OPS_PER_THREAD {
                                atomic_multiply(&cell, 3);
                            }
                        });
                    }
                });
                cell
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_uncontended, bench_contended);
criterion_main!(benches);
