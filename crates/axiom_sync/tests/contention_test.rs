//! Multi-threaded tests for the atomic counter toolkit.
//!
//! Each test lines all threads up on a barrier first, so the updates overlap
//! as much as the scheduler allows.

use axiom_shared::{MathError, OverflowPolicy};
use axiom_sync::{
    atomic_add, atomic_divide, atomic_multiply, atomic_multiply_with, atomic_subtract,
    atomic_update,
};
use std::sync::atomic::{AtomicI32, AtomicI64, AtomicU64, AtomicUsize, Ordering};
use std::sync::{Arc, Barrier};
use std::thread;

#[test]
fn test_concurrent_add_loses_no_updates() {
    let num_threads = 8;
    let adds_per_thread = 10_000;

    let cell = Arc::new(AtomicI64::new(0));
    let barrier = Arc::new(Barrier::new(num_threads));

    let handles: Vec<_> = (0..num_threads)
        .map(|_| {
            let cell = Arc::clone(&cell);
            let barrier = Arc::clone(&barrier);

            thread::spawn(move || {
                barrier.wait();
                for _ in 0..adds_per_thread {
                    atomic_add(&*cell, 1);
                }
            })
        })
        .collect();

    for h in handles {
        h.join().unwrap();
    }

    assert_eq!(cell.load(Ordering::SeqCst), (num_threads * adds_per_thread) as i64);
}

#[test]
fn test_concurrent_add_and_subtract_cancel() {
    let cell = AtomicI32::new(100);
    let barrier = Barrier::new(8);

    thread::scope(|s| {
        for t in 0..8 {
            let cell = &cell;
            let barrier = &barrier;
            s.spawn(move || {
                barrier.wait();
                for _ in 0..5_000 {
                    if t % 2 == 0 {
                        atomic_add(cell, 3);
                    } else {
                        atomic_subtract(cell, 3);
                    }
                }
            });
        }
    });

    assert_eq!(cell.load(Ordering::SeqCst), 100);
}

#[test]
fn test_concurrent_multiply_is_exact_power_of_two() {
    let num_threads = 20;
    let cell = AtomicI64::new(1);
    let barrier = Barrier::new(num_threads);

    thread::scope(|s| {
        for _ in 0..num_threads {
            s.spawn(|| {
                barrier.wait();
                atomic_multiply(&cell, 2);
            });
        }
    });

    assert_eq!(cell.load(Ordering::SeqCst), 1_i64 << num_threads);
}

#[test]
fn test_repeated_concurrent_multiply() {
    // Many rounds make a lost update far more likely to show up if the
    // retry loop were broken.
    for _ in 0..50 {
        let cell = AtomicU64::new(1);
        let barrier = Barrier::new(16);

        thread::scope(|s| {
            for _ in 0..16 {
                s.spawn(|| {
                    barrier.wait();
                    for _ in 0..3 {
                        atomic_multiply(&cell, 2);
                    }
                });
            }
        });

        assert_eq!(cell.load(Ordering::SeqCst), 1_u64 << 48);
    }
}

#[test]
fn test_concurrent_multiply_then_divide_restores_value() {
    let cell = AtomicI64::new(7);
    let barrier = Barrier::new(12);

    thread::scope(|s| {
        for _ in 0..12 {
            s.spawn(|| {
                barrier.wait();
                atomic_multiply(&cell, 3);
            });
        }
    });
    assert_eq!(cell.load(Ordering::SeqCst), 7 * 3_i64.pow(12));

    thread::scope(|s| {
        for _ in 0..12 {
            s.spawn(|| {
                barrier.wait();
                atomic_divide(&cell, 3).unwrap();
            });
        }
    });
    assert_eq!(cell.load(Ordering::SeqCst), 7);
}

#[test]
fn test_concurrent_checked_multiply_stops_at_overflow() {
    // 2^30 fits in i32, 2^31 does not: exactly 30 doublings can land.
    let num_threads = 40;
    let cell = AtomicI32::new(1);
    let overflowed = AtomicUsize::new(0);
    let barrier = Barrier::new(num_threads);

    thread::scope(|s| {
        for _ in 0..num_threads {
            s.spawn(|| {
                barrier.wait();
                match atomic_multiply_with(&cell, 2, OverflowPolicy::Checked) {
                    Ok(()) => {}
                    Err(MathError::Overflow { .. }) => {
                        overflowed.fetch_add(1, Ordering::Relaxed);
                    }
                    Err(other) => panic!("unexpected error: {other}"),
                }
            });
        }
    });

    assert_eq!(cell.load(Ordering::SeqCst), 1_i32 << 30);
    assert_eq!(overflowed.load(Ordering::SeqCst), num_threads - 30);
}

#[test]
fn test_every_update_lands_exactly_once() {
    let num_threads = 8;
    let updates_per_thread = 2_000;
    let cell = AtomicU64::new(0);

    thread::scope(|s| {
        for _ in 0..num_threads {
            s.spawn(|| {
                for _ in 0..updates_per_thread {
                    let mut attempts = 0_u64;
                    let update = atomic_update(&cell, |v| {
                        attempts += 1;
                        Some(v + 1)
                    })
                    .unwrap();
                    assert_eq!(update.stored, update.previous + 1);
                    // One compute per failed swap, plus the one that landed.
                    assert_eq!(update.retries + 1, attempts);
                }
            });
        }
    });

    assert_eq!(cell.load(Ordering::SeqCst), (num_threads * updates_per_thread) as u64);
}
