//! Concurrency tests for the random sources.

use axiom_random::{atomic_random_int, random_double, RandomSource, SharedRandomSource};
use std::sync::{Arc, Barrier};
use std::thread;

#[test]
fn test_thread_local_streams_are_independent() {
    let num_threads = 8;
    let barrier = Arc::new(Barrier::new(num_threads));

    let handles: Vec<_> = (0..num_threads)
        .map(|_| {
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                barrier.wait();
                (0..16)
                    .map(|_| atomic_random_int(i32::MIN, i32::MAX).unwrap())
                    .collect::<Vec<_>>()
            })
        })
        .collect();

    let streams: Vec<Vec<i32>> = handles.into_iter().map(|h| h.join().unwrap()).collect();

    for (i, a) in streams.iter().enumerate() {
        for b in &streams[i + 1..] {
            assert_ne!(a, b, "two threads produced the same stream");
        }
    }
}

#[test]
fn test_thread_local_draws_stay_in_range_under_load() {
    thread::scope(|s| {
        for _ in 0..8 {
            s.spawn(|| {
                for _ in 0..5_000 {
                    let v = random_double(-1.0, 1.0).unwrap();
                    assert!((-1.0..1.0).contains(&v));
                    let i = atomic_random_int(0, 3).unwrap();
                    assert!((0..=3).contains(&i));
                }
            });
        }
    });
}

#[test]
fn test_shared_source_serializes_one_stream() {
    let num_threads = 8;
    let draws_per_thread = 500;
    let seed = 5;

    let shared = SharedRandomSource::from_seed(seed);
    let barrier = Barrier::new(num_threads);

    let mut concurrent: Vec<i32> = thread::scope(|s| {
        let shared = &shared;
        let barrier = &barrier;
        let handles: Vec<_> = (0..num_threads)
            .map(|_| {
                s.spawn(move || {
                    barrier.wait();
                    (0..draws_per_thread)
                        .map(|_| shared.int(0, 1_000_000).unwrap())
                        .collect::<Vec<_>>()
                })
            })
            .collect();
        handles.into_iter().flat_map(|h| h.join().unwrap()).collect()
    });

    // Interleaving is arbitrary, but together the threads consumed exactly
    // the sequential stream.
    let mut owned = RandomSource::from_seed(seed);
    let mut sequential: Vec<i32> = (0..num_threads * draws_per_thread)
        .map(|_| owned.int(0, 1_000_000).unwrap())
        .collect();

    concurrent.sort_unstable();
    sequential.sort_unstable();
    assert_eq!(concurrent, sequential);
}
