//! # Thread-Local Generators
//!
//! Each thread lazily gets its own [`RandomSource`], seeded independently from
//! OS entropy the first time that thread draws. No generator state crosses a
//! thread boundary, so these functions need no lock and are safe to call from
//! any number of threads at once. Streams on different threads are
//! independent.
//!
//! `atomic_random_int` / `atomic_random_double` are the concurrency-safe
//! entry points under their established names. They draw from the same
//! per-thread generator as `random_int` / `random_double`.

use std::cell::RefCell;

use axiom_shared::DomainResult;

use crate::source::RandomSource;

thread_local! {
    static THREAD_SOURCE: RefCell<RandomSource> = RefCell::new(seed_thread_source());
}

fn seed_thread_source() -> RandomSource {
    tracing::debug!(thread = ?std::thread::current().id(), "seeding thread-local random source");
    RandomSource::from_entropy()
}

fn with_thread_source<R>(draw: impl FnOnce(&mut RandomSource) -> R) -> R {
    THREAD_SOURCE.with(|source| draw(&mut source.borrow_mut()))
}

/// Uniform integer in `[min, max]` from this thread's generator.
///
/// # Errors
///
/// [`DomainError::InvalidIntRange`](axiom_shared::DomainError::InvalidIntRange)
/// if `min > max`.
pub fn random_int(min: i32, max: i32) -> DomainResult<i32> {
    with_thread_source(|source| source.int(min, max))
}

/// Uniform real in `[min, max)` from this thread's generator.
///
/// # Errors
///
/// [`DomainError::InvalidRealRange`](axiom_shared::DomainError::InvalidRealRange)
/// if `min > max` or the range is not finite.
pub fn random_double(min: f64, max: f64) -> DomainResult<f64> {
    with_thread_source(|source| source.double(min, max))
}

/// Concurrency-safe uniform integer in `[min, max]`.
///
/// Thread-local state, not atomic arithmetic on a shared stream.
///
/// # Errors
///
/// Same as [`random_int`].
#[inline]
pub fn atomic_random_int(min: i32, max: i32) -> DomainResult<i32> {
    random_int(min, max)
}

/// Concurrency-safe uniform real in `[min, max)`.
///
/// Thread-local state, not atomic arithmetic on a shared stream.
///
/// # Errors
///
/// Same as [`random_double`].
#[inline]
pub fn atomic_random_double(min: f64, max: f64) -> DomainResult<f64> {
    random_double(min, max)
}
