//! # Shared Random Source
//!
//! One generator behind a `parking_lot::Mutex`. Every draw serializes through
//! the lock, so all callers consume a single stream in some total order.
//! Use it when one reproducible stream matters more than throughput; prefer
//! the thread-local functions otherwise.

use std::sync::OnceLock;

use parking_lot::Mutex;

use axiom_shared::DomainResult;

use crate::source::RandomSource;

static GLOBAL: OnceLock<SharedRandomSource> = OnceLock::new();

/// A [`RandomSource`] that can be shared between threads.
#[derive(Debug)]
pub struct SharedRandomSource {
    source: Mutex<RandomSource>,
}

impl SharedRandomSource {
    /// Wraps an owned source.
    #[must_use]
    pub fn new(source: RandomSource) -> Self {
        Self { source: Mutex::new(source) }
    }

    /// Entropy-seeded shared source.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(RandomSource::from_entropy())
    }

    /// Seeded shared source.
    #[must_use]
    pub fn from_seed(seed: u64) -> Self {
        Self::new(RandomSource::from_seed(seed))
    }

    /// The process-wide instance, created from entropy on first use.
    pub fn global() -> &'static Self {
        GLOBAL.get_or_init(|| {
            tracing::debug!("creating process-wide random source");
            Self::from_entropy()
        })
    }

    /// Uniform integer in `[min, max]`.
    ///
    /// # Errors
    ///
    /// See [`RandomSource::int`].
    pub fn int(&self, min: i32, max: i32) -> DomainResult<i32> {
        self.source.lock().int(min, max)
    }

    /// Uniform real in `[min, max)`.
    ///
    /// # Errors
    ///
    /// See [`RandomSource::double`].
    pub fn double(&self, min: f64, max: f64) -> DomainResult<f64> {
        self.source.lock().double(min, max)
    }

    /// Runs `draw` with exclusive access to the generator.
    ///
    /// Keeps a sequence of draws contiguous in the shared stream. Do not call
    /// back into the same `SharedRandomSource` from `draw`; the lock is not
    /// reentrant.
    pub fn with<R>(&self, draw: impl FnOnce(&mut RandomSource) -> R) -> R {
        draw(&mut self.source.lock())
    }
}

/// Uniform integer in `[min, max]` from the process-wide generator.
///
/// # Errors
///
/// See [`RandomSource::int`].
pub fn shared_random_int(min: i32, max: i32) -> DomainResult<i32> {
    SharedRandomSource::global().int(min, max)
}

/// Uniform real in `[min, max)` from the process-wide generator.
///
/// # Errors
///
/// See [`RandomSource::double`].
pub fn shared_random_double(min: f64, max: f64) -> DomainResult<f64> {
    SharedRandomSource::global().double(min, max)
}
