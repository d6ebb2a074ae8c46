//! # AXIOM
//!
//! A small numeric toolkit:
//! - deterministic scalar and geometric arithmetic ([`math`])
//! - lock-free atomic updates of shared integer counters ([`sync`])
//! - concurrency-safe uniform random sources ([`random`])
//!
//! The groups are independent. They share only [`constants`], the error
//! taxonomy ([`DomainError`], [`ShapeError`], [`MathError`]) and the
//! [`ToolkitConfig`] that a [`Toolkit`] is built from.
//!
//! ## Example
//!
//! ```rust
//! use std::sync::atomic::{AtomicI32, Ordering};
//! use axiom::{math, sync, Vector3};
//!
//! let v = Vector3::new(1.0, 0.0, 0.0)
//!     .rotate(Vector3::Z, std::f64::consts::FRAC_PI_2)
//!     .unwrap();
//! assert!((v.y - 1.0).abs() < 1e-12);
//!
//! assert_eq!(math::divide(1, 0), Err(axiom::DomainError::DivisionByZero));
//!
//! let counter = AtomicI32::new(1);
//! sync::atomic_multiply(&counter, 8);
//! assert_eq!(counter.load(Ordering::SeqCst), 8);
//! ```
//!
//! ## Logging
//!
//! AXIOM emits `tracing` events (CAS retries, generator seeding, rejected
//! overflows) and never installs a subscriber.

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod toolkit;

pub use axiom_math as math;
pub use axiom_random as random;
pub use axiom_sync as sync;

pub use axiom_shared::constants;
pub use axiom_shared::{
    ConfigError, DomainError, MathError, OverflowPolicy, Precision, RandomPolicy, ShapeError,
    ToolkitConfig,
};

pub use axiom_math::{Matrix, Vector2, Vector3};
pub use axiom_random::{RandomSource, SharedRandomSource};
pub use axiom_sync::{AtomicCounter, CounterValue};
pub use toolkit::Toolkit;
