//! # AXIOM Random
//!
//! Uniform random integers and reals, safe to use from many threads.
//!
//! ## Generator Policies
//!
//! | API                                         | state                 | locking     |
//! |---------------------------------------------|-----------------------|-------------|
//! | [`RandomSource`]                            | owned by the caller   | none        |
//! | [`random_int`], [`atomic_random_int`], ...  | one per thread        | none        |
//! | [`SharedRandomSource`], [`shared_random_int`] | one, behind a mutex | every draw  |
//!
//! The free functions `random_int` / `random_double` (and their `atomic_`
//! names) use thread-local generators: they are safe to call concurrently
//! without external synchronization, and never share a stream.
//!
//! ## Ranges
//!
//! Integers are drawn from `[min, max]`, reals from `[min, max)`. `min > max`
//! is a [`DomainError`](axiom_shared::DomainError), never a panic.
//!
//! ## Example
//!
//! ```rust
//! use axiom_random::{random_int, RandomSource};
//!
//! assert_eq!(random_int(5, 5), Ok(5));
//! assert!(random_int(5, 1).is_err());
//!
//! let mut a = RandomSource::from_seed(42);
//! let mut b = RandomSource::from_seed(42);
//! assert_eq!(a.double(0.0, 1.0), b.double(0.0, 1.0));
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod local;
pub mod shared;
pub mod source;

pub use local::{atomic_random_double, atomic_random_int, random_double, random_int};
pub use shared::{shared_random_double, shared_random_int, SharedRandomSource};
pub use source::RandomSource;
