//! # AXIOM Sync
//!
//! Lock-free read-modify-write operations on caller-owned integer cells.
//!
//! ## The Problem
//!
//! ```text
//! Thread 1:  read 3, multiply by 2, store 6
//! Thread 2:  read 3, multiply by 2, store 6
//!
//! Plain load/store: one update LOST (6 instead of 12)
//! With a Mutex:     correct, but every caller blocks
//! ```
//!
//! ## The Solution
//!
//! Add and subtract map to the hardware's fetch-and-add. Multiply and divide
//! have no hardware equivalent, so they read, compute, and compare-and-swap,
//! retrying with the freshly observed value whenever another thread got there
//! first. See [`ops`] for the protocol and its limits.
//!
//! ## Example
//!
//! ```rust
//! use std::sync::atomic::{AtomicI32, Ordering};
//! use axiom_sync::{atomic_add, atomic_multiply};
//!
//! let cell = AtomicI32::new(1);
//! atomic_add(&cell, 2);
//! atomic_multiply(&cell, 5);
//! assert_eq!(cell.load(Ordering::SeqCst), 15);
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod cell;
pub mod ops;

pub use cell::{AtomicCounter, CounterValue};
pub use ops::{
    atomic_add, atomic_divide, atomic_divide_with, atomic_multiply, atomic_multiply_with,
    atomic_subtract, atomic_update, CasUpdate,
};
