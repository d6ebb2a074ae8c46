//! # AXIOM Shared
//!
//! The conventions every AXIOM group agrees on:
//! - `f64` for continuous quantities, fixed-width integers for counters
//! - the two constant tables
//! - the error taxonomy
//! - toolkit configuration
//!
//! ## CRITICAL RULE
//!
//! This crate holds no math and no shared state. If you need a formula, put it
//! in `axiom_math`. If you need an atomic, put it in `axiom_sync`.

#![deny(missing_docs)]
#![deny(unsafe_code)]

pub mod config;
pub mod constants;
pub mod error;

pub use config::{OverflowPolicy, RandomPolicy, ToolkitConfig};
pub use constants::{Common, ConstantSet, Precise, Precision};
pub use error::{
    ConfigError, DomainError, DomainResult, MathError, MathResult, ShapeError, ShapeResult,
};
