//! # AXIOM Math
//!
//! Deterministic scalar and geometric arithmetic.
//!
//! ## Contract
//!
//! 1. **Pure** - No function here reads or writes shared state
//! 2. **Fail fast** - Undefined input is a [`DomainError`], incompatible
//!    dimensions are a [`ShapeError`]; no partial results
//! 3. **Immutable values** - `Vector2`/`Vector3` transforms return new values
//!
//! ## Example
//!
//! ```rust
//! use axiom_math::{dot_product, multiply_matrices, Vector3};
//!
//! assert_eq!(dot_product(&[1.0, 2.0, 3.0], &[4.0, 5.0, 6.0]), Ok(32.0));
//! assert_eq!(
//!     multiply_matrices(&[vec![1.0, 2.0]], &[vec![3.0], vec![4.0]]),
//!     Ok(vec![vec![11.0]])
//! );
//!
//! let up = Vector3::X.cross(Vector3::Y);
//! assert_eq!(up, Vector3::Z);
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod angle;
pub mod linalg;
pub mod scalar;
pub mod vector;

pub use angle::{
    degrees_to_radians, degrees_to_radians_in, degrees_to_radians_with, radians_to_degrees,
    radians_to_degrees_in, radians_to_degrees_with,
};
pub use linalg::{
    add_matrices, add_vectors, dot_product, identity, magnitude, multiply_matrices, shape,
    transpose, Matrix,
};
pub use scalar::{
    absolute, add, arccosine, arcsine, arctangent, ceiling, cosine, divide, exponential,
    factorial, factorial_with, floor, logarithm, max, min, multiply, power, power_int, round,
    round_half_even, sine, square_root, subtract, tangent,
};
pub use vector::{Vector2, Vector3};

pub use axiom_shared::{DomainError, ShapeError};
