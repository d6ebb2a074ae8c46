//! # Error Types
//!
//! Every failure in AXIOM is one of two kinds:
//!
//! - [`DomainError`]: the operation is mathematically undefined for the input.
//! - [`ShapeError`]: vector or matrix dimensions are incompatible.
//!
//! [`MathError`] wraps both and adds overflow, which can only be reported
//! when a caller opts into [`OverflowPolicy::Checked`](crate::OverflowPolicy).

use thiserror::Error;

/// The operation is mathematically undefined for the given input.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum DomainError {
    /// Divisor was zero.
    #[error("division by zero")]
    DivisionByZero,

    /// Factorial of a negative number.
    #[error("factorial of negative number {0}")]
    NegativeFactorial(i32),

    /// Logarithm of zero or a negative number.
    #[error("logarithm of non-positive number {0}")]
    NonPositiveLogarithm(f64),

    /// Square root of a negative number.
    #[error("square root of negative number {0}")]
    NegativeSquareRoot(f64),

    /// Normalizing, projecting onto or rotating about a zero vector.
    #[error("cannot normalize a zero vector")]
    ZeroVector,

    /// Integer range with `min > max`.
    #[error("invalid integer range: min {min} > max {max}")]
    InvalidIntRange {
        /// Lower bound.
        min: i64,
        /// Upper bound.
        max: i64,
    },

    /// Real range with `min > max`, or bounds whose width is not finite.
    #[error("invalid real range: [{min}, {max})")]
    InvalidRealRange {
        /// Lower bound.
        min: f64,
        /// Upper bound.
        max: f64,
    },
}

/// Vector or matrix dimensions are incompatible.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeError {
    /// Two vectors have different lengths.
    #[error("vectors must be of the same size: {left} != {right}")]
    LengthMismatch {
        /// Length of the left operand.
        left: usize,
        /// Length of the right operand.
        right: usize,
    },

    /// Two matrices have different `(rows, columns)`.
    #[error("matrices must have the same dimensions: {left:?} != {right:?}")]
    DimensionMismatch {
        /// `(rows, columns)` of the left operand.
        left: (usize, usize),
        /// `(rows, columns)` of the right operand.
        right: (usize, usize),
    },

    /// Left column count differs from right row count.
    #[error("invalid matrix dimensions for multiplication: {left_columns} columns x {right_rows} rows")]
    NonConformable {
        /// Columns of the left matrix.
        left_columns: usize,
        /// Rows of the right matrix.
        right_rows: usize,
    },

    /// A row's length differs from the first row's.
    #[error("ragged matrix: row {row} has {found} columns, expected {expected}")]
    RaggedMatrix {
        /// Index of the offending row.
        row: usize,
        /// Length of row 0.
        expected: usize,
        /// Length of the offending row.
        found: usize,
    },
}

/// Any AXIOM math failure.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum MathError {
    /// See [`DomainError`].
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// See [`ShapeError`].
    #[error(transparent)]
    Shape(#[from] ShapeError),

    /// Integer overflow under the checked policy.
    #[error("arithmetic overflow in {operation}")]
    Overflow {
        /// The operation that overflowed.
        operation: &'static str,
    },
}

/// Errors loading a [`ToolkitConfig`](crate::ToolkitConfig).
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The file could not be read.
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),

    /// The file is not valid TOML for the config schema.
    #[error("invalid configuration: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Result type for domain-checked operations.
pub type DomainResult<T> = Result<T, DomainError>;

/// Result type for shape-checked operations.
pub type ShapeResult<T> = Result<T, ShapeError>;

/// Result type for operations that can fail more than one way.
pub type MathResult<T> = Result<T, MathError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(DomainError::DivisionByZero.to_string(), "division by zero");
        assert_eq!(
            DomainError::NegativeFactorial(-1).to_string(),
            "factorial of negative number -1"
        );
        assert_eq!(
            ShapeError::LengthMismatch { left: 2, right: 3 }.to_string(),
            "vectors must be of the same size: 2 != 3"
        );
    }

    #[test]
    fn test_math_error_is_transparent() {
        let err: MathError = DomainError::ZeroVector.into();
        assert_eq!(err, MathError::Domain(DomainError::ZeroVector));
        assert_eq!(err.to_string(), "cannot normalize a zero vector");

        let err: MathError = ShapeError::NonConformable { left_columns: 2, right_rows: 3 }.into();
        assert!(matches!(err, MathError::Shape(_)));
    }
}
