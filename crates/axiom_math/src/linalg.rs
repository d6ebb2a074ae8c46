//! # Free Vector and Matrix Algebra
//!
//! Arbitrary-length vectors are `&[f64]`. Matrices are row-major
//! `Vec<Vec<f64>>` and must be rectangular: every row as long as row 0.
//! A matrix with no rows has shape `(0, 0)`.
//!
//! Nothing here truncates. A length or dimension mismatch is a
//! [`ShapeError`], and a ragged input is rejected before any arithmetic.

use axiom_shared::{ShapeError, ShapeResult};

/// Row-major matrix.
pub type Matrix = Vec<Vec<f64>>;

// =============================================================================
// VECTORS
// =============================================================================

/// Element-wise sum.
///
/// # Errors
///
/// [`ShapeError::LengthMismatch`] if the lengths differ.
pub fn add_vectors(a: &[f64], b: &[f64]) -> ShapeResult<Vec<f64>> {
    check_lengths(a, b)?;
    Ok(a.iter().zip(b).map(|(x, y)| x + y).collect())
}

/// Sum of element-wise products.
///
/// # Errors
///
/// [`ShapeError::LengthMismatch`] if the lengths differ.
pub fn dot_product(a: &[f64], b: &[f64]) -> ShapeResult<f64> {
    check_lengths(a, b)?;
    Ok(a.iter().zip(b).map(|(x, y)| x * y).sum())
}

/// Euclidean norm, `sqrt(dot_product(v, v))`.
#[must_use]
pub fn magnitude(v: &[f64]) -> f64 {
    v.iter().map(|x| x * x).sum::<f64>().sqrt()
}

#[inline]
fn check_lengths(a: &[f64], b: &[f64]) -> ShapeResult<()> {
    if a.len() == b.len() {
        Ok(())
    } else {
        Err(ShapeError::LengthMismatch { left: a.len(), right: b.len() })
    }
}

// =============================================================================
// MATRICES
// =============================================================================

/// `(rows, columns)` of a matrix.
///
/// # Errors
///
/// [`ShapeError::RaggedMatrix`] if any row's length differs from row 0.
pub fn shape(m: &[Vec<f64>]) -> ShapeResult<(usize, usize)> {
    let Some(first) = m.first() else {
        return Ok((0, 0));
    };
    let columns = first.len();
    if let Some((row, found)) = m
        .iter()
        .map(Vec::len)
        .enumerate()
        .find(|&(_, len)| len != columns)
    {
        return Err(ShapeError::RaggedMatrix { row, expected: columns, found });
    }
    Ok((m.len(), columns))
}

/// `n x n` identity matrix.
#[must_use]
pub fn identity(n: usize) -> Matrix {
    (0..n)
        .map(|i| (0..n).map(|j| if i == j { 1.0 } else { 0.0 }).collect())
        .collect()
}

/// Transpose.
///
/// # Errors
///
/// [`ShapeError::RaggedMatrix`] if `m` is not rectangular.
pub fn transpose(m: &[Vec<f64>]) -> ShapeResult<Matrix> {
    let (_, columns) = shape(m)?;
    Ok((0..columns)
        .map(|j| m.iter().map(|row| row[j]).collect())
        .collect())
}

/// Element-wise sum.
///
/// # Errors
///
/// - [`ShapeError::RaggedMatrix`] if either input is not rectangular.
/// - [`ShapeError::DimensionMismatch`] if the shapes differ.
pub fn add_matrices(a: &[Vec<f64>], b: &[Vec<f64>]) -> ShapeResult<Matrix> {
    let left = shape(a)?;
    let right = shape(b)?;
    if left != right {
        return Err(ShapeError::DimensionMismatch { left, right });
    }

    Ok(a.iter()
        .zip(b)
        .map(|(row_a, row_b)| row_a.iter().zip(row_b).map(|(x, y)| x + y).collect())
        .collect())
}

/// Matrix product `a * b`.
///
/// `result[i][j] = Σ_k a[i][k] * b[k][j]`
///
/// # Errors
///
/// - [`ShapeError::RaggedMatrix`] if either input is not rectangular.
/// - [`ShapeError::NonConformable`] if `a`'s column count differs from `b`'s
///   row count.
pub fn multiply_matrices(a: &[Vec<f64>], b: &[Vec<f64>]) -> ShapeResult<Matrix> {
    let (rows, inner) = shape(a)?;
    let (b_rows, columns) = shape(b)?;
    if inner != b_rows {
        return Err(ShapeError::NonConformable { left_columns: inner, right_rows: b_rows });
    }

    let mut result = vec![vec![0.0; columns]; rows];
    for (row_a, out_row) in a.iter().zip(result.iter_mut()) {
        for (j, out) in out_row.iter_mut().enumerate() {
            *out = row_a.iter().zip(b).map(|(x, row_b)| x * row_b[j]).sum();
        }
    }
    Ok(result)
}
