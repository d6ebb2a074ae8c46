//! # Scalar Arithmetic
//!
//! Pure functions over `i32`, `i64` and `f64`.
//!
//! ## Integer Overflow
//!
//! `add`, `subtract`, `multiply` and `factorial` wrap on overflow (two's
//! complement), in every build profile. `factorial(21)` already exceeds
//! `i64::MAX`. Callers that need to know use [`factorial_with`] and an
//! [`OverflowPolicy`].
//!
//! ## Rounding
//!
//! [`round`] rounds half away from zero (`2.5 -> 3.0`, `-2.5 -> -3.0`), the
//! same as C `round`. [`round_half_even`] rounds half to even
//! (`2.5 -> 2.0`, `3.5 -> 4.0`) for reproducible accumulation.

use axiom_shared::{DomainError, DomainResult, MathError, MathResult, OverflowPolicy};

// =============================================================================
// INTEGER ARITHMETIC
// =============================================================================

/// `a + b`, wrapping on overflow.
#[inline]
#[must_use]
pub const fn add(a: i32, b: i32) -> i32 {
    a.wrapping_add(b)
}

/// `a - b`, wrapping on overflow.
#[inline]
#[must_use]
pub const fn subtract(a: i32, b: i32) -> i32 {
    a.wrapping_sub(b)
}

/// `a * b`, wrapping on overflow.
#[inline]
#[must_use]
pub const fn multiply(a: i32, b: i32) -> i32 {
    a.wrapping_mul(b)
}

/// `a / b` as a real number.
///
/// # Errors
///
/// [`DomainError::DivisionByZero`] if `b == 0`.
#[inline]
pub fn divide(a: i32, b: i32) -> DomainResult<f64> {
    if b == 0 {
        return Err(DomainError::DivisionByZero);
    }
    Ok(f64::from(a) / f64::from(b))
}

/// `n!`, wrapping on overflow.
///
/// # Errors
///
/// [`DomainError::NegativeFactorial`] if `n < 0`.
pub fn factorial(n: i32) -> DomainResult<i64> {
    if n < 0 {
        return Err(DomainError::NegativeFactorial(n));
    }
    Ok((1..=i64::from(n)).fold(1_i64, i64::wrapping_mul))
}

/// `n!` under an explicit overflow policy.
///
/// # Errors
///
/// - [`DomainError::NegativeFactorial`] if `n < 0`.
/// - [`MathError::Overflow`] if the result exceeds `i64` and `policy` is
///   [`OverflowPolicy::Checked`].
pub fn factorial_with(n: i32, policy: OverflowPolicy) -> MathResult<i64> {
    match policy {
        OverflowPolicy::Wrapping => Ok(factorial(n)?),
        OverflowPolicy::Checked => {
            if n < 0 {
                return Err(DomainError::NegativeFactorial(n).into());
            }
            (1..=i64::from(n))
                .try_fold(1_i64, i64::checked_mul)
                .ok_or(MathError::Overflow { operation: "factorial" })
        }
        OverflowPolicy::Saturating => {
            if n < 0 {
                return Err(DomainError::NegativeFactorial(n).into());
            }
            Ok((1..=i64::from(n)).fold(1_i64, i64::saturating_mul))
        }
    }
}

// =============================================================================
// REAL ARITHMETIC
// =============================================================================

/// `base` raised to a real `exponent` (IEEE `pow`).
///
/// Negative bases with fractional exponents give NaN, as `pow` does.
#[inline]
#[must_use]
pub fn power(base: f64, exponent: f64) -> f64 {
    base.powf(exponent)
}

/// `base` raised to an integer `exponent`.
#[inline]
#[must_use]
pub fn power_int(base: f64, exponent: i32) -> f64 {
    base.powi(exponent)
}

/// Natural logarithm.
///
/// # Errors
///
/// [`DomainError::NonPositiveLogarithm`] if `value <= 0`.
#[inline]
pub fn logarithm(value: f64) -> DomainResult<f64> {
    if value <= 0.0 {
        return Err(DomainError::NonPositiveLogarithm(value));
    }
    Ok(value.ln())
}

/// Square root.
///
/// # Errors
///
/// [`DomainError::NegativeSquareRoot`] if `value < 0`. `-0.0` is accepted.
#[inline]
pub fn square_root(value: f64) -> DomainResult<f64> {
    if value < 0.0 {
        return Err(DomainError::NegativeSquareRoot(value));
    }
    Ok(value.sqrt())
}

/// `e^x`.
#[inline]
#[must_use]
pub fn exponential(x: f64) -> f64 {
    x.exp()
}

/// `|x|`.
#[inline]
#[must_use]
pub fn absolute(x: f64) -> f64 {
    x.abs()
}

/// The larger of `a` and `b`. If one is NaN, the other is returned.
#[inline]
#[must_use]
pub fn max(a: f64, b: f64) -> f64 {
    a.max(b)
}

/// The smaller of `a` and `b`. If one is NaN, the other is returned.
#[inline]
#[must_use]
pub fn min(a: f64, b: f64) -> f64 {
    a.min(b)
}

// =============================================================================
// ROUNDING
// =============================================================================

/// Nearest integer, ties away from zero.
#[inline]
#[must_use]
pub fn round(value: f64) -> f64 {
    value.round()
}

/// Nearest integer, ties to even.
#[must_use]
pub fn round_half_even(value: f64) -> f64 {
    if (value - value.trunc()).abs() == 0.5 {
        2.0 * (value / 2.0).round()
    } else {
        value.round()
    }
}

/// Largest integer `<= value`.
#[inline]
#[must_use]
pub fn floor(value: f64) -> f64 {
    value.floor()
}

/// Smallest integer `>= value`.
#[inline]
#[must_use]
pub fn ceiling(value: f64) -> f64 {
    value.ceil()
}

// =============================================================================
// TRIGONOMETRY (radians)
// =============================================================================

/// Sine.
#[inline]
#[must_use]
pub fn sine(radians: f64) -> f64 {
    radians.sin()
}

/// Cosine.
#[inline]
#[must_use]
pub fn cosine(radians: f64) -> f64 {
    radians.cos()
}

/// Tangent.
#[inline]
#[must_use]
pub fn tangent(radians: f64) -> f64 {
    radians.tan()
}

/// Arcsine. NaN outside `[-1, 1]`.
#[inline]
#[must_use]
pub fn arcsine(value: f64) -> f64 {
    value.asin()
}

/// Arccosine. NaN outside `[-1, 1]`.
#[inline]
#[must_use]
pub fn arccosine(value: f64) -> f64 {
    value.acos()
}

/// Arctangent.
#[inline]
#[must_use]
pub fn arctangent(value: f64) -> f64 {
    value.atan()
}
