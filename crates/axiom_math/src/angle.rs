//! # Angle Conversion
//!
//! [`degrees_to_radians`] and [`radians_to_degrees`] resolve through the
//! common constant table (`PI = 3.1415`), so `degrees_to_radians(180.0)` is
//! `3.1415` (up to rounding), not `3.14159...`. Existing callers rely on that.
//!
//! Pick the table explicitly with the `_in` forms (compile time) or the
//! `_with` forms (runtime):
//!
//! ```rust
//! use axiom_math::angle::{degrees_to_radians, degrees_to_radians_in};
//! use axiom_shared::constants::Precise;
//!
//! assert!((degrees_to_radians(180.0) - 3.1415).abs() < 1e-12);
//! assert!((degrees_to_radians_in::<Precise>(180.0) - std::f64::consts::PI).abs() < 1e-12);
//! ```

use axiom_shared::constants::{Common, ConstantSet, Precision};

/// Degrees to radians, common table.
#[inline]
#[must_use]
pub fn degrees_to_radians(degrees: f64) -> f64 {
    degrees_to_radians_in::<Common>(degrees)
}

/// Radians to degrees, common table.
#[inline]
#[must_use]
pub fn radians_to_degrees(radians: f64) -> f64 {
    radians_to_degrees_in::<Common>(radians)
}

/// Degrees to radians using the constant table `T`.
#[inline]
#[must_use]
pub fn degrees_to_radians_in<T: ConstantSet>(degrees: f64) -> f64 {
    degrees * T::DEGREES_TO_RADIANS
}

/// Radians to degrees using the constant table `T`.
#[inline]
#[must_use]
pub fn radians_to_degrees_in<T: ConstantSet>(radians: f64) -> f64 {
    radians * T::RADIANS_TO_DEGREES
}

/// Degrees to radians using a runtime-selected table.
#[inline]
#[must_use]
pub fn degrees_to_radians_with(degrees: f64, precision: Precision) -> f64 {
    degrees * precision.degrees_to_radians()
}

/// Radians to degrees using a runtime-selected table.
#[inline]
#[must_use]
pub fn radians_to_degrees_with(radians: f64, precision: Precision) -> f64 {
    radians * precision.radians_to_degrees()
}
