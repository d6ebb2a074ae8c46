//! # Numeric Constants
//!
//! Two constant tables are part of the stable public surface:
//!
//! - **Common approximation** (`PI`, `E`, ...): 4 to 5 significant digits.
//! - **High precision** (`A_PI`, `A_E`, ...): full `f64` precision.
//!
//! Both tables are kept under distinct names on purpose. Existing callers
//! depend on the short values (angle conversion resolves through `PI`), so the
//! common table must never be "fixed" to the precise one.
//!
//! | name             | common   | precise              |
//! |------------------|----------|----------------------|
//! | `PI`             | `3.1415` | `3.141592653589793`  |
//! | `E`              | `2.7182` | `2.718281828459045`  |
//! | `PHI`            | `1.6180` | `1.618033988749895`  |
//! | `SQRT2`          | `1.4142` | `1.4142135623730951` |
//! | `SQRT3`          | `1.7320` | `1.7320508075688772` |
//! | `GOLDEN_RATIO`   | `1.6180` | `1.618033988749895`  |
//! | `LN2`            | `0.6931` | `0.6931471805599453` |
//! | `LN10`           | `2.3025` | `2.302585092994046`  |
//!
//! Callers pick a table at compile time through [`ConstantSet`] (`Common` or
//! `Precise`), or at runtime through [`Precision`].

// The common table is deliberately truncated.
#![allow(clippy::approx_constant)]

use serde::{Deserialize, Serialize};

// =============================================================================
// COMMON APPROXIMATION TABLE
// =============================================================================

/// Pi, common approximation.
pub const PI: f64 = 3.1415;

/// Euler's number, common approximation.
pub const E: f64 = 2.7182;

/// Golden ratio (phi), common approximation.
pub const PHI: f64 = 1.6180;

/// Square root of 2, common approximation.
pub const SQRT2: f64 = 1.4142;

/// Square root of 3, common approximation.
pub const SQRT3: f64 = 1.7320;

/// Golden ratio, common approximation. Same value as [`PHI`].
pub const GOLDEN_RATIO: f64 = 1.6180;

/// Natural logarithm of 2, common approximation.
pub const LN2: f64 = 0.6931;

/// Natural logarithm of 10, common approximation.
pub const LN10: f64 = 2.3025;

/// Degrees to radians factor, derived from the common [`PI`].
pub const DEGREES_TO_RADIANS: f64 = PI / 180.0;

/// Radians to degrees factor, derived from the common [`PI`].
pub const RADIANS_TO_DEGREES: f64 = 180.0 / PI;

// =============================================================================
// HIGH PRECISION TABLE
// =============================================================================

/// Pi, full precision.
pub const A_PI: f64 = std::f64::consts::PI;

/// Euler's number, full precision.
pub const A_E: f64 = std::f64::consts::E;

/// Golden ratio (phi), full precision.
pub const A_PHI: f64 = 1.618_033_988_749_895;

/// Square root of 2, full precision.
pub const A_SQRT2: f64 = std::f64::consts::SQRT_2;

/// Square root of 3, full precision.
pub const A_SQRT3: f64 = 1.732_050_807_568_877_2;

/// Golden ratio, full precision. Same value as [`A_PHI`].
pub const A_GOLDEN_RATIO: f64 = 1.618_033_988_749_895;

/// Natural logarithm of 2, full precision.
pub const A_LN2: f64 = std::f64::consts::LN_2;

/// Natural logarithm of 10, full precision.
pub const A_LN10: f64 = std::f64::consts::LN_10;

/// Degrees to radians factor, derived from [`A_PI`].
pub const A_DEGREES_TO_RADIANS: f64 = A_PI / 180.0;

/// Radians to degrees factor, derived from [`A_PI`].
pub const A_RADIANS_TO_DEGREES: f64 = 180.0 / A_PI;

// =============================================================================
// TABLE SELECTION
// =============================================================================

/// A constant table selectable at compile time.
///
/// ```rust
/// use axiom_shared::constants::{Common, ConstantSet, Precise};
///
/// assert_eq!(Common::PI, 3.1415);
/// assert_eq!(Precise::PI, std::f64::consts::PI);
/// ```
pub trait ConstantSet {
    /// Pi.
    const PI: f64;
    /// Euler's number.
    const E: f64;
    /// Golden ratio (phi).
    const PHI: f64;
    /// Square root of 2.
    const SQRT2: f64;
    /// Square root of 3.
    const SQRT3: f64;
    /// Golden ratio.
    const GOLDEN_RATIO: f64;
    /// Natural logarithm of 2.
    const LN2: f64;
    /// Natural logarithm of 10.
    const LN10: f64;
    /// Degrees to radians factor.
    const DEGREES_TO_RADIANS: f64;
    /// Radians to degrees factor.
    const RADIANS_TO_DEGREES: f64;
}

/// The common approximation table.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Common;

/// The high precision table.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Precise;

impl ConstantSet for Common {
    const PI: f64 = PI;
    const E: f64 = E;
    const PHI: f64 = PHI;
    const SQRT2: f64 = SQRT2;
    const SQRT3: f64 = SQRT3;
    const GOLDEN_RATIO: f64 = GOLDEN_RATIO;
    const LN2: f64 = LN2;
    const LN10: f64 = LN10;
    const DEGREES_TO_RADIANS: f64 = DEGREES_TO_RADIANS;
    const RADIANS_TO_DEGREES: f64 = RADIANS_TO_DEGREES;
}

impl ConstantSet for Precise {
    const PI: f64 = A_PI;
    const E: f64 = A_E;
    const PHI: f64 = A_PHI;
    const SQRT2: f64 = A_SQRT2;
    const SQRT3: f64 = A_SQRT3;
    const GOLDEN_RATIO: f64 = A_GOLDEN_RATIO;
    const LN2: f64 = A_LN2;
    const LN10: f64 = A_LN10;
    const DEGREES_TO_RADIANS: f64 = A_DEGREES_TO_RADIANS;
    const RADIANS_TO_DEGREES: f64 = A_RADIANS_TO_DEGREES;
}

/// Runtime choice of constant table.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Precision {
    /// The common approximation table (`PI`, `E`, ...).
    #[default]
    Common,
    /// The high precision table (`A_PI`, `A_E`, ...).
    Precise,
}

impl Precision {
    /// Pi from the selected table.
    #[inline]
    #[must_use]
    pub const fn pi(self) -> f64 {
        match self {
            Self::Common => Common::PI,
            Self::Precise => Precise::PI,
        }
    }

    /// Euler's number from the selected table.
    #[inline]
    #[must_use]
    pub const fn e(self) -> f64 {
        match self {
            Self::Common => Common::E,
            Self::Precise => Precise::E,
        }
    }

    /// Golden ratio from the selected table.
    #[inline]
    #[must_use]
    pub const fn phi(self) -> f64 {
        match self {
            Self::Common => Common::PHI,
            Self::Precise => Precise::PHI,
        }
    }

    /// Square root of 2 from the selected table.
    #[inline]
    #[must_use]
    pub const fn sqrt2(self) -> f64 {
        match self {
            Self::Common => Common::SQRT2,
            Self::Precise => Precise::SQRT2,
        }
    }

    /// Square root of 3 from the selected table.
    #[inline]
    #[must_use]
    pub const fn sqrt3(self) -> f64 {
        match self {
            Self::Common => Common::SQRT3,
            Self::Precise => Precise::SQRT3,
        }
    }

    /// Golden ratio from the selected table. Same value as [`Precision::phi`].
    #[inline]
    #[must_use]
    pub const fn golden_ratio(self) -> f64 {
        match self {
            Self::Common => Common::GOLDEN_RATIO,
            Self::Precise => Precise::GOLDEN_RATIO,
        }
    }

    /// Natural logarithm of 2 from the selected table.
    #[inline]
    #[must_use]
    pub const fn ln2(self) -> f64 {
        match self {
            Self::Common => Common::LN2,
            Self::Precise => Precise::LN2,
        }
    }

    /// Natural logarithm of 10 from the selected table.
    #[inline]
    #[must_use]
    pub const fn ln10(self) -> f64 {
        match self {
            Self::Common => Common::LN10,
            Self::Precise => Precise::LN10,
        }
    }

    /// Degrees to radians factor from the selected table.
    #[inline]
    #[must_use]
    pub const fn degrees_to_radians(self) -> f64 {
        match self {
            Self::Common => Common::DEGREES_TO_RADIANS,
            Self::Precise => Precise::DEGREES_TO_RADIANS,
        }
    }

    /// Radians to degrees factor from the selected table.
    #[inline]
    #[must_use]
    pub const fn radians_to_degrees(self) -> f64 {
        match self {
            Self::Common => Common::RADIANS_TO_DEGREES,
            Self::Precise => Precise::RADIANS_TO_DEGREES,
        }
    }
}
