//! # Geometric Vectors
//!
//! `Vector2` and `Vector3` are immutable `f64` value types. Every transform
//! returns a new value. Operations are named methods (`add`, `subtract`,
//! `scale`, `dot`, `cross`) rather than operator overloads.
//!
//! The layout is `#[repr(C)]` and `Pod`, so slices of vectors can be viewed as
//! flat `f64` buffers with `bytemuck`.

use bytemuck::{Pod, Zeroable};
use serde::{Deserialize, Serialize};

use axiom_shared::{DomainError, DomainResult};

// =============================================================================
// Vector2
// =============================================================================

/// 2D vector.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable, Serialize, Deserialize)]
pub struct Vector2 {
    /// X component
    pub x: f64,
    /// Y component
    pub y: f64,
}

#[allow(clippy::should_implement_trait)]
impl Vector2 {
    /// Zero vector
    pub const ZERO: Self = Self::new(0.0, 0.0);

    /// Unit X vector
    pub const X: Self = Self::new(1.0, 0.0);

    /// Unit Y vector
    pub const Y: Self = Self::new(0.0, 1.0);

    /// Creates a new Vector2
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Converts to array
    #[must_use]
    pub const fn to_array(self) -> [f64; 2] {
        [self.x, self.y]
    }

    /// Creates from array
    #[must_use]
    pub const fn from_array(arr: [f64; 2]) -> Self {
        Self::new(arr[0], arr[1])
    }

    /// Component-wise sum
    #[must_use]
    pub fn add(self, other: Self) -> Self {
        Self::new(self.x + other.x, self.y + other.y)
    }

    /// Component-wise difference
    #[must_use]
    pub fn subtract(self, other: Self) -> Self {
        Self::new(self.x - other.x, self.y - other.y)
    }

    /// Multiplies every component by `scalar`
    #[must_use]
    pub fn scale(self, scalar: f64) -> Self {
        Self::new(self.x * scalar, self.y * scalar)
    }

    /// Dot product
    #[must_use]
    pub fn dot(self, other: Self) -> f64 {
        self.x * other.x + self.y * other.y
    }

    /// Magnitude squared (avoids sqrt)
    #[must_use]
    pub fn magnitude_squared(self) -> f64 {
        self.dot(self)
    }

    /// Euclidean norm. Does not overflow or underflow in the intermediate
    /// squares.
    #[must_use]
    pub fn magnitude(self) -> f64 {
        self.x.hypot(self.y)
    }

    /// Distance to another point
    #[must_use]
    pub fn distance(self, other: Self) -> f64 {
        self.subtract(other).magnitude()
    }

    /// Unit vector in the same direction.
    ///
    /// Components are first divided by the largest of them, so any finite
    /// non-zero vector normalizes, however large or small.
    ///
    /// # Errors
    ///
    /// [`DomainError::ZeroVector`] if every component is zero.
    pub fn normalize(self) -> DomainResult<Self> {
        if self.x == 0.0 && self.y == 0.0 {
            return Err(DomainError::ZeroVector);
        }
        let largest = self.x.abs().max(self.y.abs());
        let reduced = Self::new(self.x / largest, self.y / largest);
        let mag = reduced.magnitude();
        Ok(Self::new(reduced.x / mag, reduced.y / mag))
    }
}

// =============================================================================
// Vector3
// =============================================================================

/// 3D vector.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable, Serialize, Deserialize)]
pub struct Vector3 {
    /// X component
    pub x: f64,
    /// Y component
    pub y: f64,
    /// Z component
    pub z: f64,
}

#[allow(clippy::should_implement_trait)]
impl Vector3 {
    /// Zero vector
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);

    /// Unit X vector
    pub const X: Self = Self::new(1.0, 0.0, 0.0);

    /// Unit Y vector
    pub const Y: Self = Self::new(0.0, 1.0, 0.0);

    /// Unit Z vector
    pub const Z: Self = Self::new(0.0, 0.0, 1.0);

    /// Creates a new Vector3
    #[must_use]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Converts to array
    #[must_use]
    pub const fn to_array(self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }

    /// Creates from array
    #[must_use]
    pub const fn from_array(arr: [f64; 3]) -> Self {
        Self::new(arr[0], arr[1], arr[2])
    }

    /// Component-wise sum
    #[must_use]
    pub fn add(self, other: Self) -> Self {
        Self::new(self.x + other.x, self.y + other.y, self.z + other.z)
    }

    /// Component-wise difference
    #[must_use]
    pub fn subtract(self, other: Self) -> Self {
        Self::new(self.x - other.x, self.y - other.y, self.z - other.z)
    }

    /// Multiplies every component by `scalar`
    #[must_use]
    pub fn scale(self, scalar: f64) -> Self {
        Self::new(self.x * scalar, self.y * scalar, self.z * scalar)
    }

    /// Dot product
    #[must_use]
    pub fn dot(self, other: Self) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Right-handed cross product
    #[must_use]
    pub fn cross(self, other: Self) -> Self {
        Self::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }

    /// Magnitude squared (avoids sqrt)
    #[must_use]
    pub fn magnitude_squared(self) -> f64 {
        self.dot(self)
    }

    /// Euclidean norm. Does not overflow or underflow in the intermediate
    /// squares.
    #[must_use]
    pub fn magnitude(self) -> f64 {
        self.x.hypot(self.y).hypot(self.z)
    }

    /// Distance to another point
    #[must_use]
    pub fn distance(self, other: Self) -> f64 {
        self.subtract(other).magnitude()
    }

    /// Unit vector in the same direction.
    ///
    /// Components are first divided by the largest of them, so any finite
    /// non-zero vector normalizes, however large or small.
    ///
    /// # Errors
    ///
    /// [`DomainError::ZeroVector`] if every component is zero.
    pub fn normalize(self) -> DomainResult<Self> {
        if self.x == 0.0 && self.y == 0.0 && self.z == 0.0 {
            return Err(DomainError::ZeroVector);
        }
        let largest = self.x.abs().max(self.y.abs()).max(self.z.abs());
        let reduced = Self::new(self.x / largest, self.y / largest, self.z / largest);
        let mag = reduced.magnitude();
        Ok(Self::new(reduced.x / mag, reduced.y / mag, reduced.z / mag))
    }

    /// Projection of `self` onto `other`: `other * (self·other / |other|²)`.
    ///
    /// Evaluated as `k * (self·k)` with `k = other / |other|`, so the length
    /// of `other` never gets squared.
    ///
    /// # Errors
    ///
    /// [`DomainError::ZeroVector`] if `other` is the zero vector.
    pub fn project_onto(self, other: Self) -> DomainResult<Self> {
        let k = other.normalize()?;
        Ok(k.scale(self.dot(k)))
    }

    /// Rotates `self` about `axis` by `angle_radians` (Rodrigues' formula).
    ///
    /// `axis` need not be unit length; it is normalized first:
    ///
    /// ```text
    /// v' = v cosθ + (k × v) sinθ + k (k·v)(1 − cosθ),   k = axis / |axis|
    /// ```
    ///
    /// Positive angles rotate counter-clockwise when looking down `axis`.
    ///
    /// # Errors
    ///
    /// [`DomainError::ZeroVector`] if `axis` is the zero vector.
    pub fn rotate(self, axis: Self, angle_radians: f64) -> DomainResult<Self> {
        let k = axis.normalize()?;
        let (sin, cos) = angle_radians.sin_cos();

        Ok(self
            .scale(cos)
            .add(k.cross(self).scale(sin))
            .add(k.scale(k.dot(self) * (1.0 - cos))))
    }
}
