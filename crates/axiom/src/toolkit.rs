//! # Configured Toolkit
//!
//! The free functions in each group have fixed behaviour: common constants,
//! wrapping overflow, thread-local random generators. A [`Toolkit`] binds a
//! [`ToolkitConfig`] once and routes every call through the selected
//! constant table, overflow policy and generator policy.
//!
//! ```rust
//! use axiom::Toolkit;
//!
//! let toolkit = Toolkit::from_toml_str("precision = \"precise\"\nseed = 1").unwrap();
//! assert!((toolkit.degrees_to_radians(180.0) - std::f64::consts::PI).abs() < 1e-12);
//! assert_eq!(toolkit.random_int(5, 5), Ok(5));
//! ```

use std::path::Path;

use axiom_random::{random_double, random_int, SharedRandomSource};
use axiom_shared::{
    ConfigError, DomainResult, MathResult, Precision, RandomPolicy, ToolkitConfig,
};
use axiom_sync::AtomicCounter;

/// Configuration-driven entry point to the toolkit.
///
/// `Toolkit` is `Send + Sync`; share one behind an `Arc` or a `&'static`.
#[derive(Debug)]
pub struct Toolkit {
    config: ToolkitConfig,
    /// Present when the config carries a seed.
    seeded: Option<SharedRandomSource>,
}

impl Toolkit {
    /// Builds a toolkit from a configuration.
    #[must_use]
    pub fn new(config: ToolkitConfig) -> Self {
        tracing::debug!(
            precision = ?config.precision,
            overflow = ?config.overflow,
            random = ?config.random,
            seeded = config.seed.is_some(),
            "toolkit configured"
        );
        let seeded = config.seed.map(SharedRandomSource::from_seed);
        Self { config, seeded }
    }

    /// Builds a toolkit from a TOML configuration string.
    ///
    /// # Errors
    ///
    /// See [`ToolkitConfig::from_toml_str`].
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        Ok(Self::new(ToolkitConfig::from_toml_str(source)?))
    }

    /// Builds a toolkit from a TOML configuration file.
    ///
    /// # Errors
    ///
    /// See [`ToolkitConfig::load`].
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Ok(Self::new(ToolkitConfig::load(path)?))
    }

    /// The active configuration.
    #[must_use]
    pub fn config(&self) -> &ToolkitConfig {
        &self.config
    }

    /// The active constant table.
    #[must_use]
    pub fn precision(&self) -> Precision {
        self.config.precision
    }

    // =========================================================================
    // CONSTANTS & ANGLES
    // =========================================================================

    /// Pi from the configured table.
    #[must_use]
    pub fn pi(&self) -> f64 {
        self.config.precision.pi()
    }

    /// Euler's number from the configured table.
    #[must_use]
    pub fn e(&self) -> f64 {
        self.config.precision.e()
    }

    /// Golden ratio (phi) from the configured table.
    #[must_use]
    pub fn phi(&self) -> f64 {
        self.config.precision.phi()
    }

    /// Square root of 2 from the configured table.
    #[must_use]
    pub fn sqrt2(&self) -> f64 {
        self.config.precision.sqrt2()
    }

    /// Square root of 3 from the configured table.
    #[must_use]
    pub fn sqrt3(&self) -> f64 {
        self.config.precision.sqrt3()
    }

    /// Golden ratio from the configured table.
    #[must_use]
    pub fn golden_ratio(&self) -> f64 {
        self.config.precision.golden_ratio()
    }

    /// Natural logarithm of 2 from the configured table.
    #[must_use]
    pub fn ln2(&self) -> f64 {
        self.config.precision.ln2()
    }

    /// Natural logarithm of 10 from the configured table.
    #[must_use]
    pub fn ln10(&self) -> f64 {
        self.config.precision.ln10()
    }

    /// Degrees to radians with the configured table.
    #[must_use]
    pub fn degrees_to_radians(&self, degrees: f64) -> f64 {
        axiom_math::degrees_to_radians_with(degrees, self.config.precision)
    }

    /// Radians to degrees with the configured table.
    #[must_use]
    pub fn radians_to_degrees(&self, radians: f64) -> f64 {
        axiom_math::radians_to_degrees_with(radians, self.config.precision)
    }

    // =========================================================================
    // OVERFLOW-SENSITIVE INTEGER OPERATIONS
    // =========================================================================

    /// `n!` under the configured overflow policy.
    ///
    /// # Errors
    ///
    /// See [`axiom_math::factorial_with`].
    pub fn factorial(&self, n: i32) -> MathResult<i64> {
        axiom_math::factorial_with(n, self.config.overflow)
    }

    /// Atomic multiply under the configured overflow policy.
    ///
    /// # Errors
    ///
    /// See [`axiom_sync::atomic_multiply_with`].
    pub fn atomic_multiply<C: AtomicCounter>(&self, cell: &C, value: C::Value) -> MathResult<()> {
        axiom_sync::atomic_multiply_with(cell, value, self.config.overflow)
    }

    /// Atomic divide under the configured overflow policy.
    ///
    /// # Errors
    ///
    /// See [`axiom_sync::atomic_divide_with`].
    pub fn atomic_divide<C: AtomicCounter>(&self, cell: &C, value: C::Value) -> MathResult<()> {
        axiom_sync::atomic_divide_with(cell, value, self.config.overflow)
    }

    // =========================================================================
    // RANDOM
    // =========================================================================

    /// Uniform integer in `[min, max]` from the configured generator.
    ///
    /// # Errors
    ///
    /// [`DomainError::InvalidIntRange`](axiom_shared::DomainError::InvalidIntRange)
    /// if `min > max`.
    pub fn random_int(&self, min: i32, max: i32) -> DomainResult<i32> {
        match (&self.seeded, self.config.random) {
            (Some(source), _) => source.int(min, max),
            (None, RandomPolicy::ThreadLocal) => random_int(min, max),
            (None, RandomPolicy::Shared) => SharedRandomSource::global().int(min, max),
        }
    }

    /// Uniform real in `[min, max)` from the configured generator.
    ///
    /// # Errors
    ///
    /// [`DomainError::InvalidRealRange`](axiom_shared::DomainError::InvalidRealRange)
    /// if `min > max` or the range is not finite.
    pub fn random_double(&self, min: f64, max: f64) -> DomainResult<f64> {
        match (&self.seeded, self.config.random) {
            (Some(source), _) => source.double(min, max),
            (None, RandomPolicy::ThreadLocal) => random_double(min, max),
            (None, RandomPolicy::Shared) => SharedRandomSource::global().double(min, max),
        }
    }
}

impl Default for Toolkit {
    fn default() -> Self {
        Self::new(ToolkitConfig::default())
    }
}
