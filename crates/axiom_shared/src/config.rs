//! # Toolkit Configuration
//!
//! Loaded once at startup from TOML. Every field has a default, so an empty
//! file is a valid configuration that reproduces the legacy behaviour:
//! common constants, wrapping overflow, thread-local random generators.
//!
//! ```toml
//! precision = "precise"
//! overflow = "checked"
//! random = "shared"
//! seed = 42
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::constants::Precision;
use crate::error::ConfigError;

/// What fixed-width integer operations do when the result does not fit.
///
/// Applies to `factorial` and to atomic multiply/divide.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OverflowPolicy {
    /// Two's complement wraparound. Silent. This is the legacy behaviour.
    #[default]
    Wrapping,
    /// Report `MathError::Overflow` and leave any shared cell untouched.
    Checked,
    /// Clamp to the type's bounds.
    Saturating,
}

/// Which generator backs the toolkit's random calls.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RandomPolicy {
    /// One generator per thread, lazily seeded from OS entropy. No locking.
    #[default]
    ThreadLocal,
    /// One process-wide generator. Every call serializes through a lock.
    Shared,
}

/// Toolkit configuration.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ToolkitConfig {
    /// Constant table for angle conversion and constant lookup.
    pub precision: Precision,
    /// Overflow behaviour for factorial and atomic multiply/divide.
    pub overflow: OverflowPolicy,
    /// Random generator policy.
    pub random: RandomPolicy,
    /// Fixed seed. When set, the toolkit owns a reproducible generator and
    /// `random` is ignored.
    pub seed: Option<u64>,
}

impl ToolkitConfig {
    /// Parses a configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed TOML or unknown fields.
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(source)?)
    }

    /// Reads and parses a configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read, or
    /// [`ConfigError::Parse`] if it is not a valid configuration.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let source = std::fs::read_to_string(path)?;
        Self::from_toml_str(&source)
    }
}
