// ABOUTME: Planner configuration for pump capacity and guide memoization
// ABOUTME: Capacity is injected here rather than hard-coded in the engine
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Dipper Contributors

//! Planner Configuration
//!
//! The pump capacity models the number of physical dispenser slots. It is
//! supplied at construction time so the engine can be exercised against
//! machines other than the eight-pump reference build.

/// Configuration error types
pub mod error;

pub use error::ConfigError;

use std::env;

use dipper_core::constants::{cache, env_keys, pumps};
use serde::{Deserialize, Serialize};

/// Planner settings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlannerConfig {
    /// Maximum number of simultaneously stocked ingredients
    pub pump_capacity: usize,
    /// Maximum number of memoized shopping guides per session
    pub guide_cache_entries: usize,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            pump_capacity: pumps::DEFAULT_PUMP_CAPACITY,
            guide_cache_entries: cache::DEFAULT_GUIDE_CACHE_ENTRIES,
        }
    }
}

impl PlannerConfig {
    /// Configuration for a machine with `pump_capacity` pumps
    #[must_use]
    pub fn with_pump_capacity(pump_capacity: usize) -> Self {
        Self {
            pump_capacity,
            ..Self::default()
        }
    }

    /// Read planner settings from the environment, falling back to defaults
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] when a variable is set but is not an
    /// unsigned integer, or any error reported by [`Self::validate`]
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_env_with_capacity(None)
    }

    /// Like [`Self::from_env`], but a `Some` pump capacity replaces
    /// `DIPPER_PUMP_CAPACITY` without reading it
    ///
    /// # Errors
    ///
    /// Same as [`Self::from_env`]; the override is validated like any other value
    pub fn from_env_with_capacity(pump_capacity: Option<usize>) -> Result<Self, ConfigError> {
        let defaults = Self::default();
        let pump_capacity = match pump_capacity {
            Some(capacity) => capacity,
            None => read_usize(env_keys::PUMP_CAPACITY)?.unwrap_or(defaults.pump_capacity),
        };
        let config = Self {
            pump_capacity,
            guide_cache_entries: read_usize(env_keys::GUIDE_CACHE_ENTRIES)?
                .unwrap_or(defaults.guide_cache_entries),
        };
        config.validate()?;
        Ok(config)
    }

    /// Check that every setting is within its accepted range
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ValueOutOfRange`] for a zero or oversized pump
    /// capacity, or a zero cache size
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.pump_capacity == 0 || self.pump_capacity > pumps::MAX_PUMP_CAPACITY {
            return Err(ConfigError::ValueOutOfRange(format!(
                "pump capacity must be between 1 and {}, got {}",
                pumps::MAX_PUMP_CAPACITY,
                self.pump_capacity
            )));
        }
        if self.guide_cache_entries == 0 {
            return Err(ConfigError::ValueOutOfRange(
                "guide cache must hold at least one entry".into(),
            ));
        }
        Ok(())
    }
}

fn read_usize(key: &str) -> Result<Option<usize>, ConfigError> {
    match env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::Parse(format!("{key}='{raw}' is not an unsigned integer"))),
        Err(_) => Ok(None),
    }
}
