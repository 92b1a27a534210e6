// ABOUTME: Environment configuration management for deployment-specific settings
// ABOUTME: Reads pump capacity, cache size, catalog location, and deployment mode
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Dipper Contributors

//! Environment-based configuration

use std::env;
use std::fmt;
use std::path::PathBuf;

use anyhow::{Context, Result};
use dipper_core::constants::env_keys;
use dipper_intelligence::PlannerConfig;
use serde::{Deserialize, Serialize};
use tracing::info;

/// Environment type
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Local development
    #[default]
    Development,
    /// Deployed on a machine
    Production,
    /// Automated tests
    Testing,
}

impl Environment {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            "testing" | "test" => Self::Testing,
            _ => Self::Development,
        }
    }

    /// Check if this is a production environment
    #[must_use]
    pub const fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
            Self::Testing => write!(f, "testing"),
        }
    }
}

/// Application configuration assembled from environment variables
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Deployment environment
    pub environment: Environment,
    /// Planner settings (pump capacity, cache size)
    pub planner: PlannerConfig,
    /// Catalog file, if configured
    pub catalog_path: Option<PathBuf>,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if a numeric variable cannot be parsed or a value is
    /// out of range
    pub fn from_env() -> Result<Self> {
        Self::from_env_with_capacity(None)
    }

    /// Load configuration with the pump capacity supplied by the caller
    ///
    /// A `Some` capacity takes the place of `DIPPER_PUMP_CAPACITY`, so a
    /// malformed value in the environment does not matter.
    ///
    /// # Errors
    ///
    /// Returns an error if a remaining variable cannot be parsed or any value
    /// is out of range
    pub fn from_env_with_capacity(pump_capacity: Option<usize>) -> Result<Self> {
        let planner = PlannerConfig::from_env_with_capacity(pump_capacity)
            .context("Invalid planner configuration")?;

        let environment = env::var(env_keys::ENVIRONMENT)
            .map(|value| Environment::from_str_or_default(&value))
            .unwrap_or_default();

        let catalog_path = env::var_os(env_keys::CATALOG_PATH)
            .filter(|value| !value.is_empty())
            .map(PathBuf::from);

        let config = Self {
            environment,
            planner,
            catalog_path,
        };
        info!(
            environment = %config.environment,
            pumps = config.planner.pump_capacity,
            "Configuration loaded from environment"
        );
        Ok(config)
    }

    /// Human-readable configuration summary
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "Dipper Configuration:\n\
             - Environment: {}\n\
             - Pumps: {}\n\
             - Guide Cache Entries: {}\n\
             - Catalog: {}",
            self.environment,
            self.planner.pump_capacity,
            self.planner.guide_cache_entries,
            self.catalog_path
                .as_ref()
                .map_or_else(|| "(not set)".to_owned(), |path| path.display().to_string()),
        )
    }
}
