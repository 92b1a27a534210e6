// ABOUTME: Main library entry point for the Dipper ingredient planner
// ABOUTME: Wires catalog sources, environment configuration, and logging around the engine
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Dipper Contributors

#![deny(unsafe_code)]

//! # Dipper
//!
//! Ingredient planning for a pump-driven cocktail machine. Given a recipe
//! catalog and the ingredients loaded on the pumps, Dipper reports which
//! cocktails can be poured and which ingredient to load next.
//!
//! ## Architecture
//!
//! - **`dipper-core`**: catalog models, error codes, constants
//! - **`dipper-intelligence`**: the planning engine (selection, availability,
//!   unlock scoring, usage counts, ranking, sessions)
//! - **this crate**: catalog sources, environment configuration, logging,
//!   and the `dipper-cli` binary
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use dipper::catalog::{CatalogSource, FileCatalogSource};
//! use dipper::config::AppConfig;
//! use dipper::errors::AppResult;
//! use dipper::intelligence::PlannerSession;
//!
//! fn main() -> AppResult<()> {
//!     let config = AppConfig::default();
//!     let catalog = FileCatalogSource::new("cocktails.json").load()?;
//!     let mut session = PlannerSession::new(Arc::new(catalog), &config.planner)?;
//!
//!     session.toggle("Vodka");
//!     println!("{}", session.guide().summary_line());
//!     Ok(())
//! }
//! ```

/// Catalog sources (JSON/YAML files, in-memory lists)
pub mod catalog;

/// Environment-based configuration
pub mod config;

/// Structured logging setup
pub mod logging;

/// Unified error handling re-exported from `dipper-core`
pub use dipper_core::errors;

/// Application constants re-exported from `dipper-core`
pub use dipper_core::constants;

/// Catalog models re-exported from `dipper-core`
pub use dipper_core::models;

/// Planning engine re-exported from `dipper-intelligence`
pub use dipper_intelligence as intelligence;
