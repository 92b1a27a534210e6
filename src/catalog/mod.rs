// ABOUTME: Catalog sources supplying recipe snapshots to the planning engine
// ABOUTME: Defines the CatalogSource trait with file-backed and in-memory implementations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Dipper Contributors

//! # Catalog Sources
//!
//! The engine treats the catalog as a read-only snapshot and never pushes
//! updates back. A source is anything that can produce such a snapshot.

/// JSON and YAML recipe files
pub mod file;
/// In-memory recipe lists
pub mod memory;

pub use file::{CatalogFormat, FileCatalogSource};
pub use memory::StaticCatalogSource;

use dipper_core::errors::AppResult;
use dipper_core::models::Catalog;
use tracing::warn;

/// Supplier of recipe catalog snapshots
pub trait CatalogSource {
    /// Load a fresh catalog snapshot
    ///
    /// # Errors
    ///
    /// Returns an error if the recipes cannot be read or parsed
    fn load(&self) -> AppResult<Catalog>;

    /// Short description of where recipes come from, for logs
    fn describe(&self) -> String;
}

/// Log every catalog precondition violation without rejecting the catalog
pub(crate) fn log_catalog_issues(source: &str, catalog: &Catalog) {
    for issue in catalog.lint() {
        warn!(catalog.source = %source, issue = %issue, "Catalog precondition violated");
    }
}
