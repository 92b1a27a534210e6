// ABOUTME: Core data models for the recipe catalog
// ABOUTME: Re-exports Cocktail, IngredientLine, Catalog, and catalog lint reports
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Dipper Contributors

/// Cocktail recipes and their requirement lines
pub mod cocktail;
/// Immutable catalog snapshot
pub mod catalog;

pub use catalog::{Catalog, CatalogIssue, LintReport};
pub use cocktail::{display_ingredient, Cocktail, IngredientLine};
