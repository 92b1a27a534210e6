// ABOUTME: Benchmark fixtures for generating synthetic recipe catalogs
// ABOUTME: Provides deterministic catalog generation for reproducible performance measurements
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Dipper Contributors

//! Benchmark fixtures for generating synthetic recipe catalogs.

use dipper::intelligence::Selection;
use dipper::models::{Catalog, Cocktail, IngredientLine};

/// Predefined catalog sizes for benchmark scenarios
#[derive(Debug, Clone, Copy)]
pub enum CatalogSize {
    /// A home bar (40 recipes over 30 ingredients)
    Small,
    /// A full cocktail book (400 recipes over 120 ingredients)
    Large,
}

impl CatalogSize {
    /// `(recipes, distinct ingredients)` for this size
    #[must_use]
    pub const fn dimensions(self) -> (usize, usize) {
        match self {
            Self::Small => (40, 30),
            Self::Large => (400, 120),
        }
    }

    /// Label used in benchmark ids
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Small => "small",
            Self::Large => "large",
        }
    }
}

fn ingredient_name(index: usize) -> String {
    format!("ingredient-{index:03}")
}

/// Generate a catalog where each recipe uses two to four ingredients
///
/// Low-numbered ingredients are shared by many recipes, mirroring how a
/// handful of base spirits appear across most of a real menu.
#[must_use]
pub fn generate_catalog(size: CatalogSize) -> Catalog {
    let (recipes, ingredients) = size.dimensions();
    (0..recipes)
        .map(|index| {
            let lines = 2 + index % 3;
            let base = index % 6;
            let requirement_lines = (0..lines)
                .map(|line| {
                    let ingredient = if line == 0 {
                        base
                    } else {
                        (index * 7 + line * 13) % ingredients
                    };
                    IngredientLine::new(ingredient_name(ingredient), 4.0, "cl")
                })
                .collect();
            Cocktail::new(format!("Recipe {index}"), requirement_lines)
        })
        .collect()
}

/// Selection stocking the first `stocked` ingredients of the universe
#[must_use]
pub fn generate_selection(catalog: &Catalog, capacity: usize, stocked: usize) -> Selection {
    let mut selection = Selection::new(capacity);
    for ingredient in catalog.universe().into_iter().take(stocked.min(capacity)) {
        selection.toggle(ingredient);
    }
    selection
}
