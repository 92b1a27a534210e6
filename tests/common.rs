// ABOUTME: Shared test utilities and fixture catalogs for integration tests
// ABOUTME: Provides recipe builders, the reference two-recipe catalog, and a larger bar catalog
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Dipper Contributors
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::module_name_repetitions
)]
//! Shared test utilities for `dipper`
//!
//! Catalog fixtures used across the engine, session, and loader tests.

use std::collections::BTreeSet;

use dipper::models::{Catalog, Cocktail, IngredientLine};

/// Build a recipe whose requirement lines are `ingredients`, 4cl each
pub fn cocktail(name: &str, ingredients: &[&str]) -> Cocktail {
    Cocktail::new(
        name,
        ingredients
            .iter()
            .map(|ingredient| IngredientLine::new(*ingredient, 4.0, "cl"))
            .collect(),
    )
}

/// Margarita and Gin Tonic, the two-recipe reference catalog
pub fn reference_catalog() -> Catalog {
    Catalog::new(vec![
        cocktail("Margarita", &["tequila", "limeJuice", "triple sec"]),
        cocktail("Gin Tonic", &["gin", "tonic"]),
    ])
}

/// A small bar with overlapping recipes and a single-ingredient shot
pub fn bar_catalog() -> Catalog {
    Catalog::new(vec![
        cocktail("Screwdriver", &["vodka", "orange juice"]),
        cocktail("Vodka Tonic", &["vodka", "tonic"]),
        cocktail("Gin Tonic", &["gin", "tonic"]),
        cocktail("Gimlet", &["gin", "lime juice"]),
        cocktail("Greyhound", &["vodka", "grapefruit juice"]),
        cocktail("Tequila Sunrise", &["tequila", "orange juice", "grenadine"]),
        cocktail("Margarita", &["tequila", "lime juice", "triple sec"]),
        cocktail("Kamikaze", &["vodka", "lime juice", "triple sec"]),
        cocktail("Vodka Shot", &["vodka"]),
    ])
}

/// Owned set of ingredient names
pub fn stock(names: &[&str]) -> BTreeSet<String> {
    names.iter().map(|name| (*name).to_owned()).collect()
}

/// Deterministic pseudo-random toggle script over `universe`
///
/// Linear congruential steps keep the sequence reproducible without a
/// random number crate.
pub fn toggle_script<'a>(universe: &[&'a str], length: usize, seed: u64) -> Vec<&'a str> {
    let mut state = seed;
    (0..length)
        .map(|_| {
            state = state
                .wrapping_mul(6_364_136_223_846_793_005)
                .wrapping_add(1_442_695_040_888_963_407);
            universe[(state >> 33) as usize % universe.len()]
        })
        .collect()
}
