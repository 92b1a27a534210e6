// ABOUTME: Availability evaluator deciding which recipes the stocked ingredients can pour
// ABOUTME: Also reports per-recipe missing ingredients for the recipe listing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Dipper Contributors

//! # Availability Evaluator
//!
//! A recipe is available iff every requirement ingredient is stocked. There
//! is no partial credit. Recipes without any requirement lines are never
//! available: the machine pours nothing for them, and treating them as always
//! available would let any ingredient "unlock" them.

use std::collections::BTreeSet;

use dipper_core::errors::{AppError, AppResult};
use dipper_core::models::{Catalog, Cocktail};
use serde::Serialize;

use crate::selection::Stocked;

/// Set of available recipes, identified by catalog index
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Availability {
    indices: BTreeSet<usize>,
}

impl Availability {
    /// Whether the recipe at `index` is available
    #[must_use]
    pub fn contains(&self, index: usize) -> bool {
        self.indices.contains(&index)
    }

    /// Number of available recipes
    #[must_use]
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    /// Whether no recipe is available
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Whether every recipe available here is also available in `other`
    #[must_use]
    pub fn is_subset(&self, other: &Self) -> bool {
        self.indices.is_subset(&other.indices)
    }

    /// Names of the available recipes in catalog order
    #[must_use]
    pub fn names<'c>(&self, catalog: &'c Catalog) -> Vec<&'c str> {
        self.indices
            .iter()
            .filter_map(|&index| catalog.get(index))
            .map(|cocktail| cocktail.name.as_str())
            .collect()
    }
}

/// Whether `cocktail` can be poured from `stock`
#[must_use]
pub fn is_available<S: Stocked + ?Sized>(cocktail: &Cocktail, stock: &S) -> bool {
    !cocktail.has_no_requirements()
        && cocktail
            .requirement_names()
            .all(|ingredient| stock.is_stocked(ingredient))
}

/// `evaluate(catalog, selection) -> Set<Recipe>`
///
/// Pure read of both inputs.
#[must_use]
pub fn evaluate<S: Stocked + ?Sized>(catalog: &Catalog, stock: &S) -> Availability {
    Availability {
        indices: catalog
            .indexed()
            .filter(|(_, cocktail)| is_available(cocktail, stock))
            .map(|(index, _)| index)
            .collect(),
    }
}

/// Requirement ingredients of `cocktail` that are not stocked, sorted and distinct
#[must_use]
pub fn missing_ingredients<S: Stocked + ?Sized>(cocktail: &Cocktail, stock: &S) -> Vec<String> {
    cocktail
        .requirement_names()
        .filter(|ingredient| !stock.is_stocked(ingredient))
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_owned)
        .collect()
}

/// Availability of a single recipe with what is still missing
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CocktailAvailability {
    /// Recipe name
    pub name: String,
    /// Whether the recipe can be poured right now
    pub is_available: bool,
    /// Unstocked requirement ingredients, sorted
    pub missing_ingredients: Vec<String>,
}

impl CocktailAvailability {
    /// Evaluate one recipe against `stock`
    #[must_use]
    pub fn of<S: Stocked + ?Sized>(cocktail: &Cocktail, stock: &S) -> Self {
        Self {
            name: cocktail.name.clone(),
            is_available: is_available(cocktail, stock),
            missing_ingredients: missing_ingredients(cocktail, stock),
        }
    }
}

/// Availability of every recipe, in catalog order
#[must_use]
pub fn availability_report<S: Stocked + ?Sized>(
    catalog: &Catalog,
    stock: &S,
) -> Vec<CocktailAvailability> {
    catalog
        .iter()
        .map(|cocktail| CocktailAvailability::of(cocktail, stock))
        .collect()
}

/// Availability of the recipe named `name`
///
/// # Errors
///
/// Returns a `ResourceNotFound` error when no recipe has that exact name
pub fn can_make<S: Stocked + ?Sized>(
    catalog: &Catalog,
    stock: &S,
    name: &str,
) -> AppResult<CocktailAvailability> {
    catalog
        .find(name)
        .map(|(_, cocktail)| CocktailAvailability::of(cocktail, stock))
        .ok_or_else(|| AppError::not_found(format!("Cocktail '{name}'")))
}
