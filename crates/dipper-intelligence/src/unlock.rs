// ABOUTME: Unlock scorer counting recipes each unstocked ingredient would newly make available
// ABOUTME: Simulates one hypothetical add per candidate, independently of every other candidate
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Dipper Contributors

//! # Unlock Scorer
//!
//! For each ingredient `i` of the catalog universe:
//!
//! - `i` already stocked: score 0
//! - no free pump: score 0 (no eviction suggestions are made)
//! - otherwise: `|available(selection ∪ {i}) \ available(selection)|`
//!
//! Scores are marginal and independent. Two candidates with score 1 each do
//! not imply that adding both unlocks 2 recipes; this is a per-item hint, not
//! a solution to the "best k ingredients" problem.

use std::collections::btree_map;
use std::collections::{BTreeMap, BTreeSet};

use dipper_core::models::Catalog;
use serde::Serialize;

use crate::availability::{is_available, Availability};
use crate::selection::WithCandidate;

/// Ingredient name to unlock score
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct UnlockMap {
    scores: BTreeMap<String, usize>,
}

impl UnlockMap {
    /// Score of `ingredient`; 0 for names outside the universe
    #[must_use]
    pub fn get(&self, ingredient: &str) -> usize {
        self.scores.get(ingredient).copied().unwrap_or(0)
    }

    /// Number of scored ingredients (the universe size)
    #[must_use]
    pub fn len(&self) -> usize {
        self.scores.len()
    }

    /// Whether no ingredient was scored
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    /// Scores in ingredient-name order
    pub fn iter(&self) -> btree_map::Iter<'_, String, usize> {
        self.scores.iter()
    }

    /// Highest-scoring ingredient, ties broken by name; `None` if nothing unlocks anything
    #[must_use]
    pub fn best(&self) -> Option<(&str, usize)> {
        self.scores
            .iter()
            .filter(|(_, &score)| score > 0)
            .max_by(|(a_name, a_score), (b_name, b_score)| {
                a_score.cmp(b_score).then_with(|| b_name.cmp(a_name))
            })
            .map(|(name, &score)| (name.as_str(), score))
    }
}

/// `score(catalog, selection, available, capacity) -> Map<ingredient, count>`
///
/// `available` must be the availability of `selection` against `catalog`.
#[must_use]
pub fn score(
    catalog: &Catalog,
    selection: &BTreeSet<String>,
    available: &Availability,
    capacity: usize,
) -> UnlockMap {
    let at_capacity = selection.len() >= capacity;

    let scores = catalog
        .universe()
        .into_iter()
        .map(|ingredient| {
            let unlocked = if at_capacity || selection.contains(ingredient) {
                0
            } else {
                newly_available(catalog, selection, available, ingredient)
            };
            (ingredient.to_owned(), unlocked)
        })
        .collect();

    UnlockMap { scores }
}

/// Recipes available with `candidate` added that were not available before
fn newly_available(
    catalog: &Catalog,
    selection: &BTreeSet<String>,
    available: &Availability,
    candidate: &str,
) -> usize {
    let hypothetical = WithCandidate::new(selection, candidate);
    catalog
        .indexed()
        .filter(|(index, cocktail)| {
            !available.contains(*index) && is_available(cocktail, &hypothetical)
        })
        .count()
}
