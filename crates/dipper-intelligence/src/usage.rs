// ABOUTME: Usage counter reporting how many recipes reference each ingredient
// ABOUTME: Depends on the catalog alone, so sessions compute it once per catalog version
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Dipper Contributors

use std::collections::btree_map;
use std::collections::{BTreeMap, BTreeSet};

use dipper_core::models::Catalog;
use serde::Serialize;

/// Ingredient name to number of recipes referencing it
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct UsageMap {
    counts: BTreeMap<String, usize>,
}

impl UsageMap {
    /// Number of recipes using `ingredient`; 0 for names outside the universe
    #[must_use]
    pub fn get(&self, ingredient: &str) -> usize {
        self.counts.get(ingredient).copied().unwrap_or(0)
    }

    /// Number of distinct ingredients
    #[must_use]
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Whether the catalog referenced no ingredients
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Counts in ingredient-name order
    pub fn iter(&self) -> btree_map::Iter<'_, String, usize> {
        self.counts.iter()
    }
}

/// `usageCounts(catalog) -> Map<ingredient, count>`
///
/// A recipe listing the same ingredient twice is counted once.
#[must_use]
pub fn usage_counts(catalog: &Catalog) -> UsageMap {
    let mut counts = BTreeMap::new();
    for cocktail in catalog.iter() {
        let distinct: BTreeSet<&str> = cocktail.requirement_names().collect();
        for ingredient in distinct {
            *counts.entry(ingredient.to_owned()).or_insert(0) += 1;
        }
    }
    UsageMap { counts }
}
