// ABOUTME: Shopping guide snapshot bundling every derived view for one catalog and selection
// ABOUTME: Produces ranked ingredient rows with usage, unlock, and pump display data
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Dipper Contributors

//! # Shopping Guide
//!
//! The shopping guide answers "what should I load on the pumps next?". It is
//! an immutable snapshot recomputed from catalog and selection after every
//! successful toggle.

use dipper_core::constants::display;
use dipper_core::models::{display_ingredient, Catalog};
use serde::Serialize;
use uuid::Uuid;

use crate::availability::evaluate;
use crate::ranking::rank;
use crate::selection::Selection;
use crate::unlock::{score, UnlockMap};
use crate::usage::{usage_counts, UsageMap};

/// One ingredient line of the guide
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IngredientRow {
    /// Ingredient name as stored in the catalog
    pub name: String,
    /// Upper-cased name for display
    pub display_name: String,
    /// Whether the ingredient is on a pump
    pub selected: bool,
    /// Recipes newly available if this ingredient were added
    pub unlocks: usize,
    /// Recipes referencing this ingredient
    pub used_in: usize,
    /// Row cannot be toggled on because every pump is taken
    pub disabled: bool,
}

impl IngredientRow {
    /// Unlock column text: `ADDED`, `+n`, or a dash
    #[must_use]
    pub fn unlock_label(&self) -> String {
        if self.selected {
            display::ADDED_LABEL.to_owned()
        } else if self.unlocks > 0 {
            format!("+{}", self.unlocks)
        } else {
            display::NO_UNLOCK_LABEL.to_owned()
        }
    }
}

/// All derived views for one `(catalog, selection)` pair
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShoppingGuide {
    /// Catalog snapshot the guide was computed from
    pub catalog_version: Uuid,
    /// Stocked ingredient count
    pub pumps_used: usize,
    /// Pump capacity
    pub pump_capacity: usize,
    /// Names of recipes that can be poured, in catalog order
    pub available: Vec<String>,
    /// Unlock score per ingredient
    pub unlocks: UnlockMap,
    /// Usage count per ingredient
    pub usage: UsageMap,
    /// Ingredient rows in ranked order
    pub rows: Vec<IngredientRow>,
}

impl ShoppingGuide {
    /// Compute the guide, reusing a usage map already computed for `catalog`
    #[must_use]
    pub fn compute(catalog: &Catalog, selection: &Selection, usage: &UsageMap) -> Self {
        let available = evaluate(catalog, selection);
        let unlocks = score(catalog, selection.members(), &available, selection.capacity());
        let universe = catalog.universe();
        let full = selection.is_full();

        let rows = rank(&universe, selection, &unlocks)
            .into_iter()
            .map(|name| {
                let selected = selection.contains(&name);
                IngredientRow {
                    display_name: display_ingredient(&name),
                    selected,
                    unlocks: unlocks.get(&name),
                    used_in: usage.get(&name),
                    disabled: !selected && full,
                    name,
                }
            })
            .collect();

        Self {
            catalog_version: catalog.version(),
            pumps_used: selection.len(),
            pump_capacity: selection.capacity(),
            available: available
                .names(catalog)
                .into_iter()
                .map(str::to_owned)
                .collect(),
            unlocks,
            usage: usage.clone(),
            rows,
        }
    }

    /// Compute the guide including the usage map
    #[must_use]
    pub fn from_scratch(catalog: &Catalog, selection: &Selection) -> Self {
        Self::compute(catalog, selection, &usage_counts(catalog))
    }

    /// Ingredient names in ranked order
    pub fn ranked(&self) -> impl Iterator<Item = &str> {
        self.rows.iter().map(|row| row.name.as_str())
    }

    /// Row for `ingredient`, if it is part of the universe
    #[must_use]
    pub fn row(&self, ingredient: &str) -> Option<&IngredientRow> {
        self.rows.iter().find(|row| row.name == ingredient)
    }

    /// Header line: `COCKTAILS (n) — PUMPS used/capacity`
    #[must_use]
    pub fn summary_line(&self) -> String {
        format!(
            "COCKTAILS ({}) — PUMPS {}/{}",
            self.available.len(),
            self.pumps_used,
            self.pump_capacity
        )
    }

    /// Upper-cased list of pourable cocktails, or a prompt when there are none
    #[must_use]
    pub fn available_banner(&self) -> String {
        if self.available.is_empty() {
            return display::EMPTY_BANNER.to_owned();
        }
        self.available
            .iter()
            .map(|name| name.to_uppercase())
            .collect::<Vec<_>>()
            .join(display::BANNER_SEPARATOR)
    }
}
