// ABOUTME: Planner session owning the catalog snapshot and the single mutable selection
// ABOUTME: Routes every mutation through toggle and serves derived guides from the memo cache
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Dipper Contributors

//! # Planner Session
//!
//! One session per user view. The selection is created empty and discarded
//! with the session; nothing is persisted.

use std::sync::Arc;

use dipper_core::errors::AppResult;
use dipper_core::models::Catalog;
use tracing::{debug, info};

use crate::config::{ConfigError, PlannerConfig};
use crate::guide::ShoppingGuide;
use crate::memo::GuideCache;
use crate::selection::{Selection, ToggleOutcome};
use crate::usage::{usage_counts, UsageMap};

/// Catalog snapshot plus the user's current pump selection
pub struct PlannerSession {
    catalog: Arc<Catalog>,
    selection: Selection,
    usage: UsageMap,
    cache: GuideCache,
}

impl PlannerSession {
    /// Start a session with an empty selection
    ///
    /// # Errors
    ///
    /// Returns the [`PlannerConfig::validate`] error for a zero or oversized
    /// pump capacity or a zero cache size
    pub fn new(catalog: Arc<Catalog>, config: &PlannerConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let usage = usage_counts(&catalog);
        info!(
            catalog.version = %catalog.version(),
            catalog.recipes = catalog.len(),
            catalog.ingredients = usage.len(),
            pumps = config.pump_capacity,
            "Planner session started"
        );
        Ok(Self {
            catalog,
            selection: Selection::new(config.pump_capacity),
            usage,
            cache: GuideCache::new(config.guide_cache_entries),
        })
    }

    /// Start a session with ingredients already loaded on the pumps
    ///
    /// # Errors
    ///
    /// Returns a `ConfigInvalid` error for an invalid `config`, or a
    /// `ValueOutOfRange` error if `stocked` names more distinct ingredients
    /// than there are pumps
    pub fn with_stock<I, S>(
        catalog: Arc<Catalog>,
        config: &PlannerConfig,
        stocked: I,
    ) -> AppResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut session = Self::new(catalog, config)?;
        let selection = Selection::with_members(config.pump_capacity, stocked)?;
        session.selection = selection;
        Ok(session)
    }

    /// Toggle `ingredient` on or off the pumps
    pub fn toggle(&mut self, ingredient: &str) -> ToggleOutcome {
        let outcome = self.selection.toggle(ingredient);
        match outcome {
            ToggleOutcome::Rejected { capacity } => {
                debug!(ingredient, capacity, "Toggle rejected: every pump is in use");
            }
            ToggleOutcome::Added | ToggleOutcome::Removed => {
                debug!(
                    ingredient,
                    ?outcome,
                    pumps.used = self.selection.len(),
                    "Selection changed"
                );
            }
        }
        outcome
    }

    /// Shopping guide for the current catalog and selection
    pub fn guide(&mut self) -> Arc<ShoppingGuide> {
        self.cache
            .get_or_compute(&self.catalog, &self.selection, &self.usage)
    }

    /// Swap in a new catalog snapshot, keeping the current selection
    ///
    /// Stocked ingredients that the new catalog no longer references keep
    /// their pumps until toggled off.
    pub fn replace_catalog(&mut self, catalog: Arc<Catalog>) {
        info!(
            previous = %self.catalog.version(),
            current = %catalog.version(),
            catalog.recipes = catalog.len(),
            "Catalog replaced"
        );
        self.usage = usage_counts(&catalog);
        self.catalog = catalog;
        self.cache.clear();
    }

    /// Free every pump
    pub fn clear(&mut self) {
        self.selection.clear();
    }

    /// Current catalog snapshot
    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Current selection
    #[must_use]
    pub const fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Usage counts for the current catalog
    #[must_use]
    pub const fn usage(&self) -> &UsageMap {
        &self.usage
    }

    /// Memoization statistics as `(hits, misses)`
    #[must_use]
    pub const fn cache_stats(&self) -> (u64, u64) {
        (self.cache.hits(), self.cache.misses())
    }
}
