// ABOUTME: Capacity-bounded set of stocked ingredients and its single toggle mutation
// ABOUTME: Enforces |selection| <= capacity at the mutation boundary
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Dipper Contributors

//! # Selection State
//!
//! The set of ingredients currently loaded on pumps. The only way to change a
//! selection after construction is [`Selection::toggle`] (or its pure form
//! [`Selection::toggled`]), which never lets the set grow past its capacity.

use std::collections::btree_set;
use std::collections::BTreeSet;

use dipper_core::errors::AppError;
use serde::Serialize;
use thiserror::Error;

/// Anything that can answer "is this ingredient stocked?"
///
/// Implemented by the real selection and by hypothetical extensions of it,
/// so availability can be evaluated without cloning sets.
pub trait Stocked {
    /// Whether `ingredient` is available to pour
    fn is_stocked(&self, ingredient: &str) -> bool;
}

impl Stocked for BTreeSet<String> {
    fn is_stocked(&self, ingredient: &str) -> bool {
        self.contains(ingredient)
    }
}

impl Stocked for Selection {
    fn is_stocked(&self, ingredient: &str) -> bool {
        self.contains(ingredient)
    }
}

/// A stocked set plus one hypothetically added ingredient
#[derive(Debug, Clone, Copy)]
pub struct WithCandidate<'a, S: ?Sized> {
    base: &'a S,
    candidate: &'a str,
}

impl<'a, S: Stocked + ?Sized> WithCandidate<'a, S> {
    /// `base ∪ {candidate}`
    pub const fn new(base: &'a S, candidate: &'a str) -> Self {
        Self { base, candidate }
    }
}

impl<S: Stocked + ?Sized> Stocked for WithCandidate<'_, S> {
    fn is_stocked(&self, ingredient: &str) -> bool {
        ingredient == self.candidate || self.base.is_stocked(ingredient)
    }
}

/// Errors raised when constructing a selection from existing members
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SelectionError {
    /// More distinct ingredients than there are pumps
    #[error("{requested} ingredients requested but only {capacity} pumps are available")]
    CapacityExceeded {
        /// Distinct ingredients requested
        requested: usize,
        /// Pump capacity
        capacity: usize,
    },
}

impl From<SelectionError> for AppError {
    fn from(error: SelectionError) -> Self {
        Self::out_of_range(error.to_string()).with_source(error)
    }
}

/// Result of a toggle request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum ToggleOutcome {
    /// Ingredient was added to a free pump
    Added,
    /// Ingredient was removed, freeing its pump
    Removed,
    /// Every pump is taken; the selection is unchanged
    Rejected {
        /// Pump capacity that was exhausted
        capacity: usize,
    },
}

impl ToggleOutcome {
    /// Whether the selection changed and derived views must be recomputed
    #[must_use]
    pub const fn changed(&self) -> bool {
        !matches!(self, Self::Rejected { .. })
    }
}

/// Capacity-bounded set of stocked ingredient names
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Selection {
    capacity: usize,
    members: BTreeSet<String>,
}

impl Selection {
    /// Empty selection for a machine with `capacity` pumps
    #[must_use]
    pub const fn new(capacity: usize) -> Self {
        Self {
            capacity,
            members: BTreeSet::new(),
        }
    }

    /// Selection seeded with the ingredients already loaded on the pumps
    ///
    /// Duplicate names collapse to one pump.
    ///
    /// # Errors
    ///
    /// Returns [`SelectionError::CapacityExceeded`] if more distinct
    /// ingredients are given than `capacity` allows
    pub fn with_members<I, S>(capacity: usize, members: I) -> Result<Self, SelectionError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let members: BTreeSet<String> = members.into_iter().map(Into::into).collect();
        if members.len() > capacity {
            return Err(SelectionError::CapacityExceeded {
                requested: members.len(),
                capacity,
            });
        }
        Ok(Self { capacity, members })
    }

    /// Pump capacity
    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of stocked ingredients
    #[must_use]
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Whether nothing is stocked
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Whether every pump is in use
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.members.len() >= self.capacity
    }

    /// Number of free pumps
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.capacity.saturating_sub(self.members.len())
    }

    /// Whether `ingredient` is stocked
    #[must_use]
    pub fn contains(&self, ingredient: &str) -> bool {
        self.members.contains(ingredient)
    }

    /// Stocked ingredient names, sorted
    #[must_use]
    pub const fn members(&self) -> &BTreeSet<String> {
        &self.members
    }

    /// Iterate stocked ingredient names in sorted order
    pub fn iter(&self) -> btree_set::Iter<'_, String> {
        self.members.iter()
    }

    /// Toggle `ingredient` in place
    ///
    /// Removal is always allowed. Adding succeeds only while a pump is free;
    /// otherwise the selection is left untouched and
    /// [`ToggleOutcome::Rejected`] is returned.
    pub fn toggle(&mut self, ingredient: &str) -> ToggleOutcome {
        if self.members.remove(ingredient) {
            ToggleOutcome::Removed
        } else if self.members.len() < self.capacity {
            self.members.insert(ingredient.to_owned());
            ToggleOutcome::Added
        } else {
            ToggleOutcome::Rejected {
                capacity: self.capacity,
            }
        }
    }

    /// Pure form of [`Self::toggle`]: the selection after toggling `ingredient`
    #[must_use]
    pub fn toggled(&self, ingredient: &str) -> Self {
        let mut next = self.clone();
        next.toggle(ingredient);
        next
    }

    /// Remove every stocked ingredient
    pub fn clear(&mut self) {
        self.members.clear();
    }
}

impl<'a> IntoIterator for &'a Selection {
    type Item = &'a String;
    type IntoIter = btree_set::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.members.iter()
    }
}

/// `toggle(selection, ingredient, capacity) -> selection'`
///
/// Applies the toggle rule against an explicit capacity, ignoring the
/// capacity stored on `selection`. Members beyond `capacity` are never added.
#[must_use]
pub fn toggle(selection: &BTreeSet<String>, ingredient: &str, capacity: usize) -> BTreeSet<String> {
    let mut next = selection.clone();
    if !next.remove(ingredient) && next.len() < capacity {
        next.insert(ingredient.to_owned());
    }
    next
}
