// ABOUTME: Immutable recipe catalog snapshot with a per-build version identifier
// ABOUTME: Exposes the ingredient universe and reports input precondition violations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Dipper Contributors

use std::collections::{BTreeSet, HashSet};
use std::fmt;

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use super::cocktail::Cocktail;

/// Read-only snapshot of the recipes known to the machine
///
/// Every call to [`Catalog::new`] mints a fresh `version`, so derived views can
/// be memoized on `(version, selection)` and invalidated by swapping catalogs.
#[derive(Debug, Clone)]
pub struct Catalog {
    version: Uuid,
    loaded_at: DateTime<Utc>,
    cocktails: Vec<Cocktail>,
}

impl Catalog {
    /// Build a catalog snapshot from recipes in source order
    #[must_use]
    pub fn new(cocktails: Vec<Cocktail>) -> Self {
        Self {
            version: Uuid::new_v4(),
            loaded_at: Utc::now(),
            cocktails,
        }
    }

    /// Catalog with no recipes
    #[must_use]
    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    /// Version identifier of this snapshot
    #[must_use]
    pub const fn version(&self) -> Uuid {
        self.version
    }

    /// When this snapshot was built
    #[must_use]
    pub const fn loaded_at(&self) -> DateTime<Utc> {
        self.loaded_at
    }

    /// Number of recipes
    #[must_use]
    pub fn len(&self) -> usize {
        self.cocktails.len()
    }

    /// Whether the catalog has no recipes
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cocktails.is_empty()
    }

    /// Recipes in source order
    pub fn iter(&self) -> impl Iterator<Item = &Cocktail> {
        self.cocktails.iter()
    }

    /// Recipes with their catalog index
    pub fn indexed(&self) -> impl Iterator<Item = (usize, &Cocktail)> {
        self.cocktails.iter().enumerate()
    }

    /// Recipe at `index`
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Cocktail> {
        self.cocktails.get(index)
    }

    /// First recipe named exactly `name`
    #[must_use]
    pub fn find(&self, name: &str) -> Option<(usize, &Cocktail)> {
        self.indexed().find(|(_, cocktail)| cocktail.name == name)
    }

    /// Every distinct ingredient referenced by any recipe, sorted ascending
    #[must_use]
    pub fn universe(&self) -> Vec<&str> {
        self.cocktails
            .iter()
            .flat_map(Cocktail::requirement_names)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Report violations of the catalog input preconditions
    ///
    /// None of these are fatal. Recipes with no requirement lines are never
    /// available; duplicate lines are matched once.
    #[must_use]
    pub fn lint(&self) -> Vec<CatalogIssue> {
        let mut issues = Vec::new();
        let mut seen_names = HashSet::new();

        for cocktail in &self.cocktails {
            if !seen_names.insert(cocktail.name.as_str()) {
                issues.push(CatalogIssue::DuplicateName {
                    cocktail: cocktail.name.clone(),
                });
            }
            if cocktail.has_no_requirements() {
                issues.push(CatalogIssue::NoRequirements {
                    cocktail: cocktail.name.clone(),
                });
            }

            let mut seen_ingredients = HashSet::new();
            for ingredient in cocktail.requirement_names() {
                if !seen_ingredients.insert(ingredient) {
                    issues.push(CatalogIssue::DuplicateIngredient {
                        cocktail: cocktail.name.clone(),
                        ingredient: ingredient.to_owned(),
                    });
                }
            }
        }

        issues
    }

    /// [`Self::lint`] together with the identity of this snapshot
    #[must_use]
    pub fn lint_report(&self) -> LintReport {
        LintReport {
            catalog_version: self.version,
            loaded_at: self.loaded_at,
            recipes: self.cocktails.len(),
            issues: self.lint(),
        }
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::empty()
    }
}

/// Lint results for one catalog snapshot
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LintReport {
    /// Snapshot the issues were found in
    pub catalog_version: Uuid,
    /// When that snapshot was built
    pub loaded_at: DateTime<Utc>,
    /// Number of recipes checked
    pub recipes: usize,
    /// Every precondition violation, in catalog order
    pub issues: Vec<CatalogIssue>,
}

impl LintReport {
    /// Whether no issues were found
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.issues.is_empty()
    }
}

/// Catalog precondition violation found by [`Catalog::lint`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CatalogIssue {
    /// Two recipes share a name
    DuplicateName {
        /// Repeated recipe name
        cocktail: String,
    },
    /// Recipe lists no ingredients
    NoRequirements {
        /// Offending recipe
        cocktail: String,
    },
    /// Recipe lists the same ingredient more than once
    DuplicateIngredient {
        /// Offending recipe
        cocktail: String,
        /// Repeated ingredient
        ingredient: String,
    },
}

impl fmt::Display for CatalogIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateName { cocktail } => {
                write!(f, "Recipe name '{cocktail}' appears more than once")
            }
            Self::NoRequirements { cocktail } => {
                write!(f, "Recipe '{cocktail}' has no ingredients and is never available")
            }
            Self::DuplicateIngredient {
                cocktail,
                ingredient,
            } => {
                write!(f, "Recipe '{cocktail}' lists '{ingredient}' more than once")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::IngredientLine;

    fn line(name: &str) -> IngredientLine {
        IngredientLine::new(name, 4.0, "cl")
    }

    #[test]
    fn test_universe_is_sorted_and_distinct() {
        let catalog = Catalog::new(vec![
            Cocktail::new("Gin Tonic", vec![line("tonic"), line("gin")]),
            Cocktail::new("Gimlet", vec![line("gin"), line("lime juice")]),
        ]);

        assert_eq!(catalog.universe(), vec!["gin", "lime juice", "tonic"]);
    }

    #[test]
    fn test_each_catalog_gets_a_new_version() {
        assert_ne!(Catalog::empty().version(), Catalog::empty().version());
    }

    #[test]
    fn test_lint_report_carries_snapshot_identity() {
        let before = Utc::now();
        let catalog = Catalog::new(vec![Cocktail::new("Air", vec![])]);

        let report = catalog.lint_report();

        assert_eq!(report.catalog_version, catalog.version());
        assert_eq!(report.loaded_at, catalog.loaded_at());
        assert!(report.loaded_at >= before);
        assert_eq!(report.recipes, 1);
        assert!(!report.is_clean());
        assert!(Catalog::empty().lint_report().is_clean());
    }

    #[test]
    fn test_lint_reports_all_precondition_violations() {
        let catalog = Catalog::new(vec![
            Cocktail::new("Shot", vec![line("vodka"), line("vodka")]),
            Cocktail::new("Shot", vec![line("rum")]),
            Cocktail::new("Air", vec![]),
        ]);

        let issues = catalog.lint();
        assert_eq!(issues.len(), 3);
        assert!(issues.contains(&CatalogIssue::DuplicateIngredient {
            cocktail: "Shot".into(),
            ingredient: "vodka".into(),
        }));
        assert!(issues.contains(&CatalogIssue::DuplicateName {
            cocktail: "Shot".into(),
        }));
        assert!(issues.contains(&CatalogIssue::NoRequirements {
            cocktail: "Air".into(),
        }));
    }
}
