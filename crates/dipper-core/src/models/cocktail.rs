// ABOUTME: Data models for cocktail recipes and their ingredient requirement lines
// ABOUTME: Matching uses exact ingredient names; upper-casing is for display only
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Dipper Contributors

use serde::{Deserialize, Serialize};

/// Single requirement line of a cocktail
///
/// Only `ingredient` takes part in availability matching. `amount` and `unit`
/// are carried through for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IngredientLine {
    /// Ingredient name, compared by exact value
    #[serde(alias = "liquid")]
    pub ingredient: String,
    /// Quantity poured
    pub amount: f64,
    /// Free-form unit (`cl`, `ml`, `dash`, ...)
    pub unit: String,
}

impl IngredientLine {
    /// Create a requirement line
    pub fn new(ingredient: impl Into<String>, amount: f64, unit: impl Into<String>) -> Self {
        Self {
            ingredient: ingredient.into(),
            amount,
            unit: unit.into(),
        }
    }
}

/// Cocktail recipe as supplied by the catalog source
///
/// Precondition: no ingredient name appears twice in `ingredients`. The
/// engine does not enforce this; [`crate::models::Catalog::lint`] reports it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cocktail {
    /// Unique recipe name
    pub name: String,
    /// Suggested time of day ("All day", "After dinner", ...)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timing: Option<String>,
    /// Taste profile ("Fresh", "Sweet", ...)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub taste: Option<String>,
    /// Ordered requirement lines
    #[serde(default)]
    pub ingredients: Vec<IngredientLine>,
    /// Preparation method ("Build", "Shake", ...)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preparation: Option<String>,
    /// Serving glass
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub glass_type: Option<String>,
    /// Garnish
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub garnish: Option<String>,
    /// Short description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Cocktail {
    /// Create a cocktail with no display metadata
    pub fn new(name: impl Into<String>, ingredients: Vec<IngredientLine>) -> Self {
        Self {
            name: name.into(),
            timing: None,
            taste: None,
            ingredients,
            preparation: None,
            glass_type: None,
            garnish: None,
            description: None,
        }
    }

    /// Names of the required ingredients, in recipe order
    pub fn requirement_names(&self) -> impl Iterator<Item = &str> {
        self.ingredients.iter().map(|line| line.ingredient.as_str())
    }

    /// Whether this recipe references `ingredient`
    #[must_use]
    pub fn requires(&self, ingredient: &str) -> bool {
        self.requirement_names().any(|name| name == ingredient)
    }

    /// Whether the recipe has no requirement lines at all
    #[must_use]
    pub fn has_no_requirements(&self) -> bool {
        self.ingredients.is_empty()
    }

    /// Upper-cased name for display
    #[must_use]
    pub fn display_name(&self) -> String {
        self.name.to_uppercase()
    }
}

/// Upper-cased ingredient name for display
#[must_use]
pub fn display_ingredient(name: &str) -> String {
    name.to_uppercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_liquid_alias_is_accepted() {
        let json = r#"{"name":"Screwdriver","ingredients":[{"liquid":"Vodka","amount":5,"unit":"cl"}]}"#;
        let cocktail: Cocktail = serde_json::from_str(json).unwrap();

        assert_eq!(cocktail.ingredients[0].ingredient, "Vodka");
        assert!(cocktail.requires("Vodka"));
        assert!(!cocktail.requires("vodka"));
    }

    #[test]
    fn test_display_name_is_upper_case() {
        let cocktail = Cocktail::new("Gin Tonic", vec![]);
        assert_eq!(cocktail.display_name(), "GIN TONIC");
        assert!(cocktail.has_no_requirements());
    }
}
