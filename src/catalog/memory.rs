// ABOUTME: In-memory catalog source wrapping a fixed list of recipes
// ABOUTME: Used by tests and demos; every load mints a new catalog version
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Dipper Contributors

use dipper_core::errors::AppResult;
use dipper_core::models::{Catalog, Cocktail};

use super::{log_catalog_issues, CatalogSource};

/// Catalog source backed by recipes held in memory
#[derive(Debug, Clone, Default)]
pub struct StaticCatalogSource {
    cocktails: Vec<Cocktail>,
}

impl StaticCatalogSource {
    /// Source serving `cocktails`
    #[must_use]
    pub fn new(cocktails: Vec<Cocktail>) -> Self {
        Self { cocktails }
    }
}

impl CatalogSource for StaticCatalogSource {
    fn load(&self) -> AppResult<Catalog> {
        let catalog = Catalog::new(self.cocktails.clone());
        log_catalog_issues(&self.describe(), &catalog);
        Ok(catalog)
    }

    fn describe(&self) -> String {
        format!("memory:{} recipes", self.cocktails.len())
    }
}
