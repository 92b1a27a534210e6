// ABOUTME: Recipe availability commands for dipper-cli
// ABOUTME: Lists every recipe with its missing ingredients or checks a single recipe
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Dipper Contributors

use std::slice;

use dipper::errors::AppResult;
use dipper::intelligence::{availability_report, can_make as check_recipe, PlannerConfig};
use dipper::models::Catalog;
use tracing::info;

use crate::helpers::display::{display_availability, print_json};
use crate::helpers::stock::selection_from_stock;

/// Print availability for every recipe in catalog order
pub fn available(
    catalog: &Catalog,
    planner: &PlannerConfig,
    stock: Vec<String>,
    only_available: bool,
    json: bool,
) -> AppResult<()> {
    let selection = selection_from_stock(planner, stock)?;
    let report: Vec<_> = availability_report(catalog, &selection)
        .into_iter()
        .filter(|entry| entry.is_available || !only_available)
        .collect();

    info!(
        recipes = catalog.len(),
        listed = report.len(),
        "Availability report ready"
    );

    if json {
        print_json(&report)
    } else {
        display_availability(&report);
        Ok(())
    }
}

/// Print availability for the recipe named `name`
pub fn can_make(
    catalog: &Catalog,
    planner: &PlannerConfig,
    stock: Vec<String>,
    name: &str,
    json: bool,
) -> AppResult<()> {
    let selection = selection_from_stock(planner, stock)?;
    let entry = check_recipe(catalog, &selection, name)?;

    if json {
        print_json(&entry)
    } else {
        display_availability(slice::from_ref(&entry));
        Ok(())
    }
}
