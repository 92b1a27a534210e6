// ABOUTME: Ingredient commands for dipper-cli
// ABOUTME: Prints per-ingredient usage counts and catalog precondition issues
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Dipper Contributors

use std::cmp::Reverse;

use dipper::errors::AppResult;
use dipper::intelligence::usage_counts;
use dipper::models::Catalog;

use crate::helpers::display::{display_lint, display_usage, print_json};

/// Print how many recipes use each ingredient, most used first
pub fn usage(catalog: &Catalog, json: bool) -> AppResult<()> {
    let usage = usage_counts(catalog);
    if json {
        return print_json(&usage);
    }

    let mut rows: Vec<(&str, usize)> = usage
        .iter()
        .map(|(name, &count)| (name.as_str(), count))
        .collect();
    rows.sort_by_key(|&(name, count)| (Reverse(count), name));
    display_usage(&rows);
    Ok(())
}

/// Print catalog precondition violations
pub fn lint(catalog: &Catalog, json: bool) -> AppResult<()> {
    let report = catalog.lint_report();
    if json {
        print_json(&report)
    } else {
        display_lint(&report);
        Ok(())
    }
}
