// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Dipper Contributors
// ABOUTME: Parsing of --stock arguments into a pump selection
// ABOUTME: Trims whitespace and drops empty entries before enforcing capacity

use dipper::errors::AppResult;
use dipper::intelligence::{PlannerConfig, Selection};

/// Trimmed, non-empty ingredient names from `--stock` values
pub fn clean_stock(stock: Vec<String>) -> Vec<String> {
    stock
        .into_iter()
        .map(|name| name.trim().to_owned())
        .filter(|name| !name.is_empty())
        .collect()
}

/// Selection seeded from `--stock`, rejecting more ingredients than pumps
pub fn selection_from_stock(planner: &PlannerConfig, stock: Vec<String>) -> AppResult<Selection> {
    Ok(Selection::with_members(
        planner.pump_capacity,
        clean_stock(stock),
    )?)
}
