// ABOUTME: Shopping guide command for dipper-cli
// ABOUTME: Seeds the pumps, applies toggles in order, and prints the ranked guide
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Dipper Contributors

use std::sync::Arc;

use dipper::errors::AppResult;
use dipper::intelligence::{PlannerConfig, PlannerSession, ShoppingGuide, ToggleOutcome};
use dipper::models::Catalog;
use serde::Serialize;
use tracing::info;

use crate::helpers::display::{display_guide, print_json};
use crate::helpers::stock::clean_stock;

/// Toggle request and what happened to it
#[derive(Serialize)]
pub struct AppliedToggle {
    pub ingredient: String,
    #[serde(flatten)]
    pub outcome: ToggleOutcome,
}

#[derive(Serialize)]
struct GuideOutput<'a> {
    toggles: &'a [AppliedToggle],
    summary: String,
    guide: &'a ShoppingGuide,
}

/// Print the shopping guide after applying `toggles` to the seeded stock
pub fn show(
    catalog: Catalog,
    planner: &PlannerConfig,
    stock: Vec<String>,
    toggles: &[String],
    json: bool,
) -> AppResult<()> {
    let mut session = PlannerSession::with_stock(Arc::new(catalog), planner, clean_stock(stock))?;

    let applied: Vec<AppliedToggle> = toggles
        .iter()
        .map(|ingredient| {
            let ingredient = ingredient.trim().to_owned();
            let outcome = session.toggle(&ingredient);
            AppliedToggle { ingredient, outcome }
        })
        .collect();

    let guide = session.guide();
    info!(
        available = guide.available.len(),
        pumps.used = guide.pumps_used,
        "Shopping guide ready"
    );

    if json {
        print_json(&GuideOutput {
            toggles: &applied,
            summary: guide.summary_line(),
            guide: &guide,
        })
    } else {
        display_guide(&guide, &applied);
        Ok(())
    }
}
