// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Dipper Contributors
// ABOUTME: Output formatting helpers for dipper-cli
// ABOUTME: Renders the shopping guide, availability reports, usage, lint issues, and errors

use anyhow::Error;
use dipper::errors::{AppError, AppResult, ErrorResponse};
use dipper::intelligence::{CocktailAvailability, ShoppingGuide, ToggleOutcome};
use dipper::models::LintReport;
use serde::Serialize;

use crate::commands::guide::AppliedToggle;

const NAME_WIDTH: usize = 32;

/// Print any serializable value as pretty JSON on stdout
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> AppResult<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Display the shopping guide screen
pub fn display_guide(guide: &ShoppingGuide, toggles: &[AppliedToggle]) {
    for applied in toggles {
        match applied.outcome {
            ToggleOutcome::Added => println!("+ {} loaded", applied.ingredient),
            ToggleOutcome::Removed => println!("- {} unloaded", applied.ingredient),
            ToggleOutcome::Rejected { capacity } => println!(
                "! {} not loaded: all {capacity} pumps are in use",
                applied.ingredient
            ),
        }
    }
    if !toggles.is_empty() {
        println!();
    }

    println!("SHOPPING GUIDE");
    println!("{}", "=".repeat(NAME_WIDTH + 20));
    println!("{}", guide.summary_line());
    println!("{}", guide.available_banner());
    println!();
    println!("{:<NAME_WIDTH$} {:>8} {:>9}", "INGREDIENT", "USED IN", "UNLOCKS");
    println!("{}", "-".repeat(NAME_WIDTH + 20));

    for row in &guide.rows {
        let marker = if row.selected { "✓ " } else { "" };
        let name = format!("{marker}{}", row.display_name);
        let suffix = if row.disabled { " (no free pump)" } else { "" };
        println!(
            "{name:<NAME_WIDTH$} {:>8} {:>9}{suffix}",
            row.used_in,
            row.unlock_label()
        );
    }
}

/// Display recipe availability lines
pub fn display_availability(report: &[CocktailAvailability]) {
    if report.is_empty() {
        println!("No recipes to show");
        return;
    }
    for entry in report {
        if entry.is_available {
            println!("✓ {}", entry.name);
        } else {
            println!(
                "✗ {} (missing: {})",
                entry.name,
                entry.missing_ingredients.join(", ")
            );
        }
    }
}

/// Display ingredient usage counts
pub fn display_usage(rows: &[(&str, usize)]) {
    println!("{:<NAME_WIDTH$} {:>8}", "INGREDIENT", "USED IN");
    println!("{}", "-".repeat(NAME_WIDTH + 9));
    for (name, count) in rows {
        println!("{:<NAME_WIDTH$} {count:>8}", name.to_uppercase());
    }
}

/// Display catalog lint results
pub fn display_lint(report: &LintReport) {
    println!(
        "Catalog {} (loaded {})",
        report.catalog_version,
        report.loaded_at.format("%Y-%m-%d %H:%M:%S UTC")
    );
    if report.is_clean() {
        println!("OK: {} recipes, no issues", report.recipes);
        return;
    }
    println!("{} issue(s) in {} recipes:", report.issues.len(), report.recipes);
    for issue in &report.issues {
        println!("  • {issue}");
    }
}

/// Report a failed command on stderr, or as JSON on stdout
pub fn display_error(error: &Error, json: bool) {
    if json {
        if let Some(app_error) = error.downcast_ref::<AppError>() {
            let response = ErrorResponse::from(app_error);
            if let Ok(text) = serde_json::to_string_pretty(&response) {
                println!("{text}");
                return;
            }
        }
    }
    eprintln!("Error: {error:#}");
}
