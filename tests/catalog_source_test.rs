// ABOUTME: Integration tests for file-backed and in-memory catalog sources
// ABOUTME: Covers JSON and YAML layouts, field aliases, and loader error codes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Dipper Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use std::fs;
use std::path::Path;

use common::cocktail;
use dipper::catalog::file::parse_catalog;
use dipper::catalog::{CatalogFormat, CatalogSource, FileCatalogSource, StaticCatalogSource};
use dipper::errors::ErrorCode;
use dipper::models::CatalogIssue;
use tempfile::TempDir;

const JSON_CATALOG: &str = r#"[
  {
    "name": "Screwdriver",
    "timing": "ALL_DAY",
    "taste": "SWEET",
    "ingredients": [
      { "ingredient": "vodka", "amount": 5, "unit": "cl" },
      { "ingredient": "orange juice", "amount": 10, "unit": "cl" }
    ],
    "preparation": "Pour over ice.",
    "glass_type": "highball"
  },
  {
    "name": "Vodka Shot",
    "ingredients": [{ "liquid": "vodka", "amount": 4, "unit": "cl" }]
  }
]"#;

const YAML_CATALOG: &str = "
cocktails:
  - name: Gin Tonic
    garnish: lime wedge
    ingredients:
      - ingredient: gin
        amount: 5
        unit: cl
      - ingredient: tonic
        amount: 15
        unit: cl
";

fn write(dir: &TempDir, name: &str, contents: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).unwrap();
    path
}

#[test]
fn test_load_json_array() {
    let dir = TempDir::new().unwrap();
    let source = FileCatalogSource::new(write(&dir, "cocktails.json", JSON_CATALOG));

    let catalog = source.load().unwrap();

    assert_eq!(catalog.len(), 2);
    let (_, screwdriver) = catalog.find("Screwdriver").unwrap();
    assert_eq!(screwdriver.glass_type.as_deref(), Some("highball"));
    assert!(screwdriver.requires("orange juice"));
    assert_eq!(catalog.universe(), vec!["orange juice", "vodka"]);
}

#[test]
fn test_liquid_is_accepted_for_ingredient() {
    let catalog = parse_catalog(JSON_CATALOG, CatalogFormat::Json).unwrap();
    let (_, shot) = catalog.find("Vodka Shot").unwrap();

    assert_eq!(shot.requirement_names().collect::<Vec<_>>(), vec!["vodka"]);
}

#[test]
fn test_load_wrapped_yaml() {
    let dir = TempDir::new().unwrap();
    let source = FileCatalogSource::new(write(&dir, "bar.yml", YAML_CATALOG));

    let catalog = source.load().unwrap();

    assert_eq!(catalog.len(), 1);
    let (index, gin_tonic) = catalog.find("Gin Tonic").unwrap();
    assert_eq!(index, 0);
    assert_eq!(gin_tonic.garnish.as_deref(), Some("lime wedge"));
    assert!(source.describe().starts_with("file:"));
}

#[test]
fn test_each_load_is_a_new_snapshot() {
    let dir = TempDir::new().unwrap();
    let source = FileCatalogSource::new(write(&dir, "cocktails.json", JSON_CATALOG));

    let first = source.load().unwrap();
    let second = source.load().unwrap();

    assert_ne!(first.version(), second.version());
}

#[test]
fn test_unsupported_extension_is_invalid_format() {
    let error = CatalogFormat::from_path(Path::new("cocktails.toml")).unwrap_err();

    assert_eq!(error.code, ErrorCode::InvalidFormat);
    assert_eq!(error.resource_id.as_deref(), Some("cocktails.toml"));
    assert_eq!(
        CatalogFormat::from_path(Path::new("BAR.YAML")).unwrap(),
        CatalogFormat::Yaml
    );
}

#[test]
fn test_missing_file_is_not_found() {
    let dir = TempDir::new().unwrap();
    let source = FileCatalogSource::new(dir.path().join("absent.json"));

    let error = source.load().unwrap_err();

    assert_eq!(error.code, ErrorCode::ResourceNotFound);
    assert_eq!(error.code.exit_code(), 3);
}

#[test]
fn test_malformed_catalog_is_serialization_error() {
    let dir = TempDir::new().unwrap();
    let json = FileCatalogSource::new(write(&dir, "broken.json", "{ \"cocktails\": 7 }"));
    let yaml = FileCatalogSource::new(write(&dir, "broken.yaml", "- name: [unclosed"));

    let json_error = json.load().unwrap_err();
    let yaml_error = yaml.load().unwrap_err();

    assert_eq!(json_error.code, ErrorCode::SerializationError);
    assert!(json_error.resource_id.unwrap().ends_with("broken.json"));
    assert_eq!(yaml_error.code, ErrorCode::SerializationError);
}

#[test]
fn test_static_source_lints_but_keeps_recipes() {
    let source = StaticCatalogSource::new(vec![
        cocktail("Vodka Shot", &["vodka"]),
        cocktail("Vodka Shot", &["vodka", "vodka"]),
        cocktail("Empty Glass", &[]),
    ]);

    let catalog = source.load().unwrap();
    let issues = catalog.lint();

    assert_eq!(catalog.len(), 3);
    assert_eq!(source.describe(), "memory:3 recipes");
    assert!(issues.contains(&CatalogIssue::DuplicateName {
        cocktail: "Vodka Shot".into()
    }));
    assert!(issues.contains(&CatalogIssue::DuplicateIngredient {
        cocktail: "Vodka Shot".into(),
        ingredient: "vodka".into()
    }));
    assert!(issues.contains(&CatalogIssue::NoRequirements {
        cocktail: "Empty Glass".into()
    }));
}

#[test]
fn test_lint_report_identifies_the_loaded_snapshot() {
    let dir = TempDir::new().unwrap();
    let source = FileCatalogSource::new(write(&dir, "cocktails.json", JSON_CATALOG));
    let catalog = source.load().unwrap();

    let report = catalog.lint_report();
    let json = serde_json::to_value(&report).unwrap();

    assert!(report.is_clean());
    assert_eq!(report.recipes, 2);
    assert_eq!(json["catalog_version"], catalog.version().to_string());
    assert!(json["loaded_at"].is_string());
    assert_eq!(json["issues"].as_array().unwrap().len(), 0);
}
