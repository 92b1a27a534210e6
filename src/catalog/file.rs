// ABOUTME: File-backed catalog source reading JSON or YAML recipe lists
// ABOUTME: Accepts a bare array of cocktails or an object with a cocktails field
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Dipper Contributors

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use dipper_core::errors::{AppError, AppResult};
use dipper_core::models::{Catalog, Cocktail};
use serde::Deserialize;
use tracing::info;

use super::{log_catalog_issues, CatalogSource};

/// Serialization format of a catalog file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogFormat {
    /// `.json`
    Json,
    /// `.yaml` / `.yml`
    Yaml,
}

impl CatalogFormat {
    /// Detect the format from the file extension
    ///
    /// # Errors
    ///
    /// Returns an `InvalidFormat` error for any other extension
    pub fn from_path(path: &Path) -> AppResult<Self> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);

        match extension.as_deref() {
            Some("json") => Ok(Self::Json),
            Some("yaml" | "yml") => Ok(Self::Yaml),
            other => Err(AppError::invalid_format(format!(
                "unsupported catalog extension '{}' (expected .json, .yaml or .yml)",
                other.unwrap_or("")
            ))
            .with_resource_id(path.display().to_string())),
        }
    }
}

/// On-disk catalog layouts
#[derive(Deserialize)]
#[serde(untagged)]
enum CatalogDocument {
    List(Vec<Cocktail>),
    Wrapped { cocktails: Vec<Cocktail> },
}

impl CatalogDocument {
    fn into_cocktails(self) -> Vec<Cocktail> {
        match self {
            Self::List(cocktails) | Self::Wrapped { cocktails } => cocktails,
        }
    }
}

/// Parse catalog text in the given format
///
/// # Errors
///
/// Returns a `SerializationError` if the text is not a valid catalog
pub fn parse_catalog(text: &str, format: CatalogFormat) -> AppResult<Catalog> {
    let document: CatalogDocument = match format {
        CatalogFormat::Json => serde_json::from_str(text)?,
        CatalogFormat::Yaml => serde_yaml::from_str(text).map_err(|e| {
            AppError::serialization(format!("YAML error: {e}")).with_source(e)
        })?,
    };
    Ok(Catalog::new(document.into_cocktails()))
}

/// Catalog read from a JSON or YAML file on every load
#[derive(Debug, Clone)]
pub struct FileCatalogSource {
    path: PathBuf,
}

impl FileCatalogSource {
    /// Source reading `path`
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl CatalogSource for FileCatalogSource {
    fn load(&self) -> AppResult<Catalog> {
        let format = CatalogFormat::from_path(&self.path)?;
        let resource = self.path.display().to_string();

        let text = fs::read_to_string(&self.path).map_err(|e| {
            if e.kind() == ErrorKind::NotFound {
                AppError::not_found(format!("Catalog file {resource}")).with_source(e)
            } else {
                AppError::storage(format!("Failed to read catalog {resource}: {e}"))
                    .with_resource_id(resource.clone())
                    .with_source(e)
            }
        })?;

        let catalog = parse_catalog(&text, format).map_err(|e| e.with_resource_id(resource.clone()))?;
        info!(
            catalog.path = %resource,
            catalog.version = %catalog.version(),
            catalog.recipes = catalog.len(),
            "Catalog loaded"
        );
        log_catalog_issues(&resource, &catalog);
        Ok(catalog)
    }

    fn describe(&self) -> String {
        format!("file:{}", self.path.display())
    }
}
