// ABOUTME: Core types and constants for the Dipper cocktail planning engine
// ABOUTME: Foundation crate with error handling, catalog models, and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Dipper Contributors

#![deny(unsafe_code)]

//! # Dipper Core
//!
//! Foundation crate providing shared types and constants for the Dipper
//! ingredient planner. This crate is designed to change infrequently, enabling
//! incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError` and `ErrorCode`
//! - **constants**: Pump capacity, cache sizing, environment keys, display labels
//! - **models**: `Cocktail`, `IngredientLine`, and the immutable `Catalog` snapshot

/// Unified error handling system with standard error codes
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Recipe catalog data models
pub mod models;
