// ABOUTME: Environment variable names for runtime configuration
// ABOUTME: Shared by the configuration loader and its tests
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Dipper Contributors

/// Number of pumps (simultaneously stocked ingredients)
pub const PUMP_CAPACITY: &str = "DIPPER_PUMP_CAPACITY";

/// Maximum memoized guides per session
pub const GUIDE_CACHE_ENTRIES: &str = "DIPPER_GUIDE_CACHE_ENTRIES";

/// Path to the recipe catalog file
pub const CATALOG_PATH: &str = "DIPPER_CATALOG_PATH";

/// Deployment environment (development, production, testing)
pub const ENVIRONMENT: &str = "ENVIRONMENT";
