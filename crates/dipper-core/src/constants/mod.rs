// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Pure data constants for pump capacity, caching, environment keys, and display
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Dipper Contributors

//! Constants module
//!
//! Constants are grouped by domain rather than being in a single large file.

/// Pump and capacity constants
pub mod pumps;
/// Guide cache sizing constants
pub mod cache;
/// Environment variable names read by configuration loaders
pub mod env_keys;
/// Labels used when rendering the shopping guide
pub mod display;

/// Service identifiers used in structured logging
pub mod service_names {
    /// Name of the command-line front end
    pub const DIPPER_CLI: &str = "dipper-cli";
}
