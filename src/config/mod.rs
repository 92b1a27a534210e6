// ABOUTME: Configuration module for the Dipper front ends
// ABOUTME: Environment-only configuration; there are no config files
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Dipper Contributors

/// Environment variable configuration loading
pub mod environment;

pub use environment::{AppConfig, Environment};
