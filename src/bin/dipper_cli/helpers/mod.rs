// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Dipper Contributors
// ABOUTME: Re-exports helper modules for dipper-cli
// ABOUTME: Provides display formatting and stock argument parsing utilities

pub mod display;
pub mod stock;
