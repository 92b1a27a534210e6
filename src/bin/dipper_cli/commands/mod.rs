// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Dipper Contributors
// ABOUTME: Re-exports command modules for dipper-cli
// ABOUTME: Provides the guide, recipe availability, and ingredient commands

pub mod guide;
pub mod ingredients;
pub mod recipes;
