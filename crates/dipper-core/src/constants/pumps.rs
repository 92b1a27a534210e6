// ABOUTME: Pump capacity constants for dispenser-slot bounded ingredient selection
// ABOUTME: The default mirrors the eight-pump reference machine
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Dipper Contributors

/// Number of pumps on the reference machine, used when no capacity is configured
pub const DEFAULT_PUMP_CAPACITY: usize = 8;

/// Upper bound accepted for a configured pump capacity
pub const MAX_PUMP_CAPACITY: usize = 64;
