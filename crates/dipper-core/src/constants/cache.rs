// ABOUTME: Cache-related constants for shopping guide memoization
// ABOUTME: Bounds the number of derived guides kept per session
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Dipper Contributors

/// Default maximum number of memoized shopping guides per session
pub const DEFAULT_GUIDE_CACHE_ENTRIES: usize = 64;
