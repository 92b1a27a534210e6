// ABOUTME: Display labels for the shopping guide screen
// ABOUTME: Kept together so every front end renders the same wording
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Dipper Contributors

/// Unlock column label for an ingredient that is already stocked
pub const ADDED_LABEL: &str = "ADDED";

/// Unlock column label for an ingredient that unlocks nothing
pub const NO_UNLOCK_LABEL: &str = "—";

/// Banner shown when no cocktail can be poured yet
pub const EMPTY_BANNER: &str = "SELECT INGREDIENTS BELOW";

/// Separator between cocktail names in the availability banner
pub const BANNER_SEPARATOR: &str = ", ";
