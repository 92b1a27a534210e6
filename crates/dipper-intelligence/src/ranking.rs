// ABOUTME: Ranker ordering the ingredient universe for the shopping guide
// ABOUTME: Stocked first, then unlock score descending, then name ascending
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Dipper Contributors

use std::cmp::Reverse;

use crate::selection::Stocked;
use crate::unlock::UnlockMap;

/// `rank(universe, selection, unlockMap) -> ordered sequence of ingredient`
///
/// The name tie-break makes the order reproducible regardless of the order
/// of `universe`.
#[must_use]
pub fn rank<S: Stocked + ?Sized>(universe: &[&str], stock: &S, unlocks: &UnlockMap) -> Vec<String> {
    let mut ranked: Vec<&str> = universe.to_vec();
    ranked.sort_by_key(|&ingredient| {
        (
            !stock.is_stocked(ingredient),
            Reverse(unlocks.get(ingredient)),
            ingredient,
        )
    });
    ranked.dedup();
    ranked.into_iter().map(str::to_owned).collect()
}
