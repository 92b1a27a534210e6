// ABOUTME: Ingredient planning engine for pump-bounded cocktail machines
// ABOUTME: Availability, unlock scoring, usage counting, ranking, memoization, and sessions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Dipper Contributors

#![deny(unsafe_code)]

//! # Dipper Intelligence
//!
//! Given a recipe catalog and the set of ingredients loaded on the pumps,
//! this crate derives four views, all pure functions of those two inputs:
//!
//! - **availability**: recipes whose every ingredient is stocked
//! - **unlock**: for each unstocked ingredient, recipes it alone would add
//! - **usage**: recipes referencing each ingredient (catalog only)
//! - **ranking**: stocked ingredients first, then by unlock score
//!
//! [`session::PlannerSession`] owns the one piece of mutable state, the
//! [`selection::Selection`], and recomputes (or recalls) the views after
//! every toggle.
//!
//! ## Example
//!
//! ```rust
//! use std::sync::Arc;
//! use dipper_core::models::{Catalog, Cocktail, IngredientLine};
//! use dipper_intelligence::{PlannerConfig, PlannerSession};
//!
//! let catalog = Catalog::new(vec![Cocktail::new(
//!     "Gin Tonic",
//!     vec![IngredientLine::new("gin", 4.0, "cl"), IngredientLine::new("tonic", 12.0, "cl")],
//! )]);
//! let mut session =
//!     PlannerSession::new(Arc::new(catalog), &PlannerConfig::with_pump_capacity(2))?;
//!
//! session.toggle("gin");
//! assert_eq!(session.guide().unlocks.get("tonic"), 1);
//! # Ok::<(), dipper_intelligence::ConfigError>(())
//! ```

/// Recipe availability evaluation and missing-ingredient reports
pub mod availability;
/// Planner configuration (pump capacity, cache size)
pub mod config;
/// Shopping guide snapshot
pub mod guide;
/// LRU memoization of shopping guides
pub mod memo;
/// Ingredient ranking for display
pub mod ranking;
/// Capacity-bounded selection state and toggle
pub mod selection;
/// Session holding catalog and selection
pub mod session;
/// Unlock scoring
pub mod unlock;
/// Ingredient usage counts
pub mod usage;

pub use availability::{
    availability_report, can_make, evaluate, missing_ingredients, Availability,
    CocktailAvailability,
};
pub use config::{ConfigError, PlannerConfig};
pub use guide::{IngredientRow, ShoppingGuide};
pub use memo::GuideCache;
pub use ranking::rank;
pub use selection::{Selection, SelectionError, Stocked, ToggleOutcome, WithCandidate};
pub use session::PlannerSession;
pub use unlock::{score, UnlockMap};
pub use usage::{usage_counts, UsageMap};
