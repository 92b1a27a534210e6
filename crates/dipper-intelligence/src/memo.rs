// ABOUTME: Bounded LRU memoization of shopping guides keyed on catalog version and selection
// ABOUTME: Recomputing from scratch is always correct; the cache only saves work on revisits
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Dipper Contributors

use std::num::NonZeroUsize;
use std::sync::Arc;

use dipper_core::constants::cache::DEFAULT_GUIDE_CACHE_ENTRIES;
use dipper_core::models::Catalog;
use lru::LruCache;
use tracing::debug;
use uuid::Uuid;

use crate::guide::ShoppingGuide;
use crate::selection::Selection;
use crate::usage::UsageMap;

/// Cache key: everything a guide is a pure function of
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct GuideKey {
    catalog_version: Uuid,
    capacity: usize,
    members: Vec<String>,
}

impl GuideKey {
    fn new(catalog: &Catalog, selection: &Selection) -> Self {
        Self {
            catalog_version: catalog.version(),
            capacity: selection.capacity(),
            members: selection.iter().cloned().collect(),
        }
    }
}

/// LRU cache of computed shopping guides
///
/// Toggling an ingredient on and off again revisits an earlier selection,
/// which is served from here instead of re-running the unlock simulation.
pub struct GuideCache {
    entries: LruCache<GuideKey, Arc<ShoppingGuide>>,
    hits: u64,
    misses: u64,
}

impl GuideCache {
    /// Capacity used when a zero size is requested
    const DEFAULT_CAPACITY: NonZeroUsize = match NonZeroUsize::new(DEFAULT_GUIDE_CACHE_ENTRIES) {
        Some(n) => n,
        None => unreachable!(),
    };

    /// Cache holding at most `max_entries` guides
    #[must_use]
    pub fn new(max_entries: usize) -> Self {
        let capacity = NonZeroUsize::new(max_entries).unwrap_or(Self::DEFAULT_CAPACITY);
        Self {
            entries: LruCache::new(capacity),
            hits: 0,
            misses: 0,
        }
    }

    /// Cached guide for `(catalog, selection)`, computing and storing it on a miss
    pub fn get_or_compute(
        &mut self,
        catalog: &Catalog,
        selection: &Selection,
        usage: &UsageMap,
    ) -> Arc<ShoppingGuide> {
        let key = GuideKey::new(catalog, selection);
        if let Some(guide) = self.entries.get(&key) {
            self.hits += 1;
            return Arc::clone(guide);
        }

        self.misses += 1;
        debug!(
            catalog.version = %key.catalog_version,
            selection.size = key.members.len(),
            "Computing shopping guide"
        );
        let guide = Arc::new(ShoppingGuide::compute(catalog, selection, usage));
        self.entries.put(key, Arc::clone(&guide));
        guide
    }

    /// Drop every cached guide
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Number of cached guides
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the cache is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Lookups served from the cache
    #[must_use]
    pub const fn hits(&self) -> u64 {
        self.hits
    }

    /// Lookups that had to compute a guide
    #[must_use]
    pub const fn misses(&self) -> u64 {
        self.misses
    }
}

impl Default for GuideCache {
    fn default() -> Self {
        Self::new(DEFAULT_GUIDE_CACHE_ENTRIES)
    }
}
