//! Thread-safe in-memory category store
//!
//! This module provides the `MemoryCategoryStore` struct, which keeps
//! categories in a concurrent map keyed by title.
//!
//! # Design
//!
//! Keying the map by title gives the store a unique title index. Inserts go
//! through DashMap's entry API, so "find or create" for one title is atomic:
//! two imports racing on the same new title both end up with the same
//! category instead of two rows with the same title.

use crate::core::traits::CategoryStore;
use crate::types::{Category, CategoryId, InsertedCategory, StoreError};
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use std::sync::atomic::{AtomicU64, Ordering};

/// Thread-safe category store
///
/// Ids are assigned from a monotonic counter starting at 1.
#[derive(Debug)]
pub struct MemoryCategoryStore {
    /// Categories by exact title
    categories: DashMap<String, Category>,

    /// Next id to hand out
    next_id: AtomicU64,
}

impl MemoryCategoryStore {
    /// Create a new empty MemoryCategoryStore
    pub fn new() -> Self {
        Self {
            categories: DashMap::new(),
            next_id: AtomicU64::new(1),
        }
    }

    /// Number of stored categories
    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// Insert `title` unless it already exists, returning the stored category
    fn find_or_create(&self, title: &str) -> InsertedCategory {
        match self.categories.entry(title.to_string()) {
            Entry::Occupied(entry) => InsertedCategory {
                category: entry.get().clone(),
                created: false,
            },
            Entry::Vacant(entry) => {
                let category = Category {
                    id: self.allocate_id(),
                    title: title.to_string(),
                };
                entry.insert(category.clone());
                InsertedCategory {
                    category,
                    created: true,
                }
            }
        }
    }

    fn allocate_id(&self) -> CategoryId {
        self.next_id.fetch_add(1, Ordering::Relaxed)
    }
}

impl Default for MemoryCategoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl CategoryStore for MemoryCategoryStore {
    async fn find_by_title(&self, title: &str) -> Result<Option<Category>, StoreError> {
        Ok(self
            .categories
            .get(title)
            .map(|entry| entry.value().clone()))
    }

    async fn insert_many(&self, titles: &[String]) -> Result<Vec<InsertedCategory>, StoreError> {
        Ok(titles
            .iter()
            .map(|title| self.find_or_create(title))
            .collect())
    }

    async fn all(&self) -> Result<Vec<Category>, StoreError> {
        let mut categories: Vec<Category> = self
            .categories
            .iter()
            .map(|entry| entry.value().clone())
            .collect();
        categories.sort_by_key(|category| category.id);
        Ok(categories)
    }
}
