//! Batch-level category resolution
//!
//! Maps every category title referenced by a batch to a persisted
//! [`Category`], creating the missing ones in a single batched store call.
//!
//! # Algorithm
//!
//! 1. Collect distinct titles in first-occurrence order (exact, case-sensitive)
//! 2. Look each title up in the store
//! 3. Create all titles that were not found with one `insert_many` call
//! 4. Return a [`CategoryMap`] the transaction writer resolves records against
//!
//! The store's `insert_many` is conflict-tolerant, so a title created by a
//! concurrent import between steps 2 and 3 is reused, not duplicated.

use crate::core::traits::CategoryStore;
use crate::types::{Category, ImportError, ValidatedRecord};
use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use tracing::debug;

/// Resolved categories of one batch, keyed by title
#[derive(Debug, Clone, Default)]
pub struct CategoryMap {
    by_title: HashMap<String, Category>,
    created: usize,
}

impl CategoryMap {
    /// Category for a record's category title
    ///
    /// Returns `None` for uncategorized records.
    pub fn get(&self, title: Option<&str>) -> Option<&Category> {
        title.and_then(|title| self.by_title.get(title))
    }

    /// Number of distinct categories referenced by the batch
    pub fn len(&self) -> usize {
        self.by_title.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_title.is_empty()
    }

    /// Number of categories this batch added to the store
    ///
    /// Titles another import created between lookup and insert are reused and
    /// not counted.
    pub fn created(&self) -> usize {
        self.created
    }
}

/// Distinct category titles of a batch in first-occurrence order
pub fn distinct_titles(records: &[ValidatedRecord]) -> Vec<String> {
    let mut seen = HashSet::new();
    records
        .iter()
        .filter_map(|record| record.category.as_deref())
        .filter(|title| seen.insert(*title))
        .map(str::to_owned)
        .collect()
}

/// Resolves batch category titles against a [`CategoryStore`]
#[derive(Debug)]
pub struct CategoryResolver<C: CategoryStore> {
    store: Arc<C>,
}

impl<C: CategoryStore> CategoryResolver<C> {
    pub fn new(store: Arc<C>) -> Self {
        Self { store }
    }

    /// Resolve every category title referenced by `records`
    ///
    /// # Errors
    ///
    /// Returns `ImportError::Store` if a lookup or the batched insert fails.
    /// Categories inserted before the failure stay in the store.
    pub async fn resolve(&self, records: &[ValidatedRecord]) -> Result<CategoryMap, ImportError> {
        let mut map = CategoryMap::default();
        let mut missing = Vec::new();

        for title in distinct_titles(records) {
            match self.store.find_by_title(&title).await? {
                Some(category) => {
                    map.by_title.insert(title, category);
                }
                None => missing.push(title),
            }
        }

        if !missing.is_empty() {
            for inserted in self.store.insert_many(&missing).await? {
                if inserted.created {
                    map.created += 1;
                }
                let category = inserted.category;
                map.by_title.insert(category.title.clone(), category);
            }
        }

        debug!(
            referenced = map.len(),
            created = map.created,
            "resolved categories"
        );

        Ok(map)
    }
}
