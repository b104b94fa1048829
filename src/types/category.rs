//! Category entity
//!
//! Categories group transactions under a title. They are created lazily by the
//! importer the first time a title is referenced and are never mutated or
//! deleted afterwards.

/// Store-assigned category identifier
pub type CategoryId = u64;

/// Persisted category
///
/// Titles are unique within a store and compared case-sensitively.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    /// Identifier assigned by the category store
    pub id: CategoryId,

    /// Category title, exactly as it appeared (trimmed) in the import file
    pub title: String,
}

/// Result of a conflict-tolerant category insert
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InsertedCategory {
    pub category: Category,

    /// `false` when the title already existed and no row was added
    pub created: bool,
}
