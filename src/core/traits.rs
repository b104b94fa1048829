//! Collaborator traits for the import pipeline
//!
//! The importer never looks stores up from an ambient registry. Everything it
//! talks to is handed in through these traits, so production stores, the
//! in-memory stores in [`crate::core::memory`] and test doubles are
//! interchangeable.
//!
//! All futures are `Send` so an import can be spawned onto a multi-threaded
//! runtime.

use crate::types::{
    Balance, Category, ImportError, InsertedCategory, NewTransaction, StoredTransaction,
    StoreError,
};
use futures::io::AsyncRead;
use std::future::Future;
use std::path::Path;

/// Persistent store of categories
///
/// Titles are unique within the store and matched case-sensitively.
pub trait CategoryStore: Send + Sync {
    /// Find a category by exact title
    fn find_by_title(
        &self,
        title: &str,
    ) -> impl Future<Output = Result<Option<Category>, StoreError>> + Send;

    /// Create and save categories for `titles` in one batched call
    ///
    /// Must tolerate title conflicts: when a title already exists (for example
    /// because a concurrent import created it) the existing category is
    /// returned with `created: false` instead of a duplicate. The result has
    /// one entry per input title, in input order.
    fn insert_many(
        &self,
        titles: &[String],
    ) -> impl Future<Output = Result<Vec<InsertedCategory>, StoreError>> + Send;

    /// All categories, ordered by id
    fn all(&self) -> impl Future<Output = Result<Vec<Category>, StoreError>> + Send;
}

/// Persistent store of transactions
pub trait TransactionStore: Send + Sync {
    /// Create and persist one transaction, assigning its id
    ///
    /// The returned row must carry the fields of `transaction` unchanged,
    /// `category_id` included. The importer nests the category it resolved,
    /// so a store that rewrites the reference is reported with a warning and
    /// otherwise ignored.
    fn save(
        &self,
        transaction: NewTransaction,
    ) -> impl Future<Output = Result<StoredTransaction, StoreError>> + Send;

    /// All transactions, ordered by id
    fn all(&self) -> impl Future<Output = Result<Vec<StoredTransaction>, StoreError>> + Send;

    /// Income, outcome and total over every stored transaction
    fn balance(&self) -> impl Future<Output = Result<Balance, StoreError>> + Send;
}

/// Access to the source file of an import
pub trait FileSystem: Send + Sync {
    /// Byte stream type returned by [`FileSystem::open_read`]
    type Reader: AsyncRead + Unpin + Send;

    /// Open `path` for streaming reads
    fn open_read(
        &self,
        path: &Path,
    ) -> impl Future<Output = Result<Self::Reader, ImportError>> + Send;

    /// Remove the file at `path`
    fn delete_file(&self, path: &Path) -> impl Future<Output = Result<(), ImportError>> + Send;
}
