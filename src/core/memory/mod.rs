//! In-memory store implementations
//!
//! Thread-safe implementations of the store traits backed by `DashMap`:
//! - `MemoryCategoryStore` - Categories with a unique title index
//! - `MemoryTransactionStore` - Transactions with monotonic ids

pub mod category_store;
pub mod transaction_store;

pub use category_store::MemoryCategoryStore;
pub use transaction_store::MemoryTransactionStore;
