//! KvStore - single-blob JSON document store
//!
//! Persists whole serialized documents under string keys, one file per key.
//! Every save is a complete overwrite of the prior record; there are no
//! partial writes and no merging. Absent or malformed records read back as
//! "no data" so callers can always start from an empty state.
//!
//! # Architecture
//!
//! ```text
//! {store_path}/
//! ├── mealPlan.json
//! └── todos.json
//! ```
//!
//! # Example
//!
//! ```ignore
//! use kvstore::KvStore;
//!
//! let store = KvStore::open(".store")?;
//! store.save("todos", &tasks)?;
//! let tasks: Vec<Task> = store.load("todos").unwrap_or_default();
//! ```

mod store;

pub use store::{KvStore, StoreError};

/// Result alias for store operations
pub type Result<T> = std::result::Result<T, StoreError>;
