//! To-do list error types

use thiserror::Error;

/// Errors that can occur in list operations
#[derive(Debug, Error)]
pub enum Error {
    #[error("Task text is empty")]
    EmptyText,

    #[error("Unknown filter: {0} (expected all|active|completed)")]
    UnknownFilter(String),

    #[error(transparent)]
    Store(#[from] kvstore::StoreError),
}
