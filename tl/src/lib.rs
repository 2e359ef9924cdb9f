//! TodoList - to-do list manager core
//!
//! An ordered list of task records (newest first) with completion flags,
//! backed by a single persisted JSON record. Every mutating operation
//! writes the complete list back to the store before returning, so the
//! persisted record is always a full snapshot of in-memory state.
//!
//! # Core Concepts
//!
//! - **Write-through**: persistence is a side effect of the store, not the
//!   caller
//! - **Idempotent by design**: toggling or deleting an unknown id is a
//!   no-op, never an error
//! - **Malformed-is-absent**: a missing or unparseable persisted list loads
//!   as an empty list
//!
//! # Modules
//!
//! - [`task`] - task record, filters, and stats
//! - [`store`] - list state with write-through persistence
//! - [`config`] - configuration types and loading
//! - [`cli`] - command-line interface

pub mod cli;
pub mod config;
pub mod error;
pub mod store;
pub mod task;

pub use error::Error;
pub use store::{TodoStore, TODOS_KEY};
pub use task::{Task, TaskFilter, TaskStats};
