//! List state with write-through persistence
//!
//! The store owns the in-memory task list and persists the complete list
//! under the `"todos"` record key after every mutation. Reads never touch
//! the backing store.

use kvstore::KvStore;
use std::path::Path;
use tracing::debug;

use crate::error::Error;
use crate::task::{Task, TaskFilter, TaskStats};

/// Record key for the persisted task list
pub const TODOS_KEY: &str = "todos";

/// The to-do list store
pub struct TodoStore {
    kv: KvStore,
    tasks: Vec<Task>,
}

impl TodoStore {
    /// Open the store and restore the persisted list
    ///
    /// An absent or malformed record restores as an empty list.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, Error> {
        let kv = KvStore::open(path)?;
        let tasks: Vec<Task> = kv.load(TODOS_KEY).unwrap_or_default();
        debug!(count = tasks.len(), "Restored task list");
        Ok(Self { kv, tasks })
    }

    /// Wrap an already-open store
    pub fn with_store(kv: KvStore) -> Self {
        let tasks: Vec<Task> = kv.load(TODOS_KEY).unwrap_or_default();
        Self { kv, tasks }
    }

    /// Add a task, newest first
    ///
    /// Fails with [`Error::EmptyText`] when the text trims to nothing;
    /// the list is left unchanged and nothing is persisted.
    pub fn add(&mut self, text: &str) -> Result<Task, Error> {
        let text = text.trim();
        if text.is_empty() {
            return Err(Error::EmptyText);
        }

        let task = Task::new(self.next_id(), text);
        self.tasks.insert(0, task.clone());
        self.persist()?;
        Ok(task)
    }

    /// Flip completion on a task
    ///
    /// Returns whether a task with the id existed; unknown ids are a no-op.
    pub fn toggle(&mut self, id: i64) -> Result<bool, Error> {
        match self.tasks.iter_mut().find(|t| t.id == id) {
            Some(task) => {
                task.completed = !task.completed;
                self.persist()?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Remove a task
    ///
    /// Returns whether a task with the id existed; unknown ids are a no-op.
    pub fn delete(&mut self, id: i64) -> Result<bool, Error> {
        let before = self.tasks.len();
        self.tasks.retain(|t| t.id != id);
        if self.tasks.len() == before {
            return Ok(false);
        }

        self.persist()?;
        Ok(true)
    }

    /// Tasks matching a filter, list order preserved
    pub fn filter(&self, filter: TaskFilter) -> Vec<&Task> {
        self.tasks.iter().filter(|t| filter.matches(t)).collect()
    }

    /// Remove all completed tasks, returning how many were removed
    pub fn clear_completed(&mut self) -> Result<usize, Error> {
        let before = self.tasks.len();
        self.tasks.retain(|t| !t.completed);
        let removed = before - self.tasks.len();

        if removed > 0 {
            self.persist()?;
        }
        Ok(removed)
    }

    /// Empty the list unconditionally
    pub fn clear_all(&mut self) -> Result<(), Error> {
        self.tasks.clear();
        self.persist()?;
        Ok(())
    }

    /// Aggregate counts over the current list
    pub fn stats(&self) -> TaskStats {
        let total = self.tasks.len();
        let completed = self.tasks.iter().filter(|t| t.completed).count();
        TaskStats {
            total,
            active: total - completed,
            completed,
        }
    }

    /// The full list, newest first
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Next unique id: the creation instant in unix ms, bumped past the
    /// current maximum on same-instant collision
    fn next_id(&self) -> i64 {
        let now = chrono::Utc::now().timestamp_millis();
        let max = self.tasks.iter().map(|t| t.id).max().unwrap_or(0);
        now.max(max + 1)
    }

    fn persist(&self) -> Result<(), Error> {
        self.kv.save(TODOS_KEY, &self.tasks)?;
        Ok(())
    }
}
