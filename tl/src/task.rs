//! Task record, filters, and stats

use chrono::Local;
use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Display format for task creation timestamps
pub const CREATED_AT_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// A single to-do item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Unique id, monotonically increasing, derived from the creation instant
    pub id: i64,

    /// Task text, non-empty after trimming
    pub text: String,

    /// Completion flag
    pub completed: bool,

    /// Display-formatted creation timestamp, immutable after creation
    #[serde(rename = "createdAt")]
    pub created_at: String,
}

impl Task {
    /// Create a pending task stamped with the current local time
    pub(crate) fn new(id: i64, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
            completed: false,
            created_at: Local::now().format(CREATED_AT_FORMAT).to_string(),
        }
    }
}

/// View filter over the task list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TaskFilter {
    #[default]
    All,
    Active,
    Completed,
}

impl TaskFilter {
    /// Check whether a task belongs to this filter's view
    pub fn matches(&self, task: &Task) -> bool {
        match self {
            Self::All => true,
            Self::Active => !task.completed,
            Self::Completed => task.completed,
        }
    }
}

impl std::fmt::Display for TaskFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::All => write!(f, "all"),
            Self::Active => write!(f, "active"),
            Self::Completed => write!(f, "completed"),
        }
    }
}

impl std::str::FromStr for TaskFilter {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "all" => Ok(Self::All),
            "active" => Ok(Self::Active),
            "completed" => Ok(Self::Completed),
            _ => Err(Error::UnknownFilter(s.to_string())),
        }
    }
}

/// Aggregate task counts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaskStats {
    pub total: usize,
    pub active: usize,
    pub completed: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_task_is_pending() {
        let task = Task::new(1, "buy milk");
        assert_eq!(task.id, 1);
        assert_eq!(task.text, "buy milk");
        assert!(!task.completed);
        assert!(!task.created_at.is_empty());
    }

    #[test]
    fn test_filter_matches() {
        let mut task = Task::new(1, "task");
        assert!(TaskFilter::All.matches(&task));
        assert!(TaskFilter::Active.matches(&task));
        assert!(!TaskFilter::Completed.matches(&task));

        task.completed = true;
        assert!(TaskFilter::All.matches(&task));
        assert!(!TaskFilter::Active.matches(&task));
        assert!(TaskFilter::Completed.matches(&task));
    }

    #[test]
    fn test_filter_parse() {
        assert_eq!("all".parse::<TaskFilter>().unwrap(), TaskFilter::All);
        assert_eq!("ACTIVE".parse::<TaskFilter>().unwrap(), TaskFilter::Active);
        assert!("done".parse::<TaskFilter>().is_err());
    }

    #[test]
    fn test_task_serde_field_names() {
        let task = Task::new(42, "test");
        let json = serde_json::to_string(&task).unwrap();
        assert!(json.contains("\"createdAt\""));

        let deserialized: Task = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, task);
    }
}
