//! CLI argument parsing for todolist

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::task::TaskFilter;

#[derive(Parser, Debug)]
#[command(name = "tl")]
#[command(author, version, about = "To-do list manager", long_about = None)]
pub struct Cli {
    /// Path to config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Add a task
    Add {
        /// Task text
        #[arg(required = true)]
        text: String,
    },

    /// List tasks
    List {
        /// View filter: all, active, or completed
        #[arg(short, long, default_value = "all")]
        filter: TaskFilter,
    },

    /// Flip completion on a task
    Toggle {
        /// Task id
        #[arg(required = true)]
        id: i64,
    },

    /// Delete a task
    Delete {
        /// Task id
        #[arg(required = true)]
        id: i64,
    },

    /// Remove all completed tasks
    ClearCompleted,

    /// Remove every task
    ClearAll,

    /// Show aggregate counts
    Stats,
}
