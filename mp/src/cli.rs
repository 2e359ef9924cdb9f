//! CLI argument parsing for mealplan

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::domain::SlotKey;

#[derive(Parser, Debug)]
#[command(name = "mp")]
#[command(author, version, about = "Weekly meal planner", long_about = None)]
pub struct Cli {
    /// Path to config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Suggest meals matching the given ingredients
    Suggest {
        /// Ingredient tokens; empty for a random sample
        ingredients: Vec<String>,
    },

    /// Assign a meal to a plan slot
    Select {
        /// Slot to fill, e.g. lunch-tuesday
        #[arg(required = true)]
        slot: SlotKey,

        /// Meal name to assign
        #[arg(required = true)]
        meal: String,
    },

    /// Show the weekly plan
    Show,

    /// Fill every slot with a random meal
    Random,

    /// Clear the whole plan
    Clear,
}
