//! MealPlan - weekly meal planner core
//!
//! Plans one week of meals across 21 slots (3 meal types x 7 days), with
//! ingredient-based meal suggestions drawn from a builtin catalog. State
//! lives in memory as plain values; persistence is a complete-snapshot
//! write of the plan under a single record key.
//!
//! # Core Concepts
//!
//! - **Pure transitions**: selecting, randomizing, and clearing mutate an
//!   in-memory [`MealPlan`] value; the caller persists via [`PlanStore`]
//! - **Fuzzy suggestions**: case-insensitive symmetric substring matching
//!   between user ingredients and catalog ingredient tokens
//! - **Malformed-is-absent**: a missing or unparseable persisted plan loads
//!   as an empty plan, never an error
//!
//! # Modules
//!
//! - [`catalog`] - builtin meal catalog
//! - [`suggest`] - ingredient-based suggestion engine
//! - [`plan`] - weekly plan state and persistence
//! - [`ingredients`] - user ingredient filter set
//! - [`domain`] - meal type, day, and slot key types
//! - [`config`] - configuration types and loading
//! - [`cli`] - command-line interface

pub mod catalog;
pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod ingredients;
pub mod plan;
pub mod suggest;

pub use catalog::Catalog;
pub use domain::{Day, Meal, MealType, SlotKey};
pub use error::Error;
pub use ingredients::IngredientSet;
pub use plan::{MealPlan, PlanStore, PLAN_KEY};
pub use suggest::{MealMatch, SuggestionEngine, MAX_MATCHES, RANDOM_SAMPLE_SIZE};
