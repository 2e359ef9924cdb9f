//! Planner error types

use thiserror::Error;

/// Errors that can occur in planner operations
#[derive(Debug, Error)]
pub enum Error {
    #[error("Ingredient text is empty")]
    EmptyIngredient,

    #[error("Unknown meal type: {0} (expected breakfast|lunch|dinner)")]
    UnknownMealType(String),

    #[error("Unknown day: {0} (expected monday..sunday)")]
    UnknownDay(String),

    #[error("Invalid slot key: {0} (expected <mealType>-<day>)")]
    InvalidSlotKey(String),

    #[error(transparent)]
    Store(#[from] kvstore::StoreError),
}
