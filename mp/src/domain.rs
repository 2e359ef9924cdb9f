//! Meal type, day, and slot key types
//!
//! A slot identifies one cell of the weekly plan and renders as
//! `"<mealType>-<day>"`, e.g. `"lunch-tuesday"`. There are exactly 21
//! valid slots (3 meal types x 7 days).

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Meal category within the weekly plan
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MealType {
    Breakfast,
    Lunch,
    Dinner,
}

impl MealType {
    /// All meal types in plan order
    pub const ALL: [MealType; 3] = [Self::Breakfast, Self::Lunch, Self::Dinner];

    /// Korean display label
    pub fn label_ko(&self) -> &'static str {
        match self {
            Self::Breakfast => "아침",
            Self::Lunch => "점심",
            Self::Dinner => "저녁",
        }
    }
}

impl std::fmt::Display for MealType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Breakfast => write!(f, "breakfast"),
            Self::Lunch => write!(f, "lunch"),
            Self::Dinner => write!(f, "dinner"),
        }
    }
}

impl std::str::FromStr for MealType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "breakfast" => Ok(Self::Breakfast),
            "lunch" => Ok(Self::Lunch),
            "dinner" => Ok(Self::Dinner),
            _ => Err(Error::UnknownMealType(s.to_string())),
        }
    }
}

/// Day of the week
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Day {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Day {
    /// All days in week order
    pub const ALL: [Day; 7] = [
        Self::Monday,
        Self::Tuesday,
        Self::Wednesday,
        Self::Thursday,
        Self::Friday,
        Self::Saturday,
        Self::Sunday,
    ];

    /// Korean display label
    pub fn label_ko(&self) -> &'static str {
        match self {
            Self::Monday => "월요일",
            Self::Tuesday => "화요일",
            Self::Wednesday => "수요일",
            Self::Thursday => "목요일",
            Self::Friday => "금요일",
            Self::Saturday => "토요일",
            Self::Sunday => "일요일",
        }
    }
}

impl std::fmt::Display for Day {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Monday => write!(f, "monday"),
            Self::Tuesday => write!(f, "tuesday"),
            Self::Wednesday => write!(f, "wednesday"),
            Self::Thursday => write!(f, "thursday"),
            Self::Friday => write!(f, "friday"),
            Self::Saturday => write!(f, "saturday"),
            Self::Sunday => write!(f, "sunday"),
        }
    }
}

impl std::str::FromStr for Day {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "monday" => Ok(Self::Monday),
            "tuesday" => Ok(Self::Tuesday),
            "wednesday" => Ok(Self::Wednesday),
            "thursday" => Ok(Self::Thursday),
            "friday" => Ok(Self::Friday),
            "saturday" => Ok(Self::Saturday),
            "sunday" => Ok(Self::Sunday),
            _ => Err(Error::UnknownDay(s.to_string())),
        }
    }
}

/// One cell of the weekly plan
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SlotKey {
    pub meal_type: MealType,
    pub day: Day,
}

impl SlotKey {
    /// Create a slot key
    pub fn new(meal_type: MealType, day: Day) -> Self {
        Self { meal_type, day }
    }

    /// All 21 valid slots, meal-type-major then week order
    pub fn all() -> impl Iterator<Item = SlotKey> {
        MealType::ALL
            .into_iter()
            .flat_map(|meal_type| Day::ALL.into_iter().map(move |day| SlotKey::new(meal_type, day)))
    }
}

impl std::fmt::Display for SlotKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.meal_type, self.day)
    }
}

impl std::str::FromStr for SlotKey {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (meal_type, day) = s.split_once('-').ok_or_else(|| Error::InvalidSlotKey(s.to_string()))?;

        Ok(Self {
            meal_type: meal_type.parse().map_err(|_| Error::InvalidSlotKey(s.to_string()))?,
            day: day.parse().map_err(|_| Error::InvalidSlotKey(s.to_string()))?,
        })
    }
}

/// A catalog entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Meal {
    /// Display name, unique within its category
    pub name: String,

    /// Short description
    pub description: String,

    /// Ingredient tokens used for fuzzy matching
    pub ingredients: Vec<String>,
}
