//! Weekly plan state and persistence
//!
//! [`MealPlan`] is the in-memory mapping from slot to meal name; all
//! transitions (select, randomize, clear) are plain mutations of the value.
//! [`PlanStore`] persists the whole plan as one JSON object under the
//! `"mealPlan"` record key and restores it on load. A missing or malformed
//! record loads as an empty plan.

use kvstore::KvStore;
use rand::Rng;
use rand::seq::IndexedRandom;
use std::collections::BTreeMap;
use std::path::Path;
use tracing::{debug, warn};

use crate::catalog::Catalog;
use crate::domain::SlotKey;
use crate::error::Error;

/// Record key for the persisted plan
pub const PLAN_KEY: &str = "mealPlan";

/// In-memory weekly plan
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MealPlan {
    /// Slot-keyed meal names; absent slots have no selection yet
    slots: BTreeMap<SlotKey, String>,
}

impl MealPlan {
    /// Create an empty plan
    pub fn new() -> Self {
        Self::default()
    }

    /// Set or overwrite the meal for a slot
    pub fn select(&mut self, slot: SlotKey, meal_name: impl Into<String>) {
        self.slots.insert(slot, meal_name.into());
    }

    /// The meal selected for a slot, if any
    pub fn get(&self, slot: SlotKey) -> Option<&str> {
        self.slots.get(&slot).map(|name| name.as_str())
    }

    /// Overwrite every slot with an independently-drawn random catalog meal
    ///
    /// Draws from the full catalog; any meal may land in any slot regardless
    /// of its category.
    pub fn randomize<R: Rng + ?Sized>(&mut self, catalog: &Catalog, rng: &mut R) {
        for slot in SlotKey::all() {
            if let Some((_, meal)) = catalog.entries().choose(rng) {
                self.select(slot, meal.name.clone());
            }
        }
    }

    /// Reset to an empty plan
    pub fn clear(&mut self) {
        self.slots.clear();
    }

    /// Iterate filled slots in slot order
    pub fn iter(&self) -> impl Iterator<Item = (SlotKey, &str)> {
        self.slots.iter().map(|(slot, name)| (*slot, name.as_str()))
    }

    /// Number of filled slots
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Check if no slot has a selection
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

/// Persistence for the weekly plan
pub struct PlanStore {
    kv: KvStore,
}

impl PlanStore {
    /// Open or create the backing store at the given path
    pub fn open(path: impl AsRef<Path>) -> Result<Self, Error> {
        Ok(Self {
            kv: KvStore::open(path)?,
        })
    }

    /// Wrap an already-open store
    pub fn with_store(kv: KvStore) -> Self {
        Self { kv }
    }

    /// Restore the persisted plan
    ///
    /// Absent or malformed records load as an empty plan. Entries with slot
    /// keys outside the 21 valid combinations are dropped.
    pub fn load(&self) -> MealPlan {
        let raw: BTreeMap<String, String> = match self.kv.load(PLAN_KEY) {
            Some(raw) => raw,
            None => return MealPlan::new(),
        };

        let mut plan = MealPlan::new();
        for (key, name) in raw {
            match key.parse::<SlotKey>() {
                Ok(slot) => plan.select(slot, name),
                Err(e) => warn!(key, error = %e, "Dropping entry with invalid slot key"),
            }
        }

        debug!(slots = plan.len(), "Restored meal plan");
        plan
    }

    /// Persist the whole plan, replacing any prior record
    pub fn save(&self, plan: &MealPlan) -> Result<(), Error> {
        let raw: BTreeMap<String, String> = plan
            .iter()
            .map(|(slot, name)| (slot.to_string(), name.to_string()))
            .collect();

        self.kv.save(PLAN_KEY, &raw)?;
        Ok(())
    }
}
