mod persistence;
mod standard;

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::{PlannerError, Result};
use crate::models::{FoodItem, MealSlot};

pub use persistence::{load_catalog, save_catalog};
pub use standard::STANDARD_CATALOG;

/// Candidate foods per meal slot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodCatalog {
    pub breakfast: Vec<FoodItem>,
    pub lunch: Vec<FoodItem>,
    pub dinner: Vec<FoodItem>,
}

impl FoodCatalog {
    /// The built-in catalog, six foods per slot.
    pub fn standard() -> &'static FoodCatalog {
        &STANDARD_CATALOG
    }

    /// Foods available for a slot.
    pub fn slot(&self, slot: MealSlot) -> &[FoodItem] {
        match slot {
            MealSlot::Breakfast => &self.breakfast,
            MealSlot::Lunch => &self.lunch,
            MealSlot::Dinner => &self.dinner,
        }
    }

    /// Total number of foods across all slots.
    pub fn len(&self) -> usize {
        MealSlot::ALL.iter().map(|&s| self.slot(s).len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Check every item and reject duplicate names within a slot.
    pub fn validate(&self) -> Result<()> {
        for slot in MealSlot::ALL {
            let mut seen = HashSet::new();
            for food in self.slot(slot) {
                if !food.is_valid() {
                    return Err(PlannerError::InvalidCatalog(format!(
                        "{}: invalid food {}",
                        slot.key(),
                        food.debug_string()
                    )));
                }
                if !seen.insert(food.key()) {
                    return Err(PlannerError::InvalidCatalog(format!(
                        "{}: duplicate food '{}'",
                        slot.key(),
                        food.name
                    )));
                }
            }
        }
        Ok(())
    }
}
