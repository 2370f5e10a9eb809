use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::PlannerError;
use crate::models::macros::Macros;

/// One of the three fixed daily meals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MealSlot {
    Breakfast,
    Lunch,
    Dinner,
}

impl MealSlot {
    /// All slots in the order a plan is assembled and displayed.
    pub const ALL: [MealSlot; 3] = [MealSlot::Breakfast, MealSlot::Lunch, MealSlot::Dinner];

    /// Display name ("Breakfast", "Lunch", "Dinner").
    pub fn name(self) -> &'static str {
        match self {
            MealSlot::Breakfast => "Breakfast",
            MealSlot::Lunch => "Lunch",
            MealSlot::Dinner => "Dinner",
        }
    }

    /// Lowercase key used in catalog files and on the command line.
    pub fn key(self) -> &'static str {
        match self {
            MealSlot::Breakfast => "breakfast",
            MealSlot::Lunch => "lunch",
            MealSlot::Dinner => "dinner",
        }
    }
}

impl fmt::Display for MealSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for MealSlot {
    type Err = PlannerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "breakfast" => Ok(MealSlot::Breakfast),
            "lunch" => Ok(MealSlot::Lunch),
            "dinner" => Ok(MealSlot::Dinner),
            other => Err(PlannerError::InvalidInput(format!(
                "unknown meal slot '{}' (expected breakfast, lunch or dinner)",
                other
            ))),
        }
    }
}

/// A catalog food with per-serving nutrition.
///
/// Calories are stored as given, not derived from the macros.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FoodItem {
    pub name: String,
    pub serving_size: String,
    pub carbs: f64,
    pub protein: f64,
    pub fat: f64,
    pub calories: f64,
}

impl FoodItem {
    pub fn new(
        name: &str,
        serving_size: &str,
        carbs: f64,
        protein: f64,
        fat: f64,
        calories: f64,
    ) -> Self {
        Self {
            name: name.to_string(),
            serving_size: serving_size.to_string(),
            carbs,
            protein,
            fat,
            calories,
        }
    }

    /// The three macros of one serving.
    #[inline]
    pub fn macros(&self) -> Macros {
        Macros::new(self.carbs, self.protein, self.fat)
    }

    /// Basic validation: non-empty name, finite and non-negative values.
    pub fn is_valid(&self) -> bool {
        !self.name.trim().is_empty()
            && [self.carbs, self.protein, self.fat, self.calories]
                .into_iter()
                .all(|v| v.is_finite() && v >= 0.0)
    }

    /// Debug string for logging.
    pub fn debug_string(&self) -> String {
        format!(
            "{} ({}): C:{} P:{} F:{}, {} cal",
            self.name, self.serving_size, self.carbs, self.protein, self.fat, self.calories
        )
    }

    /// Canonical key for duplicate detection (lowercase name).
    pub fn key(&self) -> String {
        self.name.trim().to_lowercase()
    }
}
