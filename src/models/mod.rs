mod food;
mod macros;
mod plan;

pub use food::{FoodItem, MealSlot};
pub use macros::{MacroTargets, Macros, MealSplit};
pub use plan::{DailyMealPlan, Meal, TotalNutrition};
