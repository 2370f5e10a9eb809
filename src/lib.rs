pub mod catalog;
pub mod cli;
pub mod error;
pub mod interface;
pub mod logging;
pub mod models;
pub mod planner;

pub use catalog::FoodCatalog;
pub use error::{PlannerError, Result};
pub use models::{DailyMealPlan, FoodItem, Macros, Meal, MealSlot, MealSplit, MacroTargets};
