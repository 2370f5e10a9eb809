use serde::{Deserialize, Serialize};

use crate::models::food::{FoodItem, MealSlot};
use crate::models::macros::Macros;

/// Calories and macros for a day or a meal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct TotalNutrition {
    pub calories: f64,
    pub carbs: f64,
    pub protein: f64,
    pub fat: f64,
}

impl TotalNutrition {
    /// Daily summary for requested totals: macros verbatim, calories via Atwater.
    pub fn from_targets(daily: &Macros) -> Self {
        Self {
            calories: daily.calories(),
            carbs: daily.carbs,
            protein: daily.protein,
            fat: daily.fat,
        }
    }

    pub fn macros(&self) -> Macros {
        Macros::new(self.carbs, self.protein, self.fat)
    }
}

/// Foods selected for one meal, in selection order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Meal {
    #[serde(rename = "name")]
    pub slot: MealSlot,
    pub foods: Vec<FoodItem>,
}

impl Meal {
    pub fn new(slot: MealSlot, foods: Vec<FoodItem>) -> Self {
        Self { slot, foods }
    }

    pub fn name(&self) -> &'static str {
        self.slot.name()
    }

    /// Sum of the selected foods' calories and macros.
    pub fn nutrition(&self) -> TotalNutrition {
        self.foods
            .iter()
            .fold(TotalNutrition::default(), |acc, food| TotalNutrition {
                calories: acc.calories + food.calories,
                carbs: acc.carbs + food.carbs,
                protein: acc.protein + food.protein,
                fat: acc.fat + food.fat,
            })
    }
}

/// A generated day: three meals plus the requested totals.
///
/// `total_nutrition` reflects the requested daily targets, not the sum of
/// the selected foods. Use [`DailyMealPlan::assembled_nutrition`] for that.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyMealPlan {
    pub breakfast: Meal,
    pub lunch: Meal,
    pub dinner: Meal,
    pub total_nutrition: TotalNutrition,
}

impl DailyMealPlan {
    pub fn meal(&self, slot: MealSlot) -> &Meal {
        match slot {
            MealSlot::Breakfast => &self.breakfast,
            MealSlot::Lunch => &self.lunch,
            MealSlot::Dinner => &self.dinner,
        }
    }

    /// Meals in breakfast, lunch, dinner order.
    pub fn meals(&self) -> [&Meal; 3] {
        [&self.breakfast, &self.lunch, &self.dinner]
    }

    /// True if no meal received any food.
    pub fn is_empty(&self) -> bool {
        self.meals().iter().all(|m| m.foods.is_empty())
    }

    /// Sum over the foods actually selected across all meals.
    pub fn assembled_nutrition(&self) -> TotalNutrition {
        self.meals()
            .iter()
            .map(|m| m.nutrition())
            .fold(TotalNutrition::default(), |acc, n| TotalNutrition {
                calories: acc.calories + n.calories,
                carbs: acc.carbs + n.carbs,
                protein: acc.protein + n.protein,
                fat: acc.fat + n.fat,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn meal(slot: MealSlot, foods: Vec<FoodItem>) -> Meal {
        Meal::new(slot, foods)
    }

    #[test]
    fn test_meal_nutrition_sums_foods() {
        let m = meal(
            MealSlot::Breakfast,
            vec![
                FoodItem::new("Eggs", "2 large", 1.0, 12.0, 10.0, 144.0),
                FoodItem::new("Banana", "1 medium", 27.0, 1.0, 0.0, 105.0),
            ],
        );
        let n = m.nutrition();
        assert_eq!(n.calories, 249.0);
        assert_eq!(n.macros(), Macros::new(28.0, 13.0, 10.0));
    }

    #[test]
    fn test_from_targets() {
        let n = TotalNutrition::from_targets(&Macros::new(200.0, 100.0, 60.0));
        assert_eq!(n.calories, 1740.0);
        assert_eq!(n.carbs, 200.0);
        assert_eq!(n.protein, 100.0);
        assert_eq!(n.fat, 60.0);
    }

    #[test]
    fn test_plan_is_empty_and_serializes_meal_names() {
        let plan = DailyMealPlan {
            breakfast: meal(MealSlot::Breakfast, vec![]),
            lunch: meal(MealSlot::Lunch, vec![]),
            dinner: meal(MealSlot::Dinner, vec![]),
            total_nutrition: TotalNutrition::default(),
        };
        assert!(plan.is_empty());
        assert_eq!(plan.meal(MealSlot::Lunch).name(), "Lunch");

        let json = serde_json::to_value(&plan).unwrap();
        assert_eq!(json["dinner"]["name"], "Dinner");
        assert!(json.get("totalNutrition").is_some());
    }
}
