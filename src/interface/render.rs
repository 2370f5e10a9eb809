use std::fmt::Write;

use crate::catalog::FoodCatalog;
use crate::models::{DailyMealPlan, FoodItem, Meal, MealSlot, TotalNutrition};

fn food_line(food: &FoodItem) -> String {
    format!(
        "{} - {} (Carbs: {}g, Protein: {}g, Fat: {}g, Calories: {})",
        food.name, food.serving_size, food.carbs, food.protein, food.fat, food.calories
    )
}

fn nutrition_line(n: &TotalNutrition) -> String {
    format!(
        "C:{:.1}g P:{:.1}g F:{:.1}g, {:.0} cal",
        n.carbs, n.protein, n.fat, n.calories
    )
}

fn write_meal(out: &mut String, meal: &Meal) {
    let _ = writeln!(out, "{}", meal.name());

    if meal.foods.is_empty() {
        let _ = writeln!(out, "  (no foods selected)");
    } else {
        for (i, food) in meal.foods.iter().enumerate() {
            let _ = writeln!(out, "{:>3}. {}", i + 1, food_line(food));
        }
        let _ = writeln!(out, "     Assembled: {}", nutrition_line(&meal.nutrition()));
    }

    let _ = writeln!(out);
}

/// Format a meal plan as plain text.
///
/// The totals block shows the requested daily totals; the assembled line
/// shows what the selected foods add up to.
pub fn format_meal_plan(plan: &DailyMealPlan) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "=== Meal Plan ===");
    let _ = writeln!(out);

    for meal in plan.meals() {
        write_meal(&mut out, meal);
    }

    let total = &plan.total_nutrition;
    let _ = writeln!(out, "--- Total Daily Nutrition ---");
    let _ = writeln!(out, "Calories: {}", total.calories);
    let _ = writeln!(out, "Carbs: {}g", total.carbs);
    let _ = writeln!(out, "Protein: {}g", total.protein);
    let _ = writeln!(out, "Fat: {}g", total.fat);
    let _ = writeln!(
        out,
        "Assembled: {}",
        nutrition_line(&plan.assembled_nutrition())
    );

    out
}

/// Display a meal plan.
pub fn display_meal_plan(plan: &DailyMealPlan) {
    if plan.is_empty() {
        println!("No foods selected (all targets zero or every draw overshot).");
        println!();
    }
    print!("{}", format_meal_plan(plan));
    println!();
}

/// Display catalog foods, optionally for a single slot.
pub fn display_catalog(catalog: &FoodCatalog, only: Option<MealSlot>) {
    let slots: Vec<MealSlot> = match only {
        Some(slot) => vec![slot],
        None => MealSlot::ALL.to_vec(),
    };

    for slot in slots {
        let foods = catalog.slot(slot);
        println!();
        println!("=== {} ({} items) ===", slot.name(), foods.len());
        for food in foods {
            println!("  {}", food_line(food));
        }
    }
    println!();
}
