use std::fs;
use std::path::Path;

use crate::error::Result;
use crate::models::DailyMealPlan;

/// Write one CSV row per selected food.
pub fn write_plan_csv(plan: &DailyMealPlan, path: &Path) -> Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;

    wtr.write_record([
        "meal",
        "name",
        "serving_size",
        "carbs",
        "protein",
        "fat",
        "calories",
    ])?;

    for meal in plan.meals() {
        for food in &meal.foods {
            wtr.write_record([
                meal.name().to_string(),
                food.name.clone(),
                food.serving_size.clone(),
                food.carbs.to_string(),
                food.protein.to_string(),
                food.fat.to_string(),
                food.calories.to_string(),
            ])?;
        }
    }

    wtr.flush()?;
    Ok(())
}

/// Write the whole plan, including requested totals, as pretty JSON.
pub fn write_plan_json(plan: &DailyMealPlan, path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(plan)?;
    fs::write(path, json)?;
    Ok(())
}
