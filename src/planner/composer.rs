use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::info;

use crate::catalog::FoodCatalog;
use crate::models::{DailyMealPlan, MacroTargets, Meal, MealSlot, TotalNutrition};
use crate::planner::assembler::select_foods;
use crate::planner::draws::{DrawSource, RngDraws};

/// Generate a daily plan.
///
/// Each meal is assembled from `targets.meal_target(slot)` in breakfast,
/// lunch, dinner order, sharing one draw source. `total_nutrition` carries
/// the requested daily totals verbatim, with calories from the Atwater
/// factors; it is not recomputed from the selected foods.
pub fn generate_plan<D: DrawSource + ?Sized>(
    catalog: &FoodCatalog,
    targets: &MacroTargets,
    draws: &mut D,
) -> DailyMealPlan {
    let [breakfast, lunch, dinner] = MealSlot::ALL.map(|slot| {
        let target = targets.meal_target(slot);
        Meal::new(slot, select_foods(catalog, slot, &target, draws))
    });

    let plan = DailyMealPlan {
        breakfast,
        lunch,
        dinner,
        total_nutrition: TotalNutrition::from_targets(&targets.daily()),
    };

    info!(
        breakfast = plan.breakfast.foods.len(),
        lunch = plan.lunch.foods.len(),
        dinner = plan.dinner.foods.len(),
        calories = plan.total_nutrition.calories,
        "generated meal plan"
    );

    plan
}

/// Generate a plan with the thread-local random generator.
pub fn generate_random_plan(catalog: &FoodCatalog, targets: &MacroTargets) -> DailyMealPlan {
    let mut draws = RngDraws::new(rand::thread_rng());
    generate_plan(catalog, targets, &mut draws)
}

/// Generate a reproducible plan from a seed.
pub fn generate_seeded_plan(
    catalog: &FoodCatalog,
    targets: &MacroTargets,
    seed: u64,
) -> DailyMealPlan {
    let mut draws = RngDraws::new(StdRng::seed_from_u64(seed));
    generate_plan(catalog, targets, &mut draws)
}
