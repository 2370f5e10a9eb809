use tracing::debug;

use crate::catalog::FoodCatalog;
use crate::models::{FoodItem, Macros, MealSlot};
use crate::planner::constants::TOLERANCE_FACTOR;
use crate::planner::draws::DrawSource;

/// Select foods for one meal slot from the catalog.
///
/// See [`assemble_meal`] for the selection rules.
pub fn select_foods<D: DrawSource + ?Sized>(
    catalog: &FoodCatalog,
    slot: MealSlot,
    target: &Macros,
    draws: &mut D,
) -> Vec<FoodItem> {
    let foods = assemble_meal(catalog.slot(slot), target, draws);
    debug!(
        slot = slot.key(),
        selected = foods.len(),
        "assembled meal"
    );
    foods
}

/// Draw candidates without replacement until every target is reached or the
/// pool is empty.
///
/// A drawn candidate is kept only if, after adding it, all three running
/// totals stay at or below `TOLERANCE_FACTOR` times their targets. It leaves
/// the pool either way, so the loop runs at most `candidates.len()` times.
/// Zero targets yield an empty meal.
pub fn assemble_meal<D: DrawSource + ?Sized>(
    candidates: &[FoodItem],
    target: &Macros,
    draws: &mut D,
) -> Vec<FoodItem> {
    let ceiling = target.scaled(TOLERANCE_FACTOR);
    let mut pool: Vec<&FoodItem> = candidates.iter().collect();
    let mut totals = Macros::ZERO;
    let mut selected = Vec::new();

    while totals.any_below(target) && !pool.is_empty() {
        let idx = draws.draw(pool.len()) % pool.len();
        let candidate = pool.remove(idx);
        let next = totals + candidate.macros();

        if next.fits_within(&ceiling) {
            debug!(food = %candidate.name, "accepted candidate");
            totals = next;
            selected.push(candidate.clone());
        } else {
            debug!(food = %candidate.name, "rejected candidate over tolerance");
        }
    }

    selected
}
