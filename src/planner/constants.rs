use crate::models::MealSplit;

/// A candidate is accepted only if every running total stays within
/// this multiple of its target.
pub const TOLERANCE_FACTOR: f64 = 1.10;

// ─────────────────────────────────────────────────────────────────────────────
// Atwater factors (kcal per gram)
// ─────────────────────────────────────────────────────────────────────────────

pub const CALORIES_PER_GRAM_CARBS: f64 = 4.0;
pub const CALORIES_PER_GRAM_PROTEIN: f64 = 4.0;
pub const CALORIES_PER_GRAM_FAT: f64 = 9.0;

// ─────────────────────────────────────────────────────────────────────────────
// Input bounds
// ─────────────────────────────────────────────────────────────────────────────

/// Upper bound for a daily macro total, in grams.
pub const MAX_DAILY_GRAMS: f64 = 1000.0;

/// Upper bound for a single meal's share of a macro, in percent.
pub const MAX_SPLIT_PERCENT: f64 = 100.0;

// ─────────────────────────────────────────────────────────────────────────────
// Default distributions (breakfast, lunch, dinner)
// ─────────────────────────────────────────────────────────────────────────────

pub const DEFAULT_CARBS_SPLIT: MealSplit = MealSplit::new(35.0, 35.0, 30.0);
pub const DEFAULT_PROTEIN_SPLIT: MealSplit = MealSplit::new(33.0, 33.0, 34.0);
pub const DEFAULT_FAT_SPLIT: MealSplit = MealSplit::new(35.0, 30.0, 35.0);
