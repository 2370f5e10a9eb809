use std::fmt;
use std::ops::{Add, AddAssign};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{PlannerError, Result};
use crate::models::food::MealSlot;
use crate::planner::constants::*;

/// Carbohydrate, protein and fat amounts in grams.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Macros {
    pub carbs: f64,
    pub protein: f64,
    pub fat: f64,
}

impl Macros {
    pub const ZERO: Macros = Macros {
        carbs: 0.0,
        protein: 0.0,
        fat: 0.0,
    };

    pub const fn new(carbs: f64, protein: f64, fat: f64) -> Self {
        Self {
            carbs,
            protein,
            fat,
        }
    }

    /// Energy in kcal using the Atwater factors (4/4/9).
    #[inline]
    pub fn calories(&self) -> f64 {
        self.carbs * CALORIES_PER_GRAM_CARBS
            + self.protein * CALORIES_PER_GRAM_PROTEIN
            + self.fat * CALORIES_PER_GRAM_FAT
    }

    /// Every component multiplied by `factor`.
    pub fn scaled(&self, factor: f64) -> Self {
        Self::new(self.carbs * factor, self.protein * factor, self.fat * factor)
    }

    /// True if at least one component is strictly below the target's.
    pub fn any_below(&self, target: &Macros) -> bool {
        self.carbs < target.carbs || self.protein < target.protein || self.fat < target.fat
    }

    /// True if no component exceeds the ceiling's.
    pub fn fits_within(&self, ceiling: &Macros) -> bool {
        self.carbs <= ceiling.carbs && self.protein <= ceiling.protein && self.fat <= ceiling.fat
    }
}

impl Add for Macros {
    type Output = Macros;

    fn add(self, rhs: Macros) -> Macros {
        Macros::new(
            self.carbs + rhs.carbs,
            self.protein + rhs.protein,
            self.fat + rhs.fat,
        )
    }
}

impl AddAssign for Macros {
    fn add_assign(&mut self, rhs: Macros) {
        self.carbs += rhs.carbs;
        self.protein += rhs.protein;
        self.fat += rhs.fat;
    }
}

/// Percentage of one macro assigned to each meal.
///
/// The three values are not required to sum to 100.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MealSplit {
    pub breakfast: f64,
    pub lunch: f64,
    pub dinner: f64,
}

impl MealSplit {
    pub const fn new(breakfast: f64, lunch: f64, dinner: f64) -> Self {
        Self {
            breakfast,
            lunch,
            dinner,
        }
    }

    /// Percentage for a slot.
    pub fn share(&self, slot: MealSlot) -> f64 {
        match slot {
            MealSlot::Breakfast => self.breakfast,
            MealSlot::Lunch => self.lunch,
            MealSlot::Dinner => self.dinner,
        }
    }

    fn validate(&self, label: &str) -> Result<()> {
        for slot in MealSlot::ALL {
            let pct = self.share(slot);
            if !pct.is_finite() || !(0.0..=MAX_SPLIT_PERCENT).contains(&pct) {
                return Err(PlannerError::InvalidInput(format!(
                    "{} {} share must be between 0 and {}, got {}",
                    label,
                    slot.key(),
                    MAX_SPLIT_PERCENT,
                    pct
                )));
            }
        }
        Ok(())
    }
}

impl fmt::Display for MealSplit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{},{}", self.breakfast, self.lunch, self.dinner)
    }
}

/// Parses "breakfast,lunch,dinner" percentages, e.g. "35,35,30".
impl FromStr for MealSplit {
    type Err = PlannerError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split(',').map(str::trim).collect();
        if parts.len() != 3 {
            return Err(PlannerError::InvalidInput(format!(
                "split '{}' must have three comma-separated percentages",
                s
            )));
        }

        let mut values = [0.0; 3];
        for (value, part) in values.iter_mut().zip(&parts) {
            *value = part.parse().map_err(|_| {
                PlannerError::InvalidInput(format!("'{}' is not a valid percentage", part))
            })?;
        }

        Ok(MealSplit::new(values[0], values[1], values[2]))
    }
}

/// Daily macro totals with their per-meal distributions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MacroTargets {
    pub carbs: f64,
    pub protein: f64,
    pub fat: f64,
    #[serde(rename = "carbsDistribution")]
    pub carbs_split: MealSplit,
    #[serde(rename = "proteinDistribution")]
    pub protein_split: MealSplit,
    #[serde(rename = "fatDistribution")]
    pub fat_split: MealSplit,
}

impl Default for MacroTargets {
    fn default() -> Self {
        Self {
            carbs: 0.0,
            protein: 0.0,
            fat: 0.0,
            carbs_split: DEFAULT_CARBS_SPLIT,
            protein_split: DEFAULT_PROTEIN_SPLIT,
            fat_split: DEFAULT_FAT_SPLIT,
        }
    }
}

impl MacroTargets {
    /// Targets with the default meal distributions.
    pub fn with_daily(carbs: f64, protein: f64, fat: f64) -> Self {
        Self {
            carbs,
            protein,
            fat,
            ..Default::default()
        }
    }

    /// Daily totals as a `Macros` value.
    pub fn daily(&self) -> Macros {
        Macros::new(self.carbs, self.protein, self.fat)
    }

    /// Grams of each macro assigned to a meal: `daily * percent / 100`.
    pub fn meal_target(&self, slot: MealSlot) -> Macros {
        Macros::new(
            self.carbs * self.carbs_split.share(slot) / 100.0,
            self.protein * self.protein_split.share(slot) / 100.0,
            self.fat * self.fat_split.share(slot) / 100.0,
        )
    }

    /// Boundary checks for user-supplied targets.
    ///
    /// Grams must lie in [0, MAX_DAILY_GRAMS] and percentages in
    /// [0, MAX_SPLIT_PERCENT]. Splits need not sum to 100.
    pub fn validate(&self) -> Result<()> {
        for (label, grams) in [
            ("carbs", self.carbs),
            ("protein", self.protein),
            ("fat", self.fat),
        ] {
            if !grams.is_finite() || !(0.0..=MAX_DAILY_GRAMS).contains(&grams) {
                return Err(PlannerError::InvalidInput(format!(
                    "{} must be between 0 and {} grams, got {}",
                    label, MAX_DAILY_GRAMS, grams
                )));
            }
        }

        self.carbs_split.validate("carbs")?;
        self.protein_split.validate("protein")?;
        self.fat_split.validate("fat")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_calories_atwater() {
        let m = Macros::new(200.0, 100.0, 60.0);
        assert_eq!(m.calories(), 1740.0);
    }

    #[test]
    fn test_any_below_and_fits_within() {
        let target = Macros::new(10.0, 10.0, 10.0);
        assert!(Macros::ZERO.any_below(&target));
        assert!(!Macros::new(10.0, 12.0, 10.0).any_below(&target));

        let ceiling = target.scaled(TOLERANCE_FACTOR);
        assert!(Macros::new(11.0, 11.0, 11.0).fits_within(&ceiling));
        assert!(!Macros::new(11.0, 11.5, 0.0).fits_within(&ceiling));
    }

    #[test]
    fn test_add_assign() {
        let mut total = Macros::ZERO;
        total += Macros::new(1.0, 2.0, 3.0);
        total += Macros::new(1.0, 2.0, 3.0);
        assert_eq!(total, Macros::new(2.0, 4.0, 6.0));
    }

    #[test]
    fn test_split_parsing() {
        let split: MealSplit = "35, 35,30".parse().unwrap();
        assert_eq!(split, MealSplit::new(35.0, 35.0, 30.0));

        assert!("35,35".parse::<MealSplit>().is_err());
        assert!("35,abc,30".parse::<MealSplit>().is_err());
        assert_eq!(DEFAULT_FAT_SPLIT.to_string(), "35,30,35");
    }

    #[test]
    fn test_defaults_match_form() {
        let targets = MacroTargets::default();
        assert_eq!(targets.carbs_split, MealSplit::new(35.0, 35.0, 30.0));
        assert_eq!(targets.protein_split, MealSplit::new(33.0, 33.0, 34.0));
        assert_eq!(targets.fat_split, MealSplit::new(35.0, 30.0, 35.0));
        assert_eq!(targets.daily(), Macros::ZERO);
    }

    #[test]
    fn test_meal_target() {
        let targets = MacroTargets::with_daily(300.0, 100.0, 60.0);
        assert_eq!(targets.meal_target(MealSlot::Breakfast).carbs, 105.0);
        assert_eq!(targets.meal_target(MealSlot::Lunch).carbs, 105.0);
        assert_eq!(targets.meal_target(MealSlot::Dinner).carbs, 90.0);
        assert_eq!(targets.meal_target(MealSlot::Dinner).protein, 34.0);
        assert_eq!(targets.meal_target(MealSlot::Lunch).fat, 18.0);
    }

    #[test]
    fn test_validate_bounds() {
        assert!(MacroTargets::with_daily(0.0, 0.0, 0.0).validate().is_ok());
        assert!(MacroTargets::with_daily(1000.0, 1000.0, 1000.0)
            .validate()
            .is_ok());
        assert!(MacroTargets::with_daily(1000.5, 0.0, 0.0).validate().is_err());
        assert!(MacroTargets::with_daily(0.0, -1.0, 0.0).validate().is_err());
        assert!(MacroTargets::with_daily(0.0, 0.0, f64::NAN).validate().is_err());

        let mut over = MacroTargets::with_daily(100.0, 100.0, 100.0);
        over.fat_split = MealSplit::new(100.0, 101.0, 0.0);
        assert!(over.validate().is_err());
    }

    #[test]
    fn test_validate_allows_unbalanced_split() {
        let mut targets = MacroTargets::with_daily(100.0, 100.0, 100.0);
        targets.carbs_split = MealSplit::new(100.0, 100.0, 100.0);
        targets.protein_split = MealSplit::new(0.0, 0.0, 0.0);
        assert!(targets.validate().is_ok());
    }

    #[test]
    fn test_targets_json_field_names() {
        let json = serde_json::to_value(MacroTargets::default()).unwrap();
        assert!(json.get("carbsDistribution").is_some());
        assert!(json.get("fatDistribution").is_some());
    }
}
