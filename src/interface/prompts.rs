use dialoguer::{Confirm, Input};

use crate::error::{PlannerError, Result};
use crate::models::{MacroTargets, MealSlot, MealSplit};
use crate::planner::constants::{MAX_DAILY_GRAMS, MAX_SPLIT_PERCENT};

/// Parse a number and check it lies in `0..=max`.
fn parse_bounded(input: &str, max: f64) -> Result<f64> {
    let value: f64 = input
        .trim()
        .parse()
        .map_err(|_| PlannerError::InvalidInput(format!("'{}' is not a number", input.trim())))?;

    if !value.is_finite() || !(0.0..=max).contains(&value) {
        return Err(PlannerError::InvalidInput(format!(
            "{} is outside 0..={}",
            value, max
        )));
    }

    Ok(value)
}

/// Prompt for a daily macro total in grams.
pub fn prompt_daily_grams(label: &str, default: f64) -> Result<f64> {
    let input: String = Input::new()
        .with_prompt(format!("{} (g)", label))
        .default(default.to_string())
        .interact_text()?;

    parse_bounded(&input, MAX_DAILY_GRAMS)
}

/// Prompt for one macro's breakfast/lunch/dinner percentages.
pub fn prompt_split(label: &str, default: MealSplit) -> Result<MealSplit> {
    println!("{} distribution:", label);

    let mut values = [0.0; 3];
    for (value, slot) in values.iter_mut().zip(MealSlot::ALL) {
        let input: String = Input::new()
            .with_prompt(format!("  {} (%)", slot.name()))
            .default(default.share(slot).to_string())
            .interact_text()?;
        *value = parse_bounded(&input, MAX_SPLIT_PERCENT)?;
    }

    Ok(MealSplit::new(values[0], values[1], values[2]))
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}

/// Prompt for an output path.
pub fn prompt_path(prompt: &str, default: &str) -> Result<String> {
    Ok(Input::new()
        .with_prompt(prompt)
        .default(default.to_string())
        .interact_text()?)
}

/// Collect daily totals and distributions.
///
/// Distributions are offered with the defaults from `MacroTargets::default`.
pub fn collect_macro_targets() -> Result<MacroTargets> {
    let defaults = MacroTargets::default();

    let carbs = prompt_daily_grams("Carbohydrates", defaults.carbs)?;
    let protein = prompt_daily_grams("Protein", defaults.protein)?;
    let fat = prompt_daily_grams("Fat", defaults.fat)?;

    let adjust = prompt_yes_no("Adjust the per-meal distributions?", false)?;
    let (carbs_split, protein_split, fat_split) = if adjust {
        (
            prompt_split("Carbs", defaults.carbs_split)?,
            prompt_split("Protein", defaults.protein_split)?,
            prompt_split("Fat", defaults.fat_split)?,
        )
    } else {
        (defaults.carbs_split, defaults.protein_split, defaults.fat_split)
    };

    let targets = MacroTargets {
        carbs,
        protein,
        fat,
        carbs_split,
        protein_split,
        fat_split,
    };
    targets.validate()?;
    Ok(targets)
}
