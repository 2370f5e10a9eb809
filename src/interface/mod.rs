pub mod export;
pub mod prompts;
pub mod render;

pub use export::{write_plan_csv, write_plan_json};
pub use prompts::{
    collect_macro_targets, prompt_daily_grams, prompt_path, prompt_split, prompt_yes_no,
};
pub use render::{display_catalog, display_meal_plan, format_meal_plan};
