use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::models::{MealSlot, MealSplit};
use crate::planner::constants::{DEFAULT_CARBS_SPLIT, DEFAULT_FAT_SPLIT, DEFAULT_PROTEIN_SPLIT};

/// Macro meal planner: assemble a sample day of meals from macronutrient targets.
#[derive(Parser, Debug)]
#[command(name = "macro_meal_planner")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Load the food catalog from a JSON file instead of the built-in one.
    #[arg(short, long, global = true)]
    pub catalog: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Prompt for targets and generate a meal plan.
    Plan,

    /// Generate a meal plan from command-line targets.
    Generate {
        /// Daily carbohydrates in grams.
        #[arg(long)]
        carbs: f64,

        /// Daily protein in grams.
        #[arg(long)]
        protein: f64,

        /// Daily fat in grams.
        #[arg(long)]
        fat: f64,

        /// Carbs percentages for breakfast,lunch,dinner.
        #[arg(long, default_value_t = DEFAULT_CARBS_SPLIT.to_string())]
        carbs_split: String,

        /// Protein percentages for breakfast,lunch,dinner.
        #[arg(long, default_value_t = DEFAULT_PROTEIN_SPLIT.to_string())]
        protein_split: String,

        /// Fat percentages for breakfast,lunch,dinner.
        #[arg(long, default_value_t = DEFAULT_FAT_SPLIT.to_string())]
        fat_split: String,

        /// Seed for a reproducible plan.
        #[arg(long)]
        seed: Option<u64>,

        /// Write the plan as JSON to this path.
        #[arg(long)]
        json: Option<PathBuf>,

        /// Write the selected foods as CSV to this path.
        #[arg(long)]
        csv: Option<PathBuf>,
    },

    /// List the foods in the catalog.
    Catalog {
        /// Only show one meal slot (breakfast, lunch or dinner).
        #[arg(long)]
        slot: Option<MealSlot>,
    },

    /// Write the active catalog as JSON.
    ExportCatalog {
        /// Output path.
        #[arg(long, default_value = "catalog.json")]
        out: PathBuf,
    },
}

impl Default for Command {
    fn default() -> Self {
        Command::Plan
    }
}

/// Parse the three split arguments of `generate`.
pub fn parse_splits(
    carbs: &str,
    protein: &str,
    fat: &str,
) -> crate::Result<(MealSplit, MealSplit, MealSplit)> {
    Ok((carbs.parse()?, protein.parse()?, fat.parse()?))
}
