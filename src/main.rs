use std::path::{Path, PathBuf};

use clap::Parser;
use tracing::info;

use macro_meal_planner::catalog::{FoodCatalog, load_catalog, save_catalog};
use macro_meal_planner::cli::{Cli, Command, parse_splits};
use macro_meal_planner::error::Result;
use macro_meal_planner::interface::{
    collect_macro_targets, display_catalog, display_meal_plan, prompt_path, prompt_yes_no,
    write_plan_csv, write_plan_json,
};
use macro_meal_planner::logging::init_logging;
use macro_meal_planner::models::{DailyMealPlan, MacroTargets, MealSlot};
use macro_meal_planner::planner::{generate_random_plan, generate_seeded_plan};

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let catalog = match &cli.catalog {
        Some(path) => load_catalog(path)?,
        None => FoodCatalog::standard().clone(),
    };

    match cli.command.unwrap_or_default() {
        Command::Plan => cmd_plan(&catalog),
        Command::Generate {
            carbs,
            protein,
            fat,
            carbs_split,
            protein_split,
            fat_split,
            seed,
            json,
            csv,
        } => {
            let (carbs_split, protein_split, fat_split) =
                parse_splits(&carbs_split, &protein_split, &fat_split)?;
            let targets = MacroTargets {
                carbs,
                protein,
                fat,
                carbs_split,
                protein_split,
                fat_split,
            };
            cmd_generate(&catalog, &targets, seed, json, csv)
        }
        Command::Catalog { slot } => cmd_catalog(&catalog, slot),
        Command::ExportCatalog { out } => cmd_export_catalog(&catalog, &out),
    }
}

fn build_plan(catalog: &FoodCatalog, targets: &MacroTargets, seed: Option<u64>) -> DailyMealPlan {
    match seed {
        Some(seed) => {
            info!(seed, "using seeded draws");
            generate_seeded_plan(catalog, targets, seed)
        }
        None => generate_random_plan(catalog, targets),
    }
}

/// Prompt for targets, then generate and display a plan.
fn cmd_plan(catalog: &FoodCatalog) -> Result<()> {
    println!("Enter daily macronutrients in grams (0-1000).");
    println!();

    let targets = collect_macro_targets()?;
    let plan = build_plan(catalog, &targets, None);

    println!();
    println!("Meal plan generated.");
    display_meal_plan(&plan);

    if prompt_yes_no("Save this plan as JSON?", false)? {
        let path = prompt_path("Output file", "meal_plan.json")?;
        write_plan_json(&plan, Path::new(&path))?;
        println!("Plan saved to {}", path);
    }

    Ok(())
}

/// Generate a plan from command-line targets.
fn cmd_generate(
    catalog: &FoodCatalog,
    targets: &MacroTargets,
    seed: Option<u64>,
    json: Option<PathBuf>,
    csv: Option<PathBuf>,
) -> Result<()> {
    targets.validate()?;

    let plan = build_plan(catalog, targets, seed);
    display_meal_plan(&plan);

    if let Some(path) = json {
        write_plan_json(&plan, &path)?;
        println!("Wrote plan to {:?}", path);
    }

    if let Some(path) = csv {
        write_plan_csv(&plan, &path)?;
        println!("Wrote foods to {:?}", path);
    }

    Ok(())
}

/// List catalog foods.
fn cmd_catalog(catalog: &FoodCatalog, slot: Option<MealSlot>) -> Result<()> {
    display_catalog(catalog, slot);
    Ok(())
}

/// Write the active catalog to a JSON file.
fn cmd_export_catalog(catalog: &FoodCatalog, out: &Path) -> Result<()> {
    save_catalog(out, catalog)?;
    println!("Wrote {} foods to {:?}", catalog.len(), out);
    Ok(())
}
