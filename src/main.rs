use std::fs;
use std::path::Path;

use clap::Parser;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::warn;

use calorie_planner_rs::budget::{BodyProfile, compute_daily_budget, total_daily_expenditure};
use calorie_planner_rs::catalog::{
    CandidateProvider, LocalCatalog, builtin_foods, collect_candidate_pool, load_foods,
    save_foods,
};
use calorie_planner_rs::cli::{BudgetArgs, Cli, Command, PlanArgs};
use calorie_planner_rs::config::{PlannerConfig, load_config, save_config};
use calorie_planner_rs::error::Result;
use calorie_planner_rs::interface::{
    PlanAction, collect_plan_request, display_food_list, display_plan, prompt_path,
    prompt_plan_action, prompt_yes_no,
};
use calorie_planner_rs::logging::init_logging;
use calorie_planner_rs::models::{FoodRecord, Plan, Preferences};
use calorie_planner_rs::planner::{
    DEFAULT_SEARCH_LIMIT, generate_plan_with_config, target_total_kcal,
};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = match &cli.config {
        Some(path) => load_config(path)?,
        None => PlannerConfig::default(),
    };

    match cli.command.unwrap_or_default() {
        Command::Plan(args) => cmd_plan(&cli.foods, &config, &args),
        Command::Wizard => cmd_wizard(&cli.foods, &config),
        Command::Search { term, limit, save } => {
            cmd_search(&cli.foods, &term, limit, save.as_deref())
        }
        Command::Budget(args) => cmd_budget(&args),
        Command::Config { out } => cmd_config(&config, &out),
    }
}

/// Load the catalog file, or the built-in foods when it is missing.
fn load_catalog(path: &Path) -> Result<LocalCatalog> {
    if !path.exists() {
        warn!(path = %path.display(), "food catalog not found, using built-in foods");
        return Ok(LocalCatalog::new(builtin_foods()));
    }

    let catalog = LocalCatalog::new(load_foods(path)?);
    println!("Loaded {} foods from {}", catalog.len(), path.display());
    Ok(catalog)
}

/// Resolve the candidate pool for a set of preferences.
fn candidate_pool(catalog: &dyn CandidateProvider, prefs: &Preferences) -> Vec<FoodRecord> {
    let pool = collect_candidate_pool(catalog, prefs, DEFAULT_SEARCH_LIMIT);
    if pool.is_empty() {
        warn!("catalog search returned no usable foods, using built-in foods");
        return builtin_foods();
    }
    pool
}

fn save_plan(path: &Path, plan: &Plan) -> Result<()> {
    let json = serde_json::to_string_pretty(plan)?;
    fs::write(path, json)?;
    println!("Plan saved to {}", path.display());
    Ok(())
}

/// Generate a plan from command-line flags.
fn cmd_plan(foods_path: &Path, config: &PlannerConfig, args: &PlanArgs) -> Result<()> {
    let request = args.to_request();
    request.validate()?;

    let catalog = load_catalog(foods_path)?;
    let pool = candidate_pool(&catalog, &request.preferences);

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let plan = generate_plan_with_config(&request, &pool, config, &mut rng)?;
    display_plan(&plan);

    if let Some(out) = &args.out {
        save_plan(out, &plan)?;
    }

    Ok(())
}

/// Collect inputs interactively, then preview plans until one is accepted or declined.
fn cmd_wizard(foods_path: &Path, config: &PlannerConfig) -> Result<()> {
    let catalog = load_catalog(foods_path)?;
    let request = collect_plan_request(&catalog)?;

    let target = target_total_kcal(&request);
    if target <= 0.0 {
        println!("No remaining calories to plan for.");
        return Ok(());
    }

    println!();
    println!("Planning for {:.0} remaining calories...", target);

    let pool = candidate_pool(&catalog, &request.preferences);
    let mut rng = StdRng::from_entropy();

    loop {
        let plan = generate_plan_with_config(&request, &pool, config, &mut rng)?;
        display_plan(&plan);

        if plan.is_empty() {
            println!("Try relaxing your restrictions or adding foods to the catalog.");
            return Ok(());
        }

        match prompt_plan_action()? {
            PlanAction::Accept => {
                if prompt_yes_no("Save plan to a file?", true)? {
                    let path = prompt_path("File name", "plan.json")?;
                    save_plan(&path, &plan)?;
                }
                return Ok(());
            }
            PlanAction::Regenerate => continue,
            PlanAction::Decline => {
                println!("Plan discarded.");
                return Ok(());
            }
        }
    }
}

/// Search the catalog by name, optionally exporting the hits as a catalog.
fn cmd_search(foods_path: &Path, term: &str, limit: usize, save: Option<&Path>) -> Result<()> {
    let catalog = load_catalog(foods_path)?;
    let results = catalog.search_foods(term, limit)?;

    if results.is_empty() {
        let suggestions = catalog.suggest(term, limit);
        if suggestions.is_empty() {
            println!("No foods match '{}'.", term);
        } else {
            display_food_list(&suggestions, "Did you mean");
        }
        return Ok(());
    }

    let refs: Vec<&FoodRecord> = results.iter().collect();
    display_food_list(&refs, &format!("Results for '{}'", term));

    if let Some(path) = save {
        save_foods(path, &results)?;
        println!("Saved {} foods to {}", results.len(), path.display());
    }
    Ok(())
}

fn cmd_config(config: &PlannerConfig, out: &Path) -> Result<()> {
    save_config(out, config)?;
    println!("Config written to {}", out.display());
    Ok(())
}

/// Estimate a daily budget from body metrics.
fn cmd_budget(args: &BudgetArgs) -> Result<()> {
    let profile = BodyProfile {
        sex: args.sex,
        height_cm: args.height_cm,
        weight_kg: args.weight_kg,
        age_years: args.age,
        activity: args.activity,
    };

    let budget = compute_daily_budget(&profile, args.goal)?;
    println!(
        "Maintenance: {:.0} kcal/day",
        total_daily_expenditure(&profile)
    );
    println!(
        "Suggested budget to {}: {:.0} kcal/day",
        args.goal.label(),
        budget
    );
    Ok(())
}
