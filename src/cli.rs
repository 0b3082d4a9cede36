use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand};

use crate::budget::{ActivityLevel, Sex};
use crate::models::{Goal, PlanRequest, Preferences};

/// Calorie Planner: builds balanced meal plans that fit a daily calorie budget.
#[derive(Parser, Debug)]
#[command(name = "calorie_planner")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path to the food catalog (JSON array or .csv). Falls back to built-in foods.
    #[arg(short, long, default_value = "foods.json")]
    pub foods: PathBuf,

    /// Optional JSON file overriding planner weights.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate a plan from command-line flags.
    Plan(PlanArgs),

    /// Walk through the plan inputs interactively.
    Wizard,

    /// Search the food catalog by name.
    Search {
        /// Substring to look for (case-insensitive).
        term: String,

        /// Maximum number of results.
        #[arg(long, default_value = "10")]
        limit: usize,

        /// Write the matching foods to a catalog file (JSON).
        #[arg(long)]
        save: Option<PathBuf>,
    },

    /// Write the effective planner config (defaults merged with --config) as JSON.
    Config {
        #[arg(long, default_value = "planner_config.json")]
        out: PathBuf,
    },

    /// Estimate a daily calorie budget from body metrics.
    Budget(BudgetArgs),
}

impl Default for Command {
    fn default() -> Self {
        Command::Wizard
    }
}

#[derive(Args, Debug, Clone)]
pub struct PlanArgs {
    /// Daily calorie budget.
    #[arg(long)]
    pub budget: f64,

    /// Calories burned through exercise, added back to the budget.
    #[arg(long, default_value = "0")]
    pub exercise: f64,

    /// Calories already eaten today.
    #[arg(long, default_value = "0")]
    pub consumed: f64,

    #[arg(long, value_enum, default_value = "maintain")]
    pub goal: Goal,

    /// Number of meals to plan.
    #[arg(long, default_value = "3")]
    pub meals: u32,

    #[arg(long)]
    pub vegetarian: bool,

    #[arg(long)]
    pub no_dairy: bool,

    #[arg(long)]
    pub no_nuts: bool,

    #[arg(long)]
    pub prefer_rice: bool,

    #[arg(long)]
    pub prefer_pasta: bool,

    #[arg(long)]
    pub prefer_chicken: bool,

    #[arg(long)]
    pub prefer_fish: bool,

    /// Cheat meal to favor (repeatable).
    #[arg(long = "cheat")]
    pub cheat_meals: Vec<String>,

    /// Seed for reproducible plans.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Write the generated plan as JSON.
    #[arg(long)]
    pub out: Option<PathBuf>,
}

impl PlanArgs {
    pub fn to_request(&self) -> PlanRequest {
        PlanRequest {
            daily_budget_kcal: self.budget,
            exercise_kcal: self.exercise,
            current_consumed_kcal: self.consumed,
            goal: self.goal,
            meals_count: self.meals,
            preferences: Preferences {
                vegetarian: self.vegetarian,
                no_dairy: self.no_dairy,
                no_nuts: self.no_nuts,
                prefer_rice: self.prefer_rice,
                prefer_pasta: self.prefer_pasta,
                prefer_chicken: self.prefer_chicken,
                prefer_fish: self.prefer_fish,
                cheat_meals: self.cheat_meals.clone(),
            },
        }
    }
}

#[derive(Args, Debug, Clone)]
pub struct BudgetArgs {
    #[arg(long, value_enum)]
    pub sex: Sex,

    #[arg(long)]
    pub height_cm: f64,

    #[arg(long)]
    pub weight_kg: f64,

    #[arg(long, default_value = "30")]
    pub age: u32,

    #[arg(long, value_enum, default_value = "sedentary")]
    pub activity: ActivityLevel,

    #[arg(long, value_enum, default_value = "maintain")]
    pub goal: Goal,
}
