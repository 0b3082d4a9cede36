pub mod budget;
pub mod catalog;
pub mod cli;
pub mod config;
pub mod error;
pub mod interface;
pub mod logging;
pub mod models;
pub mod planner;

pub use config::PlannerConfig;
pub use error::{PlanError, Result};
pub use models::{FoodRecord, Goal, Macro, Plan, PlanItem, PlanRequest, Preferences};
pub use planner::{generate_plan, generate_plan_with_config};
