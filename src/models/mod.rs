pub mod food;
pub mod plan;
pub mod request;

pub use food::{FoodRecord, Macro};
pub use plan::{MacroTargets, OmittedSlot, Plan, PlanItem, RefineOutcome, RefineReport};
pub use request::{Goal, PlanRequest, Preferences};
