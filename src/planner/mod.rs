pub mod assembly;
pub mod constants;
pub mod preferences;
pub mod quantize;
pub mod refine;
pub mod selection;
pub mod targets;

pub use assembly::{DraftPlan, assemble_meals};
pub use constants::*;
pub use preferences::{FilteredPool, apply_preferences, excluded_tokens, preferred_tokens};
pub use quantize::{is_on_grid, quantize};
pub use refine::refine_portions;
pub use selection::{Selection, SelectionPath, SlotRequest, is_preferred, select_candidate};
pub use targets::{calculate_macro_targets, target_total_kcal};

use rand::Rng;
use tracing::{info, warn};

use crate::config::PlannerConfig;
use crate::error::Result;
use crate::models::{FoodRecord, Plan, PlanRequest};

/// Generate a balanced plan with the default weights.
pub fn generate_plan<R: Rng + ?Sized>(
    request: &PlanRequest,
    food_pool: &[FoodRecord],
    rng: &mut R,
) -> Result<Plan> {
    generate_plan_with_config(request, food_pool, &PlannerConfig::default(), rng)
}

/// Generate a balanced plan.
///
/// Pipeline: macro targets, preference filter, meal assembly, convergence
/// refinement. The only failures are request or config validation; an unusable
/// pool yields a plan with fewer items (possibly none) and its omitted slots
/// listed. All state is local to the call, so identical inputs and an
/// identically seeded `rng` produce identical plans.
pub fn generate_plan_with_config<R: Rng + ?Sized>(
    request: &PlanRequest,
    food_pool: &[FoodRecord],
    config: &PlannerConfig,
    rng: &mut R,
) -> Result<Plan> {
    request.validate()?;
    config.validate()?;

    let targets = calculate_macro_targets(request);

    // Records with negative densities never enter the pipeline
    let usable: Vec<FoodRecord> = food_pool.iter().filter(|f| f.is_valid()).cloned().collect();
    if usable.len() < food_pool.len() {
        warn!(
            dropped = food_pool.len() - usable.len(),
            "ignored invalid food records"
        );
    }

    let filtered = apply_preferences(&usable, &request.preferences);
    if filtered.foods.is_empty() {
        warn!("no foods left after applying dietary restrictions");
    }

    let mut draft = assemble_meals(&filtered, &targets, request.meals_count, config, rng);
    let refinement = refine_portions(&mut draft.items, targets.target_total_kcal, config);

    info!(
        items = draft.items.len(),
        omitted = draft.omitted_slots.len(),
        target_kcal = targets.target_total_kcal,
        planned_kcal = refinement.final_total_kcal,
        outcome = ?refinement.outcome,
        "generated meal plan"
    );

    Ok(Plan {
        items: draft.items,
        meals_count: request.meals_count,
        targets,
        omitted_slots: draft.omitted_slots,
        refinement,
    })
}
