use crate::models::{MacroTargets, PlanRequest};
use crate::planner::constants::{
    CARBS_KCAL_PER_G, FAT_KCAL_PER_G, PROTEIN_KCAL_PER_G, ratios_for,
};

/// Calories left to plan: budget plus exercise minus what was already eaten.
pub fn target_total_kcal(request: &PlanRequest) -> f64 {
    (request.daily_budget_kcal + request.exercise_kcal - request.current_consumed_kcal).max(0.0)
}

/// Convert a request into daily per-macro gram targets.
///
/// Each macro receives `total * ratio` kcal, which is divided by the macro's
/// caloric density to get grams.
pub fn calculate_macro_targets(request: &PlanRequest) -> MacroTargets {
    let total = target_total_kcal(request);
    let ratios = ratios_for(request.goal);

    MacroTargets {
        target_total_kcal: total,
        carbs_g: total * ratios.carbs / CARBS_KCAL_PER_G,
        protein_g: total * ratios.protein / PROTEIN_KCAL_PER_G,
        fat_g: total * ratios.fat / FAT_KCAL_PER_G,
    }
}
