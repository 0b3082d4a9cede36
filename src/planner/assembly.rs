use std::collections::HashSet;

use rand::Rng;
use tracing::debug;

use crate::config::PlannerConfig;
use crate::models::{Macro, MacroTargets, OmittedSlot, PlanItem};
use crate::planner::preferences::FilteredPool;
use crate::planner::selection::{SlotRequest, select_candidate};

/// Unrefined plan produced by the assembler.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DraftPlan {
    pub items: Vec<PlanItem>,
    pub omitted_slots: Vec<OmittedSlot>,
}

/// Fill every (meal, macro) slot in order, one selection per slot.
///
/// The used-name sets live only for the duration of this call. Slots the
/// selector cannot fill are recorded as omitted and skipped.
pub fn assemble_meals<R: Rng + ?Sized>(
    pool: &FilteredPool,
    targets: &MacroTargets,
    meals_count: u32,
    config: &PlannerConfig,
    rng: &mut R,
) -> DraftPlan {
    let mut draft = DraftPlan::default();
    let mut used_global: HashSet<String> = HashSet::new();

    for meal_index in 1..=meals_count {
        let mut used_meal: HashSet<String> = HashSet::new();

        for category in Macro::ASSEMBLY_ORDER {
            let slot = SlotRequest {
                category,
                target_grams: targets.grams_per_meal(category, meals_count),
                preferred_tokens: &pool.preferred_tokens,
                used_global: &used_global,
                used_meal: &used_meal,
            };

            let Some(selection) = select_candidate(&pool.foods, &slot, config, rng) else {
                debug!(meal_index, category = %category, "slot omitted, no candidate");
                draft.omitted_slots.push(OmittedSlot {
                    meal_index,
                    category,
                });
                continue;
            };

            debug!(
                meal_index,
                category = %category,
                food = %selection.food.name,
                grams = selection.grams,
                path = ?selection.path,
                "slot filled"
            );

            let key = selection.food.key();
            let item = PlanItem::new(selection.food.clone(), selection.grams, meal_index, category);
            used_meal.insert(key.clone());
            used_global.insert(key);
            draft.items.push(item);
        }
    }

    draft
}
