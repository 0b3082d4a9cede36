use serde::{Deserialize, Serialize};

use crate::models::food::{FoodRecord, Macro};

/// Daily macro targets derived from a request.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MacroTargets {
    pub target_total_kcal: f64,
    pub carbs_g: f64,
    pub protein_g: f64,
    pub fat_g: f64,
}

impl MacroTargets {
    /// Daily grams for one macro.
    pub fn grams(&self, kind: Macro) -> f64 {
        match kind {
            Macro::Carbs => self.carbs_g,
            Macro::Protein => self.protein_g,
            Macro::Fat => self.fat_g,
        }
    }

    /// Daily kcal for one macro.
    pub fn kcal(&self, kind: Macro) -> f64 {
        self.grams(kind) * kind.kcal_per_gram()
    }

    /// Grams of `kind` each meal should carry.
    pub fn grams_per_meal(&self, kind: Macro, meals_count: u32) -> f64 {
        if meals_count == 0 {
            return 0.0;
        }
        self.grams(kind) / meals_count as f64
    }
}

/// A food portion placed in one meal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanItem {
    pub food: FoodRecord,

    /// Number of portions, at least 1.
    pub quantity: u32,

    /// Always a member of the portion grid.
    pub portion_grams: u32,

    /// 1-based meal the item belongs to.
    pub meal_index: u32,

    /// Macro slot that chose this food.
    pub category: Macro,
}

impl PlanItem {
    pub fn new(food: FoodRecord, portion_grams: u32, meal_index: u32, category: Macro) -> Self {
        Self {
            food,
            quantity: 1,
            portion_grams,
            meal_index,
            category,
        }
    }

    /// Total grams across all portions.
    #[inline]
    pub fn total_grams(&self) -> f64 {
        self.portion_grams as f64 * self.quantity as f64
    }

    #[inline]
    pub fn kcal(&self) -> f64 {
        self.food.kcal_for(self.total_grams())
    }

    /// Grams of `kind` this item contributes.
    pub fn macro_grams(&self, kind: Macro) -> f64 {
        self.food.macro_per_100g(kind) * self.total_grams() / 100.0
    }
}

/// How the convergence refiner finished.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RefineOutcome {
    /// Total kcal ended within tolerance of the target.
    #[default]
    Converged,
    /// An iteration changed no portion, so no further progress was possible.
    Stalled,
    /// The iteration cap was reached outside the tolerance band.
    Exhausted,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RefineReport {
    pub outcome: RefineOutcome,
    /// Iterations that rescaled at least one portion.
    pub iterations: usize,
    pub final_total_kcal: f64,
}

/// A slot the assembler could not fill.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OmittedSlot {
    pub meal_index: u32,
    pub category: Macro,
}

/// A generated meal plan. Built fresh by every generation call.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Plan {
    /// Items ordered by meal, then by slot order.
    pub items: Vec<PlanItem>,
    pub meals_count: u32,
    pub targets: MacroTargets,
    pub omitted_slots: Vec<OmittedSlot>,
    pub refinement: RefineReport,
}

impl Plan {
    pub fn total_kcal(&self) -> f64 {
        self.items.iter().map(PlanItem::kcal).sum()
    }

    /// Grams of each macro across the whole plan, as (carbs, protein, fat).
    pub fn macro_totals(&self) -> (f64, f64, f64) {
        let sum = |kind| self.items.iter().map(|i| i.macro_grams(kind)).sum::<f64>();
        (sum(Macro::Carbs), sum(Macro::Protein), sum(Macro::Fat))
    }

    /// Items of one meal, in slot order.
    pub fn meal(&self, meal_index: u32) -> impl Iterator<Item = &PlanItem> {
        self.items
            .iter()
            .filter(move |item| item.meal_index == meal_index)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Every slot of every meal was filled.
    pub fn is_complete(&self) -> bool {
        self.omitted_slots.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rice_item(meal_index: u32) -> PlanItem {
        PlanItem::new(
            FoodRecord::new("White Rice", 130.0, 28.0, 2.7, 0.3),
            200,
            meal_index,
            Macro::Carbs,
        )
    }

    #[test]
    fn test_item_kcal_scales_with_quantity() {
        let mut item = rice_item(1);
        assert!((item.kcal() - 260.0).abs() < 0.001);

        item.quantity = 2;
        assert!((item.kcal() - 520.0).abs() < 0.001);
        assert!((item.macro_grams(Macro::Carbs) - 112.0).abs() < 0.001);
    }

    #[test]
    fn test_plan_totals_and_meals() {
        let plan = Plan {
            items: vec![rice_item(1), rice_item(2), rice_item(2)],
            meals_count: 2,
            ..Default::default()
        };

        assert!((plan.total_kcal() - 780.0).abs() < 0.001);
        assert_eq!(plan.meal(2).count(), 2);
        assert_eq!(plan.meal(3).count(), 0);

        let (carbs, _, _) = plan.macro_totals();
        assert!((carbs - 168.0).abs() < 0.001);
        assert!(plan.is_complete());
    }

    #[test]
    fn test_targets_per_meal() {
        let targets = MacroTargets {
            target_total_kcal: 1800.0,
            carbs_g: 180.0,
            protein_g: 180.0,
            fat_g: 40.0,
        };
        assert!((targets.grams_per_meal(Macro::Carbs, 3) - 60.0).abs() < 1e-9);
        assert!((targets.kcal(Macro::Fat) - 360.0).abs() < 1e-9);
        assert_eq!(targets.grams_per_meal(Macro::Carbs, 0), 0.0);
    }
}
