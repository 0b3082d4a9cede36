use tracing::debug;

use crate::config::PlannerConfig;
use crate::models::{PlanItem, RefineOutcome, RefineReport};
use crate::planner::constants::PORTION_MIN_G;
use crate::planner::quantize::quantize;

fn total_kcal(items: &[PlanItem]) -> f64 {
    items.iter().map(PlanItem::kcal).sum()
}

/// Rescale portions toward `target_kcal`, best effort.
///
/// Each iteration multiplies every portion by `target / current` and snaps it
/// back onto the grid. When the gap is above the nudge threshold, a portion the
/// rescale cannot move is pushed one step in the direction of the gap.
/// Stops when the total is within tolerance, when an iteration changes no
/// portion, or after `max_refine_iterations`.
pub fn refine_portions(
    items: &mut [PlanItem],
    target_kcal: f64,
    config: &PlannerConfig,
) -> RefineReport {
    let mut iterations = 0;

    for _ in 0..config.max_refine_iterations {
        let current = total_kcal(items);
        let delta = target_kcal - current;
        if delta.abs() < config.tolerance_kcal {
            return RefineReport {
                outcome: RefineOutcome::Converged,
                iterations,
                final_total_kcal: current,
            };
        }

        let scale = if current > 0.0 { target_kcal / current } else { 1.0 };
        let mut changed = false;

        for item in items.iter_mut() {
            let old = item.portion_grams;
            let mut next = quantize(old as f64 * scale);

            if next == old && delta.abs() > config.nudge_threshold_kcal {
                let nudged = (old as f64 + config.nudge_step_g * delta.signum())
                    .clamp(PORTION_MIN_G as f64, config.nudge_clamp_max_g);
                next = quantize(nudged);
            }

            if next != old {
                item.portion_grams = next;
                changed = true;
            }
        }

        if !changed {
            debug!(current, target_kcal, "refiner stalled");
            return RefineReport {
                outcome: RefineOutcome::Stalled,
                iterations,
                final_total_kcal: current,
            };
        }

        iterations += 1;
        debug!(
            iteration = iterations,
            scale,
            total = total_kcal(items),
            "refiner rescaled portions"
        );
    }

    let current = total_kcal(items);
    let outcome = if (target_kcal - current).abs() < config.tolerance_kcal {
        RefineOutcome::Converged
    } else {
        RefineOutcome::Exhausted
    };

    RefineReport {
        outcome,
        iterations,
        final_total_kcal: current,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{FoodRecord, Macro};
    use crate::planner::quantize::is_on_grid;

    fn item(name: &str, kcal_per_100g: f64, grams: u32) -> PlanItem {
        PlanItem::new(
            FoodRecord::new(name, kcal_per_100g, 10.0, 10.0, 10.0),
            grams,
            1,
            Macro::Carbs,
        )
    }

    #[test]
    fn test_already_within_tolerance() {
        let mut items = vec![item("A", 100.0, 500), item("B", 100.0, 500)];
        let report = refine_portions(&mut items, 1020.0, &PlannerConfig::default());

        assert_eq!(report.outcome, RefineOutcome::Converged);
        assert_eq!(report.iterations, 0);
        assert_eq!(items[0].portion_grams, 500);
    }

    #[test]
    fn test_scales_toward_target() {
        // 2 x 100 g at 200 kcal/100 g = 400 kcal, target 800
        let mut items = vec![item("A", 200.0, 100), item("B", 200.0, 100)];
        let report = refine_portions(&mut items, 800.0, &PlannerConfig::default());

        assert_eq!(report.outcome, RefineOutcome::Converged);
        assert_eq!(items[0].portion_grams, 200);
        assert_eq!(items[1].portion_grams, 200);
        assert!((report.final_total_kcal - 800.0).abs() < 1e-9);
    }

    #[test]
    fn test_stalls_at_grid_ceiling() {
        // Max portion is 500 g = 50 kcal, far below target
        let mut items = vec![item("Cucumber", 10.0, 500)];
        let report = refine_portions(&mut items, 2000.0, &PlannerConfig::default());

        assert_eq!(report.outcome, RefineOutcome::Stalled);
        assert_eq!(items[0].portion_grams, 500);
    }

    #[test]
    fn test_nudges_when_rescale_is_too_small() {
        // 100 g at 1000 kcal/100 g; target 1120 -> scale 1.12 -> 112 g -> 110 g
        let mut items = vec![item("Dense", 1000.0, 100)];
        let config = PlannerConfig {
            max_refine_iterations: 1,
            ..Default::default()
        };
        let report = refine_portions(&mut items, 1120.0, &config);
        assert_eq!(items[0].portion_grams, 110);
        assert_eq!(report.iterations, 1);

        // 150 kcal + 1000 kcal against 1260: neither portion moves under a 1.096 rescale
        let mut items = vec![item("Light", 30.0, 500), item("Heavy", 5000.0, 20)];
        let report = refine_portions(&mut items, 1260.0, &config);
        // scale ~1.096: Light 548 -> 500 (unchanged, nudged 510 -> 500),
        // Heavy 21.9 -> 20 (nudged to 30)
        assert_eq!(items[0].portion_grams, 500);
        assert_eq!(items[1].portion_grams, 30);
        assert_eq!(report.iterations, 1);
    }

    #[test]
    fn test_zero_total_uses_unit_scale() {
        let mut items = vec![item("Water", 0.0, 200)];
        let report = refine_portions(&mut items, 500.0, &PlannerConfig::default());
        // Nudges never add energy to a zero-calorie food; the loop ends without converging.
        assert_ne!(report.outcome, RefineOutcome::Converged);
        assert!(is_on_grid(items[0].portion_grams));
    }

    #[test]
    fn test_terminal_states_are_consistent() {
        let config = PlannerConfig::default();
        for target in [300.0, 900.0, 1500.0, 2600.0, 4000.0] {
            let mut items = vec![
                item("A", 165.0, 120),
                item("B", 130.0, 200),
                item("C", 884.0, 20),
            ];
            let report = refine_portions(&mut items, target, &config);
            let total = total_kcal(&items);
            assert!((total - report.final_total_kcal).abs() < 1e-9);
            match report.outcome {
                RefineOutcome::Converged => assert!((total - target).abs() < 50.0),
                RefineOutcome::Stalled => {}
                RefineOutcome::Exhausted => {
                    assert_eq!(report.iterations, config.max_refine_iterations)
                }
            }
            assert!(items.iter().all(|i| is_on_grid(i.portion_grams)));
        }
    }

    #[test]
    fn test_empty_plan_stalls() {
        let mut items: Vec<PlanItem> = Vec::new();
        let report = refine_portions(&mut items, 2000.0, &PlannerConfig::default());
        assert_eq!(report.outcome, RefineOutcome::Stalled);
        assert_eq!(report.final_total_kcal, 0.0);

        let report = refine_portions(&mut items, 0.0, &PlannerConfig::default());
        assert_eq!(report.outcome, RefineOutcome::Converged);
    }
}
