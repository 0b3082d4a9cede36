use assert_float_eq::assert_float_absolute_eq;

use calorie_planner_rs::models::{Goal, Macro, PlanRequest};
use calorie_planner_rs::planner::{
    PORTION_MAX_G, PORTION_MIN_G, calculate_macro_targets, is_on_grid, quantize, ratios_for,
    target_total_kcal,
};

#[test]
fn test_lose_goal_carb_targets() {
    let request = PlanRequest::new(1800.0, Goal::Lose, 3);
    let targets = calculate_macro_targets(&request);

    assert_float_absolute_eq!(targets.target_total_kcal, 1800.0, 1e-9);
    assert_float_absolute_eq!(targets.carbs_g, 180.0, 1e-9);
    assert_float_absolute_eq!(targets.grams_per_meal(Macro::Carbs, 3), 60.0, 1e-9);
}

#[test]
fn test_macro_kcal_adds_up_to_target() {
    for goal in [Goal::Maintain, Goal::Lose, Goal::Gain] {
        let request = PlanRequest::new(2300.0, goal, 4);
        let targets = calculate_macro_targets(&request);
        let sum: f64 = [Macro::Carbs, Macro::Protein, Macro::Fat]
            .iter()
            .map(|&m| targets.kcal(m))
            .sum();

        assert_float_absolute_eq!(sum, 2300.0, 1e-6);

        let ratios = ratios_for(goal);
        assert_float_absolute_eq!(ratios.carbs + ratios.protein + ratios.fat, 1.0, 1e-9);
    }
}

#[test]
fn test_target_accounts_for_exercise_and_consumption() {
    let mut request = PlanRequest::new(2000.0, Goal::Maintain, 3);
    request.exercise_kcal = 300.0;
    request.current_consumed_kcal = 800.0;
    assert_float_absolute_eq!(target_total_kcal(&request), 1500.0, 1e-9);

    // Overeating clamps to zero rather than going negative
    request.current_consumed_kcal = 5000.0;
    let targets = calculate_macro_targets(&request);
    assert_eq!(targets.target_total_kcal, 0.0);
    assert_eq!(targets.carbs_g, 0.0);
    assert_eq!(targets.protein_g, 0.0);
    assert_eq!(targets.fat_g, 0.0);
}

#[test]
fn test_quantize_boundaries() {
    assert_eq!(quantize(17.0), 20);
    assert_eq!(quantize(505.0), 500);
    assert_eq!(quantize(-40.0), PORTION_MIN_G);
    assert_eq!(quantize(f64::INFINITY), PORTION_MAX_G);
    assert_eq!(quantize(f64::NAN), PORTION_MIN_G);

    // Equidistant inputs resolve to the lower step
    assert_eq!(quantize(255.0), 250);
    assert_eq!(quantize(256.0), 260);
}

#[test]
fn test_quantize_output_is_a_fixed_point() {
    let mut grams = 0.0;
    while grams <= 700.0 {
        let q = quantize(grams);
        assert!(is_on_grid(q), "{} quantized off-grid to {}", grams, q);
        assert_eq!(quantize(q as f64), q);
        grams += 3.7;
    }
}
