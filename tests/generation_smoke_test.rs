use std::collections::HashSet;

use rand::SeedableRng;
use rand::rngs::StdRng;

use calorie_planner_rs::catalog::{LocalCatalog, builtin_foods, collect_candidate_pool};
use calorie_planner_rs::config::PlannerConfig;
use calorie_planner_rs::error::PlanError;
use calorie_planner_rs::models::{FoodRecord, Goal, Macro, PlanRequest, RefineOutcome};
use calorie_planner_rs::planner::{
    MEAT_FISH_TOKENS, generate_plan, generate_plan_with_config, is_on_grid,
};

fn no_protein_foods() -> Vec<FoodRecord> {
    vec![
        FoodRecord::new("Sugar", 387.0, 100.0, 0.0, 0.0),
        FoodRecord::new("Apple", 52.0, 14.0, 0.0, 0.2),
        FoodRecord::new("Olive Oil", 884.0, 0.0, 0.0, 100.0),
        FoodRecord::new("Honey", 304.0, 82.0, 0.0, 0.0),
    ]
}

#[test]
fn test_maintain_plan_fits_budget_or_reports_why() {
    let request = PlanRequest::new(2000.0, Goal::Maintain, 3);
    let mut rng = StdRng::seed_from_u64(42);
    let plan = generate_plan(&request, &builtin_foods(), &mut rng).unwrap();

    assert_eq!(plan.targets.target_total_kcal, 2000.0);
    assert!(plan.len() <= 9);
    assert!(!plan.is_empty());

    match plan.refinement.outcome {
        RefineOutcome::Converged => {
            assert!((plan.total_kcal() - 2000.0).abs() < 50.0);
        }
        RefineOutcome::Stalled | RefineOutcome::Exhausted => {
            assert!((plan.total_kcal() - 2000.0).abs() >= 50.0);
        }
    }
    assert_eq!(plan.refinement.final_total_kcal, plan.total_kcal());
}

#[test]
fn test_plan_items_are_well_formed() {
    let request = PlanRequest::new(2400.0, Goal::Gain, 4);
    let mut rng = StdRng::seed_from_u64(7);
    let plan = generate_plan(&request, &builtin_foods(), &mut rng).unwrap();

    for item in &plan.items {
        assert!(is_on_grid(item.portion_grams), "{} g off grid", item.portion_grams);
        assert!(item.quantity >= 1);
        assert!((1..=4).contains(&item.meal_index));
    }

    for meal_index in 1..=4 {
        let names: Vec<String> = plan.meal(meal_index).map(|i| i.food.key()).collect();
        let unique: HashSet<&String> = names.iter().collect();
        assert_eq!(unique.len(), names.len(), "duplicate food in meal {}", meal_index);
        assert!(names.len() <= 3);
    }
}

#[test]
fn test_missing_protein_sources_omit_protein_slots() {
    let request = PlanRequest::new(1800.0, Goal::Maintain, 3);
    let mut rng = StdRng::seed_from_u64(3);
    let plan = generate_plan(&request, &no_protein_foods(), &mut rng).unwrap();

    assert!(plan.items.iter().all(|i| i.category != Macro::Protein));

    let omitted_protein: Vec<u32> = plan
        .omitted_slots
        .iter()
        .filter(|s| s.category == Macro::Protein)
        .map(|s| s.meal_index)
        .collect();
    assert_eq!(omitted_protein, vec![1, 2, 3]);
    assert!(!plan.is_complete());
}

#[test]
fn test_same_seed_same_plan() {
    let mut request = PlanRequest::new(2100.0, Goal::Lose, 3);
    request.preferences.prefer_rice = true;
    let foods = builtin_foods();

    let a = generate_plan(&request, &foods, &mut StdRng::seed_from_u64(99)).unwrap();
    let b = generate_plan(&request, &foods, &mut StdRng::seed_from_u64(99)).unwrap();

    assert_eq!(a, b);
}

#[test]
fn test_vegetarian_excludes_meat_even_when_preferred() {
    let mut request = PlanRequest::new(2000.0, Goal::Maintain, 3);
    request.preferences.vegetarian = true;
    request.preferences.prefer_chicken = true;

    for seed in 0..5 {
        let mut rng = StdRng::seed_from_u64(seed);
        let plan = generate_plan(&request, &builtin_foods(), &mut rng).unwrap();
        for item in &plan.items {
            let key = item.food.key();
            assert!(
                !MEAT_FISH_TOKENS.iter().any(|t| key.contains(t)),
                "vegetarian plan contains {}",
                item.food.name
            );
        }
    }
}

#[test]
fn test_no_dairy_no_nuts_restrictions() {
    let mut request = PlanRequest::new(2000.0, Goal::Maintain, 3);
    request.preferences.no_dairy = true;
    request.preferences.no_nuts = true;

    let mut rng = StdRng::seed_from_u64(11);
    let plan = generate_plan(&request, &builtin_foods(), &mut rng).unwrap();
    for item in &plan.items {
        let key = item.food.key();
        assert!(!key.contains("cheese") && !key.contains("yogurt"));
        assert!(!key.contains("almond") && !key.contains("walnut"));
    }
}

#[test]
fn test_empty_pool_yields_empty_plan() {
    let request = PlanRequest::new(2000.0, Goal::Maintain, 3);
    let mut rng = StdRng::seed_from_u64(1);
    let plan = generate_plan(&request, &[], &mut rng).unwrap();

    assert!(plan.is_empty());
    assert_eq!(plan.omitted_slots.len(), 9);
    assert_eq!(plan.total_kcal(), 0.0);
}

#[test]
fn test_invalid_requests_are_rejected() {
    let mut rng = StdRng::seed_from_u64(1);

    let zero_meals = PlanRequest::new(2000.0, Goal::Maintain, 0);
    let err = generate_plan(&zero_meals, &builtin_foods(), &mut rng).unwrap_err();
    assert!(matches!(err, PlanError::InvalidRequest(_)));

    let mut negative = PlanRequest::new(2000.0, Goal::Maintain, 3);
    negative.exercise_kcal = -100.0;
    let err = generate_plan(&negative, &builtin_foods(), &mut rng).unwrap_err();
    assert!(matches!(err, PlanError::InvalidRequest(_)));
}

#[test]
fn test_invalid_config_is_rejected() {
    let request = PlanRequest::new(2000.0, Goal::Maintain, 3);
    let config = PlannerConfig {
        top_k: 0,
        ..Default::default()
    };
    let mut rng = StdRng::seed_from_u64(1);

    let err = generate_plan_with_config(&request, &builtin_foods(), &config, &mut rng)
        .unwrap_err();
    assert!(matches!(err, PlanError::InvalidConfig(_)));
}

#[test]
fn test_catalog_pool_feeds_generation() {
    let catalog = LocalCatalog::new(builtin_foods());
    let request = PlanRequest::new(1900.0, Goal::Lose, 2);
    let pool = collect_candidate_pool(&catalog, &request.preferences, 50);
    assert_eq!(pool.len(), builtin_foods().len());

    let mut rng = StdRng::seed_from_u64(5);
    let plan = generate_plan(&request, &pool, &mut rng).unwrap();
    assert!(plan.len() <= 6);
    assert!(!plan.is_empty());
}
