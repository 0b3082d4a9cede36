use crate::models::{FoodRecord, Plan, RefineOutcome};

/// Display a plan grouped by meal, with totals against the targets.
pub fn display_plan(plan: &Plan) {
    if plan.is_empty() {
        println!("No plan generated (no usable foods for these preferences).");
        return;
    }

    println!();
    println!("=== Meal Plan ===");

    let max_name_len = plan
        .items
        .iter()
        .map(|i| i.food.name.len())
        .max()
        .unwrap_or(10);

    for meal_index in 1..=plan.meals_count {
        let items: Vec<_> = plan.meal(meal_index).collect();
        let meal_kcal: f64 = items.iter().map(|i| i.kcal()).sum();

        println!();
        println!("Meal {} ({:.0} kcal)", meal_index, meal_kcal);

        if items.is_empty() {
            println!("  (no foods available for this meal)");
            continue;
        }

        for item in items {
            let qty = if item.quantity > 1 {
                format!(" x{}", item.quantity)
            } else {
                String::new()
            };
            println!(
                "  {:<8} {:<width$} {:>4} g{} - {:>4.0} kcal",
                format!("[{}]", item.category),
                item.food.name,
                item.portion_grams,
                qty,
                item.kcal(),
                width = max_name_len
            );
        }
    }

    let targets = &plan.targets;
    let (carbs, protein, fat) = plan.macro_totals();

    println!();
    println!("--- Summary ---");
    println!("Total items: {}", plan.len());
    println!(
        "Calories: {:.0} / {:.0} kcal",
        plan.total_kcal(),
        targets.target_total_kcal
    );
    println!("Carbs:    {:>5.0} / {:.0} g", carbs, targets.carbs_g);
    println!("Protein:  {:>5.0} / {:.0} g", protein, targets.protein_g);
    println!("Fat:      {:>5.0} / {:.0} g", fat, targets.fat_g);

    let outcome = match plan.refinement.outcome {
        RefineOutcome::Converged => "within tolerance",
        RefineOutcome::Stalled => "stopped, portions could not move further",
        RefineOutcome::Exhausted => "stopped at the iteration limit",
    };
    println!(
        "Refinement: {} after {} iteration(s)",
        outcome, plan.refinement.iterations
    );

    if !plan.is_complete() {
        let slots: Vec<String> = plan
            .omitted_slots
            .iter()
            .map(|s| format!("meal {} {}", s.meal_index, s.category))
            .collect();
        println!("Omitted slots: {}", slots.join(", "));
    }
    println!();
}

/// Display a simple list of foods with their details.
pub fn display_food_list(foods: &[&FoodRecord], title: &str) {
    if foods.is_empty() {
        println!("{}: (none)", title);
        return;
    }

    println!();
    println!("=== {} ({} items) ===", title, foods.len());
    println!();

    for food in foods {
        println!(
            "  {} - {} kcal/100g, C:{} P:{} F:{}",
            food.name,
            food.calories_per_100g,
            food.carbs_g_per_100g,
            food.protein_g_per_100g,
            food.fat_g_per_100g
        );
    }

    println!();
}
