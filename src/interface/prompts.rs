use std::path::PathBuf;

use dialoguer::{Confirm, Input, MultiSelect, Select};

use crate::budget::{ActivityLevel, BodyProfile, DEFAULT_AGE_YEARS, Sex, compute_daily_budget};
use crate::catalog::LocalCatalog;
use crate::error::{PlanError, Result};
use crate::models::{Goal, PlanRequest, Preferences};

/// What to do with a previewed plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlanAction {
    Accept,
    Regenerate,
    Decline,
}

fn prompt_number<T>(prompt: &str, default: &str) -> Result<T>
where
    T: std::str::FromStr,
{
    let input: String = Input::new()
        .with_prompt(prompt)
        .default(default.to_string())
        .interact_text()?;

    input
        .trim()
        .parse()
        .map_err(|_| PlanError::InvalidInput(format!("Invalid number: {}", input)))
}

/// Prompt for the body-weight goal.
pub fn prompt_goal() -> Result<Goal> {
    let goals = [Goal::Maintain, Goal::Lose, Goal::Gain];
    let labels: Vec<&str> = goals.iter().map(|g| g.label()).collect();

    let selection = Select::new()
        .with_prompt("What is your goal?")
        .items(&labels)
        .default(0)
        .interact()?;

    Ok(goals[selection])
}

/// Prompt for body metrics used to estimate a budget.
pub fn prompt_body_profile() -> Result<BodyProfile> {
    let sex = Select::new()
        .with_prompt("Sex")
        .items(&["male", "female"])
        .default(0)
        .interact()?;

    let height_cm: f64 = prompt_number("Height (cm)", "170")?;
    let weight_kg: f64 = prompt_number("Weight (kg)", "70")?;
    let age_years: u32 = prompt_number("Age", &DEFAULT_AGE_YEARS.to_string())?;

    let levels = [
        ActivityLevel::Sedentary,
        ActivityLevel::Light,
        ActivityLevel::Moderate,
        ActivityLevel::Intense,
    ];
    let activity = Select::new()
        .with_prompt("Activity level")
        .items(&["sedentary", "light", "moderate", "intense"])
        .default(0)
        .interact()?;

    Ok(BodyProfile {
        sex: if sex == 0 { Sex::Male } else { Sex::Female },
        height_cm,
        weight_kg,
        age_years,
        activity: levels[activity],
    })
}

/// Prompt for the daily budget, optionally estimating it from body metrics.
pub fn prompt_daily_budget(goal: Goal) -> Result<f64> {
    if prompt_yes_no("Estimate your budget from body metrics?", false)? {
        let profile = prompt_body_profile()?;
        let budget = compute_daily_budget(&profile, goal)?.round();
        println!("Estimated budget: {:.0} kcal", budget);
        return Ok(budget);
    }

    prompt_number("What is your daily calorie budget?", "2000")
}

/// Prompt for cheat meals, confirming near-miss names against the catalog.
pub fn prompt_cheat_meals(catalog: &LocalCatalog) -> Result<Vec<String>> {
    let mut cheats = Vec::new();

    loop {
        let input: String = Input::new()
            .with_prompt("Enter a cheat meal (or press Enter to finish)")
            .allow_empty(true)
            .interact_text()?;

        let input = input.trim();
        if input.is_empty() {
            break;
        }

        if catalog.get_food(input).is_some() || catalog.is_empty() {
            cheats.push(input.to_string());
            println!("Added: {}", input);
            continue;
        }

        let suggestions: Vec<String> = catalog
            .suggest(input, 5)
            .into_iter()
            .map(|f| f.name.clone())
            .collect();

        if suggestions.is_empty() {
            // Free text still works as a preferred token
            cheats.push(input.to_string());
            println!("Added: {} (not in catalog)", input);
            continue;
        }

        let mut options = suggestions.clone();
        options.push(format!("Keep '{}'", input));

        let selection = Select::new()
            .with_prompt("Did you mean?")
            .items(&options)
            .default(0)
            .interact()?;

        let chosen = if selection < suggestions.len() {
            suggestions[selection].clone()
        } else {
            input.to_string()
        };
        println!("Added: {}", chosen);
        cheats.push(chosen);
    }

    Ok(cheats)
}

/// Prompt for restrictions, macro preferences and cheat meals.
pub fn prompt_preferences(catalog: &LocalCatalog) -> Result<Preferences> {
    let restrictions = MultiSelect::new()
        .with_prompt("Dietary restrictions (space to toggle)")
        .items(&["vegetarian", "no dairy", "no nuts"])
        .interact()?;

    let mut prefs = Preferences {
        vegetarian: restrictions.contains(&0),
        no_dairy: restrictions.contains(&1),
        no_nuts: restrictions.contains(&2),
        ..Default::default()
    };

    // Meat and fish preferences are not offered to vegetarians
    let mut options = vec!["rice", "pasta"];
    if !prefs.vegetarian {
        options.extend(["chicken", "fish"]);
    }
    let liked = MultiSelect::new()
        .with_prompt("Foods you would like more of")
        .items(&options)
        .interact()?;

    for idx in liked {
        match options[idx] {
            "rice" => prefs.prefer_rice = true,
            "pasta" => prefs.prefer_pasta = true,
            "chicken" => prefs.prefer_chicken = true,
            "fish" => prefs.prefer_fish = true,
            _ => {}
        }
    }

    prefs.cheat_meals = prompt_cheat_meals(catalog)?;
    Ok(prefs)
}

/// Prompt for accept / regenerate / decline on a previewed plan.
pub fn prompt_plan_action() -> Result<PlanAction> {
    let selection = Select::new()
        .with_prompt("What would you like to do with this plan?")
        .items(&["accept", "regenerate", "decline"])
        .default(0)
        .interact()?;

    Ok(match selection {
        0 => PlanAction::Accept,
        1 => PlanAction::Regenerate,
        _ => PlanAction::Decline,
    })
}

/// Prompt for a file path.
pub fn prompt_path(prompt: &str, default: &str) -> Result<PathBuf> {
    let input: String = Input::new()
        .with_prompt(prompt)
        .default(default.to_string())
        .interact_text()?;
    Ok(PathBuf::from(input.trim()))
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}

/// Collect all inputs for one plan request.
pub fn collect_plan_request(catalog: &LocalCatalog) -> Result<PlanRequest> {
    let goal = prompt_goal()?;
    let daily_budget_kcal = prompt_daily_budget(goal)?;
    let exercise_kcal: f64 = prompt_number("Calories burned exercising today?", "0")?;
    let current_consumed_kcal: f64 =
        prompt_number("How many calories have you already consumed today?", "0")?;
    let meals_count: u32 = prompt_number("How many meals?", "3")?;
    let preferences = prompt_preferences(catalog)?;

    let request = PlanRequest {
        daily_budget_kcal,
        exercise_kcal,
        current_consumed_kcal,
        goal,
        meals_count,
        preferences,
    };
    request.validate()?;
    Ok(request)
}
