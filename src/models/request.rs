use serde::{Deserialize, Serialize};

use crate::error::{PlanError, Result};

/// Body-weight goal driving the macro ratio table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Goal {
    #[default]
    Maintain,
    Lose,
    Gain,
}

impl Goal {
    pub fn label(self) -> &'static str {
        match self {
            Goal::Maintain => "maintain",
            Goal::Lose => "lose",
            Goal::Gain => "gain",
        }
    }
}

/// Dietary restrictions, macro preferences and cheat meals.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Preferences {
    pub vegetarian: bool,
    pub no_dairy: bool,
    pub no_nuts: bool,

    pub prefer_rice: bool,
    pub prefer_pasta: bool,
    pub prefer_chicken: bool,
    pub prefer_fish: bool,

    /// Free-text cheat meals, used as preferred name tokens.
    pub cheat_meals: Vec<String>,
}

/// Everything a single generation call needs besides the food pool.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanRequest {
    pub daily_budget_kcal: f64,
    #[serde(default)]
    pub exercise_kcal: f64,
    #[serde(default)]
    pub current_consumed_kcal: f64,
    #[serde(default)]
    pub goal: Goal,
    pub meals_count: u32,
    #[serde(default)]
    pub preferences: Preferences,
}

impl PlanRequest {
    pub fn new(daily_budget_kcal: f64, goal: Goal, meals_count: u32) -> Self {
        Self {
            daily_budget_kcal,
            exercise_kcal: 0.0,
            current_consumed_kcal: 0.0,
            goal,
            meals_count,
            preferences: Preferences::default(),
        }
    }

    /// Reject requests the pipeline cannot run on.
    pub fn validate(&self) -> Result<()> {
        if self.meals_count == 0 {
            return Err(PlanError::InvalidRequest(
                "meals count must be at least 1".to_string(),
            ));
        }

        let amounts = [
            ("daily budget", self.daily_budget_kcal),
            ("exercise", self.exercise_kcal),
            ("consumed", self.current_consumed_kcal),
        ];
        for (label, value) in amounts {
            if !value.is_finite() || value < 0.0 {
                return Err(PlanError::InvalidRequest(format!(
                    "{} must be a non-negative number, got {}",
                    label, value
                )));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_accepts_plain_request() {
        assert!(PlanRequest::new(2000.0, Goal::Maintain, 3).validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_zero_meals() {
        let err = PlanRequest::new(2000.0, Goal::Maintain, 0)
            .validate()
            .unwrap_err();
        assert!(matches!(err, PlanError::InvalidRequest(_)));
    }

    #[test]
    fn test_validate_rejects_negative_amounts() {
        let mut request = PlanRequest::new(2000.0, Goal::Lose, 3);
        request.exercise_kcal = -10.0;
        assert!(request.validate().is_err());

        let mut request = PlanRequest::new(2000.0, Goal::Lose, 3);
        request.current_consumed_kcal = -1.0;
        assert!(request.validate().is_err());

        assert!(PlanRequest::new(-5.0, Goal::Lose, 3).validate().is_err());
        assert!(PlanRequest::new(f64::NAN, Goal::Lose, 3).validate().is_err());
    }

    #[test]
    fn test_request_json_uses_camel_case() {
        let json = r#"{
            "dailyBudgetKcal": 1800,
            "goal": "lose",
            "mealsCount": 4,
            "preferences": {"vegetarian": true, "cheatMeals": ["pizza"]}
        }"#;
        let request: PlanRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.goal, Goal::Lose);
        assert_eq!(request.meals_count, 4);
        assert_eq!(request.exercise_kcal, 0.0);
        assert!(request.preferences.vegetarian);
        assert!(!request.preferences.no_dairy);
        assert_eq!(request.preferences.cheat_meals, vec!["pizza".to_string()]);
    }
}
