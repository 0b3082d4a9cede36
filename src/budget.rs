//! Daily calorie budget from body metrics (Mifflin-St Jeor).

use serde::{Deserialize, Serialize};

use crate::error::{PlanError, Result};
use crate::models::Goal;

pub const DEFAULT_AGE_YEARS: u32 = 30;
pub const MIN_LOSE_BUDGET_KCAL: f64 = 1200.0;
pub const LOSE_DEFICIT_KCAL: f64 = 500.0;
pub const GAIN_SURPLUS_KCAL: f64 = 300.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Sex {
    Male,
    Female,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ActivityLevel {
    #[default]
    Sedentary,
    Light,
    Moderate,
    Intense,
}

impl ActivityLevel {
    pub fn factor(self) -> f64 {
        match self {
            ActivityLevel::Sedentary => 1.2,
            ActivityLevel::Light => 1.375,
            ActivityLevel::Moderate => 1.55,
            ActivityLevel::Intense => 1.725,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BodyProfile {
    pub sex: Sex,
    pub height_cm: f64,
    pub weight_kg: f64,
    pub age_years: u32,
    pub activity: ActivityLevel,
}

impl BodyProfile {
    pub fn validate(&self) -> Result<()> {
        if !(self.height_cm.is_finite() && self.height_cm > 0.0) {
            return Err(PlanError::InvalidInput(format!(
                "height must be positive, got {}",
                self.height_cm
            )));
        }
        if !(self.weight_kg.is_finite() && self.weight_kg > 0.0) {
            return Err(PlanError::InvalidInput(format!(
                "weight must be positive, got {}",
                self.weight_kg
            )));
        }
        Ok(())
    }
}

/// Basal metabolic rate in kcal/day.
pub fn basal_metabolic_rate(profile: &BodyProfile) -> f64 {
    let offset = match profile.sex {
        Sex::Male => 5.0,
        Sex::Female => -161.0,
    };
    10.0 * profile.weight_kg + 6.25 * profile.height_cm - 5.0 * profile.age_years as f64 + offset
}

/// Total daily energy expenditure: BMR times the activity factor.
pub fn total_daily_expenditure(profile: &BodyProfile) -> f64 {
    basal_metabolic_rate(profile) * profile.activity.factor()
}

/// Suggested daily budget for a goal.
pub fn compute_daily_budget(profile: &BodyProfile, goal: Goal) -> Result<f64> {
    profile.validate()?;
    let tdee = total_daily_expenditure(profile);
    Ok(match goal {
        Goal::Lose => (tdee - LOSE_DEFICIT_KCAL).max(MIN_LOSE_BUDGET_KCAL),
        Goal::Gain => tdee + GAIN_SURPLUS_KCAL,
        Goal::Maintain => tdee,
    })
}
