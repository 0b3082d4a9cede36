use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{PlanError, Result};
use crate::planner::constants::{
    CONVERGENCE_TOLERANCE_KCAL, FALLBACK_ASSUMED_DENSITY, MAX_REFINE_ITERATIONS,
    MIN_SCORING_DENSITY, NUDGE_CLAMP_MAX_G, NUDGE_STEP_G, NUDGE_THRESHOLD_KCAL, PREFERRED_BONUS,
    SCORE_JITTER_MAX, SIZE_PENALTY, SIZE_PENALTY_MAX_G, SIZE_PENALTY_MIN_G, TOP_K,
};

/// Runtime-configurable scoring and refinement weights.
///
/// Defaults come from [`crate::planner::constants`]; a JSON config file may
/// override any subset of them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlannerConfig {
    /// Size of the best-scored pool the pick is drawn from.
    pub top_k: usize,
    pub preferred_bonus: f64,
    pub size_penalty: f64,
    pub size_penalty_min_g: u32,
    pub size_penalty_max_g: u32,
    /// Upper bound of the uniform score jitter. Zero disables it.
    pub jitter_max: f64,
    pub min_scoring_density: f64,
    pub fallback_density: f64,
    pub tolerance_kcal: f64,
    pub nudge_threshold_kcal: f64,
    pub nudge_step_g: f64,
    pub nudge_clamp_max_g: f64,
    pub max_refine_iterations: usize,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            top_k: TOP_K,
            preferred_bonus: PREFERRED_BONUS,
            size_penalty: SIZE_PENALTY,
            size_penalty_min_g: SIZE_PENALTY_MIN_G,
            size_penalty_max_g: SIZE_PENALTY_MAX_G,
            jitter_max: SCORE_JITTER_MAX,
            min_scoring_density: MIN_SCORING_DENSITY,
            fallback_density: FALLBACK_ASSUMED_DENSITY,
            tolerance_kcal: CONVERGENCE_TOLERANCE_KCAL,
            nudge_threshold_kcal: NUDGE_THRESHOLD_KCAL,
            nudge_step_g: NUDGE_STEP_G,
            nudge_clamp_max_g: NUDGE_CLAMP_MAX_G,
            max_refine_iterations: MAX_REFINE_ITERATIONS,
        }
    }
}

impl PlannerConfig {
    pub fn validate(&self) -> Result<()> {
        if self.top_k == 0 {
            return Err(PlanError::InvalidConfig("top_k must be at least 1".into()));
        }
        if self.size_penalty_min_g > self.size_penalty_max_g {
            return Err(PlanError::InvalidConfig(format!(
                "size penalty band is inverted: {} > {}",
                self.size_penalty_min_g, self.size_penalty_max_g
            )));
        }

        let non_negative = [
            ("preferred_bonus", self.preferred_bonus),
            ("size_penalty", self.size_penalty),
            ("jitter_max", self.jitter_max),
            ("min_scoring_density", self.min_scoring_density),
            ("nudge_threshold_kcal", self.nudge_threshold_kcal),
            ("nudge_step_g", self.nudge_step_g),
        ];
        for (name, value) in non_negative {
            if !value.is_finite() || value < 0.0 {
                return Err(PlanError::InvalidConfig(format!(
                    "{} must be non-negative, got {}",
                    name, value
                )));
            }
        }

        let positive = [
            ("fallback_density", self.fallback_density),
            ("tolerance_kcal", self.tolerance_kcal),
            ("nudge_clamp_max_g", self.nudge_clamp_max_g),
        ];
        for (name, value) in positive {
            if !value.is_finite() || value <= 0.0 {
                return Err(PlanError::InvalidConfig(format!(
                    "{} must be positive, got {}",
                    name, value
                )));
            }
        }

        Ok(())
    }
}

/// Load a planner config from a JSON file. Missing keys keep their defaults.
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<PlannerConfig> {
    let content = fs::read_to_string(path)?;
    let config: PlannerConfig = serde_json::from_str(&content)?;
    config.validate()?;
    Ok(config)
}

/// Write a planner config as pretty JSON.
pub fn save_config<P: AsRef<Path>>(path: P, config: &PlannerConfig) -> Result<()> {
    let json = serde_json::to_string_pretty(config)?;
    fs::write(path, json)?;
    Ok(())
}
