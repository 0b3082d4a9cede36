use crate::models::Goal;

// ─────────────────────────────────────────────────────────────────────────────
// Portion grid
// ─────────────────────────────────────────────────────────────────────────────

/// Smallest allowed portion in grams.
pub const PORTION_MIN_G: u32 = 20;

/// Largest allowed portion in grams.
pub const PORTION_MAX_G: u32 = 500;

/// Granularity of the portion grid in grams.
pub const PORTION_STEP_G: u32 = 10;

/// Number of members in the portion grid (20, 30, ..., 500).
pub const PORTION_STEP_COUNT: usize =
    ((PORTION_MAX_G - PORTION_MIN_G) / PORTION_STEP_G + 1) as usize;

/// Every allowed portion size, ascending.
pub fn portion_steps() -> impl Iterator<Item = u32> {
    (PORTION_MIN_G..=PORTION_MAX_G).step_by(PORTION_STEP_G as usize)
}

// ─────────────────────────────────────────────────────────────────────────────
// Caloric densities and ratio table
// ─────────────────────────────────────────────────────────────────────────────

pub const CARBS_KCAL_PER_G: f64 = 4.0;
pub const PROTEIN_KCAL_PER_G: f64 = 4.0;
pub const FAT_KCAL_PER_G: f64 = 9.0;

/// Share of the daily calories assigned to each macro.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MacroRatios {
    pub carbs: f64,
    pub protein: f64,
    pub fat: f64,
}

pub const LOSE_RATIOS: MacroRatios = MacroRatios {
    carbs: 0.40,
    protein: 0.40,
    fat: 0.20,
};

pub const GAIN_RATIOS: MacroRatios = MacroRatios {
    carbs: 0.50,
    protein: 0.30,
    fat: 0.20,
};

pub const MAINTAIN_RATIOS: MacroRatios = MacroRatios {
    carbs: 0.45,
    protein: 0.30,
    fat: 0.25,
};

/// Ratio row for a goal.
pub fn ratios_for(goal: Goal) -> MacroRatios {
    match goal {
        Goal::Lose => LOSE_RATIOS,
        Goal::Gain => GAIN_RATIOS,
        Goal::Maintain => MAINTAIN_RATIOS,
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Restriction vocabularies (matched as lowercase substrings of food names)
// ─────────────────────────────────────────────────────────────────────────────

pub const MEAT_FISH_TOKENS: &[&str] = &[
    "chicken", "turkey", "pork", "beef", "meat", "tuna", "fish", "salmon", "steak", "ham",
    "bacon",
];

pub const DAIRY_TOKENS: &[&str] = &["yogurt", "cheese", "milk", "cream", "butter"];

pub const NUT_TOKENS: &[&str] = &["almond", "walnut", "peanut", "pistachio", "hazelnut"];

// ─────────────────────────────────────────────────────────────────────────────
// Selection weights
// ─────────────────────────────────────────────────────────────────────────────

/// Candidates need more than this many grams of the macro per 100 g to be scored.
pub const MIN_SCORING_DENSITY: f64 = 1.0;

/// Assumed macro density for the last-resort pick when a food carries only a trace.
pub const FALLBACK_ASSUMED_DENSITY: f64 = 10.0;

/// Added to the score of portions outside the comfortable size band.
pub const SIZE_PENALTY: f64 = 20.0;
pub const SIZE_PENALTY_MIN_G: u32 = 30;
pub const SIZE_PENALTY_MAX_G: u32 = 400;

/// Subtracted from the score of foods matching a preferred token.
pub const PREFERRED_BONUS: f64 = 50.0;

/// Upper bound of the uniform jitter added to every score.
pub const SCORE_JITTER_MAX: f64 = 10.0;

/// Size of the best-scored pool the final pick is drawn from.
pub const TOP_K: usize = 8;

// ─────────────────────────────────────────────────────────────────────────────
// Convergence refiner
// ─────────────────────────────────────────────────────────────────────────────

/// Refinement stops once the plan is this close to the target.
pub const CONVERGENCE_TOLERANCE_KCAL: f64 = 50.0;

/// Above this gap an item the rescale cannot move is nudged by one step.
pub const NUDGE_THRESHOLD_KCAL: f64 = 100.0;

pub const NUDGE_STEP_G: f64 = 10.0;

/// Ceiling applied to a nudged portion before it is snapped back onto the grid.
pub const NUDGE_CLAMP_MAX_G: f64 = 600.0;

pub const MAX_REFINE_ITERATIONS: usize = 10;

// ─────────────────────────────────────────────────────────────────────────────
// Candidate provider terms
// ─────────────────────────────────────────────────────────────────────────────

pub const CARBS_SEARCH_TERMS: &[&str] = &["rice", "pasta", "bread", "oat", "potato"];

pub const PROTEIN_SEARCH_TERMS: &[&str] =
    &["chicken", "turkey", "egg", "tuna", "lentil", "yogurt"];

pub const FAT_SEARCH_TERMS: &[&str] = &["avocado", "almond", "walnut", "oil", "cheese"];

/// Short terms that sweep in foods the macro terms miss.
pub const BROAD_SEARCH_TERMS: &[&str] = &[
    "a", "e", "i", "o", "u", "ra", "pa", "po", "le", "yo", "nu", "av", "al",
];

/// Per-term result limit when collecting the candidate pool.
pub const DEFAULT_SEARCH_LIMIT: usize = 50;
