use std::collections::HashSet;

use rand::Rng;
use rand::seq::SliceRandom;
use tracing::debug;

use crate::config::PlannerConfig;
use crate::models::{FoodRecord, Macro};
use crate::planner::quantize::quantize;

/// Scored food for one slot.
#[derive(Debug, Clone, Copy)]
struct Candidate<'a> {
    food: &'a FoodRecord,
    grams: u32,
    score: f64,
}

/// Inputs describing one (meal, macro) slot.
#[derive(Debug, Clone, Copy)]
pub struct SlotRequest<'a> {
    pub category: Macro,
    /// Grams of `category` this meal should carry.
    pub target_grams: f64,
    pub preferred_tokens: &'a [String],
    /// Lowercase names already used anywhere in the plan.
    pub used_global: &'a HashSet<String>,
    /// Lowercase names already used in the current meal.
    pub used_meal: &'a HashSet<String>,
}

/// Which stage produced a selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionPath {
    /// Scored among foods unused anywhere in the plan.
    Primary,
    /// Scored among foods unused in this meal; global reuse allowed.
    GlobalReuse,
    /// Uniform pick among trace-macro foods with an assumed density.
    Fallback,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Selection<'a> {
    pub food: &'a FoodRecord,
    pub grams: u32,
    pub path: SelectionPath,
}

/// Penalty for quantized portions outside the comfortable size band.
fn size_penalty(grams: u32, config: &PlannerConfig) -> f64 {
    if grams < config.size_penalty_min_g || grams > config.size_penalty_max_g {
        config.size_penalty
    } else {
        0.0
    }
}

/// Whether the food's name contains any preferred token.
pub fn is_preferred(food: &FoodRecord, preferred_tokens: &[String]) -> bool {
    let name = food.key();
    preferred_tokens.iter().any(|tok| name.contains(tok.as_str()))
}

fn jitter<R: Rng + ?Sized>(config: &PlannerConfig, rng: &mut R) -> f64 {
    if config.jitter_max > 0.0 {
        rng.gen_range(0.0..config.jitter_max)
    } else {
        0.0
    }
}

/// Score every food dense enough in the slot's macro. Lower is better.
///
/// score = |quantized - needed| + size penalty - preferred bonus + jitter
fn score_candidates<'a, R: Rng + ?Sized>(
    foods: impl Iterator<Item = &'a FoodRecord>,
    slot: &SlotRequest,
    config: &PlannerConfig,
    rng: &mut R,
) -> Vec<Candidate<'a>> {
    foods
        .filter(|food| food.macro_per_100g(slot.category) > config.min_scoring_density)
        .map(|food| {
            let density = food.macro_per_100g(slot.category);
            let grams_needed = slot.target_grams / density * 100.0;
            let grams = quantize(grams_needed);
            let diff = (grams as f64 - grams_needed).abs();
            let bonus = if is_preferred(food, slot.preferred_tokens) {
                config.preferred_bonus
            } else {
                0.0
            };
            let score = diff + size_penalty(grams, config) - bonus + jitter(config, rng);

            Candidate { food, grams, score }
        })
        .collect()
}

/// Sort ascending by score and pick uniformly among the best `top_k`.
fn pick_from_top<'a, R: Rng + ?Sized>(
    mut candidates: Vec<Candidate<'a>>,
    config: &PlannerConfig,
    rng: &mut R,
) -> Option<Candidate<'a>> {
    candidates.sort_by(|a, b| a.score.total_cmp(&b.score));
    candidates.truncate(config.top_k.max(1));
    candidates.choose(rng).copied()
}

/// Choose a food and quantized portion for one slot.
///
/// Stages:
/// 1. Score foods unused anywhere in the plan.
/// 2. Re-score allowing foods already used in earlier meals.
/// 3. Pick uniformly among the remaining foods that carry any of the macro,
///    sizing the portion with an assumed density when theirs is only a trace.
///
/// Returns `None` when nothing in the pool can fill the slot. A food is never
/// chosen twice within the same meal.
pub fn select_candidate<'a, R: Rng + ?Sized>(
    pool: &'a [FoodRecord],
    slot: &SlotRequest,
    config: &PlannerConfig,
    rng: &mut R,
) -> Option<Selection<'a>> {
    if pool.is_empty() {
        return None;
    }

    // Stage 1: fresh foods only
    let fresh = pool.iter().filter(|f| {
        let key = f.key();
        !slot.used_global.contains(&key) && !slot.used_meal.contains(&key)
    });
    let candidates = score_candidates(fresh, slot, config, rng);
    if let Some(chosen) = pick_from_top(candidates, config, rng) {
        return Some(Selection {
            food: chosen.food,
            grams: chosen.grams,
            path: SelectionPath::Primary,
        });
    }

    // Stage 2: allow reuse across meals
    let reusable = pool.iter().filter(|f| !slot.used_meal.contains(&f.key()));
    let candidates = score_candidates(reusable, slot, config, rng);
    if let Some(chosen) = pick_from_top(candidates, config, rng) {
        debug!(
            category = %slot.category,
            food = %chosen.food.name,
            "slot filled by reusing a food from an earlier meal"
        );
        return Some(Selection {
            food: chosen.food,
            grams: chosen.grams,
            path: SelectionPath::GlobalReuse,
        });
    }

    // Stage 3: trace-macro foods with an assumed density
    let remaining: Vec<&FoodRecord> = pool
        .iter()
        .filter(|f| !slot.used_meal.contains(&f.key()) && f.macro_per_100g(slot.category) > 0.0)
        .collect();
    let food = *remaining.choose(rng)?;

    let density = food.macro_per_100g(slot.category);
    let assumed = if density > config.min_scoring_density {
        density
    } else {
        config.fallback_density
    };
    let grams = quantize(slot.target_grams / assumed * 100.0);

    debug!(
        category = %slot.category,
        food = %food.name,
        grams,
        "slot filled by fallback pick"
    );

    Some(Selection {
        food,
        grams,
        path: SelectionPath::Fallback,
    })
}
