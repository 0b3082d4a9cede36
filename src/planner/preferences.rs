use tracing::debug;

use crate::models::{FoodRecord, Preferences};
use crate::planner::constants::{DAIRY_TOKENS, MEAT_FISH_TOKENS, NUT_TOKENS};

/// Pool left after applying restrictions, plus the tokens to favor.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilteredPool {
    pub foods: Vec<FoodRecord>,
    /// Lowercase tokens, in flag-declaration order followed by cheat meals.
    pub preferred_tokens: Vec<String>,
}

/// Tokens a food name must not contain under these restrictions.
pub fn excluded_tokens(prefs: &Preferences) -> Vec<&'static str> {
    let mut tokens = Vec::new();
    if prefs.vegetarian {
        tokens.extend_from_slice(MEAT_FISH_TOKENS);
    }
    if prefs.no_dairy {
        tokens.extend_from_slice(DAIRY_TOKENS);
    }
    if prefs.no_nuts {
        tokens.extend_from_slice(NUT_TOKENS);
    }
    tokens
}

/// Ordered preferred-token list built from the preference flags and cheat meals.
///
/// Duplicates and blank cheat meals are dropped.
pub fn preferred_tokens(prefs: &Preferences) -> Vec<String> {
    let flags = [
        (prefs.prefer_rice, "rice"),
        (prefs.prefer_pasta, "pasta"),
        (prefs.prefer_chicken, "chicken"),
        (prefs.prefer_fish, "fish"),
    ];

    let mut tokens: Vec<String> = Vec::new();
    let candidates = flags
        .iter()
        .filter(|(active, _)| *active)
        .map(|(_, token)| token.to_string())
        .chain(prefs.cheat_meals.iter().map(|c| c.trim().to_lowercase()));

    for token in candidates {
        if !token.is_empty() && !tokens.contains(&token) {
            tokens.push(token);
        }
    }
    tokens
}

/// Drop foods that violate the restrictions and extract the preferred tokens.
///
/// Filtering may leave the pool empty; downstream selection tolerates that.
pub fn apply_preferences(pool: &[FoodRecord], prefs: &Preferences) -> FilteredPool {
    let excluded = excluded_tokens(prefs);

    let foods: Vec<FoodRecord> = pool
        .iter()
        .filter(|food| {
            let name = food.key();
            !excluded.iter().any(|tok| name.contains(tok))
        })
        .cloned()
        .collect();

    debug!(
        before = pool.len(),
        after = foods.len(),
        "applied dietary restrictions"
    );

    FilteredPool {
        foods,
        preferred_tokens: preferred_tokens(prefs),
    }
}
