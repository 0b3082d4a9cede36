use std::collections::HashSet;

use strsim::jaro_winkler;
use tracing::{debug, warn};

use crate::error::Result;
use crate::models::{FoodRecord, Preferences};
use crate::planner::constants::{
    BROAD_SEARCH_TERMS, CARBS_SEARCH_TERMS, FAT_SEARCH_TERMS, PROTEIN_SEARCH_TERMS,
};
use crate::planner::preferences::preferred_tokens;

/// Minimum Jaro-Winkler similarity for a fuzzy suggestion.
const SUGGESTION_THRESHOLD: f64 = 0.7;

/// Source of catalog foods. Implementations may do IO; the planner never calls them.
pub trait CandidateProvider {
    fn search_foods(&self, term: &str, limit: usize) -> Result<Vec<FoodRecord>>;
}

/// In-memory catalog searched by case-insensitive name substring.
pub struct LocalCatalog {
    foods: Vec<FoodRecord>,
}

impl LocalCatalog {
    pub fn new(mut foods: Vec<FoodRecord>) -> Self {
        foods.sort_by_key(|f| f.key());
        Self { foods }
    }

    /// Get a food by name (case-insensitive).
    pub fn get_food(&self, name: &str) -> Option<&FoodRecord> {
        let key = name.to_lowercase();
        self.foods.iter().find(|f| f.key() == key)
    }

    /// Catalog names close to `term`, best match first.
    pub fn suggest(&self, term: &str, limit: usize) -> Vec<&FoodRecord> {
        let term = term.trim().to_lowercase();
        let mut scored: Vec<(&FoodRecord, f64)> = self
            .foods
            .iter()
            .map(|f| (f, jaro_winkler(&f.key(), &term)))
            .filter(|(_, score)| *score > SUGGESTION_THRESHOLD)
            .collect();

        scored.sort_by(|a, b| b.1.total_cmp(&a.1));
        scored.into_iter().take(limit).map(|(f, _)| f).collect()
    }

    pub fn len(&self) -> usize {
        self.foods.len()
    }

    pub fn is_empty(&self) -> bool {
        self.foods.is_empty()
    }
}

impl CandidateProvider for LocalCatalog {
    fn search_foods(&self, term: &str, limit: usize) -> Result<Vec<FoodRecord>> {
        let term = term.trim().to_lowercase();
        Ok(self
            .foods
            .iter()
            .filter(|f| term.is_empty() || f.name_contains(&term))
            .take(limit)
            .cloned()
            .collect())
    }
}

/// Search terms for a pool: per-macro terms, then preferred tokens, then broad sweeps.
pub fn search_terms(prefs: &Preferences) -> Vec<String> {
    let mut terms: Vec<String> = Vec::new();
    let all = CARBS_SEARCH_TERMS
        .iter()
        .chain(PROTEIN_SEARCH_TERMS)
        .chain(FAT_SEARCH_TERMS)
        .map(|t| t.to_string())
        .chain(preferred_tokens(prefs))
        .chain(BROAD_SEARCH_TERMS.iter().map(|t| t.to_string()));

    for term in all {
        if !terms.contains(&term) {
            terms.push(term);
        }
    }
    terms
}

/// Query the provider once per search term and merge the results.
///
/// Results are deduplicated by id (or lowercase name when the id is absent),
/// and records with non-positive calories or negative macros are discarded.
/// A failing term is logged and skipped.
pub fn collect_candidate_pool<P: CandidateProvider + ?Sized>(
    provider: &P,
    prefs: &Preferences,
    limit: usize,
) -> Vec<FoodRecord> {
    let mut seen: HashSet<String> = HashSet::new();
    let mut pool: Vec<FoodRecord> = Vec::new();

    for term in search_terms(prefs) {
        let results = match provider.search_foods(&term, limit) {
            Ok(results) => results,
            Err(e) => {
                warn!(term = %term, error = %e, "food search failed, skipping term");
                continue;
            }
        };

        for food in results {
            if food.calories_per_100g <= 0.0 || !food.is_valid() {
                continue;
            }
            if seen.insert(food.dedup_key()) {
                pool.push(food);
            }
        }
    }

    debug!(pool = pool.len(), "collected candidate pool");
    pool
}
