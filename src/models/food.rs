use serde::{Deserialize, Serialize};

use crate::planner::constants::{CARBS_KCAL_PER_G, FAT_KCAL_PER_G, PROTEIN_KCAL_PER_G};

/// One of the three macronutrient categories used for ratio targeting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Macro {
    Carbs,
    Protein,
    Fat,
}

impl Macro {
    /// Order in which a meal's slots are filled.
    pub const ASSEMBLY_ORDER: [Macro; 3] = [Macro::Protein, Macro::Carbs, Macro::Fat];

    /// Caloric density in kcal per gram.
    pub fn kcal_per_gram(self) -> f64 {
        match self {
            Macro::Carbs => CARBS_KCAL_PER_G,
            Macro::Protein => PROTEIN_KCAL_PER_G,
            Macro::Fat => FAT_KCAL_PER_G,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Macro::Carbs => "carbs",
            Macro::Protein => "protein",
            Macro::Fat => "fat",
        }
    }
}

impl std::fmt::Display for Macro {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// A catalog food with its nutrition expressed per 100 g.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    pub name: String,

    #[serde(rename = "caloriesPer100g")]
    pub calories_per_100g: f64,

    #[serde(rename = "carbsGPer100g", default)]
    pub carbs_g_per_100g: f64,

    #[serde(rename = "proteinGPer100g", default)]
    pub protein_g_per_100g: f64,

    #[serde(rename = "fatGPer100g", default)]
    pub fat_g_per_100g: f64,
}

impl FoodRecord {
    pub fn new(name: &str, calories: f64, carbs: f64, protein: f64, fat: f64) -> Self {
        Self {
            id: None,
            name: name.to_string(),
            calories_per_100g: calories,
            carbs_g_per_100g: carbs,
            protein_g_per_100g: protein,
            fat_g_per_100g: fat,
        }
    }

    /// Grams of `kind` per 100 g of this food.
    #[inline]
    pub fn macro_per_100g(&self, kind: Macro) -> f64 {
        match kind {
            Macro::Carbs => self.carbs_g_per_100g,
            Macro::Protein => self.protein_g_per_100g,
            Macro::Fat => self.fat_g_per_100g,
        }
    }

    /// Energy of a portion of `grams`.
    #[inline]
    pub fn kcal_for(&self, grams: f64) -> f64 {
        self.calories_per_100g * grams / 100.0
    }

    /// Named, with finite non-negative calories and macro densities.
    pub fn is_valid(&self) -> bool {
        let densities = [
            self.calories_per_100g,
            self.carbs_g_per_100g,
            self.protein_g_per_100g,
            self.fat_g_per_100g,
        ];
        !self.name.trim().is_empty() && densities.iter().all(|d| d.is_finite() && *d >= 0.0)
    }

    /// Whether the lowercase name contains `token` (already lowercase).
    pub fn name_contains(&self, token: &str) -> bool {
        self.key().contains(token)
    }

    /// Canonical key for lookups (lowercase name).
    pub fn key(&self) -> String {
        self.name.to_lowercase()
    }

    /// Key used to deduplicate provider results: the id when present.
    pub fn dedup_key(&self) -> String {
        match &self.id {
            Some(id) if !id.is_empty() => format!("id:{}", id),
            _ => format!("name:{}", self.key()),
        }
    }
}
