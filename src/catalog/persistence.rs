use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::error::Result;
use crate::models::FoodRecord;

fn is_csv(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.eq_ignore_ascii_case("csv"))
        .unwrap_or(false)
}

/// Keep the last record for each lowercase name, preserving first-seen order.
fn dedup_by_name(foods: Vec<FoodRecord>) -> Vec<FoodRecord> {
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut out: Vec<FoodRecord> = Vec::with_capacity(foods.len());
    for food in foods {
        match index.get(&food.key()) {
            Some(&i) => out[i] = food,
            None => {
                index.insert(food.key(), out.len());
                out.push(food);
            }
        }
    }
    out
}

/// Load a food catalog from a JSON array or a `.csv` file with a header row.
///
/// Deduplicates by lowercase name (last occurrence wins).
pub fn load_foods<P: AsRef<Path>>(path: P) -> Result<Vec<FoodRecord>> {
    let path = path.as_ref();

    let foods: Vec<FoodRecord> = if is_csv(path) {
        let mut reader = csv::Reader::from_path(path)?;
        reader
            .deserialize()
            .collect::<std::result::Result<Vec<FoodRecord>, csv::Error>>()?
    } else {
        let content = fs::read_to_string(path)?;
        serde_json::from_str(&content)?
    };

    Ok(dedup_by_name(foods))
}

/// Save a food catalog as pretty JSON, deduplicated by lowercase name.
pub fn save_foods<P: AsRef<Path>>(path: P, foods: &[FoodRecord]) -> Result<()> {
    let deduped = dedup_by_name(foods.to_vec());
    let json = serde_json::to_string_pretty(&deduped)?;
    fs::write(path, json)?;
    Ok(())
}
