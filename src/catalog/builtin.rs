use crate::models::FoodRecord;

/// Generic foods used when the catalog yields nothing. Values per 100 g.
pub fn builtin_foods() -> Vec<FoodRecord> {
    [
        ("White Rice", 130.0, 28.0, 2.7, 0.3),
        ("Cooked Pasta", 131.0, 25.0, 5.0, 1.1),
        ("Whole Wheat Bread", 247.0, 41.0, 13.0, 4.2),
        ("Oats", 389.0, 66.0, 17.0, 7.0),
        ("Boiled Potato", 86.0, 20.0, 1.7, 0.1),
        ("Chicken Breast", 165.0, 0.0, 31.0, 3.6),
        ("Turkey", 135.0, 0.0, 29.0, 1.0),
        ("Egg", 143.0, 1.1, 13.0, 9.5),
        ("Tuna", 132.0, 0.0, 29.0, 0.6),
        ("Cooked Lentils", 116.0, 20.0, 9.0, 0.4),
        ("Plain Yogurt", 61.0, 4.7, 3.5, 3.3),
        ("Avocado", 160.0, 9.0, 2.0, 15.0),
        ("Almonds", 579.0, 22.0, 21.0, 50.0),
        ("Walnuts", 654.0, 14.0, 15.0, 65.0),
        ("Olive Oil", 884.0, 0.0, 0.0, 100.0),
        ("Cheddar Cheese", 403.0, 1.3, 25.0, 33.0),
    ]
    .into_iter()
    .map(|(name, kcal, carbs, protein, fat)| FoodRecord::new(name, kcal, carbs, protein, fat))
    .collect()
}
