use std::sync::LazyLock;

use crate::catalog::FoodCatalog;
use crate::models::FoodItem;

/// Built-in catalog, constructed once on first use.
pub static STANDARD_CATALOG: LazyLock<FoodCatalog> = LazyLock::new(|| FoodCatalog {
    breakfast: vec![
        FoodItem::new("Oatmeal", "1 cup cooked", 27.0, 6.0, 3.0, 158.0),
        FoodItem::new("Eggs", "2 large", 1.0, 12.0, 10.0, 144.0),
        FoodItem::new("Greek Yogurt", "1 cup", 9.0, 23.0, 5.0, 170.0),
        FoodItem::new("Banana", "1 medium", 27.0, 1.0, 0.0, 105.0),
        FoodItem::new("Whole Wheat Toast", "2 slices", 24.0, 8.0, 2.0, 138.0),
        FoodItem::new("Peanut Butter", "2 tbsp", 6.0, 8.0, 16.0, 188.0),
    ],
    lunch: vec![
        FoodItem::new("Grilled Chicken Breast", "4 oz", 0.0, 35.0, 4.0, 187.0),
        FoodItem::new("Brown Rice", "1 cup cooked", 45.0, 5.0, 2.0, 216.0),
        FoodItem::new("Mixed Salad Greens", "2 cups", 2.0, 1.0, 0.0, 10.0),
        FoodItem::new("Olive Oil", "1 tbsp", 0.0, 0.0, 14.0, 119.0),
        FoodItem::new("Quinoa", "1 cup cooked", 39.0, 8.0, 4.0, 222.0),
        FoodItem::new("Salmon", "4 oz", 0.0, 23.0, 11.0, 206.0),
    ],
    dinner: vec![
        FoodItem::new("Lean Beef", "4 oz", 0.0, 33.0, 13.0, 250.0),
        FoodItem::new("Sweet Potato", "1 medium", 24.0, 2.0, 0.0, 103.0),
        FoodItem::new("Broccoli", "1 cup", 6.0, 4.0, 0.0, 31.0),
        FoodItem::new("Avocado", "1/2 medium", 6.0, 1.0, 11.0, 114.0),
        FoodItem::new("Tofu", "4 oz", 3.0, 16.0, 8.0, 144.0),
        FoodItem::new("Whole Wheat Pasta", "1 cup cooked", 37.0, 7.0, 1.0, 174.0),
    ],
});
