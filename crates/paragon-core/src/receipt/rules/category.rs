//! Category inference from item names.

use crate::models::receipt::Category;

/// Keyword tables checked in order; the first category with a substring
/// hit wins, so overlaps between tables resolve by position.
const CATEGORY_KEYWORDS: &[(Category, &[&str])] = &[
    (
        Category::Produce,
        &[
            "banana", "apple", "orange", "lettuce", "tomato", "carrot", "onion", "potato",
            "vegetable", "fruit", "berry", "grape", "pepper", "cucumber", "broccoli", "spinach",
        ],
    ),
    (
        Category::Dairy,
        &["milk", "cheese", "yogurt", "butter", "cream", "sour cream", "cottage cheese"],
    ),
    (
        Category::Meat,
        &[
            "chicken", "beef", "pork", "turkey", "fish", "salmon", "steak", "bacon", "sausage",
            "ham",
        ],
    ),
    (
        Category::Staples,
        &["bread", "rice", "pasta", "flour", "sugar", "salt", "oil", "oats", "cereal", "crackers"],
    ),
    (
        Category::Snacks,
        &["chip", "cookie", "cracker", "pretzel", "popcorn", "nuts", "candy", "chocolate"],
    ),
    (
        Category::Drinks,
        &["soda", "juice", "water", "coffee", "tea", "beer", "wine", "drink", "beverage"],
    ),
    (Category::Frozen, &["frozen", "ice cream", "pizza", "frozen food"]),
    (
        Category::Cleaning,
        &[
            "soap", "detergent", "cleaner", "paper towel", "tissue", "toilet paper", "shampoo",
            "toothpaste",
        ],
    ),
];

/// Infer a category from an item name.
///
/// Case-insensitive substring match over the fixed keyword tables; no hit
/// resolves to [`Category::Other`]. Pure and total.
pub fn infer_category(name: &str) -> Category {
    let name = name.to_lowercase();

    for (category, keywords) in CATEGORY_KEYWORDS {
        if keywords.iter().any(|keyword| name.contains(keyword)) {
            return *category;
        }
    }

    Category::Other
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_case_insensitive() {
        assert_eq!(infer_category("BANANA"), Category::Produce);
        assert_eq!(infer_category("banana"), Category::Produce);
        assert_eq!(infer_category("Organic Bananas"), Category::Produce);
    }

    #[test]
    fn test_unknown_name_is_other() {
        assert_eq!(infer_category("ZQX-113 MISC"), Category::Other);
        assert_eq!(infer_category(""), Category::Other);
    }

    #[test]
    fn test_substring_match() {
        assert_eq!(infer_category("Whole Milk 2%"), Category::Dairy);
        assert_eq!(infer_category("Rolled Oats"), Category::Staples);
        assert_eq!(infer_category("Frozen Peas"), Category::Frozen);
        assert_eq!(infer_category("Dish Soap"), Category::Cleaning);
    }

    #[test]
    fn test_table_order_resolves_overlaps() {
        // "chocolate milk" hits Dairy ("milk") before Snacks ("chocolate")
        assert_eq!(infer_category("Chocolate Milk"), Category::Dairy);
        // "steak" contains "tea", but Meat precedes Drinks
        assert_eq!(infer_category("Ribeye Steak"), Category::Meat);
    }

    #[test]
    fn test_deterministic() {
        assert_eq!(infer_category("banana"), infer_category("banana"));
    }
}
