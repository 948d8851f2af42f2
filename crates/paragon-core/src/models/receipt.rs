//! Structured receipt data extracted from OCR text.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A structured receipt record.
///
/// Items are ordered by appearance in the source text; duplicates are
/// allowed. After aggregation `date` and `total` are always populated:
/// a missing total is derived from item prices and a missing date
/// defaults to the processing timestamp.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParsedReceipt {
    /// Purchased line items, in source order.
    pub items: Vec<ReceiptLineItem>,

    /// Store name, when one was recognized near the top of the receipt.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub store: Option<String>,

    /// Transaction date.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<DateTime<Utc>>,

    /// Grand total.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total: Option<f64>,
}

impl ParsedReceipt {
    /// Sum of all item prices, treating absent prices as zero.
    pub fn items_total(&self) -> f64 {
        self.items.iter().filter_map(|i| i.price).sum()
    }
}

/// A single purchased item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReceiptLineItem {
    /// Item name as printed on the receipt, trimmed.
    pub name: String,

    /// Quantity token, kept as free text (e.g. "2" or "2L").
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<String>,

    /// Item price, always inside the plausible range when present.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,

    /// Inferred category, never empty.
    pub category: Category,
}

/// Grocery category inferred from an item name.
///
/// Variants are listed in classifier table order; keyword matches in an
/// earlier category win over later ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Category {
    Produce,
    Dairy,
    Meat,
    Staples,
    Snacks,
    Drinks,
    Frozen,
    Cleaning,
    Other,
}

impl Category {
    /// Category name as stored and displayed.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Produce => "Produce",
            Category::Dairy => "Dairy",
            Category::Meat => "Meat",
            Category::Staples => "Staples",
            Category::Snacks => "Snacks",
            Category::Drinks => "Drinks",
            Category::Frozen => "Frozen",
            Category::Cleaning => "Cleaning",
            Category::Other => "Other",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;

    fn sample_receipt() -> ParsedReceipt {
        ParsedReceipt {
            items: vec![
                ReceiptLineItem {
                    name: "Whole Milk".to_string(),
                    quantity: None,
                    price: Some(3.49),
                    category: Category::Dairy,
                },
                ReceiptLineItem {
                    name: "Bananas".to_string(),
                    quantity: Some("2".to_string()),
                    price: Some(2.99),
                    category: Category::Produce,
                },
            ],
            store: Some("WHOLE FOODS".to_string()),
            date: Some(Utc.with_ymd_and_hms(2024, 1, 15, 0, 0, 0).unwrap()),
            total: Some(6.48),
        }
    }

    #[test]
    fn test_items_total_sums_prices() {
        let receipt = sample_receipt();
        assert!((receipt.items_total() - 6.48).abs() < f64::EPSILON);
    }

    #[test]
    fn test_items_total_treats_missing_prices_as_zero() {
        let mut receipt = sample_receipt();
        receipt.items[0].price = None;
        assert!((receipt.items_total() - 2.99).abs() < f64::EPSILON);
    }

    #[test]
    fn test_serde_round_trip() {
        let receipt = sample_receipt();
        let json = serde_json::to_string(&receipt).unwrap();
        let back: ParsedReceipt = serde_json::from_str(&json).unwrap();
        assert_eq!(receipt, back);
    }

    #[test]
    fn test_category_serialized_by_name() {
        let json = serde_json::to_string(&Category::Produce).unwrap();
        assert_eq!(json, "\"Produce\"");
        assert_eq!(Category::Other.as_str(), "Other");
    }
}
