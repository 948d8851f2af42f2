//! Item line classification.
//!
//! Each body line is classified as header/footer noise, a structured item
//! line, a loosely-priced fallback item, or a continuation of the previous
//! item. At most one item is emitted per line.

use regex::Regex;
use tracing::trace;

use crate::models::receipt::ReceiptLineItem;

use super::amounts::parse_price;
use super::category::infer_category;
use super::patterns::{
    CONTINUATION_LINE, ITEM_AT_PRICE, ITEM_CURRENCY_PRICE, ITEM_FALLBACK, ITEM_NAME_PRICE,
    ITEM_QTY_PRICE, ITEM_QTY_X_PRICE, ITEM_UNIT_TOTAL, NUMERIC_ONLY_NAME,
};

/// Header and payment-footer keywords that disqualify a line outright.
const NOISE_KEYWORDS: [&str; 9] = [
    "ITEM",
    "DESCRIPTION",
    "PRICE",
    "QTY",
    "SUBTOTAL",
    "AMOUNT DUE",
    "CASH",
    "CHANGE",
    "CARD",
];

/// Keywords a structurally-matched item name may not contain.
const NAME_BLOCKLIST: [&str; 3] = ["TOTAL", "TAX", "SUBTOTAL"];

/// Footer labels rejected by the fallback matcher, including the cash,
/// change, and tax-authority labels printed on Portuguese receipts.
const FALLBACK_BLOCKLIST: [&str; 9] = [
    "TOTAL",
    "TAX",
    "SUBTOTAL",
    "DINHEIRO",
    "TROCO",
    "CASH",
    "CHANGE",
    "CONTRIBUINTE",
    "PRODUTOR",
];

/// How a structural pattern lays out its captures.
#[derive(Debug, Clone, Copy)]
enum ItemShape {
    /// Group 1 is the name, group 2 the price.
    NamePrice,
    /// Group 1 is the name, group 2 a quantity token, group 3 the price.
    NameQuantityPrice,
}

/// Structural patterns in match order. Overlapping shapes resolve by
/// position in this list, so it must not be reordered.
fn structural_patterns() -> [(&'static Regex, ItemShape); 6] {
    [
        (&*ITEM_NAME_PRICE, ItemShape::NamePrice),
        (&*ITEM_QTY_X_PRICE, ItemShape::NameQuantityPrice),
        (&*ITEM_AT_PRICE, ItemShape::NamePrice),
        (&*ITEM_CURRENCY_PRICE, ItemShape::NamePrice),
        (&*ITEM_QTY_PRICE, ItemShape::NameQuantityPrice),
        (&*ITEM_UNIT_TOTAL, ItemShape::NameQuantityPrice),
    ]
}

/// Outcome of classifying a single body line.
#[derive(Debug, Clone, PartialEq)]
pub enum LineMatch {
    /// The line produced a purchased item.
    Item(ReceiptLineItem),
    /// Header or payment-footer noise.
    Noise,
    /// Weight/unit annotation belonging to the previous item.
    Continuation,
    /// Nothing recognizable on this line.
    NoMatch,
}

/// Classifier for lines in the receipt body.
pub struct ItemLineMatcher;

impl ItemLineMatcher {
    pub fn new() -> Self {
        Self
    }

    /// Classify one line. `prev_line_item_priced` reports whether the
    /// immediately preceding line yielded an item with a price, which
    /// gates the continuation check.
    pub fn classify(&self, line: &str, prev_line_item_priced: bool) -> LineMatch {
        let upper = line.to_uppercase();

        if is_noise(&upper) {
            return LineMatch::Noise;
        }

        if let Some(item) = self.match_structural(line) {
            return LineMatch::Item(item);
        }

        if let Some(item) = self.match_fallback(line) {
            return LineMatch::Item(item);
        }

        if prev_line_item_priced && CONTINUATION_LINE.is_match(line) {
            trace!("consumed continuation line: {line}");
            return LineMatch::Continuation;
        }

        LineMatch::NoMatch
    }

    /// Try the ordered structural patterns; the first pattern that matches
    /// with an acceptable name claims the line. A claimed line whose price
    /// is implausible is abandoned to the fallback stage rather than
    /// offered to later structural patterns.
    fn match_structural(&self, line: &str) -> Option<ReceiptLineItem> {
        for (pattern, shape) in structural_patterns() {
            let Some(caps) = pattern.captures(line) else {
                continue;
            };

            let name = caps[1].trim();
            let upper = name.to_uppercase();
            if name.chars().count() < 2 || NAME_BLOCKLIST.iter().any(|k| upper.contains(k)) {
                // Not an item name; the next pattern may split the line
                // differently
                continue;
            }

            let (quantity, price_token) = match shape {
                ItemShape::NamePrice => (None, &caps[2]),
                ItemShape::NameQuantityPrice => (Some(caps[2].to_string()), &caps[3]),
            };

            return match parse_price(price_token) {
                Ok(price) => Some(ReceiptLineItem {
                    name: name.to_string(),
                    quantity,
                    price: Some(price),
                    category: infer_category(name),
                }),
                Err(_) => None,
            };
        }

        None
    }

    /// Loose extraction: the last decimal token in the line is the price,
    /// everything before it is the name. Applies the same price bound, a
    /// name-length filter, the extended footer blocklist, and rejects
    /// names that are purely numeric or punctuation.
    fn match_fallback(&self, line: &str) -> Option<ReceiptLineItem> {
        let caps = ITEM_FALLBACK.captures(line)?;

        let name = caps[1].trim();
        let price = parse_price(&caps[2]).ok()?;

        let name_chars = name.chars().count();
        if name_chars < 2 || name_chars >= 100 {
            return None;
        }

        let upper = name.to_uppercase();
        if FALLBACK_BLOCKLIST.iter().any(|k| upper.contains(k)) {
            return None;
        }

        if NUMERIC_ONLY_NAME.is_match(name) {
            return None;
        }

        Some(ReceiptLineItem {
            name: name.to_string(),
            quantity: None,
            price: Some(price),
            category: infer_category(name),
        })
    }
}

impl Default for ItemLineMatcher {
    fn default() -> Self {
        Self::new()
    }
}

/// Header/footer noise check. `TOTAL` and `TAX` occurrences only
/// disqualify lines that do not begin with a digit, so item lines whose
/// text merely contains those substrings after a leading quantity survive
/// to the matching stages.
fn is_noise(upper: &str) -> bool {
    if NOISE_KEYWORDS.iter().any(|k| upper.contains(k)) {
        return true;
    }

    let starts_with_digit = upper.starts_with(|c: char| c.is_ascii_digit());
    (upper.contains("TOTAL") || upper.contains("TAX")) && !starts_with_digit
}
