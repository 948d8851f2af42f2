//! Grand total extraction.

use super::amounts::normalize_decimal;
use super::patterns::{AMOUNT_LABELED, SUBTOTAL_LABELED, TOTAL_LABELED, TOTAL_LEADING};
use super::FieldExtractor;

/// Total line extractor.
///
/// Label-anchored patterns for `TOTAL`, `AMOUNT`, and `SUBTOTAL`, plus a
/// bare leading `TOTAL <amount>` shape, tried in that order. A captured
/// amount that fails normalization counts as no match and the next
/// pattern is tried.
pub struct TotalExtractor;

impl TotalExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl Default for TotalExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for TotalExtractor {
    type Output = f64;

    fn extract(&self, line: &str) -> Option<f64> {
        for pattern in [
            &*TOTAL_LABELED,
            &*AMOUNT_LABELED,
            &*SUBTOTAL_LABELED,
            &*TOTAL_LEADING,
        ] {
            if let Some(caps) = pattern.captures(line) {
                if let Ok(total) = normalize_decimal(&caps[1]) {
                    return Some(total);
                }
            }
        }

        None
    }
}
