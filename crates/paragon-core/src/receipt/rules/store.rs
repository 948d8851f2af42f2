//! Store name extraction.

use super::patterns::{STORE_GENERIC, STORE_KNOWN};
use super::FieldExtractor;

/// Store name extractor.
///
/// Tries a fixed list of known retail-chain prefixes first, then a
/// generic `<WORDS> STORE|MARKET|FOODS|SUPERMARKET` shape. The matched
/// substring becomes the store name.
pub struct StoreExtractor;

impl StoreExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl Default for StoreExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for StoreExtractor {
    type Output = String;

    fn extract(&self, line: &str) -> Option<String> {
        for pattern in [&*STORE_KNOWN, &*STORE_GENERIC] {
            if let Some(found) = pattern.find(line) {
                return Some(found.as_str().trim().to_string());
            }
        }

        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_chain_prefix() {
        let extractor = StoreExtractor::new();

        assert_eq!(
            extractor.extract("WALMART SUPERCENTER #1234").as_deref(),
            Some("WALMART")
        );
        assert_eq!(
            extractor.extract("WHOLE FOODS MARKET").as_deref(),
            Some("WHOLE FOODS")
        );
        assert_eq!(
            extractor.extract("TRADER JOE'S #552").as_deref(),
            Some("TRADER JOE'S")
        );
    }

    #[test]
    fn test_known_chain_is_case_insensitive() {
        let extractor = StoreExtractor::new();
        assert_eq!(extractor.extract("walmart").as_deref(), Some("walmart"));
    }

    #[test]
    fn test_generic_store_shape() {
        let extractor = StoreExtractor::new();

        assert_eq!(
            extractor.extract("CORNER MARKET").as_deref(),
            Some("CORNER MARKET")
        );
        assert_eq!(
            extractor.extract("GREEN VALLEY FOODS").as_deref(),
            Some("GREEN VALLEY FOODS")
        );
    }

    #[test]
    fn test_no_match_leaves_store_absent() {
        let extractor = StoreExtractor::new();

        assert_eq!(extractor.extract("123 Main St"), None);
        assert_eq!(extractor.extract("Thank you for shopping!"), None);
    }
}
