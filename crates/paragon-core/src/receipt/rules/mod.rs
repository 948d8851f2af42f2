//! Rule-based field extractors for receipt lines.

pub mod amounts;
pub mod category;
pub mod dates;
pub mod items;
pub mod patterns;
pub mod store;
pub mod totals;

pub use amounts::{normalize_decimal, parse_price, MAX_PLAUSIBLE_PRICE};
pub use category::infer_category;
pub use dates::DateExtractor;
pub use items::{ItemLineMatcher, LineMatch};
pub use store::StoreExtractor;
pub use totals::TotalExtractor;

/// Trait for single-line field extractors.
///
/// Each extractor tries an ordered list of candidate patterns against one
/// line and stops at the first success; the scan windows that decide which
/// lines an extractor sees belong to the parser, not the extractor.
pub trait FieldExtractor {
    /// The type of value this extractor produces.
    type Output;

    /// Extract the field from a single line.
    fn extract(&self, line: &str) -> Option<Self::Output>;
}
