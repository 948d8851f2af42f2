//! Common regex patterns for receipt extraction.
//!
//! Several patterns overlap; the order in which callers try them is an
//! observable contract and must not be reshuffled.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Store name patterns (checked near the top of the receipt)
    pub static ref STORE_KNOWN: Regex = Regex::new(
        r"(?i)^(WALMART|TARGET|WHOLE\s*FOODS|KROGER|SAFEWAY|COSTCO|TRADER\s*JOE'?S?|ALDI|PUBLIX)"
    ).unwrap();

    pub static ref STORE_GENERIC: Regex = Regex::new(
        r"(?i)^([A-Z\s&]+)\s*(STORE|MARKET|FOODS|SUPERMARKET)"
    ).unwrap();

    // Date patterns
    pub static ref DATE_NUMERIC: Regex = Regex::new(
        r"\b(\d{1,2})[/\-](\d{1,2})[/\-](\d{2,4})\b"
    ).unwrap();

    pub static ref DATE_MONTH_NAME: Regex = Regex::new(
        r"(?i)\b(Jan|Feb|Mar|Apr|May|Jun|Jul|Aug|Sep|Oct|Nov|Dec)\s+(\d{1,2}),?\s+(\d{2,4})\b"
    ).unwrap();

    // Total patterns (label-anchored, optional currency symbol)
    pub static ref TOTAL_LABELED: Regex = Regex::new(
        r"(?i)TOTAL[:\s]*[€$]?\s*(\d+[.,]\d{2,3})"
    ).unwrap();

    pub static ref AMOUNT_LABELED: Regex = Regex::new(
        r"(?i)AMOUNT[:\s]*[€$]?\s*(\d+[.,]\d{2,3})"
    ).unwrap();

    pub static ref SUBTOTAL_LABELED: Regex = Regex::new(
        r"(?i)SUBTOTAL[:\s]*[€$]?\s*(\d+[.,]\d{2,3})"
    ).unwrap();

    pub static ref TOTAL_LEADING: Regex = Regex::new(
        r"(?i)^TOTAL\s+[€$]?\s*(\d+[.,]\d{2,3})"
    ).unwrap();

    // Structural item line patterns, in matcher order
    pub static ref ITEM_NAME_PRICE: Regex = Regex::new(
        r"^(.+?)\s+(\d+[.,]\d{2,3})\s*$"
    ).unwrap();

    pub static ref ITEM_QTY_X_PRICE: Regex = Regex::new(
        r"^(.+?)\s+(\d+)\s+x\s+(\d+[.,]\d{2,3})"
    ).unwrap();

    pub static ref ITEM_AT_PRICE: Regex = Regex::new(
        r"^(.+?)\s+@\s+(\d+[.,]\d{2,3})"
    ).unwrap();

    pub static ref ITEM_CURRENCY_PRICE: Regex = Regex::new(
        r"^(.+?)\s+[€$](\d+[.,]\d{2,3})$"
    ).unwrap();

    pub static ref ITEM_QTY_PRICE: Regex = Regex::new(
        r"^(.+?)\s+(\d+)\s+(\d+[.,]\d{2,3})"
    ).unwrap();

    pub static ref ITEM_UNIT_TOTAL: Regex = Regex::new(
        r"^(.+?)\s+(\d+[.,]\d{2,3})\s+(\d+[.,]\d{2,3})"
    ).unwrap();

    // Loose fallback: last decimal token is the price, possibly followed
    // by OCR junk such as "8B" or a currency letter
    pub static ref ITEM_FALLBACK: Regex = Regex::new(
        r"(?i)^(.+?)\s+(\d+[.,]\d{1,3})\s*[A-Z¢€$]*$"
    ).unwrap();

    // Names that are only digits, separators, and currency marks
    pub static ref NUMERIC_ONLY_NAME: Regex = Regex::new(
        r"^[\d\s.,€$¢]+$"
    ).unwrap();

    // Weight/volume annotation printed on the line after an item,
    // e.g. "0,540 kg x 1,49 EUR/Kg"
    pub static ref CONTINUATION_LINE: Regex = Regex::new(
        r"(?i)^\d+[.,]\d+\s*(?:kg|g|lb|oz|l|ml)"
    ).unwrap();
}
