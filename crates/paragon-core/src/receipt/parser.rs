//! Receipt parser: a single forward pass over normalized lines.

use std::time::Instant;

use chrono::{NaiveDate, NaiveTime};
use tracing::{debug, info};

use crate::clock::{Clock, SystemClock};
use crate::models::receipt::{ParsedReceipt, ReceiptLineItem};

use super::lines;
use super::rules::{
    DateExtractor, FieldExtractor, ItemLineMatcher, LineMatch, StoreExtractor, TotalExtractor,
};
use super::ReceiptExtractor;

/// Lines from the top searched for a store name.
const STORE_WINDOW: usize = 5;
/// Lines from the bottom searched for a grand total.
const TOTAL_WINDOW: usize = 5;
/// Header lines excluded from item matching.
const HEADER_SKIP: usize = 3;
/// Footer lines excluded from item matching.
const FOOTER_SKIP: usize = 3;

/// Result of receipt extraction.
#[derive(Debug, Clone)]
pub struct ExtractionResult {
    /// Extracted receipt data.
    pub receipt: ParsedReceipt,
    /// Extraction warnings for fields that fell back to defaults.
    pub warnings: Vec<String>,
    /// Processing time in milliseconds.
    pub processing_time_ms: u64,
}

/// Heuristic receipt parser.
///
/// Stateless across invocations; each parse owns its own scan state, so a
/// single parser may be shared and called concurrently.
pub struct ReceiptParser {
    clock: Box<dyn Clock>,
}

/// Scan state threaded through the line loop. Each field extractor is
/// gated by its own "already found" slot.
#[derive(Default)]
struct ScanState {
    store: Option<String>,
    date: Option<NaiveDate>,
    total: Option<f64>,
    items: Vec<ReceiptLineItem>,
}

impl ReceiptParser {
    /// Create a parser with the system clock.
    pub fn new() -> Self {
        Self {
            clock: Box::new(SystemClock),
        }
    }

    /// Replace the time source used for the default transaction date.
    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    /// Parse raw OCR text into a structured receipt.
    pub fn parse(&self, text: &str) -> ExtractionResult {
        info!("parsing receipt from {} characters of text", text.len());
        self.scan(lines::normalize(text))
    }

    /// Parse an already-split ordered sequence of lines.
    pub fn parse_lines<S: AsRef<str>>(&self, input: &[S]) -> ExtractionResult {
        self.scan(lines::tidy(input))
    }

    fn scan(&self, lines: Vec<String>) -> ExtractionResult {
        let start = Instant::now();
        let count = lines.len();
        debug!("scanning {count} normalized lines");

        let store_extractor = StoreExtractor::new();
        let date_extractor = DateExtractor::new();
        let total_extractor = TotalExtractor::new();
        let matcher = ItemLineMatcher::new();

        let mut state = ScanState::default();
        let mut prev_line_item_priced = false;

        for (index, line) in lines.iter().enumerate() {
            if state.store.is_none() && index < STORE_WINDOW {
                if let Some(store) = store_extractor.extract(line) {
                    debug!("store name found on line {index}: {store}");
                    state.store = Some(store);
                }
            }

            if state.date.is_none() {
                if let Some(date) = date_extractor.extract(line) {
                    debug!("transaction date found on line {index}: {date}");
                    state.date = Some(date);
                }
            }

            if state.total.is_none() && index + TOTAL_WINDOW >= count {
                if let Some(total) = total_extractor.extract(line) {
                    debug!("total found on line {index}: {total}");
                    state.total = Some(total);
                }
            }

            let in_body = index >= HEADER_SKIP && index + FOOTER_SKIP < count;
            let mut priced = false;
            if in_body {
                match matcher.classify(line, prev_line_item_priced) {
                    LineMatch::Item(item) => {
                        priced = item.price.is_some();
                        state.items.push(item);
                    }
                    LineMatch::Continuation | LineMatch::Noise | LineMatch::NoMatch => {}
                }
            }
            prev_line_item_priced = priced;
        }

        self.aggregate(state, start)
    }

    /// Fill defaults for absent fields and assemble the final record.
    fn aggregate(&self, state: ScanState, start: Instant) -> ExtractionResult {
        let mut warnings = Vec::new();

        if state.store.is_none() {
            warnings.push("could not extract store name".to_string());
        }
        if state.date.is_none() {
            warnings.push("no date found, using processing timestamp".to_string());
        }
        if state.total.is_none() {
            warnings.push("no total line found, deriving total from item prices".to_string());
        }
        if state.items.is_empty() {
            warnings.push("could not extract line items".to_string());
        }

        let total = state
            .total
            .unwrap_or_else(|| state.items.iter().filter_map(|i| i.price).sum());

        let date = state
            .date
            .map(|d| d.and_time(NaiveTime::MIN).and_utc())
            .unwrap_or_else(|| self.clock.now());

        let receipt = ParsedReceipt {
            items: state.items,
            store: state.store,
            date: Some(date),
            total: Some(total),
        };

        debug!(
            "extracted {} items, store={:?}, total={:.2}",
            receipt.items.len(),
            receipt.store,
            total
        );

        ExtractionResult {
            receipt,
            warnings,
            processing_time_ms: start.elapsed().as_millis() as u64,
        }
    }
}

impl Default for ReceiptParser {
    fn default() -> Self {
        Self::new()
    }
}

impl ReceiptExtractor for ReceiptParser {
    fn extract_from_text(&self, text: &str) -> ParsedReceipt {
        self.parse(text).receipt
    }
}
