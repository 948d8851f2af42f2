//! Core library for receipt OCR text extraction.
//!
//! This crate provides:
//! - Line normalization for raw OCR output
//! - Heuristic field extraction (store name, transaction date, grand total)
//! - Item line classification with ordered structural patterns
//! - Category inference from item names
//!
//! The input is text already produced by an external OCR engine; this
//! crate performs no image handling and no persistence.

pub mod clock;
pub mod error;
pub mod models;
pub mod receipt;

pub use clock::{Clock, FixedClock, SystemClock};
pub use error::AmountError;
pub use models::receipt::{Category, ParsedReceipt, ReceiptLineItem};
pub use receipt::{ExtractionResult, ReceiptExtractor, ReceiptParser};
