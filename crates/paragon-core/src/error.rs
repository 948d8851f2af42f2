//! Error types for the paragon-core library.

use thiserror::Error;

/// Errors from decimal token normalization.
///
/// Callers inside the scan treat both variants as "no price here" and
/// fall through to the next pattern; neither is ever fatal.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AmountError {
    /// The token could not be parsed as a decimal number.
    #[error("not a number: {0}")]
    NotANumber(String),

    /// The value falls outside the plausible price range.
    #[error("implausible amount: {0}")]
    Implausible(f64),
}
