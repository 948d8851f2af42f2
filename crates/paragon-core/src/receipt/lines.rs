//! Line normalization for raw OCR output.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Runs of 3+ newlines collapse to a single blank line.
    static ref BLANK_RUN: Regex = Regex::new(r"\n{3,}").unwrap();
}

/// Turn raw OCR text into an ordered sequence of trimmed, non-empty lines.
///
/// All line-break variants (`\r\n`, bare `\r`) are unified first, then
/// blank-line runs are collapsed before splitting. Total: never fails,
/// empty input yields an empty sequence.
pub fn normalize(text: &str) -> Vec<String> {
    let unified = text.replace("\r\n", "\n").replace('\r', "\n");
    let collapsed = BLANK_RUN.replace_all(&unified, "\n\n");

    collapsed
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect()
}

/// Trim and drop empty entries from an already-split line sequence.
pub fn tidy<S: AsRef<str>>(lines: &[S]) -> Vec<String> {
    lines
        .iter()
        .map(|line| line.as_ref().trim())
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_normalize_unifies_line_breaks() {
        let lines = normalize("MILK 1.99\r\nBREAD 2.49\rEGGS 3.99");
        assert_eq!(lines, vec!["MILK 1.99", "BREAD 2.49", "EGGS 3.99"]);
    }

    #[test]
    fn test_normalize_drops_blank_lines_and_trims() {
        let lines = normalize("  MILK 1.99  \n\n\n\n\n   \nBREAD 2.49");
        assert_eq!(lines, vec!["MILK 1.99", "BREAD 2.49"]);
    }

    #[test]
    fn test_normalize_empty_input() {
        assert!(normalize("").is_empty());
        assert!(normalize("\n\n\r\n   \n").is_empty());
    }

    #[test]
    fn test_tidy_pre_split_lines() {
        let lines = tidy(&["  MILK 1.99 ", "", "   ", "BREAD 2.49"]);
        assert_eq!(lines, vec!["MILK 1.99", "BREAD 2.49"]);
    }
}
