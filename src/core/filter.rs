// logtool - core/filter.rs
//
// Line filter for log documents.
// Predicates are AND-combined and applied first; the tail-limit is applied
// to whatever the predicates keep. Order of the source document is always
// preserved.
// Core layer: pure logic, no I/O.

use crate::core::model::{LogDocument, LogLine};
use crate::util::constants::MAX_REGEX_LENGTH;
use crate::util::error::FilterError;
use regex::Regex;

/// Complete filter configuration. An all-`None` spec passes every line through.
#[derive(Debug, Clone, Default)]
pub struct FilterSpec {
    /// Substring search (case-insensitive). `None` = no substring filter.
    pub contains: Option<String>,

    /// Compiled regex search. `None` = no regex filter.
    pub pattern: Option<Regex>,

    /// Number of trailing lines to keep. `None` = unlimited.
    pub tail_limit: Option<usize>,
}

impl FilterSpec {
    /// Filter that keeps lines containing `needle`, ignoring case.
    pub fn containing(needle: impl Into<String>) -> Self {
        Self {
            contains: Some(needle.into()),
            ..Default::default()
        }
    }

    /// Filter that keeps the last `n` lines.
    pub fn tail(n: usize) -> Self {
        Self {
            tail_limit: Some(n),
            ..Default::default()
        }
    }

    /// Add a tail-limit to this filter.
    pub fn with_tail_limit(mut self, n: Option<usize>) -> Self {
        self.tail_limit = n;
        self
    }

    /// Add a substring predicate to this filter.
    pub fn with_contains(mut self, needle: Option<String>) -> Self {
        self.contains = needle;
        self
    }

    /// Returns true if no filters are active.
    pub fn is_empty(&self) -> bool {
        self.contains.is_none() && self.pattern.is_none() && self.tail_limit.is_none()
    }

    /// Set the regex search pattern, compiling it.
    /// An empty pattern clears the regex filter.
    pub fn set_regex(&mut self, pattern: &str) -> Result<(), FilterError> {
        if pattern.is_empty() {
            self.pattern = None;
            return Ok(());
        }
        if pattern.len() > MAX_REGEX_LENGTH {
            return Err(FilterError::RegexTooLong {
                length: pattern.len(),
                max_length: MAX_REGEX_LENGTH,
            });
        }
        let regex = Regex::new(pattern).map_err(|e| FilterError::InvalidRegex {
            pattern: pattern.to_string(),
            source: e,
        })?;
        self.pattern = Some(regex);
        Ok(())
    }
}

/// Apply `spec` to `document`, returning a new document.
///
/// Never fails and never mutates the input. A tail-limit larger than the
/// number of matching lines keeps all of them.
pub fn apply_filter(document: &LogDocument, spec: &FilterSpec) -> LogDocument {
    if spec.is_empty() {
        return document.clone();
    }

    let needle_lower = spec.contains.as_deref().map(str::to_lowercase);

    let matched: Vec<&LogLine> = document
        .lines()
        .iter()
        .filter(|line| matches_all(line, spec, needle_lower.as_deref()))
        .collect();

    let skip = spec
        .tail_limit
        .map_or(0, |n| matched.len().saturating_sub(n));

    LogDocument::from_lines(matched.into_iter().skip(skip).cloned().collect())
}

/// Check if a single line matches all active predicates.
fn matches_all(line: &LogLine, spec: &FilterSpec, needle_lower: Option<&str>) -> bool {
    if let Some(needle) = needle_lower {
        if !line.text.to_lowercase().contains(needle) {
            return false;
        }
    }

    if let Some(ref regex) = spec.pattern {
        if !regex.is_match(&line.text) {
            return false;
        }
    }

    true
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(lines: &[&str]) -> LogDocument {
        LogDocument::from_text(&lines.join("\n"))
    }

    fn texts(doc: &LogDocument) -> Vec<String> {
        doc.texts().map(str::to_string).collect()
    }

    fn numbered(n: usize) -> LogDocument {
        let lines: Vec<String> = (1..=n).map(|i| format!("L{i}")).collect();
        LogDocument::from_text(&lines.join("\n"))
    }

    #[test]
    fn test_empty_filter_returns_all() {
        let d = doc(&["INFO start", "ERROR disk full"]);
        assert_eq!(apply_filter(&d, &FilterSpec::default()), d);
    }

    #[test]
    fn test_text_search_case_insensitive() {
        let d = doc(&["INFO start", "ERROR disk full", "error: retry", "INFO done"]);
        let result = apply_filter(&d, &FilterSpec::containing("Error"));
        assert_eq!(texts(&result), vec!["ERROR disk full", "error: retry"]);
    }

    #[test]
    fn test_text_search_no_match_is_empty() {
        let d = doc(&["INFO start", "INFO done"]);
        assert!(apply_filter(&d, &FilterSpec::containing("error")).is_empty());
    }

    #[test]
    fn test_empty_needle_matches_everything() {
        let d = doc(&["a", "", "c"]);
        assert_eq!(apply_filter(&d, &FilterSpec::containing("")).len(), 3);
    }

    #[test]
    fn test_tail_lengths() {
        let d = numbered(10);
        for n in [0, 1, 3, 10, 11, 1_000] {
            let result = apply_filter(&d, &FilterSpec::tail(n));
            let expected: Vec<String> = (1..=10)
                .skip(10usize.saturating_sub(n))
                .map(|i| format!("L{i}"))
                .collect();
            assert_eq!(texts(&result), expected, "tail {n}");
        }
    }

    #[test]
    fn test_tail_on_empty_document() {
        let result = apply_filter(&LogDocument::default(), &FilterSpec::tail(50));
        assert!(result.is_empty());
    }

    #[test]
    fn test_filter_then_tail_composition() {
        let d = doc(&[
            "ERROR a", "INFO b", "ERROR c", "INFO d", "ERROR e", "ERROR f",
        ]);
        let combined = FilterSpec::containing("error").with_tail_limit(Some(2));
        let staged = apply_filter(
            &apply_filter(&d, &FilterSpec::containing("error")),
            &FilterSpec::tail(2),
        );
        let result = apply_filter(&d, &combined);
        assert_eq!(result, staged);
        assert_eq!(texts(&result), vec!["ERROR e", "ERROR f"]);
    }

    #[test]
    fn test_filter_keeps_source_line_numbers() {
        let d = doc(&["INFO a", "ERROR b", "INFO c", "ERROR d"]);
        let result = apply_filter(&d, &FilterSpec::containing("error"));
        let numbers: Vec<u64> = result.lines().iter().map(|l| l.line_number).collect();
        assert_eq!(numbers, vec![2, 4]);
    }

    #[test]
    fn test_input_not_mutated() {
        let d = numbered(5);
        let before = d.clone();
        let _ = apply_filter(&d, &FilterSpec::tail(2));
        assert_eq!(d, before);
    }

    #[test]
    fn test_regex_and_substring_are_and_combined() {
        let d = doc(&["ERROR 404", "ERROR disk", "WARN 500"]);
        let mut spec = FilterSpec::containing("error");
        spec.set_regex(r"\d{3}").unwrap();
        assert_eq!(texts(&apply_filter(&d, &spec)), vec!["ERROR 404"]);
    }

    #[test]
    fn test_invalid_regex_rejected() {
        let mut spec = FilterSpec::default();
        let err = spec.set_regex("(unclosed").unwrap_err();
        assert!(matches!(err, FilterError::InvalidRegex { .. }));
        assert!(spec.pattern.is_none());
    }

    #[test]
    fn test_overlong_regex_rejected() {
        let mut spec = FilterSpec::default();
        let pattern = "a".repeat(MAX_REGEX_LENGTH + 1);
        assert!(matches!(
            spec.set_regex(&pattern),
            Err(FilterError::RegexTooLong { .. })
        ));
    }

    #[test]
    fn test_empty_regex_clears_pattern() {
        let mut spec = FilterSpec::default();
        spec.set_regex("x").unwrap();
        spec.set_regex("").unwrap();
        assert!(spec.is_empty());
    }
}
