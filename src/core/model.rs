// logtool - core/model.rs
//
// Core data model types. Pure data definitions with no I/O.
//
// These types are the shared vocabulary across all layers.

use serde::Serialize;

// =============================================================================
// Log Line
// =============================================================================

/// A single decoded line with its terminator stripped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LogLine {
    /// 1-based position of the line in the source file.
    pub line_number: u64,

    /// Line text without its `\n`, `\r\n` or `\r` terminator.
    pub text: String,
}

// =============================================================================
// Log Document
// =============================================================================

/// Ordered, read-only sequence of lines decoded from one file.
///
/// Filtering produces a new document; an existing one is never mutated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LogDocument {
    lines: Vec<LogLine>,
}

impl LogDocument {
    /// Split decoded text on universal newline boundaries.
    ///
    /// `\r\n`, `\r` and `\n` all end a line. A terminator at the very end of
    /// the text does not produce an empty trailing line.
    pub fn from_text(text: &str) -> Self {
        let lines = split_universal(text)
            .into_iter()
            .zip(1u64..)
            .map(|(text, line_number)| LogLine {
                line_number,
                text: text.to_string(),
            })
            .collect();
        Self { lines }
    }

    /// Wrap lines that already carry their source line numbers.
    pub(crate) fn from_lines(lines: Vec<LogLine>) -> Self {
        Self { lines }
    }

    pub fn lines(&self) -> &[LogLine] {
        &self.lines
    }

    /// Line texts in document order.
    pub fn texts(&self) -> impl Iterator<Item = &str> + '_ {
        self.lines.iter().map(|line| line.text.as_str())
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

fn split_universal(text: &str) -> Vec<&str> {
    // `\r` and `\n` are ASCII, so byte indices here are always char boundaries.
    let bytes = text.as_bytes();
    let mut lines = Vec::new();
    let mut start = 0;
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'\n' => {
                lines.push(&text[start..i]);
                i += 1;
                start = i;
            }
            b'\r' => {
                lines.push(&text[start..i]);
                i += if bytes.get(i + 1) == Some(&b'\n') { 2 } else { 1 };
                start = i;
            }
            _ => i += 1,
        }
    }
    if start < bytes.len() {
        lines.push(&text[start..]);
    }
    lines
}
