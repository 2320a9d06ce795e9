// logtool - core/export.rs
//
// CSV and JSON export of filtered log lines.
// Core layer: writes to any Write trait object.
//
// Structured exports are always UTF-8; the output encoding only applies to
// plain-text rendering.

use crate::core::model::LogDocument;
use crate::util::error::OutputError;
use std::fmt;
use std::io::Write;
use std::str::FromStr;

/// How the filtered document is written to the destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Line texts joined by newlines.
    #[default]
    Text,
    /// JSON array of `{ "line_number", "text" }` objects.
    Json,
    /// CSV with a `line_number,text` header.
    Csv,
}

impl OutputFormat {
    pub fn label(&self) -> &'static str {
        match self {
            OutputFormat::Text => "text",
            OutputFormat::Json => "json",
            OutputFormat::Csv => "csv",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" | "txt" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            "csv" => Ok(OutputFormat::Csv),
            other => Err(format!(
                "unknown output format '{other}' (expected text, json or csv)"
            )),
        }
    }
}

/// Export lines to CSV format.
///
/// Writes: line_number, text
pub fn export_csv<W: Write>(document: &LogDocument, writer: W) -> Result<usize, OutputError> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    csv_writer
        .write_record(["line_number", "text"])
        .map_err(|e| OutputError::Csv { source: e })?;

    let mut count = 0;
    for line in document.lines() {
        csv_writer
            .write_record([line.line_number.to_string().as_str(), line.text.as_str()])
            .map_err(|e| OutputError::Csv { source: e })?;
        count += 1;
    }

    csv_writer.flush()?;

    Ok(count)
}

/// Export lines to JSON format (array of objects).
pub fn export_json<W: Write>(document: &LogDocument, mut writer: W) -> Result<usize, OutputError> {
    serde_json::to_writer_pretty(&mut writer, document.lines())
        .map_err(|e| OutputError::Json { source: e })?;
    writer.write_all(b"\n")?;
    writer.flush()?;
    Ok(document.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_csv_export() {
        let doc = LogDocument::from_text("INFO a\nERROR \"quoted\", comma");
        let mut buf = Vec::new();
        let count = export_csv(&doc, &mut buf).unwrap();
        assert_eq!(count, 2);

        let output = String::from_utf8(buf).unwrap();
        assert_eq!(
            output,
            "line_number,text\n1,INFO a\n2,\"ERROR \"\"quoted\"\", comma\"\n"
        );
    }

    #[test]
    fn test_json_export() {
        let doc = LogDocument::from_text("first\nsecond");
        let mut buf = Vec::new();
        let count = export_json(&doc, &mut buf).unwrap();
        assert_eq!(count, 2);

        let value: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        assert_eq!(value[1]["line_number"], 2);
        assert_eq!(value[1]["text"], "second");
    }

    #[test]
    fn test_json_export_empty_document() {
        let mut buf = Vec::new();
        export_json(&LogDocument::default(), &mut buf).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap().trim(), "[]");
    }

    #[test]
    fn test_output_format_parse() {
        assert_eq!("JSON".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert!("xml".parse::<OutputFormat>().is_err());
    }
}
