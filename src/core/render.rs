// logtool - core/render.rs
//
// Plain-text rendering of a document and the encoded print step.
// Core layer: writes to any Write trait object.

use crate::core::encoding::TextEncoding;
use crate::core::model::LogDocument;
use crate::util::error::OutputError;
use std::io::Write;

/// Join line texts with a single `\n`. No trailing newline.
pub fn render(document: &LogDocument) -> String {
    document.texts().collect::<Vec<_>>().join("\n")
}

/// Render `document` and write it to `writer` under `encoding`.
///
/// A non-empty document is followed by one newline; an empty document
/// writes nothing. The whole output is encoded in one pass, so encodings
/// with a byte-order mark emit it exactly once.
///
/// Returns the number of lines written.
pub fn write_rendered<W: Write>(
    document: &LogDocument,
    mut writer: W,
    encoding: TextEncoding,
) -> Result<usize, OutputError> {
    if document.is_empty() {
        return Ok(0);
    }

    let mut text = render(document);
    text.push('\n');

    let bytes = encoding.encode(&text)?;
    writer.write_all(&bytes)?;
    writer.flush()?;

    Ok(document.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_joins_without_trailing_newline() {
        let doc = LogDocument::from_text("a\r\nb\nc\n");
        assert_eq!(render(&doc), "a\nb\nc");
    }

    #[test]
    fn test_render_empty_document() {
        assert_eq!(render(&LogDocument::default()), "");
    }

    #[test]
    fn test_render_round_trips_utf8_content() {
        let content = "first\nsecond line\n\nfourth ✓";
        assert_eq!(render(&LogDocument::from_text(content)), content);
    }

    #[test]
    fn test_write_rendered_utf8() {
        let doc = LogDocument::from_text("ERROR disk full");
        let mut buf = Vec::new();
        let count = write_rendered(&doc, &mut buf, TextEncoding::Utf8).unwrap();
        assert_eq!(count, 1);
        assert_eq!(buf, b"ERROR disk full\n");
    }

    #[test]
    fn test_write_rendered_empty_writes_nothing() {
        let mut buf = Vec::new();
        let count = write_rendered(&LogDocument::default(), &mut buf, TextEncoding::Utf16).unwrap();
        assert_eq!(count, 0);
        assert!(buf.is_empty());
    }

    #[test]
    fn test_write_rendered_utf16_single_bom() {
        let doc = LogDocument::from_text("a\nb");
        let mut buf = Vec::new();
        write_rendered(&doc, &mut buf, TextEncoding::Utf16).unwrap();
        assert_eq!(
            buf,
            vec![0xFF, 0xFE, b'a', 0, b'\n', 0, b'b', 0, b'\n', 0]
        );
    }

    #[test]
    fn test_write_rendered_unrepresentable_char() {
        let doc = LogDocument::from_text("price: 5€");
        let mut buf = Vec::new();
        let err = write_rendered(&doc, &mut buf, TextEncoding::Latin1).unwrap_err();
        assert!(matches!(err, OutputError::Encode(_)));
        assert!(buf.is_empty());
    }
}
