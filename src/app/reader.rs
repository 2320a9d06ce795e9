// logtool - app/reader.rs
//
// LogReader: the read -> filter -> render pipeline as one entry point.
// Each operation is stateless; a LogReader holds no handles or caches, so
// separate reads may run concurrently on different threads.

use crate::core::encoding::TextEncoding;
use crate::core::filter::{self, FilterSpec};
use crate::core::model::LogDocument;
use crate::core::render;
use crate::platform::fs;
use crate::util::error::ReadError;
use std::path::Path;

/// Reads log files and produces their filtered, displayable form.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogReader;

impl LogReader {
    /// Open `path`, decode it under `encoding`, and split it into lines.
    ///
    /// Fails with `NotFound`, `PermissionDenied`, `Decode` or `Io`; the file
    /// handle is released before this returns in every case.
    pub fn read(path: &Path, encoding: TextEncoding) -> Result<LogDocument, ReadError> {
        fs::read_document(path, encoding)
    }

    /// Apply predicates, then the tail-limit. Never fails.
    pub fn filter(document: &LogDocument, spec: &FilterSpec) -> LogDocument {
        filter::apply_filter(document, spec)
    }

    /// Join lines with `\n`, without a trailing newline.
    pub fn render(document: &LogDocument) -> String {
        render::render(document)
    }
}
