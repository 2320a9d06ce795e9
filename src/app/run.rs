// logtool - app/run.rs
//
// One CLI invocation: read the file, filter it, write the result.
//
// `execute` returns errors typed; `report` turns the outcome into what is
// printed and the process exit status. `main` only calls the two.

use crate::app::reader::LogReader;
use crate::core::encoding::TextEncoding;
use crate::core::export::{self, OutputFormat};
use crate::core::filter::FilterSpec;
use crate::core::render;
use crate::util::constants::READ_FAILURE_PREFIX;
use crate::util::error::{EncodingError, LogToolError, Result};
use std::io::Write;
use std::path::PathBuf;

/// Validated runtime configuration for one invocation.
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// Log file to read.
    pub path: PathBuf,
    /// Declared encoding of the log file.
    pub encoding: TextEncoding,
    /// Encoding of plain-text output.
    pub output_encoding: TextEncoding,
    /// Output representation.
    pub format: OutputFormat,
    /// Predicates and tail-limit.
    pub filter: FilterSpec,
}

impl RunConfig {
    /// Config with default encodings and text output.
    pub fn new(path: impl Into<PathBuf>, filter: FilterSpec) -> Self {
        Self {
            path: path.into(),
            encoding: TextEncoding::default(),
            output_encoding: TextEncoding::default(),
            format: OutputFormat::default(),
            filter,
        }
    }
}

/// Execute `config`, writing output to `out`.
///
/// Returns the number of lines written.
pub fn execute<W: Write>(config: &RunConfig, out: &mut W) -> Result<usize> {
    let document = LogReader::read(&config.path, config.encoding)?;
    let filtered = LogReader::filter(&document, &config.filter);

    tracing::info!(
        path = %config.path.display(),
        encoding = %config.encoding,
        total = document.len(),
        kept = filtered.len(),
        "Filter applied"
    );
    if let Some(last) = filtered.lines().last() {
        tracing::debug!(
            line = last.line_number,
            text = crate::util::logging::preview(&last.text),
            "Last kept line"
        );
    }

    let written = match config.format {
        OutputFormat::Text => render::write_rendered(&filtered, out, config.output_encoding)?,
        OutputFormat::Json => export::export_json(&filtered, out)?,
        OutputFormat::Csv => export::export_csv(&filtered, out)?,
    };
    Ok(written)
}

/// Report the outcome of `execute` and return the process exit status.
///
/// A read failure is a normal outcome: its message is printed to `out`
/// under the output encoding and the status is 0. A character the output
/// encoding cannot represent makes the message fall back to UTF-8.
/// Filter and output failures go to stderr with status 1.
pub fn report<W: Write>(config: &RunConfig, result: Result<usize>, out: &mut W) -> i32 {
    match result {
        Ok(lines) => {
            tracing::debug!(path = %config.path.display(), lines, "Done");
            0
        }
        Err(LogToolError::Read(e)) => {
            tracing::debug!(path = %e.path().display(), error = %e, "Read failed");
            let message = format!("{READ_FAILURE_PREFIX}: {e}\n");
            let bytes = match config.output_encoding.encode(&message) {
                Ok(bytes) => bytes,
                Err(EncodingError::Unrepresentable { ch, encoding }) => {
                    tracing::debug!(ch = %ch, encoding, "Falling back to UTF-8 for read failure");
                    message.into_bytes()
                }
                Err(EncodingError::Unknown { .. }) => message.into_bytes(),
            };
            // stdout is the only channel for this message; a failed write has nowhere to go.
            if let Err(write_err) = out.write_all(&bytes).and_then(|()| out.flush()) {
                tracing::debug!(error = %write_err, "Could not print read failure");
            }
            0
        }
        Err(e @ LogToolError::Filter(_)) => {
            tracing::error!(error = %e, "Filter rejected");
            eprintln!("Error: {e}");
            1
        }
        Err(e @ LogToolError::Output(_)) => {
            tracing::error!(error = %e, "Output failed");
            eprintln!("Error: {e}");
            1
        }
    }
}
