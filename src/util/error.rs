// logtool - util/error.rs
//
// Typed error hierarchy with context-preserving error chains.
// Every failure the reader, filter or output stage can produce is one of
// the closed set of variants below; the CLI boundary matches on them
// explicitly instead of catching anything.

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Top-level error type for all logtool operations.
/// Errors are categorised by the stage that produced them.
#[derive(Debug)]
pub enum LogToolError {
    /// Opening, reading or decoding the input file failed.
    Read(ReadError),

    /// Building a filter from user input failed.
    Filter(FilterError),

    /// Writing rendered or exported output failed.
    Output(OutputError),
}

impl fmt::Display for LogToolError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Read(e) => write!(f, "{e}"),
            Self::Filter(e) => write!(f, "Filter error: {e}"),
            Self::Output(e) => write!(f, "Output error: {e}"),
        }
    }
}

impl std::error::Error for LogToolError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Read(e) => Some(e),
            Self::Filter(e) => Some(e),
            Self::Output(e) => Some(e),
        }
    }
}

// ---------------------------------------------------------------------------
// Read errors
// ---------------------------------------------------------------------------

/// Errors raised while loading a log file into a document.
#[derive(Debug)]
pub enum ReadError {
    /// The path does not exist.
    NotFound { path: PathBuf },

    /// The file exists but cannot be opened for reading.
    PermissionDenied { path: PathBuf, source: io::Error },

    /// The bytes are not valid under the declared encoding.
    Decode {
        path: PathBuf,
        encoding: &'static str,
        source: DecodeError,
    },

    /// Any other I/O failure (e.g. the path is a directory).
    Io {
        path: PathBuf,
        operation: &'static str,
        source: io::Error,
    },
}

impl ReadError {
    /// Path of the file the failure relates to.
    pub fn path(&self) -> &PathBuf {
        match self {
            Self::NotFound { path }
            | Self::PermissionDenied { path, .. }
            | Self::Decode { path, .. }
            | Self::Io { path, .. } => path,
        }
    }
}

impl fmt::Display for ReadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound { path } => {
                write!(f, "No such file or directory: '{}'", path.display())
            }
            Self::PermissionDenied { path, source } => {
                write!(f, "Permission denied: '{}': {source}", path.display())
            }
            Self::Decode {
                path,
                encoding,
                source,
            } => write!(
                f,
                "'{}' cannot be decoded as {encoding}: {source}",
                path.display()
            ),
            Self::Io {
                path,
                operation,
                source,
            } => write!(
                f,
                "I/O error during {operation} on '{}': {source}",
                path.display()
            ),
        }
    }
}

impl std::error::Error for ReadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::NotFound { .. } => None,
            Self::PermissionDenied { source, .. } => Some(source),
            Self::Decode { source, .. } => Some(source),
            Self::Io { source, .. } => Some(source),
        }
    }
}

impl From<ReadError> for LogToolError {
    fn from(e: ReadError) -> Self {
        Self::Read(e)
    }
}

// ---------------------------------------------------------------------------
// Decode errors
// ---------------------------------------------------------------------------

/// Reasons a byte stream is rejected by a strict decoder.
///
/// Offsets are byte offsets into the raw file content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// An invalid or truncated UTF-8 sequence.
    InvalidUtf8 { offset: usize },

    /// A UTF-16 stream without a byte-order mark, so endianness is unknown.
    MissingBom,

    /// A UTF-16 stream whose length is not a whole number of code units.
    OddByteCount { len: usize },

    /// A UTF-16 surrogate without its partner.
    UnpairedSurrogate { offset: usize, unit: u16 },
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidUtf8 { offset } => {
                write!(f, "invalid byte sequence at offset {offset}")
            }
            Self::MissingBom => write!(f, "stream does not start with a byte-order mark"),
            Self::OddByteCount { len } => {
                write!(f, "truncated data: {len} bytes is not a whole number of code units")
            }
            Self::UnpairedSurrogate { offset, unit } => {
                write!(f, "unpaired surrogate 0x{unit:04X} at offset {offset}")
            }
        }
    }
}

impl std::error::Error for DecodeError {}

// ---------------------------------------------------------------------------
// Encoding errors
// ---------------------------------------------------------------------------

/// Errors related to encoding names and output encoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EncodingError {
    /// The encoding identifier is not one of the supported names.
    Unknown { name: String },

    /// A character cannot be represented in the output encoding.
    Unrepresentable { ch: char, encoding: &'static str },
}

impl fmt::Display for EncodingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unknown { name } => write!(
                f,
                "unknown encoding '{name}' \
                 (expected utf-8, utf-8-sig, utf-16, utf-16-le, utf-16-be or latin-1)"
            ),
            Self::Unrepresentable { ch, encoding } => write!(
                f,
                "character U+{:04X} cannot be encoded as {encoding}",
                u32::from(*ch)
            ),
        }
    }
}

impl std::error::Error for EncodingError {}

// ---------------------------------------------------------------------------
// Filter errors
// ---------------------------------------------------------------------------

/// Errors related to building a filter.
#[derive(Debug)]
pub enum FilterError {
    /// User-provided regex is invalid.
    InvalidRegex {
        pattern: String,
        source: regex::Error,
    },

    /// User-provided regex exceeds the maximum allowed length.
    RegexTooLong { length: usize, max_length: usize },
}

impl fmt::Display for FilterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidRegex { pattern, source } => {
                write!(f, "Invalid filter regex '{pattern}': {source}")
            }
            Self::RegexTooLong { length, max_length } => write!(
                f,
                "Filter regex is {length} chars, exceeds maximum of {max_length}"
            ),
        }
    }
}

impl std::error::Error for FilterError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidRegex { source, .. } => Some(source),
            Self::RegexTooLong { .. } => None,
        }
    }
}

impl From<FilterError> for LogToolError {
    fn from(e: FilterError) -> Self {
        Self::Filter(e)
    }
}

// ---------------------------------------------------------------------------
// Output errors
// ---------------------------------------------------------------------------

/// Errors raised while writing the result to its destination.
#[derive(Debug)]
pub enum OutputError {
    /// Writing to the destination failed.
    Io { source: io::Error },

    /// Rendered text cannot be represented in the output encoding.
    Encode(EncodingError),

    /// CSV serialisation error.
    Csv { source: csv::Error },

    /// JSON serialisation error.
    Json { source: serde_json::Error },
}

impl fmt::Display for OutputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { source } => write!(f, "write failed: {source}"),
            Self::Encode(e) => write!(f, "{e}"),
            Self::Csv { source } => write!(f, "CSV export failed: {source}"),
            Self::Json { source } => write!(f, "JSON export failed: {source}"),
        }
    }
}

impl std::error::Error for OutputError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source } => Some(source),
            Self::Encode(e) => Some(e),
            Self::Csv { source } => Some(source),
            Self::Json { source } => Some(source),
        }
    }
}

impl From<io::Error> for OutputError {
    fn from(source: io::Error) -> Self {
        Self::Io { source }
    }
}

impl From<EncodingError> for OutputError {
    fn from(e: EncodingError) -> Self {
        Self::Encode(e)
    }
}

impl From<OutputError> for LogToolError {
    fn from(e: OutputError) -> Self {
        Self::Output(e)
    }
}

/// Convenience type alias for logtool results.
pub type Result<T> = std::result::Result<T, LogToolError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_not_found_message_names_path() {
        let err = ReadError::NotFound {
            path: PathBuf::from("missing.log"),
        };
        assert_eq!(err.to_string(), "No such file or directory: 'missing.log'");
        assert!(err.source().is_none());
    }

    #[test]
    fn test_decode_error_preserves_chain() {
        let err = LogToolError::from(ReadError::Decode {
            path: PathBuf::from("build.log"),
            encoding: "utf-16",
            source: DecodeError::MissingBom,
        });
        let msg = err.to_string();
        assert!(msg.contains("build.log"), "{msg}");
        assert!(msg.contains("utf-16"), "{msg}");

        let read = err.source().expect("read error");
        let decode = read.source().expect("decode error");
        assert_eq!(
            decode.to_string(),
            "stream does not start with a byte-order mark"
        );
    }

    #[test]
    fn test_unrepresentable_reports_code_point() {
        let err = EncodingError::Unrepresentable {
            ch: '€',
            encoding: "latin-1",
        };
        assert_eq!(
            err.to_string(),
            "character U+20AC cannot be encoded as latin-1"
        );
    }
}
