// logtool - util/constants.rs
//
// Single source of truth for all named constants, limits, and defaults.

// =============================================================================
// Application metadata
// =============================================================================

/// Application display name.
pub const APP_NAME: &str = "logtool";

/// Current application version.
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

// =============================================================================
// CLI defaults
// =============================================================================

/// Needle used by `scan` when `--contains` is omitted.
pub const DEFAULT_SCAN_NEEDLE: &str = "error";

/// Window used by `tail` when `--lines` is omitted.
pub const DEFAULT_TAIL_LINES: usize = 50;

/// Input encoding used when `--encoding` is omitted.
pub const DEFAULT_INPUT_ENCODING: &str = "utf-8";

/// Output encoding used when `--output-encoding` is omitted.
pub const DEFAULT_OUTPUT_ENCODING: &str = "utf-8";

/// Prefix printed before a read failure on standard output.
pub const READ_FAILURE_PREFIX: &str = "Error reading file";

// =============================================================================
// Reading limits
// =============================================================================

/// File size in bytes above which a "large file" warning is logged.
/// The file is still read in full.
pub const LARGE_FILE_THRESHOLD: u64 = 100 * 1024 * 1024; // 100 MB

/// Maximum length of a user-supplied regex pattern.
pub const MAX_REGEX_LENGTH: usize = 1_024;

// =============================================================================
// Logging
// =============================================================================

/// Default log level. Diagnostics go to stderr; `warn` keeps normal runs quiet.
pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// Maximum length of a log line included in debug output.
pub const DEBUG_MAX_LINE_PREVIEW: usize = 200;
