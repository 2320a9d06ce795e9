// logtool - cli.rs
//
// Command-line surface. Lives in the library so the end-to-end tests can
// drive exactly the argument handling `main` uses.

use crate::app::run::RunConfig;
use crate::core::encoding::TextEncoding;
use crate::core::export::OutputFormat;
use crate::core::filter::FilterSpec;
use crate::util::constants::{
    DEFAULT_INPUT_ENCODING, DEFAULT_OUTPUT_ENCODING, DEFAULT_SCAN_NEEDLE, DEFAULT_TAIL_LINES,
};
use crate::util::error::FilterError;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// logtool - print the matching lines or the last lines of a log file.
#[derive(Parser, Debug)]
#[command(name = "logtool", version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Enable debug logging on stderr (equivalent to RUST_LOG=debug).
    #[arg(short = 'd', long = "debug", global = true)]
    pub debug: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print lines containing a substring (case-insensitive).
    Scan(ScanArgs),

    /// Print the last N lines.
    Tail(TailArgs),
}

/// Options shared by every subcommand.
#[derive(Args, Debug)]
pub struct CommonArgs {
    /// Log file to read.
    #[arg(long)]
    pub path: PathBuf,

    /// Encoding of the log file (utf-8, utf-8-sig, utf-16, utf-16-le, utf-16-be, latin-1).
    #[arg(long, default_value = DEFAULT_INPUT_ENCODING)]
    pub encoding: TextEncoding,

    /// Encoding used to print text output.
    #[arg(long, default_value = DEFAULT_OUTPUT_ENCODING)]
    pub output_encoding: TextEncoding,

    /// Output format: text, json or csv.
    #[arg(long, default_value = "text")]
    pub format: OutputFormat,

    /// Additional regex every printed line must match.
    #[arg(long = "matches", value_name = "REGEX")]
    pub matches: Option<String>,
}

#[derive(Args, Debug)]
pub struct ScanArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Substring to look for, ignoring case.
    #[arg(long, default_value = DEFAULT_SCAN_NEEDLE)]
    pub contains: String,

    /// Keep only the last N matching lines.
    #[arg(long, value_name = "N")]
    pub lines: Option<usize>,
}

#[derive(Args, Debug)]
pub struct TailArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Number of trailing lines to print.
    #[arg(long, value_name = "N", default_value_t = DEFAULT_TAIL_LINES)]
    pub lines: usize,

    /// Only consider lines containing this substring, ignoring case.
    #[arg(long)]
    pub contains: Option<String>,
}

impl Command {
    /// Name of the subcommand, for diagnostics.
    pub fn name(&self) -> &'static str {
        match self {
            Command::Scan(_) => "scan",
            Command::Tail(_) => "tail",
        }
    }

    /// Build the validated runtime configuration.
    ///
    /// Only the regex can be rejected here; everything else was validated by
    /// clap while parsing.
    pub fn into_run_config(self) -> Result<RunConfig, FilterError> {
        let (common, filter) = match self {
            Command::Scan(args) => (
                args.common,
                FilterSpec::containing(args.contains).with_tail_limit(args.lines),
            ),
            Command::Tail(args) => (
                args.common,
                FilterSpec::tail(args.lines).with_contains(args.contains),
            ),
        };

        let mut filter = filter;
        if let Some(ref pattern) = common.matches {
            filter.set_regex(pattern)?;
        }

        Ok(RunConfig {
            path: common.path,
            encoding: common.encoding,
            output_encoding: common.output_encoding,
            format: common.format,
            filter,
        })
    }
}
