//! CLI argument definitions for the csvlink tool.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "csvlink",
    version,
    about = "Link two CSV files by fuzzy-matching a key column",
    long_about = "Match free-text key values from a source CSV against a target CSV\n\
                  using Levenshtein distance over normalized text. Ambiguous matches\n\
                  are resolved interactively; declining a prompt leaves that row\n\
                  unmatched and the run continues."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Match a source CSV against a target CSV and write the augmented source.
    Link(LinkArgs),

    /// List the column names of a CSV file.
    Columns(ColumnsArgs),
}

#[derive(Parser)]
pub struct LinkArgs {
    /// Source CSV: the file whose rows receive match columns.
    #[arg(long = "source", value_name = "PATH")]
    pub source: PathBuf,

    /// Target CSV: the file matched against.
    #[arg(long = "target", value_name = "PATH")]
    pub target: PathBuf,

    /// Key column in the source file.
    #[arg(long = "source-column", value_name = "NAME")]
    pub source_column: String,

    /// Key column in the target file.
    #[arg(long = "target-column", value_name = "NAME")]
    pub target_column: String,

    /// Target column whose value is carried into the output next to the
    /// matched key (adds a Linked column).
    #[arg(long = "linked-column", value_name = "NAME")]
    pub linked_column: Option<String>,

    /// Where to write the augmented source CSV.
    #[arg(long = "output", value_name = "PATH")]
    pub output: PathBuf,

    /// Comma-separated words that truncate a value at their first
    /// space-prefixed occurrence (e.g. "fka,dba").
    #[arg(long = "cutoff-words", value_name = "LIST", default_value = "")]
    pub cutoff_words: String,

    /// Comma-separated words removed wherever they appear as whole words.
    #[arg(long = "strip-words", value_name = "LIST", default_value = "")]
    pub strip_words: String,

    /// Characters deleted from values before comparison (a bare sequence,
    /// e.g. ".,()&").
    #[arg(long = "strip-chars", value_name = "CHARS", default_value = "")]
    pub strip_chars: String,

    /// Highest edit distance still offered as a near match.
    #[arg(long = "near-threshold", value_name = "N", default_value_t = csvlink_model::config::DEFAULT_NEAR_THRESHOLD)]
    pub near_threshold: usize,

    /// Most candidates offered in one prompt.
    #[arg(long = "prompt-cap", value_name = "N", default_value_t = csvlink_model::config::DEFAULT_PROMPT_CAP)]
    pub prompt_cap: usize,

    /// Decline every ambiguous match instead of prompting (for scripted runs).
    #[arg(long = "non-interactive")]
    pub non_interactive: bool,
}

#[derive(Parser)]
pub struct ColumnsArgs {
    /// CSV file to inspect.
    #[arg(value_name = "FILE")]
    pub file: PathBuf,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
