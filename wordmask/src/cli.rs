// wordmask/src/cli.rs
//! This file defines the command-line interface (CLI) for the wordmask
//! application, including all available commands and their arguments.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Top-level CLI definition.
#[derive(Parser, Debug)]
#[command(
    name = "wordmask",
    version = env!("CARGO_PKG_VERSION"),
    about = "Detect and mask sensitive words in text",
    long_about = "wordmask scans text against a dictionary of forbidden words and masks every hit. Text is lowercased and stripped of whitespace and punctuation before matching, so spaced-out or punctuated spellings are still caught; when anything matches, the output is that normalized text with the matched characters masked.",
    arg_required_else_help = true,
)]
pub struct Cli {
    /// Suppress all informational and debug messages.
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,

    /// Enable debug logging (overrides RUST_LOG).
    #[arg(long, short = 'd', global = true)]
    pub debug: bool,

    /// The subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

/// All available commands for the `wordmask` CLI.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Masks every dictionary word found in the input.
    Sanitize(SanitizeCommand),

    /// Reports which dictionary words occur in the input, without masking.
    Scan(ScanCommand),
}

/// Dictionary selection shared by every command.
#[derive(Args, Debug, Clone, Default)]
pub struct DictionaryArgs {
    /// Path to a YAML dictionary merged over the built-in one.
    #[arg(long = "dictionary", value_name = "FILE")]
    pub dictionary: Option<PathBuf>,

    /// Ignore the built-in dictionary and use only --dictionary.
    #[arg(long = "no-defaults")]
    pub no_defaults: bool,

    /// Character written over matched spans (overrides the dictionary file).
    #[arg(long = "mask", value_name = "CHAR", env = "WORDMASK_MASK")]
    pub mask: Option<String>,

    /// Also index CJK words under their pinyin spelling (requires the `pinyin` feature).
    #[arg(long = "pinyin")]
    pub pinyin: bool,
}

/// Arguments for the `sanitize` command.
#[derive(Args, Debug)]
pub struct SanitizeCommand {
    /// Read input from a file instead of stdin.
    #[arg(long, short = 'i', value_name = "FILE")]
    pub input_file: Option<PathBuf>,

    /// Write output to a file instead of stdout.
    #[arg(long, short = 'o', value_name = "FILE")]
    pub output: Option<PathBuf>,

    #[command(flatten)]
    pub dictionary: DictionaryArgs,

    /// Process input line by line, flushing after each line.
    #[arg(long = "line-buffered")]
    pub line_buffered: bool,

    /// Suppress the matched-word summary on stderr.
    #[arg(long = "no-summary")]
    pub no_summary: bool,
}

/// Arguments for the `scan` command.
#[derive(Args, Debug)]
pub struct ScanCommand {
    /// Read input from a file instead of stdin.
    #[arg(long, short = 'i', value_name = "FILE")]
    pub input_file: Option<PathBuf>,

    #[command(flatten)]
    pub dictionary: DictionaryArgs,

    /// Print the report as JSON.
    #[arg(long = "json-stdout")]
    pub json_stdout: bool,

    /// Exit with a non-zero code if total occurrences exceed this threshold.
    #[arg(long = "fail-over-threshold", value_name = "N")]
    pub fail_over_threshold: Option<usize>,
}
