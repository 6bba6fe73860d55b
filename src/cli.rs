//! Command-line interface definition using clap.
//!
//! This module defines:
//! - [`Args`] - CLI argument structure (for use with clap)
//! - [`OutputFormat`] - Report format options
//! - [`DateOrderArg`] - How ambiguous dates are read
//!
//! Both enums convert into their library counterparts, so the CLI layer
//! stays a thin shell over [`crate::format`] and [`crate::parsing`].

use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueEnum};

use crate::parsing::DateOrder;

/// Parse a WhatsApp chat export and print activity, word, emoji and
/// sentiment statistics.
#[derive(Parser, Debug, Clone)]
#[command(name = "chatstat")]
#[command(version, about, long_about = None)]
#[command(after_help = "EXAMPLES:
    chatstat \"WhatsApp Chat.txt\"
    chatstat chat.txt -f text
    chatstat chat.txt -o report.json --from 2024-01-01 --to 2024-06-30
    chatstat chat.txt -u Alice -f jsonl
    chatstat chat.txt --list-senders
    chatstat chat.txt --preview-csv messages.csv")]
pub struct Args {
    /// Path to the exported chat (.txt)
    pub input: PathBuf,

    /// Write the report to this file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Report format [default: from the output extension, else json]
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Only messages on or after this date (YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    pub from: Option<String>,

    /// Only messages on or before this date (YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    pub to: Option<String>,

    /// Sender to analyze, or "overall" for everyone
    #[arg(short, long, value_name = "USER", default_value = "overall")]
    pub user: String,

    /// Number of rows in the word frequency table
    #[arg(long, value_name = "N", default_value_t = 20)]
    pub top: usize,

    /// Stop-word list (whitespace separated)
    #[arg(long, value_name = "FILE")]
    pub stop_words: Option<PathBuf>,

    /// Emotion lexicon (JSON object of bucket -> emoji list)
    #[arg(long, value_name = "FILE")]
    pub emotions: Option<PathBuf>,

    /// Sentiment lexicon (token<TAB>valence lines)
    #[arg(long, value_name = "FILE")]
    pub sentiment_lexicon: Option<PathBuf>,

    /// How dates like 1/2/23 are read
    #[arg(long, value_enum, default_value = "auto")]
    pub date_order: DateOrderArg,

    /// Also write the selected messages as CSV
    #[arg(long, value_name = "FILE")]
    pub preview_csv: Option<PathBuf>,

    /// Print the sender list and exit
    #[arg(long)]
    pub list_senders: bool,

    /// Log more (-v debug, -vv trace); RUST_LOG overrides
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

/// Report format options.
///
/// # Example
///
/// ```rust
/// use chatstat::cli::OutputFormat;
///
/// let format = OutputFormat::Jsonl;
/// assert_eq!(format.extension(), "jsonl");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Default)]
pub enum OutputFormat {
    /// Pretty-printed JSON object
    #[default]
    Json,

    /// One JSON table per line
    #[value(alias = "ndjson")]
    Jsonl,

    /// Plain-text summary
    #[value(alias = "txt")]
    Text,
}

impl OutputFormat {
    /// Returns the file extension for this format.
    pub fn extension(&self) -> &'static str {
        crate::format::OutputFormat::from(*self).extension()
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        crate::format::OutputFormat::from(*self).fmt(f)
    }
}

impl From<OutputFormat> for crate::format::OutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Json => crate::format::OutputFormat::Json,
            OutputFormat::Jsonl => crate::format::OutputFormat::Jsonl,
            OutputFormat::Text => crate::format::OutputFormat::Text,
        }
    }
}

/// Date order options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Default)]
pub enum DateOrderArg {
    /// Detect from the export
    #[default]
    Auto,
    /// D/M/Y
    DayFirst,
    /// M/D/Y
    MonthFirst,
}

impl From<DateOrderArg> for DateOrder {
    fn from(order: DateOrderArg) -> Self {
        match order {
            DateOrderArg::Auto => DateOrder::Auto,
            DateOrderArg::DayFirst => DateOrder::DayFirst,
            DateOrderArg::MonthFirst => DateOrder::MonthFirst,
        }
    }
}
