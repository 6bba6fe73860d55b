//! # chatstat
//!
//! A Rust library for parsing WhatsApp chat exports and computing
//! descriptive statistics over them.
//!
//! ## Overview
//!
//! An export is a text file of entries like
//! `15/1/23, 10:00 - Alice: hello` (Android) or
//! `[15/1/23, 10:00:00] Alice: hello` (iOS). chatstat turns it into a
//! [`ChatFrame`](core::ChatFrame) of [`MessageRecord`]s and computes:
//!
//! - message, word, media and link counts
//! - busiest senders with their share of messages
//! - monthly, daily and weekday activity
//! - most common words (stop words removed)
//! - emoji frequency and emotion buckets
//! - sentiment classification (positive / neutral / negative)
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use chatstat::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let frame = WhatsAppParser::new().parse("WhatsApp Chat.txt")?;
//!
//!     let filter = FilterConfig::new().with_date_from("2024-01-01")?;
//!     let view = apply_filters(&frame, &filter);
//!
//!     let report = Analyzer::new().report(&view, &SenderFilter::Overall);
//!     println!("{} messages", report.basic.messages);
//!
//!     write_to_format(&report, "report.json", OutputFormat::Json)?;
//!     Ok(())
//! }
//! ```
//!
//! ## Module Structure
//!
//! - [`parsers`] - [`WhatsAppParser`](parsers::WhatsAppParser), raw text to [`ChatFrame`](core::ChatFrame)
//! - [`parsing`] - Building blocks: decoding, layout and date-order detection, classification
//! - [`core`] - Frames, views, filters, result tables and writers
//! - [`stats`] - [`Analyzer`](stats::Analyzer) and the individual aggregations
//! - [`lexicon`] - Stop words, emotion and sentiment lexicons
//! - [`config`] - [`ParserConfig`](config::ParserConfig), [`AnalyzerConfig`](config::AnalyzerConfig)
//! - [`format`] - [`OutputFormat`](format::OutputFormat) and format dispatch
//! - [`error`] - [`ChatstatError`] and [`Result`]
//! - [`prelude`] - Convenient re-exports

#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod format;
pub mod lexicon;
#[cfg(feature = "cli")]
pub mod logging;
pub mod message;
pub mod parsers;
pub mod parsing;
pub mod stats;

// Re-export the main types at the crate root for convenience
pub use error::{ChatstatError, Result};
pub use message::MessageRecord;

/// Convenient re-exports for common usage.
///
/// ```rust
/// use chatstat::prelude::*;
/// ```
pub mod prelude {
    pub use crate::MessageRecord;
    pub use crate::error::{ChatstatError, Result};

    pub use crate::config::{AnalyzerConfig, ParserConfig};
    pub use crate::parsing::DateOrder;

    pub use crate::core::{
        ChatFrame, FilterConfig, FrameView, ParseSummary, Report, Sentiment, SenderFilter,
        apply_filters,
    };
    pub use crate::format::{OutputFormat, to_format_string, write_to_format};

    pub use crate::lexicon::LexiconSet;
    pub use crate::parsers::WhatsAppParser;
    pub use crate::stats::{Analyzer, SentimentScorer};
}
