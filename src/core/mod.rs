//! Core types and functionality for chatstat.
//!
//! This module contains:
//! - [`frame`] - the parsed chat ([`ChatFrame`]) and read-only views over it
//! - [`filter`] - view selection by date range and sender
//! - [`models`] - result tables and the [`Report`] bundling them
//! - [`output`] - Format writers (JSON, JSONL, text, CSV)
//!
//! # Quick Start
//!
//! ```rust
//! # #[cfg(feature = "json-output")]
//! # fn example() {
//! use chatstat::core::{
//!     ChatFrame, FilterConfig, FrameView, Report, SenderFilter,
//!     apply_filters, to_json, write_json,
//! };
//! # }
//! ```

pub mod filter;
pub mod frame;
pub mod models;
pub mod output;

// Re-export main types for convenience
pub use filter::{FilterConfig, apply_filters};
pub use frame::{ChatFrame, FrameView, ParseSummary, SenderFilter};
pub use models::{
    BasicStats, DailyCount, EmojiCount, EmotionCount, MonthlyCount, Report, SenderShare,
    Sentiment, SentimentCount, WeekdayCount, WordCount,
};

// Conditionally re-export output writers
#[cfg(feature = "csv-output")]
pub use output::{to_csv, write_csv};
#[cfg(feature = "json-output")]
pub use output::{to_json, to_jsonl, write_json, write_jsonl};
pub use output::{to_text, write_text};
