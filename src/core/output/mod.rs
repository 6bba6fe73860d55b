//! Output format writers.
//!
//! This module provides writers for different output formats:
//! - [`write_json`] / [`to_json`] - the whole report as one JSON object - requires `json-output` feature
//! - [`write_jsonl`] / [`to_jsonl`] - JSON Lines, one table per line - requires `json-output` feature
//! - [`write_text`] / [`to_text`] - human-readable summary
//! - [`write_csv`] / [`to_csv`] - the selected messages with semicolon delimiter - requires `csv-output` feature
//!
//! # Example
//!
//! ```rust,no_run
//! # #[cfg(all(feature = "csv-output", feature = "json-output"))]
//! # fn main() -> chatstat::Result<()> {
//! use chatstat::core::SenderFilter;
//! use chatstat::core::output::{to_text, write_csv, write_json};
//! use chatstat::parsers::WhatsAppParser;
//! use chatstat::stats::Analyzer;
//!
//! let frame = WhatsAppParser::new().parse("chat.txt")?;
//! let view = frame.view();
//! let report = Analyzer::new().report(&view, &SenderFilter::Overall);
//!
//! write_json(&report, "report.json")?;
//! write_csv(&view, "preview.csv")?;
//! println!("{}", to_text(&report));
//! # Ok(())
//! # }
//! # #[cfg(not(all(feature = "csv-output", feature = "json-output")))]
//! # fn main() {}
//! ```

#[cfg(feature = "csv-output")]
mod csv_writer;
#[cfg(feature = "json-output")]
mod json_writer;
#[cfg(feature = "json-output")]
mod jsonl_writer;
mod text_writer;

#[cfg(feature = "csv-output")]
pub use csv_writer::{to_csv, write_csv};
#[cfg(feature = "json-output")]
pub use json_writer::{to_json, write_json};
#[cfg(feature = "json-output")]
pub use jsonl_writer::{to_jsonl, write_jsonl};
pub use text_writer::{to_text, write_text};
