//! `WhatsApp` TXT export parser.
//!
//! Every record starts with a timestamp header at the beginning of a line;
//! everything up to the next header belongs to the record, so multi-line
//! messages need no special handling. Text before the first header is
//! discarded.
//!
//! Supported layouts (see [`LineLayout`]):
//! - Android: `15/01/24, 10:30 - Sender: Message`
//! - iOS: `[15/01/24, 10:30:45] Sender: Message`
//!
//! Both accept dots as date separators, 2- or 4-digit years and 12- or
//! 24-hour clocks.

use std::fs;
use std::ops::Range;
use std::path::Path;

use tracing::{debug, warn};

use crate::MessageRecord;
use crate::config::ParserConfig;
use crate::core::{ChatFrame, ParseSummary};
use crate::error::Result;
use crate::parsing::{
    LineLayout, classify, decode_lossy, detect_layout, is_notification_phrase, resolve_timestamp,
};

/// One record of an export before timestamp resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawEntry<'a> {
    /// Date text of the header, e.g. `1/15/24`.
    pub date: &'a str,
    /// Time text of the header, e.g. `10:30 PM`.
    pub time: &'a str,
    /// Everything after the header up to the next record.
    pub rest: &'a str,
    /// Byte range of the whole record, header included.
    pub span: Range<usize>,
}

/// Parser for WhatsApp TXT exports.
///
/// # Example
///
/// ```rust
/// use chatstat::parsers::WhatsAppParser;
///
/// let frame = WhatsAppParser::new().parse_str(
///     "1/1/23, 10:00 - Alice: hello 😀\n1/1/23, 10:01 - Bob: <Media omitted>\n",
/// )?;
///
/// assert_eq!(frame.len(), 2);
/// assert!(frame.records()[1].is_media());
/// # Ok::<(), chatstat::ChatstatError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct WhatsAppParser {
    config: ParserConfig,
}

impl WhatsAppParser {
    /// Creates a new parser with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a parser with custom configuration.
    pub fn with_config(config: ParserConfig) -> Self {
        Self { config }
    }

    /// Returns the current configuration.
    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Splits decoded text into raw records.
    ///
    /// The number of entries equals the number of record headers; an empty
    /// vector is returned when the text has none.
    pub fn split<'a>(&self, text: &'a str) -> Vec<RawEntry<'a>> {
        detect_layout(text).map_or_else(Vec::new, |layout| split_entries(text, layout))
    }

    /// Parses an export file.
    ///
    /// # Errors
    ///
    /// Returns an IO error if the file cannot be read, or a parse error for
    /// a bad timestamp when `skip_invalid` is off.
    pub fn parse(&self, path: impl AsRef<Path>) -> Result<ChatFrame> {
        let path = path.as_ref();
        debug!(path = %path.display(), "reading export");
        let bytes = fs::read(path)?;
        self.parse_bytes(&bytes)
    }

    /// Parses raw export bytes, dropping invalid UTF-8 sequences.
    pub fn parse_bytes(&self, bytes: &[u8]) -> Result<ChatFrame> {
        let decoded = decode_lossy(bytes);
        self.parse_text(&decoded.text, decoded.dropped_bytes)
    }

    /// Parses export text.
    pub fn parse_str(&self, text: &str) -> Result<ChatFrame> {
        self.parse_text(text, 0)
    }

    fn parse_text(&self, text: &str, dropped_bytes: usize) -> Result<ChatFrame> {
        let Some(layout) = detect_layout(text) else {
            debug!("no record headers found");
            return Ok(ChatFrame::new(
                Vec::new(),
                ParseSummary {
                    dropped_bytes,
                    ..ParseSummary::default()
                },
            ));
        };

        let entries = split_entries(text, layout);
        let date_order = self
            .config
            .date_order
            .resolve(entries.iter().map(|entry| entry.date));
        debug!(?layout, ?date_order, entries = entries.len(), "detected export layout");

        let mut records = Vec::with_capacity(entries.len());
        let mut skipped = 0;

        for entry in &entries {
            let timestamp = match resolve_timestamp(entry.date, entry.time, date_order) {
                Ok(ts) => ts,
                Err(err) if self.config.skip_invalid => {
                    warn!(date = entry.date, time = entry.time, %err, "skipping record");
                    skipped += 1;
                    continue;
                }
                Err(err) => return Err(err),
            };

            let classified = classify(entry.rest);
            if classified.is_notification() && !is_notification_phrase(classified.body) {
                debug!(body = classified.body, "unrecognised notification");
            }

            records.push(MessageRecord::new(
                timestamp,
                classified.sender.map(str::to_string),
                classified.body,
            ));
        }

        let summary = ParseSummary {
            matched: entries.len(),
            skipped,
            dropped_bytes,
            layout: Some(layout),
            date_order: Some(date_order),
        };
        Ok(ChatFrame::new(records, summary))
    }
}

/// Splits `text` at every header of `layout`.
fn split_entries(text: &str, layout: LineLayout) -> Vec<RawEntry<'_>> {
    let headers: Vec<_> = layout.regex().captures_iter(text).collect();
    let mut entries = Vec::with_capacity(headers.len());

    for (idx, caps) in headers.iter().enumerate() {
        let (Some(header), Some(date), Some(time)) = (caps.get(0), caps.get(1), caps.get(2))
        else {
            continue;
        };
        let end = headers
            .get(idx + 1)
            .and_then(|next| next.get(0))
            .map_or(text.len(), |next| next.start());

        entries.push(RawEntry {
            date: date.as_str(),
            time: time.as_str(),
            rest: &text[header.end()..end],
            span: header.start()..end,
        });
    }

    entries
}
