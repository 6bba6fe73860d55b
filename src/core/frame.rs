//! The parsed chat and read-only views over it.
//!
//! A [`ChatFrame`] owns every record of one export in source order. Analysis
//! never works on the frame directly but on a [`FrameView`], a borrowed
//! subsequence produced by filtering. Views are cheap to create and never
//! modify the frame.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::MessageRecord;
use crate::parsing::{DateOrder, LineLayout};

/// Diagnostics collected while parsing an export.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ParseSummary {
    /// Record headers found in the text.
    pub matched: usize,
    /// Records dropped because their timestamp did not resolve.
    pub skipped: usize,
    /// Invalid UTF-8 bytes dropped while decoding.
    pub dropped_bytes: usize,
    /// Detected line layout, `None` when the text had no record headers.
    pub layout: Option<LineLayout>,
    /// Date order used to resolve timestamps.
    pub date_order: Option<DateOrder>,
}

/// Every record of one chat export, in source order.
///
/// # Example
///
/// ```
/// use chatstat::parsers::WhatsAppParser;
///
/// let frame = WhatsAppParser::new().parse_str(
///     "1/1/23, 10:00 - Alice: hello\n1/1/23, 10:01 - Bob added Carol\n",
/// )?;
///
/// assert_eq!(frame.len(), 2);
/// assert_eq!(frame.view().senders(), vec!["Alice"]);
/// # Ok::<(), chatstat::ChatstatError>(())
/// ```
#[derive(Debug, Clone, Default, Serialize)]
pub struct ChatFrame {
    records: Vec<MessageRecord>,
    summary: ParseSummary,
}

impl ChatFrame {
    /// Creates a frame from already parsed records.
    pub fn new(records: Vec<MessageRecord>, summary: ParseSummary) -> Self {
        Self { records, summary }
    }

    /// Creates a frame without parse diagnostics.
    pub fn from_records(records: Vec<MessageRecord>) -> Self {
        let summary = ParseSummary {
            matched: records.len(),
            ..ParseSummary::default()
        };
        Self { records, summary }
    }

    /// Returns all records in source order.
    pub fn records(&self) -> &[MessageRecord] {
        &self.records
    }

    /// Returns the parse diagnostics.
    pub fn summary(&self) -> &ParseSummary {
        &self.summary
    }

    /// Returns the number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns `true` if the frame has no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Returns a view over the whole frame.
    pub fn view(&self) -> FrameView<'_> {
        FrameView {
            records: self.records.iter().collect(),
        }
    }
}

/// A read-only, ordered subsequence of a [`ChatFrame`].
#[derive(Debug, Clone, Default)]
pub struct FrameView<'a> {
    records: Vec<&'a MessageRecord>,
}

impl<'a> FrameView<'a> {
    /// Returns the records of this view in source order.
    pub fn records(&self) -> &[&'a MessageRecord] {
        &self.records
    }

    /// Iterates over the records in source order.
    pub fn iter(&self) -> impl Iterator<Item = &'a MessageRecord> + '_ {
        self.records.iter().copied()
    }

    /// Returns the number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns `true` if the view has no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Returns a new view holding the records that satisfy `predicate`.
    pub fn filter(&self, mut predicate: impl FnMut(&MessageRecord) -> bool) -> FrameView<'a> {
        FrameView {
            records: self
                .records
                .iter()
                .copied()
                .filter(|msg| predicate(msg))
                .collect(),
        }
    }

    /// Returns a new view restricted to `filter`.
    ///
    /// [`SenderFilter::Overall`] returns an identical view.
    pub fn for_sender(&self, filter: &SenderFilter) -> FrameView<'a> {
        match filter {
            SenderFilter::Overall => self.clone(),
            SenderFilter::Sender(_) => self.filter(|msg| filter.matches(msg)),
        }
    }

    /// Returns a new view with records whose date lies in `from..=to`.
    ///
    /// Missing bounds are open.
    pub fn between(&self, from: Option<NaiveDate>, to: Option<NaiveDate>) -> FrameView<'a> {
        self.filter(|msg| {
            from.is_none_or(|from| msg.only_date >= from) && to.is_none_or(|to| msg.only_date <= to)
        })
    }

    /// Returns the distinct senders, notifications excluded, sorted ascending.
    pub fn senders(&self) -> Vec<&'a str> {
        let mut senders: Vec<&'a str> = self.iter().filter_map(|msg| msg.sender()).collect();
        senders.sort_unstable();
        senders.dedup();
        senders
    }

    /// Returns the earliest and latest message date, `None` when empty.
    pub fn date_bounds(&self) -> Option<(NaiveDate, NaiveDate)> {
        let first = self.iter().map(|msg| msg.only_date).min()?;
        let last = self.iter().map(|msg| msg.only_date).max()?;
        Some((first, last))
    }
}

impl<'v, 'a> IntoIterator for &'v FrameView<'a> {
    type Item = &'a MessageRecord;
    type IntoIter = std::iter::Copied<std::slice::Iter<'v, &'a MessageRecord>>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter().copied()
    }
}

/// Which sender the statistics are computed for.
///
/// # Example
///
/// ```
/// use chatstat::core::SenderFilter;
///
/// let overall: SenderFilter = "overall".parse().unwrap();
/// assert_eq!(overall, SenderFilter::Overall);
///
/// let alice: SenderFilter = "Alice".parse().unwrap();
/// assert_eq!(alice, SenderFilter::Sender("Alice".into()));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(into = "String", from = "String")]
pub enum SenderFilter {
    /// All records, notifications included
    #[default]
    Overall,
    /// Only messages from this exact sender name
    Sender(String),
}

impl SenderFilter {
    /// Returns `true` if `msg` passes the filter.
    pub fn matches(&self, msg: &MessageRecord) -> bool {
        match self {
            SenderFilter::Overall => true,
            SenderFilter::Sender(name) => msg.sender() == Some(name.as_str()),
        }
    }

    /// Returns `true` for [`SenderFilter::Overall`].
    pub fn is_overall(&self) -> bool {
        matches!(self, SenderFilter::Overall)
    }
}

impl FromStr for SenderFilter {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("overall") {
            Ok(SenderFilter::Overall)
        } else {
            Ok(SenderFilter::Sender(s.to_string()))
        }
    }
}

impl From<&str> for SenderFilter {
    fn from(s: &str) -> Self {
        match s.parse() {
            Ok(filter) => filter,
            Err(never) => match never {},
        }
    }
}

impl From<String> for SenderFilter {
    fn from(s: String) -> Self {
        if s.eq_ignore_ascii_case("overall") {
            SenderFilter::Overall
        } else {
            SenderFilter::Sender(s)
        }
    }
}

impl From<SenderFilter> for String {
    fn from(filter: SenderFilter) -> Self {
        filter.to_string()
    }
}

impl fmt::Display for SenderFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SenderFilter::Overall => write!(f, "overall"),
            SenderFilter::Sender(name) => write!(f, "{name}"),
        }
    }
}
