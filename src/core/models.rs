//! Result tables produced by the statistics.
//!
//! Every table is a list of plain row structs that serialize as JSON objects,
//! so a table renders naturally as one JSON array.

use chrono::NaiveDate;
use serde::Serialize;

use super::frame::{ParseSummary, SenderFilter};

/// Top-line counts for a selection of messages.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct BasicStats {
    /// Records in the selection, notifications included.
    pub messages: usize,
    /// Whitespace-separated tokens with at least one letter or digit.
    pub words: usize,
    /// Bodies that are exactly the media placeholder.
    pub media: usize,
    /// Well-formed URLs found in bodies.
    pub links: usize,
}

/// One row of the busiest-senders ranking.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SenderShare {
    pub name: String,
    pub messages: usize,
    /// Share of all sender messages in percent, rounded to 2 decimals.
    pub percent: f64,
}

/// Messages in one calendar month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthlyCount {
    pub year: i32,
    pub month_num: u32,
    pub month: String,
    /// `"<month> - <year>"`, e.g. `"January - 2023"`.
    pub time: String,
    pub messages: usize,
}

/// Messages on one day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DailyCount {
    pub only_date: NaiveDate,
    pub messages: usize,
}

/// Messages on one weekday.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WeekdayCount {
    pub day_name: String,
    pub messages: usize,
}

/// A word and how often it was used.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WordCount {
    pub word: String,
    pub count: usize,
}

/// An emoji and how often it was used.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmojiCount {
    pub emoji: String,
    pub count: usize,
}

/// Emoji usage summed over one emotion bucket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmotionCount {
    pub emotion: String,
    pub count: usize,
}

/// Sentiment category of a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Neutral,
    Negative,
}

impl Sentiment {
    /// Categories in report order.
    pub fn all() -> &'static [Sentiment] {
        &[Sentiment::Positive, Sentiment::Neutral, Sentiment::Negative]
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Sentiment::Positive => "positive",
            Sentiment::Neutral => "neutral",
            Sentiment::Negative => "negative",
        }
    }
}

/// Messages in one sentiment category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SentimentCount {
    pub sentiment: Sentiment,
    pub messages: usize,
}

/// Every table for one selection, ready to render.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    /// Sender the tables were computed for.
    pub selection: SenderFilter,
    /// First and last date of the selection.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_range: Option<(NaiveDate, NaiveDate)>,
    pub parse: ParseSummary,
    pub basic: BasicStats,
    /// Only present for the overall selection.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub busiest_senders: Option<Vec<SenderShare>>,
    pub monthly_timeline: Vec<MonthlyCount>,
    pub daily_timeline: Vec<DailyCount>,
    pub weekday_activity: Vec<WeekdayCount>,
    pub word_frequency: Vec<WordCount>,
    pub emoji_frequency: Vec<EmojiCount>,
    pub emoji_emotions: Vec<EmotionCount>,
    pub sentiment: Vec<SentimentCount>,
}

impl Report {
    /// Attaches the diagnostics of the parse that produced the records.
    #[must_use]
    pub fn with_parse_summary(mut self, summary: ParseSummary) -> Self {
        self.parse = summary;
        self
    }
}
