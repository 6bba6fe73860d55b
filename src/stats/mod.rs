//! Statistics over a parsed chat.
//!
//! [`Analyzer`] holds everything the statistics need (URL extractor, stop
//! words, emotion lexicon, sentiment scorer) and computes each table from a
//! [`FrameView`] and a [`SenderFilter`]. None of the methods modify the view.
//!
//! # Example
//!
//! ```rust
//! use chatstat::core::SenderFilter;
//! use chatstat::parsers::WhatsAppParser;
//! use chatstat::stats::Analyzer;
//!
//! let frame = WhatsAppParser::new().parse_str(
//!     "1/1/23, 10:00 - Alice: hello 😀\n1/1/23, 10:01 - Bob: <Media omitted>\n",
//! )?;
//! let analyzer = Analyzer::new();
//! let stats = analyzer.basic_stats(&frame.view(), &SenderFilter::Overall);
//!
//! assert_eq!(stats.messages, 2);
//! assert_eq!(stats.words, 1);
//! assert_eq!(stats.media, 1);
//! assert_eq!(stats.links, 0);
//! # Ok::<(), chatstat::ChatstatError>(())
//! ```
//!
//! # Ordering
//!
//! Ranked tables sort by count, most first. Equal counts keep the order in
//! which their keys first appeared in the view.

mod activity;
mod emoji;
mod links;
mod sentiment;
mod words;

use std::hash::Hash;

use indexmap::IndexMap;

pub use emoji::extract_emojis;
pub use links::UrlExtractor;
pub use sentiment::{SentimentAnalyzer, SentimentScorer};
pub use words::count_words;

use crate::config::AnalyzerConfig;
use crate::core::{FrameView, Report, SenderFilter};
use crate::lexicon::{EmotionLexicon, LexiconSet, StopWords};

/// Computes statistics tables for a chat.
///
/// The analyzer has no interior mutability, so a single instance can be
/// shared between threads.
pub struct Analyzer {
    urls: UrlExtractor,
    stop_words: StopWords,
    emotions: EmotionLexicon,
    scorer: Box<dyn SentimentScorer>,
    config: AnalyzerConfig,
}

impl Analyzer {
    /// Creates an analyzer with the built-in lexicons and default settings.
    pub fn new() -> Self {
        Self::with_lexicons(LexiconSet::default())
    }

    /// Creates an analyzer from loaded lexicons.
    pub fn with_lexicons(lexicons: LexiconSet) -> Self {
        Self {
            urls: UrlExtractor::new(),
            stop_words: lexicons.stop_words,
            emotions: lexicons.emotions,
            scorer: Box::new(SentimentAnalyzer::new(lexicons.sentiment)),
            config: AnalyzerConfig::default(),
        }
    }

    /// Replaces the configuration.
    #[must_use]
    pub fn with_config(mut self, config: AnalyzerConfig) -> Self {
        self.config = config;
        self
    }

    /// Replaces the sentiment scorer.
    #[must_use]
    pub fn with_scorer(mut self, scorer: impl SentimentScorer + 'static) -> Self {
        self.scorer = Box::new(scorer);
        self
    }

    /// Returns the current configuration.
    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    /// Computes every table for `filter`.
    ///
    /// The sender ranking is only included for [`SenderFilter::Overall`].
    /// The parse summary is left empty; attach it with
    /// [`Report::with_parse_summary`].
    pub fn report(&self, view: &FrameView<'_>, filter: &SenderFilter) -> Report {
        Report {
            selection: filter.clone(),
            date_range: view.for_sender(filter).date_bounds(),
            parse: Default::default(),
            basic: self.basic_stats(view, filter),
            busiest_senders: filter
                .is_overall()
                .then(|| self.busiest_senders(view, filter)),
            monthly_timeline: self.monthly_timeline(view, filter),
            daily_timeline: self.daily_timeline(view, filter),
            weekday_activity: self.weekday_activity(view, filter),
            word_frequency: self.word_frequency(view, filter),
            emoji_frequency: self.emoji_frequency(view, filter),
            emoji_emotions: self.emoji_emotion_summary(view, filter),
            sentiment: self.sentiment_summary(view, filter),
        }
    }
}

impl Default for Analyzer {
    fn default() -> Self {
        Self::new()
    }
}

/// Sorts counted keys by count, descending, keeping first-seen order for
/// equal counts.
fn ranked<K: Hash + Eq>(counts: IndexMap<K, usize>) -> Vec<(K, usize)> {
    let mut rows: Vec<(K, usize)> = counts.into_iter().collect();
    rows.sort_by(|a, b| b.1.cmp(&a.1));
    rows
}

#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, NaiveDateTime};

    use super::*;
    use crate::MessageRecord;
    use crate::core::{BasicStats, ChatFrame, Sentiment};

    fn ts(y: i32, m: u32, d: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(10, 0, 0)
            .unwrap()
    }

    fn msg(date: NaiveDateTime, sender: Option<&str>, body: &str) -> MessageRecord {
        MessageRecord::new(date, sender.map(str::to_string), body)
    }

    fn sample() -> ChatFrame {
        ChatFrame::from_records(vec![
            msg(ts(2023, 1, 1), None, "Alice created group \"Trip\""),
            msg(ts(2023, 1, 1), Some("Alice"), "hello 😀"),
            msg(ts(2023, 1, 2), Some("Bob"), "<Media omitted>"),
            msg(ts(2023, 2, 6), Some("Bob"), "pizza pizza tonight? 😂😂"),
            msg(ts(2023, 2, 6), Some("Carol"), "I hate pizza 😡"),
            msg(ts(2022, 12, 31), Some("Alice"), "check https://example.com now"),
        ])
    }

    #[test]
    fn test_ranked_keeps_first_seen_order_on_ties() {
        let mut counts = IndexMap::new();
        counts.insert("b", 1);
        counts.insert("a", 2);
        counts.insert("c", 1);
        assert_eq!(ranked(counts), vec![("a", 2), ("b", 1), ("c", 1)]);
    }

    #[test]
    fn test_basic_stats() {
        let frame = sample();
        let stats = Analyzer::new().basic_stats(&frame.view(), &SenderFilter::Overall);

        assert_eq!(stats.messages, 6);
        assert_eq!(stats.media, 1);
        assert_eq!(stats.links, 1);
        // 4 + 1 + 3 + 3 + 3
        assert_eq!(stats.words, 14);
    }

    #[test]
    fn test_basic_stats_for_sender() {
        let frame = sample();
        let bob = SenderFilter::from("Bob");
        let stats = Analyzer::new().basic_stats(&frame.view(), &bob);

        assert_eq!(stats.messages, 2);
        assert_eq!(stats.media, 1);
        assert_eq!(stats.words, 3);
    }

    #[test]
    fn test_busiest_senders() {
        let frame = sample();
        let rows = Analyzer::new().busiest_senders(&frame.view(), &SenderFilter::Overall);

        let names: Vec<&str> = rows.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["Alice", "Bob", "Carol"]);
        assert!((rows[0].percent - 40.0).abs() < 1e-9);
        assert!((rows[2].percent - 20.0).abs() < 1e-9);
    }

    #[test]
    fn test_monthly_timeline_chronological() {
        let frame = sample();
        let rows = Analyzer::new().monthly_timeline(&frame.view(), &SenderFilter::Overall);

        let labels: Vec<&str> = rows.iter().map(|r| r.time.as_str()).collect();
        assert_eq!(labels, vec!["December - 2022", "January - 2023", "February - 2023"]);
        assert_eq!(rows[1].messages, 3);
    }

    #[test]
    fn test_daily_timeline() {
        let frame = sample();
        let rows = Analyzer::new().daily_timeline(&frame.view(), &SenderFilter::Overall);

        assert_eq!(rows.len(), 4);
        assert_eq!(rows[0].only_date, NaiveDate::from_ymd_opt(2022, 12, 31).unwrap());
        assert_eq!(rows[1].messages, 2);
    }

    #[test]
    fn test_weekday_activity() {
        let frame = sample();
        let rows = Analyzer::new().weekday_activity(&frame.view(), &SenderFilter::Overall);

        // Sunday 2023-01-01, Mondays 2023-01-02 and 2023-02-06, Saturday 2022-12-31
        let days: Vec<(&str, usize)> = rows
            .iter()
            .map(|r| (r.day_name.as_str(), r.messages))
            .collect();
        assert_eq!(days, vec![("Monday", 3), ("Sunday", 2), ("Saturday", 1)]);
    }

    #[test]
    fn test_word_frequency() {
        let frame = sample();
        let rows = Analyzer::new().word_frequency(&frame.view(), &SenderFilter::Overall);

        assert_eq!(rows[0].word, "pizza");
        assert_eq!(rows[0].count, 3);
        assert!(rows.iter().all(|r| r.word != "created" && r.word != "<media"));
    }

    #[test]
    fn test_word_frequency_top_n() {
        let frame = sample();
        let analyzer = Analyzer::new().with_config(AnalyzerConfig::new().with_top_words(2));
        assert_eq!(analyzer.word_frequency(&frame.view(), &SenderFilter::Overall).len(), 2);
    }

    #[test]
    fn test_word_cloud_text() {
        let frame = sample();
        let analyzer = Analyzer::new();
        let carol = SenderFilter::from("Carol");

        assert_eq!(analyzer.word_cloud_text(&frame.view(), &carol), "hate pizza 😡");
        assert_eq!(analyzer.word_cloud_text(&ChatFrame::default().view(), &carol), "");
    }

    #[test]
    fn test_emoji_tables() {
        let frame = sample();
        let analyzer = Analyzer::new();
        let view = frame.view();

        let emoji = analyzer.emoji_frequency(&view, &SenderFilter::Overall);
        assert_eq!(emoji[0].emoji, "😂");
        assert_eq!(emoji[0].count, 2);
        assert_eq!(emoji.len(), 3);

        let emotions = analyzer.emoji_emotion_summary(&view, &SenderFilter::Overall);
        let counts: Vec<(&str, usize)> = emotions
            .iter()
            .map(|e| (e.emotion.as_str(), e.count))
            .collect();
        assert_eq!(
            counts,
            vec![("happy", 3), ("sad", 0), ("angry", 1), ("annoyed", 0)]
        );
    }

    #[test]
    fn test_sentiment_summary_always_three_rows() {
        let analyzer = Analyzer::new();
        let rows = analyzer.sentiment_summary(&ChatFrame::default().view(), &SenderFilter::Overall);

        let order: Vec<Sentiment> = rows.iter().map(|r| r.sentiment).collect();
        assert_eq!(
            order,
            vec![Sentiment::Positive, Sentiment::Neutral, Sentiment::Negative]
        );
        assert!(rows.iter().all(|r| r.messages == 0));
    }

    #[test]
    fn test_custom_scorer() {
        struct AlwaysNegative;
        impl SentimentScorer for AlwaysNegative {
            fn compound(&self, _text: &str) -> f64 {
                -1.0
            }
        }

        let frame = sample();
        let analyzer = Analyzer::new().with_scorer(AlwaysNegative);
        let rows = analyzer.sentiment_summary(&frame.view(), &SenderFilter::Overall);
        assert_eq!(rows[2].messages, 6);
    }

    #[test]
    fn test_report_busiest_only_for_overall() {
        let frame = sample();
        let analyzer = Analyzer::new();
        let view = frame.view();

        let overall = analyzer.report(&view, &SenderFilter::Overall);
        assert!(overall.busiest_senders.is_some());
        assert_eq!(overall.basic.messages, 6);

        let alice = analyzer.report(&view, &SenderFilter::from("Alice"));
        assert!(alice.busiest_senders.is_none());
        assert_eq!(alice.basic.messages, 2);
        assert_eq!(
            alice.date_range,
            Some((
                NaiveDate::from_ymd_opt(2022, 12, 31).unwrap(),
                NaiveDate::from_ymd_opt(2023, 1, 1).unwrap()
            ))
        );
    }

    #[test]
    fn test_unknown_sender_yields_zeros() {
        let frame = sample();
        let report = Analyzer::new().report(&frame.view(), &SenderFilter::from("Zed"));

        assert_eq!(report.basic, BasicStats::default());
        assert!(report.monthly_timeline.is_empty());
        assert!(report.word_frequency.is_empty());
        assert_eq!(report.sentiment.len(), 3);
        assert_eq!(report.emoji_emotions.len(), 4);
    }

    #[test]
    fn test_analyzer_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Analyzer>();
    }
}
