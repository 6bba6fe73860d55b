//! Message counts and activity timelines.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use indexmap::IndexMap;

use super::words::count_words;
use super::{Analyzer, ranked};
use crate::core::{
    BasicStats, DailyCount, FrameView, MonthlyCount, SenderFilter, SenderShare, WeekdayCount,
};

impl Analyzer {
    /// Message, word, media and link counts.
    ///
    /// Words are not counted in media placeholders. Notifications count as
    /// messages.
    pub fn basic_stats(&self, view: &FrameView<'_>, filter: &SenderFilter) -> BasicStats {
        let view = view.for_sender(filter);
        let mut stats = BasicStats {
            messages: view.len(),
            ..BasicStats::default()
        };

        for msg in &view {
            if msg.is_media() {
                stats.media += 1;
            } else {
                stats.words += count_words(msg.body());
            }
            stats.links += self.urls.count(msg.body());
        }

        stats
    }

    /// Senders ranked by message count with their share of all sender
    /// messages. Notifications are not counted.
    pub fn busiest_senders(&self, view: &FrameView<'_>, filter: &SenderFilter) -> Vec<SenderShare> {
        let mut counts: IndexMap<&str, usize> = IndexMap::new();
        for msg in &view.for_sender(filter) {
            if let Some(sender) = msg.sender() {
                *counts.entry(sender).or_insert(0) += 1;
            }
        }

        let total: usize = counts.values().sum();
        ranked(counts)
            .into_iter()
            .map(|(name, messages)| SenderShare {
                name: name.to_string(),
                messages,
                percent: percent(messages, total),
            })
            .collect()
    }

    /// Messages per calendar month, oldest first. Months without messages
    /// are omitted.
    pub fn monthly_timeline(&self, view: &FrameView<'_>, filter: &SenderFilter) -> Vec<MonthlyCount> {
        let mut months: BTreeMap<(i32, u32), (&str, usize)> = BTreeMap::new();
        for msg in &view.for_sender(filter) {
            months
                .entry((msg.year, msg.month_num))
                .or_insert((msg.month_name.as_str(), 0))
                .1 += 1;
        }

        months
            .into_iter()
            .map(|((year, month_num), (month, messages))| MonthlyCount {
                year,
                month_num,
                month: month.to_string(),
                time: format!("{month} - {year}"),
                messages,
            })
            .collect()
    }

    /// Messages per day, oldest first. Days without messages are omitted.
    pub fn daily_timeline(&self, view: &FrameView<'_>, filter: &SenderFilter) -> Vec<DailyCount> {
        let mut days: BTreeMap<NaiveDate, usize> = BTreeMap::new();
        for msg in &view.for_sender(filter) {
            *days.entry(msg.only_date).or_insert(0) += 1;
        }

        days.into_iter()
            .map(|(only_date, messages)| DailyCount {
                only_date,
                messages,
            })
            .collect()
    }

    /// Messages per weekday, busiest first. Unused weekdays are absent.
    pub fn weekday_activity(&self, view: &FrameView<'_>, filter: &SenderFilter) -> Vec<WeekdayCount> {
        let mut days: IndexMap<&str, usize> = IndexMap::new();
        for msg in &view.for_sender(filter) {
            *days.entry(msg.day_name.as_str()).or_insert(0) += 1;
        }

        ranked(days)
            .into_iter()
            .map(|(day_name, messages)| WeekdayCount {
                day_name: day_name.to_string(),
                messages,
            })
            .collect()
    }
}

/// `part / total` in percent, rounded to 2 decimals; 0 when `total` is 0.
#[allow(clippy::cast_precision_loss)]
fn percent(part: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    (part as f64 / total as f64 * 10_000.0).round() / 100.0
}
