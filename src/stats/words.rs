//! Word counts, word frequency and word-cloud text.

use indexmap::IndexMap;

use super::{Analyzer, ranked};
use crate::MessageRecord;
use crate::core::{FrameView, SenderFilter, WordCount};

/// Counts whitespace-separated tokens that contain a letter or digit.
///
/// ```
/// use chatstat::stats::count_words;
///
/// assert_eq!(count_words("hello 😀"), 1);
/// assert_eq!(count_words("check http://x.co now"), 3);
/// assert_eq!(count_words(" - ... "), 0);
/// ```
pub fn count_words(body: &str) -> usize {
    body.split_whitespace()
        .filter(|token| token.chars().any(char::is_alphanumeric))
        .count()
}

impl Analyzer {
    /// Most used words, stop words, media placeholders and notifications
    /// excluded. At most `top_words` rows.
    pub fn word_frequency(&self, view: &FrameView<'_>, filter: &SenderFilter) -> Vec<WordCount> {
        let mut counts: IndexMap<String, usize> = IndexMap::new();
        for word in self.words(view, filter) {
            *counts.entry(word).or_insert(0) += 1;
        }

        let mut rows = ranked(counts);
        rows.truncate(self.config.top_words);
        rows.into_iter()
            .map(|(word, count)| WordCount { word, count })
            .collect()
    }

    /// The words counted by [`word_frequency`](Self::word_frequency), in
    /// message order, joined by single spaces.
    pub fn word_cloud_text(&self, view: &FrameView<'_>, filter: &SenderFilter) -> String {
        self.words(view, filter).collect::<Vec<_>>().join(" ")
    }

    fn words<'v>(
        &'v self,
        view: &FrameView<'v>,
        filter: &SenderFilter,
    ) -> impl Iterator<Item = String> + 'v {
        let stop_words = &self.stop_words;
        view.for_sender(filter)
            .records()
            .to_vec()
            .into_iter()
            .filter(|msg| is_wordy(msg))
            .flat_map(|msg| msg.body().split_whitespace())
            .map(str::to_lowercase)
            .filter(move |word| !stop_words.contains(word))
    }
}

fn is_wordy(msg: &MessageRecord) -> bool {
    !msg.is_notification() && !msg.is_media()
}
