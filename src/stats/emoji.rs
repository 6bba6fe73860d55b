//! Emoji scanning and emoji-based tables.

use indexmap::IndexMap;
use unicode_segmentation::UnicodeSegmentation;

use super::{Analyzer, ranked};
use crate::core::{EmojiCount, EmotionCount, FrameView, SenderFilter};

/// Returns every emoji in `text` as written, in order.
///
/// The text is split into extended grapheme clusters, so a ZWJ sequence
/// (`👨‍👩‍👧`), a flag or a skin-toned emoji counts as one emoji.
///
/// # Example
///
/// ```
/// use chatstat::stats::extract_emojis;
///
/// assert_eq!(extract_emojis("hi 😀😀 👍🏽!"), vec!["😀", "😀", "👍🏽"]);
/// assert!(extract_emojis("no emoji here :)").is_empty());
/// ```
pub fn extract_emojis(text: &str) -> Vec<&str> {
    text.graphemes(true).filter(|g| is_emoji(g)).collect()
}

fn is_emoji(grapheme: &str) -> bool {
    if grapheme.is_ascii() {
        return false;
    }
    if emojis::get(grapheme).is_some() {
        return true;
    }

    let base: String = grapheme
        .chars()
        .filter(|&c| c != '\u{FE0F}' && !('\u{1F3FB}'..='\u{1F3FF}').contains(&c))
        .collect();
    !base.is_empty() && base != grapheme && emojis::get(&base).is_some()
}

impl Analyzer {
    /// Emoji usage, most used first.
    pub fn emoji_frequency(&self, view: &FrameView<'_>, filter: &SenderFilter) -> Vec<EmojiCount> {
        ranked(self.emoji_counts(view, filter))
            .into_iter()
            .map(|(emoji, count)| EmojiCount {
                emoji: emoji.to_string(),
                count,
            })
            .collect()
    }

    /// Emoji usage summed per emotion bucket, in lexicon order.
    ///
    /// Every bucket is present; emoji outside the lexicon are ignored.
    pub fn emoji_emotion_summary(
        &self,
        view: &FrameView<'_>,
        filter: &SenderFilter,
    ) -> Vec<EmotionCount> {
        let mut totals = vec![0usize; self.emotions.len()];
        for (emoji, count) in self.emoji_counts(view, filter) {
            if let Some(bucket) = self.emotions.bucket_index(emoji) {
                totals[bucket] += count;
            }
        }

        self.emotions
            .buckets()
            .zip(totals)
            .map(|(emotion, count)| EmotionCount {
                emotion: emotion.to_string(),
                count,
            })
            .collect()
    }

    fn emoji_counts<'a>(
        &self,
        view: &FrameView<'a>,
        filter: &SenderFilter,
    ) -> IndexMap<&'a str, usize> {
        let mut counts = IndexMap::new();
        for msg in &view.for_sender(filter) {
            for emoji in extract_emojis(msg.body()) {
                *counts.entry(emoji).or_insert(0) += 1;
            }
        }
        counts
    }
}
