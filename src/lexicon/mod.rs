//! Word lists and lexicons used by the statistics.
//!
//! Each resource can be loaded from a file and has a built-in default
//! embedded in the binary:
//!
//! - [`StopWords`] - tokens dropped from word frequency (`data/stop_english.txt`)
//! - [`EmotionLexicon`] - emoji grouped into emotion buckets (`data/emotions.json`)
//! - [`SentimentLexicon`] - token valences for sentiment scoring (`data/sentiment_lexicon.txt`)

mod emotions;
mod sentiment;
mod stop_words;

use std::path::Path;

use tracing::debug;

pub use emotions::EmotionLexicon;
pub use sentiment::SentimentLexicon;
pub use stop_words::StopWords;

use crate::error::Result;

/// The three lexicon resources an [`Analyzer`](crate::stats::Analyzer) needs.
#[derive(Debug, Clone)]
pub struct LexiconSet {
    pub stop_words: StopWords,
    pub emotions: EmotionLexicon,
    pub sentiment: SentimentLexicon,
}

impl Default for LexiconSet {
    fn default() -> Self {
        Self {
            stop_words: StopWords::english(),
            emotions: EmotionLexicon::default(),
            sentiment: SentimentLexicon::english(),
        }
    }
}

impl LexiconSet {
    /// Loads each resource from its path, falling back to the built-in
    /// default when the path is `None`.
    ///
    /// # Example
    ///
    /// ```
    /// use chatstat::lexicon::LexiconSet;
    ///
    /// let set = LexiconSet::load(None, None, None).unwrap();
    /// assert!(set.stop_words.contains("the"));
    /// ```
    pub fn load(
        stop_words: Option<&Path>,
        emotions: Option<&Path>,
        sentiment: Option<&Path>,
    ) -> Result<Self> {
        let stop_words = match stop_words {
            Some(path) => {
                debug!(path = %path.display(), "loading stop words");
                StopWords::load(path)?
            }
            None => StopWords::english(),
        };
        let emotions = match emotions {
            Some(path) => {
                debug!(path = %path.display(), "loading emotion lexicon");
                EmotionLexicon::load(path)?
            }
            None => EmotionLexicon::default(),
        };
        let sentiment = match sentiment {
            Some(path) => {
                debug!(path = %path.display(), "loading sentiment lexicon");
                SentimentLexicon::load(path)?
            }
            None => SentimentLexicon::english(),
        };

        Ok(Self {
            stop_words,
            emotions,
            sentiment,
        })
    }
}
