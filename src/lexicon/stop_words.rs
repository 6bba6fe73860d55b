//! Stop-word list used by the word statistics.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use crate::error::Result;

const ENGLISH: &str = include_str!("../../data/stop_english.txt");

/// A set of lowercase tokens excluded from word frequency counts.
///
/// # Example
///
/// ```
/// use chatstat::lexicon::StopWords;
///
/// let stop = StopWords::from_text("the\na an\n");
/// assert!(stop.contains("the"));
/// assert!(stop.contains("an"));
/// assert!(!stop.contains("then"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StopWords {
    words: HashSet<String>,
}

impl StopWords {
    /// Builds a set from whitespace- or newline-separated tokens.
    ///
    /// Tokens are lowercased.
    pub fn from_text(text: &str) -> Self {
        Self {
            words: text.split_whitespace().map(str::to_lowercase).collect(),
        }
    }

    /// Loads a stop-word file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        Ok(Self::from_text(&text))
    }

    /// The built-in English list.
    pub fn english() -> Self {
        Self::from_text(ENGLISH)
    }

    /// Returns `true` if `token` is a stop word. Membership is exact.
    pub fn contains(&self, token: &str) -> bool {
        self.words.contains(token)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
