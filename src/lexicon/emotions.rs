//! Emoji emotion buckets.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use indexmap::IndexMap;

use crate::error::{ChatstatError, Result};

const DEFAULT_BUCKETS: &str = include_str!("../../data/emotions.json");

/// Maps emotion bucket names to the emoji that express them.
///
/// Bucket order is the order of the source document and is kept in every
/// summary built from the lexicon.
///
/// # Format
///
/// ```json
/// { "happy": ["😀", "😂"], "sad": ["😢"] }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmotionLexicon {
    buckets: IndexMap<String, Vec<String>>,
    index: HashMap<String, usize>,
}

impl EmotionLexicon {
    /// Builds a lexicon from bucket → emoji lists.
    ///
    /// An emoji listed in several buckets counts for the first one.
    pub fn new(buckets: IndexMap<String, Vec<String>>) -> Self {
        let mut index = HashMap::new();
        for (position, glyphs) in buckets.values().enumerate() {
            for glyph in glyphs {
                index.entry(normalize(glyph)).or_insert(position);
            }
        }
        Self { buckets, index }
    }

    /// Parses a JSON object of bucket name → list of emoji.
    pub fn from_json(json: &str) -> Result<Self> {
        let buckets: IndexMap<String, Vec<String>> = serde_json::from_str(json)?;
        if let Some(name) = buckets.keys().find(|name| name.trim().is_empty()) {
            return Err(ChatstatError::invalid_lexicon(
                "emotion",
                format!("empty bucket name {name:?}"),
            ));
        }
        Ok(Self::new(buckets))
    }

    /// Loads a JSON lexicon file.
    pub fn load(path: &Path) -> Result<Self> {
        let json = fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Returns the bucket names in order.
    pub fn buckets(&self) -> impl Iterator<Item = &str> {
        self.buckets.keys().map(String::as_str)
    }

    /// Returns the bucket position of `emoji`, ignoring variation selectors.
    pub fn bucket_index(&self, emoji: &str) -> Option<usize> {
        self.index.get(&normalize(emoji)).copied()
    }

    /// Returns the bucket name of `emoji`.
    pub fn bucket_of(&self, emoji: &str) -> Option<&str> {
        let position = self.bucket_index(emoji)?;
        self.buckets
            .get_index(position)
            .map(|(name, _)| name.as_str())
    }

    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }
}

impl Default for EmotionLexicon {
    /// Buckets `happy`, `sad`, `angry` and `annoyed`.
    fn default() -> Self {
        Self::from_json(DEFAULT_BUCKETS).expect("embedded emotion lexicon is valid JSON")
    }
}

fn normalize(glyph: &str) -> String {
    glyph.chars().filter(|&c| c != '\u{FE0F}').collect()
}
