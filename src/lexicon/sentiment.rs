//! Token valences for the sentiment scorer.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::error::{ChatstatError, Result};

const ENGLISH: &str = include_str!("../../data/sentiment_lexicon.txt");

/// Mean valence per token, roughly in `-4.0..=4.0`.
///
/// # Format
///
/// One entry per line, `token<TAB>valence`, extra tab-separated columns are
/// ignored. Blank lines and lines starting with `#` are skipped. Tokens are
/// stored lowercase.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SentimentLexicon {
    valences: HashMap<String, f64>,
}

impl SentimentLexicon {
    /// Parses lexicon text.
    ///
    /// # Errors
    ///
    /// Returns [`ChatstatError::InvalidLexicon`] naming the line when a
    /// line has no valence column or the valence is not a finite number.
    pub fn parse(text: &str) -> Result<Self> {
        let mut valences = HashMap::new();

        for (idx, line) in text.lines().enumerate() {
            let line = line.trim_end_matches('\r');
            if line.trim().is_empty() || line.starts_with('#') {
                continue;
            }

            let mut columns = line.split('\t');
            let token = columns.next().unwrap_or_default().trim();
            let valence = columns.next().map(str::trim).ok_or_else(|| {
                ChatstatError::invalid_lexicon(
                    "sentiment",
                    format!("line {}: expected token<TAB>valence", idx + 1),
                )
            })?;
            let valence: f64 = valence
                .parse()
                .ok()
                .filter(|v: &f64| v.is_finite())
                .ok_or_else(|| {
                    ChatstatError::invalid_lexicon(
                        "sentiment",
                        format!("line {}: invalid valence '{valence}'", idx + 1),
                    )
                })?;

            if token.is_empty() {
                return Err(ChatstatError::invalid_lexicon(
                    "sentiment",
                    format!("line {}: empty token", idx + 1),
                ));
            }
            valences.insert(token.to_lowercase(), valence);
        }

        Ok(Self { valences })
    }

    /// Loads a lexicon file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        Self::parse(&text)
    }

    /// The built-in English lexicon, including common emoticons and emoji.
    pub fn english() -> Self {
        Self::parse(ENGLISH).expect("embedded sentiment lexicon is well-formed")
    }

    /// Returns the valence of a lowercase token.
    pub fn valence(&self, token: &str) -> Option<f64> {
        self.valences.get(token).copied()
    }

    pub fn len(&self) -> usize {
        self.valences.len()
    }

    pub fn is_empty(&self) -> bool {
        self.valences.is_empty()
    }
}
