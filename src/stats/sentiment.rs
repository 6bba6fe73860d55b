//! Message sentiment scoring.
//!
//! The default scorer is rule-based: token valences come from a
//! [`SentimentLexicon`] and are adjusted for intensifiers, emphasis in
//! capitals, negation, contrast after "but" and exclamation marks, then
//! squashed into `[-1, 1]`.

use std::collections::HashSet;
use std::sync::LazyLock;

use super::Analyzer;
use crate::core::{FrameView, Sentiment, SentimentCount, SenderFilter};
use crate::lexicon::SentimentLexicon;

/// Scores a text between -1 (most negative) and 1 (most positive).
pub trait SentimentScorer: Send + Sync {
    /// Returns the compound score of `text`, in `[-1, 1]`.
    fn compound(&self, text: &str) -> f64;
}

const BOOST: f64 = 0.293;
const CAPS_BOOST: f64 = 0.733;
const NEGATION_SCALAR: f64 = -0.74;
const BANG_BOOST: f64 = 0.292;
const MAX_BANGS: usize = 4;
const NEGATION_WINDOW: usize = 3;
const NORMALIZATION_ALPHA: f64 = 15.0;

static BOOSTERS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "absolutely", "completely", "extremely", "incredibly", "really", "so", "super",
        "totally", "very", "most", "more", "too", "hella", "highly", "truly", "sooo",
    ]
    .into_iter()
    .collect()
});

static DAMPENERS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "barely", "hardly", "slightly", "somewhat", "kinda", "sorta", "little", "less",
        "marginally", "occasionally",
    ]
    .into_iter()
    .collect()
});

static NEGATORS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "not", "no", "never", "none", "nobody", "nothing", "neither", "nor", "nowhere",
        "cannot", "without", "aint", "ain't", "cant", "can't", "dont", "don't", "doesnt",
        "doesn't", "didnt", "didn't", "isnt", "isn't", "wasnt", "wasn't", "arent",
        "aren't", "werent", "weren't", "wont", "won't", "wouldnt", "wouldn't", "shouldnt",
        "shouldn't", "couldnt", "couldn't", "havent", "haven't", "hasnt", "hasn't",
        "hadnt", "hadn't",
    ]
    .into_iter()
    .collect()
});

/// Lexicon-valence scorer.
///
/// # Example
///
/// ```
/// use chatstat::lexicon::SentimentLexicon;
/// use chatstat::stats::{SentimentAnalyzer, SentimentScorer};
///
/// let scorer = SentimentAnalyzer::new(SentimentLexicon::english());
/// assert!(scorer.compound("I love this") > 0.2);
/// assert!(scorer.compound("this is not good") < -0.2);
/// assert_eq!(scorer.compound("see you at 5"), 0.0);
/// ```
#[derive(Debug, Clone)]
pub struct SentimentAnalyzer {
    lexicon: SentimentLexicon,
}

impl SentimentAnalyzer {
    pub fn new(lexicon: SentimentLexicon) -> Self {
        Self { lexicon }
    }

    fn valence(&self, token: &Token) -> Option<f64> {
        self.lexicon
            .valence(&token.raw_lower)
            .or_else(|| self.lexicon.valence(&token.lower))
    }
}

impl Default for SentimentAnalyzer {
    fn default() -> Self {
        Self::new(SentimentLexicon::english())
    }
}

struct Token {
    /// Lowercased token as written, so `:)` and `<3` can be looked up.
    raw_lower: String,
    /// Lowercased with surrounding punctuation removed.
    lower: String,
    has_letters: bool,
    is_caps: bool,
}

impl Token {
    fn new(raw: &str) -> Self {
        let raw_lower = raw.to_lowercase();
        let lower = raw_lower
            .trim_matches(|c: char| c.is_ascii_punctuation() && c != '\'')
            .trim_matches('\'')
            .to_string();
        let has_letters = raw.chars().any(char::is_alphabetic);
        let is_caps = has_letters && raw.chars().filter(|c| c.is_alphabetic()).all(char::is_uppercase);
        Self {
            raw_lower,
            lower,
            has_letters,
            is_caps,
        }
    }

    fn booster(&self) -> Option<f64> {
        if BOOSTERS.contains(self.lower.as_str()) {
            Some(BOOST)
        } else if DAMPENERS.contains(self.lower.as_str()) {
            Some(-BOOST)
        } else {
            None
        }
    }

    fn is_negator(&self) -> bool {
        NEGATORS.contains(self.lower.as_str()) || self.lower.ends_with("n't")
    }
}

impl SentimentScorer for SentimentAnalyzer {
    fn compound(&self, text: &str) -> f64 {
        let tokens: Vec<Token> = text.split_whitespace().map(Token::new).collect();
        if tokens.is_empty() {
            return 0.0;
        }

        let worded: Vec<&Token> = tokens.iter().filter(|t| t.has_letters).collect();
        let caps_differential =
            worded.iter().any(|t| t.is_caps) && !worded.iter().all(|t| t.is_caps);

        let mut valences = vec![0.0; tokens.len()];
        for (idx, token) in tokens.iter().enumerate() {
            if token.booster().is_some() {
                continue;
            }
            let Some(mut valence) = self.valence(token) else {
                continue;
            };

            if token.is_caps && caps_differential {
                valence += CAPS_BOOST.copysign(valence);
            }
            if let Some(boost) = idx.checked_sub(1).and_then(|prev| tokens[prev].booster()) {
                valence += if valence > 0.0 { boost } else { -boost };
            }
            let window = idx.saturating_sub(NEGATION_WINDOW)..idx;
            if tokens[window].iter().any(Token::is_negator) {
                valence *= NEGATION_SCALAR;
            }

            valences[idx] = valence;
        }

        if let Some(pivot) = tokens.iter().position(|t| t.lower == "but") {
            for (idx, valence) in valences.iter_mut().enumerate() {
                if idx < pivot {
                    *valence *= 0.5;
                } else if idx > pivot {
                    *valence *= 1.5;
                }
            }
        }

        let mut sum: f64 = valences.iter().sum();
        if sum == 0.0 {
            return 0.0;
        }

        let bangs = text.matches('!').count().min(MAX_BANGS);
        #[allow(clippy::cast_precision_loss)]
        let emphasis = bangs as f64 * BANG_BOOST;
        sum += emphasis.copysign(sum);

        (sum / (sum * sum + NORMALIZATION_ALPHA).sqrt()).clamp(-1.0, 1.0)
    }
}

impl Analyzer {
    /// Scores one text with the configured scorer.
    pub fn score(&self, text: &str) -> f64 {
        self.scorer.compound(text)
    }

    /// Maps a compound score to its category.
    ///
    /// Above the positive threshold is positive; at or below the negative
    /// threshold is negative; anything between is neutral.
    pub fn categorize(&self, score: f64) -> Sentiment {
        if score > self.config.positive_threshold {
            Sentiment::Positive
        } else if score <= self.config.negative_threshold {
            Sentiment::Negative
        } else {
            Sentiment::Neutral
        }
    }

    /// Messages per sentiment category.
    ///
    /// Always three rows in the order positive, neutral, negative.
    pub fn sentiment_summary(
        &self,
        view: &FrameView<'_>,
        filter: &SenderFilter,
    ) -> Vec<SentimentCount> {
        let mut counts = [0usize; 3];
        for msg in &view.for_sender(filter) {
            let slot = match self.categorize(self.score(msg.body())) {
                Sentiment::Positive => 0,
                Sentiment::Neutral => 1,
                Sentiment::Negative => 2,
            };
            counts[slot] += 1;
        }

        Sentiment::all()
            .iter()
            .zip(counts)
            .map(|(&sentiment, messages)| SentimentCount {
                sentiment,
                messages,
            })
            .collect()
    }
}
