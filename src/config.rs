//! Configuration types for parsing and analysis.
//!
//! This module provides plain configuration structs for library usage,
//! without any CLI framework dependencies.
//!
//! - [`ParserConfig`] - how export text is turned into records
//! - [`AnalyzerConfig`] - knobs of the statistics
//!
//! # Example
//!
//! ```rust
//! use chatstat::config::{AnalyzerConfig, ParserConfig};
//! use chatstat::parsing::DateOrder;
//!
//! let parser = ParserConfig::new().with_date_order(DateOrder::MonthFirst);
//! let analyzer = AnalyzerConfig::new().with_top_words(10);
//!
//! assert_eq!(parser.date_order, DateOrder::MonthFirst);
//! assert_eq!(analyzer.top_words, 10);
//! ```

use serde::{Deserialize, Serialize};

use crate::parsing::DateOrder;

/// Configuration for export parsing.
///
/// # Example
///
/// ```rust
/// use chatstat::config::ParserConfig;
///
/// let config = ParserConfig::new().with_skip_invalid(false);
/// assert!(!config.skip_invalid);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParserConfig {
    /// How `a/b/yy` dates are read (default: auto-detect)
    pub date_order: DateOrder,

    /// Skip records with unresolvable timestamps instead of returning
    /// errors (default: true)
    pub skip_invalid: bool,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            date_order: DateOrder::Auto,
            skip_invalid: true,
        }
    }
}

impl ParserConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the date order.
    #[must_use]
    pub fn with_date_order(mut self, order: DateOrder) -> Self {
        self.date_order = order;
        self
    }

    /// Sets whether to skip invalid records.
    #[must_use]
    pub fn with_skip_invalid(mut self, skip: bool) -> Self {
        self.skip_invalid = skip;
        self
    }
}

/// Configuration for the statistics.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AnalyzerConfig {
    /// Rows kept by the word frequency table (default: 20)
    pub top_words: usize,

    /// Compound scores above this are positive (default: 0.2)
    pub positive_threshold: f64,

    /// Compound scores at or below this are negative (default: -0.2)
    pub negative_threshold: f64,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            top_words: 20,
            positive_threshold: 0.2,
            negative_threshold: -0.2,
        }
    }
}

impl AnalyzerConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the number of rows in the word frequency table.
    #[must_use]
    pub fn with_top_words(mut self, n: usize) -> Self {
        self.top_words = n;
        self
    }

    /// Sets both sentiment thresholds.
    #[must_use]
    pub fn with_thresholds(mut self, positive: f64, negative: f64) -> Self {
        self.positive_threshold = positive;
        self.negative_threshold = negative;
        self
    }
}
