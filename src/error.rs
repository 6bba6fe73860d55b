//! Unified error types for chatstat.
//!
//! This module provides a single [`ChatstatError`] enum that covers all error
//! cases in the library.
//!
//! # Recovery
//!
//! Most problems in a chat export are recovered rather than reported:
//! - invalid UTF-8 bytes are dropped during decoding
//! - records whose timestamp cannot be resolved are skipped
//! - filters that select nothing yield zero-valued statistics
//!
//! What remains are errors the caller has to act on: unreadable files,
//! malformed lexicon resources, bad filter dates and output failures.

use std::io;

use thiserror::Error;

/// A specialized [`Result`] type for chatstat operations.
///
/// # Example
///
/// ```rust
/// use chatstat::error::Result;
/// use chatstat::core::BasicStats;
///
/// fn my_function() -> Result<BasicStats> {
///     Ok(BasicStats::default())
/// }
/// ```
pub type Result<T> = std::result::Result<T, ChatstatError>;

/// The error type for all chatstat operations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ChatstatError {
    /// An I/O error occurred.
    ///
    /// This typically happens when:
    /// - The input file or a lexicon file doesn't exist
    /// - Permission denied
    /// - Disk is full (when writing output)
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Failed to parse part of the input.
    ///
    /// Raised by the timestamp resolver; the export parser recovers from it
    /// by skipping the record.
    #[error("Failed to parse {context}: {source}")]
    Parse {
        /// What was being parsed (e.g., "timestamp")
        context: &'static str,
        /// The underlying parse error
        #[source]
        source: ParseErrorKind,
    },

    /// Invalid date format in filter configuration.
    ///
    /// Date filters expect YYYY-MM-DD format.
    #[error("Invalid date '{input}'. Expected format: {expected}")]
    InvalidDate {
        /// The invalid date string that was provided
        input: String,
        /// Expected format description
        expected: &'static str,
    },

    /// A lexicon resource (stop words, emotions, sentiment) is malformed.
    #[error("Invalid {resource} lexicon: {message}")]
    InvalidLexicon {
        /// Which resource failed to load
        resource: &'static str,
        /// Description of what's wrong
        message: String,
    },

    /// Unknown or unavailable output format.
    #[error("Invalid {format} format: {message}")]
    InvalidFormat {
        /// Which format was requested (e.g., "output")
        format: &'static str,
        /// Description of what's wrong
        message: String,
    },

    /// JSON parsing/serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// CSV writing error.
    #[cfg(feature = "csv-output")]
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

/// Kinds of parse errors that can occur.
#[derive(Debug, Error)]
pub enum ParseErrorKind {
    /// No supported layout matched a timestamp
    #[error("unsupported timestamp '{0}'")]
    Timestamp(String),
}

// ============================================================================
// Convenience constructors
// ============================================================================

impl ChatstatError {
    /// Creates a timestamp parse error.
    pub fn timestamp(input: impl Into<String>) -> Self {
        ChatstatError::Parse {
            context: "timestamp",
            source: ParseErrorKind::Timestamp(input.into()),
        }
    }

    /// Creates an invalid date error.
    pub fn invalid_date(input: impl Into<String>) -> Self {
        ChatstatError::InvalidDate {
            input: input.into(),
            expected: "YYYY-MM-DD",
        }
    }

    /// Creates an invalid lexicon error.
    pub fn invalid_lexicon(resource: &'static str, message: impl Into<String>) -> Self {
        ChatstatError::InvalidLexicon {
            resource,
            message: message.into(),
        }
    }

    /// Creates an invalid format error.
    pub fn invalid_format(format: &'static str, message: impl Into<String>) -> Self {
        ChatstatError::InvalidFormat {
            format,
            message: message.into(),
        }
    }

    /// Returns `true` if this is an IO error.
    pub fn is_io(&self) -> bool {
        matches!(self, ChatstatError::Io(_))
    }

    /// Returns `true` if this is a parse error.
    pub fn is_parse(&self) -> bool {
        matches!(self, ChatstatError::Parse { .. })
    }

    /// Returns `true` if this is a date-related error.
    pub fn is_invalid_date(&self) -> bool {
        matches!(self, ChatstatError::InvalidDate { .. })
    }

    /// Returns `true` if this is a lexicon error.
    pub fn is_invalid_lexicon(&self) -> bool {
        matches!(self, ChatstatError::InvalidLexicon { .. })
    }
}
