//! Filter a chat by date range and sender.
//!
//! This module provides [`FilterConfig`] for defining filter criteria and
//! [`apply_filters`] for producing a [`FrameView`] from a [`ChatFrame`].
//!
//! # Filter Types
//!
//! | Filter | Method | Description |
//! |--------|--------|-------------|
//! | Date from | [`with_date_from`](FilterConfig::with_date_from) | Messages on or after date |
//! | Date to | [`with_date_to`](FilterConfig::with_date_to) | Messages on or before date |
//! | Sender | [`with_sender`](FilterConfig::with_sender) | Messages from one sender |
//!
//! # Example
//!
//! ```
//! use chatstat::core::filter::{FilterConfig, apply_filters};
//! use chatstat::parsers::WhatsAppParser;
//!
//! # fn main() -> chatstat::Result<()> {
//! let frame = WhatsAppParser::new().parse_str(
//!     "1/1/23, 10:00 - Alice: old\n1/6/23, 10:00 - Alice: new\n",
//! )?;
//!
//! let config = FilterConfig::new()
//!     .with_date_from("2023-06-01")?
//!     .with_date_to("2023-12-31")?;
//!
//! let view = apply_filters(&frame, &config);
//! assert_eq!(view.len(), 1);
//! assert_eq!(view.records()[0].body, "new");
//! # Ok(())
//! # }
//! ```
//!
//! # Behavior Notes
//!
//! - Date bounds are inclusive and compare calendar dates, not times
//! - Sender matching is exact; `"overall"` selects everyone
//! - Multiple filters are combined with AND logic

use chrono::NaiveDate;

use super::frame::{ChatFrame, FrameView, SenderFilter};
use crate::error::ChatstatError;

/// Configuration for filtering a chat by date and sender.
#[derive(Debug, Clone, Default)]
pub struct FilterConfig {
    /// Include only messages on or after this date.
    pub from: Option<NaiveDate>,

    /// Include only messages on or before this date.
    pub to: Option<NaiveDate>,

    /// Include only messages from this sender.
    pub sender: SenderFilter,
}

impl FilterConfig {
    /// Creates a new empty filter configuration.
    ///
    /// No filters are active by default; all records pass through.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the start date filter (inclusive).
    ///
    /// Date format: `YYYY-MM-DD`.
    ///
    /// # Errors
    ///
    /// Returns [`ChatstatError::InvalidDate`] if the format is invalid.
    pub fn with_date_from(mut self, date_str: &str) -> Result<Self, ChatstatError> {
        self.from = Some(parse_date(date_str)?);
        Ok(self)
    }

    /// Sets the end date filter (inclusive).
    ///
    /// Date format: `YYYY-MM-DD`.
    ///
    /// # Errors
    ///
    /// Returns [`ChatstatError::InvalidDate`] if the format is invalid.
    pub fn with_date_to(mut self, date_str: &str) -> Result<Self, ChatstatError> {
        self.to = Some(parse_date(date_str)?);
        Ok(self)
    }

    /// Sets the start date directly.
    #[must_use]
    pub fn with_from(mut self, date: NaiveDate) -> Self {
        self.from = Some(date);
        self
    }

    /// Sets the end date directly.
    #[must_use]
    pub fn with_to(mut self, date: NaiveDate) -> Self {
        self.to = Some(date);
        self
    }

    /// Sets the sender filter.
    ///
    /// ```
    /// use chatstat::core::{FilterConfig, SenderFilter};
    ///
    /// let config = FilterConfig::new().with_sender("Alice");
    /// assert_eq!(config.sender, SenderFilter::Sender("Alice".into()));
    /// ```
    #[must_use]
    pub fn with_sender(mut self, sender: impl Into<SenderFilter>) -> Self {
        self.sender = sender.into();
        self
    }

    /// Returns `true` if any filter is active.
    pub fn is_active(&self) -> bool {
        self.has_date_filter() || !self.sender.is_overall()
    }

    /// Returns `true` if date filters are active.
    pub fn has_date_filter(&self) -> bool {
        self.from.is_some() || self.to.is_some()
    }
}

/// Parse a date string in YYYY-MM-DD format.
fn parse_date(date_str: &str) -> Result<NaiveDate, ChatstatError> {
    NaiveDate::parse_from_str(date_str, "%Y-%m-%d")
        .map_err(|_| ChatstatError::invalid_date(date_str))
}

/// Produces a view of `frame` with only the records that match all active
/// filters. The frame itself is never modified.
pub fn apply_filters<'a>(frame: &'a ChatFrame, config: &FilterConfig) -> FrameView<'a> {
    let view = frame.view();
    if !config.is_active() {
        return view;
    }

    view.between(config.from, config.to)
        .for_sender(&config.sender)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MessageRecord;

    fn make_msg(sender: Option<&str>, body: &str, date: &str) -> MessageRecord {
        let day = NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap();
        MessageRecord::new(
            day.and_hms_opt(12, 0, 0).unwrap(),
            sender.map(str::to_string),
            body,
        )
    }

    fn sample() -> ChatFrame {
        ChatFrame::from_records(vec![
            make_msg(Some("Alice"), "Old Alice", "2024-01-01"),
            make_msg(Some("Alice"), "New Alice", "2024-06-15"),
            make_msg(Some("Bob"), "New Bob", "2024-06-15"),
            make_msg(None, "Bob left", "2024-06-16"),
        ])
    }

    #[test]
    fn test_filter_by_sender() {
        let frame = sample();
        let config = FilterConfig::new().with_sender("Alice");
        let view = apply_filters(&frame, &config);

        assert_eq!(view.len(), 2);
        assert!(view.iter().all(|m| m.sender() == Some("Alice")));
    }

    #[test]
    fn test_sender_match_is_exact() {
        let frame = sample();
        let config = FilterConfig::new().with_sender("alice");
        assert!(apply_filters(&frame, &config).is_empty());
    }

    #[test]
    fn test_filter_by_date_from() {
        let frame = sample();
        let config = FilterConfig::new().with_date_from("2024-06-01").unwrap();
        let view = apply_filters(&frame, &config);

        assert_eq!(view.len(), 3);
        assert_eq!(view.records()[0].body, "New Alice");
    }

    #[test]
    fn test_filter_by_date_to_is_inclusive() {
        let frame = sample();
        let config = FilterConfig::new().with_date_to("2024-06-15").unwrap();
        let view = apply_filters(&frame, &config);

        assert_eq!(view.len(), 3);
        assert!(view.iter().all(|m| m.body != "Bob left"));
    }

    #[test]
    fn test_invalid_date_format() {
        let result = FilterConfig::new().with_date_from("01-01-2024");
        assert!(matches!(result, Err(ChatstatError::InvalidDate { .. })));
    }

    #[test]
    fn test_combined_filters() {
        let frame = sample();
        let config = FilterConfig::new()
            .with_date_from("2024-06-01")
            .unwrap()
            .with_sender("Alice");

        let view = apply_filters(&frame, &config);
        assert_eq!(view.len(), 1);
        assert_eq!(view.records()[0].body, "New Alice");
    }

    #[test]
    fn test_no_filters_returns_everything() {
        let frame = sample();
        let config = FilterConfig::new().with_sender("overall");
        assert!(!config.is_active());
        assert_eq!(apply_filters(&frame, &config).len(), frame.len());
    }

    #[test]
    fn test_empty_range() {
        let frame = sample();
        let config = FilterConfig::new()
            .with_date_from("2025-01-01")
            .unwrap();
        assert!(apply_filters(&frame, &config).is_empty());
    }
}
