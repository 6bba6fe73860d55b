//! Structured chat record.
//!
//! This module provides [`MessageRecord`], one parsed unit of a chat export.
//! A record is either a user message (with a sender) or a system
//! notification (without one).
//!
//! # Derived fields
//!
//! The calendar fields the statistics group by (`year`, `month_num`,
//! `only_date`, `day_name`, ...) are computed once, when the record is
//! built, and never change afterwards.
//!
//! # Example
//!
//! ```
//! use chatstat::MessageRecord;
//! use chrono::NaiveDate;
//!
//! let ts = NaiveDate::from_ymd_opt(2023, 1, 1)
//!     .unwrap()
//!     .and_hms_opt(10, 0, 0)
//!     .unwrap();
//! let msg = MessageRecord::new(ts, Some("Alice".into()), "hello");
//!
//! assert_eq!(msg.sender(), Some("Alice"));
//! assert_eq!(msg.month_name, "January");
//! assert_eq!(msg.day_name, "Sunday");
//! assert_eq!(msg.hour, 10);
//! ```

use chrono::{Datelike, NaiveDate, NaiveDateTime, Timelike};
use serde::Serialize;

/// Body text WhatsApp writes in place of an attachment.
///
/// Compared by exact equality with a record's body.
pub const MEDIA_OMITTED: &str = "<Media omitted>";

/// One parsed record of a chat export.
///
/// # Fields
///
/// | Field | Type | Description |
/// |-------|------|-------------|
/// | `timestamp` | `NaiveDateTime` | When the message was sent (export local time) |
/// | `sender` | `Option<String>` | Author, `None` for system notifications |
/// | `body` | `String` | Message text, may span several lines |
/// | `year` .. `minute` | derived | Calendar fields of `timestamp` |
///
/// Serializes with the timestamp as `YYYY-MM-DDTHH:MM:SS`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MessageRecord {
    /// When the message was sent.
    pub timestamp: NaiveDateTime,

    /// Display name or phone number of the author.
    ///
    /// `None` exactly for system notifications ("X added Y", "X left").
    pub sender: Option<String>,

    /// Text content of the message.
    pub body: String,

    /// Calendar year.
    pub year: i32,

    /// Full English month name ("January").
    pub month_name: String,

    /// Month number, 1-12.
    pub month_num: u32,

    /// Date without the time of day.
    pub only_date: NaiveDate,

    /// Full English weekday name ("Monday").
    pub day_name: String,

    /// Hour of day, 0-23.
    pub hour: u32,

    /// Minute of the hour, 0-59.
    pub minute: u32,
}

impl MessageRecord {
    /// Creates a record and computes its derived calendar fields.
    pub fn new(timestamp: NaiveDateTime, sender: Option<String>, body: impl Into<String>) -> Self {
        let date = timestamp.date();
        Self {
            timestamp,
            sender,
            body: body.into(),
            year: date.year(),
            month_name: date.format("%B").to_string(),
            month_num: date.month(),
            only_date: date,
            day_name: date.format("%A").to_string(),
            hour: timestamp.hour(),
            minute: timestamp.minute(),
        }
    }

    /// Returns the sender, if any.
    pub fn sender(&self) -> Option<&str> {
        self.sender.as_deref()
    }

    /// Returns the message body.
    pub fn body(&self) -> &str {
        &self.body
    }

    /// Returns `true` for system notifications.
    pub fn is_notification(&self) -> bool {
        self.sender.is_none()
    }

    /// Returns `true` if the body is exactly the media placeholder.
    ///
    /// A message that merely mentions `<Media omitted>` is not media.
    pub fn is_media(&self) -> bool {
        self.body == MEDIA_OMITTED
    }
}
