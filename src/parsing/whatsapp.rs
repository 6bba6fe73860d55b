//! Shared WhatsApp export parsing utilities.
//!
//! This module contains the line layouts that introduce a record, date order
//! detection, the timestamp resolver, and the list of phrases that mark
//! system notifications.

use std::sync::LazyLock;

use chrono::NaiveDateTime;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{ChatstatError, Result};

/// Date part of a record header: `D/M/YY`, `DD/MM/YYYY`, `15.01.24`, ...
const DATE: &str = r"\d{1,2}[/.]\d{1,2}[/.]\d{2,4}";

/// Time part of a record header, optional seconds and AM/PM marker.
///
/// The marker may be separated by a regular, no-break or narrow no-break
/// space, and may be written with dots (`p.m.`).
const TIME: &str =
    r"\d{1,2}:\d{2}(?::\d{2})?(?:[ \x{00A0}\x{202F}]?[AaPp]\.?[ \x{00A0}\x{202F}]?[Mm]\.?)?";

/// Horizontal whitespace inside a header. Never a line break.
const HSPACE: &str = r"[ \t\x{00A0}\x{202F}]";

static DASHED_RE: LazyLock<Regex> = LazyLock::new(|| compile(LineLayout::Dashed));
static BRACKETED_RE: LazyLock<Regex> = LazyLock::new(|| compile(LineLayout::Bracketed));

fn compile(layout: LineLayout) -> Regex {
    // The patterns are assembled from constants and covered by tests.
    Regex::new(&layout.pattern()).expect("line layout pattern is valid")
}

/// Line layouts that start a new record.
///
/// WhatsApp exports vary by platform:
/// - Android: `1/15/24, 10:30 - Sender: Message`
/// - iOS: `[1/15/24, 10:30:45] Sender: Message`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LineLayout {
    /// `D/M/YY, H:MM - ` (optionally with seconds and AM/PM)
    Dashed,
    /// `[D/M/YY, H:MM:SS] ` (optionally with AM/PM)
    Bracketed,
}

impl LineLayout {
    /// Returns the regex pattern for this layout.
    ///
    /// Group 1 captures the date, group 2 the time. The match covers the
    /// whole header including the trailing separator, which may also be the
    /// end of the line.
    pub fn pattern(self) -> String {
        match self {
            // 1/15/24, 10:30 - Sender: Message
            LineLayout::Dashed => format!(r"(?m)^({DATE}),{HSPACE}({TIME}){HSPACE}-(?:{HSPACE}|\r?$)"),
            // [1/15/24, 10:30:45] Sender: Message
            LineLayout::Bracketed => format!(r"(?m)^\x{{200E}}?\[({DATE}),{HSPACE}({TIME})\](?:{HSPACE}|\r?$)"),
        }
    }

    /// Returns the compiled header regex for this layout.
    pub fn regex(self) -> &'static Regex {
        match self {
            LineLayout::Dashed => &DASHED_RE,
            LineLayout::Bracketed => &BRACKETED_RE,
        }
    }

    /// Returns all layout variants, in tie-breaking order.
    pub fn all() -> &'static [LineLayout] {
        &[LineLayout::Dashed, LineLayout::Bracketed]
    }
}

/// Auto-detect the line layout of an export.
///
/// Every layout is matched against the whole text and the one with the most
/// record headers wins; ties go to the earlier entry of [`LineLayout::all`].
/// Returns `None` if no layout matches anywhere.
pub fn detect_layout(text: &str) -> Option<LineLayout> {
    let mut best: Option<(LineLayout, usize)> = None;

    for &layout in LineLayout::all() {
        let score = layout.regex().find_iter(text).count();
        if score > 0 && best.is_none_or(|(_, top)| score > top) {
            best = Some((layout, score));
        }
    }

    best.map(|(layout, _)| layout)
}

/// Order of the day and month components in a date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DateOrder {
    /// Decide from the dates found in the export
    #[default]
    Auto,
    /// `D/M/Y`
    DayFirst,
    /// `M/D/Y`
    MonthFirst,
}

impl DateOrder {
    /// Resolves [`DateOrder::Auto`] against sample dates.
    ///
    /// A first component above 12 means day-first; failing that, a second
    /// component above 12 means month-first; otherwise day-first. Explicit
    /// orders are returned unchanged.
    pub fn resolve<'a>(self, dates: impl IntoIterator<Item = &'a str>) -> DateOrder {
        if self != DateOrder::Auto {
            return self;
        }

        let mut month_first = false;
        for date in dates {
            let mut parts = date.split(['/', '.']).map(|p| p.parse::<u32>().unwrap_or(0));
            let first = parts.next().unwrap_or(0);
            let second = parts.next().unwrap_or(0);
            if first > 12 {
                return DateOrder::DayFirst;
            }
            if second > 12 {
                month_first = true;
            }
        }

        if month_first {
            DateOrder::MonthFirst
        } else {
            DateOrder::DayFirst
        }
    }

    /// Returns date parsing format strings for chrono.
    ///
    /// Two-digit years come first: `%Y` would happily read `23` as year 23.
    fn date_formats(self) -> &'static [&'static str] {
        match self {
            DateOrder::MonthFirst => &["%m/%d/%y", "%m/%d/%Y"],
            DateOrder::DayFirst | DateOrder::Auto => &["%d/%m/%y", "%d/%m/%Y"],
        }
    }
}

/// Resolves a header's date and time into a calendar timestamp.
///
/// Accepts 2- or 4-digit years, dots or slashes in the date, 12- or 24-hour
/// clocks and optional seconds.
///
/// # Errors
///
/// Returns [`ChatstatError::Parse`] when no supported layout matches, e.g.
/// for `31/31/23` or `25:00`.
///
/// # Example
///
/// ```
/// use chatstat::parsing::{DateOrder, resolve_timestamp};
///
/// let ts = resolve_timestamp("15/1/23", "9:05 PM", DateOrder::DayFirst)?;
/// assert_eq!(ts.to_string(), "2023-01-15 21:05:00");
/// # Ok::<(), chatstat::ChatstatError>(())
/// ```
pub fn resolve_timestamp(date: &str, time: &str, order: DateOrder) -> Result<NaiveDateTime> {
    let date = date.replace('.', "/");

    let clock: String = time
        .chars()
        .take_while(|c| c.is_ascii_digit() || *c == ':')
        .collect();
    let marker: String = time[clock.len()..]
        .chars()
        .filter(char::is_ascii_alphabetic)
        .map(|c| c.to_ascii_uppercase())
        .collect();

    let time_formats: &[&str] = match marker.as_str() {
        "" => &["%H:%M:%S", "%H:%M"],
        "AM" | "PM" => &["%I:%M:%S %p", "%I:%M %p"],
        _ => return Err(ChatstatError::timestamp(format!("{date}, {time}"))),
    };

    let input = if marker.is_empty() {
        format!("{date} {clock}")
    } else {
        format!("{date} {clock} {marker}")
    };

    for date_format in order.date_formats() {
        for time_format in time_formats {
            let layout = format!("{date_format} {time_format}");
            if let Ok(ts) = NaiveDateTime::parse_from_str(&input, &layout) {
                return Ok(ts);
            }
        }
    }

    Err(ChatstatError::timestamp(format!("{date}, {time}")))
}

/// Phrases found in system notifications (member changes, group settings,
/// encryption notices).
const NOTIFICATION_PHRASES: &[&str] = &[
    // English
    "messages and calls are end-to-end encrypted",
    "created group",
    "added",
    "removed",
    "left",
    "changed the subject",
    "changed this group's icon",
    "changed the group description",
    "deleted this group's icon",
    "changed their phone number",
    "changed to",
    "joined using this group's invite link",
    "security code changed",
    "you're now an admin",
    "is now an admin",
    "turned on disappearing messages",
    "turned off disappearing messages",
    "message timer",
    // Russian
    "сообщения и звонки защищены сквозным шифрованием",
    "создал(а) группу",
    "добавил",
    "удалил",
    "вышел",
    "покинул",
    "изменил тему",
    "изменил описание группы",
    "теперь администратор",
];

/// Notification verbs that never occur as a word inside a sender name.
///
/// A candidate sender segment containing one of these is the start of a
/// notification that happens to quote text with `": "` in it. Verbs must be
/// whole words following the actor's name, so `Ana Leftwich` is a name.
static SENDER_GUARD_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\s(?:added|removed|left|changed|created\s+group|joined\s+using|изменил\w*|добавил\w*|удалил\w*)(?:\s|\(|$)",
    )
    .expect("sender guard pattern is valid")
});

/// Check if a null-sender body reads like a known system notification.
///
/// Matching is case-insensitive.
pub fn is_notification_phrase(body: &str) -> bool {
    let body = body.to_lowercase();
    NOTIFICATION_PHRASES
        .iter()
        .any(|phrase| body.contains(phrase))
}

/// Check if a candidate sender segment is really the start of a notification.
pub(crate) fn contains_guard_phrase(segment: &str) -> bool {
    SENDER_GUARD_RE.is_match(segment)
}
