//! Splits the text after a record header into sender and body.

use super::whatsapp::contains_guard_phrase;

/// Longest sender name, in characters, accepted before `": "`.
pub const MAX_SENDER_CHARS: usize = 64;

/// A record's text split into sender and body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classified<'a> {
    /// `None` for system notifications.
    pub sender: Option<&'a str>,
    /// The message text, possibly spanning several lines.
    pub body: &'a str,
}

impl Classified<'_> {
    /// Returns `true` if no sender could be resolved.
    pub fn is_notification(&self) -> bool {
        self.sender.is_none()
    }
}

/// Classifies the text that follows a record header.
///
/// Only the first line is searched for the `": "` separator, and only a
/// segment that looks like a name (non-empty, at most [`MAX_SENDER_CHARS`]
/// characters, no notification phrase) is accepted as the sender. A first
/// line of the form `"Alice:"` is a sender whose first line is empty.
/// Everything else is a notification with the whole text as body.
///
/// Trailing line terminators are removed from the body.
///
/// # Example
///
/// ```
/// use chatstat::parsing::classify;
///
/// let msg = classify("Alice: note: bring snacks\n");
/// assert_eq!(msg.sender, Some("Alice"));
/// assert_eq!(msg.body, "note: bring snacks");
///
/// let note = classify("Alice added Bob\n");
/// assert_eq!(note.sender, None);
/// assert_eq!(note.body, "Alice added Bob");
/// ```
pub fn classify(rest: &str) -> Classified<'_> {
    let rest = rest.trim_end_matches(['\r', '\n']);
    let first_line = rest
        .split('\n')
        .next()
        .unwrap_or_default()
        .trim_end_matches('\r');

    let split = match first_line.find(": ") {
        Some(pos) => Some((&rest[..pos], &rest[pos + 2..])),
        None => first_line
            .strip_suffix(':')
            .map(|name| (name, rest[first_line.len()..].trim_start_matches(['\r', '\n']))),
    };

    match split {
        Some((sender, body)) if is_sender_segment(sender) => Classified {
            sender: Some(sender.trim()),
            body,
        },
        _ => Classified {
            sender: None,
            body: rest,
        },
    }
}

fn is_sender_segment(segment: &str) -> bool {
    let trimmed = segment.trim();
    !trimmed.is_empty()
        && trimmed.chars().count() <= MAX_SENDER_CHARS
        && !contains_guard_phrase(segment)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_message() {
        let msg = classify("Alice: hello 😀\n");
        assert_eq!(msg.sender, Some("Alice"));
        assert_eq!(msg.body, "hello 😀");
        assert!(!msg.is_notification());
    }

    #[test]
    fn test_only_first_separator_counts() {
        let msg = classify("Bob: time: 10:00: sharp\n");
        assert_eq!(msg.sender, Some("Bob"));
        assert_eq!(msg.body, "time: 10:00: sharp");
    }

    #[test]
    fn test_notification_without_separator() {
        let msg = classify("Alice created group \"Trip\"\n");
        assert_eq!(msg.sender, None);
        assert_eq!(msg.body, "Alice created group \"Trip\"");
        assert!(msg.is_notification());
    }

    #[test]
    fn test_notification_quoting_separator() {
        let msg = classify("Alice changed the subject from \"a\" to \"Plan: beach\"\n");
        assert_eq!(msg.sender, None);
        assert!(msg.body.starts_with("Alice changed the subject"));
    }

    #[test]
    fn test_separator_on_later_line_ignored() {
        let msg = classify("Bob left\nnote: nothing\n");
        assert_eq!(msg.sender, None);
        assert_eq!(msg.body, "Bob left\nnote: nothing");
    }

    #[test]
    fn test_multiline_body() {
        let msg = classify("Alice: line one\nline two\r\n");
        assert_eq!(msg.sender, Some("Alice"));
        assert_eq!(msg.body, "line one\nline two");
    }

    #[test]
    fn test_empty_body() {
        let msg = classify("Alice: \n");
        assert_eq!(msg.sender, Some("Alice"));
        assert_eq!(msg.body, "");

        let msg = classify("Alice:\n");
        assert_eq!(msg.sender, Some("Alice"));
        assert_eq!(msg.body, "");

        let msg = classify("");
        assert_eq!(msg.sender, None);
        assert_eq!(msg.body, "");
    }

    #[test]
    fn test_colon_line_with_continuation() {
        let msg = classify("Alice:\nsecond line\n");
        assert_eq!(msg.sender, Some("Alice"));
        assert_eq!(msg.body, "second line");
    }

    #[test]
    fn test_overlong_sender_rejected() {
        let long = "x".repeat(MAX_SENDER_CHARS + 1);
        let text = format!("{long}: hi");
        let msg = classify(&text);
        assert_eq!(msg.sender, None);
        assert_eq!(msg.body, text);
    }

    #[test]
    fn test_phone_number_sender() {
        let msg = classify("+1 555 0100: call me\n");
        assert_eq!(msg.sender, Some("+1 555 0100"));
        assert_eq!(msg.body, "call me");
    }

    #[test]
    fn test_sender_name_starting_with_verb_fragment() {
        let msg = classify("Ana Leftwich: hello there\n");
        assert_eq!(msg.sender, Some("Ana Leftwich"));
        assert_eq!(msg.body, "hello there");

        let msg = classify("Tom Leftover: yo\n");
        assert_eq!(msg.sender, Some("Tom Leftover"));
    }

    #[test]
    fn test_empty_first_line_has_no_sender() {
        let msg = classify("\nAlice: hello\n");
        assert_eq!(msg.sender, None);
        assert_eq!(msg.body, "\nAlice: hello");
    }

    #[test]
    fn test_media_sentinel_body() {
        let msg = classify("Bob: <Media omitted>\n");
        assert_eq!(msg.body, "<Media omitted>");
    }
}
