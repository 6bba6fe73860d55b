//! Edge case tests for chatstat.
//!
//! Malformed exports, unusual headers, odd sender names and empty
//! selections.

use chatstat::config::ParserConfig;
use chatstat::core::{ChatFrame, FilterConfig, SenderFilter, apply_filters};
use chatstat::parsers::WhatsAppParser;
use chatstat::stats::{Analyzer, UrlExtractor, count_words, extract_emojis};

fn parse(text: &str) -> ChatFrame {
    WhatsAppParser::new().parse_str(text).unwrap()
}

// ============================================================================
// Empty and headerless input
// ============================================================================

#[test]
fn test_empty_input() {
    let frame = parse("");
    assert!(frame.is_empty());
    assert_eq!(frame.summary().matched, 0);
    assert!(frame.summary().layout.is_none());
}

#[test]
fn test_no_headers() {
    let frame = parse("just some text\nwith no timestamps\n");
    assert!(frame.is_empty());
}

#[test]
fn test_empty_view_report_is_all_zero() {
    let frame = parse("");
    let report = Analyzer::new().report(&frame.view(), &SenderFilter::Overall);

    assert_eq!(report.basic.messages, 0);
    assert_eq!(report.basic.words, 0);
    assert!(report.busiest_senders.unwrap().is_empty());
    assert!(report.monthly_timeline.is_empty());
    assert!(report.daily_timeline.is_empty());
    assert!(report.weekday_activity.is_empty());
    assert!(report.emoji_frequency.is_empty());
    assert_eq!(report.emoji_emotions.len(), 4);
    assert!(report.emoji_emotions.iter().all(|e| e.count == 0));
    assert_eq!(report.sentiment.len(), 3);
}

#[test]
fn test_empty_word_cloud() {
    let frame = parse("");
    let text = Analyzer::new().word_cloud_text(&frame.view(), &SenderFilter::Overall);
    assert!(text.is_empty());
}

// ============================================================================
// Headers
// ============================================================================

#[test]
fn test_preamble_discarded() {
    let frame = parse("garbage line\nmore garbage\n1/1/23, 10:00 - Alice: hi\n");
    assert_eq!(frame.len(), 1);
    assert_eq!(frame.records()[0].body(), "hi");
}

#[test]
fn test_header_must_start_line() {
    let frame = parse("1/1/23, 10:00 - Alice: said 2/1/23, 11:00 - Bob: no\n");
    assert_eq!(frame.len(), 1);
    assert_eq!(frame.records()[0].body(), "said 2/1/23, 11:00 - Bob: no");
}

#[test]
fn test_header_at_end_of_line_has_empty_body() {
    let frame = parse("1/1/23, 10:00 -\n1/1/23, 10:01 - Bob: hi\n");
    assert_eq!(frame.len(), 2);
    assert!(frame.records()[0].is_notification());
    assert_eq!(frame.records()[0].body(), "");
    assert_eq!(frame.records()[1].sender(), Some("Bob"));
}

#[test]
fn test_header_does_not_reach_next_line() {
    let frame = parse("1/1/23, 10:00 -\nAlice: hello\n");
    assert_eq!(frame.len(), 1);
    assert_eq!(frame.records()[0].sender(), None);
    assert!(frame.view().senders().is_empty());
}

#[test]
fn test_twelve_hour_clock() {
    let frame = parse("1/15/24, 10:30 PM - Alice: late\n1/15/24, 12:05 AM - Bob: early\n");
    assert_eq!(frame.records()[0].hour, 22);
    assert_eq!(frame.records()[1].hour, 0);
}

#[test]
fn test_four_digit_year_and_dots() {
    let frame = parse("15.01.2024, 10:30 - Alice: hi\n");
    assert_eq!(frame.records()[0].year, 2024);
    assert_eq!(frame.records()[0].month_num, 1);
}

#[test]
fn test_crlf_line_endings() {
    let frame = parse("1/1/23, 10:00 - Alice: hello\r\n1/1/23, 10:01 - Bob: hi\r\n");
    assert_eq!(frame.len(), 2);
    assert_eq!(frame.records()[0].body(), "hello");
    assert_eq!(frame.records()[1].sender(), Some("Bob"));
}

#[test]
fn test_bom_prefixed_bytes() {
    let frame = WhatsAppParser::new()
        .parse_bytes("\u{FEFF}1/1/23, 10:00 - Alice: hi\n".as_bytes())
        .unwrap();
    assert_eq!(frame.len(), 1);
    assert_eq!(frame.summary().dropped_bytes, 0);
}

#[test]
fn test_impossible_date_skipped() {
    let frame = parse("31/02/23, 10:00 - Alice: ghost\n1/3/23, 10:00 - Bob: real\n");
    assert_eq!(frame.len(), 1);
    assert_eq!(frame.summary().matched, 2);
    assert_eq!(frame.summary().skipped, 1);
    assert_eq!(frame.records()[0].sender(), Some("Bob"));
}

#[test]
fn test_impossible_date_strict() {
    let parser = WhatsAppParser::with_config(ParserConfig::new().with_skip_invalid(false));
    let err = parser
        .parse_str("31/02/23, 10:00 - Alice: ghost\n")
        .unwrap_err();
    assert!(err.is_parse());
}

#[test]
fn test_split_spans_cover_text() {
    let text = "intro\n1/1/23, 10:00 - Alice: a\nb\n1/1/23, 10:01 - Bob: c\n";
    let entries = WhatsAppParser::new().split(text);

    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].span.start, "intro\n".len());
    assert_eq!(entries[0].span.end, entries[1].span.start);
    assert_eq!(entries[1].span.end, text.len());
    assert_eq!(entries[0].rest, "Alice: a\nb\n");
}

// ============================================================================
// Senders and notifications
// ============================================================================

#[test]
fn test_sender_with_colon_in_body() {
    let frame = parse("1/1/23, 10:00 - Alice: meet at 10:30: ok?\n");
    assert_eq!(frame.records()[0].sender(), Some("Alice"));
    assert_eq!(frame.records()[0].body(), "meet at 10:30: ok?");
}

#[test]
fn test_phone_number_sender() {
    let frame = parse("1/1/23, 10:00 - +44 7700 900123: hello\n");
    assert_eq!(frame.records()[0].sender(), Some("+44 7700 900123"));
}

#[test]
fn test_unicode_sender() {
    let frame = parse("1/1/23, 10:00 - Иван: Привет мир\n");
    assert_eq!(frame.records()[0].sender(), Some("Иван"));
    assert_eq!(count_words(frame.records()[0].body()), 2);
}

#[test]
fn test_subject_change_with_separator_is_notification() {
    let frame = parse("1/1/23, 10:00 - Alice changed the subject to \"Plan: beach\"\n");
    assert!(frame.records()[0].is_notification());
}

#[test]
fn test_sender_names_containing_notification_verbs() {
    let frame = parse(
        "1/1/23, 10:00 - Ana Leftwich: hello there\n\
         1/1/23, 10:01 - Tom Leftover: yo\n\
         1/1/23, 10:02 - Bob Addedson: hi\n\
         1/1/23, 10:03 - Ana Leftwich: bye\n",
    );
    assert!(frame.records().iter().all(|m| !m.is_notification()));
    assert_eq!(frame.records()[0].body(), "hello there");
    assert_eq!(
        frame.view().senders(),
        vec!["Ana Leftwich", "Bob Addedson", "Tom Leftover"]
    );

    let analyzer = Analyzer::new();
    let busiest = analyzer.busiest_senders(&frame.view(), &SenderFilter::Overall);
    assert_eq!(busiest.len(), 3);
    assert_eq!(busiest[0].name, "Ana Leftwich");
    assert_eq!(busiest[0].messages, 2);

    let ana = analyzer.basic_stats(&frame.view(), &SenderFilter::from("Ana Leftwich"));
    assert_eq!(ana.messages, 2);
}

#[test]
fn test_notification_excluded_from_senders() {
    let frame = parse("1/1/23, 10:00 - Alice added Bob\n1/1/23, 10:01 - Bob: thanks\n");
    assert_eq!(frame.view().senders(), vec!["Bob"]);

    let busiest = Analyzer::new().busiest_senders(&frame.view(), &SenderFilter::Overall);
    assert_eq!(busiest.len(), 1);
    assert!((busiest[0].percent - 100.0).abs() < 1e-9);
}

#[test]
fn test_overall_keyword_is_case_insensitive() {
    let filter: SenderFilter = "OVERALL".parse().unwrap();
    assert!(filter.is_overall());
}

// ============================================================================
// Media, links, emoji
// ============================================================================

#[test]
fn test_media_is_exact_match() {
    let frame = parse(
        "1/1/23, 10:00 - Alice: <Media omitted>\n1/1/23, 10:01 - Bob: <Media omitted> lol\n",
    );
    assert!(frame.records()[0].is_media());
    assert!(!frame.records()[1].is_media());

    let basic = Analyzer::new().basic_stats(&frame.view(), &SenderFilter::Overall);
    assert_eq!(basic.media, 1);
    // "<Media", "omitted>" and "lol"
    assert_eq!(basic.words, 3);
}

#[test]
fn test_links_variants() {
    let urls = UrlExtractor::new();
    assert_eq!(urls.count("go to www.rust-lang.org."), 1);
    assert_eq!(urls.count("http://a.com and https://b.org/x?y=1"), 2);
    assert_eq!(urls.count("write to alice@example.com"), 0);
    assert_eq!(urls.count("write to alice.in@example.com"), 0);
    assert_eq!(urls.count("version 1.2.3 is out"), 0);
    assert_eq!(urls.count("no links here"), 0);
}

#[test]
fn test_emoji_variants() {
    assert_eq!(extract_emojis("❤️"), vec!["❤️"]);
    assert_eq!(extract_emojis("👍🏽👍"), vec!["👍🏽", "👍"]);
    assert!(extract_emojis("#1 *bold* 123").is_empty());
}

#[test]
fn test_adjacent_emoji_counted_separately() {
    let frame = parse("1/1/23, 10:00 - Alice: 😀🙂\n");
    let emoji = Analyzer::new().emoji_frequency(&frame.view(), &SenderFilter::Overall);
    assert_eq!(emoji.len(), 2);
}

// ============================================================================
// Filters
// ============================================================================

#[test]
fn test_filter_range_without_messages() {
    let frame = parse("1/1/23, 10:00 - Alice: hi\n");
    let config = FilterConfig::new().with_date_from("2030-01-01").unwrap();
    let view = apply_filters(&frame, &config);
    assert!(view.is_empty());

    let report = Analyzer::new().report(&view, &SenderFilter::Overall);
    assert_eq!(report.basic.messages, 0);
}

#[test]
fn test_inverted_range_is_empty() {
    let frame = parse("1/6/23, 10:00 - Alice: hi\n");
    let config = FilterConfig::new()
        .with_date_from("2023-12-31")
        .unwrap()
        .with_date_to("2023-01-01")
        .unwrap();
    assert!(apply_filters(&frame, &config).is_empty());
}
