//! Plain-text report writer.

use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use crate::core::models::Report;
use crate::error::Result;

/// Rows shown per ranked table; the JSON outputs carry everything.
const PREVIEW_ROWS: usize = 10;

/// Writes a report as a human-readable summary.
pub fn write_text(report: &Report, output_path: impl AsRef<Path>) -> Result<()> {
    fs::write(output_path, to_text(report))?;
    Ok(())
}

/// Renders a report as a human-readable summary.
///
/// # Format
/// ```text
/// Chat statistics: overall
/// Period: 2023-01-01 .. 2023-03-31
///
/// Messages  120
/// Words     845
/// ...
/// ```
pub fn to_text(report: &Report) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "Chat statistics: {}", report.selection);
    if let Some((first, last)) = report.date_range {
        let _ = writeln!(out, "Period: {first} .. {last}");
    }
    if report.parse.skipped > 0 || report.parse.dropped_bytes > 0 {
        let _ = writeln!(
            out,
            "Skipped records: {}, dropped bytes: {}",
            report.parse.skipped, report.parse.dropped_bytes
        );
    }

    let basic = &report.basic;
    out.push('\n');
    let _ = writeln!(out, "Messages  {}", basic.messages);
    let _ = writeln!(out, "Words     {}", basic.words);
    let _ = writeln!(out, "Media     {}", basic.media);
    let _ = writeln!(out, "Links     {}", basic.links);

    if let Some(senders) = &report.busiest_senders {
        section(&mut out, "Busiest senders");
        for row in senders.iter().take(PREVIEW_ROWS) {
            let _ = writeln!(out, "  {:<24} {:>6}  {:>6.2}%", row.name, row.messages, row.percent);
        }
    }

    section(&mut out, "Monthly timeline");
    for row in &report.monthly_timeline {
        let _ = writeln!(out, "  {:<24} {:>6}", row.time, row.messages);
    }

    section(&mut out, "Weekday activity");
    for row in &report.weekday_activity {
        let _ = writeln!(out, "  {:<24} {:>6}", row.day_name, row.messages);
    }

    section(&mut out, "Most common words");
    for row in report.word_frequency.iter().take(PREVIEW_ROWS) {
        let _ = writeln!(out, "  {:<24} {:>6}", row.word, row.count);
    }

    section(&mut out, "Emoji");
    for row in report.emoji_frequency.iter().take(PREVIEW_ROWS) {
        let _ = writeln!(out, "  {:<24} {:>6}", row.emoji, row.count);
    }

    section(&mut out, "Emoji emotions");
    for row in &report.emoji_emotions {
        let _ = writeln!(out, "  {:<24} {:>6}", row.emotion, row.count);
    }

    section(&mut out, "Sentiment");
    for row in &report.sentiment {
        let _ = writeln!(out, "  {:<24} {:>6}", row.sentiment.as_str(), row.messages);
    }

    out
}

fn section(out: &mut String, title: &str) {
    let _ = write!(out, "\n{title}\n");
}
