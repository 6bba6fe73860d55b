//! JSON output writer.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::core::models::Report;
use crate::error::Result;

/// Writes a report to a file as one pretty-printed JSON object.
///
/// # Format
/// ```json
/// {
///   "selection": "overall",
///   "basic": {"messages": 2, "words": 1, "media": 1, "links": 0},
///   "monthly_timeline": [{"year": 2023, "month_num": 1, ...}],
///   ...
/// }
/// ```
pub fn write_json(report: &Report, output_path: impl AsRef<Path>) -> Result<()> {
    let json = to_json(report)?;
    let mut file = File::create(output_path)?;
    file.write_all(json.as_bytes())?;
    file.write_all(b"\n")?;
    Ok(())
}

/// Converts a report to a pretty-printed JSON string.
///
/// Same format as `write_json`, but returns a String instead of writing to file.
pub fn to_json(report: &Report) -> Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}
