//! JSON Lines (JSONL) output writer.
//!
//! Each table of a report becomes one line, `{"table": <name>, "rows": ...}`,
//! so tables can be loaded one at a time by line-oriented tools.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use serde::Serialize;
use serde_json::Value;

use crate::core::models::Report;
use crate::error::Result;

#[derive(Serialize)]
struct JsonlTable<'a> {
    table: &'a str,
    rows: Value,
}

/// Writes a report to a JSONL file, one table per line.
///
/// # Format
/// ```text
/// {"table":"selection","rows":"overall"}
/// {"table":"basic","rows":{"messages":2,"words":1,"media":1,"links":0}}
/// {"table":"monthly_timeline","rows":[...]}
/// ```
pub fn write_jsonl(report: &Report, output_path: impl AsRef<Path>) -> Result<()> {
    let file = File::create(output_path)?;
    let mut writer = BufWriter::new(file);
    writer.write_all(to_jsonl(report)?.as_bytes())?;
    writer.flush()?;
    Ok(())
}

/// Converts a report to a JSONL string, one table per line.
///
/// Absent tables (the sender ranking of a single-sender report) are skipped.
pub fn to_jsonl(report: &Report) -> Result<String> {
    let Value::Object(tables) = serde_json::to_value(report)? else {
        return Ok(String::new());
    };

    let mut output = String::new();
    for (table, rows) in tables {
        let line = serde_json::to_string(&JsonlTable {
            table: &table,
            rows,
        })?;
        output.push_str(&line);
        output.push('\n');
    }
    Ok(output)
}
