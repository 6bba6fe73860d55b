//! CSV preview of the selected messages.

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use crate::MessageRecord;
use crate::core::frame::FrameView;
use crate::error::Result;

const HEADER: [&str; 3] = ["Date", "Sender", "Message"];

/// Writes the records of a view to CSV with semicolon delimiter.
///
/// # Format
/// - Delimiter: `;`
/// - Columns: `Date` (`YYYY-MM-DD HH:MM`), `Sender` (empty for
///   notifications), `Message`
/// - Encoding: UTF-8
pub fn write_csv(view: &FrameView<'_>, output_path: impl AsRef<Path>) -> Result<()> {
    let file = File::create(output_path)?;
    write_records(view, file)
}

/// Converts the records of a view to a CSV string.
///
/// Same format as `write_csv`, but returns a String instead of writing to file.
pub fn to_csv(view: &FrameView<'_>) -> Result<String> {
    let mut buffer = Vec::new();
    write_records(view, &mut buffer)?;
    String::from_utf8(buffer).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e).into())
}

fn write_records(view: &FrameView<'_>, sink: impl Write) -> Result<()> {
    let mut writer = csv::WriterBuilder::new().delimiter(b';').from_writer(sink);

    writer.write_record(HEADER)?;
    for msg in view {
        writer.write_record(build_record(msg))?;
    }

    writer.flush()?;
    Ok(())
}

fn build_record(msg: &MessageRecord) -> [String; 3] {
    [
        msg.timestamp.format("%Y-%m-%d %H:%M").to_string(),
        msg.sender().unwrap_or_default().to_string(),
        msg.body().to_string(),
    ]
}
