//! Lossy UTF-8 decoding for uploaded exports.
//!
//! Invalid byte sequences are dropped rather than replaced with U+FFFD, so a
//! damaged export decodes to the text it would have contained without the
//! garbage bytes.

/// Text decoded from a raw byte buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decoded {
    /// The valid UTF-8 content, in source order.
    pub text: String,
    /// Number of bytes dropped because they were not valid UTF-8.
    pub dropped_bytes: usize,
}

/// Decodes `bytes` as UTF-8, dropping invalid sequences.
///
/// A leading byte-order mark is removed as well; it is not counted as dropped.
///
/// # Example
///
/// ```
/// use chatstat::parsing::decode_lossy;
///
/// let decoded = decode_lossy(b"Hi \xff\xfethere");
/// assert_eq!(decoded.text, "Hi there");
/// assert_eq!(decoded.dropped_bytes, 2);
/// ```
pub fn decode_lossy(bytes: &[u8]) -> Decoded {
    let bytes = bytes.strip_prefix(b"\xEF\xBB\xBF").unwrap_or(bytes);

    let mut text = String::with_capacity(bytes.len());
    let mut dropped_bytes = 0;

    for chunk in bytes.utf8_chunks() {
        text.push_str(chunk.valid());
        dropped_bytes += chunk.invalid().len();
    }

    if dropped_bytes > 0 {
        tracing::warn!(dropped_bytes, "dropped invalid UTF-8 bytes from input");
    }

    Decoded {
        text,
        dropped_bytes,
    }
}
