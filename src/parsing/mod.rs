//! Shared parsing utilities for chat exports.
//!
//! This module contains the building blocks used by
//! [`WhatsAppParser`](crate::parsers::WhatsAppParser):
//! - [`decode`] - lossy UTF-8 decoding of raw bytes
//! - [`whatsapp`] - line layouts, date order detection, timestamp resolution
//! - [`classify`] - sender / body / notification classification

pub mod classify;
pub mod decode;
pub mod whatsapp;

// Re-export commonly used items
pub use classify::{Classified, MAX_SENDER_CHARS, classify};
pub use decode::{Decoded, decode_lossy};
pub use whatsapp::{
    DateOrder, LineLayout, detect_layout, is_notification_phrase, resolve_timestamp,
};
