//! Chat export parsers.
//!
//! # Available Parsers
//!
//! - [`WhatsAppParser`] - Parses WhatsApp TXT exports into a [`ChatFrame`](crate::core::ChatFrame)
//!
//! # Example
//!
//! ```rust,no_run
//! use chatstat::parsers::WhatsAppParser;
//!
//! let frame = WhatsAppParser::new().parse("WhatsApp Chat.txt")?;
//! println!("{} records", frame.len());
//! # Ok::<(), chatstat::ChatstatError>(())
//! ```

mod whatsapp;

pub use whatsapp::{RawEntry, WhatsAppParser};
