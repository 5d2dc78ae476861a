//! Ping responder called by host runtimes over a language bridge.
//!
//! A host hands over either raw bytes or text. Bytes are decoded as strict
//! UTF-8, and the reply is the text behind a fixed `"PONG: "` prefix.

pub mod error;
pub mod message;
pub mod ping;

pub use error::PingError;
pub use message::Message;
pub use ping::{ping, ping_text, PONG_PREFIX};

/// Crate version as reported to bridge hosts.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
