use crate::error::PingError;

/// Payload handed over by the bridge host.
///
/// Hosts that marshal binaries as byte strings produce [`Message::Bytes`];
/// hosts that marshal native strings produce [`Message::Text`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    Bytes(Vec<u8>),
    Text(String),
}

impl Message {
    /// Normalizes the payload to text. Bytes must be valid UTF-8.
    pub fn into_text(self) -> Result<String, PingError> {
        match self {
            Message::Text(text) => Ok(text),
            Message::Bytes(bytes) => Ok(String::from_utf8(bytes)?),
        }
    }

    pub fn is_bytes(&self) -> bool {
        matches!(self, Message::Bytes(_))
    }

    /// Payload length in bytes.
    pub fn len(&self) -> usize {
        match self {
            Message::Bytes(bytes) => bytes.len(),
            Message::Text(text) => text.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl From<Vec<u8>> for Message {
    fn from(bytes: Vec<u8>) -> Self {
        Message::Bytes(bytes)
    }
}

impl From<&[u8]> for Message {
    fn from(bytes: &[u8]) -> Self {
        Message::Bytes(bytes.to_vec())
    }
}

impl<const N: usize> From<&[u8; N]> for Message {
    fn from(bytes: &[u8; N]) -> Self {
        Message::Bytes(bytes.to_vec())
    }
}

impl From<String> for Message {
    fn from(text: String) -> Self {
        Message::Text(text)
    }
}

impl From<&str> for Message {
    fn from(text: &str) -> Self {
        Message::Text(text.to_owned())
    }
}
