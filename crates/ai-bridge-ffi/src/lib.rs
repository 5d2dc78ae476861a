use ai_bridge::Message;

/// Payload as marshalled by a UniFFI host: byte strings map to `Bytes`,
/// native strings to `Text`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BridgeMessage {
    Bytes { value: Vec<u8> },
    Text { value: String },
}

impl From<BridgeMessage> for Message {
    fn from(msg: BridgeMessage) -> Self {
        match msg {
            BridgeMessage::Bytes { value } => Message::Bytes(value),
            BridgeMessage::Text { value } => Message::Text(value),
        }
    }
}

#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
pub enum PingError {
    #[error("{reason}")]
    InvalidUtf8 { valid_up_to: u64, reason: String },
}

impl From<ai_bridge::PingError> for PingError {
    fn from(err: ai_bridge::PingError) -> Self {
        let reason = err.to_string();
        match err {
            ai_bridge::PingError::InvalidUtf8 { valid_up_to, .. } => PingError::InvalidUtf8 {
                valid_up_to: valid_up_to as u64,
                reason,
            },
        }
    }
}

pub fn version() -> String {
    ai_bridge::version().to_owned()
}

pub fn ping(message: BridgeMessage) -> Result<String, PingError> {
    ai_bridge::ping(message).map_err(|e| {
        log::debug!("ffi ping failed: {}", e);
        PingError::from(e)
    })
}

pub fn ping_bytes(message: Vec<u8>) -> Result<String, PingError> {
    ping(BridgeMessage::Bytes { value: message })
}

pub fn ping_text(message: String) -> String {
    ai_bridge::ping_text(&message)
}

uniffi::include_scaffolding!("ai_bridge");
