use crate::error::PingError;
use crate::message::Message;

pub const PONG_PREFIX: &str = "PONG: ";

/// Answers a bridge ping with `"PONG: "` followed by the message text.
///
/// Byte payloads are decoded as UTF-8 first; invalid input is returned as
/// [`PingError::InvalidUtf8`] and nothing is echoed.
pub fn ping(msg: impl Into<Message>) -> Result<String, PingError> {
    let msg = msg.into();
    log::trace!(
        "ping: {} payload, {} bytes",
        if msg.is_bytes() { "bytes" } else { "text" },
        msg.len()
    );
    let text = msg.into_text().map_err(|err| {
        log::debug!("ping: rejecting payload: {}", err);
        err
    })?;
    Ok(ping_text(&text))
}

/// Infallible form of [`ping`] for callers that already hold text.
pub fn ping_text(msg: &str) -> String {
    let mut out = String::with_capacity(PONG_PREFIX.len() + msg.len());
    out.push_str(PONG_PREFIX);
    out.push_str(msg);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_and_bytes_reply_the_same() {
        assert_eq!(ping("hello").expect("text"), "PONG: hello");
        assert_eq!(ping(b"hello").expect("bytes"), "PONG: hello");
    }

    #[test]
    fn empty_payloads() {
        assert_eq!(ping("").expect("text"), PONG_PREFIX);
        assert_eq!(ping(Vec::<u8>::new()).expect("bytes"), PONG_PREFIX);
        assert_eq!(ping_text(""), PONG_PREFIX);
    }

    #[test]
    fn invalid_bytes_are_rejected() {
        assert!(matches!(
            ping(vec![0xff, 0xfe]),
            Err(PingError::InvalidUtf8 { valid_up_to: 0, .. })
        ));
    }
}
