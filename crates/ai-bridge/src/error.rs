use std::string::FromUtf8Error;

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PingError {
    /// Byte input was not valid UTF-8.
    ///
    /// `error_len` is `None` when the input ends inside a multi-byte sequence.
    #[error("invalid utf-8 in message at byte {valid_up_to}")]
    InvalidUtf8 {
        valid_up_to: usize,
        error_len: Option<usize>,
    },
}

impl From<FromUtf8Error> for PingError {
    fn from(err: FromUtf8Error) -> Self {
        let utf8 = err.utf8_error();
        PingError::InvalidUtf8 {
            valid_up_to: utf8.valid_up_to(),
            error_len: utf8.error_len(),
        }
    }
}
