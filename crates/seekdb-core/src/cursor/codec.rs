///
/// Cursor token text codec.
///
/// This module owns the opaque wire-token text format used for continuation
/// cursors. It intentionally contains only token encoding/decoding logic and
/// no query semantics.
///
use crate::serialize::MAX_PROTOCOL_PAYLOAD_BYTES;

// Decode bound for untrusted cursor token input, in hex characters.
pub(crate) const MAX_CURSOR_TOKEN_HEX_LEN: usize = MAX_PROTOCOL_PAYLOAD_BYTES * 2;

///
/// CursorDecodeError
///

#[derive(Debug, Eq, PartialEq, thiserror::Error)]
pub enum CursorDecodeError {
    #[error("cursor token is empty")]
    Empty,

    #[error("cursor token exceeds max length: {len} hex chars (max {max})")]
    TooLong { len: usize, max: usize },

    #[error("cursor token must have an even number of hex characters")]
    OddLength,

    #[error("invalid hex character at position {position}")]
    InvalidHex { position: usize },
}

/// Encode raw cursor bytes as a lowercase hex token.
#[must_use]
pub fn encode_hex(bytes: &[u8]) -> String {
    bytes.iter().map(|byte| format!("{byte:02x}")).collect()
}

/// Decode a hex cursor token into raw bytes.
///
/// Surrounding whitespace is trimmed and mixed-case hex is accepted; the
/// reported position of an invalid character is 1-based.
pub fn decode_hex(token: &str) -> Result<Vec<u8>, CursorDecodeError> {
    let token = token.trim();

    if token.is_empty() {
        return Err(CursorDecodeError::Empty);
    }

    if token.len() > MAX_CURSOR_TOKEN_HEX_LEN {
        return Err(CursorDecodeError::TooLong {
            len: token.len(),
            max: MAX_CURSOR_TOKEN_HEX_LEN,
        });
    }

    if token.len() % 2 != 0 {
        return Err(CursorDecodeError::OddLength);
    }

    if let Some(position) = token.bytes().position(|byte| !byte.is_ascii_hexdigit()) {
        return Err(CursorDecodeError::InvalidHex {
            position: position + 1,
        });
    }

    // Every character is a validated hex digit, so per-pair parsing is
    // infallible from here on.
    Ok((0..token.len())
        .step_by(2)
        .map(|idx| u8::from_str_radix(&token[idx..idx + 2], 16).unwrap_or_default())
        .collect())
}

///
/// TESTS
///
