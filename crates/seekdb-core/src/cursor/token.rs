use crate::{
    cursor::{
        Cursor, CursorError,
        codec::{decode_hex, encode_hex},
        signature::ContinuationSignature,
    },
    serialize::{deserialize, serialize},
    value::Value,
};
use serde::{Deserialize, Serialize};
use thiserror::Error as ThisError;

///
/// CursorTokenVersion
///
/// Wire-level cursor token version owned by the cursor protocol boundary.
/// This keeps version parsing and compatibility behavior centralized.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum CursorTokenVersion {
    V1,
}

impl CursorTokenVersion {
    const V1_TAG: u8 = 1;

    const fn decode(raw: u8) -> Option<Self> {
        match raw {
            Self::V1_TAG => Some(Self::V1),
            _ => None,
        }
    }

    const fn encode(self) -> u8 {
        match self {
            Self::V1 => Self::V1_TAG,
        }
    }
}

///
/// TokenWireError
///

#[derive(Debug, Eq, PartialEq, ThisError)]
pub enum TokenWireError {
    #[error("cursor token encode failed: {0}")]
    Encode(String),

    #[error("cursor token payload decode failed: {0}")]
    Decode(String),

    #[error("unsupported cursor token version: {version}")]
    UnsupportedVersion { version: u8 },
}

///
/// ContinuationTokenWire
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
struct ContinuationTokenWire {
    version: u8,
    signature: [u8; 32],
    fields: Vec<(String, Value)>,
}

///
/// ContinuationToken
/// Opaque cursor payload bound to a continuation signature.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ContinuationToken {
    signature: ContinuationSignature,
    cursor: Cursor,
}

impl ContinuationToken {
    pub(crate) const fn new(signature: ContinuationSignature, cursor: Cursor) -> Self {
        Self { signature, cursor }
    }

    #[must_use]
    pub const fn signature(&self) -> ContinuationSignature {
        self.signature
    }

    /// Borrow the primary-key projection this token resumes from.
    #[must_use]
    pub const fn cursor(&self) -> &Cursor {
        &self.cursor
    }

    /// Consume this token and return the cursor.
    #[must_use]
    pub fn into_cursor(self) -> Cursor {
        self.cursor
    }

    /// Encode this token as an opaque hex text token.
    pub fn encode(&self) -> Result<String, TokenWireError> {
        let wire = ContinuationTokenWire {
            version: CursorTokenVersion::V1.encode(),
            signature: self.signature.into_bytes(),
            fields: self.cursor.fields().to_vec(),
        };

        let bytes = serialize(&wire).map_err(|err| TokenWireError::Encode(err.to_string()))?;

        Ok(encode_hex(&bytes))
    }

    /// Decode an opaque text token back into a continuation token.
    ///
    /// Decoding validates the text format and the wire payload only; shape
    /// and signature checks against a concrete query happen at the planning
    /// boundary, where the expected shape is known.
    pub fn decode(token: &str) -> Result<Self, CursorError> {
        let bytes = decode_hex(token)?;

        let wire: ContinuationTokenWire =
            deserialize(&bytes).map_err(|err| TokenWireError::Decode(err.to_string()))?;

        // Decode the protocol version first so compatibility behavior
        // remains centralized.
        if CursorTokenVersion::decode(wire.version).is_none() {
            return Err(TokenWireError::UnsupportedVersion {
                version: wire.version,
            }
            .into());
        }

        Ok(Self {
            signature: ContinuationSignature::from_bytes(wire.signature),
            cursor: Cursor::new(wire.fields),
        })
    }

    /// Verify this token against the signature of the current query shape.
    pub(crate) fn verify_signature(
        &self,
        entity_path: &'static str,
        expected: ContinuationSignature,
    ) -> Result<(), CursorError> {
        if self.signature == expected {
            Ok(())
        } else {
            Err(CursorError::SignatureMismatch {
                entity_path,
                expected: expected.as_hex(),
                actual: self.signature.as_hex(),
            })
        }
    }

    #[cfg(test)]
    pub(crate) fn encode_with_version_for_test(
        &self,
        version: u8,
    ) -> Result<String, TokenWireError> {
        let wire = ContinuationTokenWire {
            version,
            signature: self.signature.into_bytes(),
            fields: self.cursor.fields().to_vec(),
        };

        let bytes = serialize(&wire).map_err(|err| TokenWireError::Encode(err.to_string()))?;

        Ok(encode_hex(&bytes))
    }
}
