use crate::serialize::{MAX_PROTOCOL_PAYLOAD_BYTES, SerializeError};
use serde::{Serialize, de::DeserializeOwned};
use serde_cbor::{from_slice, to_vec};
use std::panic::{AssertUnwindSafe, catch_unwind};

/// Serialize a value into CBOR bytes.
pub(super) fn serialize<T>(t: &T) -> Result<Vec<u8>, SerializeError>
where
    T: Serialize,
{
    to_vec(t).map_err(|e| SerializeError::Serialize(e.to_string()))
}

/// Deserialize CBOR bytes into a value.
///
/// Safety guarantees:
/// - Input size is bounded before decode.
/// - Any panic during decode is caught and reported as a deserialize error.
/// - No panic escapes this function.
pub(super) fn deserialize<T>(bytes: &[u8]) -> Result<T, SerializeError>
where
    T: DeserializeOwned,
{
    if bytes.len() > MAX_PROTOCOL_PAYLOAD_BYTES {
        return Err(SerializeError::Deserialize(
            "payload exceeds maximum allowed size".into(),
        ));
    }

    let result = catch_unwind(AssertUnwindSafe(|| from_slice(bytes)));

    match result {
        Ok(Ok(value)) => Ok(value),
        Ok(Err(err)) => Err(SerializeError::Deserialize(err.to_string())),
        Err(_) => Err(SerializeError::Deserialize(
            "panic during CBOR deserialization".into(),
        )),
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::{deserialize, serialize};
    use crate::serialize::MAX_PROTOCOL_PAYLOAD_BYTES;

    #[test]
    fn round_trip_preserves_structure() {
        let input = (1u64, "portland".to_string());
        let bytes = serialize(&input).expect("tuple should serialize");
        let output: (u64, String) = deserialize(&bytes).expect("bytes should deserialize");

        assert_eq!(input, output);
    }

    #[test]
    fn oversized_payload_is_rejected_before_decode() {
        let bytes = vec![0u8; MAX_PROTOCOL_PAYLOAD_BYTES + 1];
        let err = deserialize::<Vec<u8>>(&bytes).expect_err("oversized payload should fail");

        assert!(err.to_string().contains("maximum allowed size"));
    }

    #[test]
    fn truncated_payload_reports_deserialize_error() {
        let bytes = serialize(&vec![1u64, 2, 3]).expect("vec should serialize");
        let err = deserialize::<Vec<u64>>(&bytes[..bytes.len() - 1])
            .expect_err("truncated payload should fail");

        assert!(err.to_string().starts_with("deserialize error"));
    }
}
