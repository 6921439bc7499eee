use crate::{cursor::codec::encode_hex, sort::OrderSpec};
use sha2::{Digest, Sha256};

///
/// ContinuationSignature
///
/// Stable, deterministic hash of continuation-relevant query semantics:
/// entity path, effective ordering, and the caller's filter wire bytes.
/// Excludes windowing state (count, boundary) so that every page of one
/// logical listing shares a signature.
///

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct ContinuationSignature([u8; 32]);

impl ContinuationSignature {
    pub(crate) const fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    pub(crate) const fn into_bytes(self) -> [u8; 32] {
        self.0
    }

    /// Compute the signature for one query shape.
    ///
    /// Field names are delimited before their direction tag so that
    /// adjacent keys cannot collide by concatenation.
    #[must_use]
    pub(crate) fn compute(
        entity_path: &str,
        order: &OrderSpec,
        filter_wire: Option<&[u8]>,
    ) -> Self {
        let mut hasher = Sha256::new();

        hasher.update(entity_path.as_bytes());
        hasher.update([0x00]);

        for (field, direction) in &order.fields {
            hasher.update(field.as_bytes());
            hasher.update([0x1f, direction.signature_tag()]);
        }

        if let Some(bytes) = filter_wire {
            hasher.update([0x01]);
            hasher.update(bytes);
        }

        Self(hasher.finalize().into())
    }

    #[must_use]
    pub fn as_hex(&self) -> String {
        encode_hex(&self.0)
    }
}

impl std::fmt::Display for ContinuationSignature {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.as_hex())
    }
}

///
/// TESTS
///
