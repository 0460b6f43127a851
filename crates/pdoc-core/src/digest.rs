//! # Content Digest
//!
//! SHA-256 fingerprint of serialized document content. Synthesis is pure,
//! so two documents built from identical inputs have identical section
//! digests; the digest is the cheap way to check that.
//!
//! Serialization goes through `serde_json::to_vec`, which is deterministic
//! for the structs in this crate (fixed field order, `BTreeMap`/`BTreeSet`
//! collections only).

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::error::PdocError;

/// A SHA-256 content digest, rendered as `sha256:<hex>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct ContentDigest([u8; 32]);

impl ContentDigest {
    /// The raw 32 digest bytes.
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Lowercase hex rendering without the algorithm prefix.
    pub fn to_hex(&self) -> String {
        self.0.iter().map(|b| format!("{b:02x}")).collect()
    }
}

impl std::fmt::Display for ContentDigest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "sha256:{}", self.to_hex())
    }
}

impl From<ContentDigest> for String {
    fn from(digest: ContentDigest) -> Self {
        digest.to_string()
    }
}

impl TryFrom<String> for ContentDigest {
    type Error = PdocError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        let hex = value
            .strip_prefix("sha256:")
            .ok_or_else(|| PdocError::InvalidDigest(value.clone()))?;
        if hex.len() != 64 || !hex.is_ascii() {
            return Err(PdocError::InvalidDigest(value));
        }
        let mut bytes = [0u8; 32];
        for (i, byte) in bytes.iter_mut().enumerate() {
            *byte = u8::from_str_radix(&hex[i * 2..i * 2 + 2], 16)
                .map_err(|_| PdocError::InvalidDigest(value.clone()))?;
        }
        Ok(Self(bytes))
    }
}

/// Compute the SHA-256 digest of a value's JSON serialization.
///
/// # Errors
///
/// Returns [`PdocError::Json`] if the value cannot be serialized.
pub fn sha256_digest(value: &impl Serialize) -> Result<ContentDigest, PdocError> {
    let bytes = serde_json::to_vec(value)?;
    let hash = Sha256::digest(&bytes);
    let mut out = [0u8; 32];
    out.copy_from_slice(&hash);
    Ok(ContentDigest(out))
}
