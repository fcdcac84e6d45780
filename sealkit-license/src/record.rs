//! The distributable license artifact.

use crate::error::LicenseResult;
use crate::payload::LicensePayload;
use serde::{Deserialize, Serialize};

/// A signed license record: the payload plus a detached signature over the
/// payload's canonical encoding.
///
/// The record is created once at issuance and is read-only thereafter.
/// On-disk JSON field order and whitespace are cosmetic; verifiers re-derive
/// the canonical bytes from the parsed payload, never from the raw text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LicenseRecord {
    payload: LicensePayload,
    /// Lowercase-hex Ed25519 signature over the canonical payload bytes.
    signature: String,
}

impl LicenseRecord {
    pub(crate) fn new(payload: LicensePayload, signature_bytes: &[u8]) -> Self {
        Self {
            payload,
            signature: hex::encode(signature_bytes),
        }
    }

    /// Returns the signed payload.
    #[must_use]
    pub fn payload(&self) -> &LicensePayload {
        &self.payload
    }

    /// Returns the hex-encoded detached signature.
    #[must_use]
    pub fn signature_hex(&self) -> &str {
        &self.signature
    }

    /// Decodes the signature field. `None` if the hex is malformed — a
    /// corrupted signature, handled by the verifier as tampering.
    #[must_use]
    pub fn signature_bytes(&self) -> Option<Vec<u8>> {
        hex::decode(&self.signature).ok()
    }

    /// Parses a record from its JSON text form.
    ///
    /// # Errors
    ///
    /// Returns [`LicenseError::Serialization`](crate::LicenseError::Serialization)
    /// if the text is not a structurally valid record.
    pub fn from_json(json: &str) -> LicenseResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Renders the record as pretty-printed JSON for persistence.
    ///
    /// # Errors
    ///
    /// Returns [`LicenseError::Serialization`](crate::LicenseError::Serialization)
    /// on encoder failure.
    pub fn to_json(&self) -> LicenseResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
