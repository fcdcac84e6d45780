//! License issuance and verification.
//!
//! The authority is the only component that touches key material. Both
//! operations are single-shot pure computations: `issue` never produces a
//! partial record on failure, and `verify` reports invalid licenses through
//! a discriminated result rather than an error.

use crate::canonical::canonical_bytes;
use crate::error::LicenseResult;
use crate::key::{SigningKey, VerifyingKey};
use crate::payload::LicensePayload;
use crate::record::LicenseRecord;
use chrono::{DateTime, Utc};
use ed25519_dalek::Signature;

/// The signature primitive in use.
///
/// Fixed per key pair and recorded alongside key distribution; represented
/// explicitly so an algorithm migration shows up in the API instead of a
/// buried literal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SignatureScheme {
    /// Ed25519 over the canonical payload bytes.
    #[default]
    Ed25519,
}

/// Issues and verifies signed license records.
#[derive(Debug, Clone, Copy, Default)]
pub struct LicenseAuthority {
    scheme: SignatureScheme,
}

/// Why a license failed verification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidReason {
    /// Signature does not match the canonical payload bytes: the record was
    /// altered after signing, or was never signed by the expected key.
    TamperedOrForged,
    /// The record is authentic but bound to a different machine.
    HwidMismatch,
    /// The record is authentic and bound correctly, but past its expiry.
    Expired,
}

/// Outcome of verifying a license record.
///
/// Invalid licenses are expected, recoverable outcomes, not verifier
/// failures; the reason is carried so the caller can report it accurately.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerificationResult {
    Valid,
    Invalid(InvalidReason),
}

impl VerificationResult {
    /// Returns true for [`VerificationResult::Valid`].
    #[must_use]
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }
}

impl std::fmt::Display for VerificationResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Valid => write!(f, "valid"),
            Self::Invalid(InvalidReason::TamperedOrForged) => {
                write!(f, "invalid: signature mismatch (tampered or forged)")
            }
            Self::Invalid(InvalidReason::HwidMismatch) => {
                write!(f, "invalid: license is bound to a different machine")
            }
            Self::Invalid(InvalidReason::Expired) => write!(f, "invalid: license has expired"),
        }
    }
}

impl LicenseAuthority {
    /// Creates an authority using the given signature scheme.
    #[must_use]
    pub fn new(scheme: SignatureScheme) -> Self {
        Self { scheme }
    }

    /// Returns the authority's signature scheme.
    #[must_use]
    pub fn scheme(&self) -> SignatureScheme {
        self.scheme
    }

    /// Issues a signed license record.
    ///
    /// The payload expires `days_valid` days after `now`; the record stores
    /// only the resulting absolute UTC expiry, so verification does not
    /// depend on clock state at issuance time.
    ///
    /// # Errors
    ///
    /// Returns [`LicenseError::Validation`](crate::LicenseError::Validation)
    /// for empty `hwid`/`user` or non-positive `days_valid`. No record is
    /// produced on error.
    pub fn issue(
        &self,
        key: &SigningKey,
        hwid: &str,
        user: &str,
        days_valid: i64,
        now: DateTime<Utc>,
    ) -> LicenseResult<LicenseRecord> {
        let payload = LicensePayload::new(hwid, user, days_valid, now)?;
        let bytes = canonical_bytes(&payload);
        let signature = match self.scheme {
            SignatureScheme::Ed25519 => key.sign(&bytes),
        };
        tracing::debug!(user, hwid, expiry = %payload.expiry(), "issued license");
        Ok(LicenseRecord::new(payload, &signature.to_bytes()))
    }

    /// Verifies a license record against a public key, the machine it should
    /// be bound to, and the current time.
    ///
    /// The signature is checked first: until it passes, the payload is
    /// attacker-controlled and no other field is trusted. Then the hwid
    /// binding, then expiry.
    #[must_use]
    pub fn verify(
        &self,
        key: &VerifyingKey,
        record: &LicenseRecord,
        expected_hwid: &str,
        now: DateTime<Utc>,
    ) -> VerificationResult {
        let Some(sig_bytes) = record.signature_bytes() else {
            return VerificationResult::Invalid(InvalidReason::TamperedOrForged);
        };
        let Ok(signature) = Signature::from_slice(&sig_bytes) else {
            return VerificationResult::Invalid(InvalidReason::TamperedOrForged);
        };

        let bytes = canonical_bytes(record.payload());
        let authentic = match self.scheme {
            SignatureScheme::Ed25519 => key.verifies(&bytes, &signature),
        };
        if !authentic {
            return VerificationResult::Invalid(InvalidReason::TamperedOrForged);
        }

        if record.payload().hwid() != expected_hwid {
            return VerificationResult::Invalid(InvalidReason::HwidMismatch);
        }

        if record.payload().is_expired_at(now) {
            return VerificationResult::Invalid(InvalidReason::Expired);
        }

        VerificationResult::Valid
    }
}
