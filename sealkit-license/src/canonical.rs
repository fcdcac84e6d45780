//! Canonical payload encoding.
//!
//! Signing and verification must agree on the exact bytes that were signed,
//! on every platform, regardless of how the record happens to be formatted
//! on disk. The canonical form is compact JSON with fields in lexicographic
//! order (`expiry`, `hwid`, `user`), UTF-8, expiry rendered as
//! `YYYY-MM-DDTHH:MM:SSZ`. Verifiers re-derive it from parsed field values,
//! never from raw record text.

use crate::payload::LicensePayload;

/// Encodes a payload into its canonical byte sequence.
///
/// Output is a deterministic function of the field values only: two payloads
/// with equal fields always encode to byte-identical sequences.
#[must_use]
pub fn canonical_bytes(payload: &LicensePayload) -> Vec<u8> {
    // LicensePayload declares its fields in lexicographic order and uses a
    // fixed whole-second timestamp format; compact serde_json output over it
    // is therefore canonical. Serializing a payload cannot fail: it is
    // strings and a timestamp, no map keys, no non-finite floats.
    serde_json::to_vec(payload).expect("payload serialization is infallible")
}
