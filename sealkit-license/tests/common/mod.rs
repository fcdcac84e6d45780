//! Shared test helpers for license tests.

#![allow(dead_code)]

use chrono::{DateTime, TimeZone, Utc};
use sealkit_license::{LicenseAuthority, LicenseRecord, SigningKey, VerifyingKey};

/// Returns a deterministic Ed25519 key pair from a fixed seed.
pub fn test_keypair() -> (SigningKey, VerifyingKey) {
    let seed: [u8; 32] = [
        1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16, 17, 18, 19, 20, 21, 22, 23, 24,
        25, 26, 27, 28, 29, 30, 31, 32,
    ];
    let signing_key = SigningKey::from_bytes(&seed);
    let verifying_key = signing_key.verifying_key();
    (signing_key, verifying_key)
}

/// A second, unrelated key pair.
pub fn other_keypair() -> (SigningKey, VerifyingKey) {
    let seed: [u8; 32] = [0xCC; 32];
    let signing_key = SigningKey::from_bytes(&seed);
    let verifying_key = signing_key.verifying_key();
    (signing_key, verifying_key)
}

/// Fixed issuance instant used across tests: 2023-01-01T00:00:00Z.
/// A non-leap year start keeps `+365 days` landing exactly one year later.
pub fn issuance_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2023, 1, 1, 0, 0, 0).unwrap()
}

/// Issues a standard one-year record for alice on HW-ABC-123.
pub fn issue_standard(sk: &SigningKey) -> LicenseRecord {
    LicenseAuthority::default()
        .issue(sk, "HW-ABC-123", "alice", 365, issuance_time())
        .unwrap()
}

/// Re-parses a record with one JSON string field value replaced, simulating
/// post-signing tampering.
pub fn tamper(record: &LicenseRecord, old: &str, new: &str) -> LicenseRecord {
    let json = record.to_json().unwrap();
    assert!(json.contains(old), "tamper target {old:?} not in record");
    LicenseRecord::from_json(&json.replace(old, new)).unwrap()
}
