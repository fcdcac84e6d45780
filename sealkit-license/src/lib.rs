//! License issuance and verification for Sealkit.
//!
//! A license binds a hardware identifier, a user identity, and an absolute
//! UTC expiry into a signed, self-contained record. This crate owns the
//! protocol:
//! - Canonical payload encoding, so signer and verifier agree byte-for-byte
//!   on what was signed
//! - Ed25519 issuance and verification via [`LicenseAuthority`]
//! - Validity policy: tamper detection, machine binding, expiry
//!
//! # Design Principles
//!
//! - **Self-contained records**: only the absolute expiry is stored, never
//!   issuance time or a relative duration; verification anywhere yields the
//!   same answer
//! - **Authenticate before trusting**: the signature is checked before any
//!   other payload field is used for a decision
//! - **Invalid is an outcome, not an error**: verification returns a
//!   discriminated [`VerificationResult`]; errors are reserved for unusable
//!   input and broken collaborators
//!
//! # Record Format
//!
//! A JSON object with exactly two fields: the payload (`hwid`, `user`,
//! `expiry` as ISO-8601 UTC) and a hex-encoded detached signature over the
//! payload's canonical encoding.

mod authority;
mod canonical;
mod error;
mod hwid;
mod key;
mod payload;
mod record;
mod store;

pub use authority::{InvalidReason, LicenseAuthority, SignatureScheme, VerificationResult};
pub use canonical::canonical_bytes;
pub use error::{LicenseError, LicenseResult};
pub use hwid::HardwareId;
pub use key::{SigningKey, VerifyingKey};
pub use payload::LicensePayload;
pub use record::LicenseRecord;
pub use store::LicenseStore;
