//! Error types for license issuance and verification.

use thiserror::Error;

/// Result type for license operations.
pub type LicenseResult<T> = Result<T, LicenseError>;

/// Errors raised by license operations.
///
/// Verification outcomes (expired, wrong machine, bad signature) are not
/// errors; they are reported through
/// [`VerificationResult`](crate::VerificationResult). An error here means the
/// operation itself could not run: bad input, unusable key material, or a
/// broken collaborator.
#[derive(Debug, Error)]
pub enum LicenseError {
    /// Malformed or missing input fields (empty identity strings,
    /// non-positive validity duration).
    #[error("invalid license input: {0}")]
    Validation(String),

    /// Key material missing, unreadable, or not parseable as an Ed25519 key.
    #[error("failed to load key: {0}")]
    KeyLoad(String),

    /// License record JSON is malformed.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Persistence layer failure.
    #[error("storage error: {0}")]
    Storage(#[from] std::io::Error),
}
