//! The signed license claim.

use crate::error::{LicenseError, LicenseResult};
use chrono::{DateTime, Duration, SecondsFormat, SubsecRound, Utc};
use serde::{Deserialize, Serialize};

/// The claim a license record signs: a hardware identifier, a user identity,
/// and an absolute UTC expiry instant.
///
/// The expiry is always absolute, never a relative duration, so verification
/// on a different machine or timezone yields identical results. Issued-at is
/// not stored; only the resulting expiry matters.
///
/// Fields are declared in lexicographic order (`expiry`, `hwid`, `user`) —
/// canonical encoding relies on this declaration order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LicensePayload {
    /// Instant after which the license is invalid, whole-second precision.
    #[serde(with = "rfc3339_secs")]
    expiry: DateTime<Utc>,
    /// Opaque hardware fingerprint the license is bound to.
    hwid: String,
    /// Identity label of the licensee.
    user: String,
}

impl LicensePayload {
    /// Builds a payload expiring `days_valid` days after `now`.
    ///
    /// The expiry is truncated to whole seconds so the payload round-trips
    /// losslessly through its ISO-8601 text form.
    ///
    /// # Errors
    ///
    /// Returns [`LicenseError::Validation`] if `hwid` or `user` is empty, or
    /// `days_valid` is not positive or puts the expiry out of representable
    /// range.
    pub fn new(hwid: &str, user: &str, days_valid: i64, now: DateTime<Utc>) -> LicenseResult<Self> {
        if hwid.is_empty() {
            return Err(LicenseError::Validation("hwid must not be empty".into()));
        }
        if user.is_empty() {
            return Err(LicenseError::Validation("user must not be empty".into()));
        }
        if days_valid <= 0 {
            return Err(LicenseError::Validation(format!(
                "days_valid must be positive, got {days_valid}"
            )));
        }

        let validity = Duration::try_days(days_valid).ok_or_else(|| {
            LicenseError::Validation(format!("days_valid {days_valid} is out of range"))
        })?;
        let expiry = now
            .checked_add_signed(validity)
            .ok_or_else(|| {
                LicenseError::Validation(format!(
                    "expiry {days_valid} days after {now} is not representable"
                ))
            })?
            .trunc_subsecs(0);

        Ok(Self {
            expiry,
            hwid: hwid.to_string(),
            user: user.to_string(),
        })
    }

    /// Returns the hardware identifier this license is bound to.
    #[must_use]
    pub fn hwid(&self) -> &str {
        &self.hwid
    }

    /// Returns the licensee identity label.
    #[must_use]
    pub fn user(&self) -> &str {
        &self.user
    }

    /// Returns the expiry instant.
    #[must_use]
    pub fn expiry(&self) -> DateTime<Utc> {
        self.expiry
    }

    /// Returns true if the license is past its expiry at `now`.
    #[must_use]
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now > self.expiry
    }
}

/// Serde adapter rendering timestamps as `YYYY-MM-DDTHH:MM:SSZ`.
///
/// Whole-second precision with an explicit `Z` suffix keeps the canonical
/// encoding byte-stable across serialize/deserialize cycles. Fractional
/// seconds are rejected on input, not truncated: truncating would let an
/// edited expiry re-derive the signed bytes while `is_expired_at` honors the
/// sub-second extension. Issuance never produces fractional seconds, so a
/// record carrying them was not produced by the authority.
pub(crate) mod rfc3339_secs {
    use super::{DateTime, SecondsFormat, Utc};
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(dt: &DateTime<Utc>, ser: S) -> Result<S::Ok, S::Error> {
        ser.serialize_str(&dt.to_rfc3339_opts(SecondsFormat::Secs, true))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(de: D) -> Result<DateTime<Utc>, D::Error> {
        let s = String::deserialize(de)?;
        let dt = DateTime::parse_from_rfc3339(&s).map_err(de::Error::custom)?;
        if dt.timestamp_subsec_nanos() != 0 {
            return Err(de::Error::custom(
                "expiry must have whole-second precision",
            ));
        }
        Ok(dt.with_timezone(&Utc))
    }
}
