//! File-based persistence for license records.
//!
//! One file per user, `license_<user>.json`, in an explicitly configured
//! directory. The store only promises a lossless round-trip of the record's
//! field values; it never inspects or mutates the payload.

use crate::error::{LicenseError, LicenseResult};
use crate::record::LicenseRecord;
use std::path::{Path, PathBuf};

/// Writes and reads license records in a directory.
#[derive(Debug, Clone)]
pub struct LicenseStore {
    dir: PathBuf,
}

impl LicenseStore {
    /// Creates a store rooted at `dir`. The directory is created on first
    /// write, not here.
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Returns the path a record for `user` would be stored at.
    ///
    /// # Errors
    ///
    /// Returns [`LicenseError::Validation`] if `user` is not usable as a
    /// file-name segment.
    pub fn path_for(&self, user: &str) -> LicenseResult<PathBuf> {
        validate_file_segment(user)?;
        Ok(self.dir.join(format!("license_{user}.json")))
    }

    /// Persists a record as `license_<user>.json`, creating the directory if
    /// needed. Returns the written path.
    ///
    /// # Errors
    ///
    /// Returns [`LicenseError::Validation`] for an unusable user name,
    /// [`LicenseError::Storage`] on I/O failure.
    pub fn save(&self, record: &LicenseRecord) -> LicenseResult<PathBuf> {
        let path = self.path_for(record.payload().user())?;
        std::fs::create_dir_all(&self.dir)?;
        std::fs::write(&path, record.to_json()?)?;
        tracing::info!(path = %path.display(), "license written");
        Ok(path)
    }

    /// Loads the record stored for `user`.
    ///
    /// # Errors
    ///
    /// Returns [`LicenseError::Storage`] if the file is missing or
    /// unreadable, [`LicenseError::Serialization`] if its contents are not a
    /// valid record.
    pub fn load(&self, user: &str) -> LicenseResult<LicenseRecord> {
        let path = self.path_for(user)?;
        Self::load_path(&path)
    }

    /// Loads a record from an explicit path.
    pub fn load_path(path: &Path) -> LicenseResult<LicenseRecord> {
        let json = std::fs::read_to_string(path)?;
        LicenseRecord::from_json(&json)
    }
}

fn validate_file_segment(user: &str) -> LicenseResult<()> {
    if user.is_empty() {
        return Err(LicenseError::Validation("user must not be empty".into()));
    }
    if user == "." || user == ".." {
        return Err(LicenseError::Validation(format!(
            "user {user:?} is not usable as a file name"
        )));
    }
    if user.contains(['/', '\\', '\0']) {
        return Err(LicenseError::Validation(format!(
            "user {user:?} contains path separators"
        )));
    }
    Ok(())
}
