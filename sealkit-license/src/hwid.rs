//! Hardware identifier for license binding.
//!
//! Produces a stable fingerprint of the current machine. The core treats the
//! hwid as an opaque string; this module exists so a verifying host can
//! derive its own identifier without the operator typing one in.

use sha2::{Digest, Sha256};
use std::env;

/// A stable identifier for the current machine.
///
/// Derived from the platform machine id, hostname, OS, and architecture.
/// Survives reboots; changes if the machine identity changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HardwareId(String);

impl HardwareId {
    /// Computes the identifier for the current machine.
    #[must_use]
    pub fn current() -> Self {
        let combined = collect_components().join("|");
        let digest = Sha256::digest(combined.as_bytes());
        // First 16 bytes are plenty for a machine-scoped identifier.
        Self(hex::encode(&digest[..16]).to_uppercase())
    }

    /// Returns the identifier string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for HardwareId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

fn collect_components() -> Vec<String> {
    let mut components = vec![
        env::consts::OS.to_string(),
        env::consts::ARCH.to_string(),
        get_hostname(),
    ];
    if let Some(machine_id) = get_machine_id() {
        components.push(machine_id);
    }
    components
}

fn get_hostname() -> String {
    hostname::get()
        .ok()
        .and_then(|h| h.into_string().ok())
        .unwrap_or_else(|| "unknown".to_string())
}

/// Platform-specific stable machine identifier, if one is available.
fn get_machine_id() -> Option<String> {
    #[cfg(target_os = "linux")]
    {
        std::fs::read_to_string("/etc/machine-id")
            .or_else(|_| std::fs::read_to_string("/var/lib/dbus/machine-id"))
            .ok()
            .map(|s| s.trim().to_string())
    }

    #[cfg(target_os = "macos")]
    {
        std::process::Command::new("ioreg")
            .args(["-rd1", "-c", "IOPlatformExpertDevice"])
            .output()
            .ok()
            .and_then(|o| String::from_utf8(o.stdout).ok())
            .and_then(|output| {
                output
                    .lines()
                    .find(|l| l.contains("IOPlatformUUID"))
                    .and_then(|l| l.split('"').nth(3))
                    .map(String::from)
            })
    }

    #[cfg(not(any(target_os = "linux", target_os = "macos")))]
    {
        None
    }
}
