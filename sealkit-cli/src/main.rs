//! Sealkit license administration CLI.
//!
//! `sealkit issue` runs on the issuing host, which holds the private key:
//! it signs a license for a given hwid/user and writes one record file per
//! user. `sealkit verify` runs on a licensed machine: it checks a record
//! against the shared public key, the local (or supplied) hwid, and the
//! current time.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use chrono::Utc;
use clap::{Parser, Subcommand};
use sealkit_license::{
    HardwareId, LicenseAuthority, LicenseStore, SigningKey, VerifyingKey,
};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser, Debug)]
#[command(name = "sealkit")]
#[command(about = "Issue and verify signed Sealkit licenses")]
struct Cli {
    /// Enable verbose debug logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Issue a signed license and write it to the license directory
    Issue {
        /// Hardware identifier the license is bound to
        #[arg(long)]
        hwid: String,

        /// Licensee user name (also names the output file)
        #[arg(long)]
        user: String,

        /// Validity period in days
        #[arg(long, default_value = "365")]
        days: i64,

        /// Path to the Ed25519 private key (PKCS#8 PEM)
        #[arg(long, default_value = "private.pem")]
        key: PathBuf,

        /// Directory to write license files into
        #[arg(long, default_value = "licenses")]
        out: PathBuf,
    },

    /// Verify a license record against a public key and this machine
    Verify {
        /// Path to the license record JSON file
        #[arg(long)]
        license: PathBuf,

        /// Path to the Ed25519 public key (SPKI PEM)
        #[arg(long, default_value = "public.pem")]
        public_key: PathBuf,

        /// Hardware identifier to check against (defaults to this machine's)
        #[arg(long)]
        hwid: Option<String>,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let log_level = if cli.verbose { Level::DEBUG } else { Level::INFO };
    FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .compact()
        .init();

    match run(cli.command) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(command: Commands) -> Result<ExitCode> {
    match command {
        Commands::Issue {
            hwid,
            user,
            days,
            key,
            out,
        } => issue(&hwid, &user, days, &key, &out),
        Commands::Verify {
            license,
            public_key,
            hwid,
        } => verify(&license, &public_key, hwid),
    }
}

fn issue(hwid: &str, user: &str, days: i64, key: &PathBuf, out: &PathBuf) -> Result<ExitCode> {
    let signing_key = SigningKey::from_pem_file(key)
        .with_context(|| format!("loading signing key from {}", key.display()))?;

    let record = LicenseAuthority::default().issue(&signing_key, hwid, user, days, Utc::now())?;
    let path = LicenseStore::new(out).save(&record)?;

    info!(user, days, expiry = %record.payload().expiry(), "license issued");
    println!("License written: {}", path.display());
    Ok(ExitCode::SUCCESS)
}

fn verify(license: &PathBuf, public_key: &PathBuf, hwid: Option<String>) -> Result<ExitCode> {
    let verifying_key = VerifyingKey::from_pem_file(public_key)
        .with_context(|| format!("loading public key from {}", public_key.display()))?;
    let record = LicenseStore::load_path(license)
        .with_context(|| format!("reading license from {}", license.display()))?;

    let expected_hwid = hwid.unwrap_or_else(|| HardwareId::current().to_string());

    let result =
        LicenseAuthority::default().verify(&verifying_key, &record, &expected_hwid, Utc::now());
    println!("{result}");

    if result.is_valid() {
        info!(user = record.payload().user(), expiry = %record.payload().expiry(), "license accepted");
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::FAILURE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn issue_with_missing_key_fails() {
        let result = issue(
            "HW123",
            "alice",
            30,
            &PathBuf::from("/nonexistent/private.pem"),
            &PathBuf::from("/tmp/licenses"),
        );
        assert!(result.is_err());
    }
}
