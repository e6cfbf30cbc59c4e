//! nfdqr - NFD payment QR generator
//!
//! This library resolves human-readable NFD names (e.g. `payments.algo`) to
//! Algorand deposit accounts via the NFD REST API and renders a scannable
//! payment QR code with a logo composited at its center.
//!
//! # Features
//!
//! - **Name Resolution**: one GET against the NFD lookup service, with
//!   not-found and transport failures folded into a branchable outcome
//! - **QR Composition**: High-ECC pattern, white clear zone, alpha-masked
//!   logo overlay, optional rounded corners
//! - **Async-first**: Built on Tokio, reqwest-backed lookups
//!
//! # Example
//!
//! ```no_run
//! use nfdqr::{NfdQrConfig, NfdQrGenerator, Outcome};
//! use std::path::Path;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = NfdQrConfig::default();
//!     let generator = NfdQrGenerator::new(&config)?;
//!
//!     match generator
//!         .generate("payments.algo", Path::new("logo.png"), Path::new("qr.png"))
//!         .await?
//!     {
//!         Outcome::Saved { path, .. } => println!("saved {}", path.display()),
//!         Outcome::Unresolved { descriptor } => eprintln!("lookup failed: {descriptor}"),
//!     }
//!     Ok(())
//! }
//! ```

#![warn(missing_docs, rust_2024_compatibility)]

pub mod config;
pub mod error;
pub mod logging;
pub mod qr;
pub mod resolver;

// Re-exports for convenience
pub use error::{Error, Result};

pub use config::{LogRotation, LoggingOptions, NfdQrConfig, RenderOptions, ResolverOptions};
pub use qr::{PaymentUri, QrComposer, QrEncoder};
pub use resolver::{NfdRecord, NfdResolver, Resolution};

use std::path::{Path, PathBuf};

/// High-level generator combining resolver + composer
pub struct NfdQrGenerator {
    resolver: NfdResolver,
    composer: QrComposer,
}

/// Outcome of a single generation run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The name resolved to a deposit account and the QR image was written
    Saved {
        /// Path the image was written to
        path: PathBuf,
        /// Deposit account encoded in the QR payload
        deposit_account: String,
        /// Canonical NFD account name, when the record carried one
        nfd_account: Option<String>,
    },
    /// The name did not resolve to a usable deposit account
    Unresolved {
        /// Human-readable failure descriptor (e.g. the `"HTTP 404"` sentinel)
        descriptor: String,
    },
}

impl NfdQrGenerator {
    /// Create a generator from the given configuration
    pub fn new(config: &NfdQrConfig) -> Result<Self> {
        let resolver = NfdResolver::new(&config.resolver)?;
        let composer = QrComposer::from_options(&config.render);

        Ok(Self { resolver, composer })
    }

    /// Resolve `name` and, on success, compose the QR image at `output_path`.
    ///
    /// Lookup failures are reported as [`Outcome::Unresolved`], never as
    /// errors; only the composition path (bad logo, unwritable output,
    /// encode failure) returns `Err`.
    pub async fn generate(
        &self,
        name: &str,
        logo_path: &Path,
        output_path: &Path,
    ) -> Result<Outcome> {
        let record = match self.resolver.resolve(name).await {
            Resolution::Found(record) => record,
            other => {
                return Ok(Outcome::Unresolved {
                    descriptor: other.descriptor().unwrap_or_default(),
                });
            }
        };

        let Some(deposit_account) = record.deposit_account else {
            return Ok(Outcome::Unresolved {
                descriptor: "record has no deposit account".to_string(),
            });
        };

        let payload = PaymentUri::from_address(&deposit_account);
        self.composer.compose(&payload, logo_path, output_path)?;

        Ok(Outcome::Saved {
            path: output_path.to_path_buf(),
            deposit_account,
            nfd_account: record.nfd_account,
        })
    }
}
