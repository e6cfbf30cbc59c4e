//! HTTP client for the NFD lookup API

use crate::config::ResolverOptions;
use crate::error::{Error, Result};
use crate::resolver::{NfdRecord, Resolution};
use reqwest::StatusCode;
use reqwest::header::ACCEPT;
use std::time::Duration;
use url::Url;

/// Client for the NFD lookup service
///
/// Holds a reusable [`reqwest::Client`] and the resolved base URL. One
/// instance performs one GET per [`resolve`](NfdResolver::resolve) call; no
/// retries, no caching.
pub struct NfdResolver {
    client: reqwest::Client,
    base_url: Url,
}

impl NfdResolver {
    /// Create a resolver from the given options.
    ///
    /// The base URL must parse; a missing trailing slash is added so the
    /// looked-up name always lands in its own path segment.
    pub fn new(options: &ResolverOptions) -> Result<Self> {
        let mut raw = options.base_url.clone();
        if !raw.ends_with('/') {
            raw.push('/');
        }
        let base_url = Url::parse(&raw)?;

        let mut builder = reqwest::Client::builder();
        if let Some(secs) = options.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder
            .build()
            .map_err(|e| Error::Config(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self { client, base_url })
    }

    /// Look up `name` with a single GET request.
    ///
    /// Never returns an error: every failure mode is folded into the
    /// [`Resolution`] taxonomy so the caller can branch on the outcome. The
    /// name is not validated locally; the service rejects invalid names.
    pub async fn resolve(&self, name: &str) -> Resolution {
        let url = match self.base_url.join(name) {
            Ok(url) => url,
            Err(e) => return Resolution::TransportError(format!("invalid name '{name}': {e}")),
        };

        tracing::debug!(%url, "Looking up NFD record");

        let response = match self
            .client
            .get(url.clone())
            .header(ACCEPT, "application/json")
            .send()
            .await
        {
            Ok(response) => response,
            Err(e) => return Resolution::TransportError(e.to_string()),
        };

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            tracing::debug!(%url, "NFD record not found");
            return Resolution::NotFound;
        }
        if !status.is_success() {
            tracing::warn!(%url, %status, "NFD lookup failed");
            return Resolution::RemoteError(format!("{status} for url {url}"));
        }

        match response.json::<NfdRecord>().await {
            Ok(record) => {
                tracing::debug!(
                    deposit_account = ?record.deposit_account,
                    nfd_account = ?record.nfd_account,
                    "NFD record resolved"
                );
                Resolution::Found(record)
            }
            Err(e) => Resolution::TransportError(e.to_string()),
        }
    }
}
