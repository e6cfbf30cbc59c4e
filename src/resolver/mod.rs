//! NFD name resolution
//!
//! This module resolves human-readable NFD names (e.g. `payments.algo`) to
//! their on-chain accounts via the NFD REST API. Lookup failures are folded
//! into the [`Resolution`] outcome rather than raised as errors, so callers
//! always get a value they can branch on.

mod client;

pub use client::NfdResolver;

use serde::{Deserialize, Serialize};

/// Accounts attached to an NFD record
///
/// Either field may be absent on a valid record; absence is a normal state,
/// not an error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NfdRecord {
    /// Algorand address funds should be deposited to
    pub deposit_account: Option<String>,
    /// Canonical NFD account name as stored by the service
    pub nfd_account: Option<String>,
}

/// Outcome of a single NFD lookup
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// The service returned a record (2xx)
    Found(NfdRecord),
    /// The service has no record for the name (HTTP 404)
    NotFound,
    /// The service answered with a non-2xx, non-404 status
    RemoteError(String),
    /// The request never produced a usable response (network, timeout, bad JSON)
    TransportError(String),
}

impl Resolution {
    /// Human-readable failure descriptor, `None` for successful lookups.
    ///
    /// The exact strings are load-bearing for operators: `"HTTP 404"` is the
    /// not-found sentinel and must never be mistaken for an address.
    pub fn descriptor(&self) -> Option<String> {
        match self {
            Resolution::Found(_) => None,
            Resolution::NotFound => Some("HTTP 404".to_string()),
            Resolution::RemoteError(details) => Some(format!("HTTP error occurred: {details}")),
            Resolution::TransportError(details) => Some(format!("Other error occurred: {details}")),
        }
    }

    /// The deposit account, if the lookup found a record carrying one.
    pub fn deposit_account(&self) -> Option<&str> {
        match self {
            Resolution::Found(record) => record.deposit_account.as_deref(),
            _ => None,
        }
    }
}
