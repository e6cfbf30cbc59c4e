//! QR payload and image composition
//!
//! This module builds the `algorand://` payment payload, encodes it as a QR
//! pattern, and composites the final output image (clear zone, logo, corner
//! mask).

mod composer;
mod encoder;

pub use composer::QrComposer;
pub use encoder::QrEncoder;

/// The text payload encoded into the QR pattern
///
/// The address is inserted into the `algorand://` URI verbatim; no escaping
/// or validation is applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaymentUri {
    address: String,
    uri: String,
}

impl PaymentUri {
    /// Build the payment URI for an Algorand address
    pub fn from_address(address: impl Into<String>) -> Self {
        let address = address.into();
        let uri = format!("algorand://{address}");
        Self { address, uri }
    }

    /// The full `algorand://<address>` payload string
    pub fn as_str(&self) -> &str {
        &self.uri
    }

    /// The bare address the URI was built from
    pub fn address(&self) -> &str {
        &self.address
    }
}
