//! QR code encoder

use crate::config::RenderOptions;
use crate::error::{Error, Result};
use crate::qr::PaymentUri;
use image::{DynamicImage, Luma};
use qrcode::{EcLevel, QrCode};

/// QR code encoder
///
/// Defaults to error correction level High so the composited logo can
/// obscure part of the pattern without breaking scannability. The smallest
/// version that fits the payload is selected automatically.
pub struct QrEncoder {
    ec_level: EcLevel,
    module_size: u32,
    quiet_zone: bool,
}

impl QrEncoder {
    /// Create a new QR encoder with default settings (High ECC, 10 px modules)
    pub fn new() -> Self {
        Self {
            ec_level: EcLevel::H,
            module_size: 10,
            quiet_zone: true,
        }
    }

    /// Create a new QR encoder with a specific error correction level
    pub fn with_ec_level(ec_level: EcLevel) -> Self {
        Self {
            ec_level,
            ..Self::new()
        }
    }

    /// Create an encoder from render options
    pub fn from_options(options: &RenderOptions) -> Self {
        Self {
            ec_level: EcLevel::H,
            module_size: options.module_size,
            quiet_zone: options.quiet_zone,
        }
    }

    /// Encode a payment payload into a QR code image
    ///
    /// Renders black modules on a white background.
    pub fn encode(&self, payload: &PaymentUri) -> Result<DynamicImage> {
        let code = QrCode::with_error_correction_level(payload.as_str(), self.ec_level)
            .map_err(|e| Error::QrEncode(format!("Failed to create QR code: {}", e)))?;

        let image = code
            .render::<Luma<u8>>()
            .module_dimensions(self.module_size, self.module_size)
            .quiet_zone(self.quiet_zone)
            .build();

        Ok(DynamicImage::ImageLuma8(image))
    }
}

impl Default for QrEncoder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ADDRESS: &str = "7ZUECA7HFLZTXENRV24SHLU4AVPUTMTTDUFUBNBD64C73F3UHRTHAIOF6Q";

    #[test]
    fn test_encoder_creation() {
        let _encoder = QrEncoder::new();
    }

    #[test]
    fn test_encode_produces_square_pattern() {
        let encoder = QrEncoder::new();
        let pattern = encoder
            .encode(&PaymentUri::from_address(ADDRESS))
            .expect("encode payment uri")
            .to_luma8();
        assert_eq!(pattern.width(), pattern.height());
        // 10 px modules plus the quiet zone put even a version 1 code well past 280 px
        assert!(pattern.width() >= 290);
    }

    #[test]
    fn test_round_trip() {
        let encoder = QrEncoder::new();
        let uri = PaymentUri::from_address(ADDRESS);
        let image = encoder.encode(&uri).unwrap();

        let mut prepared = rqrr::PreparedImage::prepare(image.to_luma8());
        let grids = prepared.detect_grids();
        assert_eq!(grids.len(), 1, "expected exactly one QR code in render");

        let (_meta, content) = grids[0].decode().expect("decode rendered QR");
        assert_eq!(content, uri.as_str());
    }
}
