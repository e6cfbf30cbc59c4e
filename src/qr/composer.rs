//! QR image composition pipeline

use crate::config::RenderOptions;
use crate::error::{Error, Result};
use crate::qr::{PaymentUri, QrEncoder};
use image::imageops::{self, FilterType};
use image::{DynamicImage, Rgba, RgbaImage};
use std::path::Path;

/// Composites the final QR image from the encoded pattern, a logo, and the
/// configured geometry.
///
/// The composition is an ordered pipeline over an owned RGBA buffer: pattern
/// render, resize to canvas, clear-zone circle, logo overlay, corner mask,
/// save. The order is part of the contract; the clear zone must exist before
/// the logo lands on it.
pub struct QrComposer {
    encoder: QrEncoder,
    size: u32,
    clear_radius: u32,
    logo_size: u32,
    corner_radius: u32,
}

impl QrComposer {
    /// Create a composer with the default render geometry
    pub fn new() -> Self {
        Self::from_options(&RenderOptions::default())
    }

    /// Create a composer from render options
    pub fn from_options(options: &RenderOptions) -> Self {
        Self {
            encoder: QrEncoder::from_options(options),
            size: options.size,
            clear_radius: options.clear_radius,
            logo_size: options.logo_size,
            corner_radius: options.corner_radius,
        }
    }

    /// Compose the QR image for `payload` and write it to `output_path`.
    ///
    /// The output format is inferred from the path's extension. Fails before
    /// anything is written if the logo cannot be opened or decoded.
    pub fn compose(&self, payload: &PaymentUri, logo_path: &Path, output_path: &Path) -> Result<()> {
        let pattern = self.encoder.encode(payload)?;
        let logo = load_logo(logo_path, self.logo_size)?;

        let canvas = resize_to_canvas(pattern, self.size);
        let canvas = clear_center(canvas, self.clear_radius);
        let canvas = overlay_logo(canvas, &logo);
        let canvas = round_corners(canvas, self.corner_radius);

        canvas.save(output_path)?;
        tracing::debug!(
            output = %output_path.display(),
            size = self.size,
            "Composed QR image written"
        );
        Ok(())
    }
}

impl Default for QrComposer {
    fn default() -> Self {
        Self::new()
    }
}

fn load_logo(path: &Path, size: u32) -> Result<RgbaImage> {
    let logo = image::open(path)
        .map_err(|e| Error::Asset(format!("Failed to open logo {}: {e}", path.display())))?;
    Ok(imageops::resize(
        &logo.to_rgba8(),
        size,
        size,
        FilterType::Lanczos3,
    ))
}

/// Convert the rendered pattern to RGBA and resize it to the square canvas.
fn resize_to_canvas(pattern: DynamicImage, size: u32) -> RgbaImage {
    imageops::resize(&pattern.to_rgba8(), size, size, FilterType::Lanczos3)
}

/// Paint a filled, fully opaque white circle at the canvas center.
///
/// This guarantees a blank zone under the logo so only modules the error
/// correction can absorb are obscured.
fn clear_center(mut canvas: RgbaImage, radius: u32) -> RgbaImage {
    let cx = (canvas.width() / 2) as i64;
    let cy = (canvas.height() / 2) as i64;
    let w = canvas.width() as i64;
    let h = canvas.height() as i64;
    let r = radius as i64;

    for y in (cy - r)..=(cy + r) {
        for x in (cx - r)..=(cx + r) {
            if x < 0 || y < 0 || x >= w || y >= h {
                continue;
            }
            let dx = x - cx;
            let dy = y - cy;
            if dx * dx + dy * dy <= r * r {
                canvas.put_pixel(x as u32, y as u32, Rgba([255, 255, 255, 255]));
            }
        }
    }
    canvas
}

/// Alpha-composite the logo centered on the canvas.
///
/// `imageops::overlay` blends by the logo's own alpha channel, so transparent
/// logo regions leave the clear zone untouched.
fn overlay_logo(mut canvas: RgbaImage, logo: &RgbaImage) -> RgbaImage {
    let x = (i64::from(canvas.width()) - i64::from(logo.width())) / 2;
    let y = (i64::from(canvas.height()) - i64::from(logo.height())) / 2;
    imageops::overlay(&mut canvas, logo, x, y);
    canvas
}

/// Apply a rounded-rectangle alpha mask over the whole canvas.
///
/// Radius 0 leaves every pixel inside the mask; the step still runs.
fn round_corners(mut canvas: RgbaImage, radius: u32) -> RgbaImage {
    let w = canvas.width() as i64;
    let h = canvas.height() as i64;
    let r = i64::from(radius).min(w / 2).min(h / 2);

    for (x, y, pixel) in canvas.enumerate_pixels_mut() {
        if !inside_rounded_rect(i64::from(x), i64::from(y), w, h, r) {
            pixel.0[3] = 0;
        }
    }
    canvas
}

fn inside_rounded_rect(x: i64, y: i64, w: i64, h: i64, r: i64) -> bool {
    if r == 0 {
        return true;
    }
    // Only the four r-by-r corner squares can fall outside the mask.
    let cx = if x < r {
        r
    } else if x >= w - r {
        w - r - 1
    } else {
        return true;
    };
    let cy = if y < r {
        r
    } else if y >= h - r {
        h - r - 1
    } else {
        return true;
    };
    let dx = x - cx;
    let dy = y - cy;
    dx * dx + dy * dy <= r * r
}
