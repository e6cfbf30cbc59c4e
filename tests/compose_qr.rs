use image::{Rgba, RgbaImage};
use nfdqr::{Error, PaymentUri, QrComposer, RenderOptions};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const ADDRESS: &str = "7ZUECA7HFLZTXENRV24SHLU4AVPUTMTTDUFUBNBD64C73F3UHRTHAIOF6Q";

/// Opaque disc on a transparent field, like a typical round brand mark.
fn circle_logo(dir: &Path, diameter: u32) -> PathBuf {
    let radius = (diameter / 2) as i64;
    let mut logo = RgbaImage::from_pixel(diameter, diameter, Rgba([0, 0, 0, 0]));
    for (x, y, pixel) in logo.enumerate_pixels_mut() {
        let dx = x as i64 - radius;
        let dy = y as i64 - radius;
        if dx * dx + dy * dy <= radius * radius {
            *pixel = Rgba([30, 90, 200, 255]);
        }
    }
    let path = dir.join(format!("logo_{diameter}.png"));
    logo.save(&path).expect("write logo fixture");
    path
}

#[test]
fn test_output_is_canvas_sized_regardless_of_logo() {
    let dir = TempDir::new().unwrap();
    let composer = QrComposer::new();

    for logo_edge in [3u32, 500] {
        let logo = circle_logo(dir.path(), logo_edge);
        let output = dir.path().join(format!("qr_{logo_edge}.png"));

        composer
            .compose(&PaymentUri::from_address(ADDRESS), &logo, &output)
            .expect("compose");

        let written = image::open(&output).expect("reopen output").to_rgba8();
        assert_eq!(written.dimensions(), (256, 256));
    }
}

#[test]
fn test_missing_logo_fails_without_output() {
    let dir = TempDir::new().unwrap();
    let output = dir.path().join("qr.png");

    let result = QrComposer::new().compose(
        &PaymentUri::from_address(ADDRESS),
        Path::new("no_such_logo.png"),
        &output,
    );

    assert!(matches!(result, Err(Error::Asset(_))));
    assert!(!output.exists(), "failed compose must not leave an output file");
}

#[test]
fn test_composed_code_still_decodes() {
    let dir = TempDir::new().unwrap();
    let logo = circle_logo(dir.path(), 240);
    let output = dir.path().join("qr.png");

    QrComposer::new()
        .compose(&PaymentUri::from_address(ADDRESS), &logo, &output)
        .expect("compose");

    let written = image::open(&output).expect("reopen output");
    let mut prepared = rqrr::PreparedImage::prepare(written.to_luma8());
    let grids = prepared.detect_grids();
    assert_eq!(grids.len(), 1, "expected one QR code in composed image");

    let (_meta, content) = grids[0].decode().expect("decode composed image");
    assert_eq!(content, format!("algorand://{ADDRESS}"));
}

#[test]
fn test_corner_radius_from_options() {
    let dir = TempDir::new().unwrap();
    let logo = circle_logo(dir.path(), 64);
    let output = dir.path().join("qr_rounded.png");

    let options = RenderOptions {
        corner_radius: 32,
        ..RenderOptions::default()
    };
    QrComposer::from_options(&options)
        .compose(&PaymentUri::from_address(ADDRESS), &logo, &output)
        .expect("compose");

    let written = image::open(&output).expect("reopen output").to_rgba8();
    assert_eq!(written.get_pixel(0, 0).0[3], 0, "corner must be masked out");
    assert_eq!(written.get_pixel(128, 128).0[3], 255);
}
