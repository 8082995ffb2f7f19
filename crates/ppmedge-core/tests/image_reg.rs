//! Image container regression test
//!
//! Checks the row-major layout, packed byte conversion, and the
//! `len(pixels) == width * height` invariant on synthetic images.

use ppmedge_core::{Error, Image, ImageMut, Pixel};
use ppmedge_test::{RegParams, gradient_image, noise_image};

#[test]
fn image_reg() {
    let mut rp = RegParams::new("image");

    // --- Test 1: packed bytes roundtrip for several sizes ---
    for &(w, h) in &[(1, 1), (1, 9), (9, 1), (17, 5), (64, 48)] {
        let image = noise_image(w, h, u64::from(w * 31 + h)).expect("noise image");
        let bytes = image.to_raw_bytes().expect("pack");
        rp.compare_values((w * h * 3) as f64, bytes.len() as f64, 0.0);
        let back = Image::from_raw_bytes(w, h, &bytes).expect("unpack");
        rp.compare_image(&image, &back);
    }

    // --- Test 2: row-major order ---
    let image = gradient_image(6, 4).expect("gradient");
    let y = 2;
    let x = 5;
    let linear = image.pixels()[(y * 6 + x) as usize];
    rp.check(image.get_pixel(x, y) == Some(linear), "get_pixel uses row-major index");
    rp.check(image.row(y).map(|r| r[x as usize]) == Some(linear), "row slice matches");

    // --- Test 3: invariant violations are rejected ---
    let short = Image::from_pixels(4, 4, vec![Pixel::BLACK; 15]);
    rp.check(
        matches!(short, Err(Error::PixelCountMismatch { .. })),
        "short pixel buffer rejected",
    );
    rp.check(
        matches!(ImageMut::new(0, 1), Err(Error::InvalidDimension { .. })),
        "zero width rejected",
    );

    assert!(rp.cleanup(), "image regression test failed");
}
