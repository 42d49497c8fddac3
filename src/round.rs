//! Corner rounding: clears the pixels outside a quarter-circle mask at
//! each corner, scanline by scanline.

use image::{DynamicImage, Rgba, RgbaImage};

use crate::error::IconError;

/// Pixels cleared by rounding: white with zero alpha.
pub const EMPTY_COLOR: Rgba<u8> = Rgba([255, 255, 255, 0]);

/// Rounds the corners of `img` in place.
///
/// `rate` in `(0, 1]` scales the radius against half the shorter side.
/// Each scanline inside the radius clears the chord run outside the
/// circle boundary; a rate small enough to produce a zero radius leaves
/// the image untouched.
pub fn round_corners(img: &mut RgbaImage, rate: f64) {
    let (w, h) = (img.width() as i64, img.height() as i64);
    let r = (w.min(h) as f64 / 2.0) * rate;

    let mut clear = |x: i64, y: i64| {
        if x >= 0 && x < w && y >= 0 && y < h {
            img.put_pixel(x as u32, y as u32, EMPTY_COLOR);
        }
    };

    let mut y = 0.0f64;
    while y <= r {
        // Chord half-length at this height, from x^2 = r^2 - (r - y)^2.
        let l = (r - (2.0 * y * r - y * y).sqrt()).round() as i64;
        let top = y as i64 - 1;
        let bottom = h - y as i64;
        for x in 0..=l {
            clear(x - 1, top);
            clear(w - x, top);
            clear(x - 1, bottom);
            clear(w - x, bottom);
        }
        y += 1.0;
    }
}

/// Capability-checked rounding over any decoded image.
///
/// A directly settable RGBA buffer is mutated in place; other known pixel
/// layouts are first materialized as an RGBA copy. Unknown layouts fail
/// with [`IconError::UnsupportedFormat`] and leave the image untouched.
pub fn round_image(img: &mut DynamicImage, rate: f64) -> Result<(), IconError> {
    if let Some(buf) = img.as_mut_rgba8() {
        round_corners(buf, rate);
        return Ok(());
    }
    match img {
        DynamicImage::ImageLuma8(_)
        | DynamicImage::ImageLumaA8(_)
        | DynamicImage::ImageRgb8(_)
        | DynamicImage::ImageLuma16(_)
        | DynamicImage::ImageLumaA16(_)
        | DynamicImage::ImageRgb16(_)
        | DynamicImage::ImageRgba16(_)
        | DynamicImage::ImageRgb32F(_)
        | DynamicImage::ImageRgba32F(_) => {
            let mut buf = img.to_rgba8();
            round_corners(&mut buf, rate);
            *img = DynamicImage::ImageRgba8(buf);
            Ok(())
        }
        _ => Err(IconError::UnsupportedFormat),
    }
}
