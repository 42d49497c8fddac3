//! Perceptual color comparison.
//!
//! Every comparator returns a normalized difference in `[0, 1]`: 0 for
//! identical colors, 1.0 for the black/white extreme. `cmp_cie76` goes
//! through CIE L*a*b* and approximates perceived difference; the Euclidean
//! and per-component comparators work on raw RGB and are cheaper but
//! cruder. The alpha channel is ignored by all of them.

use rgb::RGBA8;

// sRGB to XYZ matrix and the D65 reference white.
const XYZ_FROM_SRGB: [[f64; 3]; 3] = [
    [0.4124, 0.3576, 0.1805],
    [0.2126, 0.7152, 0.0722],
    [0.0193, 0.1192, 0.9505],
];
const WHITE_X: f64 = 0.95047;
const WHITE_Y: f64 = 1.0;
const WHITE_Z: f64 = 1.08883;

/// L*a*b* distance between opaque black and white under this conversion;
/// normalizes `cmp_cie76` so that extreme maps to 1.0.
const MAX_LAB_DISTANCE: f64 = 100.000_000_68;

fn srgb_to_linear(v: f64) -> f64 {
    if v > 0.04045 {
        ((v + 0.055) / 1.055).powf(2.4)
    } else {
        v / 12.92
    }
}

fn lab_f(t: f64) -> f64 {
    if t > 0.008856 {
        t.cbrt()
    } else {
        7.787 * t + 16.0 / 116.0
    }
}

/// Converts an sRGB sample to CIE L*a*b* (D65 white point).
pub(crate) fn color_to_lab(c: RGBA8) -> (f64, f64, f64) {
    let r = srgb_to_linear(c.r as f64 / 255.0);
    let g = srgb_to_linear(c.g as f64 / 255.0);
    let b = srgb_to_linear(c.b as f64 / 255.0);

    let [xr, yr, zr] = XYZ_FROM_SRGB;
    let x = (xr[0] * r + xr[1] * g + xr[2] * b) / WHITE_X;
    let y = (yr[0] * r + yr[1] * g + yr[2] * b) / WHITE_Y;
    let z = (zr[0] * r + zr[1] * g + zr[2] * b) / WHITE_Z;

    let (fx, fy, fz) = (lab_f(x), lab_f(y), lab_f(z));
    (116.0 * fy - 16.0, 500.0 * (fx - fy), 200.0 * (fy - fz))
}

/// CIE76 perceptual difference: Euclidean distance in L*a*b*, normalized
/// so that black vs. white is exactly 1.0 and clamped to `[0, 1]` (a few
/// saturated pairs sit further apart in L*a*b* than black and white do).
pub fn cmp_cie76(c1: RGBA8, c2: RGBA8) -> f64 {
    let (l1, a1, b1) = color_to_lab(c1);
    let (l2, a2, b2) = color_to_lab(c2);
    let dist = ((l1 - l2).powi(2) + (a1 - a2).powi(2) + (b1 - b2).powi(2)).sqrt();
    (dist / MAX_LAB_DISTANCE).min(1.0)
}

/// Euclidean distance in raw RGB, normalized to `[0, 1]`.
pub fn cmp_euclidean(c1: RGBA8, c2: RGBA8) -> f64 {
    let dr = c1.r as f64 - c2.r as f64;
    let dg = c1.g as f64 - c2.g as f64;
    let db = c1.b as f64 - c2.b as f64;
    let max = (3.0f64 * 255.0 * 255.0).sqrt();
    (dr * dr + dg * dg + db * db).sqrt() / max
}

/// Largest per-component difference in raw RGB, normalized to `[0, 1]`.
pub fn cmp_rgb_components(c1: RGBA8, c2: RGBA8) -> f64 {
    let dr = (c1.r as i16 - c2.r as i16).unsigned_abs();
    let dg = (c1.g as i16 - c2.g as i16).unsigned_abs();
    let db = (c1.b as i16 - c2.b as i16).unsigned_abs();
    dr.max(dg).max(db) as f64 / 255.0
}
