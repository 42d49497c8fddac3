//! Background/trim/text color resolution.
//!
//! A color spec is a string in a small grammar:
//!
//! ```text
//! transparent | auto | auto,<spec> | #RGB | #RRGGBB | <svg-name> | <design-name>
//! ```
//!
//! `auto` inspects the source image's border; the placeholder variant
//! instead picks a random design-system color. Malformed or unknown specs
//! never abort a generation: they log a warning and resolve through the
//! caller-supplied fallback. Only a malformed *built-in* fallback literal
//! panics, since that is a programming error rather than bad input.

use image::{GenericImageView, Rgba};
use log::warn;
use rgb::RGBA8;

use crate::colorcmp::cmp_cie76;
use crate::error::IconError;
use crate::names;

pub const BACKGROUND_DEFAULT_COLOR: &str = "#f1f5f9";
pub const AUTO_COLOR: &str = "auto";
pub const TRANSPARENT_COLOR: &str = "transparent";

pub const TRANSPARENT: RGBA8 = RGBA8 { r: 0, g: 0, b: 0, a: 0 };
pub const BLACK: RGBA8 = RGBA8 { r: 0, g: 0, b: 0, a: 255 };

/// Border pixels further than this from the candidate count as different.
const AUTO_DIFF_THRESHOLD: f64 = 0.02;
/// Detection fails once more than this share of border pixels differ.
const AUTO_DIFF_RATIO: f64 = 0.01;

pub(crate) fn sample(p: Rgba<u8>) -> RGBA8 {
    RGBA8 { r: p[0], g: p[1], b: p[2], a: p[3] }
}

/// Parses `#RGB` or `#RRGGBB` into an opaque color.
pub fn parse_hex_color(s: &str) -> Result<RGBA8, IconError> {
    fn nibble(b: u8) -> Option<u8> {
        match b {
            b'0'..=b'9' => Some(b - b'0'),
            b'a'..=b'f' => Some(b - b'a' + 10),
            b'A'..=b'F' => Some(b - b'A' + 10),
            _ => None,
        }
    }

    let err = || IconError::InvalidHexColor(s.to_string());
    let bytes = s.as_bytes();
    if bytes.first() != Some(&b'#') {
        return Err(err());
    }
    let (r, g, b) = match bytes.len() {
        7 => (
            nibble(bytes[1]).zip(nibble(bytes[2])).map(|(h, l)| (h << 4) + l).ok_or_else(err)?,
            nibble(bytes[3]).zip(nibble(bytes[4])).map(|(h, l)| (h << 4) + l).ok_or_else(err)?,
            nibble(bytes[5]).zip(nibble(bytes[6])).map(|(h, l)| (h << 4) + l).ok_or_else(err)?,
        ),
        // The short form duplicates each nibble.
        4 => (
            nibble(bytes[1]).map(|n| n * 17).ok_or_else(err)?,
            nibble(bytes[2]).map(|n| n * 17).ok_or_else(err)?,
            nibble(bytes[3]).map(|n| n * 17).ok_or_else(err)?,
        ),
        _ => return Err(err()),
    };
    Ok(RGBA8 { r, g, b, a: 0xff })
}

/// Inspects the 2px border of `img` and returns its color when uniform
/// enough to pass for a background.
///
/// Images of 8px or less in either dimension are rejected, as is a fully
/// transparent candidate. A small share of deviating pixels is tolerated
/// so anti-aliased borders still detect.
pub fn detect_background<I>(img: &I) -> Option<RGBA8>
where
    I: GenericImageView<Pixel = Rgba<u8>>,
{
    let (w, h) = img.dimensions();
    if w <= 8 || h <= 8 {
        return None;
    }

    let candidate = sample(img.get_pixel(0, 0));
    let mut diff = 0u32;

    // Left and right borders, skipping the 2px nearest each corner.
    for y in 2..h - 2 {
        for x in [0, 1, w - 2, w - 1] {
            if cmp_cie76(candidate, sample(img.get_pixel(x, y))) > AUTO_DIFF_THRESHOLD {
                diff += 1;
            }
        }
    }
    // Top and bottom borders, full width.
    for x in 0..w {
        for y in [0, 1, h - 2, h - 1] {
            if cmp_cie76(candidate, sample(img.get_pixel(x, y))) > AUTO_DIFF_THRESHOLD {
                diff += 1;
            }
        }
    }

    let ratio = diff as f64 / (w * 4 + h * 4) as f64;
    if ratio > AUTO_DIFF_RATIO {
        return None;
    }
    if candidate.a == 0 {
        return None;
    }
    Some(candidate)
}

/// Resolves a background/trim color spec against `img`.
///
/// `default` backs the fallback chain: it is consulted when `auto`
/// detection fails without an explicit `auto,<spec>` segment, and when the
/// spec is malformed or names an unknown color.
pub fn resolve_color<I>(img: &I, spec: &str, default: &str) -> RGBA8
where
    I: GenericImageView<Pixel = Rgba<u8>>,
{
    let spec = spec.trim();
    if spec.starts_with(AUTO_COLOR) {
        if let Some(c) = detect_background(img) {
            return c;
        }
        let Some((_, fallback)) = spec.split_once(',') else {
            return resolve_default(default);
        };
        return resolve_plain(fallback.trim(), default);
    }
    resolve_plain(spec, default)
}

fn resolve_plain(spec: &str, default: &str) -> RGBA8 {
    if spec == TRANSPARENT_COLOR {
        return TRANSPARENT;
    }
    if !spec.starts_with('#') {
        if let Some(c) = names::svg_color(spec) {
            return c;
        }
        if let Some(c) = names::design_color(spec) {
            return c;
        }
        warn!("unsupported color {spec:?}, falling back to {default:?}");
        return resolve_default(default);
    }
    match parse_hex_color(spec) {
        Ok(c) => c,
        Err(_) => {
            warn!("invalid hex color {spec:?}, falling back to {default:?}");
            resolve_default(default)
        }
    }
}

// Defaults are trusted literals: `transparent` or a valid hex constant.
fn resolve_default(default: &str) -> RGBA8 {
    if default == TRANSPARENT_COLOR {
        return TRANSPARENT;
    }
    parse_hex_color(default).expect("malformed built-in default color")
}

/// Placeholder-flavored resolution: `auto` means a random design-system
/// color, and failures report `None` instead of warning, after one
/// recursive attempt on `fallback`.
pub fn resolve_placeholder_color(spec: &str, fallback: &str) -> Option<RGBA8> {
    if spec.starts_with(AUTO_COLOR) {
        return Some(names::random_design_color());
    }
    if spec == TRANSPARENT_COLOR {
        return Some(TRANSPARENT);
    }
    if !spec.starts_with('#') {
        if let Some(c) = names::svg_color(spec) {
            return Some(c);
        }
        if let Some(c) = names::design_color(spec) {
            return Some(c);
        }
    }
    if let Ok(c) = parse_hex_color(spec) {
        return Some(c);
    }
    if fallback == TRANSPARENT_COLOR || fallback.is_empty() {
        return None;
    }
    resolve_placeholder_color(fallback, TRANSPARENT_COLOR)
}

/// Resolves a placeholder background, falling back to the fixed default
/// instead of transparent so tiles never silently lose their fill.
pub fn resolve_placeholder_background(spec: &str) -> RGBA8 {
    if let Some(c) = resolve_placeholder_color(spec, TRANSPARENT_COLOR) {
        return c;
    }
    warn!("unsupported color {spec:?}, falling back to {BACKGROUND_DEFAULT_COLOR:?}");
    resolve_placeholder_color(BACKGROUND_DEFAULT_COLOR, TRANSPARENT_COLOR)
        .expect("malformed built-in default color")
}

/// Chooses a contrasting text color (near-black or near-white) from the
/// background's WCAG relative luminance.
pub fn contrast_color(c: RGBA8) -> RGBA8 {
    fn linear(v: f64) -> f64 {
        if v <= 0.03928 {
            v / 12.92
        } else {
            ((v + 0.055) / 1.055).powf(2.4)
        }
    }
    let luminance = 0.2126 * linear(c.r as f64 / 255.0)
        + 0.7152 * linear(c.g as f64 / 255.0)
        + 0.0722 * linear(c.b as f64 / 255.0);
    if luminance > 0.5 {
        RGBA8 { r: 18, g: 18, b: 18, a: 255 }
    } else {
        RGBA8 { r: 250, g: 250, b: 250, a: 255 }
    }
}
