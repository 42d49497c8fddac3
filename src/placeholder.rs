//! Placeholder tiles: a solid background with centered, auto-sized text.

use ab_glyph::{Font, FontArc, PxScale, ScaleFont};
use image::RgbaImage;
use imageproc::drawing::draw_text_mut;
use log::warn;
use rgb::RGBA8;

use crate::PlaceholderOptions;
use crate::error::IconError;
use crate::resolve::{
    BLACK, TRANSPARENT_COLOR, contrast_color, resolve_placeholder_background,
    resolve_placeholder_color,
};
use crate::text::fit_text;
use crate::to_pixel;

/// Literal placeholder text that suppresses text entirely.
pub const NONE_TEXT: &str = "<none>";

/// Parses a `WxH` placeholder size like `300x200`.
///
/// Both dimensions must be positive decimal integers without leading
/// zeros; anything else is treated as a file path by the caller.
pub fn parse_placeholder_size(s: &str) -> Option<(u32, u32)> {
    fn dimension(s: &str) -> Option<u32> {
        if s.is_empty() || s.starts_with('0') || !s.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        s.parse().ok()
    }
    let (w, h) = s.split_once('x')?;
    Some((dimension(w)?, dimension(h)?))
}

/// Renders a `width` x `height` placeholder tile.
///
/// Text defaults to the dimension string and is drawn centered at the
/// largest size that fits the padded box. `font` may be absent as long as
/// no text ends up being drawn.
pub fn generate_placeholder(
    opts: &PlaceholderOptions,
    font: Option<&FontArc>,
) -> Result<RgbaImage, IconError> {
    let dim = format!("{}x{}", opts.width, opts.height);
    let mut text = if opts.text.is_empty() { dim.clone() } else { opts.text.clone() };
    if text == NONE_TEXT {
        text.clear();
    }

    let background = resolve_placeholder_background(&opts.background);
    let (text, text_color) = placeholder_text_color(&text, background, &dim);

    let mut canvas = RgbaImage::from_pixel(opts.width, opts.height, to_pixel(background));
    if !text.is_empty() {
        let font = font.ok_or(IconError::FontUnavailable)?;
        let fit = fit_text(font, opts.width, opts.height, opts.padding, &text);
        let x_center = opts.width as f64 / 2.0 - fit.x_offset
            + opts.width as f64 * opts.pad_x as f64 / 100.0;
        let y_center = opts.height as f64 / 2.0 - fit.y_offset
            + opts.height as f64 * opts.pad_y as f64 / 100.0;
        // draw_text_mut positions the em-box top; shift the centered
        // baseline up by the ascent.
        let ascent = font.as_scaled(PxScale::from(fit.size as f32)).ascent() as f64;
        draw_text_mut(
            &mut canvas,
            to_pixel(text_color),
            x_center as i32,
            (y_center - ascent) as i32,
            PxScale::from(fit.size as f32),
            font,
            &text,
        );
    }
    Ok(canvas)
}

/// Splits an optional trailing `<colorspec>` off the text and picks the
/// text color: the suffix color when valid, otherwise a contrast color
/// derived from the background (black on transparent).
fn placeholder_text_color(text: &str, background: RGBA8, dim: &str) -> (String, RGBA8) {
    if text.ends_with('>') {
        if let Some(start) = text.find('<') {
            let name = &text[start + 1..text.len() - 1];
            if !name.is_empty() {
                if let Some(c) = resolve_placeholder_color(name, TRANSPARENT_COLOR) {
                    let rest = text[..start].trim();
                    let rest = if rest.is_empty() { dim } else { rest };
                    return (rest.to_string(), c);
                }
                warn!("unsupported text color {name:?}, falling back to auto contrast");
            }
        }
    }
    if background.a == 0 {
        return (text.to_string(), BLACK);
    }
    (text.to_string(), contrast_color(background))
}
