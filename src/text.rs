//! Text fitting for placeholder tiles.
//!
//! [`fit_text`] finds the largest font size whose rendered line fits a
//! padded box, then the offsets that center it. Measurement goes through
//! the [`FontMetrics`] seam so the search is testable without a real font
//! file; [`ab_glyph::FontArc`] implements it for actual rendering.

use ab_glyph::{Font, FontArc, PxScale, ScaleFont, point};

/// String measurement at a given font size.
///
/// All values are in pixels. `text_bounds` reports the advance width and
/// the union of the glyph boxes relative to the baseline (y grows down,
/// so ascenders are negative).
pub trait FontMetrics {
    fn line_height(&self, size: f32) -> f32;
    fn text_width(&self, size: f32, text: &str) -> f32;
    fn text_bounds(&self, size: f32, text: &str) -> TextBounds;
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextBounds {
    pub advance: f32,
    pub min_y: f32,
    pub max_y: f32,
}

/// The chosen font size and the offsets that center the text: subtract
/// each offset from the box center to get the baseline origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FontFit {
    pub size: f64,
    pub x_offset: f64,
    pub y_offset: f64,
}

impl FontMetrics for FontArc {
    fn line_height(&self, size: f32) -> f32 {
        let scaled = self.as_scaled(PxScale::from(size));
        scaled.ascent() - scaled.descent() + scaled.line_gap()
    }

    fn text_width(&self, size: f32, text: &str) -> f32 {
        let scaled = self.as_scaled(PxScale::from(size));
        let mut width = 0.0;
        let mut prev = None;
        for ch in text.chars() {
            let id = scaled.glyph_id(ch);
            if let Some(prev) = prev {
                width += scaled.kern(prev, id);
            }
            width += scaled.h_advance(id);
            prev = Some(id);
        }
        width
    }

    fn text_bounds(&self, size: f32, text: &str) -> TextBounds {
        let scale = PxScale::from(size);
        let scaled = self.as_scaled(scale);
        let mut caret = 0.0f32;
        let mut prev = None;
        let (mut min_y, mut max_y) = (f32::MAX, f32::MIN);
        for ch in text.chars() {
            let id = scaled.glyph_id(ch);
            if let Some(prev) = prev {
                caret += scaled.kern(prev, id);
            }
            let glyph = id.with_scale_and_position(scale, point(caret, 0.0));
            // Whitespace has no outline and contributes only advance.
            if let Some(outlined) = self.outline_glyph(glyph) {
                let b = outlined.px_bounds();
                min_y = min_y.min(b.min.y);
                max_y = max_y.max(b.max.y);
            }
            caret += scaled.h_advance(id);
            prev = Some(id);
        }
        if min_y > max_y {
            (min_y, max_y) = (0.0, 0.0);
        }
        TextBounds { advance: caret, min_y, max_y }
    }
}

/// Finds the largest font size rendering `text` inside a `box_w` x `box_h`
/// box with `padding` percent reserved on every side, plus the centering
/// offsets at that size.
///
/// Two accelerated shrink searches run largest-first: one against the line
/// height, then one against the measured width. Sizes only ever decrease
/// (floored at 1), so the search terminates even when measurements
/// quantize non-monotonically.
pub fn fit_text<M: FontMetrics>(font: &M, box_w: u32, box_h: u32, padding: u32, text: &str) -> FontFit {
    let max_w = (box_w as f64 * (1.0 - padding as f64 * 2.0 / 100.0)).round_ties_even();
    let max_h = (box_h as f64 * (1.0 - padding as f64 * 2.0 / 100.0)).round_ties_even();

    let mut size = max_h.max(1.0);
    size = shrink_to_fit(size, max_h, |s| font.line_height(s as f32) as f64);
    size = shrink_to_fit(size, max_w, |s| font.text_width(s as f32, text) as f64);

    let bounds = font.text_bounds(size as f32, text);
    FontFit {
        size,
        x_offset: bounds.advance as f64 / 2.0,
        y_offset: (bounds.max_y as f64 + bounds.min_y as f64) / 2.0,
    }
}

/// Shrinks `size` in steps of 2 until `measure(size)` fits `limit`.
///
/// After the first two probes the measured reduction per step estimates
/// how many steps remain, and the search jumps ahead by that many at
/// once. A stalled or negative estimate falls back to single steps.
fn shrink_to_fit(mut size: f64, limit: f64, measure: impl Fn(f64) -> f64) -> f64 {
    let mut measured = measure(size);
    let mut iter = 1.0f64;
    while measured as i64 > limit as i64 && size > 1.0 {
        size = (size - 2.0).max(1.0);
        let previous = measured;
        measured = measure(size);
        if iter < 1.0 {
            continue;
        }
        // Reduction per -2 step across however many steps the last jump
        // covered; a stalled estimate degrades to single stepping.
        let reduction = (previous - measured).ceil() / iter;
        if reduction <= 0.0 {
            iter = 1.0;
            continue;
        }
        iter = ((measured.ceil() - limit.floor()) / reduction).floor();
        if iter > 1.0 {
            size = (size - iter * 2.0).max(1.0);
        }
    }
    size
}
