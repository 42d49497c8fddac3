//! Icon composition: trim, resize, and center source content onto a
//! square background canvas.

use image::imageops::{self, FilterType};
use image::{DynamicImage, RgbaImage};
use log::{debug, warn};
use rgb::RGBA8;

use crate::IconOptions;
use crate::error::IconError;
use crate::resolve::{BACKGROUND_DEFAULT_COLOR, TRANSPARENT_COLOR, resolve_color};
use crate::round::round_image;
use crate::scan::DecodedImage;
use crate::to_pixel;
use crate::trim::{Bounds, trimmed_bounds};

/// Renders `img` as a `size` x `size` icon per `opts`.
///
/// The caller owns PNG encoding; output-corner rounding happens on the
/// write path so it also applies to placeholders.
pub fn generate_icon(opts: &IconOptions, img: &DecodedImage) -> Result<RgbaImage, IconError> {
    let (background, rect) = target_rect(opts, img);
    let mut content = DynamicImage::ImageRgba8(resize_to_fit(opts, img, rect));

    if opts.src_round > 0 {
        if round_image(&mut content, opts.src_round as f64 / 100.0).is_err() {
            warn!("source format does not support rounding: {}", img.path.display());
        }
    }

    let mut canvas = RgbaImage::from_pixel(opts.size, opts.size, to_pixel(background));
    let offset_x = (opts.size as i64 - content.width() as i64) / 2
        + ((opts.pad_x as f64 / 100.0) * opts.size as f64).round_ties_even() as i64;
    let offset_y = (opts.size as i64 - content.height() as i64) / 2
        + ((opts.pad_y as f64 / 100.0) * opts.size as f64).round_ties_even() as i64;
    debug!("padding offsets: x={offset_x} y={offset_y}");
    imageops::overlay(&mut canvas, &content, offset_x, offset_y);
    Ok(canvas)
}

/// Resolves the background color and the content rectangle left after
/// trimming.
fn target_rect(opts: &IconOptions, img: &DecodedImage) -> (RGBA8, Bounds) {
    let background = resolve_color(&img.image, &opts.background, BACKGROUND_DEFAULT_COLOR);
    if opts.trim.is_empty() {
        return (background, Bounds::of_image(img.width, img.height));
    }

    let trim = trim_colors(img, &opts.trim);
    let rect = trimmed_bounds(&img.image, &trim).unwrap_or_else(|| {
        warn!("image is fully trimmed, keeping full bounds: {}", img.path.display());
        Bounds::of_image(img.width, img.height)
    });
    (background, rect)
}

/// Resolves the comma-separated trim spec list, dropping duplicates.
fn trim_colors(img: &DecodedImage, spec: &str) -> Vec<RGBA8> {
    let mut colors: Vec<RGBA8> = Vec::new();
    for part in spec.split(',') {
        let c = resolve_color(&img.image, part.trim(), TRANSPARENT_COLOR);
        if !colors.contains(&c) {
            colors.push(c);
        }
    }
    colors
}

/// Scales the content rectangle so its longer side fills the icon minus
/// padding, preserving aspect ratio.
fn resize_to_fit(opts: &IconOptions, img: &DecodedImage, rect: Bounds) -> RgbaImage {
    let content_size = rect.width().max(rect.height()).max(1);
    let target = opts.size as f64 - opts.size as f64 * (opts.padding as f64 / 100.0) * 2.0;
    let ratio = target / content_size as f64;
    debug!("resize ratio {ratio} for {}", img.path.display());

    let width = ((rect.width() as f64 * ratio).round_ties_even() as u32).max(1);
    let height = ((rect.height() as f64 * ratio).round_ties_even() as u32).max(1);
    let cropped = img.image.crop_imm(rect.min_x, rect.min_y, rect.width(), rect.height());
    imageops::resize(&cropped, width, height, FilterType::CatmullRom)
}
