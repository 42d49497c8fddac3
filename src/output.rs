//! Output writing: file naming, overwrite checks, output-corner rounding
//! and PNG encoding.

use std::path::Path;

use image::RgbaImage;
use log::warn;

use crate::error::IconError;
use crate::round::round_corners;

/// Output file name for an icon generated from `source`:
/// `{stem}.{size}pc{padding}.png`.
pub fn icon_file_name(source: &Path, size: u32, padding: u32) -> String {
    let stem = source.file_stem().and_then(|s| s.to_str()).unwrap_or("icon");
    format!("{stem}.{size}pc{padding}.png")
}

/// Output file name for a placeholder tile: `{text.}WxHpc{padding}.png`.
///
/// The text prefix is dropped when it is empty or just the dimension
/// string, and is normalized for use in a file name.
pub fn placeholder_file_name(text: &str, width: u32, height: u32, padding: u32) -> String {
    let dim = format!("{width}x{height}");
    let base = format!("{dim}pc{padding}.png");
    if text.is_empty() || text == dim {
        return base;
    }
    format!("{}.{base}", normalize_file_name(text))
}

// Spaces map to `-`; characters that are unsafe in file names are dropped.
fn normalize_file_name(text: &str) -> String {
    text.chars()
        .filter_map(|c| match c {
            ' ' => Some('-'),
            '?' | '\\' | ':' | '/' | '<' | '>' | '%' | '*' | '"' => None,
            _ => Some(c),
        })
        .collect()
}

/// True when `path` may be written. An existing file without the
/// overwrite flag logs a warning and is skipped.
pub fn can_write(path: &Path, overwrite: bool) -> bool {
    if path.exists() && !overwrite {
        warn!("file exists, skipping: {}", path.display());
        return false;
    }
    true
}

/// Rounds the output corners when `round` is nonzero, then PNG-encodes
/// the image to `path`.
pub fn write_png(mut img: RgbaImage, path: &Path, round: u32) -> Result<(), IconError> {
    if round > 0 {
        round_corners(&mut img, round as f64 / 100.0);
    }
    img.save_with_format(path, image::ImageFormat::Png)
        .map_err(|source| IconError::Write { path: path.to_path_buf(), source })
}
