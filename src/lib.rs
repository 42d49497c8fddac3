//! img2icon - an icon and placeholder generator library
//!
//! This library turns raster images (PNG, JPEG, etc.) into fixed-size
//! square icons, and renders placeholder tiles with centered, auto-sized
//! text.
//!
//! ## Features
//!
//! - **Auto background detection** from a uniform 2px image border
//! - **Border trimming** by exact-color bounding-box search
//! - **Corner rounding** using a scanline quarter-circle mask
//! - **Text fitting** that finds the largest font size for a padded box
//!
//! ## Example
//!
//! ```rust,no_run
//! use img2icon::{decode, generate_icon, IconOptions};
//! use std::path::Path;
//!
//! let options = IconOptions {
//!     size: 128,
//!     trim: "white".into(),
//!     ..Default::default()
//! };
//!
//! let img = decode(Path::new("logo.png"))?;
//! let icon = generate_icon(&options, &img)?;
//! icon.save("logo.128pc10.png")?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod colorcmp;
pub mod error;
pub mod icon;
pub mod names;
pub mod output;
pub mod placeholder;
pub mod resolve;
pub mod round;
pub mod scan;
pub mod text;
pub mod trim;

pub use anyhow::Result;
pub use error::IconError;
pub use icon::generate_icon;
pub use placeholder::{generate_placeholder, parse_placeholder_size};
pub use scan::{collect_files, decode, DecodedImage};
pub use text::{fit_text, FontFit, FontMetrics};

use image::Rgba;
use resolve::{AUTO_COLOR, BACKGROUND_DEFAULT_COLOR, TRANSPARENT_COLOR};
use rgb::RGBA8;

pub(crate) fn to_pixel(c: RGBA8) -> Rgba<u8> {
    Rgba([c.r, c.g, c.b, c.a])
}

/// Options for icon generation
#[derive(Debug, Clone)]
pub struct IconOptions {
    /// Output edge length in pixels (default: 200)
    pub size: u32,
    /// Background color spec (default: `auto,#f1f5f9`)
    pub background: String,
    /// Comma-separated trim color specs; empty disables trimming
    /// (default: `transparent`)
    pub trim: String,
    /// Padding on every side, percent of the size (default: 10)
    pub padding: u32,
    /// Source corner rounding applied before compositing, percent (default: 0)
    pub src_round: u32,
    /// Additional x-axis shift, percent of the size (default: 0)
    pub pad_x: i32,
    /// Additional y-axis shift, percent of the size (default: 0)
    pub pad_y: i32,
}

impl Default for IconOptions {
    fn default() -> Self {
        Self {
            size: 200,
            background: format!("{AUTO_COLOR},{BACKGROUND_DEFAULT_COLOR}"),
            trim: TRANSPARENT_COLOR.to_string(),
            padding: 10,
            src_round: 0,
            pad_x: 0,
            pad_y: 0,
        }
    }
}

/// Options for placeholder tile generation
#[derive(Debug, Clone)]
pub struct PlaceholderOptions {
    /// Tile width in pixels
    pub width: u32,
    /// Tile height in pixels
    pub height: u32,
    /// Background color spec; `auto` picks a random design color
    pub background: String,
    /// Tile text; empty renders the dimension string, `<none>` renders
    /// no text at all
    pub text: String,
    /// Padding reserved around the text, percent of each dimension
    pub padding: u32,
    /// Additional x-axis shift of the text, percent of the width
    pub pad_x: i32,
    /// Additional y-axis shift of the text, percent of the height
    pub pad_y: i32,
}

impl Default for PlaceholderOptions {
    fn default() -> Self {
        Self {
            width: 200,
            height: 200,
            background: AUTO_COLOR.to_string(),
            text: String::new(),
            padding: 10,
            pad_x: 0,
            pad_y: 0,
        }
    }
}
