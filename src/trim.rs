//! Border trimming: the minimal bounding rectangle left after stripping
//! rows and columns that contain nothing but trim colors.

use image::{GenericImageView, Rgba};
use rgb::RGBA8;

use crate::resolve::sample;

/// A min-inclusive/max-exclusive pixel rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds {
    pub min_x: u32,
    pub min_y: u32,
    pub max_x: u32,
    pub max_y: u32,
}

impl Bounds {
    pub fn of_image(w: u32, h: u32) -> Self {
        Bounds { min_x: 0, min_y: 0, max_x: w, max_y: h }
    }

    pub fn width(&self) -> u32 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> u32 {
        self.max_y - self.min_y
    }
}

// Matching happens on alpha-premultiplied channels, so `transparent`
// matches every fully transparent pixel no matter its RGB.
fn premultiply(c: RGBA8) -> [u16; 4] {
    let a = c.a as u16;
    [
        c.r as u16 * a / 255,
        c.g as u16 * a / 255,
        c.b as u16 * a / 255,
        a,
    ]
}

/// Finds the content bounds of `img` after trimming `trim` colors.
///
/// Each of the four edges is searched independently: a column/row is
/// consumed while every one of its pixels exactly matches a trim color.
/// An empty trim set returns the full image bounds. `None` means every
/// pixel matched, i.e. the image is fully trimmed.
pub fn trimmed_bounds<I>(img: &I, trim: &[RGBA8]) -> Option<Bounds>
where
    I: GenericImageView<Pixel = Rgba<u8>>,
{
    let (w, h) = img.dimensions();
    if trim.is_empty() {
        return Some(Bounds::of_image(w, h));
    }
    if w == 0 || h == 0 {
        return None;
    }

    let trim: Vec<[u16; 4]> = trim.iter().map(|&c| premultiply(c)).collect();
    let is_content = |x: u32, y: u32| !trim.contains(&premultiply(sample(img.get_pixel(x, y))));

    let min_x = (0..w).find(|&x| (0..h).any(|y| is_content(x, y)))?;
    let min_y = (0..h).find(|&y| (0..w).any(|x| is_content(x, y)))?;
    let max_x = (0..w).rev().find(|&x| (0..h).any(|y| is_content(x, y)))? + 1;
    let max_y = (0..h).rev().find(|&y| (0..w).any(|x| is_content(x, y)))? + 1;

    Some(Bounds { min_x, min_y, max_x, max_y })
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::RgbaImage;

    const WHITE: RGBA8 = RGBA8 { r: 255, g: 255, b: 255, a: 255 };
    const RED: RGBA8 = RGBA8 { r: 255, g: 0, b: 0, a: 255 };
    const TRANSPARENT: RGBA8 = RGBA8 { r: 0, g: 0, b: 0, a: 0 };

    fn px(c: RGBA8) -> Rgba<u8> {
        Rgba([c.r, c.g, c.b, c.a])
    }

    /// A 5x5 image whose outermost rows/columns are white with a red
    /// interior.
    fn white_frame() -> RgbaImage {
        let mut img = RgbaImage::from_pixel(5, 5, px(WHITE));
        for y in 1..4 {
            for x in 1..4 {
                img.put_pixel(x, y, px(RED));
            }
        }
        img
    }

    #[test]
    fn test_trim_white_frame() {
        let bounds = trimmed_bounds(&white_frame(), &[WHITE]).unwrap();
        assert_eq!(bounds, Bounds { min_x: 1, min_y: 1, max_x: 4, max_y: 4 });
        assert_eq!((bounds.width(), bounds.height()), (3, 3));
    }

    #[test]
    fn test_trim_is_idempotent() {
        let img = white_frame();
        let first = trimmed_bounds(&img, &[WHITE]).unwrap();
        let cropped = image::imageops::crop_imm(&img, first.min_x, first.min_y, first.width(), first.height())
            .to_image();
        let second = trimmed_bounds(&cropped, &[WHITE]).unwrap();
        assert_eq!(second, Bounds::of_image(first.width(), first.height()));
    }

    #[test]
    fn test_empty_trim_set_is_a_noop() {
        let img = white_frame();
        assert_eq!(trimmed_bounds(&img, &[]), Some(Bounds::of_image(5, 5)));
    }

    #[test]
    fn test_fully_trimmed_image() {
        let img = RgbaImage::from_pixel(4, 4, px(WHITE));
        assert_eq!(trimmed_bounds(&img, &[WHITE]), None);
    }

    #[test]
    fn test_untrimmed_image_keeps_full_bounds() {
        let img = RgbaImage::from_pixel(4, 4, px(RED));
        assert_eq!(trimmed_bounds(&img, &[WHITE]), Some(Bounds::of_image(4, 4)));
    }

    #[test]
    fn test_multiple_trim_colors() {
        let mut img = RgbaImage::from_pixel(6, 3, px(WHITE));
        // White column, transparent column, content, content, white, white.
        for y in 0..3 {
            img.put_pixel(1, y, px(TRANSPARENT));
            img.put_pixel(2, y, px(RED));
            img.put_pixel(3, y, px(RED));
        }
        let bounds = trimmed_bounds(&img, &[WHITE, TRANSPARENT]).unwrap();
        assert_eq!(bounds, Bounds { min_x: 2, min_y: 0, max_x: 4, max_y: 3 });
    }

    #[test]
    fn test_transparent_matches_any_fully_transparent_pixel() {
        let mut img = RgbaImage::from_pixel(3, 3, px(RED));
        // Transparent-but-red pixels on the left column must still trim.
        for y in 0..3 {
            img.put_pixel(0, y, Rgba([255, 0, 0, 0]));
        }
        let bounds = trimmed_bounds(&img, &[TRANSPARENT]).unwrap();
        assert_eq!(bounds, Bounds { min_x: 1, min_y: 0, max_x: 3, max_y: 3 });
    }

    #[test]
    fn test_trim_matching_is_exact_per_channel() {
        let almost_white = RGBA8 { r: 254, g: 255, b: 255, a: 255 };
        let mut img = RgbaImage::from_pixel(3, 3, px(RED));
        for y in 0..3 {
            img.put_pixel(0, y, px(almost_white));
        }
        // Off-by-one channel values are not white and must survive.
        assert_eq!(trimmed_bounds(&img, &[WHITE]), Some(Bounds::of_image(3, 3)));
    }
}
