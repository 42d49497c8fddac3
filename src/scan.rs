//! Input discovery and decoding.
//!
//! Directories are scanned one level deep; every file that the `image`
//! format registry can decode becomes a [`DecodedImage`]. Files that fail
//! to decode are reported by the caller and skipped.

use std::fs;
use std::path::{Path, PathBuf};

use image::DynamicImage;
use log::{debug, error};

use crate::error::IconError;

/// A fully decoded source image.
#[derive(Debug, Clone)]
pub struct DecodedImage {
    pub image: DynamicImage,
    pub width: u32,
    pub height: u32,
    pub path: PathBuf,
}

/// Expands `path` into candidate image files: the file itself, or the
/// files directly inside a directory. Scan errors are logged and yield an
/// empty list so other inputs keep processing.
pub fn collect_files(path: &Path) -> Vec<PathBuf> {
    let meta = match fs::metadata(path) {
        Ok(meta) => meta,
        Err(err) => {
            error!("error scanning {}: {err}", path.display());
            return Vec::new();
        }
    };
    if !meta.is_dir() {
        return vec![path.to_path_buf()];
    }

    let entries = match fs::read_dir(path) {
        Ok(entries) => entries,
        Err(err) => {
            error!("error scanning directory {}: {err}", path.display());
            return Vec::new();
        }
    };
    let mut files: Vec<PathBuf> = entries
        .flatten()
        .filter(|e| e.file_type().map(|t| t.is_file()).unwrap_or(false))
        .map(|e| e.path())
        .collect();
    files.sort();
    files
}

/// Decodes `path` into memory.
pub fn decode(path: &Path) -> Result<DecodedImage, IconError> {
    let image = image::open(path).map_err(|source| IconError::Decode {
        path: path.to_path_buf(),
        source,
    })?;
    let (width, height) = (image.width(), image.height());
    debug!("decoded {} ({width}x{height})", path.display());
    Ok(DecodedImage { image, width, height, path: path.to_path_buf() })
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::RgbaImage;

    #[test]
    fn test_collect_files_on_a_single_file() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("a.png");
        RgbaImage::from_pixel(2, 2, image::Rgba([1, 2, 3, 255])).save(&file).unwrap();
        assert_eq!(collect_files(&file), vec![file]);
    }

    #[test]
    fn test_collect_files_scans_directories_non_recursively() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("nested");
        fs::create_dir(&nested).unwrap();
        let a = dir.path().join("a.png");
        let b = dir.path().join("b.png");
        RgbaImage::from_pixel(2, 2, image::Rgba([0, 0, 0, 255])).save(&a).unwrap();
        RgbaImage::from_pixel(2, 2, image::Rgba([0, 0, 0, 255])).save(&b).unwrap();
        RgbaImage::from_pixel(2, 2, image::Rgba([0, 0, 0, 255]))
            .save(nested.join("c.png"))
            .unwrap();

        assert_eq!(collect_files(dir.path()), vec![a, b]);
    }

    #[test]
    fn test_collect_files_missing_path_is_empty() {
        assert!(collect_files(Path::new("/definitely/not/here")).is_empty());
    }

    #[test]
    fn test_decode_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("img.png");
        RgbaImage::from_pixel(3, 5, image::Rgba([9, 8, 7, 255])).save(&file).unwrap();

        let decoded = decode(&file).unwrap();
        assert_eq!((decoded.width, decoded.height), (3, 5));
        assert_eq!(decoded.path, file);
    }

    #[test]
    fn test_decode_rejects_non_images() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("not-an-image.txt");
        fs::write(&file, b"plain text").unwrap();
        assert!(matches!(decode(&file), Err(IconError::Decode { .. })));
    }
}
