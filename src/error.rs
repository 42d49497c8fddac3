use std::path::PathBuf;

use thiserror::Error;

/// Errors surfaced by the icon and placeholder pipelines.
///
/// Only per-image problems end up here; bad color specs are resolved
/// through fallback chains instead (see [`crate::resolve`]).
#[derive(Debug, Error)]
pub enum IconError {
    #[error("invalid hex color format: {0:?}")]
    InvalidHexColor(String),

    /// The pixel format has no settable representation to round.
    #[error("format not supported")]
    UnsupportedFormat,

    /// Placeholder text was requested but no font could be loaded.
    #[error("no usable font available")]
    FontUnavailable,

    #[error("failed to decode {}", .path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("failed to write {}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}
