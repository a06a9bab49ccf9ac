use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum TintError {
    #[error("input image not found: {}", .0.display())]
    InputNotFound(PathBuf),

    #[error("failed to decode {}: {source}", .path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("tint has {expected} channels but the image has {found}")]
    ShapeMismatch { expected: usize, found: usize },

    #[error("unsupported output format: {}", .0.display())]
    UnsupportedFormat(PathBuf),

    #[error("failed to encode {}: {source}", .path.display())]
    Encode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid hex color {0:?}")]
    InvalidHex(String),
}

pub type Result<T> = std::result::Result<T, TintError>;
