//! Conversion between image files and normalized pixel grids.

use std::{fs, io::Cursor, path::Path};

use image::{
    error::{ParameterError, ParameterErrorKind},
    DynamicImage, GenericImageView, ImageBuffer, ImageError, ImageFormat,
};
use ndarray::Array3;
use tracing::{debug, warn};

use crate::error::{Result, TintError};

/// Channel values in `[0, 1]`, laid out as `(height, width, channels)`.
pub type PixelGrid = Array3<f32>;

/// Loads `path` and normalizes every 8-bit sample into `[0, 1]`.
///
/// The channel count follows the source: 1 (L), 2 (LA), 3 (RGB) or 4 (RGBA).
/// Deeper sources are reduced to 8 bits per channel first.
pub fn decode<P: AsRef<Path>>(path: P) -> Result<PixelGrid> {
    let path = path.as_ref();

    let img = image::open(path).map_err(|source| match source {
        ImageError::IoError(ref e) if e.kind() == std::io::ErrorKind::NotFound => {
            TintError::InputNotFound(path.to_path_buf())
        }
        source => TintError::Decode {
            path: path.to_path_buf(),
            source,
        },
    })?;

    debug!(
        "Decoded {} as {:?} ({}x{})",
        path.display(),
        img.color(),
        img.width(),
        img.height()
    );

    Ok(image_to_grid(&img))
}

fn image_to_grid(img: &DynamicImage) -> PixelGrid {
    let (width, height) = img.dimensions();
    let (channels, samples) = match img.color().channel_count() {
        1 => (1, img.to_luma8().into_raw()),
        2 => (2, img.to_luma_alpha8().into_raw()),
        3 => (3, img.to_rgb8().into_raw()),
        _ => (4, img.to_rgba8().into_raw()),
    };
    let width = width as usize;

    Array3::from_shape_fn((height as usize, width, channels), |(y, x, k)| {
        f32::from(samples[(y * width + x) * channels + k]) / 255.0
    })
}

/// Writes `grid` to `path`, picking the format from the file extension.
///
/// The whole file is encoded in memory before anything touches the disk,
/// so a failure never leaves a truncated output behind.
pub fn encode<P: AsRef<Path>>(grid: &PixelGrid, path: P) -> Result<()> {
    let path = path.as_ref();

    let format = ImageFormat::from_path(path)
        .map_err(|_| TintError::UnsupportedFormat(path.to_path_buf()))?;

    let img = grid_to_image(grid, path)?;

    let mut bytes = Vec::new();
    img.write_to(&mut Cursor::new(&mut bytes), format)
        .map_err(|source| TintError::Encode {
            path: path.to_path_buf(),
            source,
        })?;

    fs::write(path, &bytes).map_err(|source| TintError::Write {
        path: path.to_path_buf(),
        source,
    })?;

    debug!(
        "Encoded {} as {:?} ({} bytes)",
        path.display(),
        format,
        bytes.len()
    );

    Ok(())
}

fn grid_to_image(grid: &PixelGrid, path: &Path) -> Result<DynamicImage> {
    let (height, width, channels) = grid.dim();
    let (width, height) = (width as u32, height as u32);

    let out_of_range = grid.iter().filter(|v| !(0.0..=1.0).contains(*v)).count();
    if out_of_range > 0 {
        warn!("Clamping {out_of_range} samples outside [0, 1]");
    }

    let samples: Vec<u8> = grid.iter().map(|&v| denormalize(v)).collect();

    let img = match channels {
        1 => ImageBuffer::from_raw(width, height, samples).map(DynamicImage::ImageLuma8),
        2 => ImageBuffer::from_raw(width, height, samples).map(DynamicImage::ImageLumaA8),
        3 => ImageBuffer::from_raw(width, height, samples).map(DynamicImage::ImageRgb8),
        4 => ImageBuffer::from_raw(width, height, samples).map(DynamicImage::ImageRgba8),
        _ => None,
    };

    img.ok_or_else(|| TintError::Encode {
        path: path.to_path_buf(),
        source: ImageError::Parameter(ParameterError::from_kind(
            ParameterErrorKind::Generic(format!("cannot encode {channels} channels per pixel")),
        )),
    })
}

/// Scales a normalized sample back to 8 bits, rounding to nearest.
#[inline]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn denormalize(value: f32) -> u8 {
    (value * 255.0).round().clamp(0.0, 255.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb, RgbImage, Rgba, RgbaImage};
    use tempfile::TempDir;

    #[test]
    fn test_denormalize() {
        assert_eq!(denormalize(0.0), 0);
        assert_eq!(denormalize(0.5), 128);
        assert_eq!(denormalize(1.0), 255);
        assert_eq!(denormalize(65.0 / 255.0), 65);
    }

    #[test]
    fn test_denormalize_clamp() {
        assert_eq!(denormalize(-0.5), 0);
        assert_eq!(denormalize(3.0), 255);
    }

    #[test]
    fn test_decode_rgba_is_normalized() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("in.png");
        let mut img = RgbaImage::new(3, 2);
        img.put_pixel(2, 1, Rgba([255, 0, 51, 102]));
        img.save(&path).unwrap();

        let grid = decode(&path).unwrap();

        assert_eq!(grid.dim(), (2, 3, 4));
        assert_eq!(grid[[1, 2, 0]], 1.0);
        assert_eq!(grid[[1, 2, 1]], 0.0);
        assert!((grid[[1, 2, 2]] - 0.2).abs() < 1e-6);
        assert!((grid[[1, 2, 3]] - 0.4).abs() < 1e-6);
        assert_eq!(grid[[0, 0, 3]], 0.0);
    }

    #[test]
    fn test_decode_keeps_rgb_channel_count() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("in.png");
        RgbImage::from_pixel(4, 4, Rgb([10, 20, 30])).save(&path).unwrap();

        let grid = decode(&path).unwrap();

        assert_eq!(grid.dim(), (4, 4, 3));
    }

    #[test]
    fn test_decode_missing_file() {
        let dir = TempDir::new().unwrap();
        let result = decode(dir.path().join("nope.png"));

        assert!(matches!(result, Err(TintError::InputNotFound(_))));
    }

    #[test]
    fn test_decode_corrupt_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("broken.png");
        fs::write(&path, b"definitely not a png").unwrap();

        assert!(matches!(decode(&path), Err(TintError::Decode { .. })));
    }

    #[test]
    fn test_encode_writes_pixels() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("out.png");
        let mut grid = PixelGrid::zeros((1, 2, 4));
        grid[[0, 1, 0]] = 1.0;
        grid[[0, 1, 3]] = 1.5;

        encode(&grid, &path).unwrap();

        let img = image::open(&path).unwrap().to_rgba8();
        assert_eq!(img.dimensions(), (2, 1));
        assert_eq!(img.get_pixel(0, 0), &Rgba([0, 0, 0, 0]));
        assert_eq!(img.get_pixel(1, 0), &Rgba([255, 0, 0, 255]));
    }

    #[test]
    fn test_encode_unknown_extension() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("out.nope");

        let result = encode(&PixelGrid::zeros((1, 1, 4)), &path);

        assert!(matches!(result, Err(TintError::UnsupportedFormat(_))));
        assert!(!path.exists());
    }

    #[test]
    fn test_encode_rejected_by_encoder() {
        let dir = TempDir::new().unwrap();
        // ICO caps both dimensions at 256
        let path = dir.path().join("out.ico");

        let result = encode(&PixelGrid::zeros((300, 300, 4)), &path);

        assert!(matches!(result, Err(TintError::Encode { .. })));
        assert!(!path.exists());
    }

    #[test]
    fn test_encode_unknown_channel_count() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("out.png");

        let result = encode(&PixelGrid::zeros((2, 2, 5)), &path);

        assert!(matches!(result, Err(TintError::Encode { .. })));
        assert!(!path.exists());
    }

    #[test]
    fn test_encode_into_missing_directory() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing").join("out.png");

        let result = encode(&PixelGrid::zeros((2, 2, 4)), &path);

        assert!(matches!(result, Err(TintError::Write { .. })));
        assert!(!path.exists());
    }
}
