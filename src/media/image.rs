// SPDX-License-Identifier: MPL-2.0
//! Image loading and decoding (PNG, JPEG, GIF, SVG, etc.).

use crate::error::{Error, Result};
use crate::ui::zoom_pan::BaseImageDimensions;
use iced::widget::image;
use image_rs::{GenericImageView, ImageError, ImageReader};
use resvg::usvg;
use std::fs;
use std::path::Path;

#[derive(Debug, Clone)]
pub struct ImageData {
    pub handle: image::Handle,
    pub width: u32,
    pub height: u32,
}

impl ImageData {
    #[must_use]
    pub fn from_rgba(width: u32, height: u32, pixels: Vec<u8>) -> Self {
        Self {
            handle: image::Handle::from_rgba(width, height, pixels),
            width,
            height,
        }
    }

    /// Wraps already-encoded bytes (PNG from the SVG rasterizer).
    #[must_use]
    pub fn from_encoded(width: u32, height: u32, bytes: Vec<u8>) -> Self {
        Self {
            handle: image::Handle::from_bytes(bytes),
            width,
            height,
        }
    }

    /// Natural size used as the base for zooming.
    #[must_use]
    pub fn dimensions(&self) -> BaseImageDimensions {
        BaseImageDimensions::new(f64::from(self.width), f64::from(self.height))
    }
}

/// Load an image from the given path and return its data.
///
/// Raster formats are decoded with the `image` crate; the file handle only
/// lives for the duration of the decode. SVG files are rasterized with resvg.
///
/// # Errors
///
/// Returns an error if:
/// - The file cannot be opened or read ([`Error::Io`])
/// - The content is not a supported image ([`Error::Decode`])
/// - For SVG files: parsing fails or dimensions are zero ([`Error::Svg`])
pub fn load_image<P: AsRef<Path>>(path: P) -> Result<ImageData> {
    let path = path.as_ref();
    let extension = path.extension().and_then(|s| s.to_str()).unwrap_or("");

    if extension.eq_ignore_ascii_case("svg") {
        return load_svg(path);
    }

    let img = ImageReader::open(path)?.with_guessed_format()?.decode()?;
    let (width, height) = img.dimensions();
    let pixels = img.to_rgba8().into_vec();

    Ok(ImageData::from_rgba(width, height, pixels))
}

fn load_svg(path: &Path) -> Result<ImageData> {
    let svg_data = fs::read(path)?;
    let tree = usvg::Tree::from_data(&svg_data, &usvg::Options::default())
        .map_err(|e| Error::Svg(e.to_string()))?;

    let pixmap_size = tree.size().to_int_size();
    let width = pixmap_size.width();
    let height = pixmap_size.height();
    if width == 0 || height == 0 {
        return Err(Error::Svg("SVG has empty dimensions".into()));
    }

    let mut pixmap = tiny_skia::Pixmap::new(width, height)
        .ok_or_else(|| Error::Svg("Failed to allocate SVG pixmap".into()))?;

    resvg::render(&tree, tiny_skia::Transform::default(), &mut pixmap.as_mut());

    let png_data = pixmap.encode_png().map_err(|e| Error::Svg(e.to_string()))?;

    Ok(ImageData::from_encoded(width, height, png_data))
}

impl From<ImageError> for Error {
    fn from(err: ImageError) -> Self {
        match err {
            ImageError::IoError(io) => Error::Io(io.to_string()),
            other => Error::Decode(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use image_rs::{Rgba, RgbaImage};
    use std::{fs, io};
    use tempfile::tempdir;

    #[test]
    fn load_png_image_returns_expected_dimensions() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let image_path = temp_dir.path().join("sample.png");

        let image = RgbaImage::from_pixel(4, 2, Rgba([255, 0, 0, 255]));
        image
            .save(&image_path)
            .expect("failed to write temporary png");

        let data = load_image(&image_path).expect("png should load successfully");
        assert_eq!(data.width, 4);
        assert_eq!(data.height, 2);
        assert_eq!(data.dimensions(), BaseImageDimensions::new(4.0, 2.0));
    }

    #[test]
    fn load_detects_format_from_content() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let png_path = temp_dir.path().join("sample.png");
        RgbaImage::from_pixel(3, 5, Rgba([0, 0, 255, 255]))
            .save(&png_path)
            .expect("failed to write temporary png");

        let renamed = temp_dir.path().join("sample.dat");
        fs::rename(&png_path, &renamed).expect("failed to rename");

        let data = load_image(&renamed).expect("content sniffing should find png");
        assert_eq!((data.width, data.height), (3, 5));
    }

    #[test]
    fn load_svg_image_rasterizes_successfully() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let svg_path = temp_dir.path().join("sample.svg");
        let svg_content = r#"
            <svg xmlns="http://www.w3.org/2000/svg" width="6" height="3">
                <rect width="6" height="3" fill="blue" />
            </svg>
        "#;
        fs::write(&svg_path, svg_content.trim()).expect("failed to write svg");

        let data = load_image(&svg_path).expect("svg should load successfully");
        assert_eq!(data.width, 6);
        assert_eq!(data.height, 3);
    }

    #[test]
    fn load_missing_image_returns_io_error() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let missing_path = temp_dir.path().join("does_not_exist.png");

        match load_image(&missing_path) {
            Err(Error::Io(_)) => {}
            other => panic!("expected Io error, got {other:?}"),
        }
    }

    #[test]
    fn load_invalid_png_bytes_returns_decode_error() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let bad_path = temp_dir.path().join("invalid.png");
        fs::write(&bad_path, b"not a png").expect("failed to write invalid data");

        match load_image(&bad_path) {
            Err(Error::Decode(message)) => assert!(!message.is_empty()),
            other => panic!("expected Decode error for invalid png, got {other:?}"),
        }
    }

    #[test]
    fn load_invalid_svg_returns_svg_error() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let bad_svg_path = temp_dir.path().join("broken.svg");
        fs::write(&bad_svg_path, "<svg>oops").expect("failed to write invalid svg");

        match load_image(&bad_svg_path) {
            Err(Error::Svg(message)) => assert!(!message.is_empty()),
            other => panic!("expected Svg error, got {other:?}"),
        }
    }

    #[test]
    fn image_io_error_maps_to_io_variant() {
        let image_error = ImageError::IoError(io::Error::other("read failed"));
        match Error::from(image_error) {
            Error::Io(message) => assert!(message.contains("read failed")),
            other => panic!("expected Io variant from ImageError, got {other:?}"),
        }
    }
}
