use crate::core::{ClassifyError, ImageDimensions, PixelClassifier, is_pure_white};
use image::{ImageError, RgbaImage};
use std::path::Path;
use tracing::debug;

/// File extensions offered when asking for an image to analyze.
pub const SUPPORTED_EXTENSIONS: &[&str] = &[
    "png", "jpg", "jpeg", "bmp", "gif", "tif", "tiff", "webp",
];

/// Decoded raster image classified with the pure-white stain rule.
#[derive(Debug, Clone)]
pub struct StainImage {
    pixels: RgbaImage,
}

impl StainImage {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, ImageError> {
        let path = path.as_ref();
        let pixels = image::open(path)?.to_rgba8();
        debug!(
            path = %path.display(),
            width = pixels.width(),
            height = pixels.height(),
            "decoded image"
        );
        Ok(Self { pixels })
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, ImageError> {
        let pixels = image::load_from_memory(bytes)?.to_rgba8();
        Ok(Self { pixels })
    }

    pub fn from_rgba(pixels: RgbaImage) -> Self {
        Self { pixels }
    }

    pub fn pixels(&self) -> &RgbaImage {
        &self.pixels
    }

    /// Exact number of stained pixels, for comparison with an estimate.
    pub fn stained_pixel_count(&self) -> u64 {
        self.pixels
            .pixels()
            .filter(|p| is_pure_white([p[0], p[1], p[2]]))
            .count() as u64
    }
}

impl PixelClassifier for StainImage {
    fn dimensions(&self) -> ImageDimensions {
        ImageDimensions::new(self.pixels.width(), self.pixels.height())
    }

    fn is_stained(&self, x: u32, y: u32) -> Result<bool, ClassifyError> {
        let p = self
            .pixels
            .get_pixel_checked(x, y)
            .ok_or_else(|| ClassifyError::OutOfBounds {
                x,
                y,
                dimensions: self.dimensions(),
            })?;
        Ok(is_pure_white([p[0], p[1], p[2]]))
    }
}
