use crate::core::ImageDimensions;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClassifyError {
    #[error("pixel ({x}, {y}) lies outside a {dimensions} image")]
    OutOfBounds {
        x: u32,
        y: u32,
        dimensions: ImageDimensions,
    },

    #[error("pixel source failed: {0}")]
    Backend(String),
}

/// Read-only view of a decoded image that can tell stained pixels apart.
///
/// Implementations must be deterministic: asking twice for the same
/// coordinate returns the same answer for the lifetime of the value.
/// Callers only ask for coordinates inside [`dimensions`].
pub trait PixelClassifier {
    /// Size of the sampled bounding box.
    fn dimensions(&self) -> ImageDimensions;

    /// Whether the pixel at `(x, y)` belongs to the stain.
    fn is_stained(&self, x: u32, y: u32) -> Result<bool, ClassifyError>;
}

/// Stain rule: red, green and blue are all exactly 255. Alpha is ignored.
#[inline]
pub const fn is_pure_white(rgb: [u8; 3]) -> bool {
    rgb[0] == u8::MAX && rgb[1] == u8::MAX && rgb[2] == u8::MAX
}

/// Adapts a plain `Fn(x, y) -> bool` into a [`PixelClassifier`].
pub struct FnClassifier<F> {
    dimensions: ImageDimensions,
    f: F,
}

impl<F> FnClassifier<F>
where
    F: Fn(u32, u32) -> bool,
{
    pub fn new(width: u32, height: u32, f: F) -> Self {
        Self {
            dimensions: ImageDimensions::new(width, height),
            f,
        }
    }
}

impl<F> PixelClassifier for FnClassifier<F>
where
    F: Fn(u32, u32) -> bool,
{
    fn dimensions(&self) -> ImageDimensions {
        self.dimensions
    }

    fn is_stained(&self, x: u32, y: u32) -> Result<bool, ClassifyError> {
        if !self.dimensions.contains(x, y) {
            return Err(ClassifyError::OutOfBounds {
                x,
                y,
                dimensions: self.dimensions,
            });
        }
        Ok((self.f)(x, y))
    }
}
