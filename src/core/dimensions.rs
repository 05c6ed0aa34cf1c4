use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter, Result};

/// Width and height of a sampled image, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ImageDimensions {
    pub width: u32,
    pub height: u32,
}

impl ImageDimensions {
    #[inline]
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Bounding-box area, `width * height`. Cannot overflow for `u32` sides.
    #[inline]
    pub const fn area(&self) -> u64 {
        self.width as u64 * self.height as u64
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    #[inline]
    pub const fn contains(&self, x: u32, y: u32) -> bool {
        x < self.width && y < self.height
    }
}

impl Display for ImageDimensions {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "{} x {}", self.width, self.height)
    }
}
