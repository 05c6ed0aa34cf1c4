use crate::core::{FnClassifier, PixelClassifier};
use crate::imaging::StainImage;
use image::{Rgba, RgbaImage};

const WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);
const BLACK: Rgba<u8> = Rgba([0, 0, 0, 255]);

/// 2x2 image whose only white pixel is `(0, 0)`.
pub fn two_by_two_corner() -> StainImage {
    let mut buf = RgbaImage::from_pixel(2, 2, BLACK);
    buf.put_pixel(0, 0, WHITE);
    StainImage::from_rgba(buf)
}

/// Left half (columns `x < width / 2`) white, the rest black.
pub fn half_white(width: u32, height: u32) -> StainImage {
    let buf = RgbaImage::from_fn(width, height, |x, _| {
        if x < width / 2 { WHITE } else { BLACK }
    });
    StainImage::from_rgba(buf)
}

pub fn checkerboard(width: u32, height: u32) -> impl PixelClassifier {
    FnClassifier::new(width, height, |x, y| (x + y) % 2 == 0)
}
