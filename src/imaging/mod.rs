mod stain_image;

pub use stain_image::{SUPPORTED_EXTENSIONS, StainImage};
