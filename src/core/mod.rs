mod classifier;
mod dimensions;
mod sampler;

pub use classifier::{ClassifyError, FnClassifier, PixelClassifier, is_pure_white};
pub use dimensions::ImageDimensions;
pub use sampler::{PointSampler, SamplerError, UniformSampler};
