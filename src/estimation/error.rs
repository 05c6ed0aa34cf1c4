use crate::core::{ClassifyError, SamplerError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EstimationError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error(transparent)]
    Sampler(#[from] SamplerError),

    #[error("classifying pixel ({x}, {y}) failed")]
    Classifier {
        x: u32,
        y: u32,
        #[source]
        source: ClassifyError,
    },
}

impl EstimationError {
    #[inline]
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument(_))
    }
}
