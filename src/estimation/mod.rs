mod error;
mod estimator;
mod monte_carlo;
mod request;
mod result;

pub use error::EstimationError;
pub use estimator::AreaEstimator;
pub use monte_carlo::{MonteCarloEstimator, estimate};
pub use request::{EstimationRequest, SourceRef};
pub use result::{EstimationResult, ResultId};
