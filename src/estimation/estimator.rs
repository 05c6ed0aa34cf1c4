use crate::estimation::{EstimationError, EstimationRequest, EstimationResult};

/// Estimates stained area for a single request.
///
/// Implementations own whatever randomness they need, so one instance can
/// serve a sequence of requests without outside coordination.
pub trait AreaEstimator {
    /// Runs one estimation to completion.
    fn estimate(
        &mut self,
        request: &EstimationRequest<'_>,
    ) -> Result<EstimationResult, EstimationError>;
}
