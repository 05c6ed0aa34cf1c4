use crate::core::{PointSampler, SamplerError, UniformSampler};
use crate::estimation::{
    AreaEstimator, EstimationError, EstimationRequest, EstimationResult, ResultId,
};
use chrono::Utc;
use tracing::{debug, warn};

/// Estimates the stained area of `request.image` by uniform point sampling.
///
/// Draws `sample_count` points with replacement over the bounding box, x
/// first then y, classifies each one and scales the hit ratio by
/// `width * height`. Any sampler or classifier failure aborts the run.
pub fn estimate<S: PointSampler + ?Sized>(
    request: &EstimationRequest<'_>,
    sampler: &mut S,
) -> Result<EstimationResult, EstimationError> {
    if let Err(e) = request.validate() {
        warn!(error = %e, "rejected estimation request");
        return Err(e);
    }

    let dims = request.dimensions();
    debug!(
        width = dims.width,
        height = dims.height,
        samples = request.sample_count,
        source = %request.source_ref,
        "sampling"
    );

    let mut points_inside = 0u64;
    for _ in 0..request.sample_count {
        let x = draw(sampler, dims.width)?;
        let y = draw(sampler, dims.height)?;
        let stained = request
            .image
            .is_stained(x, y)
            .map_err(|source| EstimationError::Classifier { x, y, source })?;
        if stained {
            points_inside += 1;
        }
    }

    let estimated_area = dims.area() as f64 * points_inside as f64 / request.sample_count as f64;

    Ok(EstimationResult::new(
        ResultId::next(),
        request.sample_count,
        points_inside,
        estimated_area,
        Utc::now(),
        dims,
        request.source_ref.clone(),
    ))
}

#[inline]
fn draw<S: PointSampler + ?Sized>(sampler: &mut S, bound: u32) -> Result<u32, SamplerError> {
    let value = sampler.sample_index(bound)?;
    if value >= bound {
        return Err(SamplerError::OutOfRange { value, bound });
    }
    Ok(value)
}

/// [`AreaEstimator`] that owns its random source.
#[derive(Debug)]
pub struct MonteCarloEstimator<S = UniformSampler> {
    sampler: S,
}

impl MonteCarloEstimator<UniformSampler> {
    pub fn seeded(seed: u64) -> Self {
        Self::new(UniformSampler::seeded(seed))
    }

    pub fn from_os_rng() -> Self {
        Self::new(UniformSampler::from_os_rng())
    }
}

impl<S: PointSampler> MonteCarloEstimator<S> {
    pub fn new(sampler: S) -> Self {
        Self { sampler }
    }

    pub fn sampler(&self) -> &S {
        &self.sampler
    }
}

impl<S: PointSampler> AreaEstimator for MonteCarloEstimator<S> {
    fn estimate(
        &mut self,
        request: &EstimationRequest<'_>,
    ) -> Result<EstimationResult, EstimationError> {
        estimate(request, &mut self.sampler)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{ClassifyError, FnClassifier, ImageDimensions, PixelClassifier};
    use crate::testing::{
        ConstantSampler, ScriptedSampler, checkerboard, half_white, two_by_two_corner,
    };
    use std::cell::Cell;

    #[test]
    fn corner_pixel_forced_draws_fill_whole_box() {
        let img = two_by_two_corner();
        let mut sampler = ConstantSampler::new(0);
        let r = estimate(&EstimationRequest::new(&img, 100), &mut sampler).unwrap();
        assert_eq!(r.points_inside(), 100);
        assert_eq!(r.estimated_area(), 4.0);
        assert_eq!(r.sample_count(), 100);
        assert_eq!(r.image_dimensions(), ImageDimensions::new(2, 2));
    }

    #[test]
    fn all_stained_gives_full_area() {
        let img = FnClassifier::new(37, 11, |_, _| true);
        let mut est = MonteCarloEstimator::seeded(5);
        for n in [1u64, 2, 7, 1000] {
            let r = est.estimate(&EstimationRequest::new(&img, n)).unwrap();
            assert_eq!(r.points_inside(), n);
            assert_eq!(r.estimated_area(), 37.0 * 11.0);
        }
    }

    #[test]
    fn none_stained_gives_zero() {
        let img = FnClassifier::new(37, 11, |_, _| false);
        let mut est = MonteCarloEstimator::seeded(5);
        for n in [1u64, 3, 1000] {
            let r = est.estimate(&EstimationRequest::new(&img, n)).unwrap();
            assert_eq!(r.points_inside(), 0);
            assert_eq!(r.estimated_area(), 0.0);
        }
    }

    #[test]
    fn counts_and_area_stay_in_bounds() {
        let img = checkerboard(9, 5);
        let area = img.dimensions().area() as f64;
        for seed in 0..20u64 {
            let mut est = MonteCarloEstimator::seeded(seed);
            let r = est.estimate(&EstimationRequest::new(&img, 257)).unwrap();
            assert!(r.points_inside() <= r.sample_count());
            assert!(r.estimated_area() >= 0.0 && r.estimated_area() <= area);
            assert!(r.estimated_area().is_finite());
        }
    }

    #[test]
    fn same_seed_reproduces_the_estimate() {
        let img = half_white(64, 48);
        let req = EstimationRequest::new(&img, 3000);
        let a = MonteCarloEstimator::seeded(77).estimate(&req).unwrap();
        let b = MonteCarloEstimator::seeded(77).estimate(&req).unwrap();
        assert_eq!(a.points_inside(), b.points_inside());
        assert_eq!(a.estimated_area(), b.estimated_area());
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn half_white_converges_within_ten_percent() {
        let img = half_white(200, 100);
        let truth = 200.0 * 100.0 / 2.0;
        let mut est = MonteCarloEstimator::seeded(31337);
        let r = est.estimate(&EstimationRequest::new(&img, 10_000)).unwrap();
        let rel = (r.estimated_area() - truth).abs() / truth;
        assert!(rel < 0.10, "estimate={} truth={truth}", r.estimated_area());
        assert!((r.fraction_inside() - 0.5).abs() < 0.05);
    }

    #[test]
    fn area_uses_real_division() {
        // 1 of 3 points inside a 3x1 box: exactly one pixel, not zero.
        let img = FnClassifier::new(3, 1, |x, _| x == 0);
        let mut sampler = ScriptedSampler::new([0, 0, 1, 0, 2, 0]);
        let r = estimate(&EstimationRequest::new(&img, 3), &mut sampler).unwrap();
        assert_eq!(r.points_inside(), 1);
        assert!((r.estimated_area() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn repeated_coordinates_are_classified_every_time() {
        let calls = Cell::new(0u32);
        let img = FnClassifier::new(4, 4, |_, _| {
            calls.set(calls.get() + 1);
            true
        });
        let mut sampler = ConstantSampler::new(3);
        let r = estimate(&EstimationRequest::new(&img, 25), &mut sampler).unwrap();
        assert_eq!(calls.get(), 25);
        assert_eq!(r.points_inside(), 25);
    }

    #[test]
    fn draws_x_then_y() {
        let img = FnClassifier::new(5, 3, |x, y| x == 4 && y == 2);
        let mut sampler = ScriptedSampler::new([4, 2, 2, 4]);
        let err = estimate(&EstimationRequest::new(&img, 2), &mut sampler).unwrap_err();
        // second point asks y=4 in a height-3 image
        assert!(matches!(
            err,
            EstimationError::Sampler(SamplerError::OutOfRange { value: 4, bound: 3 })
        ));
    }

    #[test]
    fn invalid_requests_never_produce_nan() {
        let img = FnClassifier::new(2, 2, |_, _| true);
        let mut sampler = ConstantSampler::new(0);
        let err = estimate(&EstimationRequest::new(&img, 0), &mut sampler).unwrap_err();
        assert!(err.is_invalid_argument());

        let flat = FnClassifier::new(0, 2, |_, _| true);
        let err = estimate(&EstimationRequest::new(&flat, 10), &mut sampler).unwrap_err();
        assert!(err.is_invalid_argument());

        let flat = FnClassifier::new(2, 0, |_, _| true);
        let err = estimate(&EstimationRequest::new(&flat, 10), &mut sampler).unwrap_err();
        assert!(err.is_invalid_argument());
    }

    #[test]
    fn exhausted_sampler_aborts_the_run() {
        let img = FnClassifier::new(2, 2, |_, _| true);
        let mut sampler = ScriptedSampler::new([0, 0, 1]);
        let err = estimate(&EstimationRequest::new(&img, 5), &mut sampler).unwrap_err();
        assert!(matches!(err, EstimationError::Sampler(SamplerError::Exhausted)));
    }

    struct Failing;

    impl PixelClassifier for Failing {
        fn dimensions(&self) -> ImageDimensions {
            ImageDimensions::new(2, 2)
        }

        fn is_stained(&self, x: u32, _y: u32) -> Result<bool, ClassifyError> {
            if x == 1 {
                Err(ClassifyError::Backend("pixel read failed".into()))
            } else {
                Ok(true)
            }
        }
    }

    #[test]
    fn classifier_failure_propagates_with_coordinate() {
        let mut sampler = ScriptedSampler::new([0, 0, 1, 1]);
        let err = estimate(&EstimationRequest::new(&Failing, 2), &mut sampler).unwrap_err();
        match err {
            EstimationError::Classifier { x, y, source } => {
                assert_eq!((x, y), (1, 1));
                assert!(matches!(source, ClassifyError::Backend(_)));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn source_ref_is_carried_to_the_result() {
        let img = FnClassifier::new(2, 2, |_, _| false);
        let mut est = MonteCarloEstimator::new(ConstantSampler::new(1));
        let req = EstimationRequest::new(&img, 4).with_source("drop.png");
        let r = est.estimate(&req).unwrap();
        assert_eq!(r.source_ref().as_str(), "drop.png");
        assert_eq!(est.sampler().draws(), 8);
    }
}
