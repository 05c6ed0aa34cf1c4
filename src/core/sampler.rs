use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SamplerError {
    #[error("random source exhausted")]
    Exhausted,

    #[error("random source drew {value}, outside [0, {bound})")]
    OutOfRange { value: u32, bound: u32 },
}

/// Source of uniform integer draws used to place sample points.
///
/// Each call is one independent draw over `[0, bound)`. Estimation asks for
/// the x coordinate first and the y coordinate second, once per point.
pub trait PointSampler {
    fn sample_index(&mut self, bound: u32) -> Result<u32, SamplerError>;
}

impl<S: PointSampler + ?Sized> PointSampler for &mut S {
    #[inline]
    fn sample_index(&mut self, bound: u32) -> Result<u32, SamplerError> {
        (**self).sample_index(bound)
    }
}

/// [`PointSampler`] backed by any `rand` generator.
#[derive(Debug)]
pub struct UniformSampler<R = StdRng> {
    seed: Option<u64>,
    rng: R,
}

impl UniformSampler<StdRng> {
    /// Reproducible sampler: equal seeds give equal draw sequences.
    pub fn seeded(seed: u64) -> Self {
        Self {
            seed: Some(seed),
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn from_os_rng() -> Self {
        Self {
            seed: None,
            rng: StdRng::from_os_rng(),
        }
    }

    /// Seeded when `seed` is given, OS entropy otherwise.
    pub fn from_seed_option(seed: Option<u64>) -> Self {
        seed.map_or_else(Self::from_os_rng, Self::seeded)
    }
}

impl<R: Rng> UniformSampler<R> {
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }
}

impl<R: Rng> PointSampler for UniformSampler<R> {
    #[inline]
    fn sample_index(&mut self, bound: u32) -> Result<u32, SamplerError> {
        if bound == 0 {
            return Err(SamplerError::OutOfRange { value: 0, bound });
        }
        Ok(self.rng.random_range(0..bound))
    }
}
