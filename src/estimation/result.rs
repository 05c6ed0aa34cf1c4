use crate::core::ImageDimensions;
use crate::estimation::SourceRef;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt::{Display, Formatter, Result};
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_RESULT_ID: AtomicU64 = AtomicU64::new(1);

/// Process-unique, increasing identifier of an [`EstimationResult`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct ResultId(u64);

impl ResultId {
    pub(crate) fn next() -> Self {
        Self(NEXT_RESULT_ID.fetch_add(1, Ordering::Relaxed))
    }

    #[cfg(any(test, feature = "test-support"))]
    pub(crate) const fn from_raw(id: u64) -> Self {
        Self(id)
    }

    #[inline]
    pub fn get(self) -> u64 {
        self.0
    }
}

impl Display for ResultId {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "{}", self.0)
    }
}

/// Outcome of one Monte Carlo run. Read-only once built.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EstimationResult {
    id: ResultId,
    sample_count: u64,
    points_inside: u64,
    estimated_area: f64,
    created_at: DateTime<Utc>,
    image_dimensions: ImageDimensions,
    source_ref: SourceRef,
}

impl EstimationResult {
    pub(crate) fn new(
        id: ResultId,
        sample_count: u64,
        points_inside: u64,
        estimated_area: f64,
        created_at: DateTime<Utc>,
        image_dimensions: ImageDimensions,
        source_ref: SourceRef,
    ) -> Self {
        Self {
            id,
            sample_count,
            points_inside,
            estimated_area,
            created_at,
            image_dimensions,
            source_ref,
        }
    }

    pub fn id(&self) -> ResultId {
        self.id
    }

    pub fn sample_count(&self) -> u64 {
        self.sample_count
    }

    pub fn points_inside(&self) -> u64 {
        self.points_inside
    }

    /// Estimated stain area in square pixels, unrounded.
    pub fn estimated_area(&self) -> f64 {
        self.estimated_area
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn image_dimensions(&self) -> ImageDimensions {
        self.image_dimensions
    }

    pub fn source_ref(&self) -> &SourceRef {
        &self.source_ref
    }

    /// Share of sampled points that landed on the stain, in `[0, 1]`.
    pub fn fraction_inside(&self) -> f64 {
        self.points_inside as f64 / self.sample_count as f64
    }
}

impl Display for EstimationResult {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(
            f,
            "id={}, inside={}/{}, area={:.3}px², image={}",
            self.id,
            self.points_inside,
            self.sample_count,
            self.estimated_area,
            self.image_dimensions
        )
    }
}
