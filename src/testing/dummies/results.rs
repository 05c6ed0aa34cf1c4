use crate::core::ImageDimensions;
use crate::estimation::{EstimationResult, ResultId, SourceRef};
use chrono::{TimeZone, Utc};

/// Result with a fixed id and a timestamp of 2024-05-01 09:`minute` UTC.
pub fn fixed_result(
    id: u64,
    points_inside: u64,
    sample_count: u64,
    width: u32,
    height: u32,
    minute: u32,
) -> EstimationResult {
    let dims = ImageDimensions::new(width, height);
    let area = dims.area() as f64 * points_inside as f64 / sample_count as f64;
    EstimationResult::new(
        ResultId::from_raw(id),
        sample_count,
        points_inside,
        area,
        Utc.with_ymd_and_hms(2024, 5, 1, 9, minute, 0).unwrap(),
        dims,
        SourceRef::new(format!("stain-{id}.png")),
    )
}
