use crate::core::{ImageDimensions, PixelClassifier};
use crate::estimation::EstimationError;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::path::Path;

/// Opaque handle on the image a result was computed from (a path or a
/// label). Only used for display.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SourceRef(String);

impl SourceRef {
    pub fn new<S: Into<String>>(s: S) -> Self {
        Self(s.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for SourceRef {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for SourceRef {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&Path> for SourceRef {
    fn from(p: &Path) -> Self {
        Self(p.display().to_string())
    }
}

impl Display for SourceRef {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// One estimation job: which image, how many points.
pub struct EstimationRequest<'a> {
    pub image: &'a dyn PixelClassifier,
    pub sample_count: u64,
    pub source_ref: SourceRef,
}

impl<'a> EstimationRequest<'a> {
    pub fn new(image: &'a dyn PixelClassifier, sample_count: u64) -> Self {
        Self {
            image,
            sample_count,
            source_ref: SourceRef::default(),
        }
    }

    pub fn with_source<S: Into<SourceRef>>(mut self, source: S) -> Self {
        self.source_ref = source.into();
        self
    }

    #[inline]
    pub fn dimensions(&self) -> ImageDimensions {
        self.image.dimensions()
    }

    pub fn validate(&self) -> Result<(), EstimationError> {
        if self.sample_count == 0 {
            return Err(EstimationError::InvalidArgument(
                "sample count must be >= 1".into(),
            ));
        }
        let d = self.dimensions();
        if d.is_empty() {
            return Err(EstimationError::InvalidArgument(format!(
                "image must be at least 1 x 1, got {d}"
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::FnClassifier;

    #[test]
    fn well_formed_request_validates() {
        let img = FnClassifier::new(3, 4, |_, _| false);
        let req = EstimationRequest::new(&img, 1).with_source("scan.png");
        assert!(req.validate().is_ok());
        assert_eq!(req.dimensions(), ImageDimensions::new(3, 4));
        assert_eq!(req.source_ref.as_str(), "scan.png");
    }

    #[test]
    fn zero_samples_or_sides_are_rejected() {
        let img = FnClassifier::new(3, 4, |_, _| false);
        let err = EstimationRequest::new(&img, 0).validate().unwrap_err();
        assert!(err.is_invalid_argument());
        assert_eq!(err.to_string(), "invalid argument: sample count must be >= 1");

        let narrow = FnClassifier::new(0, 4, |_, _| false);
        let err = EstimationRequest::new(&narrow, 10).validate().unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid argument: image must be at least 1 x 1, got 0 x 4"
        );

        let flat = FnClassifier::new(3, 0, |_, _| false);
        let err = EstimationRequest::new(&flat, 10).validate().unwrap_err();
        assert!(err.is_invalid_argument());
        assert!(err.to_string().ends_with("got 3 x 0"));
    }

    #[test]
    fn source_ref_from_path_uses_display_form() {
        let s = SourceRef::from(Path::new("stains/a.png"));
        assert_eq!(s.to_string(), "stains/a.png");
        assert_eq!(SourceRef::default().as_str(), "");
    }
}
