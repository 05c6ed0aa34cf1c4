use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("malformed config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Settings for an interactive estimation session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SessionConfig {
    /// Points sampled when the user accepts the default.
    #[serde(default = "default_sample_count")]
    pub sample_count: u64,

    #[serde(default = "default_min_sample_count")]
    pub min_sample_count: u64,

    #[serde(default = "default_max_sample_count")]
    pub max_sample_count: u64,

    /// Point counts offered are multiples of this step.
    #[serde(default = "default_sample_step")]
    pub sample_step: u64,

    /// Fixed PRNG seed; OS entropy when absent.
    #[serde(default)]
    pub seed: Option<u64>,
}

fn default_sample_count() -> u64 {
    1000
}

fn default_min_sample_count() -> u64 {
    100
}

fn default_max_sample_count() -> u64 {
    10_000
}

fn default_sample_step() -> u64 {
    100
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            sample_count: default_sample_count(),
            min_sample_count: default_min_sample_count(),
            max_sample_count: default_max_sample_count(),
            sample_step: default_sample_step(),
            seed: None,
        }
    }
}

impl SessionConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        let cfg: Self = serde_json::from_str(text)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.min_sample_count == 0 {
            return Err(ConfigError::Invalid(
                "min_sample_count must be >= 1".into(),
            ));
        }
        if self.min_sample_count > self.max_sample_count {
            return Err(ConfigError::Invalid(format!(
                "min_sample_count ({}) exceeds max_sample_count ({})",
                self.min_sample_count, self.max_sample_count
            )));
        }
        if !(self.min_sample_count..=self.max_sample_count).contains(&self.sample_count) {
            return Err(ConfigError::Invalid(format!(
                "sample_count must be in [{}, {}]",
                self.min_sample_count, self.max_sample_count
            )));
        }
        if self.sample_step == 0 {
            return Err(ConfigError::Invalid("sample_step must be >= 1".into()));
        }
        Ok(())
    }

    /// Rounds `n` to the nearest step inside the configured bounds.
    pub fn snap_sample_count(&self, n: u64) -> u64 {
        let clamped = n.clamp(self.min_sample_count, self.max_sample_count);
        let offset = clamped - self.min_sample_count;
        let steps = offset.saturating_add(self.sample_step / 2) / self.sample_step;
        steps
            .checked_mul(self.sample_step)
            .and_then(|span| self.min_sample_count.checked_add(span))
            .map_or(self.max_sample_count, |n| n.min(self.max_sample_count))
    }
}
