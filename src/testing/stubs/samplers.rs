use crate::core::{PointSampler, SamplerError};
use std::collections::VecDeque;

/// Returns the same value for every draw.
pub struct ConstantSampler {
    value: u32,
    draws: u64,
}

impl ConstantSampler {
    pub fn new(value: u32) -> Self {
        Self { value, draws: 0 }
    }

    pub fn draws(&self) -> u64 {
        self.draws
    }
}

impl PointSampler for ConstantSampler {
    fn sample_index(&mut self, _bound: u32) -> Result<u32, SamplerError> {
        self.draws += 1;
        Ok(self.value)
    }
}

/// Replays a fixed list of draws, then reports exhaustion.
pub struct ScriptedSampler {
    values: VecDeque<u32>,
}

impl ScriptedSampler {
    pub fn new<I: IntoIterator<Item = u32>>(values: I) -> Self {
        Self {
            values: values.into_iter().collect(),
        }
    }
}

impl PointSampler for ScriptedSampler {
    fn sample_index(&mut self, _bound: u32) -> Result<u32, SamplerError> {
        self.values.pop_front().ok_or(SamplerError::Exhausted)
    }
}
