pub mod samplers;
pub mod scripted_driver;

pub use samplers::{ConstantSampler, ScriptedSampler};
pub use scripted_driver::{Answer, ScriptedDriver};
