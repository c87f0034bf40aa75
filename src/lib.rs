//! Upper-region sampling: random placement points above object surfaces

pub mod core;
pub mod math;
pub mod scene;
pub mod sampling;

pub use crate::core::{Error, Result};
pub use sampling::{SamplerConfig, SampleTarget, UpperRegionSampler};
pub use scene::{ObjectSelector, Scene, SceneObject};
