//! Sampler configuration.

use std::path::Path;

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::core::{Error, Result};
use crate::scene::ObjectSelector;

/// Configuration for an [`UpperRegionSampler`](super::UpperRegionSampler).
///
/// Every field has a default, so a JSON config only needs the keys it changes.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SamplerConfig {
    /// Objects to sample above
    pub to_sample_on: ObjectSelector,
    /// Minimum distance from the selected face
    pub min_height: f32,
    /// Maximum distance from the selected face
    pub max_height: f32,
    /// What "up" means in the scene; selects the face and, optionally, the offset direction
    pub upper_dir: [f32; 3],
    /// Offset along `upper_dir` (true) or along the face normal (false)
    pub use_upper_dir: bool,
    /// Only accept points whose downward ray hits the object itself
    pub use_ray_trace_check: bool,
    /// Give up the ray check after this many tries. `None` retries forever.
    pub max_attempts: Option<u32>,
}

impl Default for SamplerConfig {
    fn default() -> Self {
        Self {
            to_sample_on: ObjectSelector::all(),
            min_height: 0.0,
            max_height: 1.0,
            upper_dir: [0.0, 0.0, 1.0],
            use_upper_dir: true,
            use_ray_trace_check: false,
            max_attempts: None,
        }
    }
}

impl SamplerConfig {
    /// Parse from a JSON string.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load from a JSON file.
    pub fn load(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Check the configuration and return the normalized up direction.
    pub fn validate(&self) -> Result<Vec3> {
        if !self.min_height.is_finite() || !self.max_height.is_finite() {
            return Err(Error::Configuration(format!(
                "heights must be finite, got [{}, {}]",
                self.min_height, self.max_height
            )));
        }
        if self.max_height < self.min_height {
            return Err(Error::Configuration(format!(
                "The minimum height ({}) must be smaller than the maximum height ({})!",
                self.min_height, self.max_height
            )));
        }
        // Uniform float sampling divides the span by the largest unit draw
        let span = self.max_height - self.min_height;
        if !(span / (1.0 - f32::EPSILON)).is_finite() {
            return Err(Error::Configuration(format!(
                "height range [{}, {}] is too wide to sample",
                self.min_height, self.max_height
            )));
        }
        if self.max_attempts == Some(0) {
            return Err(Error::Configuration(
                "max_attempts must be at least 1".to_string(),
            ));
        }
        Vec3::from(self.upper_dir).try_normalize().ok_or_else(|| {
            Error::Configuration(format!(
                "upper_dir {:?} has no direction",
                self.upper_dir
            ))
        })
    }
}
