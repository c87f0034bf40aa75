//! Random points in the slab above each target's upward-facing bounding-box face.

use glam::Vec3;
use rand::Rng;

use crate::core::{Error, Result};
use crate::math::Ray;
use crate::scene::{Scene, SceneObject};

use super::config::SamplerConfig;
use super::region::{select_upper_face, Region};
use super::target::SampleTarget;

/// Samples points above the upper bounding-box face of a set of targets.
///
/// For every target the face closest to `upper_dir` is chosen once, at
/// construction. Each [`sample`](Self::sample) call picks one target uniformly,
/// a uniform point on its face and a uniform height in
/// `[min_height, max_height]` along `upper_dir` or the face normal.
///
/// The sampler holds no mutable state. Randomness comes from the caller, so one
/// sampler can be shared between threads that each own an RNG.
pub struct UpperRegionSampler<'a, T: SampleTarget + ?Sized> {
    targets: Vec<&'a T>,
    /// Same index as `targets`
    regions: Vec<Region>,
    config: SamplerConfig,
    upper_dir: Vec3,
}

impl<'a, T: SampleTarget + ?Sized> UpperRegionSampler<'a, T> {
    /// Select one region per target.
    ///
    /// Fails on an empty target list, an invalid config, or a target whose
    /// bounding box has no face with a defined normal.
    pub fn new(targets: Vec<&'a T>, config: SamplerConfig) -> Result<Self> {
        if targets.is_empty() {
            return Err(Error::Configuration(
                "The used selector returns an empty list, check the config value: \"to_sample_on\""
                    .to_string(),
            ));
        }
        let upper_dir = config.validate()?;

        let regions = targets
            .iter()
            .map(|target| {
                let region = select_upper_face(&target.bounding_box(), upper_dir)
                    .ok_or_else(|| Error::NoSelectableFace(target.name().to_string()))?;
                log::debug!(
                    "Upper face of '{}': base {:?}, normal {:?}, area {:.3}",
                    target.name(),
                    region.base_point(),
                    region.normal(),
                    region.area()
                );
                Ok(region)
            })
            .collect::<Result<Vec<_>>>()?;

        log::info!(
            "UpperRegionSampler: {} regions, heights [{}, {}], ray check {}",
            regions.len(),
            config.min_height,
            config.max_height,
            if config.use_ray_trace_check { "on" } else { "off" }
        );

        Ok(Self {
            targets,
            regions,
            config,
            upper_dir,
        })
    }

    /// Draw one point in world space.
    ///
    /// With the ray check enabled, points are redrawn on the same target until
    /// a ray cast from the point against the offset direction hits the target.
    /// This only ends early if `max_attempts` is set.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Vec3> {
        if self.regions.is_empty() || self.regions.len() != self.targets.len() {
            return Err(Error::InternalInvariant(format!(
                "The amount of regions ({}) is either zero or does not match the amount of objects ({})!",
                self.regions.len(),
                self.targets.len()
            )));
        }

        let index = rng.gen_range(0..self.regions.len());
        let region = &self.regions[index];
        let target = self.targets[index];
        let direction = if self.config.use_upper_dir {
            self.upper_dir
        } else {
            region.normal()
        };

        if !self.config.use_ray_trace_check {
            return Ok(self.offset_point(region, direction, rng));
        }

        let world_to_local = target.world_to_local();
        let mut attempts: u32 = 0;
        loop {
            let point = self.offset_point(region, direction, rng);
            attempts = attempts.saturating_add(1);

            let ray = Ray::new(point, -direction).transform(&world_to_local);
            if target.ray_cast(&ray).is_some() {
                return Ok(point);
            }
            log::trace!("Ray check missed '{}' from {:?}", target.name(), point);

            if let Some(max) = self.config.max_attempts {
                if attempts >= max {
                    log::warn!(
                        "Giving up on '{}' after {} ray checks",
                        target.name(),
                        attempts
                    );
                    return Err(Error::RayCheckExhausted {
                        object: target.name().to_string(),
                        attempts,
                    });
                }
            }
        }
    }

    /// Draw `count` independent points.
    pub fn sample_many<R: Rng + ?Sized>(&self, rng: &mut R, count: usize) -> Result<Vec<Vec3>> {
        (0..count).map(|_| self.sample(rng)).collect()
    }

    /// Point on the region lifted by a random height along `direction`.
    fn offset_point<R: Rng + ?Sized>(&self, region: &Region, direction: Vec3, rng: &mut R) -> Vec3 {
        let height = rng.gen_range(self.config.min_height..=self.config.max_height);
        region.sample_point(rng) + direction * height
    }

    /// Regions in target order.
    pub fn regions(&self) -> &[Region] {
        &self.regions
    }

    pub fn targets(&self) -> &[&'a T] {
        &self.targets
    }

    pub fn config(&self) -> &SamplerConfig {
        &self.config
    }

    /// Normalized up direction.
    pub fn upper_dir(&self) -> Vec3 {
        self.upper_dir
    }

    pub fn len(&self) -> usize {
        self.regions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }
}

impl<'a> UpperRegionSampler<'a, SceneObject> {
    /// Sample above the scene objects picked by `config.to_sample_on`.
    pub fn from_scene(scene: &'a Scene, config: SamplerConfig) -> Result<Self> {
        let targets = scene.select(&config.to_sample_on)?;
        log::debug!(
            "Selector {:?} matched {} of {} objects",
            config.to_sample_on,
            targets.len(),
            scene.len()
        );
        Self::new(targets, config)
    }
}
