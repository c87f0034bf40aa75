//! Placement sampling above object surfaces.
//!
//! Construction picks, for each target, the bounding-box face whose outward
//! normal is closest to the configured "up" direction ([`select_upper_face`]).
//! Sampling then draws points in the slab between `min_height` and `max_height`
//! above that face, optionally confirmed by a ray cast back onto the target.

pub mod config;
pub mod region;
pub mod sampler;
pub mod target;

pub use config::SamplerConfig;
pub use region::{select_upper_face, Region, BOX_FACES};
pub use sampler::UpperRegionSampler;
pub use target::SampleTarget;
