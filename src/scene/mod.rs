//! Scene objects that samples are placed on

pub mod collection;
pub mod config;
pub mod node;
pub mod selector;

pub use collection::Scene;
pub use config::{GeometryDescription, ObjectDescription, SceneDescription};
pub use node::{Geometry, LocalTransform, SceneObject, TriangleMesh};
pub use selector::ObjectSelector;
