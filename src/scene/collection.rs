//! Flat, ordered collection of scene objects.

use std::path::Path;

use crate::core::Result;

use super::config::SceneDescription;
use super::node::SceneObject;
use super::selector::ObjectSelector;

/// Ordered set of objects available for sampling.
#[derive(Clone, Debug, Default)]
pub struct Scene {
    objects: Vec<SceneObject>,
}

impl Scene {
    /// Create an empty scene.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from a parsed description, validating every object.
    pub fn from_description(desc: &SceneDescription) -> Result<Self> {
        let objects = desc
            .objects
            .iter()
            .map(|o| o.build())
            .collect::<Result<Vec<_>>>()?;
        log::debug!("Scene built with {} objects", objects.len());
        Ok(Self { objects })
    }

    /// Load and build from a JSON scene file.
    pub fn load(path: &Path) -> Result<Self> {
        Self::from_description(&SceneDescription::load(path)?)
    }

    /// Append an object. Order is preserved for selection.
    pub fn add(&mut self, object: SceneObject) {
        self.objects.push(object);
    }

    /// Objects matching the selector, in scene order.
    pub fn select(&self, selector: &ObjectSelector) -> Result<Vec<&SceneObject>> {
        selector.select(self.objects.iter(), |o| o.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::Aabb;
    use crate::scene::node::{Geometry, LocalTransform};
    use glam::Vec3;

    fn scene() -> Scene {
        let mut scene = Scene::new();
        for name in ["Table", "Lamp", "Table.001"] {
            scene.add(SceneObject::new(
                name,
                LocalTransform::identity(),
                Geometry::Cuboid(Aabb::new(Vec3::ZERO, Vec3::ONE)),
            ));
        }
        scene
    }

    #[test]
    fn test_select_preserves_order() {
        let scene = scene();
        let tables = scene.select(&ObjectSelector::by_name("Table.*")).unwrap();
        let names: Vec<_> = tables.iter().map(|o| o.name.as_str()).collect();
        assert_eq!(names, vec!["Table", "Table.001"]);
        assert_eq!(scene.len(), 3);
        assert!(!scene.is_empty());
        assert!(Scene::new().is_empty());
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scene.json");
        std::fs::write(
            &path,
            r#"{"objects": [{"name": "Box", "geometry": {"type": "cuboid", "min": [0,0,0], "max": [1,1,1]}}]}"#,
        )
        .unwrap();
        let scene = Scene::load(&path).unwrap();
        let all = scene.select(&ObjectSelector::all()).unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].name, "Box");
    }
}
