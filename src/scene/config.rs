//! JSON scene descriptions
//!
//! Describes the objects a sampler can be pointed at. Rotations are XYZ Euler
//! angles in degrees.

use std::path::Path;

use glam::{EulerRot, Quat, Vec3};
use serde::{Deserialize, Serialize};

use crate::core::{Error, Result};
use crate::math::Aabb;

use super::node::{Geometry, LocalTransform, SceneObject, TriangleMesh};

/// Serialized geometry of one object
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum GeometryDescription {
    Cuboid {
        min: [f32; 3],
        max: [f32; 3],
    },
    Mesh {
        vertices: Vec<[f32; 3]>,
        triangles: Vec<[u32; 3]>,
    },
}

/// Serialized scene object
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ObjectDescription {
    pub name: String,
    #[serde(default)]
    pub position: [f32; 3],
    /// Euler XYZ, degrees
    #[serde(default)]
    pub rotation: [f32; 3],
    #[serde(default = "default_scale")]
    pub scale: [f32; 3],
    pub geometry: GeometryDescription,
}

fn default_scale() -> [f32; 3] {
    [1.0, 1.0, 1.0]
}

/// Serialized scene: an ordered list of objects
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SceneDescription {
    pub objects: Vec<ObjectDescription>,
}

impl GeometryDescription {
    fn build(&self) -> Result<Geometry> {
        match self {
            GeometryDescription::Cuboid { min, max } => {
                let (min, max) = (Vec3::from(*min), Vec3::from(*max));
                if min.cmpgt(max).any() {
                    return Err(Error::Configuration(format!(
                        "cuboid min {:?} exceeds max {:?}",
                        min, max
                    )));
                }
                Ok(Geometry::Cuboid(Aabb::new(min, max)))
            }
            GeometryDescription::Mesh { vertices, triangles } => {
                let vertices = vertices.iter().copied().map(Vec3::from).collect();
                Ok(Geometry::Mesh(TriangleMesh::new(vertices, triangles.clone())?))
            }
        }
    }
}

impl ObjectDescription {
    /// Build the runtime object, validating the transform and geometry.
    pub fn build(&self) -> Result<SceneObject> {
        let scale = Vec3::from(self.scale);
        if !scale.is_finite() || scale.cmpeq(Vec3::ZERO).any() {
            return Err(Error::Configuration(format!(
                "object '{}' has a non-invertible scale {:?}",
                self.name, scale
            )));
        }

        let [rx, ry, rz] = self.rotation.map(f32::to_radians);
        let transform = LocalTransform {
            position: Vec3::from(self.position),
            rotation: Quat::from_euler(EulerRot::XYZ, rx, ry, rz),
            scale,
        };

        let geometry = self.geometry.build().map_err(|e| match e {
            Error::Configuration(msg) => {
                Error::Configuration(format!("object '{}': {}", self.name, msg))
            }
            other => other,
        })?;

        Ok(SceneObject::new(self.name.clone(), transform, geometry))
    }
}

impl SceneDescription {
    /// Parse from a JSON string.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load from a JSON file.
    pub fn load(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Save as pretty-printed JSON.
    pub fn save(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(path, json)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TABLE_SCENE: &str = r#"{
        "objects": [
            {
                "name": "Table",
                "position": [0.0, 0.0, 0.75],
                "scale": [2.0, 1.0, 0.1],
                "geometry": { "type": "cuboid", "min": [-0.5, -0.5, -0.5], "max": [0.5, 0.5, 0.5] }
            },
            {
                "name": "Ramp",
                "rotation": [0.0, 0.0, 90.0],
                "geometry": {
                    "type": "mesh",
                    "vertices": [[0, 0, 0], [1, 0, 0], [0, 1, 0]],
                    "triangles": [[0, 1, 2]]
                }
            }
        ]
    }"#;

    #[test]
    fn test_parse_scene() {
        let desc = SceneDescription::from_json(TABLE_SCENE).unwrap();
        assert_eq!(desc.objects.len(), 2);
        assert_eq!(desc.objects[1].scale, [1.0, 1.0, 1.0]);
        assert_eq!(desc.objects[1].position, [0.0, 0.0, 0.0]);

        let table = desc.objects[0].build().unwrap();
        let bb = table.world_bounding_box();
        assert!((bb[6] - Vec3::new(1.0, 0.5, 0.8)).length() < 1e-5);
    }

    #[test]
    fn test_rotation_in_degrees() {
        let desc = SceneDescription::from_json(TABLE_SCENE).unwrap();
        let ramp = desc.objects[1].build().unwrap();
        let x_axis = ramp.world_matrix().transform_vector3(Vec3::X);
        assert!((x_axis - Vec3::Y).length() < 1e-5);
    }

    #[test]
    fn test_rejects_zero_scale() {
        let mut desc = SceneDescription::from_json(TABLE_SCENE).unwrap();
        desc.objects[0].scale = [1.0, 0.0, 1.0];
        assert!(matches!(desc.objects[0].build(), Err(Error::Configuration(_))));
    }

    #[test]
    fn test_rejects_inverted_cuboid() {
        let desc = ObjectDescription {
            name: "Broken".to_string(),
            position: [0.0; 3],
            rotation: [0.0; 3],
            scale: default_scale(),
            geometry: GeometryDescription::Cuboid { min: [1.0; 3], max: [0.0; 3] },
        };
        let err = desc.build().unwrap_err();
        assert!(err.to_string().contains("Broken"));
    }

    #[test]
    fn test_bad_json() {
        assert!(matches!(
            SceneDescription::from_json("{ not json"),
            Err(Error::Json(_))
        ));
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scenes").join("table.json");
        let desc = SceneDescription::from_json(TABLE_SCENE).unwrap();
        desc.save(&path).unwrap();
        let loaded = SceneDescription::load(&path).unwrap();
        assert_eq!(loaded, desc);
    }
}
