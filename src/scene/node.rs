//! Scene object types
//!
//! A scene object is a named piece of geometry with a world transform. It is the
//! thing samples are placed above, and the thing ray checks are cast against.

use glam::{Mat4, Quat, Vec3};

use crate::core::{Error, Result};
use crate::math::{Aabb, Ray, RayHit};

/// Object transform relative to world space.
#[derive(Clone, Debug, PartialEq)]
pub struct LocalTransform {
    pub position: Vec3,
    pub rotation: Quat,
    pub scale: Vec3,
}

impl Default for LocalTransform {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Quat::IDENTITY,
            scale: Vec3::ONE,
        }
    }
}

impl LocalTransform {
    /// Identity transform (no translation, rotation, or scaling).
    pub fn identity() -> Self {
        Self::default()
    }

    /// Create a translation-only transform.
    pub fn from_position(position: Vec3) -> Self {
        Self {
            position,
            ..Default::default()
        }
    }

    /// Convert to a 4x4 matrix.
    pub fn to_mat4(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(self.scale, self.rotation, self.position)
    }
}

/// Indexed triangle mesh in object-local coordinates.
#[derive(Clone, Debug, PartialEq)]
pub struct TriangleMesh {
    vertices: Vec<Vec3>,
    triangles: Vec<[u32; 3]>,
}

impl TriangleMesh {
    /// Create a mesh, rejecting empty vertex lists and out-of-range indices.
    pub fn new(vertices: Vec<Vec3>, triangles: Vec<[u32; 3]>) -> Result<Self> {
        if vertices.is_empty() {
            return Err(Error::Configuration("mesh has no vertices".to_string()));
        }
        let count = vertices.len();
        if let Some(tri) = triangles
            .iter()
            .find(|tri| tri.iter().any(|&i| i as usize >= count))
        {
            return Err(Error::Configuration(format!(
                "triangle {:?} indexes past {} vertices",
                tri, count
            )));
        }
        Ok(Self { vertices, triangles })
    }

    /// Local-space bounds of all vertices.
    pub fn bounds(&self) -> Aabb {
        // new() guarantees at least one vertex
        Aabb::from_points(&self.vertices).unwrap_or_default()
    }

    /// Nearest triangle hit along the ray.
    pub fn ray_cast(&self, ray: &Ray) -> Option<RayHit> {
        self.triangles
            .iter()
            .filter_map(|&[a, b, c]| {
                ray.hit_triangle(
                    self.vertices[a as usize],
                    self.vertices[b as usize],
                    self.vertices[c as usize],
                )
            })
            .min_by(|x, y| x.distance.total_cmp(&y.distance))
    }
}

/// What a scene object is made of.
#[derive(Clone, Debug, PartialEq)]
pub enum Geometry {
    /// A solid box in local coordinates.
    Cuboid(Aabb),
    /// A triangle surface in local coordinates.
    Mesh(TriangleMesh),
}

impl Geometry {
    /// Local-space bounding box.
    pub fn bounds(&self) -> Aabb {
        match self {
            Geometry::Cuboid(aabb) => *aabb,
            Geometry::Mesh(mesh) => mesh.bounds(),
        }
    }

    /// Ray cast in local coordinates.
    pub fn ray_cast(&self, ray: &Ray) -> Option<RayHit> {
        match self {
            Geometry::Cuboid(aabb) => ray.hit_aabb(aabb),
            Geometry::Mesh(mesh) => mesh.ray_cast(ray),
        }
    }
}

/// A single named object in the scene.
#[derive(Clone, Debug)]
pub struct SceneObject {
    pub name: String,
    pub transform: LocalTransform,
    pub geometry: Geometry,
}

impl SceneObject {
    /// Create a new scene object.
    pub fn new(name: impl Into<String>, transform: LocalTransform, geometry: Geometry) -> Self {
        Self {
            name: name.into(),
            transform,
            geometry,
        }
    }

    /// Object-to-world matrix.
    pub fn world_matrix(&self) -> Mat4 {
        self.transform.to_mat4()
    }

    /// World-space corners of the local bounding box, in `Aabb::corners` order.
    pub fn world_bounding_box(&self) -> [Vec3; 8] {
        self.geometry.bounds().transformed_corners(&self.world_matrix())
    }
}
