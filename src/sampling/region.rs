//! Bounding-box face selection and the sampleable region it produces.

use std::f32::consts::PI;

use glam::Vec3;
use rand::Rng;

/// Corner indices of the six box faces, in `Aabb::corners` winding.
///
/// For each face `(c1 - c0) x (c3 - c0)` points out of the box. The order is
/// also the tie-break order when two faces are equally close to "up".
pub const BOX_FACES: [[usize; 4]; 6] = [
    [0, 1, 2, 3],
    [0, 4, 5, 1],
    [1, 5, 6, 2],
    [6, 7, 3, 2],
    [3, 7, 4, 0],
    [7, 6, 5, 4],
];

/// A parallelogram on one bounding-box face.
///
/// Points are `base_point + edges[0] * u + edges[1] * v` for `u, v` in `[0, 1)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Region {
    edges: [Vec3; 2],
    normal: Vec3,
    base_point: Vec3,
}

impl Region {
    /// Build a region from four face corners. `None` if the face has no area.
    pub fn from_face(face: [Vec3; 4]) -> Option<Self> {
        let (edges, normal) = face_frame(&face)?;
        Some(Self {
            edges,
            normal,
            base_point: face[0],
        })
    }

    /// In-plane edge vectors from the base point to the second and fourth corners.
    pub fn edges(&self) -> [Vec3; 2] {
        self.edges
    }

    /// Unit normal, `normalize(edges[0] x edges[1])`.
    pub fn normal(&self) -> Vec3 {
        self.normal
    }

    pub fn base_point(&self) -> Vec3 {
        self.base_point
    }

    pub fn area(&self) -> f32 {
        self.edges[0].cross(self.edges[1]).length()
    }

    /// Uniform point over the parallelogram's parameter space.
    pub fn sample_point<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec3 {
        self.edges
            .iter()
            .fold(self.base_point, |p, edge| p + *edge * rng.gen_range(0.0f32..1.0))
    }
}

/// Edge vectors and unit normal of a face, `None` when the normal is undefined.
fn face_frame(face: &[Vec3; 4]) -> Option<([Vec3; 2], Vec3)> {
    let e1 = face[1] - face[0];
    let e2 = face[3] - face[0];
    let normal = e1.cross(e2).try_normalize()?;
    Some(([e1, e2], normal))
}

/// Pick the face of a bounding box whose outward normal is closest to `up`.
///
/// `corners` must follow `Aabb::corners` order and `up` must be unit length.
/// Faces without a defined normal are skipped; `None` means every face was
/// degenerate. Equal angles keep the earlier face in `BOX_FACES`.
pub fn select_upper_face(corners: &[Vec3; 8], up: Vec3) -> Option<Region> {
    let mut min_angle = 2.0 * PI;
    let mut selected = None;

    for indices in BOX_FACES {
        let face = indices.map(|i| corners[i]);
        let Some((_, normal)) = face_frame(&face) else {
            continue;
        };
        let angle = normal.dot(up).clamp(-1.0, 1.0).acos();
        if angle < min_angle {
            min_angle = angle;
            selected = Some(face);
        }
    }

    selected.and_then(Region::from_face)
}
