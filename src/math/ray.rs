//! Ray type and operations

use crate::core::types::{Vec3, Mat4};
use super::aabb::Aabb;

/// Minimum distance accepted as a triangle hit, avoids self-intersection
const TRIANGLE_EPSILON: f32 = 1e-6;

/// A ray defined by origin and direction
#[derive(Clone, Copy, Debug)]
pub struct Ray {
    pub origin: Vec3,
    pub direction: Vec3,
    /// Precomputed 1/direction for fast AABB intersection
    pub inv_direction: Vec3,
}

/// Where a ray met a surface
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RayHit {
    pub location: Vec3,
    pub normal: Vec3,
    /// Ray parameter of the hit
    pub distance: f32,
}

impl Ray {
    /// Create a new ray (direction should be normalized)
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self {
            origin,
            direction,
            inv_direction: Vec3::new(
                1.0 / direction.x,
                1.0 / direction.y,
                1.0 / direction.z,
            ),
        }
    }

    /// Get point along ray at parameter t
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }

    /// Ray-AABB intersection using slab method
    /// Returns Some((t_near, t_far)) if intersection, None otherwise
    pub fn intersects_aabb(&self, aabb: &Aabb) -> Option<(f32, f32)> {
        let t1 = (aabb.min - self.origin) * self.inv_direction;
        let t2 = (aabb.max - self.origin) * self.inv_direction;

        let t_min = t1.min(t2);
        let t_max = t1.max(t2);

        let t_near = t_min.x.max(t_min.y).max(t_min.z);
        let t_far = t_max.x.min(t_max.y).min(t_max.z);

        if t_near <= t_far && t_far >= 0.0 {
            Some((t_near.max(0.0), t_far))
        } else {
            None
        }
    }

    /// Surface hit against a solid box. From inside the box the exit face is reported.
    pub fn hit_aabb(&self, aabb: &Aabb) -> Option<RayHit> {
        let (t_near, t_far) = self.intersects_aabb(aabb)?;
        let distance = if t_near > 0.0 { t_near } else { t_far };
        let location = self.at(distance);

        // Face normal: the axis where the hit sits closest to the box surface
        let half = aabb.size() * 0.5;
        let local = (location - aabb.center()) / half.max(Vec3::splat(f32::EPSILON));
        let abs = local.abs();
        let normal = if abs.x >= abs.y && abs.x >= abs.z {
            Vec3::new(local.x.signum(), 0.0, 0.0)
        } else if abs.y >= abs.z {
            Vec3::new(0.0, local.y.signum(), 0.0)
        } else {
            Vec3::new(0.0, 0.0, local.z.signum())
        };

        Some(RayHit { location, normal, distance })
    }

    /// Möller–Trumbore ray-triangle intersection (either winding)
    pub fn hit_triangle(&self, v0: Vec3, v1: Vec3, v2: Vec3) -> Option<RayHit> {
        let edge1 = v1 - v0;
        let edge2 = v2 - v0;
        let h = self.direction.cross(edge2);
        let a = edge1.dot(h);

        if a.abs() < TRIANGLE_EPSILON {
            return None;
        }

        let f = 1.0 / a;
        let s = self.origin - v0;
        let u = f * s.dot(h);

        if !(0.0..=1.0).contains(&u) {
            return None;
        }

        let q = s.cross(edge1);
        let v = f * self.direction.dot(q);

        if v < 0.0 || u + v > 1.0 {
            return None;
        }

        let t = f * edge2.dot(q);
        if t > TRIANGLE_EPSILON {
            Some(RayHit {
                location: self.at(t),
                normal: edge1.cross(edge2).normalize_or_zero(),
                distance: t,
            })
        } else {
            None
        }
    }

    /// Transform ray by matrix
    pub fn transform(&self, matrix: &Mat4) -> Ray {
        let new_origin = matrix.transform_point3(self.origin);
        let new_direction = matrix.transform_vector3(self.direction).normalize();
        Ray::new(new_origin, new_direction)
    }
}
