//! Axis-aligned bounding box

use crate::core::types::{Mat4, Vec3};

/// Axis-aligned bounding box defined by min and max corners
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Aabb {
    pub min: Vec3,
    pub max: Vec3,
}

impl Aabb {
    /// Create AABB from min and max corners
    pub fn new(min: Vec3, max: Vec3) -> Self {
        Self { min, max }
    }

    /// Smallest AABB enclosing all points, or `None` for an empty slice
    pub fn from_points(points: &[Vec3]) -> Option<Self> {
        let (first, rest) = points.split_first()?;
        let mut aabb = Aabb::new(*first, *first);
        for p in rest {
            aabb.expand(*p);
        }
        Some(aabb)
    }

    /// Get center point
    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    /// Get size (max - min)
    pub fn size(&self) -> Vec3 {
        self.max - self.min
    }

    /// Expand AABB to include point
    pub fn expand(&mut self, point: Vec3) {
        self.min = self.min.min(point);
        self.max = self.max.max(point);
    }

    /// The 8 corners in box winding order:
    ///
    /// ```text
    /// 0: (-x,-y,-z)  1: (-x,-y,+z)  2: (-x,+y,+z)  3: (-x,+y,-z)
    /// 4: (+x,-y,-z)  5: (+x,-y,+z)  6: (+x,+y,+z)  7: (+x,+y,-z)
    /// ```
    ///
    /// Face selection in `sampling::region` relies on this order to get
    /// outward normals.
    pub fn corners(&self) -> [Vec3; 8] {
        let (lo, hi) = (self.min, self.max);
        [
            Vec3::new(lo.x, lo.y, lo.z),
            Vec3::new(lo.x, lo.y, hi.z),
            Vec3::new(lo.x, hi.y, hi.z),
            Vec3::new(lo.x, hi.y, lo.z),
            Vec3::new(hi.x, lo.y, lo.z),
            Vec3::new(hi.x, lo.y, hi.z),
            Vec3::new(hi.x, hi.y, hi.z),
            Vec3::new(hi.x, hi.y, lo.z),
        ]
    }

    /// Corners mapped through an affine matrix, order preserved
    pub fn transformed_corners(&self, matrix: &Mat4) -> [Vec3; 8] {
        self.corners().map(|c| matrix.transform_point3(c))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_and_accessors() {
        let aabb = Aabb::new(Vec3::ZERO, Vec3::ONE);
        assert_eq!(aabb.center(), Vec3::splat(0.5));
        assert_eq!(aabb.size(), Vec3::ONE);
    }

    #[test]
    fn test_from_points() {
        let aabb = Aabb::from_points(&[
            Vec3::new(1.0, -2.0, 0.5),
            Vec3::new(-1.0, 3.0, 0.0),
            Vec3::new(0.0, 0.0, 4.0),
        ])
        .unwrap();
        assert_eq!(aabb.min, Vec3::new(-1.0, -2.0, 0.0));
        assert_eq!(aabb.max, Vec3::new(1.0, 3.0, 4.0));
        assert!(Aabb::from_points(&[]).is_none());
    }

    #[test]
    fn test_corner_winding() {
        let c = Aabb::new(Vec3::ZERO, Vec3::ONE).corners();
        assert_eq!(c[0], Vec3::ZERO);
        assert_eq!(c[1], Vec3::Z);
        assert_eq!(c[2], Vec3::new(0.0, 1.0, 1.0));
        assert_eq!(c[3], Vec3::Y);
        assert_eq!(c[4], Vec3::X);
        assert_eq!(c[6], Vec3::ONE);
        assert_eq!(c[7], Vec3::new(1.0, 1.0, 0.0));
    }

    #[test]
    fn test_transformed_corners() {
        let aabb = Aabb::new(Vec3::splat(-0.5), Vec3::splat(0.5));
        let m = Mat4::from_translation(Vec3::new(0.0, 0.0, 10.0));
        let c = aabb.transformed_corners(&m);
        assert_eq!(c[0], Vec3::new(-0.5, -0.5, 9.5));
        assert_eq!(c[6], Vec3::new(0.5, 0.5, 10.5));
    }
}
