//! What the sampler needs from the objects it samples above.

use glam::{Mat4, Vec3};

use crate::math::{Ray, RayHit};
use crate::scene::SceneObject;

/// An object a sampler can place points above.
pub trait SampleTarget {
    /// Name used in error messages and logs.
    fn name(&self) -> &str;

    /// World-space bounding box corners in `Aabb::corners` order.
    fn bounding_box(&self) -> [Vec3; 8];

    /// Matrix taking world coordinates into the object's local frame.
    fn world_to_local(&self) -> Mat4;

    /// Cast a ray given in the object's local frame against its geometry.
    fn ray_cast(&self, ray: &Ray) -> Option<RayHit>;
}

impl SampleTarget for SceneObject {
    fn name(&self) -> &str {
        &self.name
    }

    fn bounding_box(&self) -> [Vec3; 8] {
        self.world_bounding_box()
    }

    fn world_to_local(&self) -> Mat4 {
        self.world_matrix().inverse()
    }

    fn ray_cast(&self, ray: &Ray) -> Option<RayHit> {
        self.geometry.ray_cast(ray)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::Aabb;
    use crate::scene::{Geometry, LocalTransform};

    #[test]
    fn test_scene_object_round_trips_frames() {
        let obj = SceneObject::new(
            "Shelf",
            LocalTransform::from_position(Vec3::new(3.0, 0.0, 1.0)),
            Geometry::Cuboid(Aabb::new(Vec3::ZERO, Vec3::ONE)),
        );
        let local = obj.world_to_local().transform_point3(Vec3::new(3.5, 0.5, 5.0));
        assert!(local.abs_diff_eq(Vec3::new(0.5, 0.5, 4.0), 1e-5));

        let hit = obj.ray_cast(&Ray::new(local, -Vec3::Z)).unwrap();
        assert!((hit.distance - 3.0).abs() < 1e-5);
        assert_eq!(SampleTarget::name(&obj), "Shelf");
    }
}
