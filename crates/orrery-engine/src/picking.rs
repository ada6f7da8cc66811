//! Ray casting against pickable spheres.
//!
//! The engine only provides the geometric half of picking: building a
//! ray (see `OrbitCamera::screen_ray`) and finding the nearest sphere it
//! pierces. Resolving a hit node to domain data is the caller's job.

use glam::Vec3;

use crate::api::types::NodeId;

/// A world-space ray with a normalized direction.
#[derive(Debug, Clone, Copy)]
pub struct Ray {
    pub origin: Vec3,
    pub dir: Vec3,
}

impl Ray {
    pub fn new(origin: Vec3, dir: Vec3) -> Self {
        Self {
            origin,
            dir: dir.normalize_or_zero(),
        }
    }

    /// Distance along the ray to the nearest intersection with a sphere,
    /// or `None` if the ray misses or the sphere is entirely behind the
    /// origin. A ray starting inside the sphere hits the far wall.
    pub fn sphere_intersection(&self, center: Vec3, radius: f32) -> Option<f32> {
        let oc = self.origin - center;
        let b = oc.dot(self.dir);
        let c = oc.length_squared() - radius * radius;
        let disc = b * b - c;
        if disc < 0.0 {
            return None;
        }
        let sqrt_disc = disc.sqrt();
        let t_near = -b - sqrt_disc;
        let t_far = -b + sqrt_disc;
        if t_near >= 0.0 {
            Some(t_near)
        } else if t_far >= 0.0 {
            Some(t_far)
        } else {
            None
        }
    }
}

/// Intersect a ray against a set of spheres, returning the nearest hit
/// (standard occlusion order). An empty set yields `None`.
pub fn nearest_hit(
    ray: &Ray,
    spheres: impl IntoIterator<Item = (NodeId, Vec3, f32)>,
) -> Option<(NodeId, f32)> {
    let mut best: Option<(NodeId, f32)> = None;
    for (id, center, radius) in spheres {
        if let Some(t) = ray.sphere_intersection(center, radius) {
            if best.map_or(true, |(_, best_t)| t < best_t) {
                best = Some((id, t));
            }
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ray_hits_sphere_head_on() {
        let ray = Ray::new(Vec3::new(0.0, 0.0, 10.0), Vec3::new(0.0, 0.0, -1.0));
        let t = ray.sphere_intersection(Vec3::ZERO, 2.0).unwrap();
        assert!((t - 8.0).abs() < 1e-5, "t = {t}");
    }

    #[test]
    fn ray_misses_offset_sphere() {
        let ray = Ray::new(Vec3::new(0.0, 0.0, 10.0), Vec3::new(0.0, 0.0, -1.0));
        assert!(ray.sphere_intersection(Vec3::new(5.0, 0.0, 0.0), 2.0).is_none());
    }

    #[test]
    fn sphere_behind_origin_ignored() {
        let ray = Ray::new(Vec3::new(0.0, 0.0, 10.0), Vec3::new(0.0, 0.0, 1.0));
        assert!(ray.sphere_intersection(Vec3::ZERO, 2.0).is_none());
    }

    #[test]
    fn nearest_hit_respects_occlusion() {
        let ray = Ray::new(Vec3::new(0.0, 0.0, 100.0), Vec3::new(0.0, 0.0, -1.0));
        let spheres = [
            (NodeId(0), Vec3::new(0.0, 0.0, -50.0), 5.0),
            (NodeId(1), Vec3::new(0.0, 0.0, 20.0), 5.0), // closer along ray
        ];
        let (id, _) = nearest_hit(&ray, spheres).unwrap();
        assert_eq!(id, NodeId(1));
    }

    #[test]
    fn empty_set_is_no_hit() {
        let ray = Ray::new(Vec3::ZERO, Vec3::Z);
        assert!(nearest_hit(&ray, std::iter::empty()).is_none());
    }
}
