//! Analytic ray/bounding-sphere picking over the body set.
//!
//! Bodies are spheres (Earth's model sub-parts are covered by the root
//! bounding sphere), so picking never touches mesh data and degrades to a
//! clean miss when the body set is empty.

use bevy::prelude::*;

use super::SelectionTarget;

/// One pickable body.
#[derive(Copy, Clone, Debug)]
pub struct PickSphere {
    pub target: SelectionTarget,
    pub center: Vec3,
    pub radius: f32,
}

/// Nearest positive intersection along a ray.
#[derive(Copy, Clone, Debug)]
pub struct PickHit {
    pub target: SelectionTarget,
    pub point: Vec3,
    pub distance: f32,
}

/// Distance along the ray to the first intersection with a sphere, if any.
/// `dir` must be unit length. A ray starting inside the sphere hits the far
/// surface; spheres entirely behind the origin are misses.
pub fn ray_sphere(origin: Vec3, dir: Vec3, center: Vec3, radius: f32) -> Option<f32> {
    let oc = origin - center;
    let b = oc.dot(dir);
    let c = oc.length_squared() - radius * radius;
    let discriminant = b * b - c;
    if discriminant < 0.0 {
        return None;
    }
    let sqrt_d = discriminant.sqrt();
    let near = -b - sqrt_d;
    if near >= 0.0 {
        return Some(near);
    }
    let far = -b + sqrt_d;
    if far >= 0.0 {
        return Some(far);
    }
    None
}

/// Cast a ray against every registered body and keep the nearest hit.
pub fn pick_nearest(origin: Vec3, dir: Vec3, spheres: &[PickSphere]) -> Option<PickHit> {
    let mut best: Option<PickHit> = None;
    for sphere in spheres {
        let Some(distance) = ray_sphere(origin, dir, sphere.center, sphere.radius) else {
            continue;
        };
        if best.as_ref().is_none_or(|hit| distance < hit.distance) {
            best = Some(PickHit {
                target: sphere.target,
                point: origin + dir * distance,
                distance,
            });
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bodies::BodyId;
    use bevy::ecs::world::World;

    fn target(world: &mut World, id: BodyId) -> SelectionTarget {
        SelectionTarget {
            entity: world.spawn_empty().id(),
            id,
        }
    }

    #[test]
    fn test_ray_hits_sphere_head_on() {
        let t = ray_sphere(Vec3::ZERO, Vec3::NEG_Z, Vec3::new(0.0, 0.0, -6.0), 0.2);
        assert!(t.is_some());
        assert!((t.unwrap() - 5.8).abs() < 1e-4);
    }

    #[test]
    fn test_ray_misses_offset_sphere() {
        let t = ray_sphere(Vec3::ZERO, Vec3::NEG_Z, Vec3::new(3.0, 0.0, -6.0), 0.5);
        assert!(t.is_none());
    }

    #[test]
    fn test_sphere_behind_origin_is_a_miss() {
        let t = ray_sphere(Vec3::ZERO, Vec3::NEG_Z, Vec3::new(0.0, 0.0, 5.0), 1.0);
        assert!(t.is_none());
    }

    #[test]
    fn test_origin_inside_sphere_hits_far_surface() {
        let t = ray_sphere(Vec3::ZERO, Vec3::Z, Vec3::ZERO, 2.0);
        assert!(t.is_some());
        assert!((t.unwrap() - 2.0).abs() < 1e-5);
    }

    #[test]
    fn test_pick_nearest_prefers_closer_body() {
        let mut world = World::new();
        let near = target(&mut world, BodyId::Moon);
        let far = target(&mut world, BodyId::Mars);
        let spheres = [
            PickSphere {
                target: far,
                center: Vec3::new(0.0, 0.0, -20.0),
                radius: 1.0,
            },
            PickSphere {
                target: near,
                center: Vec3::new(0.0, 0.0, -6.0),
                radius: 0.2,
            },
        ];
        let hit = pick_nearest(Vec3::ZERO, Vec3::NEG_Z, &spheres).unwrap();
        assert_eq!(hit.target.id, BodyId::Moon);
        assert!((hit.distance - 5.8).abs() < 1e-4);
    }

    #[test]
    fn test_pick_nearest_on_empty_set_is_a_miss() {
        assert!(pick_nearest(Vec3::ZERO, Vec3::NEG_Z, &[]).is_none());
    }

    #[test]
    fn test_center_click_on_moon_scenario() {
        // Camera aimed directly at the moon from 6 units away.
        let mut world = World::new();
        let moon = target(&mut world, BodyId::Moon);
        let spheres = [PickSphere {
            target: moon,
            center: Vec3::new(0.0, 0.0, -6.0),
            radius: 0.2,
        }];
        let hit = pick_nearest(Vec3::ZERO, Vec3::NEG_Z, &spheres).unwrap();
        assert_eq!(hit.target.id, BodyId::Moon);
        assert!((hit.point - Vec3::new(0.0, 0.0, -5.8)).length() < 1e-4);
    }
}
