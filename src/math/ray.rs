use glam::Vec3;

use super::aabb::AABB;

/// Slab test. Returns the ray parameter of the nearest hit in front of the
/// origin, or `None` on a miss.
///
/// `ray_dir` need not be normalized; the returned `t` is in units of it.
pub fn intersect_aabb(ray_origin: Vec3, ray_dir: Vec3, aabb: &AABB) -> Option<f32> {
    const EPSILON: f32 = 1e-8;

    // Near-zero components clamp to a huge inverse instead of dividing by zero
    let inv = |d: f32| {
        if d.abs() < EPSILON {
            1.0 / EPSILON.copysign(d)
        } else {
            1.0 / d
        }
    };
    let inv_dir = Vec3::new(inv(ray_dir.x), inv(ray_dir.y), inv(ray_dir.z));

    let t_min = (aabb.min - ray_origin) * inv_dir;
    let t_max = (aabb.max - ray_origin) * inv_dir;

    let t1 = t_min.min(t_max);
    let t2 = t_min.max(t_max);

    let t_near = t1.max_element();
    let t_far = t2.min_element();

    if t_near > t_far || t_far < 0.0 {
        return None;
    }

    if t_near < 0.0 {
        // origin inside the box
        (t_far > 0.001).then_some(t_far)
    } else {
        Some(t_near)
    }
}
