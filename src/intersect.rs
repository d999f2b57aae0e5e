//! Ray-sphere intersection and the scene-wide nearest-hit scan.

use crate::*;

/// Root reported for both solutions when a ray misses a sphere.
///
/// Larger than any valid bound, so the nearest-hit scan never accepts it.
pub const NO_HIT: f32 = f32::MAX;

/// Offset used for the default near bound and for biasing secondary ray origins.
pub const EPSILON: f32 = 1e-4;

#[derive(Clone, Debug)]
pub struct Hit<'a> {
    pub dist: f32,
    pub sphere: &'a Sphere,
}

/// Both roots of `|o + t·d − c|² = r²`, unordered. `(NO_HIT, NO_HIT)` if they are not real.
pub fn intersect_sphere(ray: &Ray, sphere: &Sphere) -> (f32, f32) {
    let oc = ray.origin - sphere.center;
    let a = ray.dir.length2();
    let b = 2.0 * oc.dot(&ray.dir);
    let c = oc.length2() - sphere.radius * sphere.radius;

    let discriminant = b * b - 4.0 * a * c;
    if discriminant < 0.0 {
        return (NO_HIT, NO_HIT);
    }

    let sqrt_d = discriminant.sqrt();
    let t1 = (-b - sqrt_d) / (2.0 * a);
    let t2 = (-b + sqrt_d) / (2.0 * a);
    (t1, t2)
}

/// Nearest sphere whose surface the ray crosses strictly inside `(tnear, tfar)`.
///
/// `tfar` is also capped by the ray's own `max_dist`. On exactly equal
/// distances the sphere that comes first in the scene wins.
pub fn closest_intersection<'a>(
    scene: &'a Scene,
    ray: &Ray,
    tnear: f32,
    tfar: f32,
) -> Option<Hit<'a>> {
    let tfar = tfar.min(ray.max_dist);
    let mut closest = NO_HIT;
    let mut hit = None;
    for sphere in scene.spheres.iter() {
        let (t1, t2) = intersect_sphere(ray, sphere);
        for t in [t1, t2] {
            if tnear < t && t < tfar && t < closest {
                closest = t;
                hit = Some(Hit { dist: t, sphere });
            }
        }
    }
    hit
}
