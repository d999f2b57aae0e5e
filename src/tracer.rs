//! Recursive Whitted-style tracing: nearest hit, local shading, mirror bounce.

use crate::*;

use crate::intersect::EPSILON;
use crate::lighting::compute_lighting;
use crate::stats::TraceStats;

pub const DEFAULT_RECURSION_DEPTH: u32 = 3;

/// Bounds and recursion budget for a primary ray.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TraceParams {
    pub tnear: f32,
    pub tfar: f32,
    pub depth: u32,
}

impl Default for TraceParams {
    fn default() -> Self {
        TraceParams {
            tnear: EPSILON,
            tfar: f32::INFINITY,
            depth: DEFAULT_RECURSION_DEPTH,
        }
    }
}

impl TraceParams {
    pub fn with_depth(depth: u32) -> Self {
        TraceParams {
            depth,
            ..Default::default()
        }
    }
}

pub fn trace_ray(scene: &Scene, ray: &Ray, tnear: f32, tfar: f32, depth: u32) -> RayPayload {
    trace_ray_with_stats(scene, ray, tnear, tfar, depth, &mut ())
}

pub fn trace(scene: &Scene, ray: &Ray, params: TraceParams) -> RayPayload {
    trace_ray(scene, ray, params.tnear, params.tfar, params.depth)
}

/// Same as [`trace_ray`], reporting every call (including recursive ones) to `stats`.
///
/// Makes at most `depth + 1` calls: the budget drops by one per bounce and
/// a zero budget or a non-reflective surface ends the recursion.
pub fn trace_ray_with_stats(
    scene: &Scene,
    ray: &Ray,
    tnear: f32,
    tfar: f32,
    depth: u32,
    stats: &mut impl TraceStats,
) -> RayPayload {
    stats.record(depth);

    let hit = match scene.test_hit(ray, tnear, tfar) {
        Some(hit) => hit,
        None => return RayPayload::miss(scene.background),
    };
    let sphere = hit.sphere;
    let pos = ray.at(hit.dist);
    let normal = sphere.normal_at(&pos);
    let view = -ray.dir;

    let intensity = compute_lighting(scene, &pos, &normal, &view, sphere.specular);
    let local = sphere.color * intensity;

    let r = sphere.reflectivity;
    if depth == 0 || r <= 0.0 {
        return RayPayload::new(hit.dist, local);
    }

    let reflected_ray = Ray::new(pos + normal * EPSILON, reflect(&view, &normal));
    let reflected = trace_ray_with_stats(
        scene,
        &reflected_ray,
        EPSILON,
        f32::INFINITY,
        depth - 1,
        stats,
    );
    RayPayload::new(hit.dist, local * (1.0 - r) + reflected.color * r)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::LevelCounts;

    fn forward() -> Ray {
        Ray::new(P3::origin(), V3::new(0.0, 0.0, 1.0))
    }

    fn mirror_scene(reflectivity: f32) -> Scene {
        let mut scene = Scene::new(colors::BLUE, P3::origin());
        scene.add_sphere(
            Sphere::new(P3::new(0.0, 0.0, 5.0), 1.0, colors::RED).reflective(reflectivity),
        );
        scene.add_ambient_light(0.5);
        scene
    }

    #[test]
    fn empty_scene_returns_background() {
        let scene = Scene::new(colors::CYAN, P3::origin());
        for dir in [V3::new(0.0, 0.0, 1.0), V3::new(1.0, -1.0, 0.0), V3::new(0.0, 0.0, 0.0)] {
            let ray = Ray::new(P3::origin(), dir);
            let payload = trace_ray(&scene, &ray, EPSILON, f32::INFINITY, 3);
            assert_eq!(payload.color, colors::CYAN);
            assert_eq!(payload.t, f32::INFINITY);
            assert!(payload.is_miss());
        }
    }

    #[test]
    fn local_color_scaled_by_intensity() {
        let scene = mirror_scene(0.0);
        let payload = trace(&scene, &forward(), TraceParams::default());
        assert_eq!(payload.t, 4.0);
        assert_eq!(payload.color, colors::RED * 0.5);
    }

    #[test]
    fn zero_reflectivity_makes_one_call() {
        let scene = mirror_scene(0.0);
        let mut calls = 0usize;
        let payload =
            trace_ray_with_stats(&scene, &forward(), EPSILON, f32::INFINITY, 5, &mut calls);
        assert_eq!(calls, 1);
        assert_eq!(payload.color, colors::RED * 0.5);
    }

    #[test]
    fn zero_depth_never_recurses() {
        let scene = mirror_scene(1.0);
        let mut calls = 0usize;
        let payload =
            trace_ray_with_stats(&scene, &forward(), EPSILON, f32::INFINITY, 0, &mut calls);
        assert_eq!(calls, 1);
        assert_eq!(payload.color, colors::RED * 0.5);

        let payload = trace(&scene, &forward(), TraceParams::with_depth(0));
        assert_eq!(payload.color, colors::RED * 0.5);
    }

    #[test]
    fn half_reflective_blend() {
        // head-on bounce goes straight back out to the background
        let scene = mirror_scene(0.5);
        let mut stats = (0usize, LevelCounts::new());
        let payload =
            trace_ray_with_stats(&scene, &forward(), EPSILON, f32::INFINITY, 3, &mut stats);
        let local = colors::RED * 0.5;
        assert_eq!(payload.color, local * 0.5 + colors::BLUE * 0.5);
        assert_eq!(stats.0, 2);
        assert_eq!(stats.1.counts(), &[1, 1]);
    }

    #[test]
    fn facing_mirrors_stop_at_depth() {
        let mut scene = Scene::new(colors::BLACK, P3::origin());
        scene.add_sphere(
            Sphere::new(P3::new(0.0, 0.0, 5.0), 1.0, colors::RED).reflective(1.0),
        );
        scene.add_sphere(
            Sphere::new(P3::new(0.0, 0.0, -5.0), 1.0, colors::GREEN).reflective(1.0),
        );
        scene.add_ambient_light(1.0);

        for depth in 0..6 {
            let mut calls = 0usize;
            let ray = forward();
            let payload =
                trace_ray_with_stats(&scene, &ray, EPSILON, f32::INFINITY, depth, &mut calls);
            assert_eq!(calls, depth as usize + 1);
            // fully reflective: only the last surface reached keeps its color
            let expected = if depth % 2 == 0 {
                colors::RED
            } else {
                colors::GREEN
            };
            assert_eq!(payload.color, expected);
        }
    }

    #[test]
    fn shadowed_surface_keeps_ambient_only() {
        let mut scene = Scene::new(colors::BLACK, P3::origin());
        scene.add_sphere(Sphere::new(P3::new(0.0, 0.0, 5.0), 1.0, colors::WHITE));
        scene.add_ambient_light(0.2);
        scene.add_point_light(0.8, P3::new(0.0, 4.0, 0.0));

        let lit = trace(&scene, &forward(), TraceParams::default());
        assert!(lit.color.r > (colors::WHITE * 0.2).r);

        scene.add_sphere(Sphere::new(P3::new(0.0, 2.0, 2.0), 0.5, colors::BLUE));
        let payload = trace(&scene, &forward(), TraceParams::default());
        assert_eq!(payload.t, 4.0);
        assert_eq!(payload.color, colors::WHITE * 0.2);
    }
}
