use crate::*;

use crate::intersect::EPSILON;

/// Scale applied to every specular term.
pub const SPECULAR_STRENGTH: f32 = 50.0;

/// Total light intensity arriving at `pos`.
///
/// `normal` and `view` (surface toward the viewer) must already be unit
/// length. A light blocked by any sphere contributes nothing at all.
pub fn compute_lighting(
    scene: &Scene,
    pos: &P3,
    normal: &V3,
    view: &V3,
    specular: Option<f32>,
) -> f32 {
    let mut intensity = 0.0;
    for light in scene.lights.iter() {
        let (light_dir, light_dist) = match light.direction_from(pos) {
            None => {
                intensity += light.intensity();
                continue;
            }
            Some(d) => d,
        };

        let shadow_origin = pos + normal * EPSILON;
        let shadow_ray = Ray::new(shadow_origin, light_dir);
        if scene.occluded(&shadow_ray, EPSILON, light_dist) {
            continue;
        }

        let n_dot_l = normal.dot(&light_dir);
        if n_dot_l <= 0.0 {
            continue;
        }
        intensity += light.intensity() * n_dot_l;

        if let Some(exponent) = specular {
            let reflected = reflect(&light_dir, normal);
            let r_dot_v = reflected.dot(view);
            if r_dot_v > 0.0 {
                intensity += light.intensity() * SPECULAR_STRENGTH * r_dot_v.powf(exponent);
            }
        }
    }
    intensity
}
