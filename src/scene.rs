use crate::*;

use crate::intersect::Hit;

/// Everything a render pass reads. Built once, then only borrowed.
#[derive(Clone, Debug)]
pub struct Scene {
    pub background: Rgba,
    pub origin: P3,
    pub spheres: Vec<Sphere>,
    pub lights: Vec<Light>,
}

impl Default for Scene {
    fn default() -> Self {
        Scene::new(colors::WHITE, P3::origin())
    }
}

impl Scene {
    pub fn new(background: Rgba, origin: P3) -> Self {
        Scene {
            background,
            origin,
            spheres: vec![],
            lights: vec![],
        }
    }

    pub fn add_sphere(&mut self, sphere: Sphere) -> &mut Sphere {
        self.spheres.push(sphere);
        let last = self.spheres.len() - 1;
        &mut self.spheres[last]
    }

    pub fn add_light(&mut self, light: impl Into<Light>) -> &mut Self {
        self.lights.push(light.into());
        self
    }

    pub fn add_ambient_light(&mut self, intensity: f32) -> &mut Self {
        self.add_light(Light::ambient(intensity))
    }

    pub fn add_point_light(&mut self, intensity: f32, position: P3) -> &mut Self {
        self.add_light(Light::point(intensity, position))
    }

    pub fn add_directional_light(&mut self, intensity: f32, direction: V3) -> &mut Self {
        self.add_light(Light::directional(intensity, direction))
    }

    pub fn test_hit(&self, ray: &Ray, tnear: f32, tfar: f32) -> Option<Hit<'_>> {
        intersect::closest_intersection(self, ray, tnear, tfar)
    }

    /// Whether anything blocks `ray` strictly between `tnear` and `tfar`.
    pub fn occluded(&self, ray: &Ray, tnear: f32, tfar: f32) -> bool {
        self.test_hit(ray, tnear, tfar).is_some()
    }
}

#[test]
fn test_builders_keep_order() {
    let mut scene = Scene::default();
    scene.add_sphere(Sphere::default()).reflectivity = 0.5;
    scene.add_sphere(Sphere::new(P3::new(0.0, 0.0, 5.0), 2.0, colors::BLUE));
    scene
        .add_ambient_light(0.2)
        .add_point_light(0.6, P3::new(2.0, 1.0, 0.0))
        .add_light(lights::Directional {
            intensity: 0.2,
            direction: V3::new(1.0, 4.0, 4.0),
        });

    assert_eq!(scene.background, colors::WHITE);
    assert_eq!(scene.spheres[0].reflectivity, 0.5);
    assert_eq!(scene.spheres[1].color, colors::BLUE);
    assert_eq!(scene.lights.len(), 3);
    assert_eq!(scene.lights[0], Light::ambient(0.2));
    assert!(matches!(scene.lights[2], Light::Directional(_)));
}
