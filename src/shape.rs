use crate::*;

#[derive(Clone, Debug)]
pub struct Sphere {
    pub center: P3,
    pub radius: f32,
    pub color: Rgba,
    /// Phong exponent; `None` means the surface has no highlight.
    pub specular: Option<f32>,
    /// Share of the final color taken from the mirrored ray, in `[0, 1]`.
    pub reflectivity: f32,
}

impl Sphere {
    pub fn new(center: P3, radius: f32, color: Rgba) -> Self {
        Sphere {
            center,
            radius,
            color,
            specular: None,
            reflectivity: 0.0,
        }
    }

    pub fn specular(mut self, exponent: f32) -> Self {
        self.specular = Some(exponent);
        self
    }

    pub fn reflective(mut self, reflectivity: f32) -> Self {
        self.reflectivity = reflectivity;
        self
    }

    /// Outward unit normal at a point on the surface.
    pub fn normal_at(&self, pos: &P3) -> V3 {
        (pos - self.center).normalized()
    }
}

impl Default for Sphere {
    fn default() -> Self {
        Sphere::new(P3::origin(), 1.0, colors::MAGENTA)
    }
}

#[test]
fn test_builder() {
    let s = Sphere::new(P3::new(0.0, 0.0, 3.0), 2.0, colors::RED)
        .specular(500.0)
        .reflective(0.3);
    assert_eq!(s.specular, Some(500.0));
    assert_eq!(s.reflectivity, 0.3);
    assert_eq!(s.normal_at(&P3::new(0.0, 2.0, 3.0)), V3::new(0.0, 1.0, 0.0));

    let d = Sphere::default();
    assert_eq!(d.specular, None);
    assert_eq!(d.reflectivity, 0.0);
}
