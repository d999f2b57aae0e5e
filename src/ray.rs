use crate::*;

#[derive(Clone, Debug)]
pub struct Ray {
    pub origin: P3,
    /// Always unit length.
    pub dir: V3,
    pub max_dist: f32,
}

impl Ray {
    pub fn new(origin: P3, dir: V3) -> Self {
        Self::with_max_dist(origin, dir, f32::MAX)
    }

    pub fn with_max_dist(origin: P3, dir: V3, max_dist: f32) -> Self {
        Ray {
            origin,
            dir: dir.normalized(),
            max_dist,
        }
    }

    pub fn from_to(from: &P3, to: &P3) -> Self {
        Self::new(*from, to - from)
    }

    pub fn at(&self, t: f32) -> P3 {
        self.origin + self.dir * t
    }
}

/// Result of tracing one ray: hit distance and the color resolved there.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RayPayload {
    pub t: f32,
    pub color: Rgba,
}

impl RayPayload {
    pub fn new(t: f32, color: Rgba) -> Self {
        RayPayload { t, color }
    }

    pub fn miss(background: Rgba) -> Self {
        Self::new(f32::INFINITY, background)
    }

    pub fn is_miss(&self) -> bool {
        self.t == f32::INFINITY
    }
}

#[test]
fn test_direction_is_normalized() {
    let ray = Ray::new(P3::origin(), V3::new(0.0, 3.0, 4.0));
    assert!((ray.dir.length() - 1.0).abs() < 1e-6);
    assert_eq!(ray.max_dist, f32::MAX);
    assert!((ray.at(5.0) - P3::new(0.0, 3.0, 4.0)).length() < 1e-5);

    let ray = Ray::from_to(&P3::new(1.0, 1.0, 1.0), &P3::new(1.0, 1.0, 3.0));
    assert_eq!(ray.dir, V3::new(0.0, 0.0, 1.0));
}
