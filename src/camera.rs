use crate::*;

/// Rectangle of the projection plane, `distance` in front of the camera along +z.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
    pub distance: f32,
}

impl Default for Viewport {
    fn default() -> Self {
        Viewport {
            width: 1.0,
            height: 1.0,
            distance: 1.0,
        }
    }
}

/// Pinhole camera at the scene origin looking down +z through a [`Viewport`].
#[derive(Clone, Debug)]
pub struct Camera {
    origin: P3,
    viewport: Viewport,
    w: u32,
    h: u32,
}

impl Camera {
    pub fn new(origin: P3, viewport: Viewport, w: u32, h: u32) -> Self {
        Camera {
            origin,
            viewport,
            w,
            h,
        }
    }

    /// Map pixel `(x, y)` (top-left origin, y down) to a point on the viewport plane.
    pub fn canvas_to_viewport(&self, x: u32, y: u32) -> V3 {
        let cx = x as f32 - self.w as f32 / 2.0;
        let cy = self.h as f32 / 2.0 - y as f32;
        V3::new(
            cx * self.viewport.width / self.w as f32,
            cy * self.viewport.height / self.h as f32,
            self.viewport.distance,
        )
    }

    pub fn ray_to(&self, x: u32, y: u32) -> Ray {
        Ray::new(self.origin, self.canvas_to_viewport(x, y))
    }

    pub fn w(&self) -> u32 {
        self.w
    }

    pub fn h(&self) -> u32 {
        self.h
    }
}

#[test]
fn test_canvas_to_viewport() {
    let cam = Camera::new(P3::origin(), Viewport::default(), 400, 400);
    assert_eq!(cam.canvas_to_viewport(200, 200), V3::new(0.0, 0.0, 1.0));
    assert_eq!(cam.canvas_to_viewport(0, 0), V3::new(-0.5, 0.5, 1.0));
    assert_eq!(cam.canvas_to_viewport(400, 400), V3::new(0.5, -0.5, 1.0));

    let wide = Viewport {
        width: 2.0,
        height: 1.0,
        distance: 3.0,
    };
    let cam = Camera::new(P3::new(0.0, 1.0, 0.0), wide, 200, 100);
    assert_eq!(cam.canvas_to_viewport(150, 25), V3::new(0.5, 0.25, 3.0));

    let ray = cam.ray_to(100, 50);
    assert_eq!(ray.origin, P3::new(0.0, 1.0, 0.0));
    assert_eq!(ray.dir, V3::new(0.0, 0.0, 1.0));
}
