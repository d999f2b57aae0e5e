use crate::camera::Camera;
use crate::config::RenderConfig;
use crate::image::Image;
use crate::intersect::EPSILON;
use crate::scene::Scene;
use crate::stats::{LevelCounts, TraceStats};
use crate::tracer::trace_ray_with_stats;
use crate::*;

use log::*;
use std::time::{Duration, Instant};

pub struct RenderSummary {
    pub elapsed: Duration,
    pub trace_calls: usize,
    pub calls_per_level: LevelCounts,
    pub non_finite: usize,
}

/// Sequential render pass. Each pixel is traced independently, so
/// `render_pixel` is the unit of work for any outer scheduler.
pub struct Renderer {
    config: RenderConfig,
}

impl Renderer {
    pub fn new(config: RenderConfig) -> Self {
        Renderer { config }
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    pub fn camera(&self, scene: &Scene) -> Camera {
        Camera::new(
            scene.origin,
            self.config.viewport,
            self.config.width,
            self.config.height,
        )
    }

    pub fn render_pixel(
        &self,
        scene: &Scene,
        camera: &Camera,
        x: u32,
        y: u32,
        stats: &mut impl TraceStats,
    ) -> Rgba {
        let ray = camera.ray_to(x, y);
        trace_ray_with_stats(
            scene,
            &ray,
            EPSILON,
            f32::INFINITY,
            self.config.recursion_depth,
            stats,
        )
        .color
    }

    pub fn render(&self, scene: &Scene) -> (Image, RenderSummary) {
        let camera = self.camera(scene);
        let mut image = Image::new(camera.w(), camera.h());
        info!(
            "rendering {}x{}: {} spheres, {} lights, depth {}",
            camera.w(),
            camera.h(),
            scene.spheres.len(),
            scene.lights.len(),
            self.config.recursion_depth
        );

        let start = Instant::now();
        let mut stats = (0usize, LevelCounts::new());
        let mut non_finite = 0;
        for y in 0..camera.h() {
            let mut row_stats = (0usize, LevelCounts::new());
            for x in 0..camera.w() {
                let color = self.render_pixel(scene, &camera, x, y, &mut row_stats);
                if !color.is_finite() {
                    non_finite += 1;
                }
                *image.at_mut(x, y) = color;
            }
            debug!("row {} done ({} trace calls)", y, row_stats.0);
            stats.merge(&row_stats);
        }
        let elapsed = start.elapsed();

        if non_finite > 0 {
            warn!("{} pixels are not finite", non_finite);
        }
        info!(
            "render pass took {:.3} ms ({} trace calls, per level {:?})",
            elapsed.as_secs_f64() * 1e3,
            stats.0,
            stats.1.counts()
        );

        let summary = RenderSummary {
            elapsed,
            trace_calls: stats.0,
            calls_per_level: stats.1,
            non_finite,
        };
        (image, summary)
    }
}
