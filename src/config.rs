use crate::camera::Viewport;
use crate::color::ColorRange;
use crate::tracer::DEFAULT_RECURSION_DEPTH;

/// Largest accepted image side in pixels.
pub const MAX_DIMENSION: u32 = 1 << 15;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RenderConfig {
    pub width: u32,
    pub height: u32,
    pub viewport: Viewport,
    pub recursion_depth: u32,
    /// Channel encoding the scene's colors are authored in.
    pub color_range: ColorRange,
}

impl Default for RenderConfig {
    fn default() -> Self {
        RenderConfig {
            width: 400,
            height: 400,
            viewport: Viewport::default(),
            recursion_depth: DEFAULT_RECURSION_DEPTH,
            color_range: ColorRange::Byte,
        }
    }
}
