use std::ops::{Add, AddAssign, Mul, MulAssign, Sub};

/// How the channels of an [`Rgba`] are encoded.
///
/// Shading never clamps, so values may leave this range until the output stage.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ColorRange {
    /// Channels are normalized floats in `[0, 1]`.
    Unit,
    /// Channels are 8-bit values in `[0, 255]`.
    Byte,
}

impl ColorRange {
    pub fn max(self) -> f32 {
        match self {
            ColorRange::Unit => 1.0,
            ColorRange::Byte => 255.0,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgba {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Rgba {
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Rgba { r, g, b, a }
    }

    pub const fn all(x: f32) -> Self {
        Self::new(x, x, x, x)
    }

    pub fn is_finite(&self) -> bool {
        self.r.is_finite() && self.g.is_finite() && self.b.is_finite() && self.a.is_finite()
    }

    /// Clamp into `range` and convert to 8-bit RGB for presentation. Alpha is dropped.
    pub fn to_rgb8(&self, range: ColorRange) -> [u8; 3] {
        let scale = 255.0 / range.max();
        let channel = |x: f32| (x * scale).max(0.0).min(255.0).round() as u8;
        [channel(self.r), channel(self.g), channel(self.b)]
    }

    /// Linear RGB rescaled so that `range.max()` maps to 1.0. Not clamped.
    pub fn to_linear_rgb(&self, range: ColorRange) -> [f32; 3] {
        let max = range.max();
        [self.r / max, self.g / max, self.b / max]
    }
}

pub mod colors {
    use super::Rgba;

    pub const WHITE: Rgba = Rgba::new(255.0, 255.0, 255.0, 255.0);
    pub const BLACK: Rgba = Rgba::new(0.0, 0.0, 0.0, 255.0);
    pub const RED: Rgba = Rgba::new(255.0, 0.0, 0.0, 255.0);
    pub const GREEN: Rgba = Rgba::new(0.0, 255.0, 0.0, 255.0);
    pub const BLUE: Rgba = Rgba::new(0.0, 0.0, 255.0, 255.0);
    pub const YELLOW: Rgba = Rgba::new(255.0, 255.0, 0.0, 255.0);
    pub const CYAN: Rgba = Rgba::new(0.0, 255.0, 255.0, 255.0);
    pub const MAGENTA: Rgba = Rgba::new(255.0, 0.0, 255.0, 255.0);
    pub const GRAY: Rgba = Rgba::new(128.0, 128.0, 128.0, 255.0);
    pub const ORANGE: Rgba = Rgba::new(255.0, 165.0, 0.0, 255.0);
    pub const PURPLE: Rgba = Rgba::new(128.0, 0.0, 128.0, 255.0);
    pub const BROWN: Rgba = Rgba::new(165.0, 42.0, 42.0, 255.0);
}

impl<'a> Add<&'a Self> for Rgba {
    type Output = Self;
    fn add(self, rhs: &'a Self) -> Self {
        Rgba {
            r: self.r + rhs.r,
            g: self.g + rhs.g,
            b: self.b + rhs.b,
            a: self.a + rhs.a,
        }
    }
}

impl Add for Rgba {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        self.add(&rhs)
    }
}

impl AddAssign for Rgba {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl<'a> Sub<&'a Self> for Rgba {
    type Output = Self;
    fn sub(self, rhs: &'a Self) -> Self {
        Rgba {
            r: self.r - rhs.r,
            g: self.g - rhs.g,
            b: self.b - rhs.b,
            a: self.a - rhs.a,
        }
    }
}

impl Sub for Rgba {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        self.sub(&rhs)
    }
}

impl Mul<f32> for Rgba {
    type Output = Self;
    fn mul(self, rhs: f32) -> Self {
        Rgba {
            r: self.r * rhs,
            g: self.g * rhs,
            b: self.b * rhs,
            a: self.a * rhs,
        }
    }
}

impl Mul<Rgba> for f32 {
    type Output = Rgba;
    fn mul(self, rhs: Rgba) -> Rgba {
        rhs * self
    }
}

impl MulAssign<f32> for Rgba {
    fn mul_assign(&mut self, rhs: f32) {
        *self = *self * rhs;
    }
}

#[test]
fn test_scale_does_not_clamp() {
    let c = colors::RED * 2.0;
    assert_eq!(c, Rgba::new(510.0, 0.0, 0.0, 510.0));
    assert_eq!(0.5 * colors::WHITE, Rgba::all(127.5));
    assert_eq!(colors::RED + colors::GREEN - colors::BLACK, Rgba::new(255.0, 255.0, 0.0, 255.0));
}

#[test]
fn test_output_clamping() {
    assert_eq!(Rgba::new(510.0, -3.0, 100.0, 0.0).to_rgb8(ColorRange::Byte), [255, 0, 100]);
    assert_eq!(Rgba::new(2.0, 0.5, 0.0, 1.0).to_rgb8(ColorRange::Unit), [255, 128, 0]);
    assert_eq!(colors::GRAY.to_linear_rgb(ColorRange::Byte)[0], 128.0 / 255.0);
    assert_eq!(Rgba::new(2.0, 0.0, 0.0, 1.0).to_linear_rgb(ColorRange::Unit), [2.0, 0.0, 0.0]);
}
