use crate::error::{Error, Result};
use crate::*;

use std::path::Path;

/// Unclamped render target; conversion to display values happens on write.
pub struct Image {
    w: u32,
    h: u32,
    buf: Vec<Rgba>,
}

impl Image {
    pub fn new(w: u32, h: u32) -> Self {
        Self::filled(w, h, colors::BLACK)
    }

    pub fn filled(w: u32, h: u32, color: Rgba) -> Self {
        let mut buf = Vec::new();
        buf.resize(w as usize * h as usize, color);
        Image { w, h, buf }
    }

    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.w as usize + x as usize
    }

    pub fn at(&self, x: u32, y: u32) -> &Rgba {
        &self.buf[self.index(x, y)]
    }

    pub fn at_mut(&mut self, x: u32, y: u32) -> &mut Rgba {
        let i = self.index(x, y);
        &mut self.buf[i]
    }

    pub fn pixels(&self) -> &[Rgba] {
        &self.buf[..]
    }

    pub fn w(&self) -> u32 {
        self.w
    }

    pub fn h(&self) -> u32 {
        self.h
    }

    /// Pick the encoder from the file extension.
    pub fn write(&self, path: &Path, range: ColorRange) -> Result<()> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());
        match ext.as_deref() {
            Some("png") => self.write_png(path, range),
            Some("exr") => self.write_exr(path, range),
            _ => Err(Error::UnsupportedFormat(path.display().to_string())),
        }
    }

    /// 8-bit sRGB-agnostic PNG; channels are clamped into `range`.
    pub fn write_png(&self, path: &Path, range: ColorRange) -> Result<()> {
        let img = ::image::RgbImage::from_fn(self.w, self.h, |x, y| {
            ::image::Rgb(self.at(x, y).to_rgb8(range))
        });
        img.save(path)?;
        Ok(())
    }

    /// Linear float EXR; values above the nominal range are kept.
    pub fn write_exr(&self, path: &Path, range: ColorRange) -> Result<()> {
        let img = ::image::Rgb32FImage::from_fn(self.w, self.h, |x, y| {
            ::image::Rgb(self.at(x, y).to_linear_rgb(range))
        });
        img.save(path)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indexing_is_row_major() {
        let mut img = Image::new(3, 2);
        *img.at_mut(2, 1) = colors::RED;
        assert_eq!(img.pixels()[5], colors::RED);
        assert_eq!(*img.at(0, 0), colors::BLACK);
        assert_eq!((img.w(), img.h()), (3, 2));
    }

    #[test]
    fn wide_rows_index_past_u32() {
        let img = Image::new(70_000, 1);
        assert_eq!(img.index(69_999, 0), 69_999);
        assert_eq!(img.index(5, 70_000), 70_000usize * 70_000 + 5);
    }

    #[test]
    fn png_round_trip_clamps() {
        let mut img = Image::filled(2, 1, colors::GRAY);
        *img.at_mut(1, 0) = colors::WHITE * 3.0;
        let path = std::env::temp_dir().join(format!("raytracer-test-{}.png", std::process::id()));
        img.write(&path, ColorRange::Byte).unwrap();

        let read = ::image::open(&path).unwrap().to_rgb8();
        std::fs::remove_file(&path).unwrap();
        assert_eq!(read.get_pixel(0, 0).0, [128, 128, 128]);
        assert_eq!(read.get_pixel(1, 0).0, [255, 255, 255]);
    }

    #[test]
    fn unknown_extension_is_rejected() {
        let img = Image::new(1, 1);
        let err = img.write(Path::new("out.bmp"), ColorRange::Unit).unwrap_err();
        assert!(matches!(err, Error::UnsupportedFormat(_)));
    }
}
