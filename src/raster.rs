//! # Raster
//!
//! The pixel container the engine reads from and writes to: width, height and a
//! dense row-major buffer of 8-bit samples, either RGB or RGBA.
//!
//! A `Raster` is validated on construction (`data.len() == width * height * channels`)
//! and never mutated by the renderer. Rendering always produces a fresh RGBA raster.
//!
//! ```
//! use halftoner::raster::{Channels, Raster};
//!
//! let gray = Raster::new(2, 1, Channels::Rgb, vec![10, 20, 30, 200, 200, 200])?;
//! assert_eq!(gray.rgb(1, 0), [200, 200, 200]);
//! # Ok::<(), halftoner::HalftoneError>(())
//! ```

use image::{DynamicImage, Rgba, RgbImage, RgbaImage};

use crate::error::{HalftoneError, Result};

/// Sample layout of a raster buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channels {
    Rgb,
    Rgba,
}

impl Channels {
    /// Bytes per pixel.
    #[inline]
    pub fn count(self) -> usize {
        match self {
            Channels::Rgb => 3,
            Channels::Rgba => 4,
        }
    }
}

/// Dense row-major 8-bit image buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Raster {
    width: u32,
    height: u32,
    channels: Channels,
    data: Vec<u8>,
}

impl Raster {
    /// Wrap a pixel buffer, checking its length against the dimensions.
    pub fn new(width: u32, height: u32, channels: Channels, data: Vec<u8>) -> Result<Self> {
        let expected = (width as usize)
            .checked_mul(height as usize)
            .and_then(|n| n.checked_mul(channels.count()))
            .ok_or_else(|| {
                HalftoneError::InvalidConfig(format!("raster {}x{} is too large", width, height))
            })?;

        if data.len() != expected {
            return Err(HalftoneError::InvalidConfig(format!(
                "raster {}x{} with {} channels needs {} bytes, got {}",
                width,
                height,
                channels.count(),
                expected,
                data.len()
            )));
        }

        Ok(Self {
            width,
            height,
            channels,
            data,
        })
    }

    pub fn from_rgb(width: u32, height: u32, data: Vec<u8>) -> Result<Self> {
        Self::new(width, height, Channels::Rgb, data)
    }

    pub fn from_rgba(width: u32, height: u32, data: Vec<u8>) -> Result<Self> {
        Self::new(width, height, Channels::Rgba, data)
    }

    /// An RGBA raster where every pixel is `rgba`.
    pub fn filled(width: u32, height: u32, rgba: [u8; 4]) -> Self {
        let pixels = width as usize * height as usize;
        let mut data = Vec::with_capacity(pixels * 4);
        for _ in 0..pixels {
            data.extend_from_slice(&rgba);
        }
        Self {
            width,
            height,
            channels: Channels::Rgba,
            data,
        }
    }

    /// An opaque white RGBA raster.
    pub fn white(width: u32, height: u32) -> Self {
        Self::filled(width, height, [255, 255, 255, 255])
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    #[inline]
    pub fn channels(&self) -> Channels {
        self.channels
    }

    /// True when the raster has zero area.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn into_data(self) -> Vec<u8> {
        self.data
    }

    #[inline]
    fn offset(&self, x: u32, y: u32) -> usize {
        (y as usize * self.width as usize + x as usize) * self.channels.count()
    }

    /// Color channels of the pixel at (x, y).
    ///
    /// Panics if (x, y) is outside the raster.
    #[inline]
    pub fn rgb(&self, x: u32, y: u32) -> [u8; 3] {
        let i = self.offset(x, y);
        [self.data[i], self.data[i + 1], self.data[i + 2]]
    }

    /// Pixel at (x, y) as RGBA; RGB rasters report full alpha.
    ///
    /// Panics if (x, y) is outside the raster.
    #[inline]
    pub fn rgba(&self, x: u32, y: u32) -> [u8; 4] {
        let i = self.offset(x, y);
        let alpha = match self.channels {
            Channels::Rgb => 255,
            Channels::Rgba => self.data[i + 3],
        };
        [self.data[i], self.data[i + 1], self.data[i + 2], alpha]
    }

    /// Unweighted mean of the three color channels at (x, y), in [0, 255].
    #[inline]
    pub fn brightness(&self, x: u32, y: u32) -> f32 {
        let [r, g, b] = self.rgb(x, y);
        (r as f32 + g as f32 + b as f32) / 3.0
    }

    /// Copy into an `image` RGBA buffer.
    pub fn to_rgba_image(&self) -> RgbaImage {
        RgbaImage::from_fn(self.width, self.height, |x, y| Rgba(self.rgba(x, y)))
    }

    /// Copy out of any decoded `image` buffer, keeping alpha.
    pub fn from_dynamic(img: &DynamicImage) -> Self {
        Self::from(img.to_rgba8())
    }
}

impl From<RgbaImage> for Raster {
    fn from(img: RgbaImage) -> Self {
        let (width, height) = img.dimensions();
        Self {
            width,
            height,
            channels: Channels::Rgba,
            data: img.into_raw(),
        }
    }
}

impl From<RgbImage> for Raster {
    fn from(img: RgbImage) -> Self {
        let (width, height) = img.dimensions();
        Self {
            width,
            height,
            channels: Channels::Rgb,
            data: img.into_raw(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_wrong_length() {
        let err = Raster::new(2, 2, Channels::Rgb, vec![0; 11]).unwrap_err();
        assert!(matches!(err, HalftoneError::InvalidConfig(_)));
    }

    #[test]
    fn test_new_accepts_exact_length() {
        let raster = Raster::new(2, 2, Channels::Rgba, vec![0; 16]).unwrap();
        assert_eq!(raster.dimensions(), (2, 2));
        assert_eq!(raster.channels(), Channels::Rgba);
    }

    #[test]
    fn test_zero_area_is_empty() {
        assert!(Raster::white(0, 5).is_empty());
        assert!(Raster::white(5, 0).is_empty());
        assert!(!Raster::white(1, 1).is_empty());
        assert!(Raster::from_rgb(0, 0, vec![]).is_ok());
    }

    #[test]
    fn test_brightness_is_channel_mean() {
        let raster = Raster::from_rgb(1, 1, vec![30, 60, 90]).unwrap();
        assert!((raster.brightness(0, 0) - 60.0).abs() < 1e-6);
    }

    #[test]
    fn test_rgb_ignores_alpha() {
        let raster = Raster::from_rgba(1, 1, vec![255, 255, 255, 0]).unwrap();
        assert_eq!(raster.rgb(0, 0), [255, 255, 255]);
        assert_eq!(raster.rgba(0, 0), [255, 255, 255, 0]);
    }

    #[test]
    fn test_row_major_layout() {
        let data = vec![
            0, 0, 0, 10, 10, 10, //
            20, 20, 20, 30, 30, 30,
        ];
        let raster = Raster::from_rgb(2, 2, data).unwrap();
        assert_eq!(raster.rgb(1, 0), [10, 10, 10]);
        assert_eq!(raster.rgb(0, 1), [20, 20, 20]);
        assert_eq!(raster.rgba(1, 1), [30, 30, 30, 255]);
    }

    #[test]
    fn test_image_roundtrip_keeps_pixels() {
        let mut img = RgbaImage::new(3, 2);
        img.put_pixel(2, 1, Rgba([1, 2, 3, 4]));
        let raster = Raster::from(img.clone());
        assert_eq!(raster.to_rgba_image(), img);
    }

    #[test]
    fn test_from_rgb_image() {
        let img = RgbImage::from_pixel(4, 3, image::Rgb([9, 8, 7]));
        let raster = Raster::from(img);
        assert_eq!(raster.channels(), Channels::Rgb);
        assert_eq!(raster.data().len(), 4 * 3 * 3);
        assert_eq!(raster.rgba(3, 2), [9, 8, 7, 255]);
    }
}
