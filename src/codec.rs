//! # Codec
//!
//! Decoding file bytes into a [`Raster`] and encoding rendered rasters back to
//! image files. The render engine never touches encoded data; callers go through
//! these functions before and after a render.
//!
//! Formats are whatever the `image` crate was built with. HEIC/HEIF photos are
//! detected by their `ftyp` brand and decoded through libheif when the `heif`
//! feature is enabled.

use image::{DynamicImage, ImageFormat};
use std::io::Cursor;
use std::path::Path;

use crate::error::{HalftoneError, Result};
use crate::raster::Raster;

/// Decode an in-memory image file.
pub fn decode(bytes: &[u8]) -> Result<Raster> {
    let img = decode_dynamic(bytes)?;
    Ok(Raster::from_dynamic(&img))
}

/// Read and decode an image file from disk.
pub fn open(path: impl AsRef<Path>) -> Result<Raster> {
    let path = path.as_ref();
    let bytes = std::fs::read(path)?;
    decode(&bytes).map_err(|e| match e {
        HalftoneError::Image(msg) => {
            HalftoneError::Image(format!("{}: {}", path.display(), msg))
        }
        other => other,
    })
}

/// Encode a raster as PNG.
pub fn encode_png(raster: &Raster) -> Result<Vec<u8>> {
    let mut bytes = Vec::new();
    raster
        .to_rgba_image()
        .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
        .map_err(|e| HalftoneError::Image(format!("Failed to encode PNG: {}", e)))?;
    Ok(bytes)
}

/// Write a raster to disk; the format follows the file extension.
///
/// Formats without alpha (e.g. JPEG) receive the RGB channels only.
pub fn save(raster: &Raster, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let format = ImageFormat::from_path(path).map_err(|e| {
        HalftoneError::Image(format!("Unsupported output {}: {}", path.display(), e))
    })?;

    let img = DynamicImage::ImageRgba8(raster.to_rgba_image());
    let img = match format {
        ImageFormat::Png | ImageFormat::WebP | ImageFormat::Tiff | ImageFormat::Tga => img,
        _ => DynamicImage::ImageRgb8(img.to_rgb8()),
    };

    img.save_with_format(path, format)
        .map_err(|e| HalftoneError::Image(format!("Failed to save {}: {}", path.display(), e)))
}

fn decode_dynamic(bytes: &[u8]) -> Result<DynamicImage> {
    if is_heic(bytes) {
        return decode_heic(bytes);
    }
    image::load_from_memory(bytes)
        .map_err(|e| HalftoneError::Image(format!("Failed to decode image: {}", e)))
}

/// Check whether the bytes look like an ISO-BMFF HEIC/HEIF container.
pub fn is_heic(data: &[u8]) -> bool {
    if data.len() < 12 {
        return false;
    }

    // HEIC files start with a box size (4 bytes) followed by "ftyp" (bytes 4-7)
    if &data[4..8] != b"ftyp" {
        return false;
    }

    // Check the brand (bytes 8-11) for HEIC-related identifiers
    let brand = &data[8..12];
    matches!(
        brand,
        b"heic" | b"heix" | b"hevc" | b"hevx" | b"heim" | b"heis" | b"hevm" | b"hevs" | b"mif1" | b"msf1"
    )
}

#[cfg(feature = "heif")]
fn decode_heic(data: &[u8]) -> Result<DynamicImage> {
    use image::RgbImage;
    use libheif_rs::{ColorSpace, HeifContext, LibHeif, RgbChroma};

    let heic_err = |what: &str, e: &dyn std::fmt::Display| {
        HalftoneError::Image(format!("Failed to {} HEIC: {}", what, e))
    };

    let lib_heif = LibHeif::new();
    let ctx = HeifContext::read_from_bytes(data).map_err(|e| heic_err("read", &e))?;
    let handle = ctx
        .primary_image_handle()
        .map_err(|e| heic_err("open primary image of", &e))?;
    let decoded = lib_heif
        .decode(&handle, ColorSpace::Rgb(RgbChroma::Rgb), None)
        .map_err(|e| heic_err("decode", &e))?;

    let planes = decoded.planes();
    let interleaved = planes
        .interleaved
        .ok_or_else(|| HalftoneError::Image("No interleaved RGB data in HEIC".to_string()))?;

    let width = decoded.width();
    let height = decoded.height();
    let stride = interleaved.stride;
    let pixels = interleaved.data;

    // Rows may be padded past width * 3
    let mut rgb = RgbImage::new(width, height);
    for y in 0..height {
        for x in 0..width {
            let offset = y as usize * stride + x as usize * 3;
            if offset + 2 < pixels.len() {
                rgb.put_pixel(
                    x,
                    y,
                    image::Rgb([pixels[offset], pixels[offset + 1], pixels[offset + 2]]),
                );
            }
        }
    }

    Ok(DynamicImage::ImageRgb8(rgb))
}

#[cfg(not(feature = "heif"))]
fn decode_heic(_data: &[u8]) -> Result<DynamicImage> {
    Err(HalftoneError::Image(
        "HEIC/HEIF input needs the `heif` feature".to_string(),
    ))
}
