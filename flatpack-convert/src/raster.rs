//! Flattened raster images and PNG encoding.

use crate::error::{ConvertError, ConvertResult};
use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder};

/// A flattened RGBA raster produced by the layered-image decoder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RasterImage {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl RasterImage {
    /// Creates a raster from an RGBA8 pixel buffer.
    ///
    /// # Errors
    ///
    /// Returns [`ConvertError::InvalidRaster`] when the buffer length does
    /// not equal `width * height * 4`.
    pub fn from_rgba8(width: u32, height: u32, pixels: Vec<u8>) -> ConvertResult<Self> {
        let expected = width as usize * height as usize * 4;
        if pixels.len() != expected {
            return Err(ConvertError::InvalidRaster {
                width,
                height,
                expected,
                actual: pixels.len(),
            });
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Width in pixels.
    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Encodes the raster as a PNG byte stream.
    pub fn to_png(&self) -> ConvertResult<Vec<u8>> {
        let mut out = Vec::new();
        PngEncoder::new(&mut out).write_image(
            &self.pixels,
            self.width,
            self.height,
            ExtendedColorType::Rgba8,
        )?;
        Ok(out)
    }
}
