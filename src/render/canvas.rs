use std::{fs::File, io::BufWriter, path::Path};

use anyhow::Context;
use image::buffer::ConvertBuffer;

use crate::foundation::error::{AlbumError, AlbumResult};

/// An opaque RGBA8 raster: a composed page or a generated sample.
///
/// Alpha is always 255, so the pixels are both straight and premultiplied.
#[derive(Clone, Debug, PartialEq)]
pub struct Canvas {
    image: image::RgbaImage,
}

impl Canvas {
    /// A `width` x `height` canvas filled with `rgba`; alpha is forced opaque.
    pub fn filled(width: u32, height: u32, rgba: [u8; 4]) -> Self {
        let [r, g, b, _] = rgba;
        Self {
            image: image::RgbaImage::from_pixel(width, height, image::Rgba([r, g, b, 255])),
        }
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// Pixel at `(x, y)`. Panics when out of bounds, like `image::ImageBuffer`.
    pub fn pixel(&self, x: u32, y: u32) -> [u8; 4] {
        self.image.get_pixel(x, y).0
    }

    pub(crate) fn pixel_mut(&mut self, x: u32, y: u32) -> &mut [u8] {
        &mut self.image.get_pixel_mut(x, y).0
    }

    pub fn as_rgba_image(&self) -> &image::RgbaImage {
        &self.image
    }

    pub fn into_rgba_image(self) -> image::RgbaImage {
        self.image
    }

    /// Encode as baseline JPEG at `quality` (1..=100).
    pub fn encode_jpeg(&self, quality: u8) -> AlbumResult<Vec<u8>> {
        let mut buf = Vec::new();
        self.encode_jpeg_to(&mut buf, quality)?;
        Ok(buf)
    }

    /// Write the canvas as a JPEG file, replacing any existing file.
    pub fn write_jpeg(&self, path: &Path, quality: u8) -> AlbumResult<()> {
        let f = File::create(path)
            .with_context(|| format!("create output file '{}'", path.display()))?;
        let mut w = BufWriter::new(f);
        self.encode_jpeg_to(&mut w, quality)?;
        std::io::Write::flush(&mut w)
            .with_context(|| format!("flush output file '{}'", path.display()))?;
        Ok(())
    }

    fn encode_jpeg_to<W: std::io::Write>(&self, w: &mut W, quality: u8) -> AlbumResult<()> {
        if !(1..=100).contains(&quality) {
            return Err(AlbumError::config(format!(
                "jpeg quality must be within 1..=100, got {quality}"
            )));
        }
        let rgb: image::RgbImage = self.image.convert();
        let mut encoder = image::codecs::jpeg::JpegEncoder::new_with_quality(w, quality);
        encoder
            .encode(
                rgb.as_raw(),
                rgb.width(),
                rgb.height(),
                image::ExtendedColorType::Rgb8,
            )
            .context("encode jpeg")?;
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/canvas.rs"]
mod tests;
