use std::path::Path;

use anyhow::Context;

use crate::foundation::error::{AlbumError, AlbumResult};
use crate::foundation::math::premultiply_rgba8_in_place;

/// Decoded raster in premultiplied RGBA8 form.
#[derive(Clone, Debug, PartialEq)]
pub struct PreparedImage {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Pixel bytes in row-major premultiplied RGBA8.
    pub rgba8_premul: Vec<u8>,
}

impl PreparedImage {
    /// Premultiply a straight-alpha RGBA image.
    pub fn from_rgba(img: image::RgbaImage) -> Self {
        let (width, height) = img.dimensions();
        let mut rgba8_premul = img.into_raw();
        premultiply_rgba8_in_place(&mut rgba8_premul);
        Self {
            width,
            height,
            rgba8_premul,
        }
    }

    pub fn pixel(&self, x: u32, y: u32) -> [u8; 4] {
        let idx = ((y as usize) * (self.width as usize) + (x as usize)) * 4;
        [
            self.rgba8_premul[idx],
            self.rgba8_premul[idx + 1],
            self.rgba8_premul[idx + 2],
            self.rgba8_premul[idx + 3],
        ]
    }
}

/// Read and decode a source photo from disk.
///
/// Any failure (missing file, permission, unsupported or corrupt data) is reported as
/// [`AlbumError::SourceImageNotFound`] carrying the underlying cause.
pub fn load_source_image(path: &Path) -> AlbumResult<image::DynamicImage> {
    let bytes = std::fs::read(path)
        .with_context(|| format!("read image bytes from '{}'", path.display()))
        .map_err(|e| AlbumError::source_not_found(path, e))?;
    decode_image(&bytes).map_err(|e| AlbumError::source_not_found(path, e))
}

/// Decode encoded image bytes, guessing the format from content.
pub fn decode_image(bytes: &[u8]) -> anyhow::Result<image::DynamicImage> {
    image::load_from_memory(bytes).context("decode image from memory")
}

#[cfg(test)]
#[path = "../../tests/unit/assets/decode.rs"]
mod tests;
