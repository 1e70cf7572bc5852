use std::{fs::File, io::BufReader, path::Path, path::PathBuf};

use anyhow::Context;

use crate::foundation::error::{AlbumError, AlbumResult};

/// Resampling filter used by the crop-resize step.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResizeFilter {
    Nearest,
    Triangle,
    CatmullRom,
    #[default]
    Lanczos3,
}

impl ResizeFilter {
    pub(crate) fn to_image_filter(self) -> image::imageops::FilterType {
        match self {
            Self::Nearest => image::imageops::FilterType::Nearest,
            Self::Triangle => image::imageops::FilterType::Triangle,
            Self::CatmullRom => image::imageops::FilterType::CatmullRom,
            Self::Lanczos3 => image::imageops::FilterType::Lanczos3,
        }
    }
}

/// How caption text is drawn.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CaptionStyle {
    /// Preferred family; falls back to sans-serif when not installed.
    pub font_family: String,
    /// Text size in pixels.
    pub point_size: f32,
    pub bold: bool,
    /// Straight (non-premultiplied) RGBA8 fill.
    pub fill_rgba: [u8; 4],
}

impl Default for CaptionStyle {
    fn default() -> Self {
        Self {
            font_family: "Chicago".to_string(),
            point_size: 24.0,
            bold: true,
            fill_rgba: [255, 255, 255, 255],
        }
    }
}

/// Compositor configuration. Every field has a default, so an empty JSON object is valid.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ComposeSettings {
    /// Page background, straight RGBA8. Alpha is forced opaque when the page is created.
    pub background_rgba: [u8; 4],
    /// Fill of generated sample images.
    pub sample_fill_rgba: [u8; 4],
    pub resize_filter: ResizeFilter,
    pub caption: CaptionStyle,
    /// Extra directories scanned for `.ttf`/`.otf`/`.ttc` fonts.
    pub font_dirs: Vec<PathBuf>,
    /// JPEG quality, 1..=100.
    pub jpeg_quality: u8,
}

impl Default for ComposeSettings {
    fn default() -> Self {
        Self {
            background_rgba: [0, 0, 0, 255],
            sample_fill_rgba: [0xAA, 0xAA, 0xAA, 255],
            resize_filter: ResizeFilter::default(),
            caption: CaptionStyle::default(),
            font_dirs: Vec::new(),
            jpeg_quality: 90,
        }
    }
}

impl ComposeSettings {
    /// Load settings from a JSON file and validate them.
    pub fn from_json_file(path: &Path) -> AlbumResult<Self> {
        let f = File::open(path).with_context(|| format!("open settings '{}'", path.display()))?;
        let settings: Self = serde_json::from_reader(BufReader::new(f))
            .map_err(|e| AlbumError::config(format!("parse '{}': {e}", path.display())))?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> AlbumResult<()> {
        if !(1..=100).contains(&self.jpeg_quality) {
            return Err(AlbumError::config(format!(
                "jpeg_quality must be within 1..=100, got {}",
                self.jpeg_quality
            )));
        }
        if !self.caption.point_size.is_finite() || self.caption.point_size <= 0.0 {
            return Err(AlbumError::config("caption point_size must be > 0"));
        }
        if self.caption.font_family.trim().is_empty() {
            return Err(AlbumError::config("caption font_family must be non-empty"));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/settings.rs"]
mod tests;
