use std::path::{Path, PathBuf};

use crate::foundation::core::Gravity;
use crate::foundation::error::AlbumResult;
use crate::render::canvas::Canvas;
use crate::render::compositor::PageCompositor;

/// Orientation of a generated placeholder photo.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SampleKind {
    Portrait,
    Landscape,
}

impl SampleKind {
    pub fn file_name(self) -> &'static str {
        match self {
            Self::Portrait => "_sample_portrait.jpg",
            Self::Landscape => "_sample_landscape.jpg",
        }
    }

    pub fn dimensions(self) -> (u32, u32) {
        match self {
            Self::Portrait => (240, 336),
            Self::Landscape => (336, 240),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Portrait => "Portrait",
            Self::Landscape => "Landscape",
        }
    }
}

/// Where the two placeholder images live.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SamplePaths {
    pub portrait: PathBuf,
    pub landscape: PathBuf,
}

impl SamplePaths {
    pub fn in_dir(dir: &Path) -> Self {
        Self {
            portrait: dir.join(SampleKind::Portrait.file_name()),
            landscape: dir.join(SampleKind::Landscape.file_name()),
        }
    }

    pub fn get(&self, kind: SampleKind) -> &Path {
        match kind {
            SampleKind::Portrait => &self.portrait,
            SampleKind::Landscape => &self.landscape,
        }
    }
}

/// Create the portrait and landscape placeholders in `dir` unless they already exist.
///
/// Existing files are never rewritten, so repeated calls leave them byte-identical.
#[tracing::instrument(skip(compositor), fields(dir = %dir.display()))]
pub fn ensure_samples(dir: &Path, compositor: &PageCompositor) -> AlbumResult<SamplePaths> {
    let paths = SamplePaths::in_dir(dir);
    for kind in [SampleKind::Portrait, SampleKind::Landscape] {
        let path = paths.get(kind);
        if path.exists() {
            tracing::debug!(path = %path.display(), "sample already present");
            continue;
        }
        let sample = render_sample(kind, compositor)?;
        sample.write_jpeg(path, compositor.settings().jpeg_quality)?;
        tracing::debug!(path = %path.display(), "sample written");
    }
    Ok(paths)
}

/// Gray placeholder with its orientation name centered on it.
pub fn render_sample(kind: SampleKind, compositor: &PageCompositor) -> AlbumResult<Canvas> {
    let (w, h) = kind.dimensions();
    let mut canvas = Canvas::filled(w, h, compositor.settings().sample_fill_rgba);
    compositor.draw_caption(&mut canvas, kind.label(), Gravity::Center)?;
    Ok(canvas)
}

use SampleKind::{Landscape as L, Portrait as P};

static SAMPLE_PAGES: [(&str, &[SampleKind]); 32] = [
    ("1-46-V", &[P]),
    ("1-57-V-B", &[P]),
    ("1-57-V-T", &[P]),
    ("1-57-V-RT", &[P]),
    ("1-57-H-B", &[L]),
    ("1-57-H-T", &[L]),
    ("1-510-V", &[P]),
    ("1-810-V", &[P]),
    ("2-46-1", &[P, P]),
    ("2-46-2", &[L, L]),
    ("2-57-2", &[L, L]),
    ("2-M-45", &[P, L]),
    ("2-M-47", &[L, P]),
    ("2-M-31", &[P, L]),
    ("2-M-33", &[L, P]),
    ("3-35-ST-H-L", &[L, L, L]),
    ("3-35-ST-H-R", &[L, L, L]),
    ("3-35-V-1", &[P, P, P]),
    ("3-35-V-3", &[P, P, P]),
    ("3-35-H-1", &[L, L, L]),
    ("3-35-H-3", &[L, L, L]),
    ("3-46-22", &[L, L, L]),
    ("3-M-81", &[P, P, L]),
    ("3-M-83", &[L, P, P]),
    ("4-46-1", &[P, P, P, P]),
    ("4-M-21", &[P, P, P, P]),
    ("4-M-23", &[P, P, P, P]),
    ("4-MM-1", &[L, P, L, L]),
    ("4-MM-3", &[L, L, P, L]),
    ("6-M-1", &[P, L, L, P, L, P]),
    ("6-M-3", &[P, L, P, L, L, P]),
    ("9-23-1", &[P, P, P, P, P, P, P, P, P]),
];

/// Placeholder orientation per slot for previewing `layout_id`, if it is a registered layout.
pub fn sample_sources(layout_id: &str) -> Option<&'static [SampleKind]> {
    SAMPLE_PAGES
        .iter()
        .find(|(id, _)| *id == layout_id)
        .map(|(_, kinds)| *kinds)
}

#[cfg(test)]
#[path = "../../tests/unit/gallery/samples.rs"]
mod tests;
