use std::path::{Path, PathBuf};

use rayon::prelude::*;

use crate::foundation::error::{AlbumError, AlbumResult};
use crate::gallery::samples::{SamplePaths, ensure_samples, sample_sources};
use crate::layout::registry::{LayoutTemplate, templates};
use crate::render::compositor::PageCompositor;

#[derive(Clone, Debug, Default)]
/// Threading controls for gallery rendering.
pub struct GalleryThreading {
    /// Render layouts concurrently when `true`.
    pub parallel: bool,
    /// Optional explicit worker thread count.
    pub threads: Option<usize>,
}

/// What a gallery run produced.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GalleryReport {
    pub samples: SamplePaths,
    /// One file per registered layout, in catalog order.
    pub pages: Vec<PathBuf>,
}

/// Render every registered layout with placeholder photos into `dir`.
///
/// Samples are created first (see [`ensure_samples`]); each page is captioned with its layout id
/// and written as `{layout_id}.jpg`, overwriting earlier renders.
#[tracing::instrument(skip(compositor), fields(dir = %dir.display()))]
pub fn render_gallery(
    dir: &Path,
    compositor: &PageCompositor,
    threading: &GalleryThreading,
) -> AlbumResult<GalleryReport> {
    let samples = ensure_samples(dir, compositor)?;
    let layouts = templates();

    let pages = if threading.parallel {
        let pool = build_thread_pool(threading.threads)?;
        pool.install(|| {
            layouts
                .par_iter()
                .map(|t| render_gallery_page(dir, t, &samples, compositor))
                .collect::<AlbumResult<Vec<_>>>()
        })?
    } else {
        layouts
            .iter()
            .map(|t| render_gallery_page(dir, t, &samples, compositor))
            .collect::<AlbumResult<Vec<_>>>()?
    };

    Ok(GalleryReport { samples, pages })
}

fn render_gallery_page(
    dir: &Path,
    template: &LayoutTemplate,
    samples: &SamplePaths,
    compositor: &PageCompositor,
) -> AlbumResult<PathBuf> {
    let kinds = sample_sources(template.id).ok_or_else(|| {
        AlbumError::render(format!("no sample sources for layout '{}'", template.id))
    })?;
    let sources = kinds.iter().map(|k| samples.get(*k)).collect::<Vec<_>>();

    let canvas = compositor.compose_template(template, sources.as_slice(), Some(template.id))?;
    let out = dir.join(format!("{}.jpg", template.id));
    canvas.write_jpeg(&out, compositor.settings().jpeg_quality)?;
    tracing::debug!(path = %out.display(), "gallery page written");
    Ok(out)
}

fn build_thread_pool(threads: Option<usize>) -> AlbumResult<rayon::ThreadPool> {
    if let Some(n) = threads
        && n == 0
    {
        return Err(AlbumError::config(
            "gallery threading 'threads' must be >= 1 when set",
        ));
    }

    let mut builder = rayon::ThreadPoolBuilder::new();
    if let Some(n) = threads {
        builder = builder.num_threads(n);
    }
    builder
        .build()
        .map_err(|e| AlbumError::render(format!("failed to build rayon thread pool: {e}")))
}

#[cfg(test)]
#[path = "../../tests/unit/gallery/render.rs"]
mod tests;
