use std::{
    path::Path,
    sync::{Arc, LazyLock, OnceLock},
};

use crate::assets::decode::{PreparedImage, load_source_image};
use crate::assets::fonts::build_caption_fontdb;
use crate::composition::page::{Page, PlacedPhoto};
use crate::foundation::core::{Gravity, PAGE_HEIGHT, PAGE_WIDTH};
use crate::foundation::error::AlbumResult;
use crate::layout::registry::LayoutTemplate;
use crate::render::canvas::Canvas;
use crate::render::caption;
use crate::render::composite::composite_over;
use crate::render::settings::ComposeSettings;
use crate::render::transform::{crop_fill, rotate_expand};

/// Turns pages into canvases.
///
/// A compositor owns its settings and a lazily loaded caption font database, so it is cheap to
/// create and can be shared across threads for gallery rendering.
#[derive(Default)]
pub struct PageCompositor {
    settings: ComposeSettings,
    fontdb: OnceLock<Arc<usvg::fontdb::Database>>,
}

impl std::fmt::Debug for PageCompositor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PageCompositor")
            .field("settings", &self.settings)
            .field("font_faces", &self.fontdb.get().map(|db| db.len()))
            .finish()
    }
}

static DEFAULT_COMPOSITOR: LazyLock<PageCompositor> = LazyLock::new(PageCompositor::default);

/// Compose a registered layout with default settings.
///
/// See [`PageCompositor::compose`].
pub fn compose<P: AsRef<Path>>(
    layout_id: &str,
    sources: &[P],
    caption: Option<&str>,
) -> AlbumResult<Canvas> {
    DEFAULT_COMPOSITOR.compose(layout_id, sources, caption)
}

impl PageCompositor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a compositor from validated settings.
    pub fn with_settings(settings: ComposeSettings) -> AlbumResult<Self> {
        settings.validate()?;
        Ok(Self {
            settings,
            fontdb: OnceLock::new(),
        })
    }

    pub fn settings(&self) -> &ComposeSettings {
        &self.settings
    }

    /// Compose the registered layout `layout_id` from `sources`, one per slot.
    ///
    /// Fails with `UnknownLayout` for ids outside the registry, `SlotCountMismatch` when the
    /// number of sources differs from the slot count, and `SourceImageNotFound` when any source
    /// cannot be read or decoded. A `None` or empty caption draws no text.
    #[tracing::instrument(skip(self, sources, caption), fields(sources = sources.len()))]
    pub fn compose<P: AsRef<Path>>(
        &self,
        layout_id: &str,
        sources: &[P],
        caption: Option<&str>,
    ) -> AlbumResult<Canvas> {
        let page = Page::build(layout_id, sources)?;
        self.render_page(&page, caption)
    }

    /// Compose an arbitrary template, e.g. one built in code rather than taken from the registry.
    pub fn compose_template<P: AsRef<Path>>(
        &self,
        template: &LayoutTemplate,
        sources: &[P],
        caption: Option<&str>,
    ) -> AlbumResult<Canvas> {
        let page = Page::from_template(template, sources)?;
        self.render_page(&page, caption)
    }

    /// Render a bound page: photos in slot order, then the caption on top.
    ///
    /// Each source is decoded, drawn and dropped before the next is loaded. On error the partly
    /// drawn canvas is discarded.
    #[tracing::instrument(skip_all, fields(layout = %page.layout_id))]
    pub fn render_page(&self, page: &Page, caption: Option<&str>) -> AlbumResult<Canvas> {
        let mut canvas = Canvas::filled(PAGE_WIDTH, PAGE_HEIGHT, self.settings.background_rgba);

        for photo in &page.placed_photos {
            let prepared = self.prepare_photo(photo)?;
            composite_over(&mut canvas, &prepared, photo.slot.offset);
        }

        if let Some(text) = caption.filter(|t| !t.is_empty()) {
            self.draw_caption(&mut canvas, text, Gravity::SouthWest)?;
        }

        Ok(canvas)
    }

    /// Draw caption text with this compositor's caption style.
    pub fn draw_caption(
        &self,
        canvas: &mut Canvas,
        text: &str,
        gravity: Gravity,
    ) -> AlbumResult<()> {
        caption::draw_caption(canvas, text, &self.settings.caption, gravity, self.fontdb())
    }

    fn prepare_photo(&self, photo: &PlacedPhoto) -> AlbumResult<PreparedImage> {
        let src = load_source_image(&photo.source_path)?;
        let cropped = crop_fill(&src, photo.slot.print_size, self.settings.resize_filter);
        drop(src);

        if photo.slot.is_rotated() {
            Ok(rotate_expand(&cropped, photo.slot.rotation_degrees))
        } else {
            Ok(cropped)
        }
    }

    fn fontdb(&self) -> Arc<usvg::fontdb::Database> {
        self.fontdb
            .get_or_init(|| build_caption_fontdb(self.settings.font_dirs.as_slice()))
            .clone()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/compositor.rs"]
mod tests;
