//! Album page composition.
//!
//! A page is a fixed 960x1440 black mat onto which photographs are cropped to standard print
//! sizes, optionally rotated, and placed according to one of the registered layout templates.
//!
//! - Look up a layout with [`template_of`] / [`is_valid_layout`]
//! - Compose it with [`PageCompositor::compose`] (or the [`compose`] shorthand)
//! - Write the result with [`Canvas::write_jpeg`]
//! - Preview every layout with [`render_gallery`]
#![forbid(unsafe_code)]

mod assets;
mod foundation;

/// Page model: a layout bound to concrete photographs.
pub mod composition;
/// Placeholder samples and catalog previews.
pub mod gallery;
/// Print sizes and the layout template registry.
pub mod layout;
/// Pixel pipeline: crop, rotate, composite, caption and encode.
pub mod render;

pub use crate::assets::decode::{PreparedImage, decode_image, load_source_image};
pub use crate::foundation::core::{Gravity, Offset, PAGE_HEIGHT, PAGE_WIDTH, PrintSize};
pub use crate::foundation::error::{AlbumError, AlbumResult};

pub use crate::composition::page::{Page, PlacedPhoto};
pub use crate::gallery::render::{GalleryReport, GalleryThreading, render_gallery};
pub use crate::gallery::samples::{
    SampleKind, SamplePaths, ensure_samples, render_sample, sample_sources,
};
pub use crate::layout::registry::{
    LayoutTemplate, SlotSpec, is_valid_layout, layout_ids, normalize_layout_id, slot_count_of,
    template_of, templates,
};
pub use crate::render::canvas::Canvas;
pub use crate::render::compositor::{PageCompositor, compose};
pub use crate::render::settings::{CaptionStyle, ComposeSettings, ResizeFilter};
