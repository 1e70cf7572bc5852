//! Page rendering: crop, rotate, composite and caption.

/// Output raster and JPEG encoding.
pub mod canvas;
/// Caption text rasterization.
pub mod caption;
/// Source-over compositing with clipping.
pub mod composite;
/// Layout + sources to canvas.
pub mod compositor;
/// Compositor configuration.
pub mod settings;
/// Crop-resize and rotation.
pub mod transform;
