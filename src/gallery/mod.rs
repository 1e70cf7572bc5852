//! Placeholder samples and whole-catalog previews.

/// Render every layout with placeholder photos.
pub mod render;
/// Placeholder photo generation.
pub mod samples;
