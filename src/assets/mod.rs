//! Everything that touches the filesystem on the input side: photos and fonts.

/// Source image decoding.
pub mod decode;
/// Caption font discovery.
pub mod fonts;
