//! Fixed page geometry: the print-size table and the layout catalog.

/// Named print sizes and their pixel dimensions.
pub mod print_size;
/// The catalog of album page layouts.
pub mod registry;
