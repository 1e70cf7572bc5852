use crate::foundation::core::PrintSize;
use crate::foundation::error::{AlbumError, AlbumResult};

// 2.5 x 3.5
pub const P2X3_PORTRAIT: PrintSize = PrintSize::new("2x3P", 240, 336);
pub const P2X3_LANDSCAPE: PrintSize = PrintSize::new("2x3L", 336, 240);
// 3.5 x 5
pub const P3X5_PORTRAIT: PrintSize = PrintSize::new("3x5P", 336, 480);
pub const P3X5_LANDSCAPE: PrintSize = PrintSize::new("3x5L", 480, 336);
pub const P4X6_PORTRAIT: PrintSize = PrintSize::new("4x6P", 384, 576);
pub const P4X6_LANDSCAPE: PrintSize = PrintSize::new("4x6L", 576, 384);
pub const P5X7_PORTRAIT: PrintSize = PrintSize::new("5x7P", 480, 672);
pub const P5X7_LANDSCAPE: PrintSize = PrintSize::new("5x7L", 672, 480);
pub const P5X10_PORTRAIT: PrintSize = PrintSize::new("5x10P", 480, 960);
pub const P8X10_PORTRAIT: PrintSize = PrintSize::new("8x10P", 768, 960);

static PRINT_SIZES: [PrintSize; 10] = [
    P2X3_PORTRAIT,
    P2X3_LANDSCAPE,
    P3X5_PORTRAIT,
    P3X5_LANDSCAPE,
    P4X6_PORTRAIT,
    P4X6_LANDSCAPE,
    P5X7_PORTRAIT,
    P5X7_LANDSCAPE,
    P5X10_PORTRAIT,
    P8X10_PORTRAIT,
];

impl PrintSize {
    /// Resolve a print-size code such as `5x7L`. Codes are case-sensitive.
    pub fn lookup(code: &str) -> AlbumResult<PrintSize> {
        PRINT_SIZES
            .iter()
            .copied()
            .find(|p| p.code == code)
            .ok_or_else(|| AlbumError::UnknownPrintSize(code.to_string()))
    }

    /// Every known print size, in table order.
    pub fn all() -> &'static [PrintSize] {
        &PRINT_SIZES
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layout/print_size.rs"]
mod tests;
