pub use kurbo::{Affine, Point, Vec2};

/// Width of every composed page, in pixels.
pub const PAGE_WIDTH: u32 = 960;
/// Height of every composed page, in pixels.
pub const PAGE_HEIGHT: u32 = 1440;

/// Pixel dimensions of a named print size.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize)]
pub struct PrintSize {
    /// Table code, e.g. `4x6P`.
    pub code: &'static str,
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl PrintSize {
    pub(crate) const fn new(code: &'static str, width: u32, height: u32) -> Self {
        Self {
            code,
            width,
            height,
        }
    }

    pub fn is_portrait(self) -> bool {
        self.height > self.width
    }
}

/// Top-left corner of a placed photo on the page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize)]
pub struct Offset {
    pub left: i32,
    pub top: i32,
}

impl Offset {
    pub const fn new(left: i32, top: i32) -> Self {
        Self { left, top }
    }

    pub fn to_vec2(self) -> Vec2 {
        Vec2::new(f64::from(self.left), f64::from(self.top))
    }
}

/// Anchor used when placing caption text inside a target image.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Gravity {
    /// Bottom-left corner.
    #[default]
    SouthWest,
    /// Centered on both axes.
    Center,
}
