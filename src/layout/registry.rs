use std::{collections::HashMap, sync::LazyLock};

use crate::foundation::core::{Offset, PrintSize};
use crate::foundation::error::{AlbumError, AlbumResult};
use crate::layout::print_size::{
    P2X3_LANDSCAPE as P2X3L, P2X3_PORTRAIT as P2X3P, P3X5_LANDSCAPE as P3X5L,
    P3X5_PORTRAIT as P3X5P, P4X6_LANDSCAPE as P4X6L, P4X6_PORTRAIT as P4X6P,
    P5X7_LANDSCAPE as P5X7L, P5X7_PORTRAIT as P5X7P, P5X10_PORTRAIT as P5X10P,
    P8X10_PORTRAIT as P8X10P,
};

/// Placement of one photo within a layout.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct SlotSpec {
    /// Crop-resize target for the photo.
    pub print_size: PrintSize,
    /// Top-left corner of the (possibly rotated) photo on the page.
    pub offset: Offset,
    /// Clockwise rotation applied after cropping.
    pub rotation_degrees: f64,
    /// Mat position tag(s), display only. Empty when the slot has no tag.
    pub label_code: &'static str,
}

impl Default for SlotSpec {
    fn default() -> Self {
        Self {
            print_size: P2X3P,
            offset: Offset::default(),
            rotation_degrees: 0.0,
            label_code: "",
        }
    }
}

impl SlotSpec {
    pub const fn new(print_size: PrintSize, offset: Offset) -> Self {
        Self {
            print_size,
            offset,
            rotation_degrees: 0.0,
            label_code: "",
        }
    }

    pub const fn rotated(mut self, degrees: f64) -> Self {
        self.rotation_degrees = degrees;
        self
    }

    pub const fn labeled(mut self, label_code: &'static str) -> Self {
        self.label_code = label_code;
        self
    }

    pub fn is_rotated(&self) -> bool {
        self.rotation_degrees != 0.0
    }
}

/// A named page design: an ordered list of slots, drawn first to last.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct LayoutTemplate {
    pub id: &'static str,
    pub slots: &'static [SlotSpec],
}

impl LayoutTemplate {
    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }
}

// Struct literals keep the nested slot arrays promotable to `'static`.
macro_rules! slot {
    ($print:expr, $left:expr, $top:expr, $rotation:expr, $label:expr) => {
        SlotSpec {
            print_size: $print,
            offset: Offset {
                left: $left,
                top: $top,
            },
            rotation_degrees: $rotation,
            label_code: $label,
        }
    };
}

const fn layout(id: &'static str, slots: &'static [SlotSpec]) -> LayoutTemplate {
    LayoutTemplate { id, slots }
}

static CATALOG: [LayoutTemplate; 32] = [
    layout("1-46-V", &[slot!(P4X6P, 288, 432, 0.0, "")]),
    layout("1-57-V-B", &[slot!(P5X7P, 240, 576, 0.0, "B")]),
    layout("1-57-V-T", &[slot!(P5X7P, 240, 192, 0.0, "A")]),
    layout("1-57-V-RT", &[slot!(P5X7P, 161, 333, 15.0, "")]),
    layout("1-57-H-B", &[slot!(P5X7L, 144, 736, 0.0, "B")]),
    layout("1-57-H-T", &[slot!(P5X7L, 144, 170, 0.0, "A")]),
    layout("1-510-V", &[slot!(P5X10P, 240, 235, 0.0, "")]),
    layout("1-810-V", &[slot!(P8X10P, 96, 235, 0.0, "")]),
    layout(
        "2-46-1",
        &[
            slot!(P4X6P, 64, 432, 0.0, "A"),
            slot!(P4X6P, 512, 432, 0.0, "B"),
        ],
    ),
    layout(
        "2-46-2",
        &[
            slot!(P4X6L, 192, 268, 0.0, "A"),
            slot!(P4X6L, 192, 768, 0.0, "B"),
        ],
    ),
    layout(
        "2-57-2",
        &[
            slot!(P5X7L, 144, 160, 0.0, "A"),
            slot!(P5X7L, 144, 800, 0.0, "B"),
        ],
    ),
    layout(
        "2-M-45",
        &[
            slot!(P3X5P, 128, 185, 15.0, "A"),
            slot!(P4X6L, 202, 735, -15.0, "B"),
        ],
    ),
    layout(
        "2-M-47",
        &[
            slot!(P4X6L, 101, 185, -15.0, "A"),
            slot!(P3X5P, 384, 705, 15.0, "B"),
        ],
    ),
    layout(
        "2-M-31",
        &[
            slot!(P4X6P, 288, 128, 0.0, "A"),
            slot!(P5X7L, 144, 832, 0.0, "B"),
        ],
    ),
    layout(
        "2-M-33",
        &[
            slot!(P5X7L, 144, 128, 0.0, "A"),
            slot!(P4X6P, 288, 736, 0.0, "B"),
        ],
    ),
    layout(
        "3-35-ST-H-L",
        &[
            slot!(P3X5L, 96, 144, 0.0, "A"),
            slot!(P3X5L, 240, 552, 0.0, "E"),
            slot!(P3X5L, 384, 960, 0.0, "D"),
        ],
    ),
    layout(
        "3-35-ST-H-R",
        &[
            slot!(P3X5L, 384, 144, 0.0, "B"),
            slot!(P3X5L, 240, 552, 0.0, "E"),
            slot!(P3X5L, 96, 960, 0.0, "C"),
        ],
    ),
    layout(
        "3-35-V-1",
        &[
            slot!(P3X5P, 88, 85, 15.0, "A"),
            slot!(P3X5P, 536, 480, 0.0, "BD"),
            slot!(P3X5P, 88, 805, -15.0, "C"),
        ],
    ),
    layout(
        "3-35-V-3",
        &[
            slot!(P3X5P, 424, 85, -15.0, "B"),
            slot!(P3X5P, 88, 480, 0.0, "AC"),
            slot!(P3X5P, 424, 805, 15.0, "D"),
        ],
    ),
    layout(
        "3-35-H-1",
        &[
            slot!(P3X5L, 328, 104, 15.0, "B"),
            slot!(P3X5L, 96, 552, 0.0, "E"),
            slot!(P3X5L, 328, 888, -15.0, "D"),
        ],
    ),
    layout(
        "3-35-H-3",
        &[
            slot!(P3X5L, 82, 104, -15.0, "A"),
            slot!(P3X5L, 384, 552, 0.0, "E"),
            slot!(P3X5L, 82, 888, 15.0, "C"),
        ],
    ),
    layout(
        "3-46-22",
        &[
            slot!(P4X6L, 192, 72, 0.0, "A"),
            slot!(P4X6L, 192, 528, 0.0, "B"),
            slot!(P4X6L, 192, 984, 0.0, "C"),
        ],
    ),
    layout(
        "3-M-81",
        &[
            slot!(P2X3P, 161, 403, -15.0, "A"),
            slot!(P2X3P, 479, 210, 15.0, "B"),
            slot!(P3X5L, 240, 894, 0.0, "CD"),
        ],
    ),
    layout(
        "3-M-83",
        &[
            slot!(P3X5L, 240, 210, 0.0, "AB"),
            slot!(P2X3P, 161, 844, 15.0, "C"),
            slot!(P2X3P, 479, 701, -15.0, "D"),
        ],
    ),
    layout(
        "4-46-1",
        &[
            slot!(P4X6P, 64, 114, 0.0, "A"),
            slot!(P4X6P, 512, 114, 0.0, "B"),
            slot!(P4X6P, 64, 750, 0.0, "C"),
            slot!(P4X6P, 512, 750, 0.0, "D"),
        ],
    ),
    layout(
        "4-M-21",
        &[
            slot!(P2X3P, 80, 108, 0.0, "A"),
            slot!(P2X3P, 80, 552, 0.0, "E"),
            slot!(P2X3P, 80, 996, 0.0, "C"),
            slot!(P5X10P, 400, 240, 0.0, "BD"),
        ],
    ),
    layout(
        "4-M-23",
        &[
            slot!(P5X10P, 80, 240, 0.0, "AC"),
            slot!(P2X3P, 640, 108, 0.0, "B"),
            slot!(P2X3P, 640, 552, 0.0, "E"),
            slot!(P2X3P, 640, 996, 0.0, "D"),
        ],
    ),
    layout(
        "4-MM-1",
        &[
            slot!(P5X7L, 144, 96, 0.0, "AB"),
            slot!(P3X5P, 79, 768, 0.0, "C"),
            slot!(P2X3L, 494, 696, 15.0, "E"),
            slot!(P2X3L, 494, 1014, 15.0, "D"),
        ],
    ),
    layout(
        "4-MM-3",
        &[
            slot!(P2X3L, 79, 108, 15.0, "A"),
            slot!(P2X3L, 79, 426, 15.0, "E"),
            slot!(P3X5P, 554, 192, 0.0, "B"),
            slot!(P5X7L, 144, 864, 0.0, "CD"),
        ],
    ),
    layout(
        "6-M-1",
        &[
            slot!(P3X5P, 96, 96, 0.0, "A"),
            slot!(P2X3L, 528, 96, 0.0, "B"),
            slot!(P2X3L, 96, 672, 0.0, "C"),
            slot!(P3X5P, 528, 432, 0.0, "D"),
            slot!(P3X5L, 96, 1008, 0.0, "E"),
            slot!(P2X3P, 624, 1008, 0.0, "F"),
        ],
    ),
    layout(
        "6-M-3",
        &[
            slot!(P2X3P, 96, 96, 0.0, "A"),
            slot!(P3X5L, 384, 96, 0.0, "B"),
            slot!(P3X5P, 96, 528, 0.0, "C"),
            slot!(P2X3L, 528, 528, 0.0, "D"),
            slot!(P2X3L, 96, 1100, 0.0, "E"),
            slot!(P3X5P, 528, 864, 0.0, "F"),
        ],
    ),
    layout(
        "9-23-1",
        &[
            slot!(P2X3P, 60, 138, 0.0, "A"),
            slot!(P2X3P, 360, 138, 0.0, "B"),
            slot!(P2X3P, 660, 138, 0.0, "C"),
            slot!(P2X3P, 60, 552, 0.0, "D"),
            slot!(P2X3P, 360, 552, 0.0, "E"),
            slot!(P2X3P, 660, 552, 0.0, "F"),
            slot!(P2X3P, 60, 966, 0.0, "G"),
            slot!(P2X3P, 360, 966, 0.0, "H"),
            slot!(P2X3P, 660, 966, 0.0, "I"),
        ],
    ),
];

static INDEX: LazyLock<HashMap<&'static str, &'static LayoutTemplate>> =
    LazyLock::new(|| CATALOG.iter().map(|t| (t.id, t)).collect());

/// Whether `id` names a registered layout. Ids are matched exactly (see [`normalize_layout_id`]).
pub fn is_valid_layout(id: &str) -> bool {
    INDEX.contains_key(id)
}

/// Number of images a layout id asks for, read from its leading `N-` token.
///
/// This does not consult the catalog; use [`template_of`] for the authoritative slot list.
pub fn slot_count_of(id: &str) -> AlbumResult<usize> {
    let token = id.split('-').next().unwrap_or_default();
    match token.parse::<usize>() {
        Ok(n) if n > 0 && token.bytes().all(|b| b.is_ascii_digit()) => Ok(n),
        _ => Err(AlbumError::MalformedLayoutId(id.to_string())),
    }
}

/// Fixed slot list for a registered layout.
pub fn template_of(id: &str) -> AlbumResult<&'static LayoutTemplate> {
    INDEX
        .get(id)
        .copied()
        .ok_or_else(|| AlbumError::unknown_layout(id))
}

/// All templates in catalog order.
pub fn templates() -> &'static [LayoutTemplate] {
    &CATALOG
}

/// All layout ids in catalog order.
pub fn layout_ids() -> impl Iterator<Item = &'static str> {
    CATALOG.iter().map(|t| t.id)
}

/// Layout ids are entered case-insensitively and stored upper-case.
pub fn normalize_layout_id(input: &str) -> String {
    input.trim().to_ascii_uppercase()
}

#[cfg(test)]
#[path = "../../tests/unit/layout/registry.rs"]
mod tests;
