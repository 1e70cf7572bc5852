use std::path::{Path, PathBuf};

use crate::foundation::error::{AlbumError, AlbumResult};
use crate::layout::registry::{LayoutTemplate, SlotSpec, template_of};

/// One source image bound to the slot it fills.
#[derive(Clone, Debug, PartialEq)]
pub struct PlacedPhoto {
    pub source_path: PathBuf,
    pub slot: SlotSpec,
}

/// A layout instantiated with concrete source images, in slot (and draw) order.
#[derive(Clone, Debug, PartialEq)]
pub struct Page {
    pub layout_id: String,
    pub placed_photos: Vec<PlacedPhoto>,
}

impl Page {
    /// Bind `sources` to the slots of the registered layout `layout_id`.
    pub fn build<P: AsRef<Path>>(layout_id: &str, sources: &[P]) -> AlbumResult<Self> {
        let template = template_of(layout_id)?;
        Self::from_template(template, sources)
    }

    /// Bind `sources` to an arbitrary template. The source count must equal the slot count.
    pub fn from_template<P: AsRef<Path>>(
        template: &LayoutTemplate,
        sources: &[P],
    ) -> AlbumResult<Self> {
        if sources.len() != template.slot_count() {
            return Err(AlbumError::SlotCountMismatch {
                layout: template.id.to_string(),
                expected: template.slot_count(),
                actual: sources.len(),
            });
        }

        let placed_photos = sources
            .iter()
            .zip(template.slots)
            .map(|(src, slot)| PlacedPhoto {
                source_path: src.as_ref().to_path_buf(),
                slot: *slot,
            })
            .collect();

        Ok(Self {
            layout_id: template.id.to_string(),
            placed_photos,
        })
    }

    /// Human-readable summary, e.g. `2-M-45: a(A) b(B)`.
    ///
    /// Each photo contributes its file name up to the first `.`, followed by the slot's label code
    /// in parentheses when it has one.
    pub fn description(&self) -> String {
        let mut out = format!("{}:", self.layout_id);
        for photo in &self.placed_photos {
            out.push(' ');
            out.push_str(&display_name(&photo.source_path));
            if !photo.slot.label_code.is_empty() {
                out.push('(');
                out.push_str(photo.slot.label_code);
                out.push(')');
            }
        }
        out
    }
}

impl std::fmt::Display for Page {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.description())
    }
}

fn display_name(path: &Path) -> String {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy())
        .unwrap_or_default();
    name.split('.').next().unwrap_or_default().to_string()
}

#[cfg(test)]
#[path = "../../tests/unit/composition/page.rs"]
mod tests;
