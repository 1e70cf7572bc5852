use std::sync::Arc;

use anyhow::Context;

use crate::assets::decode::PreparedImage;
use crate::assets::fonts::caption_font_resolver;
use crate::foundation::core::{Gravity, Offset};
use crate::foundation::error::{AlbumError, AlbumResult};
use crate::render::canvas::Canvas;
use crate::render::composite::composite_over;
use crate::render::settings::CaptionStyle;

/// Draw `text` onto `canvas` anchored at `gravity`.
///
/// Text is laid out and rasterized through an SVG `<text>` element so that font selection,
/// shaping and antialiasing come from the same stack for every caption.
pub fn draw_caption(
    canvas: &mut Canvas,
    text: &str,
    style: &CaptionStyle,
    gravity: Gravity,
    fontdb: Arc<usvg::fontdb::Database>,
) -> AlbumResult<()> {
    if text.is_empty() {
        return Ok(());
    }

    let svg = caption_svg(canvas.width(), canvas.height(), text, style, gravity);
    let opts = usvg::Options {
        fontdb,
        font_resolver: caption_font_resolver(),
        ..Default::default()
    };
    let tree = usvg::Tree::from_str(&svg, &opts).context("parse caption svg")?;

    let mut pixmap = resvg::tiny_skia::Pixmap::new(canvas.width(), canvas.height())
        .ok_or_else(|| AlbumError::render("failed to allocate caption pixmap"))?;
    resvg::render(
        &tree,
        resvg::tiny_skia::Transform::default(),
        &mut pixmap.as_mut(),
    );

    let layer = PreparedImage {
        width: pixmap.width(),
        height: pixmap.height(),
        rgba8_premul: pixmap.take(),
    };
    composite_over(canvas, &layer, Offset::default());
    Ok(())
}

pub(crate) fn caption_svg(
    width: u32,
    height: u32,
    text: &str,
    style: &CaptionStyle,
    gravity: Gravity,
) -> String {
    let (x, y, anchor, baseline) = match gravity {
        Gravity::SouthWest => (0.0, f64::from(height), "start", "text-after-edge"),
        Gravity::Center => (
            f64::from(width) / 2.0,
            f64::from(height) / 2.0,
            "middle",
            "central",
        ),
    };
    let [r, g, b, a] = style.fill_rgba;
    let weight = if style.bold { "bold" } else { "normal" };

    format!(
        concat!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
            r#"<text x="{x}" y="{y}" xml:space="preserve" font-family="'{family}', sans-serif" "#,
            r#"font-size="{size}" font-weight="{weight}" fill="rgb({r},{g},{b})" "#,
            r#"fill-opacity="{opacity}" text-anchor="{anchor}" dominant-baseline="{baseline}">"#,
            "{text}</text></svg>"
        ),
        w = width,
        h = height,
        x = x,
        y = y,
        family = escape_xml(&style.font_family),
        size = style.point_size,
        weight = weight,
        r = r,
        g = g,
        b = b,
        opacity = f32::from(a) / 255.0,
        anchor = anchor,
        baseline = baseline,
        text = escape_xml(text),
    )
}

fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            c => out.push(c),
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/render/caption.rs"]
mod tests;
