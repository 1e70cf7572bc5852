use crate::assets::decode::PreparedImage;
use crate::foundation::core::{Affine, Point, PrintSize, Vec2};
use crate::render::settings::ResizeFilter;

/// Scale `src` until it covers `size`, then center-crop the overflow.
///
/// The result is exactly `size.width` x `size.height`; aspect ratio is never distorted.
pub fn crop_fill(src: &image::DynamicImage, size: PrintSize, filter: ResizeFilter) -> PreparedImage {
    let filled = src.resize_to_fill(size.width, size.height, filter.to_image_filter());
    PreparedImage::from_rgba(filled.to_rgba8())
}

/// Size of the axis-aligned box that holds a `width` x `height` image rotated by `degrees`.
pub fn rotated_bounds(width: u32, height: u32, degrees: f64) -> (u32, u32) {
    let (s, c) = degrees.to_radians().sin_cos();
    let (s, c) = (s.abs(), c.abs());
    let w = f64::from(width);
    let h = f64::from(height);
    // Trims float noise so 90 degree turns do not grow by a pixel.
    let snap = |v: f64| ((v - 1e-6).ceil().max(1.0)) as u32;
    (snap(w * c + h * s), snap(w * s + h * c))
}

/// Rotate clockwise about the image center, growing the image to the rotated bounding box.
///
/// Uncovered corners are transparent. Sampling is bilinear over premultiplied pixels, so edges
/// fade to transparent instead of picking up a dark fringe.
pub fn rotate_expand(src: &PreparedImage, degrees: f64) -> PreparedImage {
    let (out_w, out_h) = rotated_bounds(src.width, src.height, degrees);

    let src_center = Vec2::new(f64::from(src.width) / 2.0, f64::from(src.height) / 2.0);
    let out_center = Vec2::new(f64::from(out_w) / 2.0, f64::from(out_h) / 2.0);
    let forward = Affine::translate(out_center)
        * Affine::rotate(degrees.to_radians())
        * Affine::translate(-src_center);
    let inverse = forward.inverse();

    let mut out = vec![0u8; (out_w as usize) * (out_h as usize) * 4];
    for y in 0..out_h {
        for x in 0..out_w {
            let p = inverse * Point::new(f64::from(x) + 0.5, f64::from(y) + 0.5);
            let px = sample_bilinear(src, p.x - 0.5, p.y - 0.5);
            let idx = ((y as usize) * (out_w as usize) + (x as usize)) * 4;
            out[idx..idx + 4].copy_from_slice(&px);
        }
    }

    PreparedImage {
        width: out_w,
        height: out_h,
        rgba8_premul: out,
    }
}

fn sample_bilinear(src: &PreparedImage, sx: f64, sy: f64) -> [u8; 4] {
    let x0 = sx.floor();
    let y0 = sy.floor();
    let fx = (sx - x0) as f32;
    let fy = (sy - y0) as f32;
    let x0 = x0 as i64;
    let y0 = y0 as i64;

    let fetch = |x: i64, y: i64| -> [f32; 4] {
        if x < 0 || y < 0 || x >= i64::from(src.width) || y >= i64::from(src.height) {
            return [0.0; 4];
        }
        let p = src.pixel(x as u32, y as u32);
        [
            f32::from(p[0]),
            f32::from(p[1]),
            f32::from(p[2]),
            f32::from(p[3]),
        ]
    };

    let p00 = fetch(x0, y0);
    let p10 = fetch(x0 + 1, y0);
    let p01 = fetch(x0, y0 + 1);
    let p11 = fetch(x0 + 1, y0 + 1);

    let mut out = [0u8; 4];
    for i in 0..4 {
        let top = p00[i] + (p10[i] - p00[i]) * fx;
        let bottom = p01[i] + (p11[i] - p01[i]) * fx;
        let v = top + (bottom - top) * fy;
        out[i] = v.round().clamp(0.0, 255.0) as u8;
    }
    // Premultiplied invariant: no channel may exceed alpha.
    out[0] = out[0].min(out[3]);
    out[1] = out[1].min(out[3]);
    out[2] = out[2].min(out[3]);
    out
}

#[cfg(test)]
#[path = "../../tests/unit/render/transform.rs"]
mod tests;
