use crate::assets::decode::PreparedImage;
use crate::foundation::core::Offset;
use crate::foundation::math::{add_sat_u8, mul_div255_u8};
use crate::render::canvas::Canvas;

pub type PremulRgba8 = [u8; 4];

/// Porter-Duff source-over for premultiplied pixels.
pub fn over(dst: PremulRgba8, src: PremulRgba8) -> PremulRgba8 {
    match src[3] {
        0 => dst,
        255 => src,
        sa => {
            let inv = 255u16 - u16::from(sa);
            let mut out = [0u8; 4];
            for i in 0..4 {
                let dc = mul_div255_u8(u16::from(dst[i]), inv);
                out[i] = add_sat_u8(u16::from(src[i]), u16::from(dc));
            }
            out
        }
    }
}

/// Draw `src` over `canvas` with its top-left corner at `offset`.
///
/// Pixels falling outside the canvas are clipped. Returns the number of canvas pixels touched,
/// which is zero when the image lies entirely off-page.
pub fn composite_over(canvas: &mut Canvas, src: &PreparedImage, offset: Offset) -> usize {
    let cw = i64::from(canvas.width());
    let ch = i64::from(canvas.height());
    let left = i64::from(offset.left);
    let top = i64::from(offset.top);

    let x_start = left.max(0);
    let y_start = top.max(0);
    let x_end = (left + i64::from(src.width)).min(cw);
    let y_end = (top + i64::from(src.height)).min(ch);
    if x_start >= x_end || y_start >= y_end {
        return 0;
    }

    let mut touched = 0usize;
    for y in y_start..y_end {
        for x in x_start..x_end {
            let s = src.pixel((x - left) as u32, (y - top) as u32);
            if s[3] == 0 {
                continue;
            }
            let px = canvas.pixel_mut(x as u32, y as u32);
            let out = over([px[0], px[1], px[2], px[3]], s);
            px.copy_from_slice(&out);
            touched += 1;
        }
    }
    touched
}

#[cfg(test)]
#[path = "../../tests/unit/render/composite.rs"]
mod tests;
