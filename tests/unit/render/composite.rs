use super::*;

fn solid(w: u32, h: u32, px: [u8; 4]) -> PreparedImage {
    PreparedImage {
        width: w,
        height: h,
        rgba8_premul: px.repeat((w * h) as usize),
    }
}

#[test]
fn over_edge_cases() {
    let dst = [10, 20, 30, 255];
    assert_eq!(over(dst, [0, 0, 0, 0]), dst);
    assert_eq!(over(dst, [1, 2, 3, 255]), [1, 2, 3, 255]);
    // 50% white over opaque black.
    assert_eq!(over([0, 0, 0, 255], [128, 128, 128, 128]), [128, 128, 128, 255]);
}

#[test]
fn composite_places_exact_bounding_box() {
    let mut canvas = Canvas::filled(20, 10, [0, 0, 0, 255]);
    let touched = composite_over(&mut canvas, &solid(4, 3, [255, 0, 0, 255]), Offset::new(5, 2));
    assert_eq!(touched, 12);
    for y in 0..10 {
        for x in 0..20 {
            let inside = (5..9).contains(&x) && (2..5).contains(&y);
            let expected = if inside {
                [255, 0, 0, 255]
            } else {
                [0, 0, 0, 255]
            };
            assert_eq!(canvas.pixel(x, y), expected, "({x},{y})");
        }
    }
}

#[test]
fn composite_clips_at_edges() {
    let mut canvas = Canvas::filled(10, 10, [0, 0, 0, 255]);
    let touched = composite_over(&mut canvas, &solid(4, 4, [0, 255, 0, 255]), Offset::new(-2, 8));
    assert_eq!(touched, 4);
    assert_eq!(canvas.pixel(0, 8), [0, 255, 0, 255]);
    assert_eq!(canvas.pixel(1, 9), [0, 255, 0, 255]);
    assert_eq!(canvas.pixel(2, 9), [0, 0, 0, 255]);
}

#[test]
fn composite_fully_off_page_is_noop() {
    let mut canvas = Canvas::filled(10, 10, [7, 7, 7, 255]);
    let before = canvas.clone();
    assert_eq!(
        composite_over(&mut canvas, &solid(3, 3, [255, 255, 255, 255]), Offset::new(10, 0)),
        0
    );
    assert_eq!(
        composite_over(&mut canvas, &solid(3, 3, [255, 255, 255, 255]), Offset::new(-3, -3)),
        0
    );
    assert_eq!(canvas, before);
}

#[test]
fn transparent_source_pixels_keep_destination() {
    let mut canvas = Canvas::filled(2, 1, [50, 60, 70, 255]);
    let src = PreparedImage {
        width: 2,
        height: 1,
        rgba8_premul: vec![0, 0, 0, 0, 200, 0, 0, 255],
    };
    composite_over(&mut canvas, &src, Offset::new(0, 0));
    assert_eq!(canvas.pixel(0, 0), [50, 60, 70, 255]);
    assert_eq!(canvas.pixel(1, 0), [200, 0, 0, 255]);
}

#[test]
fn later_draws_occlude_earlier_ones() {
    let mut canvas = Canvas::filled(10, 10, [0, 0, 0, 255]);
    composite_over(&mut canvas, &solid(6, 6, [255, 0, 0, 255]), Offset::new(0, 0));
    composite_over(&mut canvas, &solid(6, 6, [0, 0, 255, 255]), Offset::new(4, 4));
    assert_eq!(canvas.pixel(2, 2), [255, 0, 0, 255]);
    assert_eq!(canvas.pixel(5, 5), [0, 0, 255, 255]);
    assert_eq!(canvas.pixel(8, 8), [0, 0, 255, 255]);
}
