use std::path::PathBuf;

use super::*;

use crate::foundation::core::Offset;
use crate::foundation::error::AlbumError;
use crate::layout::print_size::{P2X3_LANDSCAPE, P2X3_PORTRAIT};
use crate::layout::registry::{SlotSpec, layout_ids, slot_count_of};
use crate::render::settings::ResizeFilter;

fn fixture(name: &str, w: u32, h: u32, rgba: [u8; 4]) -> PathBuf {
    let dir = PathBuf::from("target").join("unit_compositor");
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join(name);
    image::RgbaImage::from_pixel(w, h, image::Rgba(rgba))
        .save_with_format(&path, image::ImageFormat::Png)
        .unwrap();
    path
}

#[test]
fn with_settings_validates() {
    let bad = ComposeSettings {
        jpeg_quality: 0,
        ..ComposeSettings::default()
    };
    assert!(matches!(
        PageCompositor::with_settings(bad),
        Err(AlbumError::Config(_))
    ));
    let ok = PageCompositor::with_settings(ComposeSettings::default()).unwrap();
    assert_eq!(ok.settings(), &ComposeSettings::default());
}

#[test]
fn wrong_source_count_fails_for_every_layout() {
    let compositor = PageCompositor::new();
    for id in layout_ids() {
        let n = slot_count_of(id).unwrap();
        for count in [n - 1, n + 1] {
            let sources = vec![PathBuf::from("unused.jpg"); count];
            let err = compositor.compose(id, sources.as_slice(), None).unwrap_err();
            assert!(
                matches!(err, AlbumError::SlotCountMismatch { expected, actual, .. }
                    if expected == n && actual == count),
                "{id}: {err}"
            );
        }
    }
}

#[test]
fn unknown_layout_fails() {
    let err = PageCompositor::new()
        .compose("nonexistent", &["a.jpg"], None)
        .unwrap_err();
    assert!(matches!(err, AlbumError::UnknownLayout(_)));
}

#[test]
fn missing_source_fails_without_partial_output() {
    let good = fixture("good.png", 24, 36, [255, 0, 0, 255]);
    let missing = PathBuf::from("target/unit_compositor/missing.png");
    let err = PageCompositor::new()
        .compose("2-46-1", &[good, missing.clone()], None)
        .unwrap_err();
    match err {
        AlbumError::SourceImageNotFound { path, .. } => assert_eq!(path, missing),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn background_comes_from_settings() {
    let src = fixture("bg.png", 24, 36, [0, 255, 0, 255]);
    let settings = ComposeSettings {
        background_rgba: [10, 20, 30, 0],
        resize_filter: ResizeFilter::Nearest,
        ..ComposeSettings::default()
    };
    let canvas = PageCompositor::with_settings(settings)
        .unwrap()
        .compose("1-46-V", &[src], None)
        .unwrap();
    assert_eq!(canvas.pixel(0, 0), [10, 20, 30, 255]);
    assert_eq!(canvas.pixel(480, 720), [0, 255, 0, 255]);
}

#[test]
fn custom_template_draws_later_slots_on_top() {
    static SLOTS: [SlotSpec; 2] = [
        SlotSpec::new(P2X3_PORTRAIT, Offset::new(100, 100)).labeled("A"),
        SlotSpec::new(P2X3_LANDSCAPE, Offset::new(200, 200)).labeled("B"),
    ];
    let template = LayoutTemplate {
        id: "2-OVERLAP",
        slots: &SLOTS,
    };
    let red = fixture("red.png", 24, 34, [255, 0, 0, 255]);
    let blue = fixture("blue.png", 34, 24, [0, 0, 255, 255]);

    let canvas = PageCompositor::new()
        .compose_template(&template, &[red, blue], None)
        .unwrap();

    // A covers [100,340)x[100,436); B covers [200,536)x[200,440).
    assert_eq!(canvas.pixel(150, 150), [255, 0, 0, 255]);
    assert_eq!(canvas.pixel(250, 250), [0, 0, 255, 255]);
    assert_eq!(canvas.pixel(500, 300), [0, 0, 255, 255]);
    assert_eq!(canvas.pixel(150, 420), [255, 0, 0, 255]);
}

#[test]
fn empty_caption_matches_no_caption() {
    let src = fixture("plain.png", 24, 36, [200, 200, 200, 255]);
    let compositor = PageCompositor::new();
    let a = compositor.compose("1-46-V", &[&src], None).unwrap();
    let b = compositor.compose("1-46-V", &[&src], Some("")).unwrap();
    assert_eq!(a, b);
}
