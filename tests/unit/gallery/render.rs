use super::*;

use crate::layout::registry::layout_ids;
use crate::render::settings::{ComposeSettings, ResizeFilter};

fn fast_compositor() -> PageCompositor {
    PageCompositor::with_settings(ComposeSettings {
        resize_filter: ResizeFilter::Nearest,
        jpeg_quality: 50,
        ..ComposeSettings::default()
    })
    .unwrap()
}

#[test]
fn zero_threads_is_rejected() {
    assert!(matches!(
        build_thread_pool(Some(0)),
        Err(AlbumError::Config(_))
    ));
    build_thread_pool(Some(2)).unwrap();
}

#[test]
fn gallery_writes_one_page_per_layout() {
    let dir = PathBuf::from("target").join("unit_gallery");
    let _ = std::fs::remove_dir_all(&dir);
    std::fs::create_dir_all(&dir).unwrap();

    let threading = GalleryThreading {
        parallel: true,
        threads: Some(4),
    };
    let report = render_gallery(&dir, &fast_compositor(), &threading).unwrap();

    assert!(report.samples.portrait.exists());
    assert!(report.samples.landscape.exists());
    assert_eq!(report.pages.len(), 32);
    for (page, id) in report.pages.iter().zip(layout_ids()) {
        assert_eq!(page, &dir.join(format!("{id}.jpg")));
        let img = image::open(page).unwrap();
        assert_eq!((img.width(), img.height()), (960, 1440), "{id}");
    }

    let jpgs = std::fs::read_dir(&dir)
        .unwrap()
        .filter_map(|e| e.ok())
        .filter(|e| e.path().extension().is_some_and(|x| x == "jpg"))
        .count();
    assert_eq!(jpgs, 32 + 2);
}
