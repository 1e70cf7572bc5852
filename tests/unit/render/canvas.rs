use super::*;

#[test]
fn filled_forces_opaque_alpha() {
    let c = Canvas::filled(3, 2, [1, 2, 3, 0]);
    assert_eq!((c.width(), c.height()), (3, 2));
    assert_eq!(c.pixel(2, 1), [1, 2, 3, 255]);
}

#[test]
fn encode_jpeg_decodes_back_with_same_size() {
    let c = Canvas::filled(16, 8, [0xAA, 0xAA, 0xAA, 255]);
    let bytes = c.encode_jpeg(90).unwrap();
    assert_eq!(
        image::guess_format(&bytes).unwrap(),
        image::ImageFormat::Jpeg
    );
    let back = image::load_from_memory(&bytes).unwrap().to_rgb8();
    assert_eq!(back.dimensions(), (16, 8));
    let p = back.get_pixel(8, 4).0;
    for ch in p {
        assert!((i16::from(ch) - 0xAA).abs() <= 3, "{p:?}");
    }
}

#[test]
fn encode_jpeg_rejects_bad_quality() {
    let c = Canvas::filled(1, 1, [0, 0, 0, 255]);
    assert!(matches!(c.encode_jpeg(0), Err(AlbumError::Config(_))));
    assert!(matches!(c.encode_jpeg(101), Err(AlbumError::Config(_))));
}

#[test]
fn write_jpeg_creates_file() {
    let dir = Path::new("target").join("unit_canvas");
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("out.jpg");
    let _ = std::fs::remove_file(&path);

    Canvas::filled(4, 4, [0, 0, 0, 255])
        .write_jpeg(&path, 80)
        .unwrap();
    let img = image::open(&path).unwrap();
    assert_eq!((img.width(), img.height()), (4, 4));
}

#[test]
fn write_jpeg_into_missing_dir_fails() {
    let path = Path::new("target/unit_canvas/no/such/dir/out.jpg");
    assert!(
        Canvas::filled(1, 1, [0, 0, 0, 255])
            .write_jpeg(path, 80)
            .is_err()
    );
}
