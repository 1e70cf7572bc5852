use super::*;

#[test]
fn lookup_known_codes() {
    let p = PrintSize::lookup("4x6P").unwrap();
    assert_eq!((p.width, p.height), (384, 576));
    let p = PrintSize::lookup("8x10P").unwrap();
    assert_eq!((p.width, p.height), (768, 960));
    let p = PrintSize::lookup("2x3L").unwrap();
    assert_eq!((p.width, p.height), (336, 240));
}

#[test]
fn lookup_unknown_code_fails() {
    let err = PrintSize::lookup("4x6").unwrap_err();
    assert!(matches!(err, AlbumError::UnknownPrintSize(ref c) if c == "4x6"));
    assert!(PrintSize::lookup("4x6p").is_err());
}

#[test]
fn portrait_landscape_pairs_are_transposed() {
    for p in PrintSize::all() {
        assert!(p.width > 0 && p.height > 0);
        let Some(stem) = p.code.strip_suffix('P') else {
            continue;
        };
        let Ok(l) = PrintSize::lookup(&format!("{stem}L")) else {
            continue;
        };
        assert_eq!((p.width, p.height), (l.height, l.width), "{}", p.code);
    }
}

#[test]
fn table_has_ten_unique_codes() {
    let all = PrintSize::all();
    assert_eq!(all.len(), 10);
    let mut codes = all.iter().map(|p| p.code).collect::<Vec<_>>();
    codes.sort_unstable();
    codes.dedup();
    assert_eq!(codes.len(), 10);
}
