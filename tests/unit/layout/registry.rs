use std::collections::HashSet;

use super::*;

#[test]
fn catalog_has_32_unique_ids() {
    let ids = layout_ids().collect::<Vec<_>>();
    assert_eq!(ids.len(), 32);
    let uniq = ids.iter().copied().collect::<HashSet<_>>();
    assert_eq!(uniq.len(), 32);
}

#[test]
fn slot_count_matches_template_for_every_layout() {
    for id in layout_ids() {
        let n = slot_count_of(id).unwrap();
        assert_eq!(n, template_of(id).unwrap().slot_count(), "{id}");
        assert!((1..=9).contains(&n), "{id}");
    }
}

#[test]
fn every_catalog_id_is_valid() {
    for t in templates() {
        assert!(is_valid_layout(t.id));
        assert_eq!(template_of(t.id).unwrap().id, t.id);
    }
}

#[test]
fn unknown_layout_is_rejected() {
    assert!(!is_valid_layout("nonexistent"));
    assert!(!is_valid_layout("1-46-v"));
    assert!(matches!(
        template_of("nonexistent"),
        Err(AlbumError::UnknownLayout(ref id)) if id == "nonexistent"
    ));
}

#[test]
fn slot_count_parses_leading_token_only() {
    assert_eq!(slot_count_of("3-35-V-1").unwrap(), 3);
    assert_eq!(slot_count_of("9-23-1").unwrap(), 9);
    assert_eq!(slot_count_of("12-X").unwrap(), 12);
    for bad in ["nonexistent", "", "-1-46", "0-46-V", "+2-46-1", "M-2"] {
        assert!(
            matches!(slot_count_of(bad), Err(AlbumError::MalformedLayoutId(_))),
            "{bad}"
        );
    }
}

#[test]
fn normalize_uppercases_and_trims() {
    assert_eq!(normalize_layout_id(" 2-m-45 "), "2-M-45");
    assert!(is_valid_layout(&normalize_layout_id("3-35-st-h-l")));
}

#[test]
fn single_portrait_layout_geometry() {
    let t = template_of("1-46-V").unwrap();
    let s = t.slots[0];
    assert_eq!((s.print_size.width, s.print_size.height), (384, 576));
    assert_eq!(s.offset, Offset::new(288, 432));
    assert!(!s.is_rotated());
    assert_eq!(s.label_code, "");
}

#[test]
fn mixed_layout_geometry_and_labels() {
    let t = template_of("2-M-45").unwrap();
    assert_eq!(t.slots[0].print_size.code, "3x5P");
    assert_eq!(t.slots[0].offset, Offset::new(128, 185));
    assert_eq!(t.slots[0].rotation_degrees, 15.0);
    assert_eq!(t.slots[0].label_code, "A");
    assert_eq!(t.slots[1].print_size.code, "4x6L");
    assert_eq!(t.slots[1].offset, Offset::new(202, 735));
    assert_eq!(t.slots[1].rotation_degrees, -15.0);
    assert_eq!(t.slots[1].label_code, "B");
}

#[test]
fn multi_letter_labels_survive() {
    let t = template_of("4-M-23").unwrap();
    let labels = t.slots.iter().map(|s| s.label_code).collect::<Vec<_>>();
    assert_eq!(labels, ["AC", "B", "E", "D"]);
}

#[test]
fn catalog_print_sizes_resolve_through_table() {
    for t in templates() {
        for s in t.slots {
            assert_eq!(PrintSize::lookup(s.print_size.code).unwrap(), s.print_size);
        }
    }
}

#[test]
fn unrotated_slots_stay_on_page() {
    use crate::foundation::core::{PAGE_HEIGHT, PAGE_WIDTH};

    for t in templates() {
        for s in t.slots.iter().filter(|s| !s.is_rotated()) {
            assert!(s.offset.left >= 0 && s.offset.top >= 0, "{}", t.id);
            let right = s.offset.left as u32 + s.print_size.width;
            let bottom = s.offset.top as u32 + s.print_size.height;
            assert!(right <= PAGE_WIDTH && bottom <= PAGE_HEIGHT, "{}", t.id);
        }
    }
}

#[test]
fn slot_builder_defaults() {
    let s = SlotSpec::default();
    assert_eq!(s.print_size.code, "2x3P");
    assert_eq!(s.offset, Offset::default());
    assert_eq!(s.rotation_degrees, 0.0);
    assert_eq!(s.label_code, "");

    let s = SlotSpec::new(PrintSize::lookup("5x7L").unwrap(), Offset::new(1, 2))
        .rotated(-15.0)
        .labeled("CD");
    assert!(s.is_rotated());
    assert_eq!(s.label_code, "CD");
}
