use super::*;

#[test]
fn non_font_bytes_register_no_family() {
    let err = TextLayoutEngine::new("junk.ttf", b"definitely not a font".to_vec(), 0)
        .err()
        .unwrap();
    assert_eq!(err.family, "junk.ttf");
}

#[test]
fn brush_from_rgba8_copies_channels() {
    let b = TextBrushRgba8::from(Rgba8 {
        r: 1,
        g: 2,
        b: 3,
        a: 4,
    });
    assert_eq!((b.r, b.g, b.b, b.a), (1, 2, 3, 4));
}

#[test]
fn layout_line_smoke_with_system_font_if_present() {
    let mut db = usvg::fontdb::Database::new();
    db.load_system_fonts();
    let Some(face) = db.faces().next() else {
        return;
    };
    let Some((bytes, index)) = db.with_face_data(face.id, |data, index| (data.to_vec(), index))
    else {
        return;
    };

    let mut engine = TextLayoutEngine::new("system", bytes, index).unwrap();
    assert!(!engine.family_name().trim().is_empty());
    let layout = engine
        .layout_line("hello", 48.0, TextBrushRgba8::default())
        .unwrap();
    assert_eq!(layout.lines().count(), 1);
    assert!(engine.layout_line("hello", 0.0, TextBrushRgba8::default()).is_err());
}

#[test]
fn missing_collection_index_is_unavailable_if_system_font_present() {
    let mut db = usvg::fontdb::Database::new();
    db.load_system_fonts();
    let Some(face) = db.faces().next() else {
        return;
    };
    let Some(bytes) = db.with_face_data(face.id, |data, _| data.to_vec()) else {
        return;
    };

    let err = TextLayoutEngine::new("system", bytes, 9_999).err().unwrap();
    assert_eq!(err.family, "system");
    assert!(err.reason.contains("9999"));
}

#[test]
fn non_first_collection_face_lays_out_if_present() {
    let mut db = usvg::fontdb::Database::new();
    db.load_system_fonts();
    let Some(face) = db.faces().find(|f| f.index > 0) else {
        return;
    };
    let Some(bytes) = db.with_face_data(face.id, |data, _| data.to_vec()) else {
        return;
    };

    let mut engine = TextLayoutEngine::new("collection", bytes, face.index).unwrap();
    assert!(!engine.family_name().trim().is_empty());
    let layout = engine
        .layout_line("hello", 32.0, TextBrushRgba8::default())
        .unwrap();
    assert!(layout.width() > 0.0);
}
