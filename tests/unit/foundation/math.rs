use super::*;

#[test]
fn centered_origin_floors() {
    assert_eq!(centered_origin(10, 4), 3);
    assert_eq!(centered_origin(10, 5), 2);
    assert_eq!(centered_origin(10, 13), -2);
    assert_eq!(centered_origin(0, 0), 0);
}

#[test]
fn fnv_split_writes_match_single_write() {
    let mut a = Fnv1a64::new_default();
    a.write_bytes(b"fontreel");
    let mut b = Fnv1a64::new_default();
    b.write_bytes(b"font");
    b.write_bytes(b"reel");
    assert_eq!(a.finish(), b.finish());
    assert_ne!(a.finish(), Fnv1a64::OFFSET_BASIS);
}
