use super::*;

#[test]
fn frame_range_contains_boundaries() {
    let r = FrameRange::new(FrameIndex(2), FrameIndex(5)).unwrap();
    assert!(!r.contains(FrameIndex(1)));
    assert!(r.contains(FrameIndex(2)));
    assert!(r.contains(FrameIndex(4)));
    assert!(!r.contains(FrameIndex(5)));
    assert_eq!(r.len_frames(), 3);
}

#[test]
fn frame_range_rejects_inverted_bounds() {
    assert!(FrameRange::new(FrameIndex(5), FrameIndex(2)).is_err());
    assert!(
        FrameRange::new(FrameIndex(3), FrameIndex(3))
            .unwrap()
            .is_empty()
    );
}

#[test]
fn fps_rejects_zero_parts() {
    assert!(Fps::new(0, 1).is_err());
    assert!(Fps::new(30, 0).is_err());
    assert_eq!(Fps::from_int(30).unwrap().as_f64(), 30.0);
}

#[test]
fn hold_frames_rounds_and_clamps_to_one() {
    let fps = Fps::from_int(30).unwrap();
    assert_eq!(fps.hold_frames(2.0), 60);
    assert_eq!(fps.hold_frames(0.5), 15);
    // 0.05 * 30 = 1.5 rounds away from zero.
    assert_eq!(fps.hold_frames(0.05), 2);
    assert_eq!(fps.hold_frames(0.01), 1);
    assert_eq!(fps.hold_frames(0.0), 1);
    assert_eq!(fps.hold_frames(f64::NAN), 1);
}

#[test]
fn hold_frames_drifts_for_non_integral_products() {
    let fps = Fps::from_int(24).unwrap();
    // 1.03 * 24 = 24.72 -> 25 frames per hold.
    let per = fps.hold_frames(1.03);
    assert_eq!(per, 25);
    let total_secs = fps.frames_to_secs(per * 3);
    assert!((total_secs - 3.0 * 1.03).abs() > 0.01);
}

#[test]
fn canvas_text_region_truncates() {
    let c = Canvas::new(1080, 1920);
    assert_eq!(c.text_region(), (972, 960));
    let c = Canvas::new(101, 33);
    assert_eq!(c.text_region(), (90, 16));
}

#[test]
fn canvas_validate_limits() {
    assert!(Canvas::new(0, 10).validate().is_err());
    assert!(Canvas::new(70_000, 10).validate().is_err());
    assert!(Canvas::new(1080, 1920).validate().is_ok());
    assert_eq!(Canvas::new(4, 2).frame_len_bytes(), 32);
}

#[test]
fn canvas_background_must_be_opaque() {
    let mut c = Canvas::new(8, 8);
    c.background = Rgba8 {
        r: 0,
        g: 0,
        b: 0,
        a: 128,
    };
    assert!(matches!(c.validate(), Err(ReelError::Validation(_))));
    c.background = Rgba8::opaque(1, 2, 3);
    assert!(c.validate().is_ok());
}
