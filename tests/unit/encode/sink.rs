use super::*;

fn cfg(width: u32, height: u32) -> SinkConfig {
    SinkConfig {
        width,
        height,
        fps: Fps::from_int(30).unwrap(),
    }
}

fn solid(width: u32, height: u32, v: u8) -> FrameRGBA {
    FrameRGBA {
        width,
        height,
        data: vec![v; (width * height * 4) as usize],
    }
}

#[test]
fn in_memory_sink_records_frames_in_order() {
    let mut sink = InMemorySink::new();
    sink.begin(cfg(2, 2)).unwrap();
    sink.push_frame(FrameIndex(0), &solid(2, 2, 1)).unwrap();
    sink.push_frame(FrameIndex(1), &solid(2, 2, 1)).unwrap();
    sink.push_frame(FrameIndex(2), &solid(2, 2, 9)).unwrap();
    sink.end().unwrap();

    assert!(sink.is_finished());
    assert_eq!(sink.config(), Some(cfg(2, 2)));
    let f = sink.frames();
    assert_eq!(f.len(), 3);
    assert_eq!(f[0].1, f[1].1);
    assert_ne!(f[1].1, f[2].1);
}

#[test]
fn in_memory_sink_rejects_out_of_order_indices() {
    let mut sink = InMemorySink::new();
    sink.begin(cfg(2, 2)).unwrap();
    sink.push_frame(FrameIndex(3), &solid(2, 2, 0)).unwrap();
    assert!(sink.push_frame(FrameIndex(3), &solid(2, 2, 0)).is_err());
    assert!(sink.push_frame(FrameIndex(1), &solid(2, 2, 0)).is_err());
}

#[test]
fn dimension_mismatch_is_a_validation_error() {
    let mut sink = InMemorySink::new();
    sink.begin(cfg(4, 4)).unwrap();
    let err = sink
        .push_frame(FrameIndex(0), &solid(2, 2, 0))
        .unwrap_err();
    assert!(matches!(err, ReelError::Validation(_)));

    let mut short = solid(4, 4, 0);
    short.data.truncate(10);
    assert!(check_frame_dims(&cfg(4, 4), &short).is_err());
}

#[test]
fn push_before_begin_fails() {
    let mut sink = InMemorySink::new();
    assert!(sink.push_frame(FrameIndex(0), &solid(1, 1, 0)).is_err());
}

#[test]
fn frame_len_matches_rgba8_canvas() {
    assert_eq!(cfg(4, 2).frame_len_bytes(), 32);
    let frame = solid(4, 2, 0);
    assert_eq!(frame.data.len(), cfg(4, 2).frame_len_bytes());
    check_frame_dims(&cfg(4, 2), &frame).unwrap();
}
