use super::*;
use crate::encode::sink::InMemorySink;
use crate::fonts::FontResource;
use crate::foundation::core::{Canvas, FrameIndex};
use crate::sequence::{RenderOpts, sequence_with};
use crate::test_support::LinearSource;

fn stream(names: &[&str], secs: f64) -> FrameStream {
    let fonts: Vec<FontResource> = names
        .iter()
        .map(|n| FontResource::new(*n, format!("{n}.ttf")))
        .collect();
    sequence_with(
        &LinearSource::new(),
        &fonts,
        "abc",
        Canvas::new(32, 24),
        Fps::from_int(30).unwrap(),
        secs,
        &RenderOpts::default(),
    )
    .unwrap()
}

#[test]
fn every_frame_reaches_the_sink_in_order() {
    let s = stream(&["A", "B"], 2.0);
    let mut sink = InMemorySink::new();
    let out = encode_to_sink(&s, s.fps(), &mut sink).unwrap();

    assert_eq!(out.frames, 120);
    assert_eq!((out.width, out.height), (32, 24));
    assert_eq!(out.duration_secs, 4.0);
    assert_eq!(out.path, None);

    assert!(sink.is_finished());
    let f = sink.frames();
    assert_eq!(f.len(), 120);
    assert!(f.iter().enumerate().all(|(i, (idx, _))| *idx == FrameIndex(i as u64)));
    assert!(f[..60].iter().all(|(_, d)| *d == f[0].1));
    assert!(f[60..].iter().all(|(_, d)| *d == f[60].1));
}

#[test]
fn duration_uses_encode_rate() {
    let s = stream(&["A"], 1.0);
    let mut sink = InMemorySink::new();
    let out = encode_to_sink(&s, Fps::from_int(15).unwrap(), &mut sink).unwrap();
    assert_eq!(out.frames, 30);
    assert_eq!(out.duration_secs, 2.0);
    assert_eq!(sink.config().unwrap().fps, Fps::from_int(15).unwrap());
}

#[test]
fn encode_to_missing_ffmpeg_or_odd_canvas_leaves_no_file() {
    let fonts = vec![FontResource::new("A", "A.ttf")];
    let odd = sequence_with(
        &LinearSource::new(),
        &fonts,
        "abc",
        Canvas::new(31, 24),
        Fps::from_int(30).unwrap(),
        0.1,
        &RenderOpts::default(),
    )
    .unwrap();
    let out = std::path::PathBuf::from("target/encode_unit/odd.mp4");
    let _ = std::fs::remove_file(&out);
    assert!(encode(&odd, odd.fps(), &out).is_err());
    assert!(!out.exists());
}
