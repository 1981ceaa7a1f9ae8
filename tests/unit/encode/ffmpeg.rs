use super::*;

#[test]
fn partial_path_is_hidden_sibling_with_same_extension() {
    let p = partial_path_for(Path::new("out/reel.mp4")).unwrap();
    assert_eq!(p.parent(), Some(Path::new("out")));
    let name = p.file_name().unwrap().to_str().unwrap();
    assert!(name.starts_with(".partial-"));
    assert!(name.ends_with("-reel.mp4"));
    assert!(partial_path_for(Path::new("/")).is_err());
}

#[test]
fn begin_rejects_odd_dimensions() {
    let mut sink = FfmpegSink::new(FfmpegSinkOpts::new("target/ffmpeg_unit/odd.mp4"));
    let err = sink
        .begin(SinkConfig {
            width: 11,
            height: 10,
            fps: Fps::from_int(30).unwrap(),
        })
        .unwrap_err();
    assert!(matches!(err, ReelError::Validation(_)));
}

#[test]
fn push_before_begin_fails() {
    let mut sink = FfmpegSink::new(FfmpegSinkOpts::new("target/ffmpeg_unit/never.mp4"));
    let frame = FrameRGBA {
        width: 2,
        height: 2,
        data: vec![0; 16],
    };
    assert!(sink.push_frame(FrameIndex(0), &frame).is_err());
    assert!(sink.end().is_err());
}

#[test]
fn refuses_existing_output_without_overwrite() {
    let dir = std::path::PathBuf::from("target").join("ffmpeg_unit");
    std::fs::create_dir_all(&dir).unwrap();
    let out = dir.join("exists.mp4");
    std::fs::write(&out, b"previous").unwrap();

    let mut opts = FfmpegSinkOpts::new(&out);
    opts.overwrite = false;
    let mut sink = FfmpegSink::new(opts);
    let err = sink
        .begin(SinkConfig {
            width: 2,
            height: 2,
            fps: Fps::from_int(30).unwrap(),
        })
        .unwrap_err();
    assert!(matches!(err, ReelError::Validation(_)));
    assert_eq!(std::fs::read(&out).unwrap(), b"previous");
}

#[test]
fn dropped_sink_leaves_previous_output_untouched() {
    if !is_ffmpeg_on_path() {
        return;
    }
    let dir = std::path::PathBuf::from("target").join("ffmpeg_unit");
    std::fs::create_dir_all(&dir).unwrap();
    let out = dir.join("keep.mp4");
    std::fs::write(&out, b"previous").unwrap();

    {
        let mut sink = FfmpegSink::new(FfmpegSinkOpts::new(&out));
        sink.begin(SinkConfig {
            width: 4,
            height: 4,
            fps: Fps::from_int(30).unwrap(),
        })
        .unwrap();
        let frame = FrameRGBA {
            width: 4,
            height: 4,
            data: vec![255; 64],
        };
        sink.push_frame(FrameIndex(0), &frame).unwrap();
    }

    assert_eq!(std::fs::read(&out).unwrap(), b"previous");
    let leftovers = std::fs::read_dir(&dir)
        .unwrap()
        .flatten()
        .filter(|e| e.file_name().to_string_lossy().ends_with("-keep.mp4"))
        .count();
    assert_eq!(leftovers, 0);
}
