//! Encoding: hand a frame stream to a sink.
//!
//! Sinks consume frames in stream order. [`encode`] drives the `ffmpeg` MP4 sink; tests use
//! [`sink::InMemorySink`] through [`encode_to_sink`].

/// `ffmpeg`-based sink (MP4 output via system `ffmpeg`).
pub mod ffmpeg;
/// Generic frame sink trait and built-in sinks.
pub mod sink;

use std::path::{Path, PathBuf};

use crate::foundation::core::Fps;
use crate::foundation::error::{ReelError, ReelResult};
use crate::sequence::FrameStream;

use self::ffmpeg::{FfmpegSink, FfmpegSinkOpts};
use self::sink::{FrameSink, SinkConfig};

/// Description of an encoded video.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct VideoOutput {
    /// Output file, or `None` when the sink does not write one.
    pub path: Option<PathBuf>,
    pub width: u32,
    pub height: u32,
    pub frames: u64,
    pub fps: Fps,
    /// `frames / fps`.
    pub duration_secs: f64,
}

/// Encode `stream` at `fps` into an MP4 at `out_path`.
///
/// A previous file at `out_path` is replaced only when encoding succeeds.
pub fn encode(stream: &FrameStream, fps: Fps, out_path: &Path) -> ReelResult<VideoOutput> {
    let mut sink = FfmpegSink::new(FfmpegSinkOpts::new(out_path));
    let mut out = encode_to_sink(stream, fps, &mut sink)?;
    out.path = Some(out_path.to_path_buf());
    Ok(out)
}

/// Push every frame of `stream` into `sink`.
///
/// Any frame whose size differs from the canvas aborts the encode.
#[tracing::instrument(level = "debug", skip(stream, sink), fields(frames = stream.len()))]
pub fn encode_to_sink(
    stream: &FrameStream,
    fps: Fps,
    sink: &mut dyn FrameSink,
) -> ReelResult<VideoOutput> {
    if stream.is_empty() {
        return Err(ReelError::validation("cannot encode an empty frame stream"));
    }
    let canvas = stream.canvas();
    let cfg = SinkConfig {
        width: canvas.width,
        height: canvas.height,
        fps,
    };

    sink.begin(cfg)?;
    let mut frames = 0u64;
    for (idx, frame) in stream.iter() {
        sink.push_frame(idx, frame)?;
        frames += 1;
    }
    sink.end()?;

    let out = VideoOutput {
        path: None,
        width: cfg.width,
        height: cfg.height,
        frames,
        fps,
        duration_secs: fps.frames_to_secs(frames),
    };
    tracing::info!(frames, duration_secs = out.duration_secs, "encoded");
    Ok(out)
}

#[cfg(test)]
#[path = "../../tests/unit/encode/mod.rs"]
mod tests;
