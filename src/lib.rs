//! fontreel renders a vertical showcase video where one line of text cycles through font families.
//!
//! Pipeline, run strictly in order:
//!
//! - Resolve the configured fonts ([`FontProvider`])
//! - Fit the text into 90% × 50% of the canvas per font ([`fit`])
//! - Synthesize one centered still per font ([`FrameSynthesizer`])
//! - Hold each still for `max(1, round(seconds × fps))` frames ([`sequence`])
//! - Stream the frames into a [`FrameSink`] (`ffmpeg` MP4 via [`render_reel`])
#![forbid(unsafe_code)]

mod foundation;

/// Run configuration.
pub mod config;
/// Encoding sinks.
pub mod encode;
/// Glyph size fitting.
pub mod fit;
/// Font resources, providers and face sources.
pub mod fonts;
/// End-to-end entry points.
pub mod pipeline;
/// CPU frame synthesis.
pub mod render;
/// Frame stream assembly.
pub mod sequence;
/// Text measurement and drawing.
pub mod text;

pub use crate::foundation::core::{Canvas, Fps, FrameIndex, FrameRange, Rgba8};
pub use crate::foundation::error::{FontUnavailableError, ReelError, ReelResult};

pub use crate::config::ReelConfig;
pub use crate::encode::ffmpeg::{FfmpegSink, FfmpegSinkOpts, is_ffmpeg_on_path};
pub use crate::encode::sink::{FrameSink, InMemorySink, SinkConfig};
pub use crate::encode::{VideoOutput, encode, encode_to_sink};
pub use crate::fit::{FitBounds, FitOutcome, FittedFont, fit, fit_with_bounds};
pub use crate::fonts::provider::{DirFontProvider, FontProvider, ListFontProvider};
pub use crate::fonts::{FaceSource, FileFaceSource, FontResource};
pub use crate::pipeline::{
    Preview, render_preview, render_preview_with, render_reel, render_reel_with, resolve_fonts,
};
pub use crate::render::frame::FrameRGBA;
pub use crate::render::synth::{Frame, FrameSynthesizer, TextPlacement};
pub use crate::sequence::{FontSegment, FrameStream, RenderOpts, sequence, sequence_with};
pub use crate::text::face::{FallbackFont, ParleyFace};
pub use crate::text::{FontFace, TextExtent};

#[cfg(test)]
#[path = "../tests/unit/support.rs"]
pub(crate) mod test_support;
