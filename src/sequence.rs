//! Sequencing: one still per font, held for a fixed number of frames.
//!
//! The stream stores each distinct still once and repeats it by reference; consumers see a flat,
//! ordered run of canvas-sized frames.

use std::sync::Arc;

use rayon::prelude::*;

use crate::fit::{FALLBACK_SIZE_PX, FitOutcome, FittedFont, fit};
use crate::fonts::{FaceSource, FileFaceSource, FontResource};
use crate::foundation::core::{Canvas, Fps, FrameIndex, FrameRange};
use crate::foundation::error::{ReelError, ReelResult};
use crate::render::frame::FrameRGBA;
use crate::render::synth::{FrameSynthesizer, TextPlacement};
use crate::text::FontFace;

/// Threading controls for per-font synthesis.
#[derive(Clone, Debug, Default)]
pub struct RenderOpts {
    /// Synthesize fonts on a `rayon` pool when `true`.
    pub parallel: bool,
    /// Optional explicit worker thread count.
    pub threads: Option<usize>,
}

/// The stretch of the stream that shows one font.
#[derive(Clone, Debug)]
pub struct FontSegment {
    /// Family as requested by the font resource.
    pub family: String,
    /// Size and outcome chosen by the fitter.
    pub fitted: FittedFont,
    /// Frames occupied by this font.
    pub range: FrameRange,
    /// Where the text landed; `None` for background-only stills.
    pub placement: Option<TextPlacement>,
    /// The still repeated across `range`.
    pub frame: Arc<FrameRGBA>,
}

/// Ordered, canvas-sized frames at a fixed rate.
#[derive(Clone, Debug)]
pub struct FrameStream {
    canvas: Canvas,
    fps: Fps,
    segments: Vec<FontSegment>,
}

impl FrameStream {
    pub fn canvas(&self) -> Canvas {
        self.canvas
    }

    pub fn fps(&self) -> Fps {
        self.fps
    }

    pub fn segments(&self) -> &[FontSegment] {
        &self.segments
    }

    /// Total number of frames.
    pub fn len(&self) -> u64 {
        self.segments.last().map(|s| s.range.end.0).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Playback length in seconds.
    pub fn duration_secs(&self) -> f64 {
        self.fps.frames_to_secs(self.len())
    }

    /// Every frame in stream order.
    pub fn iter(&self) -> impl Iterator<Item = (FrameIndex, &FrameRGBA)> + '_ {
        self.segments.iter().flat_map(|seg| {
            (seg.range.start.0..seg.range.end.0).map(move |i| (FrameIndex(i), seg.frame.as_ref()))
        })
    }

    fn segment_at(&self, idx: FrameIndex) -> Option<&FontSegment> {
        let i = self
            .segments
            .partition_point(|seg| seg.range.end.0 <= idx.0);
        self.segments.get(i).filter(|seg| seg.range.contains(idx))
    }

    pub fn frame_at(&self, idx: FrameIndex) -> Option<&FrameRGBA> {
        self.segment_at(idx).map(|seg| seg.frame.as_ref())
    }

    pub fn family_at(&self, idx: FrameIndex) -> Option<&str> {
        self.segment_at(idx).map(|seg| seg.family.as_str())
    }
}

/// Sequence `fonts` using font files on disk and the system fallback face.
pub fn sequence(
    fonts: &[FontResource],
    text: &str,
    canvas: Canvas,
    fps: Fps,
    seconds_per_font: f64,
    opts: &RenderOpts,
) -> ReelResult<FrameStream> {
    let source = FileFaceSource::with_system_fallback();
    sequence_with(&source, fonts, text, canvas, fps, seconds_per_font, opts)
}

/// Sequence `fonts` with faces supplied by `source`.
///
/// Fonts that cannot be rasterized degrade to the fallback face; only an empty font list or a
/// raster failure is an error.
#[tracing::instrument(level = "debug", skip(source, fonts, opts), fields(fonts = fonts.len()))]
pub fn sequence_with<S: FaceSource>(
    source: &S,
    fonts: &[FontResource],
    text: &str,
    canvas: Canvas,
    fps: Fps,
    seconds_per_font: f64,
    opts: &RenderOpts,
) -> ReelResult<FrameStream> {
    if fonts.is_empty() {
        return Err(ReelError::no_usable_fonts("font list is empty"));
    }
    canvas.validate()?;
    let hold = fps.hold_frames(seconds_per_font);

    let stills: Vec<(FittedFont, Option<TextPlacement>, FrameRGBA)> = if opts.parallel {
        let pool = build_thread_pool(opts.threads)?;
        pool.install(|| {
            fonts
                .par_iter()
                .map(|font| {
                    let mut synth = FrameSynthesizer::new(canvas)?;
                    synthesize_font(source, font, text, &mut synth)
                })
                .collect::<ReelResult<Vec<_>>>()
        })?
    } else {
        let mut synth = FrameSynthesizer::new(canvas)?;
        fonts
            .iter()
            .map(|font| synthesize_font(source, font, text, &mut synth))
            .collect::<ReelResult<Vec<_>>>()?
    };

    let mut segments = Vec::with_capacity(stills.len());
    let mut start = 0u64;
    for (font, (fitted, placement, pixels)) in fonts.iter().zip(stills) {
        let end = start
            .checked_add(hold)
            .ok_or_else(|| ReelError::validation("total frame count overflows"))?;
        let range = FrameRange::new(FrameIndex(start), FrameIndex(end))?;
        tracing::info!(
            family = %font.family,
            size_px = fitted.size_px,
            outcome = ?fitted.outcome,
            start,
            frames = hold,
            "font sequenced"
        );
        segments.push(FontSegment {
            family: font.family.clone(),
            fitted,
            range,
            placement,
            frame: Arc::new(pixels),
        });
        start = end;
    }

    Ok(FrameStream {
        canvas,
        fps,
        segments,
    })
}

/// Fit and draw the still for one font.
pub(crate) fn synthesize_font<S: FaceSource>(
    source: &S,
    font: &FontResource,
    text: &str,
    synth: &mut FrameSynthesizer,
) -> ReelResult<(FittedFont, Option<TextPlacement>, FrameRGBA)> {
    let (max_w, max_h) = synth.canvas().text_region();

    let (fitted, mut face) = match source.load(font) {
        Ok(mut face) => {
            let mut fitted = fit(text, &mut face, max_w, max_h);
            fitted.family = font.family.clone();
            if fitted.needs_fallback_face() {
                (fitted, source.fallback())
            } else {
                (fitted, Some(face))
            }
        }
        Err(e) => {
            tracing::warn!(error = %e, "font failed to load; using fallback");
            let fitted = FittedFont {
                family: font.family.clone(),
                size_px: FALLBACK_SIZE_PX,
                outcome: FitOutcome::Unavailable,
            };
            (fitted, source.fallback())
        }
    };

    let frame = synth.render(
        text,
        &fitted,
        face.as_mut().map(|f| f as &mut dyn FontFace),
    )?;
    Ok((fitted, frame.placement, frame.pixels))
}

fn build_thread_pool(threads: Option<usize>) -> ReelResult<rayon::ThreadPool> {
    if let Some(n) = threads
        && n == 0
    {
        return Err(ReelError::validation("'threads' must be >= 1 when set"));
    }
    let mut builder = rayon::ThreadPoolBuilder::new();
    if let Some(n) = threads {
        builder = builder.num_threads(n);
    }
    builder
        .build()
        .map_err(|e| ReelError::render(format!("failed to build rayon thread pool: {e}")))
}

#[cfg(test)]
#[path = "../tests/unit/sequence.rs"]
mod tests;
