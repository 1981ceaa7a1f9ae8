//! End-to-end entry points: resolve fonts, sequence, encode.

use crate::config::ReelConfig;
use crate::encode::ffmpeg::{FfmpegSink, FfmpegSinkOpts};
use crate::encode::sink::FrameSink;
use crate::encode::{VideoOutput, encode_to_sink};
use crate::fit::FittedFont;
use crate::fonts::provider::{DirFontProvider, FontProvider, ListFontProvider};
use crate::fonts::{FaceSource, FileFaceSource, FontResource};
use crate::foundation::error::{ReelError, ReelResult};
use crate::render::frame::FrameRGBA;
use crate::render::synth::{FrameSynthesizer, TextPlacement};
use crate::sequence::{RenderOpts, sequence_with, synthesize_font};

/// One synthesized still, as produced for a single font.
#[derive(Clone, Debug)]
pub struct Preview {
    pub fitted: FittedFont,
    pub placement: Option<TextPlacement>,
    pub pixels: FrameRGBA,
}

/// Resolve the configured fonts: the explicit list first, then `fonts_dir`.
///
/// A source that yields nothing is skipped; the run fails only when no source yields a font.
pub fn resolve_fonts(cfg: &ReelConfig) -> ReelResult<Vec<FontResource>> {
    let mut providers: Vec<Box<dyn FontProvider>> = Vec::new();
    if !cfg.fonts.is_empty() {
        providers.push(Box::new(ListFontProvider::new(cfg.fonts.clone())));
    }
    if let Some(dir) = &cfg.fonts_dir {
        providers.push(Box::new(DirFontProvider::new(dir)));
    }

    let mut fonts = Vec::new();
    for provider in providers {
        match provider.resolve() {
            Ok(found) => fonts.extend(found),
            Err(ReelError::NoUsableFonts(msg)) => {
                tracing::warn!(%msg, "font source yielded no usable fonts");
            }
            Err(e) => return Err(e),
        }
    }

    if fonts.is_empty() {
        return Err(ReelError::no_usable_fonts(
            "no usable fonts configured (use --font FAMILY=PATH or --fonts-dir)",
        ));
    }
    Ok(fonts)
}

/// Render the configured reel to `cfg.output` as MP4.
///
/// Nothing is written when fonts cannot be resolved or encoding fails.
#[tracing::instrument(skip(cfg, opts), fields(output = %cfg.output.display()))]
pub fn render_reel(cfg: &ReelConfig, opts: &RenderOpts) -> ReelResult<VideoOutput> {
    cfg.validate()?;
    let fonts = resolve_fonts(cfg)?;
    tracing::info!(fonts = fonts.len(), "fonts resolved");

    let source = FileFaceSource::with_system_fallback();
    let mut sink = FfmpegSink::new(FfmpegSinkOpts::new(&cfg.output));

    let mut out = render_reel_with(&source, &fonts, cfg, opts, &mut sink)?;
    out.path = Some(cfg.output.clone());
    tracing::info!(
        frames = out.frames,
        duration_secs = out.duration_secs,
        "reel written"
    );
    Ok(out)
}

/// Sequence `fonts` with faces from `source` and stream the frames into `sink`.
#[tracing::instrument(skip_all, fields(fonts = fonts.len()))]
pub fn render_reel_with<S: FaceSource>(
    source: &S,
    fonts: &[FontResource],
    cfg: &ReelConfig,
    opts: &RenderOpts,
    sink: &mut dyn FrameSink,
) -> ReelResult<VideoOutput> {
    cfg.validate()?;
    let fps = cfg.fps()?;
    let stream = sequence_with(
        source,
        fonts,
        &cfg.text,
        cfg.canvas(),
        fps,
        cfg.seconds_per_font,
        opts,
    )?;
    tracing::info!(
        frames = stream.len(),
        distinct = stream.segments().len(),
        "frames synthesized"
    );
    encode_to_sink(&stream, fps, sink)
}

/// Synthesize the still for the `font_index`-th resolved font.
pub fn render_preview(cfg: &ReelConfig, font_index: usize) -> ReelResult<Preview> {
    cfg.validate()?;
    let fonts = resolve_fonts(cfg)?;
    render_preview_with(
        &FileFaceSource::with_system_fallback(),
        &fonts,
        cfg,
        font_index,
    )
}

/// [`render_preview`] with faces from `source`.
pub fn render_preview_with<S: FaceSource>(
    source: &S,
    fonts: &[FontResource],
    cfg: &ReelConfig,
    font_index: usize,
) -> ReelResult<Preview> {
    let font = fonts.get(font_index).ok_or_else(|| {
        ReelError::validation(format!(
            "font index {font_index} out of range (have {} fonts)",
            fonts.len()
        ))
    })?;
    let mut synth = FrameSynthesizer::new(cfg.canvas())?;
    let (fitted, placement, pixels) = synthesize_font(source, font, &cfg.text, &mut synth)?;
    tracing::info!(family = %fitted.family, size_px = fitted.size_px, "preview rendered");
    Ok(Preview {
        fitted,
        placement,
        pixels,
    })
}

#[cfg(test)]
#[path = "../tests/unit/pipeline.rs"]
mod tests;
