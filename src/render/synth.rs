use crate::fit::FittedFont;
use crate::foundation::core::{Affine, Canvas};
use crate::foundation::error::{ReelError, ReelResult};
use crate::foundation::math::centered_origin;
use crate::render::frame::FrameRGBA;
use crate::text::{FontFace, TextExtent};

/// Where the text's bounding box landed on the canvas.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TextPlacement {
    /// Left edge; negative when the text is wider than the canvas.
    pub x: i64,
    /// Top edge; negative when the text is taller than the canvas.
    pub y: i64,
    /// Measured extent at the fitted size.
    pub extent: TextExtent,
}

/// One synthesized still.
#[derive(Clone, Debug)]
pub struct Frame {
    pub pixels: FrameRGBA,
    /// `None` when no face could draw the text and only the background was painted.
    pub placement: Option<TextPlacement>,
}

/// Paints canvas-sized stills: solid background with one centered line of text.
///
/// The raster context is reused across calls with the same canvas.
pub struct FrameSynthesizer {
    canvas: Canvas,
    ctx: Option<vello_cpu::RenderContext>,
}

impl FrameSynthesizer {
    pub fn new(canvas: Canvas) -> ReelResult<Self> {
        canvas.validate()?;
        Ok(Self { canvas, ctx: None })
    }

    pub fn canvas(&self) -> Canvas {
        self.canvas
    }

    /// Render `text` with `face` at `fitted.size_px`, centered on the canvas.
    ///
    /// `face` must be the face `fitted` refers to (the fallback face when
    /// [`FittedFont::needs_fallback_face`]). Passing `None`, or a face that fails to rasterize,
    /// yields a background-only frame rather than an error.
    pub fn render(
        &mut self,
        text: &str,
        fitted: &FittedFont,
        face: Option<&mut dyn FontFace>,
    ) -> ReelResult<Frame> {
        let canvas = self.canvas;
        let (w16, h16) = raster_dims(canvas)?;

        let mut ctx = match self.ctx.take() {
            Some(ctx) if ctx.width() == w16 && ctx.height() == h16 => ctx,
            _ => vello_cpu::RenderContext::new(w16, h16),
        };
        ctx.reset();

        ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
        let bg = canvas.background;
        ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(bg.r, bg.g, bg.b, bg.a));
        ctx.fill_rect(&vello_cpu::kurbo::Rect::new(
            0.0,
            0.0,
            f64::from(canvas.width),
            f64::from(canvas.height),
        ));

        let placement = match face {
            Some(face) => draw_centered(&mut ctx, canvas, text, fitted, face),
            None => {
                tracing::warn!(family = %fitted.family, "no face available; frame has no text");
                None
            }
        };

        ctx.flush();
        let mut pixmap = vello_cpu::Pixmap::new(w16, h16);
        ctx.render_to_pixmap(&mut pixmap);
        let pixels = FrameRGBA {
            width: canvas.width,
            height: canvas.height,
            data: pixmap.data_as_u8_slice().to_vec(),
        };
        self.ctx = Some(ctx);

        Ok(Frame { pixels, placement })
    }
}

fn draw_centered(
    ctx: &mut vello_cpu::RenderContext,
    canvas: Canvas,
    text: &str,
    fitted: &FittedFont,
    face: &mut dyn FontFace,
) -> Option<TextPlacement> {
    let extent = match face.measure(text, fitted.size_px) {
        Ok(extent) => extent,
        Err(e) => {
            tracing::warn!(error = %e, "cannot measure text; frame has no text");
            return None;
        }
    };

    let x = centered_origin(canvas.width, extent.width);
    let y = centered_origin(canvas.height, extent.height);
    ctx.set_transform(affine_to_cpu(Affine::translate((x as f64, y as f64))));
    if let Err(e) = face.draw(ctx, text, fitted.size_px, canvas.foreground) {
        tracing::warn!(error = %e, "cannot draw text; frame has no text");
        return None;
    }
    Some(TextPlacement { x, y, extent })
}

fn raster_dims(canvas: Canvas) -> ReelResult<(u16, u16)> {
    let w: u16 = canvas
        .width
        .try_into()
        .map_err(|_| ReelError::render("canvas width exceeds u16"))?;
    let h: u16 = canvas
        .height
        .try_into()
        .map_err(|_| ReelError::render("canvas height exceeds u16"))?;
    Ok((w, h))
}

fn affine_to_cpu(a: Affine) -> vello_cpu::kurbo::Affine {
    vello_cpu::kurbo::Affine::new(a.as_coeffs())
}

#[cfg(test)]
#[path = "../../tests/unit/render/synth.rs"]
mod tests;
