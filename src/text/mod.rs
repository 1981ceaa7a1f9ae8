//! Text measurement and drawing.
//!
//! [`FontFace`] is the rasterization capability the fitter and synthesizer depend on. Every
//! operation returns a typed [`FontUnavailableError`] instead of panicking so callers can degrade
//! per font.

use crate::foundation::core::Rgba8;
use crate::foundation::error::FontUnavailableError;

pub(crate) mod engine;
/// Parley/vello_cpu backed faces and the system fallback face.
pub mod face;

/// Pixel size of a laid-out single line of text.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct TextExtent {
    /// Advance width, rounded up to whole pixels.
    pub width: u32,
    /// Line box height (ascent + descent), rounded up to whole pixels.
    pub height: u32,
}

impl TextExtent {
    /// Return `true` when this extent fits inside `max_width × max_height`.
    pub fn fits_within(self, max_width: u32, max_height: u32) -> bool {
        self.width <= max_width && self.height <= max_height
    }
}

/// A font that can measure and draw one line of text at an integral pixel size.
pub trait FontFace {
    /// Display family name.
    fn family(&self) -> &str;

    /// Measure the bounding box of `text` laid out at `size_px`.
    fn measure(&mut self, text: &str, size_px: u32) -> Result<TextExtent, FontUnavailableError>;

    /// Draw `text` at `size_px` with its bounding box's top-left at the context's current origin.
    fn draw(
        &mut self,
        ctx: &mut vello_cpu::RenderContext,
        text: &str,
        size_px: u32,
        color: Rgba8,
    ) -> Result<(), FontUnavailableError>;
}

impl<F: FontFace + ?Sized> FontFace for Box<F> {
    fn family(&self) -> &str {
        (**self).family()
    }

    fn measure(&mut self, text: &str, size_px: u32) -> Result<TextExtent, FontUnavailableError> {
        (**self).measure(text, size_px)
    }

    fn draw(
        &mut self,
        ctx: &mut vello_cpu::RenderContext,
        text: &str,
        size_px: u32,
        color: Rgba8,
    ) -> Result<(), FontUnavailableError> {
        (**self).draw(ctx, text, size_px, color)
    }
}
