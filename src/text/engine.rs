use crate::foundation::core::Rgba8;
use crate::foundation::error::FontUnavailableError;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
/// RGBA8 brush color used by Parley text layout.
pub(crate) struct TextBrushRgba8 {
    pub(crate) r: u8,
    pub(crate) g: u8,
    pub(crate) b: u8,
    pub(crate) a: u8,
}

impl From<Rgba8> for TextBrushRgba8 {
    fn from(c: Rgba8) -> Self {
        Self {
            r: c.r,
            g: c.g,
            b: c.b,
            a: c.a,
        }
    }
}

/// Parley contexts bound to exactly one registered font.
///
/// The font bytes are registered once at construction; every layout built afterwards resolves
/// its font stack to that family only.
pub(crate) struct TextLayoutEngine {
    font_ctx: parley::FontContext,
    layout_ctx: parley::LayoutContext<TextBrushRgba8>,
    family_name: String,
}

impl TextLayoutEngine {
    /// Register `font_bytes` and remember the family of collection face `index`.
    ///
    /// `label` is only used to name the font in errors.
    pub(crate) fn new(
        label: &str,
        font_bytes: Vec<u8>,
        index: u32,
    ) -> Result<Self, FontUnavailableError> {
        let mut font_ctx = parley::FontContext::default();
        let families = font_ctx
            .collection
            .register_fonts(parley::fontique::Blob::from(font_bytes), None);
        if families.is_empty() {
            return Err(FontUnavailableError::new(
                label,
                "no font families registered from font bytes",
            ));
        }
        let family_id = families
            .iter()
            .find(|(_, faces)| faces.iter().any(|f| f.index() == index))
            .map(|(id, _)| *id)
            .ok_or_else(|| {
                FontUnavailableError::new(label, format!("font has no face at index {index}"))
            })?;

        let family_name = font_ctx
            .collection
            .family_name(family_id)
            .ok_or_else(|| FontUnavailableError::new(label, "registered font family has no name"))?
            .to_string();

        Ok(Self {
            font_ctx,
            layout_ctx: parley::LayoutContext::new(),
            family_name,
        })
    }

    /// Family name read from the font's name table.
    pub(crate) fn family_name(&self) -> &str {
        &self.family_name
    }

    /// Shape and lay out `text` on a single unbroken line.
    pub(crate) fn layout_line(
        &mut self,
        text: &str,
        size_px: f32,
        brush: TextBrushRgba8,
    ) -> Result<parley::Layout<TextBrushRgba8>, FontUnavailableError> {
        if !size_px.is_finite() || size_px <= 0.0 {
            return Err(FontUnavailableError::new(
                &self.family_name,
                format!("cannot rasterize at size {size_px}px"),
            ));
        }

        let mut builder = self
            .layout_ctx
            .ranged_builder(&mut self.font_ctx, text, 1.0, true);
        builder.push_default(parley::style::StyleProperty::FontStack(
            parley::style::FontStack::Source(std::borrow::Cow::Owned(self.family_name.clone())),
        ));
        builder.push_default(parley::style::StyleProperty::FontSize(size_px));
        builder.push_default(parley::style::StyleProperty::Brush(brush));

        let mut layout: parley::Layout<TextBrushRgba8> = builder.build(text);
        layout.break_all_lines(None);
        Ok(layout)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/text/engine.rs"]
mod tests;
