use std::path::Path;
use std::sync::Arc;

use crate::foundation::core::Rgba8;
use crate::foundation::error::FontUnavailableError;
use crate::text::engine::{TextBrushRgba8, TextLayoutEngine};
use crate::text::{FontFace, TextExtent};

/// A font file shaped with Parley and rasterized with `vello_cpu`.
pub struct ParleyFace {
    family: String,
    engine: TextLayoutEngine,
    last: Option<ShapedLine>,
}

struct ShapedLine {
    text: String,
    size_px: u32,
    layout: parley::Layout<TextBrushRgba8>,
}

impl std::fmt::Debug for ParleyFace {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ParleyFace")
            .field("family", &self.family)
            .field("font_family", &self.engine.family_name())
            .finish()
    }
}

impl ParleyFace {
    /// Build a face from raw TTF/OTF bytes; `family` is the display name.
    pub fn from_bytes(family: &str, bytes: Vec<u8>) -> Result<Self, FontUnavailableError> {
        Self::from_collection_bytes(family, bytes, 0)
    }

    /// Like [`ParleyFace::from_bytes`], drawing with face `index` of a font collection.
    pub fn from_collection_bytes(
        family: &str,
        bytes: Vec<u8>,
        index: u32,
    ) -> Result<Self, FontUnavailableError> {
        let engine = TextLayoutEngine::new(family, bytes, index)?;
        Ok(Self {
            family: family.to_string(),
            engine,
            last: None,
        })
    }

    /// Read and register the font file at `path`.
    pub fn open(family: &str, path: &Path) -> Result<Self, FontUnavailableError> {
        let bytes = std::fs::read(path).map_err(|e| {
            FontUnavailableError::new(family, format!("failed to read '{}': {e}", path.display()))
        })?;
        Self::from_bytes(family, bytes)
    }

    /// Family name declared inside the font file.
    pub fn font_family(&self) -> &str {
        self.engine.family_name()
    }

    fn shaped(
        &mut self,
        text: &str,
        size_px: u32,
    ) -> Result<&parley::Layout<TextBrushRgba8>, FontUnavailableError> {
        let hit = self
            .last
            .as_ref()
            .is_some_and(|s| s.size_px == size_px && s.text == text);
        if !hit {
            let layout =
                self.engine
                    .layout_line(text, size_px as f32, TextBrushRgba8::default())?;
            if layout.lines().next().is_none() {
                return Err(FontUnavailableError::new(
                    &self.family,
                    "layout produced no lines",
                ));
            }
            self.last = Some(ShapedLine {
                text: text.to_string(),
                size_px,
                layout,
            });
        }
        self.last
            .as_ref()
            .map(|s| &s.layout)
            .ok_or_else(|| FontUnavailableError::new(&self.family, "layout cache is empty"))
    }
}

impl FontFace for ParleyFace {
    fn family(&self) -> &str {
        &self.family
    }

    fn measure(&mut self, text: &str, size_px: u32) -> Result<TextExtent, FontUnavailableError> {
        let family = self.family.clone();
        let layout = self.shaped(text, size_px)?;
        let (w, h) = (layout.width(), layout.height());
        if !w.is_finite() || !h.is_finite() || w < 0.0 || h < 0.0 {
            return Err(FontUnavailableError::new(
                family,
                format!("non-finite metrics at {size_px}px"),
            ));
        }
        Ok(TextExtent {
            width: w.ceil() as u32,
            height: h.ceil() as u32,
        })
    }

    fn draw(
        &mut self,
        ctx: &mut vello_cpu::RenderContext,
        text: &str,
        size_px: u32,
        color: Rgba8,
    ) -> Result<(), FontUnavailableError> {
        let layout = self.shaped(text, size_px)?;
        ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(
            color.r, color.g, color.b, color.a,
        ));
        for line in layout.lines() {
            for item in line.items() {
                let parley::layout::PositionedLayoutItem::GlyphRun(run) = item else {
                    continue;
                };
                let glyphs = run.positioned_glyphs().map(|g| vello_cpu::Glyph {
                    id: g.id,
                    x: g.x,
                    y: g.y,
                });
                // Each run carries the face it was shaped with.
                ctx.glyph_run(run.run().font())
                    .font_size(run.run().font_size())
                    .fill_glyphs(glyphs);
            }
        }
        Ok(())
    }
}

/// The system's default sans-serif face, used when a requested font cannot be rasterized.
#[derive(Clone, Debug)]
pub struct FallbackFont {
    family: String,
    bytes: Arc<Vec<u8>>,
    index: u32,
}

impl FallbackFont {
    /// Look up a default face in the system font database.
    ///
    /// Prefers sans-serif, then serif, then monospace. Returns `None` on systems without fonts.
    pub fn system() -> Option<Self> {
        let mut db = usvg::fontdb::Database::new();
        db.load_system_fonts();
        Self::from_database(&db)
    }

    pub(crate) fn from_database(db: &usvg::fontdb::Database) -> Option<Self> {
        let generic = [
            usvg::fontdb::Family::SansSerif,
            usvg::fontdb::Family::Serif,
            usvg::fontdb::Family::Monospace,
        ];
        let id = generic
            .iter()
            .find_map(|f| {
                db.query(&usvg::fontdb::Query {
                    families: std::slice::from_ref(f),
                    ..Default::default()
                })
            })
            .or_else(|| db.faces().next().map(|f| f.id))?;

        let family = db
            .face(id)
            .and_then(|f| f.families.first().map(|(name, _)| name.clone()))
            .unwrap_or_else(|| "fallback".to_string());
        let (bytes, index) = db.with_face_data(id, |data, index| (data.to_vec(), index))?;
        Some(Self {
            family,
            bytes: Arc::new(bytes),
            index,
        })
    }

    /// Family name of the fallback face.
    pub fn family(&self) -> &str {
        &self.family
    }

    /// Build a fresh face; each caller gets its own layout contexts.
    pub fn face(&self) -> Result<ParleyFace, FontUnavailableError> {
        ParleyFace::from_collection_bytes(&self.family, self.bytes.as_ref().clone(), self.index)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/text/face.rs"]
mod tests;
