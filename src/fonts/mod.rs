//! Font resources and the providers that resolve them.

/// Directory and list providers.
pub mod provider;

use std::path::{Path, PathBuf};

use crate::foundation::error::FontUnavailableError;
use crate::text::face::ParleyFace;

/// A family name paired with the font file that implements it.
#[derive(Clone, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FontResource {
    /// Display family name.
    pub family: String,
    /// Path to a `.ttf`/`.otf`/`.ttc` file.
    pub path: PathBuf,
}

impl FontResource {
    /// Create a resource from a family name and file path.
    pub fn new(family: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            family: family.into(),
            path: path.into(),
        }
    }

    /// Parse a `FAMILY=PATH` pair, as accepted on the command line.
    pub fn parse_pair(s: &str) -> Result<Self, String> {
        let (family, path) = s
            .split_once('=')
            .ok_or_else(|| format!("expected FAMILY=PATH, got '{s}'"))?;
        let family = family.trim();
        let path = path.trim();
        if family.is_empty() || path.is_empty() {
            return Err(format!("expected FAMILY=PATH, got '{s}'"));
        }
        Ok(Self::new(family, path))
    }

    /// Resolve a relative path against `root`; absolute paths are kept.
    pub fn resolved_against(&self, root: &Path) -> Self {
        if self.path.is_absolute() {
            return self.clone();
        }
        Self {
            family: self.family.clone(),
            path: root.join(&self.path),
        }
    }

    /// Load the file into a rasterizable face.
    pub fn load(&self) -> Result<ParleyFace, FontUnavailableError> {
        ParleyFace::open(&self.family, &self.path)
    }
}

/// Resolves faces for font resources, plus the face used when one cannot be rasterized.
///
/// Implementations are shared across worker threads when per-font synthesis runs in parallel, so
/// faces are created per call rather than handed out by reference.
pub trait FaceSource: Sync {
    /// Face type produced by this source.
    type Face: crate::text::FontFace;

    /// Load the face for `font`.
    fn load(&self, font: &FontResource) -> Result<Self::Face, FontUnavailableError>;

    /// Load the designated fallback face, if one exists.
    fn fallback(&self) -> Option<Self::Face>;
}

/// Loads font files from disk and falls back to a system face.
#[derive(Clone, Debug, Default)]
pub struct FileFaceSource {
    fallback: Option<crate::text::face::FallbackFont>,
}

impl FileFaceSource {
    /// Use the system's default face as the fallback.
    pub fn with_system_fallback() -> Self {
        let fallback = crate::text::face::FallbackFont::system();
        if fallback.is_none() {
            tracing::warn!("no system fallback font found; unusable fonts render without text");
        }
        Self { fallback }
    }

    /// Use an explicit fallback font (or none).
    pub fn with_fallback(fallback: Option<crate::text::face::FallbackFont>) -> Self {
        Self { fallback }
    }
}

impl FaceSource for FileFaceSource {
    type Face = ParleyFace;

    fn load(&self, font: &FontResource) -> Result<ParleyFace, FontUnavailableError> {
        font.load()
    }

    fn fallback(&self) -> Option<ParleyFace> {
        let fb = self.fallback.as_ref()?;
        match fb.face() {
            Ok(face) => Some(face),
            Err(e) => {
                tracing::warn!(error = %e, "fallback font could not be loaded");
                None
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/fonts/resource.rs"]
mod tests;
