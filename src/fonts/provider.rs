use std::path::{Path, PathBuf};

use crate::fonts::FontResource;
use crate::foundation::error::{ReelError, ReelResult};
use crate::text::face::ParleyFace;

/// Supplies the ordered list of usable fonts for a run.
///
/// Providers try to load every candidate once and drop the ones that cannot be parsed, so the core
/// only ever sees loadable files. An empty result is an error.
pub trait FontProvider {
    /// Resolve the usable fonts, preserving the provider's order.
    fn resolve(&self) -> ReelResult<Vec<FontResource>>;
}

/// Explicit `(family, path)` pairs, in the order given.
#[derive(Clone, Debug, Default)]
pub struct ListFontProvider {
    fonts: Vec<FontResource>,
}

impl ListFontProvider {
    pub fn new(fonts: Vec<FontResource>) -> Self {
        Self { fonts }
    }
}

impl FontProvider for ListFontProvider {
    fn resolve(&self) -> ReelResult<Vec<FontResource>> {
        let usable: Vec<FontResource> = self
            .fonts
            .iter()
            .filter(|f| match f.load() {
                Ok(_) => true,
                Err(e) => {
                    tracing::warn!(family = %f.family, path = %f.path.display(), error = %e, "skipping unusable font");
                    false
                }
            })
            .cloned()
            .collect();

        if usable.is_empty() {
            return Err(ReelError::no_usable_fonts(format!(
                "none of the {} configured fonts could be loaded",
                self.fonts.len()
            )));
        }
        Ok(usable)
    }
}

/// Every `.ttf`/`.otf`/`.ttc` file directly inside a directory, sorted by file name.
///
/// Family names come from each font's name table, falling back to the file stem.
#[derive(Clone, Debug)]
pub struct DirFontProvider {
    dir: PathBuf,
}

impl DirFontProvider {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

impl FontProvider for DirFontProvider {
    fn resolve(&self) -> ReelResult<Vec<FontResource>> {
        let rd = std::fs::read_dir(&self.dir).map_err(|e| {
            ReelError::no_usable_fonts(format!(
                "cannot read font directory '{}': {e}",
                self.dir.display()
            ))
        })?;

        let mut paths: Vec<PathBuf> = rd
            .flatten()
            .map(|entry| entry.path())
            .filter(|p| p.is_file() && is_font_file(p))
            .collect();
        paths.sort();

        let mut out = Vec::with_capacity(paths.len());
        for path in paths {
            let stem = path
                .file_stem()
                .and_then(|s| s.to_str())
                .unwrap_or("font")
                .to_string();
            match ParleyFace::open(&stem, &path) {
                Ok(face) => {
                    let family = if face.font_family().trim().is_empty() {
                        stem
                    } else {
                        face.font_family().to_string()
                    };
                    out.push(FontResource::new(family, path));
                }
                Err(e) => {
                    tracing::warn!(path = %path.display(), error = %e, "skipping unusable font");
                }
            }
        }

        if out.is_empty() {
            return Err(ReelError::no_usable_fonts(format!(
                "no loadable fonts in '{}'",
                self.dir.display()
            )));
        }
        tracing::debug!(count = out.len(), dir = %self.dir.display(), "resolved fonts");
        Ok(out)
    }
}

fn is_font_file(path: &Path) -> bool {
    let Some(ext) = path.extension().and_then(|s| s.to_str()) else {
        return false;
    };
    let ext = ext.to_ascii_lowercase();
    ext == "ttf" || ext == "otf" || ext == "ttc"
}

#[cfg(test)]
#[path = "../../tests/unit/fonts/provider.rs"]
mod tests;
