//! Run configuration.
//!
//! `ReelConfig` is immutable once validated and is the single input to the pipeline entry points.
//! It deserializes from JSON; every field is optional and defaults to the classic reel settings.

use std::path::{Path, PathBuf};

use anyhow::Context as _;

use crate::fonts::FontResource;
use crate::foundation::core::{Canvas, Fps, Rgba8};
use crate::foundation::error::{ReelError, ReelResult};

/// Default display text.
pub const DEFAULT_TEXT: &str = "YOUR TEXT HERE";

/// Upper bound on the frames one font may hold.
pub const MAX_FRAMES_PER_FONT: u64 = u32::MAX as u64;

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ReelConfig {
    /// The line of text shown in every frame.
    pub text: String,
    #[serde(alias = "canvas_width")]
    pub width: u32,
    #[serde(alias = "canvas_height")]
    pub height: u32,
    /// Integral frames per second.
    #[serde(alias = "frame_rate")]
    pub fps: u32,
    /// How long each font stays on screen.
    pub seconds_per_font: f64,
    #[serde(alias = "output_path")]
    pub output: PathBuf,
    pub background: Rgba8,
    pub foreground: Rgba8,
    /// Fonts in display order.
    pub fonts: Vec<FontResource>,
    /// Directory scanned for additional fonts, shown after `fonts`.
    pub fonts_dir: Option<PathBuf>,
}

impl Default for ReelConfig {
    fn default() -> Self {
        Self {
            text: DEFAULT_TEXT.to_string(),
            width: 1080,
            height: 1920,
            fps: 30,
            seconds_per_font: 2.0,
            output: PathBuf::from("font_reel_1080x1920.mp4"),
            background: Rgba8::BLACK,
            foreground: Rgba8::WHITE,
            fonts: Vec::new(),
            fonts_dir: None,
        }
    }
}

impl ReelConfig {
    /// Parse JSON from `reader`. Relative font paths are left as written.
    pub fn from_reader(reader: impl std::io::Read) -> ReelResult<Self> {
        serde_json::from_reader(reader)
            .map_err(|e| ReelError::serde(format!("config JSON parse error: {e}")))
    }

    /// Read a JSON config file.
    ///
    /// Relative font paths and `fonts_dir` are resolved against the file's directory.
    pub fn from_path(path: &Path) -> ReelResult<Self> {
        let f = std::fs::File::open(path)
            .with_context(|| format!("open config '{}'", path.display()))?;
        let mut cfg = Self::from_reader(std::io::BufReader::new(f))?;
        let root = path.parent().unwrap_or(Path::new(""));
        cfg.fonts = cfg
            .fonts
            .iter()
            .map(|font| font.resolved_against(root))
            .collect();
        if let Some(dir) = cfg.fonts_dir.take() {
            cfg.fonts_dir = Some(if dir.is_absolute() { dir } else { root.join(dir) });
        }
        Ok(cfg)
    }

    pub fn validate(&self) -> ReelResult<()> {
        if self.text.trim().is_empty() {
            return Err(ReelError::validation("text must not be empty"));
        }
        if self.width == 0 || self.height == 0 {
            return Err(ReelError::validation("width/height must be non-zero"));
        }
        if !self.width.is_multiple_of(2) || !self.height.is_multiple_of(2) {
            return Err(ReelError::validation(format!(
                "width/height must be even for yuv420p output, got {}x{}",
                self.width, self.height
            )));
        }
        self.canvas().validate()?;
        if self.fps == 0 {
            return Err(ReelError::validation("fps must be > 0"));
        }
        if !self.seconds_per_font.is_finite() || self.seconds_per_font <= 0.0 {
            return Err(ReelError::validation(format!(
                "seconds_per_font must be a positive number, got {}",
                self.seconds_per_font
            )));
        }
        let frames_per_font = self.seconds_per_font * f64::from(self.fps);
        if frames_per_font >= MAX_FRAMES_PER_FONT as f64 {
            return Err(ReelError::validation(format!(
                "seconds_per_font * fps must be below {MAX_FRAMES_PER_FONT}, got {frames_per_font}"
            )));
        }
        if self.output.as_os_str().is_empty() {
            return Err(ReelError::validation("output path must not be empty"));
        }
        Ok(())
    }

    pub fn canvas(&self) -> Canvas {
        Canvas {
            width: self.width,
            height: self.height,
            background: self.background,
            foreground: self.foreground,
        }
    }

    pub fn fps(&self) -> ReelResult<Fps> {
        Fps::from_int(self.fps)
    }
}

#[cfg(test)]
#[path = "../tests/unit/config.rs"]
mod tests;
