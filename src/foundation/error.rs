/// Result alias used across the crate.
pub type ReelResult<T> = Result<T, ReelError>;

/// A font that could not be loaded or rasterized.
///
/// Returned by [`crate::FontFace`] operations; the fitter and synthesizer recover from it locally
/// by degrading to the fallback face/size for that font only.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("font '{family}' is unavailable: {reason}")]
pub struct FontUnavailableError {
    /// Family name (or path, when the family could not be read).
    pub family: String,
    /// Why the font could not be used.
    pub reason: String,
}

impl FontUnavailableError {
    /// Create an error for `family` with a human-readable reason.
    pub fn new(family: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            family: family.into(),
            reason: reason.into(),
        }
    }
}

/// Crate error type.
#[derive(thiserror::Error, Debug)]
pub enum ReelError {
    #[error("validation error: {0}")]
    Validation(String),

    #[error(transparent)]
    FontUnavailable(#[from] FontUnavailableError),

    #[error("no usable fonts: {0}")]
    NoUsableFonts(String),

    #[error("render error: {0}")]
    Render(String),

    #[error("encoding error: {0}")]
    Encoding(String),

    #[error("serialization error: {0}")]
    Serde(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ReelError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn no_usable_fonts(msg: impl Into<String>) -> Self {
        Self::NoUsableFonts(msg.into())
    }

    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    pub fn encoding(msg: impl Into<String>) -> Self {
        Self::Encoding(msg.into())
    }

    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
