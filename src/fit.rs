//! Glyph fitting: the largest integral size at which a line of text fits a box.

use crate::text::FontFace;

/// Smallest size the fitter will try.
pub const MIN_SIZE_PX: u32 = 6;
/// Largest size the fitter will try.
pub const MAX_SIZE_PX: u32 = 400;
/// Size used when nothing in range fits or the font cannot be rasterized.
pub const FALLBACK_SIZE_PX: u32 = 10;

/// Closed search range plus the fallback size.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FitBounds {
    pub min_px: u32,
    pub max_px: u32,
    pub fallback_px: u32,
}

impl Default for FitBounds {
    fn default() -> Self {
        Self {
            min_px: MIN_SIZE_PX,
            max_px: MAX_SIZE_PX,
            fallback_px: FALLBACK_SIZE_PX,
        }
    }
}

/// How a [`FittedFont`] size was chosen.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FitOutcome {
    /// The largest in-range size whose extent fits the box.
    Fitted,
    /// No in-range size fits; the fallback size of the same face is used.
    NoFit,
    /// The face failed to rasterize; the fallback face at the fallback size is used.
    Unavailable,
}

/// A font family bound to a chosen pixel size.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct FittedFont {
    pub family: String,
    pub size_px: u32,
    pub outcome: FitOutcome,
}

impl FittedFont {
    /// `true` unless the size came out of a successful search.
    pub fn is_fallback(&self) -> bool {
        self.outcome != FitOutcome::Fitted
    }

    /// `true` when the fallback face must be drawn instead of the requested one.
    pub fn needs_fallback_face(&self) -> bool {
        self.outcome == FitOutcome::Unavailable
    }
}

/// Fit `text` into `max_width × max_height` using the default bounds.
pub fn fit<F: FontFace + ?Sized>(
    text: &str,
    face: &mut F,
    max_width: u32,
    max_height: u32,
) -> FittedFont {
    fit_with_bounds(text, face, max_width, max_height, FitBounds::default())
}

/// Binary search over `[bounds.min_px, bounds.max_px]` for the largest fitting size.
///
/// A measurement failure at any candidate size aborts the search and yields
/// [`FitOutcome::Unavailable`]; it is never surfaced as an error.
#[tracing::instrument(level = "debug", skip(face), fields(family = face.family()))]
pub fn fit_with_bounds<F: FontFace + ?Sized>(
    text: &str,
    face: &mut F,
    max_width: u32,
    max_height: u32,
    bounds: FitBounds,
) -> FittedFont {
    let family = face.family().to_string();
    let mut lo = i64::from(bounds.min_px);
    let mut hi = i64::from(bounds.max_px);
    let mut best: Option<u32> = None;

    while lo <= hi {
        let mid = (lo + hi) / 2;
        let size = mid as u32;
        let extent = match face.measure(text, size) {
            Ok(extent) => extent,
            Err(e) => {
                tracing::warn!(error = %e, size, "font failed to rasterize; using fallback");
                return FittedFont {
                    family,
                    size_px: bounds.fallback_px,
                    outcome: FitOutcome::Unavailable,
                };
            }
        };

        let fits = extent.fits_within(max_width, max_height);
        tracing::debug!(size, width = extent.width, height = extent.height, fits, "candidate size");
        if fits {
            best = Some(size);
            lo = mid + 1;
        } else {
            hi = mid - 1;
        }
    }

    match best {
        Some(size_px) => FittedFont {
            family,
            size_px,
            outcome: FitOutcome::Fitted,
        },
        None => {
            tracing::warn!(
                max_width,
                max_height,
                "text does not fit at any size; using fallback size"
            );
            FittedFont {
                family,
                size_px: bounds.fallback_px,
                outcome: FitOutcome::NoFit,
            }
        }
    }
}

#[cfg(test)]
#[path = "../tests/unit/fit.rs"]
mod tests;
