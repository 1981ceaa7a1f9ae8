//! CPU frame synthesis.

/// Raw RGBA frames.
pub mod frame;
/// Background fill plus centered text.
pub mod synth;
