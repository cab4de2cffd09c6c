//! Pure layout stages: font sizing, line wrapping, placement.
//!
//! Nothing here touches pixels; text widths come from a [`crate::text::measure::TextMeasure`].

/// Headline-length based font size recommendation.
pub mod sizer;
/// Greedy word wrapping.
pub mod wrap;
/// Baseline and badge placement.
pub mod plan;
