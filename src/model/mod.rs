//! Caller-facing request model.

/// Content categories and their presets.
pub mod category;
/// Render requests and style options.
pub mod request;
