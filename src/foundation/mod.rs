/// Geometry, canvas size and colors.
pub mod core;
/// Crate error type.
pub mod error;
