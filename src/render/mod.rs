//! Display list construction and CPU rasterization.

/// Premultiplied RGBA8 blending.
pub mod composite;
/// `vello_cpu` rasterizer.
pub mod cpu;
/// Display list.
pub mod scene;
/// Per-category styling table.
pub mod theme;
