/// Parley shaping engine.
pub mod engine;
/// Font discovery and resolution.
pub mod fonts;
/// Text measurement capability.
pub mod measure;
