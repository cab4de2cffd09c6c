/// PNG output.
pub mod png;
