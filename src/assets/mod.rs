/// Source image decoding.
pub mod decode;
