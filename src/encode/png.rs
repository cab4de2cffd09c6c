use std::path::Path;

use image::ImageEncoder as _;

use crate::foundation::error::{ThumbError, ThumbResult};
use crate::render::composite::rgba_to_rgb;

/// Composited pixels of one thumbnail.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Frame {
    /// Frame width in pixels.
    pub width: u32,
    /// Frame height in pixels.
    pub height: u32,
    /// Opaque RGBA8 bytes, tightly packed, row-major.
    pub data: Vec<u8>,
}

impl Frame {
    pub fn new(width: u32, height: u32, data: Vec<u8>) -> ThumbResult<Self> {
        let expected = (width as usize) * (height as usize) * 4;
        if data.len() != expected {
            return Err(ThumbError::encode(format!(
                "frame byte len {} does not match {width}x{height}",
                data.len()
            )));
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// RGBA at `(x, y)`, or `None` outside the frame.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = ((y as usize) * (self.width as usize) + (x as usize)) * 4;
        Some([
            self.data[i],
            self.data[i + 1],
            self.data[i + 2],
            self.data[i + 3],
        ])
    }

    /// Drop alpha, producing an `image::RgbImage`.
    pub fn to_rgb_image(&self) -> ThumbResult<image::RgbImage> {
        image::RgbImage::from_raw(self.width, self.height, rgba_to_rgb(&self.data))
            .ok_or_else(|| ThumbError::encode("frame buffer does not match its dimensions"))
    }
}

/// Encoded thumbnail.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderedImage {
    pub width: u32,
    pub height: u32,
    /// PNG bytes (8-bit RGB, no alpha).
    pub png: Vec<u8>,
}

impl RenderedImage {
    /// Write the PNG to `path`, creating parent directories.
    pub fn save(&self, path: &Path) -> ThumbResult<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| {
                ThumbError::encode(format!("create output dir '{}': {e}", parent.display()))
            })?;
        }
        std::fs::write(path, &self.png)
            .map_err(|e| ThumbError::encode(format!("write png '{}': {e}", path.display())))
    }
}

/// Encode `frame` as an RGB8 PNG.
pub fn encode_png(frame: &Frame) -> ThumbResult<RenderedImage> {
    let rgb = frame.to_rgb_image()?;
    let mut png = Vec::new();
    image::codecs::png::PngEncoder::new(&mut png)
        .write_image(
            rgb.as_raw(),
            frame.width,
            frame.height,
            image::ExtendedColorType::Rgb8,
        )
        .map_err(|e| ThumbError::encode(format!("png encode: {e}")))?;
    Ok(RenderedImage {
        width: frame.width,
        height: frame.height,
        png,
    })
}

#[cfg(test)]
#[path = "../../tests/unit/encode/png.rs"]
mod tests;
