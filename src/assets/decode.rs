use image::imageops::FilterType;

use crate::foundation::core::CanvasSize;
use crate::foundation::error::{ThumbError, ThumbResult};
use crate::model::request::ImageSource;

/// Decode encoded image bytes (any format the `image` crate recognizes) to straight RGBA8.
pub fn decode_image(bytes: &[u8]) -> ThumbResult<image::RgbaImage> {
    let dyn_img = image::load_from_memory(bytes)
        .map_err(|e| ThumbError::decode(format!("decode source image: {e}")))?;
    let rgba = dyn_img.to_rgba8();
    if rgba.width() == 0 || rgba.height() == 0 {
        return Err(ThumbError::decode("source image has zero size"));
    }
    Ok(rgba)
}

/// Decode (if needed) and stretch the source over the full canvas.
///
/// Aspect ratio is not preserved. Transparent source pixels are flattened over opaque
/// black, so the result is premultiplied RGBA8 with every alpha at 255.
pub fn prepare_background(source: &ImageSource, canvas: CanvasSize) -> ThumbResult<Vec<u8>> {
    let decoded;
    let img: &image::RgbaImage = match source {
        ImageSource::Encoded(bytes) => {
            decoded = decode_image(bytes.as_slice())?;
            &decoded
        }
        ImageSource::Decoded(img) => {
            if img.width() == 0 || img.height() == 0 {
                return Err(ThumbError::decode("source image has zero size"));
            }
            img.as_ref()
        }
    };

    let stretched = if img.dimensions() == (canvas.width, canvas.height) {
        img.clone()
    } else {
        image::imageops::resize(img, canvas.width, canvas.height, FilterType::Triangle)
    };

    let mut bytes = stretched.into_raw();
    flatten_over_black_in_place(&mut bytes);
    Ok(bytes)
}

fn flatten_over_black_in_place(rgba: &mut [u8]) {
    for px in rgba.chunks_exact_mut(4) {
        let a = px[3] as u16;
        if a == 255 {
            continue;
        }
        px[0] = ((px[0] as u16 * a + 127) / 255) as u8;
        px[1] = ((px[1] as u16 * a + 127) / 255) as u8;
        px[2] = ((px[2] as u16 * a + 127) / 255) as u8;
        px[3] = 255;
    }
}

#[cfg(test)]
#[path = "../../tests/unit/assets/decode.rs"]
mod tests;
