//! Premultiplied RGBA8 blending helpers used by the CPU rasterizer.

use crate::foundation::error::{ThumbError, ThumbResult};
use crate::render::theme::GradientStops;

/// `src` over `dst`, both premultiplied RGBA8 of identical length.
pub fn premul_over_in_place(dst: &mut [u8], src: &[u8]) -> ThumbResult<()> {
    if dst.len() != src.len() || !dst.len().is_multiple_of(4) {
        return Err(ThumbError::render(
            "premul_over_in_place expects equal-length rgba8 buffers",
        ));
    }
    for (d, s) in dst.chunks_exact_mut(4).zip(src.chunks_exact(4)) {
        let out = premul_over_px([d[0], d[1], d[2], d[3]], [s[0], s[1], s[2], s[3]]);
        d.copy_from_slice(&out);
    }
    Ok(())
}

/// Blend a vertical gradient (top row = `stops.top`, bottom row = `stops.bottom`) over `dst`.
///
/// Stops are interpolated in premultiplied space.
pub fn gradient_over_in_place(
    dst: &mut [u8],
    width: u32,
    height: u32,
    stops: GradientStops,
) -> ThumbResult<()> {
    let row_bytes = (width as usize).saturating_mul(4);
    if dst.len() != row_bytes.saturating_mul(height as usize) {
        return Err(ThumbError::render("gradient target byte len mismatch"));
    }
    if row_bytes == 0 {
        return Ok(());
    }

    let top = stops.top.to_premul();
    let bottom = stops.bottom.to_premul();
    let h1 = (height.max(1) - 1) as f32;
    for (y, row) in dst.chunks_exact_mut(row_bytes).enumerate() {
        let t = if h1 <= 0.0 { 0.0 } else { (y as f32) / h1 };
        let lerp = |a: u8, b: u8| -> u8 {
            let af = a as f32;
            let bf = b as f32;
            (af + (bf - af) * t).round().clamp(0.0, 255.0) as u8
        };
        let mut c = [0u8; 4];
        for i in 0..4 {
            c[i] = lerp(top[i], bottom[i]);
        }
        // Channels can never exceed alpha in premultiplied form.
        for i in 0..3 {
            c[i] = c[i].min(c[3]);
        }
        for d in row.chunks_exact_mut(4) {
            let out = premul_over_px([d[0], d[1], d[2], d[3]], c);
            d.copy_from_slice(&out);
        }
    }
    Ok(())
}

/// Drop the alpha channel of an opaque premultiplied RGBA8 buffer.
pub fn rgba_to_rgb(rgba: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(rgba.len() / 4 * 3);
    for px in rgba.chunks_exact(4) {
        out.extend_from_slice(&px[..3]);
    }
    out
}

fn premul_over_px(dst: [u8; 4], src: [u8; 4]) -> [u8; 4] {
    let sa = src[3] as u16;
    if sa == 0 {
        return dst;
    }
    let inv = 255u16 - sa;
    let mut out = [0u8; 4];
    out[3] = add_sat_u8(src[3], mul_div255_u8(u16::from(dst[3]), inv));
    for c in 0..3 {
        let dc = mul_div255_u8(u16::from(dst[c]), inv);
        out[c] = add_sat_u8(src[c], dc);
    }
    out
}

fn mul_div255_u8(x: u16, y: u16) -> u8 {
    (((u32::from(x) * u32::from(y)) + 127) / 255) as u8
}

fn add_sat_u8(a: u8, b: u8) -> u8 {
    a.saturating_add(b)
}

#[cfg(test)]
#[path = "../../tests/unit/render/composite.rs"]
mod tests;
