use crate::assets::decode::prepare_background;
use crate::foundation::core::{CanvasSize, Point, Rect, Rgba8};
use crate::foundation::error::{ThumbError, ThumbResult};
use crate::model::request::ImageSource;
use crate::render::composite::{gradient_over_in_place, premul_over_in_place};
use crate::render::scene::{DrawOp, Scene};
use crate::text::engine::TextEngine;
use crate::text::measure::FontSpec;

/// Synthetic bold stroke width as a fraction of the font size.
pub const SYNTHETIC_BOLD_STROKE: f32 = 1.0 / 32.0;

/// Executes a [`Scene`] on the CPU with `vello_cpu`.
///
/// Image-level steps (background, gradient) blend straight into the frame buffer. Vector steps
/// are batched into a transparent layer that is composited over the buffer before the next
/// image-level step and at the end.
pub struct CpuRasterizer {
    text: TextEngine,
    ctx: Option<vello_cpu::RenderContext>,
}

impl CpuRasterizer {
    pub fn new(text: TextEngine) -> Self {
        Self { text, ctx: None }
    }

    pub fn text(&self) -> &TextEngine {
        &self.text
    }

    /// Text engine used for shaping; also the measurer scenes should be built with.
    pub fn text_mut(&mut self) -> &mut TextEngine {
        &mut self.text
    }

    /// Render `scene` over `source`, returning premultiplied RGBA8 (fully opaque).
    pub fn rasterize(&mut self, scene: &Scene, source: &ImageSource) -> ThumbResult<Vec<u8>> {
        let canvas = scene.canvas;
        canvas.validate()?;
        let (w16, h16) = dims_u16(canvas)?;

        let mut buf = vec![0u8; (canvas.width as usize) * (canvas.height as usize) * 4];
        let mut ctx = match self.ctx.take() {
            Some(ctx) if ctx.width() == w16 && ctx.height() == h16 => ctx,
            _ => vello_cpu::RenderContext::new(w16, h16),
        };
        ctx.reset();

        let mut pending = false;
        for op in &scene.ops {
            match op {
                DrawOp::Background => {
                    flush_layer(&mut ctx, &mut pending, &mut buf, w16, h16)?;
                    let bg = prepare_background(source, canvas)?;
                    premul_over_in_place(&mut buf, &bg)?;
                }
                DrawOp::Gradient { stops } => {
                    flush_layer(&mut ctx, &mut pending, &mut buf, w16, h16)?;
                    gradient_over_in_place(&mut buf, canvas.width, canvas.height, *stops)?;
                }
                DrawOp::FillRect { rect, color } => {
                    ctx.set_paint(color_to_cpu(*color));
                    ctx.fill_rect(&rect_to_cpu(*rect));
                    pending = true;
                }
                DrawOp::StrokeText {
                    text,
                    font,
                    origin,
                    color,
                    width,
                } => {
                    pending |= self.draw_text(&mut ctx, text, font, *origin, *color, Some(*width))?;
                }
                DrawOp::FillText {
                    text,
                    font,
                    origin,
                    color,
                } => {
                    pending |= self.draw_text(&mut ctx, text, font, *origin, *color, None)?;
                }
            }
        }
        flush_layer(&mut ctx, &mut pending, &mut buf, w16, h16)?;
        self.ctx = Some(ctx);
        Ok(buf)
    }

    fn draw_text(
        &mut self,
        ctx: &mut vello_cpu::RenderContext,
        text: &str,
        font: &FontSpec,
        origin: Point,
        color: Rgba8,
        stroke_width: Option<f64>,
    ) -> ThumbResult<bool> {
        if text.trim().is_empty() {
            return Ok(false);
        }
        let line = self.text.shape(text, font)?;
        ctx.set_paint(color_to_cpu(color));
        match stroke_width {
            Some(width) => {
                ctx.set_stroke(vello_cpu::kurbo::Stroke::new(width));
                ctx.glyph_run(&line.font)
                    .font_size(line.font_size)
                    .stroke_glyphs(line.centered_at(origin));
            }
            None => {
                ctx.glyph_run(&line.font)
                    .font_size(line.font_size)
                    .fill_glyphs(line.centered_at(origin));
                if line.embolden {
                    let width = f64::from(line.font_size * SYNTHETIC_BOLD_STROKE);
                    ctx.set_stroke(vello_cpu::kurbo::Stroke::new(width));
                    ctx.glyph_run(&line.font)
                        .font_size(line.font_size)
                        .stroke_glyphs(line.centered_at(origin));
                }
            }
        }
        Ok(true)
    }
}

fn flush_layer(
    ctx: &mut vello_cpu::RenderContext,
    pending: &mut bool,
    buf: &mut [u8],
    width: u16,
    height: u16,
) -> ThumbResult<()> {
    if !*pending {
        return Ok(());
    }
    ctx.flush();
    let mut layer = vello_cpu::Pixmap::new(width, height);
    ctx.render_to_pixmap(&mut layer);
    premul_over_in_place(buf, layer.data_as_u8_slice())?;
    ctx.reset();
    *pending = false;
    Ok(())
}

fn dims_u16(canvas: CanvasSize) -> ThumbResult<(u16, u16)> {
    let w = u16::try_from(canvas.width)
        .map_err(|_| ThumbError::render("canvas width exceeds u16"))?;
    let h = u16::try_from(canvas.height)
        .map_err(|_| ThumbError::render("canvas height exceeds u16"))?;
    Ok((w, h))
}

fn color_to_cpu(c: Rgba8) -> vello_cpu::peniko::Color {
    vello_cpu::peniko::Color::from_rgba8(c.r, c.g, c.b, c.a)
}

fn rect_to_cpu(r: Rect) -> vello_cpu::kurbo::Rect {
    vello_cpu::kurbo::Rect::new(r.x0, r.y0, r.x1, r.y1)
}

#[cfg(test)]
#[path = "../../tests/unit/render/cpu.rs"]
mod tests;
