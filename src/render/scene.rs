//! Display list construction: request + text metrics -> ordered draw operations.

use crate::foundation::core::{CanvasSize, Point, Rect, Rgba8};
use crate::foundation::error::ThumbResult;
use crate::layout::plan::{LayoutPlan, effective_font_px, plan};
use crate::layout::wrap::{MAX_LINE_WIDTH_FRACTION, wrap_headline};
use crate::model::request::{RenderRequest, StyleConfig, TextStyle};
use crate::render::theme::{ACCENT_OUTLINE_WIDTH, CategoryTheme, GradientStops, theme};
use crate::text::measure::{FontSpec, TextMeasure};

/// Badge label size in px.
pub const BADGE_FONT_PX: f32 = 24.0;
/// Height of the accent strips at the badge's top and bottom edges.
pub const BADGE_STRIP_HEIGHT: f64 = 8.0;
/// Badge label baseline offset below the badge's vertical center.
pub const BADGE_BASELINE_OFFSET: f64 = 8.0;
/// Text box padding for wrapped headlines.
pub const BOX_PADDING_WRAPPED: f64 = 20.0;
/// Text box padding for a single unwrapped line.
pub const BOX_PADDING_SINGLE: f64 = 25.0;
/// Alpha multiplier for text boxes (`0xDD`, about 87%).
pub const BOX_ALPHA: u8 = 0xDD;

/// One drawing step. Text origins are center-aligned baselines.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawOp {
    /// Source image stretched over the whole canvas.
    Background,
    /// Full-canvas top-to-bottom gradient.
    Gradient {
        /// Gradient stops.
        stops: GradientStops,
    },
    /// Solid rectangle.
    FillRect {
        /// Area to fill.
        rect: Rect,
        /// Fill color.
        color: Rgba8,
    },
    /// Glyph outlines.
    StrokeText {
        /// Text to stroke.
        text: String,
        /// Font selection.
        font: FontSpec,
        /// Center-aligned baseline origin.
        origin: Point,
        /// Stroke color.
        color: Rgba8,
        /// Stroke width in px.
        width: f64,
    },
    /// Filled glyphs.
    FillText {
        /// Text to fill.
        text: String,
        /// Font selection.
        font: FontSpec,
        /// Center-aligned baseline origin.
        origin: Point,
        /// Fill color.
        color: Rgba8,
    },
}

/// Ordered draw operations for one render, plus the layout they were derived from.
#[derive(Clone, Debug, PartialEq)]
pub struct Scene {
    /// Output canvas.
    pub canvas: CanvasSize,
    /// Layout the text operations were placed from.
    pub plan: LayoutPlan,
    /// Draw operations, back to front.
    pub ops: Vec<DrawOp>,
}

impl Scene {
    /// Iterate text operations (stroke and fill) in draw order.
    pub fn text_ops(&self) -> impl Iterator<Item = &DrawOp> {
        self.ops
            .iter()
            .filter(|op| matches!(op, DrawOp::StrokeText { .. } | DrawOp::FillText { .. }))
    }
}

/// Build the display list for `request`, measuring text with `measure`.
///
/// The style is clamped and the headline truncated before sizing, so every size-producing
/// path sees the same normalized values.
pub fn build_scene<M: TextMeasure + ?Sized>(
    request: &RenderRequest,
    measure: &mut M,
) -> ThumbResult<Scene> {
    request.canvas.validate()?;
    let style = request.style.normalized();
    let headline = request.clamped_headline();
    let theme = theme(request.category);
    let canvas = request.canvas;

    let font = FontSpec::headline(
        style.font_family.clone(),
        theme.weight,
        effective_font_px(style.font_size, canvas) as f32,
    );
    let max_width = (f64::from(canvas.width) * MAX_LINE_WIDTH_FRACTION) as f32;
    let lines = wrap_headline(headline, style.text_wrapping, &font, max_width, measure);
    let layout = plan(
        canvas,
        style.text_position,
        &lines,
        style.font_size,
        style.badge.is_visible(),
    );
    tracing::debug!(
        font_px = layout.font_px,
        lines = layout.lines.len(),
        wrapped = layout.wrapped,
        "planned headline layout"
    );

    let mut ops = vec![
        DrawOp::Background,
        DrawOp::Gradient {
            stops: theme.gradient,
        },
    ];
    if let Some(rect) = layout.badge {
        push_badge(&mut ops, rect, &style);
    }
    push_text_block(&mut ops, &layout, &font, &style, &theme, measure);

    Ok(Scene {
        canvas,
        plan: layout,
        ops,
    })
}

fn push_badge(ops: &mut Vec<DrawOp>, rect: Rect, style: &StyleConfig) {
    ops.push(DrawOp::FillRect {
        rect,
        color: style.background_color,
    });
    ops.push(DrawOp::FillRect {
        rect: Rect::new(rect.x0, rect.y0, rect.x1, rect.y0 + BADGE_STRIP_HEIGHT),
        color: style.accent_color,
    });
    ops.push(DrawOp::FillRect {
        rect: Rect::new(rect.x0, rect.y1 - BADGE_STRIP_HEIGHT, rect.x1, rect.y1),
        color: style.accent_color,
    });
    let center = rect.center();
    ops.push(DrawOp::FillText {
        text: style.badge.text.clone(),
        font: FontSpec::badge(BADGE_FONT_PX),
        origin: Point::new(center.x, center.y + BADGE_BASELINE_OFFSET),
        color: style.text_color,
    });
}

fn push_text_block<M: TextMeasure + ?Sized>(
    ops: &mut Vec<DrawOp>,
    layout: &LayoutPlan,
    font: &FontSpec,
    style: &StyleConfig,
    theme: &CategoryTheme,
    measure: &mut M,
) {
    let padding = if layout.wrapped {
        BOX_PADDING_WRAPPED
    } else {
        BOX_PADDING_SINGLE
    };

    for line in &layout.lines {
        let origin = line.baseline;
        match style.text_style {
            TextStyle::BackgroundBox => {
                let width = f64::from(measure.measure(&line.text, font));
                let x0 = origin.x - width / 2.0 - padding;
                let y0 = origin.y - layout.font_px - padding / 2.0;
                ops.push(DrawOp::FillRect {
                    rect: Rect::new(
                        x0,
                        y0,
                        x0 + width + padding * 2.0,
                        y0 + layout.font_px + padding,
                    ),
                    color: style.background_color.scale_alpha(BOX_ALPHA),
                });
            }
            TextStyle::Outlined => {
                if style.shadow_intensity > 0 {
                    ops.push(DrawOp::StrokeText {
                        text: line.text.clone(),
                        font: font.clone(),
                        origin,
                        color: Rgba8::BLACK,
                        width: f64::from(style.shadow_intensity),
                    });
                }
                if theme.accent_outline {
                    ops.push(DrawOp::StrokeText {
                        text: line.text.clone(),
                        font: font.clone(),
                        origin,
                        color: style.accent_color,
                        width: ACCENT_OUTLINE_WIDTH,
                    });
                }
            }
        }
        ops.push(DrawOp::FillText {
            text: line.text.clone(),
            font: font.clone(),
            origin,
            color: style.text_color,
        });
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/scene.rs"]
mod tests;
