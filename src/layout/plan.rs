//! Absolute placement of the badge and headline lines.

use crate::foundation::core::{CanvasSize, Point, Rect};
use crate::layout::wrap::HeadlineLines;
use crate::model::request::TextPosition;

/// Badge width in px.
pub const BADGE_WIDTH: f64 = 200.0;
/// Badge height in px.
pub const BADGE_HEIGHT: f64 = 60.0;
/// Distance from the badge to the top and right canvas edges.
pub const BADGE_MARGIN: f64 = 30.0;
/// Line advance as a multiple of the font size.
pub const LINE_HEIGHT_FACTOR: f64 = 1.2;
/// Floor for the canvas-scaled font size.
pub const MIN_EFFECTIVE_FONT_PX: f64 = 24.0;

/// One headline line with its baseline. `baseline.x` is the horizontal center of the line.
#[derive(Clone, Debug, PartialEq)]
pub struct PlacedLine {
    /// Text to draw.
    pub text: String,
    /// Center-aligned baseline origin.
    pub baseline: Point,
}

/// Positions computed for one render pass.
#[derive(Clone, Debug, PartialEq)]
pub struct LayoutPlan {
    /// Canvas the plan was computed for.
    pub canvas: CanvasSize,
    /// Canvas-scaled font size.
    pub font_px: f64,
    /// Distance between consecutive baselines.
    pub line_height: f64,
    /// Headline lines, top to bottom.
    pub lines: Vec<PlacedLine>,
    /// Copied from [`HeadlineLines::wrapped`].
    pub wrapped: bool,
    /// Badge rectangle, when a badge is drawn.
    pub badge: Option<Rect>,
}

/// `max(font_size_px * canvas_width / 1280, 24)`.
pub fn effective_font_px(font_size_px: u32, canvas: CanvasSize) -> f64 {
    (f64::from(font_size_px) * canvas.scale()).max(MIN_EFFECTIVE_FONT_PX)
}

/// Fixed 200x60 rectangle, 30px in from the top-right corner.
pub fn badge_rect(canvas: CanvasSize) -> Rect {
    let x0 = f64::from(canvas.width) - BADGE_WIDTH - BADGE_MARGIN;
    let y0 = BADGE_MARGIN;
    Rect::new(x0, y0, x0 + BADGE_WIDTH, y0 + BADGE_HEIGHT)
}

/// Compute baselines for `headline` anchored at `position` and the optional badge box.
///
/// The anchor baseline sits one font size below `position.y%`. Wrapped blocks are shifted
/// so the block is centered on that baseline; an unwrapped line sits on it directly.
pub fn plan(
    canvas: CanvasSize,
    position: TextPosition,
    headline: &HeadlineLines,
    font_size_px: u32,
    badge: bool,
) -> LayoutPlan {
    let font_px = effective_font_px(font_size_px, canvas);
    let line_height = font_px * LINE_HEIGHT_FACTOR;

    let x = position.x / 100.0 * f64::from(canvas.width);
    let base_y = position.y / 100.0 * f64::from(canvas.height) + font_px;

    let first_y = if headline.wrapped {
        let total_height = headline.len() as f64 * line_height;
        base_y - total_height / 2.0 + line_height
    } else {
        base_y
    };

    let lines = headline
        .lines
        .iter()
        .enumerate()
        .map(|(i, line)| PlacedLine {
            text: line.text.clone(),
            baseline: Point::new(x, first_y + i as f64 * line_height),
        })
        .collect();

    LayoutPlan {
        canvas,
        font_px,
        line_height,
        lines,
        wrapped: headline.wrapped,
        badge: badge.then(|| badge_rect(canvas)),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layout/plan.rs"]
mod tests;
