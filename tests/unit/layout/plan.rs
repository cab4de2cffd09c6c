use super::*;
use crate::layout::wrap::WrappedLine;

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

fn lines(texts: &[&str], wrapped: bool) -> HeadlineLines {
    HeadlineLines {
        lines: texts.iter().map(|t| WrappedLine::new(*t)).collect(),
        wrapped,
    }
}

#[test]
fn single_line_sits_on_anchor_baseline() {
    let p = plan(
        CanvasSize::THUMBNAIL,
        TextPosition::new(50.0, 20.0),
        &lines(&["BREAKING: Senate Passes Bill"], false),
        48,
        true,
    );
    assert!(approx(p.font_px, 48.0));
    assert_eq!(p.lines.len(), 1);
    assert!(approx(p.lines[0].baseline.x, 640.0));
    assert!(approx(p.lines[0].baseline.y, 144.0 + 48.0));
}

#[test]
fn wrapped_block_is_centered_on_anchor() {
    let p = plan(
        CanvasSize::THUMBNAIL,
        TextPosition::new(50.0, 20.0),
        &lines(&["first line", "second line"], true),
        24,
        false,
    );
    let lh = 24.0 * 1.2;
    assert!(approx(p.line_height, lh));
    // base 168, total 2*lh: first = 168 - lh + lh.
    assert!(approx(p.lines[0].baseline.y, 168.0));
    assert!(approx(p.lines[1].baseline.y, 168.0 + lh));

    let p3 = plan(
        CanvasSize::THUMBNAIL,
        TextPosition::new(50.0, 20.0),
        &lines(&["a", "b", "c"], true),
        24,
        false,
    );
    assert!(approx(p3.lines[0].baseline.y, 168.0 - 1.5 * lh + lh));
    // The middle line of an odd block sits half a line below the anchor baseline.
    assert!(approx(p3.lines[1].baseline.y, 168.0 + lh / 2.0));
    for pair in p3.lines.windows(2) {
        assert!(approx(pair[1].baseline.y - pair[0].baseline.y, lh));
    }
}

#[test]
fn wrapped_single_line_still_shifts() {
    let p = plan(
        CanvasSize::THUMBNAIL,
        TextPosition::new(50.0, 20.0),
        &lines(&["fits"], true),
        40,
        false,
    );
    assert!(approx(p.lines[0].baseline.y, 184.0 + 24.0));
}

#[test]
fn responsive_font_has_a_floor() {
    let half = CanvasSize {
        width: 640,
        height: 360,
    };
    assert!(approx(effective_font_px(80, half), 40.0));
    assert!(approx(effective_font_px(40, half), 24.0));
    assert!(approx(effective_font_px(20, CanvasSize::THUMBNAIL), 24.0));
    let double = CanvasSize {
        width: 2560,
        height: 1440,
    };
    assert!(approx(effective_font_px(48, double), 96.0));
}

#[test]
fn badge_is_pinned_top_right() {
    let p = plan(
        CanvasSize::THUMBNAIL,
        TextPosition::new(10.0, 80.0),
        &lines(&["x"], false),
        48,
        true,
    );
    assert_eq!(p.badge, Some(Rect::new(1050.0, 30.0, 1250.0, 90.0)));

    let p = plan(
        CanvasSize::THUMBNAIL,
        TextPosition::new(10.0, 80.0),
        &lines(&["x"], false),
        48,
        false,
    );
    assert_eq!(p.badge, None);
}

#[test]
fn horizontal_anchor_scales_with_width() {
    let p = plan(
        CanvasSize::THUMBNAIL,
        TextPosition::new(10.0, 10.0),
        &lines(&["x"], false),
        48,
        false,
    );
    assert!(approx(p.lines[0].baseline.x, 128.0));
    assert!(approx(p.lines[0].baseline.y, 72.0 + 48.0));
}
