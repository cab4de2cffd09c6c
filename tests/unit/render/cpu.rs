use super::*;
use crate::layout::plan::plan;
use crate::layout::wrap::HeadlineLines;
use crate::model::request::TextPosition;
use crate::render::theme::GradientStops;
use crate::text::measure::FontWeight;

fn scene(canvas: CanvasSize, ops: Vec<DrawOp>) -> Scene {
    Scene {
        canvas,
        plan: plan(
            canvas,
            TextPosition::default(),
            &HeadlineLines::default(),
            48,
            false,
        ),
        ops,
    }
}

fn solid(w: u32, h: u32, rgba: [u8; 4]) -> ImageSource {
    ImageSource::decoded(image::RgbaImage::from_pixel(w, h, image::Rgba(rgba)))
}

fn px(buf: &[u8], width: u32, x: u32, y: u32) -> [u8; 4] {
    let i = ((y * width + x) * 4) as usize;
    [buf[i], buf[i + 1], buf[i + 2], buf[i + 3]]
}

fn close(a: [u8; 4], b: [u8; 4]) -> bool {
    a.iter().zip(b.iter()).all(|(x, y)| x.abs_diff(*y) <= 1)
}

#[test]
fn background_only_matches_prepared_background() {
    let canvas = CanvasSize::new(8, 8);
    let source = solid(2, 2, [200, 10, 10, 255]);
    let mut r = CpuRasterizer::new(TextEngine::default());
    let out = r
        .rasterize(&scene(canvas, vec![DrawOp::Background]), &source)
        .unwrap();
    assert_eq!(out, prepare_background(&source, canvas).unwrap());
}

#[test]
fn fill_rect_covers_background_inside_only() {
    let canvas = CanvasSize::new(8, 8);
    let source = solid(8, 8, [255, 0, 0, 255]);
    let ops = vec![
        DrawOp::Background,
        DrawOp::FillRect {
            rect: Rect::new(0.0, 0.0, 4.0, 8.0),
            color: Rgba8::rgb(0, 0, 255),
        },
    ];
    let mut r = CpuRasterizer::new(TextEngine::default());
    let out = r.rasterize(&scene(canvas, ops), &source).unwrap();
    assert!(close(px(&out, 8, 1, 4), [0, 0, 255, 255]));
    assert!(close(px(&out, 8, 6, 4), [255, 0, 0, 255]));
}

#[test]
fn gradient_darkens_bottom_rows() {
    let canvas = CanvasSize::new(4, 4);
    let source = solid(4, 4, [255, 255, 255, 255]);
    let ops = vec![
        DrawOp::Background,
        DrawOp::Gradient {
            stops: GradientStops {
                top: Rgba8::rgba(0, 0, 0, 0),
                bottom: Rgba8::rgba(0, 0, 0, 255),
            },
        },
    ];
    let mut r = CpuRasterizer::new(TextEngine::default());
    let out = r.rasterize(&scene(canvas, ops), &source).unwrap();
    assert_eq!(px(&out, 4, 0, 0), [255, 255, 255, 255]);
    assert_eq!(px(&out, 4, 0, 3), [0, 0, 0, 255]);
}

#[test]
fn text_without_fonts_is_a_font_error() {
    let canvas = CanvasSize::new(8, 8);
    let ops = vec![
        DrawOp::Background,
        DrawOp::FillText {
            text: "Hi".to_string(),
            font: FontSpec::headline("Georgia", FontWeight::Bold, 24.0),
            origin: Point::new(4.0, 6.0),
            color: Rgba8::WHITE,
        },
    ];
    let mut r = CpuRasterizer::new(TextEngine::default());
    let err = r
        .rasterize(&scene(canvas, ops), &solid(1, 1, [0, 0, 0, 255]))
        .unwrap_err();
    assert!(matches!(err, ThumbError::Font(_)));
}

#[test]
fn blank_text_is_skipped() {
    let canvas = CanvasSize::new(4, 4);
    let source = solid(4, 4, [9, 9, 9, 255]);
    let ops = vec![
        DrawOp::Background,
        DrawOp::FillText {
            text: "  ".to_string(),
            font: FontSpec::badge(24.0),
            origin: Point::new(2.0, 2.0),
            color: Rgba8::WHITE,
        },
    ];
    let mut r = CpuRasterizer::new(TextEngine::default());
    let out = r.rasterize(&scene(canvas, ops), &source).unwrap();
    assert_eq!(px(&out, 4, 1, 1), [9, 9, 9, 255]);
}

#[test]
fn invalid_canvas_is_rejected() {
    let canvas = CanvasSize::new(0, 4);
    let mut r = CpuRasterizer::new(TextEngine::default());
    let err = r
        .rasterize(&scene(canvas, vec![]), &solid(1, 1, [0, 0, 0, 255]))
        .unwrap_err();
    assert!(matches!(err, ThumbError::InvalidConfiguration(_)));
}
