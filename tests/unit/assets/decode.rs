use std::io::Cursor;

use super::*;

fn png_bytes(img: image::RgbaImage) -> Vec<u8> {
    let mut buf = Vec::new();
    image::DynamicImage::ImageRgba8(img)
        .write_to(&mut Cursor::new(&mut buf), image::ImageFormat::Png)
        .unwrap();
    buf
}

#[test]
fn decode_png_dimensions() {
    let img = image::RgbaImage::from_pixel(3, 2, image::Rgba([10, 20, 30, 255]));
    let decoded = decode_image(&png_bytes(img)).unwrap();
    assert_eq!(decoded.dimensions(), (3, 2));
    assert_eq!(decoded.get_pixel(2, 1).0, [10, 20, 30, 255]);
}

#[test]
fn garbage_bytes_are_a_decode_error() {
    let err = decode_image(b"definitely not an image").unwrap_err();
    assert!(err.is_decode());
    let err = prepare_background(&ImageSource::encoded(Vec::new()), CanvasSize::THUMBNAIL)
        .unwrap_err();
    assert!(err.is_decode());
}

#[test]
fn background_is_stretched_to_canvas() {
    let img = image::RgbaImage::from_pixel(4, 4, image::Rgba([200, 100, 50, 255]));
    let canvas = CanvasSize {
        width: 16,
        height: 9,
    };
    let bytes = prepare_background(&ImageSource::encoded(png_bytes(img)), canvas).unwrap();
    assert_eq!(bytes.len(), 16 * 9 * 4);
    for px in bytes.chunks_exact(4) {
        assert!(px[0].abs_diff(200) <= 1);
        assert!(px[1].abs_diff(100) <= 1);
        assert!(px[2].abs_diff(50) <= 1);
        assert_eq!(px[3], 255);
    }
}

#[test]
fn transparency_is_flattened_over_black() {
    let img = image::RgbaImage::from_pixel(2, 2, image::Rgba([255, 255, 255, 128]));
    let canvas = CanvasSize {
        width: 2,
        height: 2,
    };
    let bytes = prepare_background(&ImageSource::decoded(img), canvas).unwrap();
    for px in bytes.chunks_exact(4) {
        assert_eq!(px, &[128, 128, 128, 255]);
    }
}

#[test]
fn empty_decoded_image_is_rejected() {
    let err = prepare_background(
        &ImageSource::decoded(image::RgbaImage::new(0, 0)),
        CanvasSize::THUMBNAIL,
    )
    .unwrap_err();
    assert!(err.is_decode());
}
