use super::*;

fn checker(w: u32, h: u32) -> Frame {
    let mut data = Vec::with_capacity((w * h * 4) as usize);
    for y in 0..h {
        for x in 0..w {
            let v = if (x + y) % 2 == 0 { 255 } else { 0 };
            data.extend_from_slice(&[v, 0, 255 - v, 255]);
        }
    }
    Frame::new(w, h, data).unwrap()
}

#[test]
fn frame_rejects_mismatched_buffer() {
    let err = Frame::new(2, 2, vec![0; 15]).unwrap_err();
    assert!(matches!(err, ThumbError::Encode(_)));
}

#[test]
fn pixel_lookup_is_bounds_checked() {
    let f = checker(3, 2);
    assert_eq!(f.pixel(0, 0), Some([255, 0, 0, 255]));
    assert_eq!(f.pixel(1, 0), Some([0, 0, 255, 255]));
    assert_eq!(f.pixel(3, 0), None);
    assert_eq!(f.pixel(0, 2), None);
}

#[test]
fn png_is_rgb_without_alpha() {
    let f = checker(5, 3);
    let out = encode_png(&f).unwrap();
    assert_eq!((out.width, out.height), (5, 3));
    assert_eq!(&out.png[..8], b"\x89PNG\r\n\x1a\n");

    let decoded = image::load_from_memory(&out.png).unwrap();
    assert_eq!(decoded.color(), image::ColorType::Rgb8);
    let rgb = decoded.to_rgb8();
    assert_eq!(rgb.get_pixel(0, 0).0, [255, 0, 0]);
    assert_eq!(rgb.get_pixel(1, 0).0, [0, 0, 255]);
}

#[test]
fn save_creates_parent_dirs() {
    let dir = std::env::temp_dir().join(format!("thumbsmith-png-{}", std::process::id()));
    let path = dir.join("nested").join("out.png");
    let out = encode_png(&checker(2, 2)).unwrap();
    out.save(&path).unwrap();
    assert_eq!(std::fs::read(&path).unwrap(), out.png);
    let _ = std::fs::remove_dir_all(&dir);
}
