use super::*;
use serde_json::json;

#[test]
fn defaults_follow_breaking_news_preset() {
    let s = StyleConfig::default();
    assert_eq!(s.text_color, Rgba8::WHITE);
    assert_eq!(s.background_color, Rgba8::rgb(0xCC, 0, 0));
    assert_eq!(s.accent_color, Rgba8::rgb(0xFF, 0xD7, 0));
    assert_eq!(s.font_family, "Times New Roman");
    assert_eq!(s.font_size, 48);
    assert_eq!(s.text_style, TextStyle::Outlined);
    assert_eq!(s.shadow_intensity, 4);
    assert_eq!(s.text_position, TextPosition::new(50.0, 20.0));
    assert!(s.text_wrapping);
    assert_eq!(s.badge, Badge::new("BREAKING"));
}

#[test]
fn apply_preset_resizes_for_headline_and_keeps_layout() {
    let mut s = StyleConfig {
        text_position: TextPosition::new(30.0, 60.0),
        text_style: TextStyle::BackgroundBox,
        ..StyleConfig::default()
    };
    s.apply_preset(Category::GovernmentUpdates, "Short one");
    assert_eq!(s.background_color, Rgba8::rgb(0x1B, 0x36, 0x5D));
    assert_eq!(s.font_family, "Georgia");
    assert_eq!(s.badge.text, "OFFICIAL");
    assert_eq!(s.font_size, 56);
    assert_eq!(s.text_position, TextPosition::new(30.0, 60.0));
    assert_eq!(s.text_style, TextStyle::BackgroundBox);
}

#[test]
fn normalized_clamps_ranges() {
    let s = StyleConfig {
        font_size: 200,
        text_position: TextPosition::new(0.0, 99.0),
        badge: Badge::new("EXTRAORDINARILY"),
        ..StyleConfig::default()
    }
    .normalized();
    assert_eq!(s.font_size, 80);
    assert_eq!(s.text_position, TextPosition::new(10.0, 80.0));
    assert_eq!(s.badge.text, "EXTRAORDINAR");

    let s = StyleConfig {
        font_size: 3,
        text_position: TextPosition::new(f64::NAN, 45.0),
        ..StyleConfig::default()
    }
    .normalized();
    assert_eq!(s.font_size, 20);
    assert_eq!(s.text_position, TextPosition::new(50.0, 45.0));
}

#[test]
fn headline_is_truncated_by_chars() {
    let req = RenderRequest::from_preset(
        ImageSource::encoded(Vec::new()),
        "ü".repeat(130),
        Category::PolicyUpdates,
    );
    assert_eq!(req.clamped_headline().chars().count(), MAX_HEADLINE_CHARS);
    assert_eq!(req.canvas, CanvasSize::THUMBNAIL);
    assert_eq!(req.style.font_size, 24);
}

#[test]
fn style_deserializes_with_partial_fields() {
    let s: StyleConfig = serde_json::from_value(json!({
        "text_color": "#2D3748",
        "text_style": "background",
        "badge": { "enabled": false }
    }))
    .unwrap();
    assert_eq!(s.text_color, Rgba8::rgb(0x2D, 0x37, 0x48));
    assert_eq!(s.text_style, TextStyle::BackgroundBox);
    assert!(!s.badge.is_visible());
    assert_eq!(s.font_size, 48);
}

#[test]
fn badge_visibility_needs_text() {
    assert!(Badge::new("POLICY").is_visible());
    assert!(!Badge::new("").is_visible());
    assert!(!Badge::disabled().is_visible());
}

#[test]
fn source_paths_are_confined_to_the_document_dir() {
    let root = Path::new("requests");
    assert_eq!(
        resolve_source_path(root, "./img\\photo.png").unwrap(),
        Path::new("requests").join("img").join("photo.png")
    );
    assert!(resolve_source_path(root, "/etc/passwd").is_err());
    assert!(resolve_source_path(root, "../photo.png").is_err());
    assert!(resolve_source_path(root, "./").is_err());
}

#[test]
fn request_document_uses_preset_when_style_missing() {
    let dir = std::env::temp_dir().join(format!("thumbsmith-doc-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(dir.join("bg.png"), b"not really a png").unwrap();
    let doc_path = dir.join("request.json");
    std::fs::write(
        &doc_path,
        serde_json::to_vec(&json!({
            "source": "bg.png",
            "headline": "Turnout Hits Record High",
            "category": "election-coverage"
        }))
        .unwrap(),
    )
    .unwrap();

    let req = RenderRequest::from_json_path(&doc_path).unwrap();
    assert_eq!(req.category, Category::ElectionCoverage);
    assert_eq!(req.style.badge.text, "ELECTION");
    assert_eq!(req.style.font_size, 48);
    match &req.source {
        ImageSource::Encoded(bytes) => assert_eq!(bytes.as_slice(), b"not really a png"),
        ImageSource::Decoded(_) => panic!("expected encoded source"),
    }

    std::fs::remove_dir_all(&dir).unwrap();
}
