use super::*;

#[test]
fn keys_round_trip_through_serde() {
    for c in Category::ALL {
        let v = serde_json::to_value(c).unwrap();
        assert_eq!(v, serde_json::Value::String(c.key().to_owned()));
        let back: Category = serde_json::from_value(v).unwrap();
        assert_eq!(back, c);
        assert_eq!(Category::from_key(c.key()), Some(c));
    }
}

#[test]
fn analysis_alias_is_accepted() {
    let c: Category = serde_json::from_str("\"analysis\"").unwrap();
    assert_eq!(c, Category::PoliticalAnalysis);
    assert_eq!(Category::from_key("Analysis"), Some(Category::PoliticalAnalysis));
    assert_eq!(Category::from_key("sports"), None);
}

#[test]
fn download_names_use_display_slug() {
    assert_eq!(
        Category::BreakingNews.download_file_name(),
        "breaking-news-thumbnail.png"
    );
    assert_eq!(
        Category::GovernmentUpdates.download_file_name(),
        "government-updates-thumbnail.png"
    );
    assert_eq!(Category::PolicyUpdates.slug(), "policy-updates");
}

#[test]
fn presets_match_category_themes() {
    let p = Category::BreakingNews.preset();
    assert_eq!(p.background_color, Rgba8::rgb(0xCC, 0, 0));
    assert_eq!(p.badge_text, "BREAKING");

    let p = Category::GovernmentUpdates.preset();
    assert_eq!(p.background_color, Rgba8::rgb(0x1B, 0x36, 0x5D));
    assert_eq!(p.font_family, "Georgia");

    for c in Category::ALL {
        assert!(c.preset().badge_text.chars().count() <= 12);
    }
}
