use super::*;

#[test]
fn key_is_stable_and_sensitive_to_layout_inputs() {
    let text = TextConfig::default();
    let a = TextMaskKey::new(&text, 80.0);
    assert_eq!(a, TextMaskKey::new(&text, 80.0));
    assert_ne!(a, TextMaskKey::new(&text, 81.0));

    let moved = TextConfig {
        align: TextAlign::Left,
        ..text.clone()
    };
    assert_ne!(a, TextMaskKey::new(&moved, 80.0));

    let renamed = TextConfig {
        content: "Other".into(),
        ..text
    };
    assert_ne!(a, TextMaskKey::new(&renamed, 80.0));
}

#[test]
fn signed_zero_sizes_share_a_key() {
    let text = TextConfig::default();
    assert_eq!(TextMaskKey::new(&text, 0.0), TextMaskKey::new(&text, -0.0));
}

#[test]
fn cache_reports_rebuilds_only_on_change() {
    let text = TextConfig::default();
    let mut cache = TextMaskCache::new();
    let k = TextMaskKey::new(&text, 80.0);
    assert!(cache.needs_rebuild(k));
    assert!(!cache.needs_rebuild(k));
    assert!(cache.needs_rebuild(TextMaskKey::new(&text, 90.0)));
    assert_eq!(cache.rebuilds(), 2);

    cache.invalidate();
    assert!(cache.last().is_none());
    assert!(cache.needs_rebuild(k));
}
