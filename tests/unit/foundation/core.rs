use super::*;

#[test]
fn hex_roundtrip_on_byte_aligned_colors() {
    let c = hex_to_rgb("#0DE5DA").unwrap();
    assert_eq!(c.to_hex(), "#0de5da");
    assert_eq!(rgb_to_hex(1.0, 0.0, 0.5), "#ff0080");
}

#[test]
fn hex_short_inputs_are_left_padded() {
    let c = hex_to_rgb("ff").unwrap();
    assert_eq!(c.r, 0.0);
    assert_eq!(c.g, 0.0);
    assert_eq!(c.b, 1.0);
}

#[test]
fn hex_rejects_garbage() {
    assert!(hex_to_rgb("").is_none());
    assert!(hex_to_rgb("#").is_none());
    assert!(hex_to_rgb("#zzzzzz").is_none());
    assert!(hex_to_rgb("#1234567").is_none());
}

#[test]
fn rgb_to_hex_clamps_out_of_range_channels() {
    assert_eq!(rgb_to_hex(-1.0, 2.0, 0.0), "#00ff00");
}

#[test]
fn rgb_serializes_as_array() {
    let c = Rgb::new(0.1, 0.2, 0.3);
    let s = serde_json::to_string(&c).unwrap();
    assert_eq!(s, "[0.1,0.2,0.3]");
    let back: Rgb = serde_json::from_str(&s).unwrap();
    assert_eq!(back, c);
}

#[test]
fn channel_access_by_index() {
    let c = Rgb::new(0.1, 0.2, 0.3).with_channel(1, 0.9);
    assert_eq!(c.channel(1), Some(0.9));
    assert_eq!(c.channel(3), None);
    assert_eq!(c.with_channel(7, 1.0), c);
}

#[test]
fn generated_ids_are_unique() {
    let a = KeyframeId::generate();
    let b = KeyframeId::generate();
    assert_ne!(a, b);
    assert!(a.as_str().starts_with("k-"));
}

#[test]
fn same_instant_uses_epsilon() {
    assert!(same_instant(0.5, 0.50005));
    assert!(!same_instant(0.5, 0.5002));
}
