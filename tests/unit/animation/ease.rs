use super::*;

#[test]
fn endpoints_are_stable() {
    for ease in Ease::ALL {
        assert_eq!(ease.apply(0.0), 0.0);
        assert_eq!(ease.apply(1.0), 1.0);
    }
}

#[test]
fn monotonic_spot_check() {
    for ease in Ease::ALL {
        let a = ease.apply(0.25);
        let b = ease.apply(0.5);
        let c = ease.apply(0.75);
        assert!(a < b);
        assert!(b < c);
    }
}

#[test]
fn known_midpoints() {
    assert_eq!(Ease::Linear.apply(0.5), 0.5);
    assert_eq!(Ease::EaseInQuad.apply(0.5), 0.25);
    assert_eq!(Ease::EaseOutQuad.apply(0.5), 0.75);
    assert_eq!(Ease::EaseInOutQuad.apply(0.5), 0.5);
    assert_eq!(Ease::EaseInOutQuad.apply(0.25), 0.125);
}

#[test]
fn inputs_are_not_clamped() {
    assert_eq!(Ease::Linear.apply(2.0), 2.0);
    assert_eq!(Ease::EaseInQuad.apply(-1.0), 1.0);
}

#[test]
fn keys_roundtrip_and_match_wire_format() {
    for ease in Ease::ALL {
        assert_eq!(Ease::from_key(ease.key()), Some(ease));
        let json = serde_json::to_string(&ease).unwrap();
        assert_eq!(json, format!("\"{}\"", ease.key()));
    }
    assert_eq!(Ease::from_key("bounce"), None);
    assert_eq!(Ease::default(), Ease::Linear);
}
