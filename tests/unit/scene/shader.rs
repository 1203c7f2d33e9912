use super::*;

#[test]
fn shader_keys_roundtrip() {
    for s in ShaderName::ALL {
        assert_eq!(ShaderName::from_key(s.key()), Some(s));
    }
    assert_eq!(ShaderName::from_key("charged_cells"), None);
    let json = serde_json::to_string(&ShaderName::ChargedCells).unwrap();
    assert_eq!(json, "\"chargedCells\"");
}

#[test]
fn param_tables_match_bags() {
    assert!(ShaderName::Melt.has_param(ShaderParam::Zoom));
    assert!(!ShaderName::Melt.has_param(ShaderParam::Velocity));
    assert!(ShaderName::Balatro.has_param(ShaderParam::Contrast));
    assert!(!ShaderName::Balatro.has_param(ShaderParam::Hue));
    assert!(ShaderName::ChargedCells.has_param(ShaderParam::Color(ColorSlot::Color3, Channel::B)));
    assert!(!ShaderName::Glass.has_param(ShaderParam::Color(ColorSlot::Color1, Channel::R)));
}

#[test]
fn every_listed_param_is_readable_except_unset_colors() {
    let shaders = ShaderConfigs::default();
    for s in ShaderName::ALL {
        for &p in s.params() {
            let v = shaders.param(s, p);
            match p {
                ShaderParam::Color(..) => assert_eq!(v, None),
                _ => assert!(v.is_some(), "{s} {p:?}"),
            }
        }
    }
}

#[test]
fn with_param_writes_and_rejects_unknown_fields() {
    let shaders = ShaderConfigs::default();
    let next = shaders.with_param(ShaderName::Melt, ShaderParam::Zoom, 3.0).unwrap();
    assert_eq!(next.melt.zoom, 3.0);
    assert_eq!(shaders.melt.zoom, 7.6);
    assert!(shaders.with_param(ShaderName::Melt, ShaderParam::Twist, 1.0).is_none());
}

#[test]
fn writing_one_channel_of_an_unset_color_starts_from_black() {
    let shaders = ShaderConfigs::default();
    let next = shaders
        .with_param(
            ShaderName::Balatro,
            ShaderParam::Color(ColorSlot::Color2, Channel::G),
            0.5,
        )
        .unwrap();
    assert_eq!(next.balatro.color2, Some(Rgb::new(0.0, 0.5, 0.0)));
}

#[test]
fn bags_use_camel_case_and_skip_unset_colors() {
    let json = serde_json::to_value(ShaderConfigs::default()).unwrap();
    assert_eq!(json["activeShader"], "melt");
    assert_eq!(json["flow"]["rgbR"], 1.0);
    assert_eq!(json["balatro"]["isRotate"], false);
    assert!(json["chargedCells"].get("color1").is_none());
}

#[test]
fn partial_bags_fill_from_defaults() {
    let shaders: ShaderConfigs =
        serde_json::from_str(r#"{"activeShader":"glass","glass":{"sides":9}}"#).unwrap();
    assert_eq!(shaders.active_shader, ShaderName::Glass);
    assert_eq!(shaders.glass.sides, 9.0);
    assert_eq!(shaders.glass.glow, 1.2);
    assert_eq!(shaders.melt, MeltParams::default());
}
