use super::*;

#[test]
fn parses_both_dialects_to_the_same_path() {
    for p in PropertyPath::all() {
        assert_eq!(PropertyPath::parse(&p.to_dotted()), Some(*p));
        assert_eq!(PropertyPath::parse(&p.to_identifier()), Some(*p));
    }
}

#[test]
fn identifier_form_replaces_every_dot() {
    let p = PropertyPath::parse("shaders.chargedCells.color2.1").unwrap();
    assert_eq!(p.to_identifier(), "shaders_chargedCells_color2_1");
    assert_eq!(p.to_string(), "shaders.chargedCells.color2.1");
    assert_eq!(p.shader(), Some(ShaderName::ChargedCells));
}

#[test]
fn unknown_paths_do_not_parse() {
    for bad in [
        "",
        "text",
        "text.font",
        "position.z",
        "background.color.3",
        "background.color.x",
        "shaders.melt.velocity",
        "shaders.glass.color1.0",
        "shaders.nope.hue",
        "rotation.z",
        "shaders.balatro.isRotate",
    ] {
        assert_eq!(PropertyPath::parse(bad), None, "{bad}");
    }
}

#[test]
fn resolve_reads_static_values() {
    let config = AnimationConfig::default();
    assert_eq!(resolve_path(&config, "text.fontSize"), Some(80.0));
    assert_eq!(resolve_path(&config, "text_lineHeight"), Some(1.2));
    assert_eq!(resolve_path(&config, "shaders.melt.zoom"), Some(7.6));
    assert_eq!(resolve_path(&config, "shaders_balatro_pixelFilter"), Some(745.0));
    assert_eq!(resolve_path(&config, "background.color.2"), Some(0.0));
    assert_eq!(resolve_path(&config, "position.x"), None);
    assert_eq!(resolve_path(&config, "shaders.balatro.color1.0"), None);
    assert_eq!(resolve_path(&config, "no.such.thing"), None);
}

#[test]
fn default_for_falls_back_to_zero() {
    let config = AnimationConfig::default();
    assert_eq!(default_for(&config, "shaders.flow.detail"), 200.0);
    assert_eq!(default_for(&config, "position.y"), 0.0);
    assert_eq!(default_for(&config, "garbage"), 0.0);
}

#[test]
fn write_is_pure() {
    let config = AnimationConfig::default();
    let path = PropertyPath::parse("shaders.glass.glow").unwrap();
    let next = path.write(&config, 2.5).unwrap();
    assert_eq!(path.resolve(&next), Some(2.5));
    assert_eq!(path.resolve(&config), Some(1.2));

    let bg = PropertyPath::parse("background.color.1").unwrap();
    assert_eq!(bg.write(&config, 0.4).unwrap().background.color.g, 0.4);

    let pos = PropertyPath::parse("position.x").unwrap();
    assert!(pos.write(&config, 1.0).is_none());
}

#[test]
fn unknown_paths_are_rewritten_textually() {
    assert_eq!(to_identifier_path("shaders.melt.hue"), "shaders_melt_hue");
    assert_eq!(to_identifier_path("custom.thing.0"), "custom_thing_0");
}

#[test]
fn from_str_reports_unknown_paths() {
    let err = "text.nope".parse::<PropertyPath>().unwrap_err();
    assert!(err.to_string().contains("text.nope"));
}
