use super::*;
use crate::animation::keyframe::Keyframe;
use crate::scene::config::TextConfig;
use crate::shaders::{declared_uniforms, fragment_source};

fn animated() -> AnimationConfig {
    AnimationConfig::default()
        .with_track_update("position.x", |t| t.with_keyframe(Keyframe::linear("px2", 1.0, 100.0)))
        .with_track_update("shaders.melt.zoom", |t| {
            t.with_keyframe(Keyframe::linear("smz2", 1.0, 17.6))
        })
        .with_track_update("background.color.0", |t| {
            t.with_keyframe(Keyframe::linear("bgr2", 1.0, 1.0))
        })
}

#[test]
fn tables_bind_every_declared_uniform() {
    let builtin = ["uTime", "uResolution", "u_mask"];
    for s in ShaderName::ALL {
        let declared: Vec<&str> = declared_uniforms(fragment_source(s))
            .into_iter()
            .filter(|u| !builtin.contains(u))
            .collect();
        let bound: Vec<&str> = uniform_table(s).iter().map(|(n, _)| n.as_str()).collect();
        for d in &declared {
            assert!(bound.contains(d), "{s}: {d} is declared but never bound");
        }
        for b in &bound {
            assert!(declared.contains(b), "{s}: {b} is bound but not declared");
        }
    }
}

#[test]
fn melt_uniforms_are_sampled() {
    let config = animated();
    let frame = evaluate_frame(&config, 2.5, 1.0);
    assert_eq!(frame.shader, ShaderName::Melt);
    assert_eq!(frame.time, 1.0);
    let zoom = frame.float(UniformName::Zoom).unwrap();
    assert!((zoom - 12.6).abs() < 1e-9);
    assert_eq!(frame.float(UniformName::Hue), Some(0.0));
    assert_eq!(frame.float(UniformName::Saturation), Some(1.0));
    assert_eq!(frame.get(UniformName::Scale), None);
    assert_eq!(frame.clear_color, Rgb::new(0.5, 0.0, 0.0));
    assert_eq!(frame.placement.offset, Vec2::new(50.0, 0.0));
}

#[test]
fn static_uniforms_ignore_tracks() {
    let config = AnimationConfig::default().with_active_shader(ShaderName::Flow);
    let frame = evaluate_frame(&config, 0.0, 0.0);
    assert_eq!(frame.float(UniformName::Speed), Some(2.5));
    assert_eq!(frame.float(UniformName::RgbMultiplierR), Some(1.0));
    assert_eq!(frame.float(UniformName::Twist), Some(50.0));
}

#[test]
fn balatro_binds_palette_and_toggle() {
    let config = AnimationConfig::default().with_active_shader(ShaderName::Balatro);
    let frame = evaluate_frame(&config, 1.0, 0.0);
    assert_eq!(frame.get(UniformName::IsRotate), Some(UniformValue::Bool(false)));
    assert_eq!(
        frame.get(UniformName::Color2),
        Some(UniformValue::Vec3(Rgb::new(0.0, 0.42, 0.706)))
    );
    assert_eq!(frame.float(UniformName::Contrast), Some(1.0));
    assert_eq!(frame.get(UniformName::Hue), None);
}

#[test]
fn palette_without_tracks_defaults_to_black() {
    let config = AnimationConfig::default().with_active_shader(ShaderName::ChargedCells);
    let config = config.with_tracks(
        config
            .tracks
            .iter()
            .filter(|t| !t.property.starts_with("shaders.chargedCells.color1"))
            .cloned()
            .collect(),
    );
    let frame = evaluate_frame(&config, 0.0, 0.0);
    assert_eq!(frame.get(UniformName::Color1), Some(UniformValue::Vec3(Rgb::BLACK)));
}

#[test]
fn text_layout_matches_canvas_rules() {
    let config = AnimationConfig::default().with_text(TextConfig {
        content: "one\ntwo".into(),
        line_height: 1.5,
        ..TextConfig::default()
    });
    let frame = evaluate_frame(&config, 0.0, 0.0);
    let text = &frame.text;
    assert_eq!(text.font, "700 80px 'Inter'");
    assert_eq!(text.lines, vec!["one", "two"]);
    assert_eq!(text.line_height, 120.0);
    assert_eq!(text.block_height, 240.0);
    assert_eq!(text.first_line_offset, -60.0);
    let origins = text.line_origins(Vec2::new(800.0, 600.0));
    assert_eq!(origins, vec![Vec2::new(400.0, 240.0), Vec2::new(400.0, 360.0)]);
}

#[test]
fn placement_transforms() {
    let p = TextPlacement {
        offset: Vec2::new(100.0, 50.0),
        rotation_deg: 90.0,
    };
    let moved = p.affine() * kurbo::Point::new(0.0, 0.0);
    assert_eq!(moved, kurbo::Point::new(100.0, 50.0));

    let clip = p.clip_space(Vec2::new(400.0, 200.0)) * kurbo::Point::ORIGIN;
    assert!((clip.x - 0.5).abs() < 1e-12);
    assert!((clip.y + 0.5).abs() < 1e-12);
}

#[test]
fn frames_serialize_with_glsl_names() {
    let frame = evaluate_frame(&AnimationConfig::default(), 0.0, 0.0);
    let json = serde_json::to_value(&frame).unwrap();
    assert_eq!(json["uniforms"][0][0], "uHue");
    assert_eq!(json["clearColor"], serde_json::json!([0.0, 0.0, 0.0]));
    assert_eq!(json["shader"], "melt");
}
