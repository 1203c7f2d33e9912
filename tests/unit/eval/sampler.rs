use super::*;
use crate::animation::keyframe::Keyframe;

#[test]
fn untracked_fields_default_to_their_static_value() {
    let config = AnimationConfig::default();
    let config = config.with_tracks(Vec::new());
    let s = Sampler::new(&config, 1.0);
    assert_eq!(s.value(PropertyPath::parse("shaders.flow.detail").unwrap()), 200.0);
    assert_eq!(s.value_of("text.fontSize"), 80.0);
    assert_eq!(s.value_of("position.x"), 0.0);
    assert_eq!(s.palette(ShaderName::Balatro, ColorSlot::Color1), Rgb::BLACK);
}

#[test]
fn tracks_override_static_values() {
    let config = AnimationConfig::default().with_track_update("background.color.2", |t| {
        t.with_keyframe(Keyframe::linear("bgb2", 1.0, 1.0))
    });
    let s = Sampler::new(&config, 5.0);
    assert_eq!(s.time(), 5.0);
    assert_eq!(s.background(), Rgb::new(0.0, 0.0, 1.0));
    assert_eq!(
        s.palette(ShaderName::ChargedCells, ColorSlot::Color2),
        Rgb::new(0.58, 1.0, 0.15)
    );
}
