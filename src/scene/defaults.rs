//! Built-in starter project.

use crate::animation::keyframe::Keyframe;
use crate::animation::track::Track;
use crate::foundation::core::Rgb;
use crate::scene::config::{AnimationConfig, Background, TextConfig};
use crate::scene::shader::ShaderConfigs;

/// Default loop length in seconds.
pub const DEFAULT_DURATION: f64 = 5.0;

const CELLS_COLORS: [f64; 9] = [0.18, 0.7, 0.4, 0.58, 1.0, 0.15, 0.0, 0.65, 0.31];
const BALATRO_COLORS: [f64; 9] = [0.871, 0.267, 0.231, 0.0, 0.42, 0.706, 0.086, 0.137, 0.145];

/// The project a fresh editor session starts from.
pub fn default_config() -> AnimationConfig {
    AnimationConfig {
        duration: DEFAULT_DURATION,
        text: TextConfig::default(),
        background: Background { color: Rgb::BLACK },
        shaders: ShaderConfigs::default(),
        tracks: default_tracks(),
    }
}

fn track(
    id: &str,
    label: &str,
    (min, max): (f64, f64),
    step: Option<f64>,
    key_id: &str,
    value: f64,
) -> Track {
    let t = Track::new(id, id, label, min, max, Keyframe::linear(key_id, 0.0, value));
    match step {
        Some(s) => t.with_step(s),
        None => t,
    }
}

/// Default track set: text/position, background channels, common shader tracks, per-shader
/// tracks, and the palette color channels.
pub fn default_tracks() -> Vec<Track> {
    let mut tracks = vec![
        track("text.fontSize", "Font Size", (10.0, 200.0), None, "fs1", 80.0),
        track("position.x", "Position X", (-200.0, 200.0), None, "px1", 0.0),
        track("position.y", "Position Y", (-200.0, 200.0), None, "py1", 0.0),
        track("text.rotation", "Rotation", (0.0, 360.0), Some(0.01), "rot1", 0.0),
        track("background.color.0", "BG Color (R)", (0.0, 1.0), Some(0.01), "bgr1", 0.0),
        track("background.color.1", "BG Color (G)", (0.0, 1.0), Some(0.01), "bgg1", 0.0),
        track("background.color.2", "BG Color (B)", (0.0, 1.0), Some(0.01), "bgb1", 0.0),
        track("shader.hue", "Hue Shift", (0.0, 360.0), None, "sh1", 0.0)
            .with_property("shaders.melt.hue"),
        track("shader.saturation", "Saturation", (0.0, 2.0), Some(0.01), "ss1", 1.0)
            .with_property("shaders.melt.saturation"),
        track("shader.contrast", "Contrast", (0.0, 5.0), Some(0.01), "sc1", 1.0)
            .with_property("shaders.melt.contrast"),
        track("shaders.melt.zoom", "Melt Zoom", (0.1, 32.0), Some(0.1), "smz1", 7.6),
        track("shaders.melt.speed", "Melt Speed", (0.0, 12.0), Some(0.01), "sms1", 0.5),
        track("shaders.melt.detail", "Melt Detail", (0.0, 1.0), Some(0.01), "smd1", 0.2),
        track("shaders.flow.velocity", "Flow Velocity", (0.0, 1.0), Some(0.01), "sfv1", 0.2),
        track("shaders.flow.detail", "Flow Detail", (10.0, 500.0), Some(1.0), "sfd1", 200.0),
        track("shaders.flow.twist", "Flow Twist", (-100.0, 100.0), Some(1.0), "sft1", 50.0),
        track("shaders.glass.sides", "Glass Sides", (2.0, 32.0), Some(1.0), "sgs1", 6.0),
        track("shaders.glass.density", "Glass Density", (1.0, 50.0), Some(0.1), "sgd1", 15.0),
        track("shaders.glass.glow", "Glass Glow", (0.0, 5.0), Some(0.1), "sgg1", 1.2),
        track("shaders.chargedCells.scale", "Cells Scale", (1.0, 120.0), Some(0.1), "sccs1", 5.0),
    ];
    tracks.extend(palette_tracks("chargedCells", "Cells", "sccc", &CELLS_COLORS));
    tracks.extend(palette_tracks("balatro", "Balatro", "sbc", &BALATRO_COLORS));
    tracks
}

fn palette_tracks<'a>(
    shader: &'a str,
    label: &'a str,
    key_prefix: &'a str,
    values: &'a [f64; 9],
) -> impl Iterator<Item = Track> + 'a {
    (1..=3).flat_map(move |slot| {
        ["R", "G", "B"].into_iter().enumerate().map(move |(ch, comp)| {
            let i = slot - 1;
            let id = format!("shaders.{shader}.color{slot}.{ch}");
            track(
                &id,
                &format!("{label} color{slot} {comp}"),
                (0.0, 1.0),
                Some(0.01),
                &format!("{key_prefix}{i}{ch}"),
                values[i * 3 + ch],
            )
        })
    })
}
