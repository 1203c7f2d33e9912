use std::collections::HashSet;

use crate::animation::color::ColorGroup;
use crate::animation::track::{Track, parse_number};
use crate::foundation::core::Rgb;
use crate::foundation::error::{TempoError, TempoResult};
use crate::scene::property::{PropertyPath, noncanonical_binding};
use crate::scene::shader::{ShaderConfigs, ShaderName, ShaderParam};

/// Track ids shared across shader variants; their binding follows the active shader.
pub const COMMON_TRACK_IDS: [&str; 3] = ["shader.hue", "shader.saturation", "shader.contrast"];

/// Duration substituted when the duration field is cleared.
pub const MIN_DURATION_INPUT: f64 = 0.1;

/// Horizontal anchoring of the text block.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAlign {
    /// Anchored at the left edge.
    Left,
    /// Anchored at the horizontal center.
    #[default]
    Center,
    /// Anchored at the right edge.
    Right,
}

impl TextAlign {
    /// Wire name.
    pub fn key(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Center => "center",
            Self::Right => "right",
        }
    }
}

/// Static text block.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextConfig {
    /// Text content; `\n` separates lines.
    pub content: String,
    /// Font size in pixels.
    pub font_size: f64,
    /// Fill color as `#rrggbb`.
    pub color: String,
    /// Font family name.
    pub font_family: String,
    /// CSS font weight, e.g. `"700"`.
    pub font_weight: String,
    /// Alignment.
    #[serde(default)]
    pub align: TextAlign,
    /// Rotation in degrees.
    #[serde(default)]
    pub rotation: f64,
    /// Line height as a multiple of the font size.
    #[serde(default = "default_line_height")]
    pub line_height: f64,
}

fn default_line_height() -> f64 {
    1.2
}

impl Default for TextConfig {
    fn default() -> Self {
        Self {
            content: "Kerach Tempo".to_owned(),
            font_size: 80.0,
            color: "#0DE5DA".to_owned(),
            font_family: "Inter".to_owned(),
            font_weight: "700".to_owned(),
            align: TextAlign::Center,
            rotation: 0.0,
            line_height: default_line_height(),
        }
    }
}

/// Clear color of the frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Background {
    /// Normalized RGB.
    pub color: Rgb,
}

/// Aggregate root: everything that defines one animation.
///
/// Treated as an immutable value. Every update returns a new config; the playback loop only
/// reads the current one.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct AnimationConfig {
    /// Loop length in seconds, `> 0`.
    pub duration: f64,
    /// Static text block.
    pub text: TextConfig,
    /// Clear color.
    #[serde(default)]
    pub background: Background,
    /// Shader bags and the active selector.
    #[serde(default)]
    pub shaders: ShaderConfigs,
    /// Animation tracks.
    pub tracks: Vec<Track>,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        crate::scene::defaults::default_config()
    }
}

impl AnimationConfig {
    /// Active shader variant.
    pub fn active_shader(&self) -> ShaderName {
        self.shaders.active_shader
    }

    /// Copy with a new duration. Non-finite or non-positive values are ignored.
    pub fn with_duration(&self, seconds: f64) -> Self {
        if !(seconds.is_finite() && seconds > 0.0) {
            return self.clone();
        }
        Self {
            duration: seconds,
            ..self.clone()
        }
    }

    /// Apply a raw duration field. Empty input becomes [`MIN_DURATION_INPUT`]; unparseable
    /// input is ignored.
    pub fn with_duration_input(&self, input: &str) -> Self {
        if input.trim().is_empty() {
            return self.with_duration(MIN_DURATION_INPUT);
        }
        match parse_number(input) {
            Some(v) => self.with_duration(v),
            None => self.clone(),
        }
    }

    /// Copy with a new text block.
    pub fn with_text(&self, text: TextConfig) -> Self {
        Self {
            text,
            ..self.clone()
        }
    }

    /// Copy with a new static background color.
    pub fn with_background(&self, color: Rgb) -> Self {
        Self {
            background: Background { color },
            ..self.clone()
        }
    }

    /// Copy with the shader bags replaced. The active selector is kept.
    pub fn with_shaders(&self, shaders: ShaderConfigs) -> Self {
        Self {
            shaders: ShaderConfigs {
                active_shader: self.shaders.active_shader,
                ..shaders
            },
            ..self.clone()
        }
    }

    /// Copy with `tracks` replaced wholesale.
    pub fn with_tracks(&self, tracks: Vec<Track>) -> Self {
        Self {
            tracks,
            ..self.clone()
        }
    }

    /// Replace the track with the same id, or append it when the id is new.
    pub fn with_track(&self, track: Track) -> Self {
        let mut tracks = self.tracks.clone();
        match tracks.iter_mut().find(|t| t.id == track.id) {
            Some(slot) => *slot = track,
            None => tracks.push(track),
        }
        self.with_tracks(tracks)
    }

    /// Apply `f` to the track with `id`. Unknown ids return an unchanged copy.
    pub fn with_track_update(&self, id: &str, f: impl FnOnce(&Track) -> Track) -> Self {
        match self.track_by_id(id) {
            Some(track) => self.with_track(f(track)),
            None => self.clone(),
        }
    }

    /// Switch the active shader and rebind the common tracks.
    #[tracing::instrument(skip(self), fields(from = %self.shaders.active_shader))]
    pub fn with_active_shader(&self, shader: ShaderName) -> Self {
        let tracks = self
            .tracks
            .iter()
            .map(|t| match retarget_common_track(t, shader) {
                Some(property) if property != t.property => {
                    tracing::debug!(track = %t.id, %property, "rebinding common track");
                    t.with_property(property)
                }
                _ => t.clone(),
            })
            .collect();
        let mut next = self.with_tracks(tracks);
        next.shaders.active_shader = shader;
        next
    }

    /// First track bound to `path` (dotted form).
    pub fn track_for(&self, path: &str) -> Option<&Track> {
        self.tracks.iter().find(|t| t.property == path)
    }

    /// Track with `id`.
    pub fn track_by_id(&self, id: &str) -> Option<&Track> {
        self.tracks.iter().find(|t| t.id == id)
    }

    /// Tracks an editor timeline shows for the active shader, grouped in display order.
    pub fn visible_tracks(&self) -> VisibleTracks<'_> {
        let active = self.shaders.active_shader;

        let scalar = ["text.fontSize", "position.x", "position.y", "text.rotation"]
            .into_iter()
            .filter_map(|p| self.track_for(p))
            .collect();

        let common = self
            .tracks
            .iter()
            .filter(|t| COMMON_TRACK_IDS.contains(&t.id.as_str()))
            .collect();

        let shader_specific = self
            .tracks
            .iter()
            .filter(|t| is_shader_specific(&t.id, active))
            .collect();

        let color_groups = ColorGroup::ALL
            .into_iter()
            .filter(|g| match g.prefix.split('.').nth(1) {
                Some(key) if g.prefix.starts_with("shaders.") => {
                    ShaderName::from_key(key) == Some(active)
                }
                _ => true,
            })
            .filter(|g| {
                (0..3).all(|idx| self.track_for(&g.channel_property(idx)).is_some())
            })
            .collect();

        VisibleTracks {
            scalar,
            common,
            shader_specific,
            color_groups,
        }
    }

    /// Check aggregate invariants.
    pub fn validate(&self) -> TempoResult<()> {
        if !(self.duration.is_finite() && self.duration > 0.0) {
            return Err(TempoError::validation(format!(
                "duration must be > 0, got {}",
                self.duration
            )));
        }
        let mut seen = HashSet::new();
        for track in &self.tracks {
            track.validate()?;
            if let Some(canonical) = noncanonical_binding(&track.property) {
                return Err(TempoError::validation(format!(
                    "track '{}' is bound to '{}'; write it as '{canonical}'",
                    track.id, track.property
                )));
            }
            if !seen.insert(track.property.as_str()) {
                return Err(TempoError::validation(format!(
                    "more than one track is bound to '{}'",
                    track.property
                )));
            }
        }
        Ok(())
    }
}

/// Timeline rows for the active shader.
#[derive(Clone, Debug, PartialEq)]
pub struct VisibleTracks<'a> {
    /// Text and position tracks.
    pub scalar: Vec<&'a Track>,
    /// Common hue/saturation/contrast tracks.
    pub common: Vec<&'a Track>,
    /// Tracks specific to the active shader.
    pub shader_specific: Vec<&'a Track>,
    /// Complete color groups shown for the active shader (background always).
    pub color_groups: Vec<ColorGroup>,
}

fn is_shader_specific(track_id: &str, shader: ShaderName) -> bool {
    let Some(path) = PropertyPath::parse(track_id) else {
        return false;
    };
    match path {
        PropertyPath::Shader(s, param) => {
            s == shader
                && !matches!(
                    param,
                    ShaderParam::Hue
                        | ShaderParam::Saturation
                        | ShaderParam::Contrast
                        | ShaderParam::Color(..)
                )
        }
        _ => false,
    }
}

/// New binding for a common track after switching to `shader`, or `None` to leave it as is.
pub fn retarget_common_track(track: &Track, shader: ShaderName) -> Option<String> {
    if !COMMON_TRACK_IDS.contains(&track.id.as_str()) {
        return None;
    }
    let field = track.id.rsplit('.').next()?;
    let param = ShaderParam::from_key(field)?;
    if shader == ShaderName::Balatro && param == ShaderParam::Contrast {
        return Some(PropertyPath::Shader(ShaderName::Balatro, ShaderParam::Contrast).to_dotted());
    }
    shader
        .has_param(param)
        .then(|| PropertyPath::Shader(shader, param).to_dotted())
}

#[cfg(test)]
#[path = "../../tests/unit/scene/config.rs"]
mod tests;
