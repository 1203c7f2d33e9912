//! Addressable animatable fields.
//!
//! Tracks name their target with a property path string. Two spellings exist: the dotted form
//! used by project files (`shaders.melt.zoom`, `background.color.0`) and the identifier form
//! emitted into standalone exports (`shaders_melt_zoom`). Both parse into the same closed
//! [`PropertyPath`]; strings that name no known field parse to `None`, and callers fall back to a
//! default value.

use std::fmt;
use std::sync::LazyLock;

use crate::scene::config::AnimationConfig;
use crate::scene::shader::{Channel, ColorSlot, ShaderName, ShaderParam};

/// Separator of the dotted dialect.
pub const DOTTED_DELIMITER: char = '.';
/// Separator of the identifier dialect.
pub const IDENTIFIER_DELIMITER: char = '_';

/// Text-block field driven by a track.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TextField {
    /// `text.fontSize`.
    FontSize,
    /// `text.rotation` (degrees).
    Rotation,
    /// `text.lineHeight`.
    LineHeight,
}

impl TextField {
    const ALL: [TextField; 3] = [TextField::FontSize, TextField::Rotation, TextField::LineHeight];

    fn key(self) -> &'static str {
        match self {
            Self::FontSize => "fontSize",
            Self::Rotation => "rotation",
            Self::LineHeight => "lineHeight",
        }
    }
}

/// Mesh offset axis. Positions have no static storage; they exist only as tracks.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    /// `position.x`.
    X,
    /// `position.y`.
    Y,
}

impl Axis {
    fn key(self) -> &'static str {
        match self {
            Self::X => "x",
            Self::Y => "y",
        }
    }
}

/// A known animatable scalar leaf of [`AnimationConfig`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PropertyPath {
    /// `text.<field>`.
    Text(TextField),
    /// `position.<axis>`.
    Position(Axis),
    /// `background.color.<channel>`.
    Background(Channel),
    /// `shaders.<shader>.<param>`.
    Shader(ShaderName, ShaderParam),
}

static ALL_PATHS: LazyLock<Vec<PropertyPath>> = LazyLock::new(|| {
    let mut out: Vec<PropertyPath> = TextField::ALL.into_iter().map(PropertyPath::Text).collect();
    out.extend([Axis::X, Axis::Y].map(PropertyPath::Position));
    out.extend(Channel::ALL.map(PropertyPath::Background));
    for shader in ShaderName::ALL {
        out.extend(shader.params().iter().map(|&p| PropertyPath::Shader(shader, p)));
    }
    out
});

impl PropertyPath {
    /// Every addressable path, in a stable order.
    pub fn all() -> &'static [PropertyPath] {
        &ALL_PATHS
    }

    /// Parse either dialect. Unknown or malformed paths yield `None`.
    pub fn parse(path: &str) -> Option<Self> {
        let delimiter = if path.contains(DOTTED_DELIMITER) {
            DOTTED_DELIMITER
        } else {
            IDENTIFIER_DELIMITER
        };
        let segments: Vec<&str> = path.split(delimiter).collect();
        Self::from_segments(&segments)
    }

    fn from_segments(segments: &[&str]) -> Option<Self> {
        match segments {
            ["text", field] => TextField::ALL
                .into_iter()
                .find(|f| f.key() == *field)
                .map(Self::Text),
            ["position", "x"] => Some(Self::Position(Axis::X)),
            ["position", "y"] => Some(Self::Position(Axis::Y)),
            ["background", "color", idx] => parse_channel(idx).map(Self::Background),
            ["shaders", shader, rest @ ..] => {
                let shader = ShaderName::from_key(shader)?;
                let param = match rest {
                    [field] => ShaderParam::from_key(field)?,
                    [slot, idx] => ShaderParam::Color(ColorSlot::from_key(slot)?, parse_channel(idx)?),
                    _ => return None,
                };
                shader.has_param(param).then_some(Self::Shader(shader, param))
            }
            _ => None,
        }
    }

    /// Path segments, dialect-independent.
    pub fn segments(&self) -> Vec<String> {
        match self {
            Self::Text(f) => vec!["text".into(), f.key().into()],
            Self::Position(a) => vec!["position".into(), a.key().into()],
            Self::Background(c) => vec!["background".into(), "color".into(), c.index().to_string()],
            Self::Shader(s, p) => {
                let mut out = vec!["shaders".to_owned(), s.key().to_owned()];
                out.extend(p.segments());
                out
            }
        }
    }

    /// Dotted form, as stored in project files.
    pub fn to_dotted(&self) -> String {
        self.segments().join(".")
    }

    /// Identifier-safe form, as embedded in standalone exports.
    pub fn to_identifier(&self) -> String {
        self.segments().join("_")
    }

    /// Shader whose bag this path addresses, if any.
    pub fn shader(&self) -> Option<ShaderName> {
        match self {
            Self::Shader(s, _) => Some(*s),
            _ => None,
        }
    }

    /// Current static value in `config`. Positions and unset optional colors have none.
    pub fn resolve(&self, config: &AnimationConfig) -> Option<f64> {
        match *self {
            Self::Text(TextField::FontSize) => Some(config.text.font_size),
            Self::Text(TextField::Rotation) => Some(config.text.rotation),
            Self::Text(TextField::LineHeight) => Some(config.text.line_height),
            Self::Position(_) => None,
            Self::Background(c) => Some(c.read(config.background.color)),
            Self::Shader(s, p) => config.shaders.param(s, p),
        }
    }

    /// Copy of `config` with this field set to `value`; `None` for paths with no storage.
    pub fn write(&self, config: &AnimationConfig, value: f64) -> Option<AnimationConfig> {
        let mut next = config.clone();
        match *self {
            Self::Text(TextField::FontSize) => next.text.font_size = value,
            Self::Text(TextField::Rotation) => next.text.rotation = value,
            Self::Text(TextField::LineHeight) => next.text.line_height = value,
            Self::Position(_) => return None,
            Self::Background(c) => next.background.color = c.write(next.background.color, value),
            Self::Shader(s, p) => next.shaders = config.shaders.with_param(s, p, value)?,
        }
        Some(next)
    }
}

fn parse_channel(idx: &str) -> Option<Channel> {
    idx.parse::<usize>().ok().and_then(Channel::from_index)
}

impl fmt::Display for PropertyPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_dotted())
    }
}

impl std::str::FromStr for PropertyPath {
    type Err = crate::TempoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
            .ok_or_else(|| crate::TempoError::validation(format!("unknown property path '{s}'")))
    }
}

/// Rewrite a path into the identifier dialect. Unknown paths are rewritten textually so
/// unbound tracks survive an export unchanged in meaning.
pub fn to_identifier_path(path: &str) -> String {
    match PropertyPath::parse(path) {
        Some(p) => p.to_identifier(),
        None => path.replace(DOTTED_DELIMITER, &IDENTIFIER_DELIMITER.to_string()),
    }
}

/// Canonical dotted path a track bound to `path` would animate once exported, when that differs
/// from `path` itself.
///
/// The preview matches tracks by exact dotted string while the export matches the identifier
/// rewrite, so a track bound to a non-canonical spelling (`text_fontSize`,
/// `background.color.00`, `shaders.melt_hue`) would be inert in one and live in the other.
pub(crate) fn noncanonical_binding(path: &str) -> Option<String> {
    PropertyPath::parse(&to_identifier_path(path))
        .map(|p| p.to_dotted())
        .filter(|dotted| dotted != path)
}

/// Static value at `path` in either dialect, `None` when the path is unknown or has no storage.
pub fn resolve_path(config: &AnimationConfig, path: &str) -> Option<f64> {
    PropertyPath::parse(path)?.resolve(config)
}

/// Sampling default for `path`: its static value, else `0.0`.
pub fn default_for(config: &AnimationConfig, path: &str) -> f64 {
    resolve_path(config, path).unwrap_or(0.0)
}

#[cfg(test)]
#[path = "../../tests/unit/scene/property.rs"]
mod tests;
