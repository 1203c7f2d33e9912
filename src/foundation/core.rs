use std::fmt;

pub use kurbo::{Affine, Vec2};

/// Two normalized keyframe times closer than this are treated as the same instant.
pub const TIME_EPSILON: f64 = 1e-4;

/// Opaque keyframe identifier, stable across edits.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct KeyframeId(pub String);

impl KeyframeId {
    /// Wrap an existing id.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Mint a fresh id for a keyframe created by an editing operation.
    pub fn generate() -> Self {
        Self(format!("k-{}", uuid::Uuid::new_v4().simple()))
    }

    /// Borrow the id as a string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for KeyframeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for KeyframeId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for KeyframeId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// Normalized RGB color, each channel nominally in `[0, 1]`.
///
/// Serialized as a 3-element array, matching the `background.color` wire shape.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(from = "[f64; 3]", into = "[f64; 3]")]
pub struct Rgb {
    /// Red channel.
    pub r: f64,
    /// Green channel.
    pub g: f64,
    /// Blue channel.
    pub b: f64,
}

impl Rgb {
    /// Black.
    pub const BLACK: Self = Self::new(0.0, 0.0, 0.0);

    /// Build a color from channel values.
    pub const fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    /// Channel by index (`0 = r`, `1 = g`, `2 = b`).
    pub fn channel(self, idx: usize) -> Option<f64> {
        match idx {
            0 => Some(self.r),
            1 => Some(self.g),
            2 => Some(self.b),
            _ => None,
        }
    }

    /// Copy with one channel replaced. Out-of-range indices return `self` unchanged.
    pub fn with_channel(self, idx: usize, v: f64) -> Self {
        match idx {
            0 => Self { r: v, ..self },
            1 => Self { g: v, ..self },
            2 => Self { b: v, ..self },
            _ => self,
        }
    }

    /// `#rrggbb` representation; channels are clamped to `[0, 1]` and rounded.
    pub fn to_hex(self) -> String {
        rgb_to_hex(self.r, self.g, self.b)
    }

    /// Parse `#rrggbb` (the `#` and leading zeros are optional).
    pub fn from_hex(hex: &str) -> Option<Self> {
        hex_to_rgb(hex)
    }
}

impl From<[f64; 3]> for Rgb {
    fn from(v: [f64; 3]) -> Self {
        Self::new(v[0], v[1], v[2])
    }
}

impl From<Rgb> for [f64; 3] {
    fn from(c: Rgb) -> Self {
        [c.r, c.g, c.b]
    }
}

/// Encode normalized channels as `#rrggbb`.
pub fn rgb_to_hex(r: f64, g: f64, b: f64) -> String {
    fn to_255(n: f64) -> u8 {
        (n * 255.0).clamp(0.0, 255.0).round() as u8
    }
    format!("#{:02x}{:02x}{:02x}", to_255(r), to_255(g), to_255(b))
}

/// Decode `#rrggbb` into normalized channels.
///
/// Short inputs are left-padded with zeros; anything that is not 1..=6 hex digits yields `None`.
pub fn hex_to_rgb(hex: &str) -> Option<Rgb> {
    let clean = hex.trim().trim_start_matches('#');
    if clean.is_empty() || clean.len() > 6 || !clean.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    let bits = u32::from_str_radix(clean, 16).ok()?;
    let r = f64::from((bits >> 16) & 255) / 255.0;
    let g = f64::from((bits >> 8) & 255) / 255.0;
    let b = f64::from(bits & 255) / 255.0;
    Some(Rgb::new(r, g, b))
}

/// `true` when two normalized times denote the same instant.
pub fn same_instant(a: f64, b: f64) -> bool {
    (a - b).abs() < TIME_EPSILON
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
