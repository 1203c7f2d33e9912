//! Per-frame renderer inputs.
//!
//! [`evaluate_frame`] turns a config plus two clocks into the flat set of values a GPU renderer
//! consumes: named uniforms for the active shader, the clear color, the text layout and the text
//! mesh placement. The uniform table below is also embedded into standalone exports, so both
//! runtimes bind exactly the same values.

use std::fmt;

use kurbo::{Affine, Vec2};

use crate::eval::sampler::Sampler;
use crate::eval::text_mask::TextMaskKey;
use crate::foundation::core::Rgb;
use crate::scene::config::{AnimationConfig, TextAlign};
use crate::scene::property::{Axis, PropertyPath, TextField};
use crate::scene::shader::{ColorSlot, ShaderName, ShaderParam};

/// Uniform names the shipped shaders declare.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[allow(missing_docs)]
pub enum UniformName {
    Hue,
    Saturation,
    Contrast,
    Zoom,
    Speed,
    Detail,
    Velocity,
    Twist,
    RgbMultiplierR,
    RgbMultiplierG,
    RgbMultiplierB,
    ColorOffset,
    SpinRotation,
    SpinSpeed,
    Lighting,
    SpinAmount,
    PixelFilter,
    SpinEase,
    IsRotate,
    Sides,
    Density,
    Glow,
    Scale,
    Color1,
    Color2,
    Color3,
}

impl UniformName {
    /// GLSL identifier.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Hue => "uHue",
            Self::Saturation => "uSaturation",
            Self::Contrast => "uContrast",
            Self::Zoom => "uZoom",
            Self::Speed => "uSpeed",
            Self::Detail => "uDetail",
            Self::Velocity => "uVelocity",
            Self::Twist => "uTwist",
            Self::RgbMultiplierR => "uRgbMultiplierR",
            Self::RgbMultiplierG => "uRgbMultiplierG",
            Self::RgbMultiplierB => "uRgbMultiplierB",
            Self::ColorOffset => "uColorOffset",
            Self::SpinRotation => "uSpinRotation",
            Self::SpinSpeed => "uSpinSpeed",
            Self::Lighting => "uLighting",
            Self::SpinAmount => "uSpinAmount",
            Self::PixelFilter => "uPixelFilter",
            Self::SpinEase => "uSpinEase",
            Self::IsRotate => "uIsRotate",
            Self::Sides => "uSides",
            Self::Density => "uDensity",
            Self::Glow => "uGlow",
            Self::Scale => "uScale",
            Self::Color1 => "uColor1",
            Self::Color2 => "uColor2",
            Self::Color3 => "uColor3",
        }
    }
}

impl fmt::Display for UniformName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl serde::Serialize for UniformName {
    fn serialize<S: serde::Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(self.as_str())
    }
}

/// Value bound to a uniform.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
#[serde(untagged)]
pub enum UniformValue {
    /// `float`.
    Float(f64),
    /// `vec3` color.
    Vec3(Rgb),
    /// `bool`.
    Bool(bool),
}

/// Where a uniform's value comes from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UniformSource {
    /// Sampled from the track bound to this field.
    Sampled(ShaderParam),
    /// Static bag value; not animatable.
    Static(ShaderParam),
    /// Sampled palette color, one track per channel.
    Palette(ColorSlot),
    /// Balatro's rotate toggle.
    IsRotate,
}

use UniformName as U;
use UniformSource::{IsRotate, Palette, Sampled, Static};

const MELT: &[(UniformName, UniformSource)] = &[
    (U::Hue, Sampled(ShaderParam::Hue)),
    (U::Saturation, Sampled(ShaderParam::Saturation)),
    (U::Contrast, Sampled(ShaderParam::Contrast)),
    (U::Zoom, Sampled(ShaderParam::Zoom)),
    (U::Speed, Sampled(ShaderParam::Speed)),
    (U::Detail, Sampled(ShaderParam::Detail)),
];

const FLOW: &[(UniformName, UniformSource)] = &[
    (U::Hue, Sampled(ShaderParam::Hue)),
    (U::Saturation, Sampled(ShaderParam::Saturation)),
    (U::Contrast, Sampled(ShaderParam::Contrast)),
    (U::Velocity, Sampled(ShaderParam::Velocity)),
    (U::Detail, Sampled(ShaderParam::Detail)),
    (U::Twist, Sampled(ShaderParam::Twist)),
    (U::Speed, Static(ShaderParam::Speed)),
    (U::RgbMultiplierR, Static(ShaderParam::RgbR)),
    (U::RgbMultiplierG, Static(ShaderParam::RgbG)),
    (U::RgbMultiplierB, Static(ShaderParam::RgbB)),
    (U::ColorOffset, Static(ShaderParam::ColorOffset)),
];

const GLASS: &[(UniformName, UniformSource)] = &[
    (U::Hue, Sampled(ShaderParam::Hue)),
    (U::Saturation, Sampled(ShaderParam::Saturation)),
    (U::Contrast, Sampled(ShaderParam::Contrast)),
    (U::Sides, Sampled(ShaderParam::Sides)),
    (U::Density, Sampled(ShaderParam::Density)),
    (U::Glow, Sampled(ShaderParam::Glow)),
    (U::Speed, Static(ShaderParam::Speed)),
];

const CHARGED_CELLS: &[(UniformName, UniformSource)] = &[
    (U::Hue, Sampled(ShaderParam::Hue)),
    (U::Saturation, Sampled(ShaderParam::Saturation)),
    (U::Contrast, Sampled(ShaderParam::Contrast)),
    (U::Scale, Sampled(ShaderParam::Scale)),
    (U::Speed, Static(ShaderParam::Speed)),
    (U::Color1, Palette(ColorSlot::Color1)),
    (U::Color2, Palette(ColorSlot::Color2)),
    (U::Color3, Palette(ColorSlot::Color3)),
];

const BALATRO: &[(UniformName, UniformSource)] = &[
    (U::Contrast, Sampled(ShaderParam::Contrast)),
    (U::Speed, Static(ShaderParam::Speed)),
    (U::SpinRotation, Static(ShaderParam::SpinRotation)),
    (U::SpinSpeed, Static(ShaderParam::SpinSpeed)),
    (U::Lighting, Static(ShaderParam::Lighting)),
    (U::SpinAmount, Static(ShaderParam::SpinAmount)),
    (U::PixelFilter, Static(ShaderParam::PixelFilter)),
    (U::SpinEase, Static(ShaderParam::SpinEase)),
    (U::IsRotate, IsRotate),
    (U::Color1, Palette(ColorSlot::Color1)),
    (U::Color2, Palette(ColorSlot::Color2)),
    (U::Color3, Palette(ColorSlot::Color3)),
];

/// Uniforms bound for `shader`, in binding order.
pub fn uniform_table(shader: ShaderName) -> &'static [(UniformName, UniformSource)] {
    match shader {
        ShaderName::Melt => MELT,
        ShaderName::Flow => FLOW,
        ShaderName::Balatro => BALATRO,
        ShaderName::Glass => GLASS,
        ShaderName::ChargedCells => CHARGED_CELLS,
    }
}

/// Text block layout for one frame, in canvas pixels.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TextLayout {
    /// Canvas font shorthand, `"<weight> <size>px '<family>'"`.
    pub font: String,
    /// Sampled font size.
    pub font_size: f64,
    /// Horizontal anchor.
    pub align: TextAlign,
    /// Lines, split on `\n`.
    pub lines: Vec<String>,
    /// Distance between baselines.
    pub line_height: f64,
    /// Height of the whole block.
    pub block_height: f64,
    /// Offset of the first line's middle from the canvas center (negative is up).
    pub first_line_offset: f64,
    /// Mask fingerprint.
    pub mask_key: TextMaskKey,
}

impl TextLayout {
    /// Anchor point of each line on a `canvas`-sized surface (middle baseline).
    pub fn line_origins(&self, canvas: Vec2) -> Vec<Vec2> {
        let x = match self.align {
            TextAlign::Left => 0.0,
            TextAlign::Center => canvas.x / 2.0,
            TextAlign::Right => canvas.x,
        };
        let start_y = canvas.y / 2.0 + self.first_line_offset;
        (0..self.lines.len())
            .map(|i| Vec2::new(x, start_y + i as f64 * self.line_height))
            .collect()
    }
}

/// Text mesh placement for one frame.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TextPlacement {
    /// Offset from the viewport center in pixels, y down.
    pub offset: Vec2,
    /// Rotation in degrees, clockwise on screen.
    pub rotation_deg: f64,
}

impl TextPlacement {
    /// Pixel-space transform: rotate about the mesh center, then offset.
    pub fn affine(&self) -> Affine {
        Affine::translate(self.offset) * Affine::rotate(self.rotation_deg.to_radians())
    }

    /// Transform in clip space (`[-1, 1]`, y up) for a `viewport`-sized surface.
    pub fn clip_space(&self, viewport: Vec2) -> Affine {
        let half = viewport / 2.0;
        let t = Vec2::new(self.offset.x / half.x, -self.offset.y / half.y);
        Affine::translate(t) * Affine::rotate(-self.rotation_deg.to_radians())
    }
}

/// Everything the renderer needs for one frame.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FrameUniforms {
    /// Timeline time in seconds (loop-relative).
    pub timeline_time: f64,
    /// Free-running shader clock, bound to `uTime`.
    pub time: f64,
    /// Active shader.
    pub shader: ShaderName,
    /// Clear color.
    pub clear_color: Rgb,
    /// Text layout.
    pub text: TextLayout,
    /// Text mesh placement.
    pub placement: TextPlacement,
    /// Shader uniforms, in binding order.
    pub uniforms: Vec<(UniformName, UniformValue)>,
}

impl FrameUniforms {
    /// Value bound to `name`, if the active shader binds it.
    pub fn get(&self, name: UniformName) -> Option<UniformValue> {
        self.uniforms.iter().find(|(n, _)| *n == name).map(|(_, v)| *v)
    }

    /// Float value bound to `name`.
    pub fn float(&self, name: UniformName) -> Option<f64> {
        match self.get(name)? {
            UniformValue::Float(v) => Some(v),
            _ => None,
        }
    }
}

/// Evaluate one frame of `config`.
///
/// `timeline_time` drives keyframe sampling; `shader_time` feeds `uTime` and keeps advancing
/// while paused.
pub fn evaluate_frame(config: &AnimationConfig, timeline_time: f64, shader_time: f64) -> FrameUniforms {
    let s = Sampler::new(config, timeline_time);
    let shader = config.active_shader();

    let uniforms = uniform_table(shader)
        .iter()
        .map(|&(name, source)| {
            let value = match source {
                Sampled(p) => UniformValue::Float(s.value(PropertyPath::Shader(shader, p))),
                Static(p) => UniformValue::Float(config.shaders.param(shader, p).unwrap_or(0.0)),
                Palette(slot) => UniformValue::Vec3(s.palette(shader, slot)),
                IsRotate => UniformValue::Bool(config.shaders.balatro.is_rotate),
            };
            (name, value)
        })
        .collect();

    let font_size = s.value(PropertyPath::Text(TextField::FontSize));
    let rotation_deg = s.value(PropertyPath::Text(TextField::Rotation));
    let offset = Vec2::new(
        s.value(PropertyPath::Position(Axis::X)),
        s.value(PropertyPath::Position(Axis::Y)),
    );

    tracing::trace!(timeline_time, shader_time, %shader, "evaluated frame");

    FrameUniforms {
        timeline_time,
        time: shader_time,
        shader,
        clear_color: s.background(),
        text: layout_text(config, font_size),
        placement: TextPlacement {
            offset,
            rotation_deg,
        },
        uniforms,
    }
}

fn layout_text(config: &AnimationConfig, font_size: f64) -> TextLayout {
    let text = &config.text;
    let lines: Vec<String> = text.content.split('\n').map(str::to_owned).collect();
    let line_height = font_size * text.line_height;
    let block_height = lines.len() as f64 * line_height;
    TextLayout {
        font: format!("{} {}px '{}'", text.font_weight, font_size, text.font_family),
        font_size,
        align: text.align,
        lines,
        line_height,
        block_height,
        first_line_offset: -block_height / 2.0 + line_height / 2.0,
        mask_key: TextMaskKey::new(text, font_size),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/eval/uniforms.rs"]
mod tests;
