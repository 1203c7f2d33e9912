//! Shader variants and their parameter bags.
//!
//! Each variant owns an independent bag of defaults. Numeric fields are addressed through the
//! closed [`ShaderParam`] enum; [`ShaderParams::PARAMS`] is the table of which fields a variant
//! actually has.

use std::fmt;

use crate::foundation::core::Rgb;

/// Closed set of shader variants.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ShaderName {
    /// Gradient-flow "melt" look.
    #[default]
    Melt,
    /// Twisting flow field.
    Flow,
    /// Balatro-style paint swirl.
    Balatro,
    /// Psychedelic glass.
    Glass,
    /// Charged cells.
    ChargedCells,
}

impl ShaderName {
    /// Every variant, in selector order.
    pub const ALL: [ShaderName; 5] = [
        ShaderName::Melt,
        ShaderName::Flow,
        ShaderName::Balatro,
        ShaderName::Glass,
        ShaderName::ChargedCells,
    ];

    /// Path segment / wire name.
    pub fn key(self) -> &'static str {
        match self {
            Self::Melt => "melt",
            Self::Flow => "flow",
            Self::Balatro => "balatro",
            Self::Glass => "glass",
            Self::ChargedCells => "chargedCells",
        }
    }

    /// Inverse of [`ShaderName::key`].
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.key() == key)
    }

    /// Display name.
    pub fn label(self) -> &'static str {
        match self {
            Self::Melt => "Melt",
            Self::Flow => "Flow",
            Self::Balatro => "Balatro",
            Self::Glass => "Psychedelic Glass",
            Self::ChargedCells => "Charged Cells",
        }
    }

    /// Numeric fields present on this variant's bag.
    pub fn params(self) -> &'static [ShaderParam] {
        match self {
            Self::Melt => MeltParams::PARAMS,
            Self::Flow => FlowParams::PARAMS,
            Self::Balatro => BalatroParams::PARAMS,
            Self::Glass => GlassParams::PARAMS,
            Self::ChargedCells => ChargedCellsParams::PARAMS,
        }
    }

    /// `true` when this variant's bag has `param`.
    pub fn has_param(self, param: ShaderParam) -> bool {
        self.params().contains(&param)
    }
}

impl fmt::Display for ShaderName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// One of the three color slots some shaders expose.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ColorSlot {
    /// `color1`.
    Color1,
    /// `color2`.
    Color2,
    /// `color3`.
    Color3,
}

impl ColorSlot {
    /// All slots in order.
    pub const ALL: [ColorSlot; 3] = [ColorSlot::Color1, ColorSlot::Color2, ColorSlot::Color3];

    /// Path segment.
    pub fn key(self) -> &'static str {
        match self {
            Self::Color1 => "color1",
            Self::Color2 => "color2",
            Self::Color3 => "color3",
        }
    }

    /// Inverse of [`ColorSlot::key`].
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.key() == key)
    }

    /// Zero-based slot index.
    pub fn index(self) -> usize {
        match self {
            Self::Color1 => 0,
            Self::Color2 => 1,
            Self::Color3 => 2,
        }
    }
}

/// RGB channel index inside an array-valued color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Channel {
    /// Index 0.
    R,
    /// Index 1.
    G,
    /// Index 2.
    B,
}

impl Channel {
    /// All channels in index order.
    pub const ALL: [Channel; 3] = [Channel::R, Channel::G, Channel::B];

    /// Array index.
    pub fn index(self) -> usize {
        match self {
            Self::R => 0,
            Self::G => 1,
            Self::B => 2,
        }
    }

    /// Inverse of [`Channel::index`].
    pub fn from_index(idx: usize) -> Option<Self> {
        Self::ALL.get(idx).copied()
    }

    /// Read this channel from a color.
    pub fn read(self, c: Rgb) -> f64 {
        match self {
            Self::R => c.r,
            Self::G => c.g,
            Self::B => c.b,
        }
    }

    /// Copy of `c` with this channel replaced.
    pub fn write(self, c: Rgb, v: f64) -> Rgb {
        c.with_channel(self.index(), v)
    }
}

/// Numeric shader field, across all variants.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ShaderParam {
    /// `hue` (degrees).
    Hue,
    /// `saturation`.
    Saturation,
    /// `contrast`.
    Contrast,
    /// `zoom`.
    Zoom,
    /// `speed`.
    Speed,
    /// `detail`.
    Detail,
    /// `velocity`.
    Velocity,
    /// `twist`.
    Twist,
    /// `rgbR`.
    RgbR,
    /// `rgbG`.
    RgbG,
    /// `rgbB`.
    RgbB,
    /// `colorOffset`.
    ColorOffset,
    /// `spinRotation`.
    SpinRotation,
    /// `spinSpeed`.
    SpinSpeed,
    /// `lighting`.
    Lighting,
    /// `spinAmount`.
    SpinAmount,
    /// `pixelFilter`.
    PixelFilter,
    /// `spinEase`.
    SpinEase,
    /// `sides`.
    Sides,
    /// `density`.
    Density,
    /// `glow`.
    Glow,
    /// `scale`.
    Scale,
    /// One channel of `color1`/`color2`/`color3`.
    Color(ColorSlot, Channel),
}

impl ShaderParam {
    const SCALARS: [ShaderParam; 22] = [
        ShaderParam::Hue,
        ShaderParam::Saturation,
        ShaderParam::Contrast,
        ShaderParam::Zoom,
        ShaderParam::Speed,
        ShaderParam::Detail,
        ShaderParam::Velocity,
        ShaderParam::Twist,
        ShaderParam::RgbR,
        ShaderParam::RgbG,
        ShaderParam::RgbB,
        ShaderParam::ColorOffset,
        ShaderParam::SpinRotation,
        ShaderParam::SpinSpeed,
        ShaderParam::Lighting,
        ShaderParam::SpinAmount,
        ShaderParam::PixelFilter,
        ShaderParam::SpinEase,
        ShaderParam::Sides,
        ShaderParam::Density,
        ShaderParam::Glow,
        ShaderParam::Scale,
    ];

    /// Field name for scalar params; `None` for color channels (two segments).
    pub fn key(self) -> Option<&'static str> {
        Some(match self {
            Self::Hue => "hue",
            Self::Saturation => "saturation",
            Self::Contrast => "contrast",
            Self::Zoom => "zoom",
            Self::Speed => "speed",
            Self::Detail => "detail",
            Self::Velocity => "velocity",
            Self::Twist => "twist",
            Self::RgbR => "rgbR",
            Self::RgbG => "rgbG",
            Self::RgbB => "rgbB",
            Self::ColorOffset => "colorOffset",
            Self::SpinRotation => "spinRotation",
            Self::SpinSpeed => "spinSpeed",
            Self::Lighting => "lighting",
            Self::SpinAmount => "spinAmount",
            Self::PixelFilter => "pixelFilter",
            Self::SpinEase => "spinEase",
            Self::Sides => "sides",
            Self::Density => "density",
            Self::Glow => "glow",
            Self::Scale => "scale",
            Self::Color(..) => return None,
        })
    }

    /// Parse a scalar field name.
    pub fn from_key(key: &str) -> Option<Self> {
        Self::SCALARS.into_iter().find(|p| p.key() == Some(key))
    }

    /// Path segments below `shaders.<name>`.
    pub fn segments(self) -> Vec<String> {
        match self {
            Self::Color(slot, ch) => vec![slot.key().to_owned(), ch.index().to_string()],
            other => vec![other.key().unwrap_or_default().to_owned()],
        }
    }
}

/// Read/write access to a bag's numeric fields through [`ShaderParam`].
pub trait ShaderParams {
    /// Fields this bag has.
    const PARAMS: &'static [ShaderParam];

    /// Current value of `param`, or `None` when the bag lacks it (or an optional color is unset).
    fn get(&self, param: ShaderParam) -> Option<f64>;

    /// Set `param`; returns `false` when the bag lacks it.
    fn set(&mut self, param: ShaderParam, value: f64) -> bool;
}

macro_rules! scalar_params {
    (@list [$($p:expr),*] false) => { [$($p),*] };
    (@list [$($p:expr),*] true) => {
        [
            $($p,)*
            ShaderParam::Color(ColorSlot::Color1, Channel::R),
            ShaderParam::Color(ColorSlot::Color1, Channel::G),
            ShaderParam::Color(ColorSlot::Color1, Channel::B),
            ShaderParam::Color(ColorSlot::Color2, Channel::R),
            ShaderParam::Color(ColorSlot::Color2, Channel::G),
            ShaderParam::Color(ColorSlot::Color2, Channel::B),
            ShaderParam::Color(ColorSlot::Color3, Channel::R),
            ShaderParam::Color(ColorSlot::Color3, Channel::G),
            ShaderParam::Color(ColorSlot::Color3, Channel::B),
        ]
    };
    (@get $self:ident, $slot:ident, $ch:ident, false) => {{
        let _ = ($slot, $ch);
        None
    }};
    (@get $self:ident, $slot:ident, $ch:ident, true) => {
        $self.color($slot).map(|c| $ch.read(c))
    };
    (@set $self:ident, $slot:ident, $ch:ident, $value:ident, false) => {{
        let _ = ($slot, $ch, $value);
        false
    }};
    (@set $self:ident, $slot:ident, $ch:ident, $value:ident, true) => {{
        let current = $self.color($slot).unwrap_or(Rgb::BLACK);
        $self.set_color($slot, $ch.write(current, $value));
        true
    }};
    ($ty:ty { $($param:ident => $field:ident),* $(,)? } colors: $colors:tt) => {
        impl ShaderParams for $ty {
            const PARAMS: &'static [ShaderParam] = &scalar_params!(@list [$(ShaderParam::$param),*] $colors);

            fn get(&self, param: ShaderParam) -> Option<f64> {
                match param {
                    $(ShaderParam::$param => Some(self.$field),)*
                    ShaderParam::Color(slot, ch) => scalar_params!(@get self, slot, ch, $colors),
                    #[allow(unreachable_patterns)]
                    _ => None,
                }
            }

            fn set(&mut self, param: ShaderParam, value: f64) -> bool {
                match param {
                    $(ShaderParam::$param => {
                        self.$field = value;
                        true
                    })*
                    ShaderParam::Color(slot, ch) => scalar_params!(@set self, slot, ch, value, $colors),
                    #[allow(unreachable_patterns)]
                    _ => false,
                }
            }
        }
    };
}

/// Melt parameters.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MeltParams {
    /// Hue shift in degrees.
    pub hue: f64,
    /// Saturation multiplier.
    pub saturation: f64,
    /// Contrast multiplier.
    pub contrast: f64,
    /// Field zoom.
    pub zoom: f64,
    /// Flow speed.
    pub speed: f64,
    /// Step detail.
    pub detail: f64,
}

impl Default for MeltParams {
    fn default() -> Self {
        Self {
            hue: 0.0,
            saturation: 1.0,
            contrast: 1.0,
            zoom: 7.6,
            speed: 0.5,
            detail: 0.2,
        }
    }
}

scalar_params!(MeltParams {
    Hue => hue,
    Saturation => saturation,
    Contrast => contrast,
    Zoom => zoom,
    Speed => speed,
    Detail => detail,
} colors: false);

/// Flow parameters.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FlowParams {
    /// Hue shift in degrees.
    pub hue: f64,
    /// Saturation multiplier.
    pub saturation: f64,
    /// Contrast multiplier.
    pub contrast: f64,
    /// Field velocity.
    pub velocity: f64,
    /// Detail.
    pub detail: f64,
    /// Twist.
    pub twist: f64,
    /// Speed (static).
    pub speed: f64,
    /// Red multiplier.
    pub rgb_r: f64,
    /// Green multiplier.
    pub rgb_g: f64,
    /// Blue multiplier.
    pub rgb_b: f64,
    /// Palette offset.
    pub color_offset: f64,
}

impl Default for FlowParams {
    fn default() -> Self {
        Self {
            hue: 0.0,
            saturation: 1.0,
            contrast: 1.0,
            velocity: 0.2,
            detail: 200.0,
            twist: 50.0,
            speed: 2.5,
            rgb_r: 1.0,
            rgb_g: 1.0,
            rgb_b: 1.0,
            color_offset: 0.0,
        }
    }
}

scalar_params!(FlowParams {
    Hue => hue,
    Saturation => saturation,
    Contrast => contrast,
    Velocity => velocity,
    Detail => detail,
    Twist => twist,
    Speed => speed,
    RgbR => rgb_r,
    RgbG => rgb_g,
    RgbB => rgb_b,
    ColorOffset => color_offset,
} colors: false);

/// Balatro parameters.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BalatroParams {
    /// Speed.
    pub speed: f64,
    /// Spin rotation.
    pub spin_rotation: f64,
    /// Spin speed.
    pub spin_speed: f64,
    /// Contrast; not interchangeable with the other shaders' contrast.
    pub contrast: f64,
    /// Lighting.
    pub lighting: f64,
    /// Spin amount.
    pub spin_amount: f64,
    /// Pixel filter.
    pub pixel_filter: f64,
    /// Spin ease.
    pub spin_ease: f64,
    /// Rotate the swirl.
    pub is_rotate: bool,
    /// Optional palette color 1.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color1: Option<Rgb>,
    /// Optional palette color 2.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color2: Option<Rgb>,
    /// Optional palette color 3.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color3: Option<Rgb>,
}

impl Default for BalatroParams {
    fn default() -> Self {
        Self {
            speed: 1.0,
            spin_rotation: -2.0,
            spin_speed: 7.0,
            contrast: 3.5,
            lighting: 0.4,
            spin_amount: 0.25,
            pixel_filter: 745.0,
            spin_ease: 1.0,
            is_rotate: false,
            color1: None,
            color2: None,
            color3: None,
        }
    }
}

/// Shared accessors for bags with three optional palette colors.
macro_rules! palette_accessors {
    ($ty:ty) => {
        impl $ty {
            /// Palette color in `slot`, if set.
            pub fn color(&self, slot: ColorSlot) -> Option<Rgb> {
                match slot {
                    ColorSlot::Color1 => self.color1,
                    ColorSlot::Color2 => self.color2,
                    ColorSlot::Color3 => self.color3,
                }
            }

            /// Set the palette color in `slot`.
            pub fn set_color(&mut self, slot: ColorSlot, c: Rgb) {
                match slot {
                    ColorSlot::Color1 => self.color1 = Some(c),
                    ColorSlot::Color2 => self.color2 = Some(c),
                    ColorSlot::Color3 => self.color3 = Some(c),
                }
            }
        }
    };
}

palette_accessors!(BalatroParams);

scalar_params!(BalatroParams {
    Speed => speed,
    SpinRotation => spin_rotation,
    SpinSpeed => spin_speed,
    Contrast => contrast,
    Lighting => lighting,
    SpinAmount => spin_amount,
    PixelFilter => pixel_filter,
    SpinEase => spin_ease,
} colors: true);

/// Psychedelic glass parameters.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GlassParams {
    /// Speed (static).
    pub speed: f64,
    /// Kaleidoscope sides.
    pub sides: f64,
    /// Hue shift in degrees.
    pub hue: f64,
    /// Saturation multiplier.
    pub saturation: f64,
    /// Contrast multiplier.
    pub contrast: f64,
    /// Pattern density.
    pub density: f64,
    /// Glow strength.
    pub glow: f64,
}

impl Default for GlassParams {
    fn default() -> Self {
        Self {
            speed: 0.8,
            sides: 6.0,
            hue: 0.0,
            saturation: 1.0,
            contrast: 1.0,
            density: 15.0,
            glow: 1.2,
        }
    }
}

scalar_params!(GlassParams {
    Speed => speed,
    Sides => sides,
    Hue => hue,
    Saturation => saturation,
    Contrast => contrast,
    Density => density,
    Glow => glow,
} colors: false);

/// Charged cells parameters.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ChargedCellsParams {
    /// Speed (static).
    pub speed: f64,
    /// Cell scale.
    pub scale: f64,
    /// Hue shift in degrees.
    pub hue: f64,
    /// Saturation multiplier.
    pub saturation: f64,
    /// Contrast multiplier.
    pub contrast: f64,
    /// Optional palette color 1.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color1: Option<Rgb>,
    /// Optional palette color 2.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color2: Option<Rgb>,
    /// Optional palette color 3.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color3: Option<Rgb>,
}

impl Default for ChargedCellsParams {
    fn default() -> Self {
        Self {
            speed: 1.0,
            scale: 5.0,
            hue: 0.0,
            saturation: 1.0,
            contrast: 1.0,
            color1: None,
            color2: None,
            color3: None,
        }
    }
}

palette_accessors!(ChargedCellsParams);

scalar_params!(ChargedCellsParams {
    Speed => speed,
    Scale => scale,
    Hue => hue,
    Saturation => saturation,
    Contrast => contrast,
} colors: true);

/// All shader bags plus the active selector.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ShaderConfigs {
    /// Which bag and GLSL source are live.
    pub active_shader: ShaderName,
    /// Melt bag.
    pub melt: MeltParams,
    /// Flow bag.
    pub flow: FlowParams,
    /// Balatro bag.
    pub balatro: BalatroParams,
    /// Glass bag.
    pub glass: GlassParams,
    /// Charged cells bag.
    pub charged_cells: ChargedCellsParams,
}

impl ShaderConfigs {
    /// Static value of `param` in `shader`'s bag.
    pub fn param(&self, shader: ShaderName, param: ShaderParam) -> Option<f64> {
        match shader {
            ShaderName::Melt => self.melt.get(param),
            ShaderName::Flow => self.flow.get(param),
            ShaderName::Balatro => self.balatro.get(param),
            ShaderName::Glass => self.glass.get(param),
            ShaderName::ChargedCells => self.charged_cells.get(param),
        }
    }

    /// Copy with `param` in `shader`'s bag set to `value`; `None` when the bag lacks it.
    pub fn with_param(&self, shader: ShaderName, param: ShaderParam, value: f64) -> Option<Self> {
        let mut next = self.clone();
        let ok = match shader {
            ShaderName::Melt => next.melt.set(param, value),
            ShaderName::Flow => next.flow.set(param, value),
            ShaderName::Balatro => next.balatro.set(param, value),
            ShaderName::Glass => next.glass.set(param, value),
            ShaderName::ChargedCells => next.charged_cells.set(param, value),
        };
        ok.then_some(next)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/shader.rs"]
mod tests;
