use crate::animation::sample::sample;
use crate::foundation::core::Rgb;
use crate::scene::config::AnimationConfig;
use crate::scene::property::{PropertyPath, default_for};
use crate::scene::shader::{Channel, ColorSlot, ShaderName, ShaderParam};

/// Samples a config at one timeline instant.
///
/// Every lookup defaults to the field's static value (or 0 when it has none), the same rule the
/// export runtime applies.
#[derive(Clone, Copy, Debug)]
pub struct Sampler<'a> {
    config: &'a AnimationConfig,
    time: f64,
}

impl<'a> Sampler<'a> {
    /// Sampler for `config` at `time` seconds into the loop.
    pub fn new(config: &'a AnimationConfig, time: f64) -> Self {
        Self { config, time }
    }

    /// Timeline time in seconds.
    pub fn time(&self) -> f64 {
        self.time
    }

    /// Animated value of `path`.
    pub fn value(&self, path: PropertyPath) -> f64 {
        let default = path.resolve(self.config).unwrap_or(0.0);
        sample(
            &self.config.tracks,
            &path.to_dotted(),
            self.time,
            self.config.duration,
            default,
        )
    }

    /// Animated value of a string path (either dialect for the default, dotted for the track).
    pub fn value_of(&self, path: &str) -> f64 {
        sample(
            &self.config.tracks,
            path,
            self.time,
            self.config.duration,
            default_for(self.config, path),
        )
    }

    /// Animated palette color of `shader`.
    pub fn palette(&self, shader: ShaderName, slot: ColorSlot) -> Rgb {
        let [r, g, b] = Channel::ALL
            .map(|ch| self.value(PropertyPath::Shader(shader, ShaderParam::Color(slot, ch))));
        Rgb::new(r, g, b)
    }

    /// Animated background color.
    pub fn background(&self) -> Rgb {
        let [r, g, b] = Channel::ALL.map(|ch| self.value(PropertyPath::Background(ch)));
        Rgb::new(r, g, b)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/eval/sampler.rs"]
mod tests;
