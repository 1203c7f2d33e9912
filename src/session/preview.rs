use crate::eval::text_mask::TextMaskCache;
use crate::eval::uniforms::{FrameUniforms, evaluate_frame};
use crate::foundation::error::TempoResult;
use crate::scene::config::AnimationConfig;
use crate::session::playback::{Playback, PlaybackOpts};

/// Consumer of evaluated frames, e.g. a GPU renderer.
///
/// `push_frame` is called once per tick, in tick order, between `begin` and `end`.
pub trait UniformSink {
    /// Called once before the first frame.
    fn begin(&mut self, config: &AnimationConfig) -> TempoResult<()>;
    /// One evaluated frame. `rebuild_mask` is set when the text mask key changed.
    fn push_frame(&mut self, frame: &FrameUniforms, rebuild_mask: bool) -> TempoResult<()>;
    /// Called once after the last frame.
    fn end(&mut self) -> TempoResult<()>;
}

/// In-memory sink for tests and debugging.
#[derive(Debug, Default)]
pub struct InMemoryUniformSink {
    began: bool,
    ended: bool,
    frames: Vec<FrameUniforms>,
    mask_rebuilds: usize,
}

impl InMemoryUniformSink {
    /// Create a new in-memory sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Frames in push order.
    pub fn frames(&self) -> &[FrameUniforms] {
        &self.frames
    }

    /// How many pushed frames asked for a mask rebuild.
    pub fn mask_rebuilds(&self) -> usize {
        self.mask_rebuilds
    }

    /// `true` after `begin` and before `end`.
    pub fn is_open(&self) -> bool {
        self.began && !self.ended
    }
}

impl UniformSink for InMemoryUniformSink {
    fn begin(&mut self, _config: &AnimationConfig) -> TempoResult<()> {
        self.began = true;
        self.ended = false;
        self.frames.clear();
        self.mask_rebuilds = 0;
        Ok(())
    }

    fn push_frame(&mut self, frame: &FrameUniforms, rebuild_mask: bool) -> TempoResult<()> {
        self.frames.push(frame.clone());
        if rebuild_mask {
            self.mask_rebuilds += 1;
        }
        Ok(())
    }

    fn end(&mut self) -> TempoResult<()> {
        self.ended = true;
        Ok(())
    }
}

/// Live preview driver: the current config, the playback clock, and a sink.
///
/// The config is replaced wholesale between ticks; a tick only reads it.
pub struct PreviewSession<S: UniformSink> {
    config: AnimationConfig,
    playback: Playback,
    mask_cache: TextMaskCache,
    sink: S,
}

impl<S: UniformSink> PreviewSession<S> {
    /// Open a session on `config`, paused at time zero.
    pub fn new(config: AnimationConfig, opts: PlaybackOpts, mut sink: S) -> TempoResult<Self> {
        sink.begin(&config)?;
        let playback = Playback::new(config.duration, opts);
        Ok(Self {
            config,
            playback,
            mask_cache: TextMaskCache::new(),
            sink,
        })
    }

    /// Current config.
    pub fn config(&self) -> &AnimationConfig {
        &self.config
    }

    /// Replace the config; the next tick reads the new one.
    pub fn set_config(&mut self, config: AnimationConfig) {
        self.playback.set_duration(config.duration);
        self.config = config;
    }

    /// Playback clock.
    pub fn playback(&self) -> &Playback {
        &self.playback
    }

    /// Mutable playback clock, for play/pause/scrub.
    pub fn playback_mut(&mut self) -> &mut Playback {
        &mut self.playback
    }

    /// Borrow the sink.
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Evaluate one frame at clock reading `now` and push it to the sink.
    ///
    /// Returns the displayed timeline time, or `None` once the session is closed.
    pub fn tick(&mut self, now: f64) -> TempoResult<Option<f64>> {
        let Some(tick) = self.playback.tick(now) else {
            return Ok(None);
        };
        let frame = evaluate_frame(&self.config, tick.timeline_time, tick.shader_time);
        let rebuild = self.mask_cache.needs_rebuild(frame.text.mask_key);
        self.sink.push_frame(&frame, rebuild)?;
        Ok(Some(tick.timeline_time))
    }

    /// Stop ticking and close the sink, returning it.
    pub fn close(mut self) -> TempoResult<S> {
        self.playback.stop();
        self.sink.end()?;
        Ok(self.sink)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/session/preview.rs"]
mod tests;
