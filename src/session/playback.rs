/// Keyboard nudge applied by [`Playback::step_scrub`], in seconds.
pub const SCRUB_STEP: f64 = 0.01;

/// Options controlling the playback clock.
#[derive(Clone, Debug, PartialEq)]
pub struct PlaybackOpts {
    /// Amount the free-running shader clock advances per tick, in seconds.
    pub shader_time_step: f64,
}

impl Default for PlaybackOpts {
    fn default() -> Self {
        Self {
            shader_time_step: 0.016,
        }
    }
}

/// Which clock drives the timeline.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PlaybackMode {
    /// Timeline time advances from `started_at` and wraps at the duration.
    Playing {
        /// Clock reading (seconds) at which loop time was zero.
        started_at: f64,
    },
    /// Timeline time is pinned to the scrubber.
    Paused,
}

/// Times produced by one tick.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Tick {
    /// Loop-relative timeline time, seconds.
    pub timeline_time: f64,
    /// Shader clock, seconds.
    pub shader_time: f64,
}

/// Playing/Paused clock for the preview loop.
///
/// One [`Playback::tick`] per frame serves both modes. The caller supplies clock readings in
/// seconds, so the clock itself never blocks or reads system time.
#[derive(Clone, Debug)]
pub struct Playback {
    mode: PlaybackMode,
    time: f64,
    shader_time: f64,
    duration: f64,
    active: bool,
    opts: PlaybackOpts,
}

impl Playback {
    /// Paused at time zero.
    pub fn new(duration: f64, opts: PlaybackOpts) -> Self {
        Self {
            mode: PlaybackMode::Paused,
            time: 0.0,
            shader_time: 0.0,
            duration,
            active: true,
            opts,
        }
    }

    /// Current mode.
    pub fn mode(&self) -> PlaybackMode {
        self.mode
    }

    /// `true` while playing.
    pub fn is_playing(&self) -> bool {
        matches!(self.mode, PlaybackMode::Playing { .. })
    }

    /// `false` once [`Playback::stop`] has been called.
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Last displayed timeline time.
    pub fn time(&self) -> f64 {
        self.time
    }

    /// Shader clock.
    pub fn shader_time(&self) -> f64 {
        self.shader_time
    }

    /// Loop length.
    pub fn duration(&self) -> f64 {
        self.duration
    }

    /// Adopt a new loop length, clamping the pinned time into it.
    pub fn set_duration(&mut self, duration: f64) {
        if duration.is_finite() && duration > 0.0 {
            self.duration = duration;
            self.time = self.time.clamp(0.0, duration);
        }
    }

    /// Start playing from the last displayed time.
    pub fn play(&mut self, now: f64) {
        if !self.active || self.is_playing() {
            return;
        }
        tracing::debug!(from = self.time, "play");
        self.mode = PlaybackMode::Playing {
            started_at: now - self.time,
        };
    }

    /// Pin the timeline at the last displayed time.
    pub fn pause(&mut self) {
        if self.is_playing() {
            tracing::debug!(at = self.time, "pause");
        }
        self.mode = PlaybackMode::Paused;
    }

    /// Toggle between playing and paused.
    pub fn toggle(&mut self, now: f64) {
        if self.is_playing() {
            self.pause();
        } else {
            self.play(now);
        }
    }

    /// Move the scrubber. Pauses playback; the value is clamped to `[0, duration]`.
    pub fn scrub(&mut self, seconds: f64) {
        self.pause();
        if seconds.is_finite() {
            self.time = seconds.clamp(0.0, self.duration);
        }
    }

    /// Nudge the scrubber by [`SCRUB_STEP`] in the sign of `direction`.
    pub fn step_scrub(&mut self, direction: i32) {
        let delta = f64::from(direction.signum()) * SCRUB_STEP;
        self.scrub(self.time + delta);
    }

    /// End ticking for good; later ticks return `None`.
    pub fn stop(&mut self) {
        self.mode = PlaybackMode::Paused;
        self.active = false;
    }

    /// Advance one frame.
    ///
    /// Playing: timeline time is `(now - started_at) mod duration`. Paused: it stays pinned. The
    /// shader clock advances in both modes.
    pub fn tick(&mut self, now: f64) -> Option<Tick> {
        if !self.active {
            return None;
        }
        if let PlaybackMode::Playing { started_at } = self.mode {
            self.time = (now - started_at).rem_euclid(self.duration);
        }
        self.shader_time += self.opts.shader_time_step;
        Some(Tick {
            timeline_time: self.time,
            shader_time: self.shader_time,
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/session/playback.rs"]
mod tests;
