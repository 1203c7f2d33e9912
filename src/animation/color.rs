//! Grouped RGB view over three scalar channel tracks.
//!
//! A color group is three tracks bound to `<prefix>.0`, `<prefix>.1` and `<prefix>.2`. The view
//! presents them as one row of color stops and writes edits back to all three at once.

use crate::animation::ease::Ease;
use crate::animation::keyframe::{Keyframe, KeyframePatch};
use crate::animation::track::{DEFAULT_NEW_KEYFRAME_TIME, Track};
use crate::foundation::core::{KeyframeId, Rgb, hex_to_rgb};

/// Color assigned to stops created by [`ColorTrackView::add_stop`] with no explicit color.
pub const DEFAULT_STOP_COLOR: Rgb = Rgb::new(0.5, 0.5, 0.5);

/// A known three-track color group.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ColorGroup {
    /// Property prefix shared by the channel tracks.
    pub prefix: &'static str,
    /// Display name.
    pub label: &'static str,
}

impl ColorGroup {
    /// Every color group the default project defines.
    pub const ALL: [ColorGroup; 7] = [
        ColorGroup::new("background.color", "Background Color"),
        ColorGroup::new("shaders.balatro.color1", "Balatro Color 1"),
        ColorGroup::new("shaders.balatro.color2", "Balatro Color 2"),
        ColorGroup::new("shaders.balatro.color3", "Balatro Color 3"),
        ColorGroup::new("shaders.chargedCells.color1", "Cells Color 1"),
        ColorGroup::new("shaders.chargedCells.color2", "Cells Color 2"),
        ColorGroup::new("shaders.chargedCells.color3", "Cells Color 3"),
    ];

    const fn new(prefix: &'static str, label: &'static str) -> Self {
        Self { prefix, label }
    }

    /// Property path of channel `idx` (0..3).
    pub fn channel_property(&self, idx: usize) -> String {
        channel_property(self.prefix, idx)
    }

    /// `true` when `property` is one of this group's channel paths.
    pub fn owns(&self, property: &str) -> bool {
        property
            .strip_prefix(self.prefix)
            .is_some_and(|rest| matches!(rest, ".0" | ".1" | ".2"))
    }
}

fn channel_property(prefix: &str, idx: usize) -> String {
    format!("{prefix}.{idx}")
}

/// One combined stop: the three channel values at a shared time.
#[derive(Clone, Debug, PartialEq)]
pub struct ColorStop {
    /// Normalized time.
    pub time: f64,
    /// Combined color; a channel with no keyframe at `time` reads as 0.
    pub color: Rgb,
    /// `#rrggbb` form of `color`.
    pub hex: String,
    /// Red channel keyframe, if any.
    pub r_id: Option<KeyframeId>,
    /// Green channel keyframe, if any.
    pub g_id: Option<KeyframeId>,
    /// Blue channel keyframe, if any.
    pub b_id: Option<KeyframeId>,
}

/// Borrowed view over the three channel tracks of one group.
#[derive(Clone, Copy, Debug)]
pub struct ColorTrackView<'a> {
    /// Red channel track (`<prefix>.0`).
    pub r: &'a Track,
    /// Green channel track (`<prefix>.1`).
    pub g: &'a Track,
    /// Blue channel track (`<prefix>.2`).
    pub b: &'a Track,
}

impl<'a> ColorTrackView<'a> {
    /// Locate the channel tracks for `prefix`; `None` unless all three exist.
    pub fn from_tracks(tracks: &'a [Track], prefix: &str) -> Option<Self> {
        let find = |idx| {
            let property = channel_property(prefix, idx);
            tracks.iter().find(|t| t.property == property)
        };
        Some(Self {
            r: find(0)?,
            g: find(1)?,
            b: find(2)?,
        })
    }

    fn channels(&self) -> [&'a Track; 3] {
        [self.r, self.g, self.b]
    }

    /// `false` when removing a stop would empty the red channel.
    pub fn can_remove_stop(&self) -> bool {
        self.r.keyframes.len() > 1
    }

    /// One stop per distinct keyframe time across the three channels, ordered by time.
    ///
    /// Times are grouped by exact equality; edits then match within the time epsilon.
    pub fn stops(&self) -> Vec<ColorStop> {
        let mut times: Vec<f64> = Vec::new();
        for track in self.channels() {
            for k in &track.keyframes {
                if !times.contains(&k.time) {
                    times.push(k.time);
                }
            }
        }
        times.sort_by(f64::total_cmp);

        times
            .into_iter()
            .map(|time| {
                let [r, g, b] = self
                    .channels()
                    .map(|t| t.keyframes.iter().rev().find(|k| k.time == time));
                let color = Rgb::new(
                    r.map_or(0.0, |k| k.value),
                    g.map_or(0.0, |k| k.value),
                    b.map_or(0.0, |k| k.value),
                );
                ColorStop {
                    time,
                    color,
                    hex: color.to_hex(),
                    r_id: r.map(|k| k.id.clone()),
                    g_id: g.map(|k| k.id.clone()),
                    b_id: b.map(|k| k.id.clone()),
                }
            })
            .collect()
    }

    /// Write `color` into the three channel keyframes at `time`.
    pub fn set_color_at(&self, tracks: &[Track], time: f64, color: Rgb) -> Vec<Track> {
        self.rewrite(tracks, |idx, track| {
            let value = color.channel(idx).unwrap_or_default();
            track.with_keyframe_updated_at(time, KeyframePatch::value(value))
        })
    }

    /// [`ColorTrackView::set_color_at`] from a hex string; invalid hex leaves `tracks` as is.
    pub fn set_hex_at(&self, tracks: &[Track], time: f64, hex: &str) -> Vec<Track> {
        match hex_to_rgb(hex) {
            Some(color) => self.set_color_at(tracks, time, color),
            None => tracks.to_vec(),
        }
    }

    /// Move the stop at `old_time` to `new_time` (clamped to `[0, 1]`) on all three channels.
    pub fn move_time(&self, tracks: &[Track], old_time: f64, new_time: f64) -> Vec<Track> {
        let new_time = new_time.clamp(0.0, 1.0);
        self.rewrite(tracks, |_, track| {
            track.with_keyframe_updated_at(old_time, KeyframePatch::time(new_time))
        })
    }

    /// Insert a linear stop on all three channels with fresh keyframe ids.
    pub fn add_stop(&self, tracks: &[Track], time: f64, color: Rgb) -> Vec<Track> {
        self.rewrite(tracks, |idx, track| {
            let value = color.channel(idx).unwrap_or_default();
            track.with_keyframe(Keyframe::fresh(time, value, Ease::Linear))
        })
    }

    /// [`ColorTrackView::add_stop`] with the editor defaults (mid-timeline, grey).
    pub fn add_default_stop(&self, tracks: &[Track]) -> Vec<Track> {
        self.add_stop(tracks, DEFAULT_NEW_KEYFRAME_TIME, DEFAULT_STOP_COLOR)
    }

    /// Remove the stop at `time` from all three channels. Rejected when the red channel has
    /// only one keyframe.
    pub fn remove_stop(&self, tracks: &[Track], time: f64) -> Vec<Track> {
        if !self.can_remove_stop() {
            return tracks.to_vec();
        }
        self.rewrite(tracks, |_, track| track.with_keyframe_removed_at(time))
    }

    fn rewrite(&self, tracks: &[Track], f: impl Fn(usize, &Track) -> Track) -> Vec<Track> {
        let ids = self.channels().map(|t| t.id.as_str());
        tracks
            .iter()
            .map(|t| match ids.iter().position(|id| *id == t.id) {
                Some(idx) => f(idx, t),
                None => t.clone(),
            })
            .collect()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/color.rs"]
mod tests;
