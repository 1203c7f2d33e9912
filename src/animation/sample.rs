//! Time-to-value interpolation.
//!
//! These functions are the single source of truth for animated values. The live preview calls
//! them every tick and the standalone export carries a line-for-line port, so any change here
//! must be mirrored in `assets/export/runtime.js`.

use crate::animation::keyframe::Keyframe;
use crate::animation::track::Track;

/// Sample the track bound to `property` at absolute `query_time` seconds.
///
/// Returns `default` when no track is bound to `property` or the bound track is empty.
/// `duration` is assumed `> 0`.
pub fn sample(tracks: &[Track], property: &str, query_time: f64, duration: f64, default: f64) -> f64 {
    match find_track(tracks, property) {
        Some(track) => sample_track(track, query_time, duration, default),
        None => default,
    }
}

/// First track whose `property` equals `property`.
pub fn find_track<'a>(tracks: &'a [Track], property: &str) -> Option<&'a Track> {
    tracks.iter().find(|t| t.property == property)
}

/// Sample one track at absolute `query_time` seconds.
pub fn sample_track(track: &Track, query_time: f64, duration: f64, default: f64) -> f64 {
    sample_keyframes(&track.keyframes, query_time / duration, default)
}

/// Sample sorted keyframes at normalized `progress`.
///
/// Holds the first value before the first key and the last value after the last key; never
/// extrapolates. Coincident adjacent keys resolve to the earlier one.
pub fn sample_keyframes(keys: &[Keyframe], progress: f64, default: f64) -> f64 {
    let (Some(first), Some(last)) = (keys.first(), keys.last()) else {
        return default;
    };
    if keys.len() == 1 || progress <= first.time {
        return first.value;
    }
    if progress >= last.time {
        return last.value;
    }

    // First adjacent pair bracketing `progress`. Only a NaN progress can miss every pair.
    let Some((p1, p2)) = keys
        .windows(2)
        .map(|w| (&w[0], &w[1]))
        .find(|(a, b)| progress >= a.time && progress <= b.time)
    else {
        return first.value;
    };

    let span = p2.time - p1.time;
    if span == 0.0 {
        return p1.value;
    }

    let local = (progress - p1.time) / span;
    let eased = p2.easing.apply(local);
    p1.value + (p2.value - p1.value) * eased
}

impl Track {
    /// Sample this track at absolute `query_time` seconds.
    pub fn sample(&self, query_time: f64, duration: f64, default: f64) -> f64 {
        sample_track(self, query_time, duration, default)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/sample.rs"]
mod tests;
