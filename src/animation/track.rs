use crate::animation::ease::Ease;
use crate::animation::keyframe::{Keyframe, KeyframePatch};
use crate::foundation::core::{KeyframeId, same_instant};
use crate::foundation::error::{TempoError, TempoResult};

/// Normalized time given to keyframes created by "add keyframe" with no explicit time.
pub const DEFAULT_NEW_KEYFRAME_TIME: f64 = 0.5;

/// An animatable channel bound to one config property.
///
/// `keyframes` is kept sorted by time after every operation and never becomes empty once the
/// track exists. All operations are pure: they return an updated copy.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Track {
    /// Stable identity. Usually equal to `property`; common shader tracks keep their id while
    /// their `property` is rebound.
    pub id: String,
    /// Dotted property path this track drives, e.g. `shaders.melt.zoom`.
    pub property: String,
    /// Display name.
    #[serde(default)]
    pub label: String,
    /// Keyframes sorted by `time`.
    pub keyframes: Vec<Keyframe>,
    /// Soft lower bound for editing widgets.
    #[serde(default)]
    pub min: f64,
    /// Soft upper bound for editing widgets.
    #[serde(default)]
    pub max: f64,
    /// Optional increment hint.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub step: Option<f64>,
}

impl Track {
    /// Create a track holding a single initial keyframe.
    pub fn new(
        id: impl Into<String>,
        property: impl Into<String>,
        label: impl Into<String>,
        min: f64,
        max: f64,
        first: Keyframe,
    ) -> Self {
        Self {
            id: id.into(),
            property: property.into(),
            label: label.into(),
            keyframes: vec![first],
            min,
            max,
            step: None,
        }
    }

    /// Builder-style step hint.
    pub fn with_step(mut self, step: f64) -> Self {
        self.step = Some(step);
        self
    }

    /// First keyframe (by time).
    pub fn first(&self) -> Option<&Keyframe> {
        self.keyframes.first()
    }

    /// Last keyframe (by time).
    pub fn last(&self) -> Option<&Keyframe> {
        self.keyframes.last()
    }

    /// Look up a keyframe by id.
    pub fn keyframe(&self, id: &KeyframeId) -> Option<&Keyframe> {
        self.keyframes.iter().find(|k| &k.id == id)
    }

    /// Look up the first keyframe at `time` (within [`TIME_EPSILON`](crate::TIME_EPSILON)).
    pub fn keyframe_at(&self, time: f64) -> Option<&Keyframe> {
        self.keyframes.iter().find(|k| same_instant(k.time, time))
    }

    /// `false` when removing a keyframe would empty the track.
    pub fn can_remove_keyframe(&self) -> bool {
        self.keyframes.len() > 1
    }

    /// Keyframe the editor proposes on "add": mid-timeline, holding the first key's value (or
    /// the middle of the soft range when there is none).
    pub fn default_new_keyframe(&self) -> Keyframe {
        let value = self
            .first()
            .map(|k| k.value)
            .unwrap_or((self.min + self.max) / 2.0);
        Keyframe::fresh(DEFAULT_NEW_KEYFRAME_TIME, value, Ease::Linear)
    }

    /// Insert a new keyframe with a fresh id.
    ///
    /// No dedup by time: equal-time keyframes are allowed and keep insertion order.
    pub fn with_keyframe_added(&self, time: f64, value: f64, easing: Ease) -> Self {
        self.with_keyframe(Keyframe::fresh(time, value, easing))
    }

    /// Insert an already-built keyframe.
    pub fn with_keyframe(&self, keyframe: Keyframe) -> Self {
        let mut keyframes = self.keyframes.clone();
        keyframes.push(keyframe);
        self.with_keyframes(keyframes)
    }

    /// Apply `patch` to the keyframe with `id`. Unknown ids return an unchanged copy.
    pub fn with_keyframe_updated(&self, id: &KeyframeId, patch: KeyframePatch) -> Self {
        let keyframes = self
            .keyframes
            .iter()
            .map(|k| if &k.id == id { k.patched(&patch) } else { k.clone() })
            .collect();
        self.with_keyframes(keyframes)
    }

    /// Apply `patch` to every keyframe at `time` (within epsilon).
    pub fn with_keyframe_updated_at(&self, time: f64, patch: KeyframePatch) -> Self {
        let keyframes = self
            .keyframes
            .iter()
            .map(|k| {
                if same_instant(k.time, time) {
                    k.patched(&patch)
                } else {
                    k.clone()
                }
            })
            .collect();
        self.with_keyframes(keyframes)
    }

    /// Remove the keyframe with `id`. Rejected (unchanged copy) when it is the last one.
    pub fn with_keyframe_removed(&self, id: &KeyframeId) -> Self {
        if !self.can_remove_keyframe() {
            return self.clone();
        }
        let keyframes = self
            .keyframes
            .iter()
            .filter(|k| &k.id != id)
            .cloned()
            .collect();
        self.with_keyframes(keyframes)
    }

    /// Remove every keyframe at `time` (within epsilon), unless that would empty the track.
    pub fn with_keyframe_removed_at(&self, time: f64) -> Self {
        let keyframes: Vec<Keyframe> = self
            .keyframes
            .iter()
            .filter(|k| !same_instant(k.time, time))
            .cloned()
            .collect();
        if keyframes.is_empty() {
            return self.clone();
        }
        self.with_keyframes(keyframes)
    }

    /// Rebind the track to another property path.
    pub fn with_property(&self, property: impl Into<String>) -> Self {
        Self {
            property: property.into(),
            ..self.clone()
        }
    }

    fn with_keyframes(&self, mut keyframes: Vec<Keyframe>) -> Self {
        sort_keyframes(&mut keyframes);
        Self {
            keyframes,
            ..self.clone()
        }
    }

    /// Validate structural invariants. Used at the import boundary.
    pub fn validate(&self) -> TempoResult<()> {
        if self.property.trim().is_empty() {
            return Err(TempoError::validation(format!(
                "track '{}' has an empty property path",
                self.id
            )));
        }
        if self.keyframes.is_empty() {
            return Err(TempoError::validation(format!(
                "track '{}' must have at least one keyframe",
                self.id
            )));
        }
        for k in &self.keyframes {
            if !k.value.is_finite() {
                return Err(TempoError::validation(format!(
                    "track '{}' keyframe '{}' has a non-finite value",
                    self.id, k.id
                )));
            }
            if !(0.0..=1.0).contains(&k.time) {
                return Err(TempoError::validation(format!(
                    "track '{}' keyframe '{}' time {} is outside [0, 1]",
                    self.id, k.id, k.time
                )));
            }
        }
        if !self.keyframes.windows(2).all(|w| w[0].time <= w[1].time) {
            return Err(TempoError::validation(format!(
                "track '{}' keyframes must be sorted by time",
                self.id
            )));
        }
        Ok(())
    }
}

/// Stable ascending sort by time; equal times keep insertion order.
pub fn sort_keyframes(keyframes: &mut [Keyframe]) {
    keyframes.sort_by(|a, b| a.time.total_cmp(&b.time));
}

/// Convert user-entered absolute seconds into normalized keyframe time.
///
/// A non-positive or NaN `duration` maps everything to `0.0`.
pub fn retime(seconds: f64, duration: f64) -> f64 {
    if !(duration > 0.0) {
        return 0.0;
    }
    seconds.clamp(0.0, duration) / duration
}

/// Parse a numeric text field. Non-numeric or non-finite input yields `None` so the caller
/// keeps its last valid value.
pub fn parse_number(input: &str) -> Option<f64> {
    input.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

/// [`parse_number`] followed by [`retime`].
pub fn parse_seconds(input: &str, duration: f64) -> Option<f64> {
    parse_number(input).map(|s| retime(s, duration))
}

#[cfg(test)]
#[path = "../../tests/unit/animation/track.rs"]
mod tests;
