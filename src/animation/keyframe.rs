use crate::animation::ease::Ease;
use crate::foundation::core::KeyframeId;

/// One sample point on a [`Track`](crate::Track).
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Keyframe {
    /// Stable identifier.
    #[serde(default = "KeyframeId::generate")]
    pub id: KeyframeId,
    /// Fraction of the total duration, in `[0, 1]`.
    pub time: f64,
    /// Animated scalar at `time`.
    pub value: f64,
    /// Easing applied on the segment that ends at this keyframe.
    #[serde(default)]
    pub easing: Ease,
}

impl Keyframe {
    /// Build a keyframe with an explicit id.
    pub fn new(id: impl Into<KeyframeId>, time: f64, value: f64, easing: Ease) -> Self {
        Self {
            id: id.into(),
            time,
            value,
            easing,
        }
    }

    /// Build a linear keyframe with an explicit id.
    pub fn linear(id: impl Into<KeyframeId>, time: f64, value: f64) -> Self {
        Self::new(id, time, value, Ease::Linear)
    }

    /// Build a keyframe with a freshly generated id.
    pub fn fresh(time: f64, value: f64, easing: Ease) -> Self {
        Self::new(KeyframeId::generate(), time, value, easing)
    }

    /// Copy with the patch applied. Absent fields keep their value.
    pub fn patched(&self, patch: &KeyframePatch) -> Self {
        Self {
            id: self.id.clone(),
            time: patch.time.unwrap_or(self.time),
            value: patch.value.unwrap_or(self.value),
            easing: patch.easing.unwrap_or(self.easing),
        }
    }
}

/// Partial keyframe edit.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct KeyframePatch {
    /// New normalized time.
    pub time: Option<f64>,
    /// New value.
    pub value: Option<f64>,
    /// New easing.
    pub easing: Option<Ease>,
}

impl KeyframePatch {
    /// Patch only the time.
    pub fn time(time: f64) -> Self {
        Self {
            time: Some(time),
            ..Self::default()
        }
    }

    /// Patch only the value.
    pub fn value(value: f64) -> Self {
        Self {
            value: Some(value),
            ..Self::default()
        }
    }

    /// Patch only the easing.
    pub fn easing(easing: Ease) -> Self {
        Self {
            easing: Some(easing),
            ..Self::default()
        }
    }

    /// `true` when the patch moves the keyframe in time.
    pub fn moves(&self) -> bool {
        self.time.is_some()
    }
}
