/// Easing functions used to reshape normalized segment progress.
///
/// The easing of a segment is carried by its *destination* keyframe.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Ease {
    /// Identity.
    #[default]
    Linear,
    /// Quadratic ease-in.
    EaseInQuad,
    /// Quadratic ease-out.
    EaseOutQuad,
    /// Quadratic ease-in/out.
    EaseInOutQuad,
}

impl Ease {
    /// Every supported easing, in editor display order.
    pub const ALL: [Ease; 4] = [
        Ease::Linear,
        Ease::EaseInQuad,
        Ease::EaseOutQuad,
        Ease::EaseInOutQuad,
    ];

    /// Apply this easing to normalized progress `x`.
    ///
    /// Inputs are not clamped; callers pass progress already in `[0, 1]`. Squares are written
    /// as products so the exported runtime computes identical bits.
    pub fn apply(self, x: f64) -> f64 {
        match self {
            Self::Linear => x,
            Self::EaseInQuad => x * x,
            Self::EaseOutQuad => 1.0 - (1.0 - x) * (1.0 - x),
            Self::EaseInOutQuad => {
                if x < 0.5 {
                    2.0 * x * x
                } else {
                    let k = -2.0 * x + 2.0;
                    1.0 - (k * k) / 2.0
                }
            }
        }
    }

    /// Wire name used in project files and the exported runtime.
    pub fn key(self) -> &'static str {
        match self {
            Self::Linear => "linear",
            Self::EaseInQuad => "easeInQuad",
            Self::EaseOutQuad => "easeOutQuad",
            Self::EaseInOutQuad => "easeInOutQuad",
        }
    }

    /// Inverse of [`Ease::key`].
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|e| e.key() == key)
    }

    /// Short human-readable name.
    pub fn label(self) -> &'static str {
        match self {
            Self::Linear => "Linear",
            Self::EaseInQuad => "Ease In",
            Self::EaseOutQuad => "Ease Out",
            Self::EaseInOutQuad => "Ease In/Out",
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/ease.rs"]
mod tests;
