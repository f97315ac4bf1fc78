//! Easing functions
//!
//! Timing curves mapping linear progress (0.0 to 1.0) to eased progress.

/// Standard easing curves
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Easing {
    /// Constant rate
    Linear,
    /// Cubic acceleration from zero velocity
    EaseIn,
    /// Cubic deceleration to zero velocity
    EaseOut,
    /// Cubic acceleration then deceleration
    #[default]
    EaseInOut,
}

impl Easing {
    /// Apply the curve to a progress value (clamped to 0.0..=1.0)
    pub fn apply(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::EaseIn => t * t * t,
            Easing::EaseOut => {
                let inv = 1.0 - t;
                1.0 - inv * inv * inv
            }
            Easing::EaseInOut => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    let inv = -2.0 * t + 2.0;
                    1.0 - inv * inv * inv / 2.0
                }
            }
        }
    }
}
