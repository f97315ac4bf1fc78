//! Transition requests and the percent-driven animator seam
//!
//! A [`TransitionSpec`] describes one slide (direction + duration). The
//! [`InteractiveTransition`] trait is implemented by animators that can have
//! their progress set directly by a gesture rather than by elapsed time.

use crate::error::{Result, TransitionError};

/// Which way a screen transition moves
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum TransitionDirection {
    /// The incoming screen slides in from the trailing edge
    Presenting,
    /// The outgoing screen slides out to the trailing edge
    Dismissing,
}

/// How a transition's progress advances
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum TransitionMode {
    /// Progress advances with time over the full duration
    #[default]
    Animated,
    /// Progress is set directly by a gesture until it is finished or cancelled
    Interactive,
}

/// A single transition request
///
/// Created per request and consumed by the animator that plays it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TransitionSpec {
    direction: TransitionDirection,
    duration_secs: f32,
}

impl TransitionSpec {
    /// Default slide duration in seconds
    pub const DEFAULT_DURATION_SECS: f32 = 1.0;

    /// Create a transition spec, rejecting non-positive or non-finite durations
    pub fn new(direction: TransitionDirection, duration_secs: f32) -> Result<Self> {
        if !duration_secs.is_finite() || duration_secs <= 0.0 {
            return Err(TransitionError::InvalidDuration(duration_secs));
        }
        Ok(Self {
            direction,
            duration_secs,
        })
    }

    pub fn direction(&self) -> TransitionDirection {
        self.direction
    }

    pub fn duration_secs(&self) -> f32 {
        self.duration_secs
    }

    pub fn duration_ms(&self) -> f32 {
        self.duration_secs * 1000.0
    }
}

/// Mapping from a signed gesture delta to progress
///
/// Presenting and dismissing gestures may count motion in opposite
/// directions; motion against the convention contributes no progress.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum SignConvention {
    /// Motion in either direction counts (magnitude only)
    #[default]
    Any,
    /// Only positive deltas (rightward / downward) count
    Positive,
    /// Only negative deltas (leftward / upward) count
    Negative,
}

impl SignConvention {
    /// Apply the convention to a raw delta, zeroing motion that runs against it
    pub fn apply(self, raw_delta: f32) -> f32 {
        if raw_delta.is_nan() {
            return 0.0;
        }
        match self {
            SignConvention::Any => raw_delta,
            SignConvention::Positive => raw_delta.max(0.0),
            SignConvention::Negative => raw_delta.min(0.0),
        }
    }
}

/// An animator whose progress can be driven directly
///
/// The interactive controller pushes every fraction through
/// `update_progress`, then calls exactly one of `finish` or `cancel`.
pub trait InteractiveTransition {
    /// Set the transition's progress (0.0 to 1.0)
    fn update_progress(&mut self, fraction: f32) -> Result<()>;

    /// Play the remainder of the transition to completion
    fn finish(&mut self) -> Result<()>;

    /// Reverse the transition back to its starting point
    fn cancel(&mut self) -> Result<()>;
}

impl<T: InteractiveTransition + ?Sized> InteractiveTransition for &mut T {
    fn update_progress(&mut self, fraction: f32) -> Result<()> {
        (**self).update_progress(fraction)
    }

    fn finish(&mut self) -> Result<()> {
        (**self).finish()
    }

    fn cancel(&mut self) -> Result<()> {
        (**self).cancel()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spec_rejects_bad_durations() {
        let presenting = TransitionDirection::Presenting;
        assert_eq!(
            TransitionSpec::new(presenting, 0.0),
            Err(TransitionError::InvalidDuration(0.0))
        );
        assert!(TransitionSpec::new(presenting, -1.0).is_err());
        assert!(TransitionSpec::new(presenting, f32::INFINITY).is_err());
        assert!(TransitionSpec::new(presenting, f32::NAN).is_err());

        let spec = TransitionSpec::new(presenting, 0.25).unwrap();
        assert_eq!(spec.duration_ms(), 250.0);
        assert_eq!(spec.direction(), presenting);
    }

    #[test]
    fn test_sign_conventions() {
        assert_eq!(SignConvention::Any.apply(-30.0), -30.0);
        assert_eq!(SignConvention::Positive.apply(-30.0), 0.0);
        assert_eq!(SignConvention::Positive.apply(30.0), 30.0);
        assert_eq!(SignConvention::Negative.apply(30.0), 0.0);
        assert_eq!(SignConvention::Negative.apply(-30.0), -30.0);
        assert_eq!(SignConvention::Any.apply(f32::NAN), 0.0);
    }
}
