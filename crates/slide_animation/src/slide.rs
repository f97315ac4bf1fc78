//! Single slide animation
//!
//! Moves a view horizontally between the container origin and the
//! container's trailing edge. Presenting slides the incoming view in from
//! `container.max_x()` to 0; dismissing slides the outgoing view from 0 out
//! to `container.max_x()`.

use slide_core::{Point, Rect, TransitionDirection, TransitionSpec};

use crate::easing::Easing;
use crate::values::Interpolate;

/// Progress within this distance of the target counts as arrived
const SETTLE_EPSILON: f32 = 1e-4;

/// What is currently advancing a slide's progress
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SlideDrive {
    /// Progress advances with elapsed time toward 1.0
    Timed,
    /// Progress is set directly; ticks leave it alone
    Interactive,
    /// Progress animates toward `target` (1.0 to finish, 0.0 to cancel)
    Settling { target: f32 },
}

/// A one-shot slide between two origins
#[derive(Clone, Debug)]
pub struct SlideAnimation {
    direction: TransitionDirection,
    duration_ms: f32,
    from: Point,
    to: Point,
    easing: Easing,
    progress: f32,
    drive: SlideDrive,
}

impl SlideAnimation {
    /// Create a slide for `spec` inside `container`
    pub fn new(spec: &TransitionSpec, container: Rect, easing: Easing, drive: SlideDrive) -> Self {
        let offscreen = Point::new(container.max_x(), 0.0);
        let (from, to) = match spec.direction() {
            TransitionDirection::Presenting => (offscreen, Point::ZERO),
            TransitionDirection::Dismissing => (Point::ZERO, offscreen),
        };

        Self {
            direction: spec.direction(),
            duration_ms: spec.duration_ms(),
            from,
            to,
            easing,
            progress: 0.0,
            drive,
        }
    }

    pub fn direction(&self) -> TransitionDirection {
        self.direction
    }

    pub fn drive(&self) -> SlideDrive {
        self.drive
    }

    /// Linear progress (0.0 to 1.0)
    pub fn progress(&self) -> f32 {
        self.progress
    }

    /// Current origin of the moving view
    pub fn origin(&self) -> Point {
        self.from.lerp(&self.to, self.easing.apply(self.progress))
    }

    /// Set progress directly (interactive drive only; clamped to 0.0..=1.0)
    pub(crate) fn set_progress(&mut self, fraction: f32) {
        self.progress = if fraction.is_nan() {
            0.0
        } else {
            fraction.clamp(0.0, 1.0)
        };
    }

    /// Start animating toward `target` from the current progress
    pub(crate) fn settle_toward(&mut self, target: f32) {
        self.drive = SlideDrive::Settling { target };
    }

    /// Advance by `dt_ms`
    ///
    /// Returns `Some(was_cancelled)` on the tick the slide completes.
    pub fn tick(&mut self, dt_ms: f32) -> Option<bool> {
        let dt_ms = dt_ms.max(0.0);
        let step = dt_ms / self.duration_ms;

        match self.drive {
            SlideDrive::Interactive => None,
            SlideDrive::Timed => {
                self.progress = (self.progress + step).min(1.0);
                if self.progress.approx_eq(&1.0, SETTLE_EPSILON) {
                    self.progress = 1.0;
                    Some(false)
                } else {
                    None
                }
            }
            SlideDrive::Settling { target } => {
                if self.progress < target {
                    self.progress = (self.progress + step).min(target);
                } else if self.progress > target {
                    self.progress = (self.progress - step).max(target);
                }
                if self.progress.approx_eq(&target, SETTLE_EPSILON) {
                    self.progress = target;
                    Some(target <= 0.0)
                } else {
                    None
                }
            }
        }
    }
}
