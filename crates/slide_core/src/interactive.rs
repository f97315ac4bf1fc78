//! Interactive progress controller
//!
//! Tracks a gesture-driven completion fraction and makes the
//! commit-or-cancel decision when the gesture ends.
//!
//! ```text
//!            begin()             end() / force_cancel()
//!   Idle ─────────────▶ Tracking ──────────────────────▶ Committing | Cancelling ──▶ Idle
//!                        │    ▲
//!                        └────┘ update()
//! ```
//!
//! The controller never holds a reference to the animator it drives. Each
//! call that needs one takes it as a parameter, and the session is
//! identified to the rest of the app by its [`SessionId`].

use std::fmt;

use tracing::{debug, trace, warn};

use crate::error::{Result, TransitionError};
use crate::transition::{
    InteractiveTransition, SignConvention, TransitionDirection, TransitionMode,
};

/// Fraction above which an ended gesture commits the transition
///
/// Strictly greater: a gesture ending at exactly half way cancels.
pub const COMMIT_THRESHOLD: f32 = 0.5;

/// Map a raw gesture delta onto a completion fraction
///
/// Returns `clamp(|raw_delta| / axis_extent, 0, 1)`. A NaN delta or an
/// extent that is not positive and finite yields 0.
pub fn fraction(raw_delta: f32, axis_extent: f32) -> f32 {
    if raw_delta.is_nan() || !axis_extent.is_finite() || axis_extent <= 0.0 {
        return 0.0;
    }
    (raw_delta.abs() / axis_extent).clamp(0.0, 1.0)
}

/// Identifier of one interactive session
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SessionId(u64);

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "session#{}", self.0)
    }
}

/// Outcome of an ended gesture
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Decision {
    /// Play the transition to completion
    Commit,
    /// Reverse the transition to where it started
    Cancel,
}

/// Observable controller phase
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Tracking,
    Committing,
    Cancelling,
}

/// A live gesture-driven transition
#[derive(Clone, Debug, PartialEq)]
pub struct InteractiveSession {
    id: SessionId,
    direction: TransitionDirection,
    mode: TransitionMode,
    fraction: f32,
}

impl InteractiveSession {
    pub fn id(&self) -> SessionId {
        self.id
    }

    pub fn direction(&self) -> TransitionDirection {
        self.direction
    }

    pub fn mode(&self) -> TransitionMode {
        self.mode
    }

    /// Current completion fraction (0.0 to 1.0)
    pub fn fraction(&self) -> f32 {
        self.fraction
    }
}

#[derive(Debug)]
enum ControllerState {
    Idle,
    Tracking(InteractiveSession),
    Settling(SessionId, Decision),
}

/// Gesture-driven transition state machine
///
/// Owned by exactly one screen. At most one session is live at a time.
#[derive(Debug)]
pub struct InteractiveController {
    state: ControllerState,
    present_convention: SignConvention,
    dismiss_convention: SignConvention,
    next_session: u64,
}

impl InteractiveController {
    /// Create a controller that counts motion in either direction
    pub fn new() -> Self {
        Self {
            state: ControllerState::Idle,
            present_convention: SignConvention::Any,
            dismiss_convention: SignConvention::Any,
            next_session: 1,
        }
    }

    /// Set the sign convention used for each transition direction
    pub fn with_conventions(mut self, present: SignConvention, dismiss: SignConvention) -> Self {
        self.present_convention = present;
        self.dismiss_convention = dismiss;
        self
    }

    /// Sign convention applied to deltas for the given direction
    fn convention_for(&self, direction: TransitionDirection) -> SignConvention {
        match direction {
            TransitionDirection::Presenting => self.present_convention,
            TransitionDirection::Dismissing => self.dismiss_convention,
        }
    }

    pub fn phase(&self) -> Phase {
        match &self.state {
            ControllerState::Idle => Phase::Idle,
            ControllerState::Tracking(_) => Phase::Tracking,
            ControllerState::Settling(_, Decision::Commit) => Phase::Committing,
            ControllerState::Settling(_, Decision::Cancel) => Phase::Cancelling,
        }
    }

    /// The live session, if the controller is tracking
    pub fn session(&self) -> Option<&InteractiveSession> {
        match &self.state {
            ControllerState::Tracking(session) => Some(session),
            _ => None,
        }
    }

    pub fn is_tracking(&self) -> bool {
        matches!(self.state, ControllerState::Tracking(_))
    }

    /// Start a new session with fraction 0
    pub fn begin(&mut self, direction: TransitionDirection) -> Result<SessionId> {
        if !matches!(self.state, ControllerState::Idle) {
            warn!("begin() rejected: a session is already live");
            return Err(TransitionError::ProtocolMisuse(
                "begin() called while a session is live",
            ));
        }

        let id = SessionId(self.next_session);
        self.next_session += 1;
        self.state = ControllerState::Tracking(InteractiveSession {
            id,
            direction,
            mode: TransitionMode::Interactive,
            fraction: 0.0,
        });

        debug!(%id, ?direction, "interactive session began");
        Ok(id)
    }

    /// Feed a gesture delta and push the resulting fraction to the animator
    ///
    /// Returns the new fraction. Session state is untouched on error.
    pub fn update(
        &mut self,
        raw_delta: f32,
        axis_extent: f32,
        mut driver: impl InteractiveTransition,
    ) -> Result<f32> {
        let ControllerState::Tracking(session) = &self.state else {
            warn!("update() rejected: no live session");
            return Err(TransitionError::ProtocolMisuse(
                "update() called without a live session",
            ));
        };

        if !axis_extent.is_finite() || axis_extent <= 0.0 {
            return Err(TransitionError::InvalidExtent(axis_extent));
        }

        let convention = self.convention_for(session.direction);
        let value = fraction(convention.apply(raw_delta), axis_extent);
        trace!(id = %session.id, raw_delta, fraction = value, "interactive progress");
        driver.update_progress(value)?;

        if let ControllerState::Tracking(session) = &mut self.state {
            session.fraction = value;
        }
        Ok(value)
    }

    /// End the gesture: commit above the threshold, cancel otherwise
    ///
    /// The controller is Idle afterwards even if the animator reports an error.
    pub fn end(&mut self, mut driver: impl InteractiveTransition) -> Result<Decision> {
        let session = match std::mem::replace(&mut self.state, ControllerState::Idle) {
            ControllerState::Tracking(session) => session,
            other => {
                self.state = other;
                warn!("end() rejected: no live session");
                return Err(TransitionError::ProtocolMisuse(
                    "end() called without a live session",
                ));
            }
        };

        let decision = if session.fraction > COMMIT_THRESHOLD {
            Decision::Commit
        } else {
            Decision::Cancel
        };
        self.state = ControllerState::Settling(session.id, decision);
        debug!(
            id = %session.id,
            fraction = session.fraction,
            ?decision,
            "interactive session ended"
        );

        let result = match decision {
            Decision::Commit => driver.finish(),
            Decision::Cancel => driver.cancel(),
        };
        self.state = ControllerState::Idle;
        result.map(|()| decision)
    }

    /// Cancel the live session, if any
    ///
    /// Idempotent: from Idle this does nothing and returns `Ok(None)`.
    pub fn force_cancel(
        &mut self,
        mut driver: impl InteractiveTransition,
    ) -> Result<Option<SessionId>> {
        let session = match std::mem::replace(&mut self.state, ControllerState::Idle) {
            ControllerState::Tracking(session) => session,
            other => {
                self.state = other;
                return Ok(None);
            }
        };

        self.state = ControllerState::Settling(session.id, Decision::Cancel);
        debug!(
            id = %session.id,
            fraction = session.fraction,
            "interactive session force-cancelled"
        );

        let result = driver.cancel();
        self.state = ControllerState::Idle;
        result.map(|()| Some(session.id))
    }

    /// Drop the live session without driving any animator
    ///
    /// For sessions whose transition never started. Returns the dropped id.
    pub fn abandon(&mut self) -> Option<SessionId> {
        match std::mem::replace(&mut self.state, ControllerState::Idle) {
            ControllerState::Tracking(session) => {
                debug!(id = %session.id, "interactive session abandoned");
                Some(session.id)
            }
            other => {
                self.state = other;
                None
            }
        }
    }
}

impl Default for InteractiveController {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Default)]
    struct RecordingDriver {
        progress: Vec<f32>,
        finished: u32,
        cancelled: u32,
    }

    impl InteractiveTransition for RecordingDriver {
        fn update_progress(&mut self, fraction: f32) -> Result<()> {
            self.progress.push(fraction);
            Ok(())
        }

        fn finish(&mut self) -> Result<()> {
            self.finished += 1;
            Ok(())
        }

        fn cancel(&mut self) -> Result<()> {
            self.cancelled += 1;
            Ok(())
        }
    }

    struct FailingDriver;

    impl InteractiveTransition for FailingDriver {
        fn update_progress(&mut self, _fraction: f32) -> Result<()> {
            Err(TransitionError::UnknownTransition)
        }

        fn finish(&mut self) -> Result<()> {
            Err(TransitionError::UnknownTransition)
        }

        fn cancel(&mut self) -> Result<()> {
            Err(TransitionError::UnknownTransition)
        }
    }

    const EXTENT: f32 = 400.0;

    #[test]
    fn test_fraction_is_clamped() {
        let deltas = [
            -1.0e9, -800.0, -400.0, -120.0, -0.5, 0.0, 0.5, 120.0, 400.0, 800.0, 1.0e9,
        ];
        for extent in [1.0, 320.0, EXTENT, 1.0e6] {
            for delta in deltas {
                let f = fraction(delta, extent);
                assert!((0.0..=1.0).contains(&f), "fraction({delta}, {extent}) = {f}");
                let expected = (delta.abs() / extent).clamp(0.0, 1.0);
                assert!((f - expected).abs() < 1e-6);
            }
        }
        assert_eq!(fraction(f32::INFINITY, EXTENT), 1.0);
        assert_eq!(fraction(f32::NAN, EXTENT), 0.0);
        assert_eq!(fraction(100.0, 0.0), 0.0);
    }

    #[test]
    fn test_begin_end_without_update_cancels() {
        let mut controller = InteractiveController::new();
        let mut driver = RecordingDriver::default();

        controller.begin(TransitionDirection::Presenting).unwrap();
        assert_eq!(controller.session().unwrap().fraction(), 0.0);

        assert_eq!(controller.end(&mut driver).unwrap(), Decision::Cancel);
        assert_eq!(driver.cancelled, 1);
        assert_eq!(driver.finished, 0);
        assert_eq!(controller.phase(), Phase::Idle);
    }

    #[test]
    fn test_past_threshold_commits() {
        let mut controller = InteractiveController::new();
        let mut driver = RecordingDriver::default();

        controller.begin(TransitionDirection::Presenting).unwrap();
        let f = controller.update(EXTENT * 0.6, EXTENT, &mut driver).unwrap();
        assert!((f - 0.6).abs() < 1e-6);

        assert_eq!(controller.end(&mut driver).unwrap(), Decision::Commit);
        assert_eq!(driver.finished, 1);
        assert_eq!(driver.cancelled, 0);
    }

    #[test]
    fn test_exact_threshold_cancels() {
        let mut controller = InteractiveController::new();
        let mut driver = RecordingDriver::default();

        controller.begin(TransitionDirection::Dismissing).unwrap();
        controller.update(EXTENT * 0.5, EXTENT, &mut driver).unwrap();

        assert_eq!(controller.end(&mut driver).unwrap(), Decision::Cancel);
        assert_eq!(driver.cancelled, 1);
    }

    #[test]
    fn test_decision_uses_last_fraction() {
        let mut controller = InteractiveController::new();
        let mut driver = RecordingDriver::default();

        controller.begin(TransitionDirection::Presenting).unwrap();
        controller.update(EXTENT * 0.9, EXTENT, &mut driver).unwrap();
        controller.update(EXTENT * 0.2, EXTENT, &mut driver).unwrap();

        assert_eq!(controller.end(&mut driver).unwrap(), Decision::Cancel);
        assert_eq!(driver.progress.len(), 2);
    }

    #[test]
    fn test_force_cancel_idle_is_noop() {
        let mut controller = InteractiveController::new();
        let mut driver = RecordingDriver::default();

        assert_eq!(controller.force_cancel(&mut driver).unwrap(), None);
        assert_eq!(controller.force_cancel(&mut driver).unwrap(), None);
        assert_eq!(driver.cancelled, 0);
        assert_eq!(controller.phase(), Phase::Idle);
    }

    #[test]
    fn test_force_cancel_tracking() {
        let mut controller = InteractiveController::new();
        let mut driver = RecordingDriver::default();

        let id = controller.begin(TransitionDirection::Presenting).unwrap();
        controller.update(EXTENT * 0.8, EXTENT, &mut driver).unwrap();

        assert_eq!(controller.force_cancel(&mut driver).unwrap(), Some(id));
        assert_eq!(driver.cancelled, 1);
        assert_eq!(driver.finished, 0);
        assert_eq!(controller.force_cancel(&mut driver).unwrap(), None);
        assert_eq!(driver.cancelled, 1);
    }

    #[test]
    fn test_update_before_begin_is_misuse() {
        let mut controller = InteractiveController::new();
        let mut driver = RecordingDriver::default();

        assert!(matches!(
            controller.update(10.0, EXTENT, &mut driver),
            Err(TransitionError::ProtocolMisuse(_))
        ));
        assert!(matches!(
            controller.end(&mut driver),
            Err(TransitionError::ProtocolMisuse(_))
        ));
        assert!(driver.progress.is_empty());
        assert_eq!(controller.phase(), Phase::Idle);
    }

    #[test]
    fn test_double_begin_is_misuse() {
        let mut controller = InteractiveController::new();
        let mut driver = RecordingDriver::default();

        let id = controller.begin(TransitionDirection::Presenting).unwrap();
        controller.update(100.0, EXTENT, &mut driver).unwrap();

        assert!(matches!(
            controller.begin(TransitionDirection::Dismissing),
            Err(TransitionError::ProtocolMisuse(_))
        ));
        let session = controller.session().unwrap();
        assert_eq!(session.id(), id);
        assert_eq!(session.fraction(), 0.25);
    }

    #[test]
    fn test_new_session_is_fresh() {
        let mut controller = InteractiveController::new();
        let mut driver = RecordingDriver::default();

        let first = controller.begin(TransitionDirection::Presenting).unwrap();
        controller.update(EXTENT * 0.7, EXTENT, &mut driver).unwrap();
        controller.end(&mut driver).unwrap();
        assert_eq!(controller.phase(), Phase::Idle);

        let second = controller.begin(TransitionDirection::Presenting).unwrap();
        assert_ne!(first, second);
        let session = controller.session().unwrap();
        assert_eq!(session.fraction(), 0.0);
        assert_eq!(session.mode(), TransitionMode::Interactive);
    }

    #[test]
    fn test_invalid_extent_leaves_session_untouched() {
        let mut controller = InteractiveController::new();
        let mut driver = RecordingDriver::default();

        controller.begin(TransitionDirection::Presenting).unwrap();
        controller.update(100.0, EXTENT, &mut driver).unwrap();

        assert_eq!(
            controller.update(100.0, 0.0, &mut driver),
            Err(TransitionError::InvalidExtent(0.0))
        );
        assert_eq!(controller.session().unwrap().fraction(), 0.25);
        assert_eq!(driver.progress.len(), 1);
    }

    #[test]
    fn test_sign_conventions_per_direction() {
        let mut controller = InteractiveController::new()
            .with_conventions(SignConvention::Negative, SignConvention::Positive);
        let mut driver = RecordingDriver::default();

        controller.begin(TransitionDirection::Presenting).unwrap();
        assert_eq!(controller.update(120.0, EXTENT, &mut driver).unwrap(), 0.0);
        assert_eq!(controller.update(-120.0, EXTENT, &mut driver).unwrap(), 0.3);
        assert_eq!(controller.update(-900.0, EXTENT, &mut driver).unwrap(), 1.0);
        controller.force_cancel(&mut driver).unwrap();

        controller.begin(TransitionDirection::Dismissing).unwrap();
        assert_eq!(controller.update(-120.0, EXTENT, &mut driver).unwrap(), 0.0);
        assert_eq!(controller.update(120.0, EXTENT, &mut driver).unwrap(), 0.3);
    }

    #[test]
    fn test_abandon_skips_driver() {
        let mut controller = InteractiveController::new();
        assert_eq!(controller.abandon(), None);

        let id = controller.begin(TransitionDirection::Presenting).unwrap();
        assert_eq!(controller.abandon(), Some(id));
        assert_eq!(controller.phase(), Phase::Idle);
    }

    #[test]
    fn test_driver_error_on_update_keeps_fraction() {
        let mut controller = InteractiveController::new();
        let mut driver = RecordingDriver::default();

        controller.begin(TransitionDirection::Presenting).unwrap();
        controller.update(100.0, EXTENT, &mut driver).unwrap();

        assert_eq!(
            controller.update(300.0, EXTENT, FailingDriver),
            Err(TransitionError::UnknownTransition)
        );
        assert_eq!(controller.phase(), Phase::Tracking);
        assert_eq!(controller.session().unwrap().fraction(), 0.25);
        assert_eq!(controller.end(&mut driver).unwrap(), Decision::Cancel);
    }

    #[test]
    fn test_driver_error_still_settles() {
        let mut controller = InteractiveController::new();

        controller.begin(TransitionDirection::Presenting).unwrap();
        assert_eq!(
            controller.end(FailingDriver),
            Err(TransitionError::UnknownTransition)
        );
        assert_eq!(controller.phase(), Phase::Idle);
        assert!(controller.begin(TransitionDirection::Presenting).is_ok());
    }
}
