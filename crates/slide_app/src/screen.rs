//! Screen controllers
//!
//! Each screen owns a gesture recognizer and an interactive controller and
//! translates gestures into navigator requests:
//!
//! | Gesture         | Effect                                              |
//! |-----------------|-----------------------------------------------------|
//! | tap             | full, time-driven transition                        |
//! | pan began       | `controller.begin()` + interactive transition       |
//! | pan changed     | `controller.update(translation, container width)`   |
//! | pan ended       | `controller.end()` (commit above half way)          |
//! | pan cancelled   | `controller.force_cancel()`                         |

use slide_core::{Decision, InteractiveController, SessionId, TransitionDirection};
use slide_platform::{Gesture, GesturePhase, GestureRecognizer, PanGesture, TouchEvent};
use tracing::{debug, info};

use crate::config::GestureConfig;
use crate::error::Result;
use crate::navigator::{Navigator, TransitionRequest};

/// The two screens of the demo
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ScreenKind {
    /// Red screen that presents the detail screen
    Root,
    /// Blue screen that dismisses itself
    Detail,
}

impl ScreenKind {
    /// Transition this screen's gestures drive
    pub fn direction(self) -> TransitionDirection {
        match self {
            ScreenKind::Root => TransitionDirection::Presenting,
            ScreenKind::Detail => TransitionDirection::Dismissing,
        }
    }

    /// Background color name, for logs
    pub fn color(self) -> &'static str {
        match self {
            ScreenKind::Root => "red",
            ScreenKind::Detail => "blue",
        }
    }
}

/// A pan that is driving a transition
#[derive(Clone, Copy, Debug)]
struct LivePan {
    session: SessionId,
    /// Container width when the pan began, the width the slide was built with
    extent: f32,
}

/// Gesture handling for one screen
#[derive(Debug)]
pub struct Screen {
    kind: ScreenKind,
    recognizer: GestureRecognizer,
    controller: InteractiveController,
    pan: Option<LivePan>,
}

impl Screen {
    pub fn new(kind: ScreenKind, gestures: &GestureConfig) -> Self {
        Self {
            kind,
            recognizer: GestureRecognizer::new(gestures.tap_slop),
            controller: InteractiveController::new()
                .with_conventions(gestures.present_convention, gestures.dismiss_convention),
            pan: None,
        }
    }

    pub fn controller(&self) -> &InteractiveController {
        &self.controller
    }

    /// Whether this screen is driving a transition with a live gesture
    pub fn is_tracking(&self) -> bool {
        self.pan.is_some()
    }

    /// Whether a finger that landed on this screen is still down
    pub fn holds_touch(&self) -> bool {
        self.recognizer.touch_id().is_some()
    }

    /// Feed a raw touch through the recognizer
    pub fn handle_touch(&mut self, touch: &TouchEvent, nav: &mut Navigator) -> Result<()> {
        match self.recognizer.process(touch) {
            Some(gesture) => self.handle_gesture(gesture, nav),
            None => Ok(()),
        }
    }

    /// Abandon any in-progress gesture (e.g. the app was suspended)
    pub fn cancel_gesture(&mut self, nav: &mut Navigator) -> Result<()> {
        match self.recognizer.cancel() {
            Some(gesture) => self.handle_gesture(gesture, nav),
            None => Ok(()),
        }
    }

    pub fn handle_gesture(&mut self, gesture: Gesture, nav: &mut Navigator) -> Result<()> {
        match gesture {
            Gesture::Tap { .. } => self.tap(nav),
            Gesture::Pan(pan) => self.pan(pan, nav),
        }
    }

    fn tap(&mut self, nav: &mut Navigator) -> Result<()> {
        let direction = self.kind.direction();
        if self.is_tracking() || !nav.can_start(direction) {
            debug!(
                screen = ?self.kind,
                presentation = ?nav.presentation(),
                mode = ?nav.active_mode(),
                "tap ignored"
            );
            return Ok(());
        }
        nav.start(direction, TransitionRequest::Animated)?;
        Ok(())
    }

    fn pan(&mut self, pan: PanGesture, nav: &mut Navigator) -> Result<()> {
        match pan.phase {
            GesturePhase::Began => self.pan_began(nav),
            GesturePhase::Changed => {
                let Some(live) = self.pan else {
                    return Ok(());
                };
                self.controller
                    .update(pan.translation_x, live.extent, nav.driver(live.session)?)?;
                Ok(())
            }
            GesturePhase::Ended => {
                let Some(LivePan { session, .. }) = self.pan.take() else {
                    return Ok(());
                };
                let driver = match nav.driver(session) {
                    Ok(driver) => driver,
                    Err(err) => {
                        self.controller.abandon();
                        return Err(err);
                    }
                };
                let decision = self.controller.end(driver)?;
                info!(
                    screen = self.kind.color(),
                    %session,
                    committed = decision == Decision::Commit,
                    "pan ended"
                );
                Ok(())
            }
            GesturePhase::Cancelled | GesturePhase::Failed => {
                let Some(LivePan { session, .. }) = self.pan.take() else {
                    return Ok(());
                };
                info!(screen = self.kind.color(), %session, phase = ?pan.phase, "pan interrupted");
                match nav.driver(session) {
                    Ok(driver) => {
                        self.controller.force_cancel(driver)?;
                        Ok(())
                    }
                    Err(err) => {
                        self.controller.abandon();
                        Err(err)
                    }
                }
            }
        }
    }

    fn pan_began(&mut self, nav: &mut Navigator) -> Result<()> {
        let direction = self.kind.direction();
        if !nav.can_start(direction) {
            debug!(
                screen = ?self.kind,
                presentation = ?nav.presentation(),
                mode = ?nav.active_mode(),
                "pan ignored"
            );
            return Ok(());
        }

        let session = self.controller.begin(direction)?;
        if let Err(err) = nav.start(direction, TransitionRequest::Interactive(session)) {
            self.controller.abandon();
            return Err(err);
        }
        self.pan = Some(LivePan {
            session,
            extent: nav.container().width(),
        });
        Ok(())
    }
}
