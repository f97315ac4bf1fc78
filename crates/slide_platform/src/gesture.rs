//! Tap and pan gesture recognition
//!
//! Follows a single primary touch. A touch that stays within the slop radius
//! and lifts is a tap; once it leaves the slop radius it becomes a pan that
//! reports Began, Changed and then exactly one terminal phase.

use tracing::trace;

use crate::input::TouchEvent;

/// Phase of a continuous gesture
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GesturePhase {
    Began,
    Changed,
    Ended,
    /// The host cancelled the touch
    Cancelled,
    /// The gesture could not continue (e.g. a second finger landed)
    Failed,
}

/// A pan update
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PanGesture {
    pub phase: GesturePhase,
    /// Horizontal distance from where the touch started
    pub translation_x: f32,
    /// Vertical distance from where the touch started
    pub translation_y: f32,
}

/// Detected gestures
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Gesture {
    /// Single tap
    Tap { x: f32, y: f32 },
    /// Pan/drag gesture
    Pan(PanGesture),
}

#[derive(Clone, Copy, Debug)]
struct TrackedTouch {
    id: u64,
    start: (f32, f32),
    last: (f32, f32),
    panning: bool,
}

impl TrackedTouch {
    fn translation(&self) -> (f32, f32) {
        (self.last.0 - self.start.0, self.last.1 - self.start.1)
    }

    fn pan(&self, phase: GesturePhase) -> Gesture {
        let (translation_x, translation_y) = self.translation();
        Gesture::Pan(PanGesture {
            phase,
            translation_x,
            translation_y,
        })
    }
}

/// Tap/pan recognizer for one view
#[derive(Debug)]
pub struct GestureRecognizer {
    slop: f32,
    touch: Option<TrackedTouch>,
}

impl GestureRecognizer {
    /// Default movement (in points) before a touch becomes a pan
    pub const DEFAULT_SLOP: f32 = 10.0;

    /// Create a recognizer with the given slop radius
    pub fn new(slop: f32) -> Self {
        Self {
            slop: slop.max(0.0),
            touch: None,
        }
    }

    /// Contact the recognizer is following, if any
    pub fn touch_id(&self) -> Option<u64> {
        self.touch.map(|t| t.id)
    }

    /// Process a touch event and detect gestures
    pub fn process(&mut self, event: &TouchEvent) -> Option<Gesture> {
        let id = event.id();
        if let TouchEvent::Started { x, y, .. } = *event {
            return self.start(id, (x, y));
        }

        let mut tracked = self.touch.filter(|t| t.id == id)?;
        let Some(position) = event.position() else {
            self.touch = None;
            return tracked.panning.then(|| tracked.pan(GesturePhase::Cancelled));
        };
        tracked.last = position;

        if event.is_release() {
            self.touch = None;
            return Some(if tracked.panning {
                tracked.pan(GesturePhase::Ended)
            } else {
                Gesture::Tap {
                    x: position.0,
                    y: position.1,
                }
            });
        }

        let phase = if tracked.panning {
            Some(GesturePhase::Changed)
        } else {
            let (dx, dy) = tracked.translation();
            tracked.panning = dx * dx + dy * dy > self.slop * self.slop;
            tracked.panning.then_some(GesturePhase::Began)
        };
        self.touch = Some(tracked);
        phase.map(|phase| tracked.pan(phase))
    }

    fn start(&mut self, id: u64, at: (f32, f32)) -> Option<Gesture> {
        match self.touch.take() {
            None => {
                self.touch = Some(TrackedTouch {
                    id,
                    start: at,
                    last: at,
                    panning: false,
                });
                None
            }
            Some(tracked) => {
                // A second finger ends whatever the first one was doing.
                trace!(id, tracked = tracked.id, "second touch, dropping gesture");
                tracked.panning.then(|| tracked.pan(GesturePhase::Failed))
            }
        }
    }

    /// Abandon the tracked touch, reporting a Cancelled pan if one was live
    pub fn cancel(&mut self) -> Option<Gesture> {
        let tracked = self.touch.take()?;
        tracked.panning.then(|| tracked.pan(GesturePhase::Cancelled))
    }
}

impl Default for GestureRecognizer {
    fn default() -> Self {
        Self::new(Self::DEFAULT_SLOP)
    }
}
