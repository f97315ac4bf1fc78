//! Slide application
//!
//! Routes events from the single-threaded event loop to the screens and the
//! navigator:
//!
//! - a touch goes to the screen it landed on until it lifts, new touches go
//!   to the top screen
//! - frames advance the navigator's transitions
//! - suspension cancels any gesture in progress

use slide_core::{Point, Rect};
use slide_platform::{ControlFlow, Event, LifecycleEvent, TouchEvent};
use tracing::{debug, info, trace};

use crate::config::SlideConfig;
use crate::error::Result;
use crate::navigator::{Navigator, Presentation};
use crate::screen::{Screen, ScreenKind};

/// What a renderer would draw this frame
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameSnapshot {
    pub presentation: Presentation,
    /// Origin of the detail screen, `None` when only the root screen shows
    pub detail_origin: Option<Point>,
    /// Whether a gesture is driving the current transition
    pub interactive: bool,
}

/// The two-screen demo application
pub struct SlideApp {
    navigator: Navigator,
    root: Screen,
    detail: Screen,
}

impl SlideApp {
    /// Create the app showing the root screen inside `container`
    pub fn new(config: &SlideConfig, container: Rect) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            navigator: Navigator::new(container, config.transition.clone())?,
            root: Screen::new(ScreenKind::Root, &config.gestures),
            detail: Screen::new(ScreenKind::Detail, &config.gestures),
        })
    }

    pub fn navigator(&self) -> &Navigator {
        &self.navigator
    }

    pub fn screen(&self, kind: ScreenKind) -> &Screen {
        match kind {
            ScreenKind::Root => &self.root,
            ScreenKind::Detail => &self.detail,
        }
    }

    /// Screen that receives touches right now
    ///
    /// A screen still holding a finger keeps receiving touches even after a
    /// transition has moved another screen on top.
    pub fn touch_target(&self) -> ScreenKind {
        if self.root.is_tracking() || self.root.holds_touch() {
            ScreenKind::Root
        } else if self.detail.is_tracking() || self.detail.holds_touch() {
            ScreenKind::Detail
        } else if self.navigator.presentation() == Presentation::Root {
            ScreenKind::Root
        } else {
            ScreenKind::Detail
        }
    }

    /// Handle one event from the event loop
    pub fn handle(&mut self, event: Event) -> Result<ControlFlow> {
        match event {
            Event::Touch(touch) => self.touch(&touch)?,
            Event::Frame { dt_ms } => {
                self.navigator.tick(dt_ms);
            }
            Event::Resized { width, height } => {
                self.navigator
                    .set_container(Rect::new(0.0, 0.0, width, height));
            }
            Event::Lifecycle(LifecycleEvent::Suspended) => {
                debug!("suspended, cancelling gestures");
                self.root.cancel_gesture(&mut self.navigator)?;
                self.detail.cancel_gesture(&mut self.navigator)?;
            }
            Event::Lifecycle(LifecycleEvent::Resumed) => {}
            Event::CloseRequested => {
                info!("close requested");
                return Ok(ControlFlow::Exit);
            }
        }
        Ok(ControlFlow::Continue)
    }

    /// Feed events until one asks to exit or the source runs dry
    pub fn run<I>(&mut self, events: I) -> Result<()>
    where
        I: IntoIterator<Item = Event>,
    {
        for event in events {
            if self.handle(event)? == ControlFlow::Exit {
                break;
            }
        }
        Ok(())
    }

    fn touch(&mut self, touch: &TouchEvent) -> Result<()> {
        let target = self.touch_target();
        trace!(id = touch.id(), ?target, "touch");
        let screen = match target {
            ScreenKind::Root => &mut self.root,
            ScreenKind::Detail => &mut self.detail,
        };
        screen.handle_touch(touch, &mut self.navigator)
    }

    pub fn snapshot(&self) -> FrameSnapshot {
        FrameSnapshot {
            presentation: self.navigator.presentation(),
            detail_origin: self.navigator.detail_origin(),
            interactive: self.root.is_tracking() || self.detail.is_tracking(),
        }
    }

    /// Whether the host should keep delivering frames
    pub fn needs_frames(&self) -> bool {
        self.navigator.needs_frames()
    }
}
