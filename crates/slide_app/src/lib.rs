//! Slide Demo Application
//!
//! Two screens wired to tap and pan gestures. Tapping the red root screen
//! slides the blue detail screen in; tapping the detail screen slides it
//! back out. Panning drives the same slides interactively: the transition
//! follows the finger and, when the finger lifts, commits if it is more than
//! half way or reverses otherwise.
//!
//! # Example
//!
//! ```ignore
//! use slide_app::prelude::*;
//!
//! let mut app = SlideApp::new(&SlideConfig::default(), Rect::new(0.0, 0.0, 390.0, 844.0))?;
//! app.handle(Event::Touch(TouchEvent::Started { id: 1, x: 200.0, y: 400.0, pressure: 1.0 }))?;
//! app.handle(Event::Touch(TouchEvent::Ended { id: 1, x: 200.0, y: 400.0 }))?;
//! app.handle(Event::Frame { dt_ms: 1000.0 })?;
//! assert_eq!(app.snapshot().presentation, Presentation::Presented);
//! ```

mod app;
pub mod config;
mod error;
pub mod navigator;
pub mod screen;


pub use app::{FrameSnapshot, SlideApp};
pub use config::{GestureConfig, SlideConfig, TransitionConfig};
pub use error::{Result, SlideError};
pub use navigator::{Navigator, Presentation, TransitionRequest};
pub use screen::{Screen, ScreenKind};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::app::{FrameSnapshot, SlideApp};
    pub use crate::config::SlideConfig;
    pub use crate::error::{Result, SlideError};
    pub use crate::navigator::Presentation;
    pub use crate::screen::ScreenKind;
    pub use slide_core::{Point, Rect};
    pub use slide_platform::{ControlFlow, Event, LifecycleEvent, TouchEvent};
}
