//! Slide Platform Layer
//!
//! Platform-agnostic input types for the slide demo:
//!
//! - [`TouchEvent`] - raw touches delivered by the host
//! - [`GestureRecognizer`] - turns touches into taps and pans
//! - [`Event`] / [`ControlFlow`] - what the single-threaded event loop
//!   delivers and how the app answers
//!
//! # Example
//!
//! ```rust
//! use slide_platform::{Gesture, GesturePhase, GestureRecognizer, TouchEvent};
//!
//! let mut recognizer = GestureRecognizer::new(10.0);
//! recognizer.process(&TouchEvent::Started { id: 1, x: 300.0, y: 50.0, pressure: 1.0 });
//!
//! let began = recognizer.process(&TouchEvent::Moved { id: 1, x: 250.0, y: 52.0, pressure: 1.0 });
//! assert!(matches!(began, Some(Gesture::Pan(pan)) if pan.phase == GesturePhase::Began));
//! ```

mod event;
mod gesture;
mod input;

pub use event::{ControlFlow, Event, LifecycleEvent};
pub use gesture::{Gesture, GesturePhase, GestureRecognizer, PanGesture};
pub use input::TouchEvent;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::event::{ControlFlow, Event, LifecycleEvent};
    pub use crate::gesture::{Gesture, GesturePhase, GestureRecognizer, PanGesture};
    pub use crate::input::TouchEvent;
}
