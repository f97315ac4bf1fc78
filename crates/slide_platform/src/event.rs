//! Event loop events and control flow

use crate::input::TouchEvent;

/// Control flow after handling an event
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ControlFlow {
    /// Continue running the event loop
    #[default]
    Continue,
    /// Exit the event loop
    Exit,
}

/// Events delivered to the app, all on the UI thread
#[derive(Clone, Debug, PartialEq)]
pub enum Event {
    /// Touch input
    Touch(TouchEvent),
    /// Frame tick - advance animations by `dt_ms`
    Frame {
        /// Milliseconds since the previous frame
        dt_ms: f32,
    },
    /// The container was resized (logical pixels)
    Resized { width: f32, height: f32 },
    /// Application lifecycle event
    Lifecycle(LifecycleEvent),
    /// The host asked the app to close
    CloseRequested,
}

/// Application lifecycle events
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LifecycleEvent {
    /// Application resumed (came to foreground)
    Resumed,
    /// Application suspended (went to background); live gestures are cancelled
    Suspended,
}
