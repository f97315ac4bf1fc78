//! Slide Core
//!
//! Foundational primitives for gesture-driven screen transitions:
//!
//! - **Interactive Controller**: the gesture phase → percent-complete →
//!   commit-or-cancel state machine
//! - **Transition Types**: direction, duration, mode and sign conventions
//! - **Geometry**: points, sizes and rectangles for container bounds
//!
//! # Example
//!
//! ```rust
//! use slide_core::{Decision, InteractiveController, InteractiveTransition, TransitionDirection};
//!
//! #[derive(Default)]
//! struct Recorder {
//!     progress: f32,
//!     finished: bool,
//! }
//!
//! impl InteractiveTransition for Recorder {
//!     fn update_progress(&mut self, fraction: f32) -> slide_core::Result<()> {
//!         self.progress = fraction;
//!         Ok(())
//!     }
//!     fn finish(&mut self) -> slide_core::Result<()> {
//!         self.finished = true;
//!         Ok(())
//!     }
//!     fn cancel(&mut self) -> slide_core::Result<()> {
//!         Ok(())
//!     }
//! }
//!
//! let mut controller = InteractiveController::new();
//! let mut driver = Recorder::default();
//!
//! controller.begin(TransitionDirection::Presenting).unwrap();
//! controller.update(-240.0, 400.0, &mut driver).unwrap();
//! assert_eq!(controller.end(&mut driver).unwrap(), Decision::Commit);
//! assert!(driver.finished);
//! ```

pub mod error;
pub mod geometry;
pub mod interactive;
pub mod transition;

pub use error::{Result, TransitionError};
pub use geometry::{Point, Rect, Size};
pub use interactive::{
    fraction, Decision, InteractiveController, InteractiveSession, Phase, SessionId,
    COMMIT_THRESHOLD,
};
pub use transition::{
    InteractiveTransition, SignConvention, TransitionDirection, TransitionMode, TransitionSpec,
};
