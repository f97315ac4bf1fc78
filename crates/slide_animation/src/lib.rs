//! Slide Animation System
//!
//! One-shot slide transitions for presenting and dismissing screens.
//!
//! # Features
//!
//! - **Time-Driven Slides**: play a full slide over the transition duration
//! - **Percent-Driven Slides**: progress set directly by a gesture, then
//!   finished or reversed from wherever the gesture left it
//! - **Completion Reporting**: every transition reports exactly once whether
//!   it was cancelled
//! - **Easing**: standard timing curves applied to slide offsets

pub mod easing;
pub mod scheduler;
pub mod slide;
pub mod values;

pub use easing::Easing;
pub use scheduler::{
    AnimationHandle, CompletionCallback, Completions, PercentDriven, TransitionCompletion,
    TransitionScheduler,
};
pub use slide::{SlideAnimation, SlideDrive};
pub use values::Interpolate;
