//! Transition error types

use thiserror::Error;

/// Errors raised by the transition state machine and animators
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TransitionError {
    /// An operation was called out of order (e.g. `update` with no live session)
    #[error("Protocol misuse: {0}")]
    ProtocolMisuse(&'static str),

    /// Transition duration must be a positive, finite number of seconds
    #[error("Invalid transition duration: {0}s")]
    InvalidDuration(f32),

    /// Gesture axis extent must be positive and finite
    #[error("Invalid axis extent: {0}")]
    InvalidExtent(f32),

    /// The animation handle is unknown or its transition already completed
    #[error("Unknown or completed transition")]
    UnknownTransition,
}

/// Result type for transition operations
pub type Result<T> = std::result::Result<T, TransitionError>;
