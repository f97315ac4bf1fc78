//! Error types for slide_app

use slide_core::TransitionError;
use thiserror::Error;

/// Errors that can occur in the slide demo application
#[derive(Error, Debug)]
pub enum SlideError {
    /// Transition state machine or animator error
    #[error("Transition error: {0}")]
    Transition(#[from] TransitionError),

    /// A present/dismiss request that the current presentation state cannot honor
    #[error("Navigation error: {0}")]
    Navigation(String),

    /// Failed to load or validate configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl From<anyhow::Error> for SlideError {
    fn from(err: anyhow::Error) -> Self {
        SlideError::Other(format!("{err:#}"))
    }
}

impl From<toml::de::Error> for SlideError {
    fn from(err: toml::de::Error) -> Self {
        SlideError::Config(err.to_string())
    }
}

/// Result type for slide_app operations
pub type Result<T> = std::result::Result<T, SlideError>;
