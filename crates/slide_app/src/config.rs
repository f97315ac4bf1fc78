//! Slide configuration file handling
//!
//! The demo reads an optional `slide.toml`:
//!
//! ```toml
//! [transition]
//! duration_secs = 1.0
//! easing = "ease_in_out"
//!
//! [gestures]
//! tap_slop = 10.0
//! present_convention = "negative"
//! dismiss_convention = "positive"
//! ```
//!
//! Every field is optional.

use anyhow::Context;
use serde::{Deserialize, Serialize};
use slide_animation::Easing;
use slide_core::{SignConvention, TransitionDirection, TransitionSpec};
use std::fs;
use std::path::Path;

use crate::error::{Result, SlideError};

/// Top-level configuration
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct SlideConfig {
    #[serde(default)]
    pub transition: TransitionConfig,
    #[serde(default)]
    pub gestures: GestureConfig,
}

/// Slide animation settings
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct TransitionConfig {
    /// Duration of a full slide in seconds
    #[serde(default = "default_duration_secs")]
    pub duration_secs: f32,
    #[serde(default)]
    pub easing: Easing,
}

fn default_duration_secs() -> f32 {
    TransitionSpec::DEFAULT_DURATION_SECS
}

impl Default for TransitionConfig {
    fn default() -> Self {
        Self {
            duration_secs: default_duration_secs(),
            easing: Easing::default(),
        }
    }
}

impl TransitionConfig {
    /// Build a spec for one transition in `direction`
    pub fn spec(&self, direction: TransitionDirection) -> Result<TransitionSpec> {
        Ok(TransitionSpec::new(direction, self.duration_secs)?)
    }
}

/// Gesture recognition settings
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct GestureConfig {
    /// Movement in points before a touch becomes a pan
    #[serde(default = "default_tap_slop")]
    pub tap_slop: f32,
    /// Which pan direction drives the root screen's present transition
    #[serde(default = "default_present_convention")]
    pub present_convention: SignConvention,
    /// Which pan direction drives the detail screen's dismiss transition
    #[serde(default = "default_dismiss_convention")]
    pub dismiss_convention: SignConvention,
}

fn default_tap_slop() -> f32 {
    10.0
}

fn default_present_convention() -> SignConvention {
    SignConvention::Negative
}

fn default_dismiss_convention() -> SignConvention {
    SignConvention::Positive
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            tap_slop: default_tap_slop(),
            present_convention: default_present_convention(),
            dismiss_convention: default_dismiss_convention(),
        }
    }
}

impl SlideConfig {
    /// Parse and validate a TOML document
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: SlideConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a config file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        Self::from_toml_str(&content)
    }

    /// Load `path` if it exists, otherwise fall back to defaults
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| SlideError::Config(e.to_string()))
    }

    pub fn validate(&self) -> Result<()> {
        self.transition.spec(TransitionDirection::Presenting)?;
        if !self.gestures.tap_slop.is_finite() || self.gestures.tap_slop < 0.0 {
            return Err(SlideError::Config(format!(
                "tap_slop must be a non-negative number, got {}",
                self.gestures.tap_slop
            )));
        }
        Ok(())
    }
}
