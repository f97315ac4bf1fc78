//! Presentation state for the two-screen stack
//!
//! The navigator owns the transition scheduler and records which screen is
//! showing. Screens ask it to present or dismiss; an interactive request is
//! bound to the requesting screen's [`SessionId`], and the screen later
//! looks its animator up by that id. When a transition completes the
//! navigator finalizes the presentation state from the reported outcome.

use slide_animation::{
    AnimationHandle, Completions, PercentDriven, TransitionCompletion, TransitionScheduler,
};
use slide_core::{Point, Rect, SessionId, TransitionDirection, TransitionError, TransitionMode};
use tracing::{debug, info};

use crate::config::TransitionConfig;
use crate::error::{Result, SlideError};

/// Which screen is showing and whether it is moving
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Presentation {
    /// Only the root screen is showing
    Root,
    /// The detail screen is sliding in
    Presenting,
    /// The detail screen covers the root screen
    Presented,
    /// The detail screen is sliding out
    Dismissing,
}

/// A present/dismiss request
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TransitionRequest {
    /// Play the full slide over the configured duration
    Animated,
    /// Let the given session drive the slide's progress
    Interactive(SessionId),
}

impl TransitionRequest {
    pub fn mode(self) -> TransitionMode {
        match self {
            TransitionRequest::Animated => TransitionMode::Animated,
            TransitionRequest::Interactive(_) => TransitionMode::Interactive,
        }
    }

    fn session(self) -> Option<SessionId> {
        match self {
            TransitionRequest::Animated => None,
            TransitionRequest::Interactive(session) => Some(session),
        }
    }
}

#[derive(Clone, Copy, Debug)]
struct ActiveTransition {
    handle: AnimationHandle,
    mode: TransitionMode,
    session: Option<SessionId>,
}

/// Owns the screen stack's presentation state and its transitions
pub struct Navigator {
    scheduler: TransitionScheduler,
    config: TransitionConfig,
    container: Rect,
    presentation: Presentation,
    active: Option<ActiveTransition>,
}

impl Navigator {
    /// Create a navigator showing the root screen
    pub fn new(container: Rect, config: TransitionConfig) -> Result<Self> {
        config.spec(TransitionDirection::Presenting)?;
        Ok(Self {
            scheduler: TransitionScheduler::with_easing(config.easing),
            config,
            container,
            presentation: Presentation::Root,
            active: None,
        })
    }

    pub fn presentation(&self) -> Presentation {
        self.presentation
    }

    pub fn container(&self) -> Rect {
        self.container
    }

    /// Update the container bounds used by transitions started from now on
    pub fn set_container(&mut self, container: Rect) {
        debug!(?container, "container resized");
        self.container = container;
    }

    /// How the running transition advances, if one is running
    pub fn active_mode(&self) -> Option<TransitionMode> {
        self.active.map(|active| active.mode)
    }

    /// The session currently driving a transition, if any
    pub fn interactive_session(&self) -> Option<SessionId> {
        self.active.and_then(|active| active.session)
    }

    /// Whether a transition in `direction` may start now
    pub fn can_start(&self, direction: TransitionDirection) -> bool {
        match direction {
            TransitionDirection::Presenting => self.presentation == Presentation::Root,
            TransitionDirection::Dismissing => self.presentation == Presentation::Presented,
        }
    }

    /// Slide the detail screen in
    pub fn present(&mut self, request: TransitionRequest) -> Result<AnimationHandle> {
        self.start(TransitionDirection::Presenting, request)
    }

    /// Slide the detail screen out
    pub fn dismiss(&mut self, request: TransitionRequest) -> Result<AnimationHandle> {
        self.start(TransitionDirection::Dismissing, request)
    }

    /// Start a transition in `direction`
    pub fn start(
        &mut self,
        direction: TransitionDirection,
        request: TransitionRequest,
    ) -> Result<AnimationHandle> {
        if !self.can_start(direction) {
            return Err(SlideError::Navigation(format!(
                "cannot start {direction:?} while {:?}",
                self.presentation
            )));
        }

        let spec = self.config.spec(direction)?;
        let mode = request.mode();
        let handle = match mode {
            TransitionMode::Animated => self.scheduler.begin_transition(spec, self.container),
            TransitionMode::Interactive => self.scheduler.begin_interactive(spec, self.container),
        };

        self.active = Some(ActiveTransition {
            handle,
            mode,
            session: request.session(),
        });
        self.presentation = match direction {
            TransitionDirection::Presenting => Presentation::Presenting,
            TransitionDirection::Dismissing => Presentation::Dismissing,
        };
        info!(?direction, ?mode, session = ?request.session(), "transition started");
        Ok(handle)
    }

    /// Percent-driven access to the transition bound to `session`
    pub fn driver(&mut self, session: SessionId) -> Result<PercentDriven<'_>> {
        match self.active {
            Some(active) if active.session == Some(session) => {
                Ok(self.scheduler.interactive(active.handle))
            }
            _ => Err(TransitionError::UnknownTransition.into()),
        }
    }

    /// Advance running transitions and finalize any that completed
    pub fn tick(&mut self, dt_ms: f32) -> Completions {
        let completions = self.scheduler.tick(dt_ms);
        for completion in &completions {
            self.finalize(completion);
        }
        completions
    }

    /// Check if any transition still needs frames
    pub fn needs_frames(&self) -> bool {
        self.scheduler.has_active_animations()
    }

    fn finalize(&mut self, completion: &TransitionCompletion) {
        if self.active.map(|active| active.handle) != Some(completion.handle) {
            debug!(handle = ?completion.handle, "completion for a stale transition");
            return;
        }

        self.presentation = match (completion.direction, completion.was_cancelled) {
            (TransitionDirection::Presenting, false) => Presentation::Presented,
            (TransitionDirection::Presenting, true) => Presentation::Root,
            (TransitionDirection::Dismissing, false) => Presentation::Root,
            (TransitionDirection::Dismissing, true) => Presentation::Presented,
        };
        self.active = None;

        info!(
            direction = ?completion.direction,
            was_cancelled = completion.was_cancelled,
            presentation = ?self.presentation,
            "transition finalized"
        );
    }

    /// Origin of the detail screen, or `None` when it is not on screen
    pub fn detail_origin(&self) -> Option<Point> {
        match self.presentation {
            Presentation::Root => None,
            Presentation::Presented => Some(Point::ZERO),
            Presentation::Presenting | Presentation::Dismissing => self
                .active
                .and_then(|active| self.scheduler.origin(active.handle)),
        }
    }

    /// Progress of the running transition
    pub fn progress(&self) -> Option<f32> {
        self.active
            .and_then(|active| self.scheduler.progress(active.handle))
    }
}
