//! Transition scheduler
//!
//! Owns every in-flight slide and advances them each frame. Slides are
//! registered through `begin_transition` (time-driven) or
//! `begin_interactive` (percent-driven) and addressed by an
//! [`AnimationHandle`]. A handle is released once its completion has been
//! reported, so a stale handle is detected rather than aliasing a newer
//! slide.
//!
//! Everything runs on the UI thread: completion callbacks are plain
//! `FnOnce` values fired from [`TransitionScheduler::tick`].

use slide_core::{
    InteractiveTransition, Point, Rect, Result, TransitionDirection, TransitionError,
    TransitionSpec,
};
use slotmap::{new_key_type, SlotMap};
use smallvec::SmallVec;
use tracing::{debug, trace};

use crate::easing::Easing;
use crate::slide::{SlideAnimation, SlideDrive};

new_key_type! {
    /// Handle to a registered slide transition
    pub struct AnimationHandle;
}

/// Reported once when a transition finishes or is cancelled
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TransitionCompletion {
    pub handle: AnimationHandle,
    pub direction: TransitionDirection,
    pub was_cancelled: bool,
}

/// Callback fired when a transition completes
pub type CompletionCallback = Box<dyn FnOnce(TransitionCompletion)>;

/// Completions reported by one tick
pub type Completions = SmallVec<[TransitionCompletion; 2]>;

struct Entry {
    slide: SlideAnimation,
    on_complete: Option<CompletionCallback>,
}

/// Drives all active slide transitions
pub struct TransitionScheduler {
    entries: SlotMap<AnimationHandle, Entry>,
    easing: Easing,
}

impl TransitionScheduler {
    pub fn new() -> Self {
        Self::with_easing(Easing::default())
    }

    /// Create a scheduler whose slides use `easing`
    pub fn with_easing(easing: Easing) -> Self {
        Self {
            entries: SlotMap::with_key(),
            easing,
        }
    }

    /// Start a time-driven slide over the full duration
    pub fn begin_transition(&mut self, spec: TransitionSpec, container: Rect) -> AnimationHandle {
        self.register(spec, container, SlideDrive::Timed)
    }

    /// Register a paused slide whose progress is set by [`PercentDriven`]
    pub fn begin_interactive(&mut self, spec: TransitionSpec, container: Rect) -> AnimationHandle {
        self.register(spec, container, SlideDrive::Interactive)
    }

    fn register(
        &mut self,
        spec: TransitionSpec,
        container: Rect,
        drive: SlideDrive,
    ) -> AnimationHandle {
        let slide = SlideAnimation::new(&spec, container, self.easing, drive);
        let handle = self.entries.insert(Entry {
            slide,
            on_complete: None,
        });
        debug!(
            ?handle,
            direction = ?spec.direction(),
            duration_secs = spec.duration_secs(),
            ?drive,
            "transition began"
        );
        handle
    }

    /// Register a callback for when `handle` completes (replaces any previous one)
    pub fn on_complete<F>(&mut self, handle: AnimationHandle, callback: F) -> Result<()>
    where
        F: FnOnce(TransitionCompletion) + 'static,
    {
        let entry = self
            .entries
            .get_mut(handle)
            .ok_or(TransitionError::UnknownTransition)?;
        entry.on_complete = Some(Box::new(callback));
        Ok(())
    }

    /// Advance every slide by `dt_ms`
    ///
    /// Completed slides are removed, their callbacks fired, and their
    /// completions returned in the same order.
    pub fn tick(&mut self, dt_ms: f32) -> Completions {
        let mut finished: SmallVec<[(AnimationHandle, bool); 2]> = SmallVec::new();
        for (handle, entry) in self.entries.iter_mut() {
            if let Some(was_cancelled) = entry.slide.tick(dt_ms) {
                finished.push((handle, was_cancelled));
            }
        }

        let mut completions = Completions::new();
        for (handle, was_cancelled) in finished {
            let Some(entry) = self.entries.remove(handle) else {
                continue;
            };
            let completion = TransitionCompletion {
                handle,
                direction: entry.slide.direction(),
                was_cancelled,
            };
            debug!(?handle, was_cancelled, "transition completed");
            if let Some(callback) = entry.on_complete {
                callback(completion);
            }
            completions.push(completion);
        }
        completions
    }

    /// Percent-driven view of an interactive slide
    pub fn interactive(&mut self, handle: AnimationHandle) -> PercentDriven<'_> {
        PercentDriven {
            scheduler: self,
            handle,
        }
    }

    /// Current origin of the view moved by `handle`
    pub fn origin(&self, handle: AnimationHandle) -> Option<Point> {
        self.entries.get(handle).map(|e| e.slide.origin())
    }

    /// Current linear progress of `handle`
    pub fn progress(&self, handle: AnimationHandle) -> Option<f32> {
        self.entries.get(handle).map(|e| e.slide.progress())
    }

    pub fn drive(&self, handle: AnimationHandle) -> Option<SlideDrive> {
        self.entries.get(handle).map(|e| e.slide.drive())
    }

    pub fn is_active(&self, handle: AnimationHandle) -> bool {
        self.entries.contains_key(handle)
    }

    /// Check if any slide still needs frames
    pub fn has_active_animations(&self) -> bool {
        self.entries
            .values()
            .any(|e| !matches!(e.slide.drive(), SlideDrive::Interactive))
    }

    fn interactive_slide(&mut self, handle: AnimationHandle) -> Result<&mut SlideAnimation> {
        let entry = self
            .entries
            .get_mut(handle)
            .ok_or(TransitionError::UnknownTransition)?;
        match entry.slide.drive() {
            SlideDrive::Interactive => Ok(&mut entry.slide),
            _ => Err(TransitionError::ProtocolMisuse(
                "transition is not being driven interactively",
            )),
        }
    }
}

impl Default for TransitionScheduler {
    fn default() -> Self {
        Self::new()
    }
}

/// Percent-driven control of one interactive slide
///
/// Borrowed from the scheduler for the duration of a single gesture event.
pub struct PercentDriven<'a> {
    scheduler: &'a mut TransitionScheduler,
    handle: AnimationHandle,
}

impl PercentDriven<'_> {
    pub fn handle(&self) -> AnimationHandle {
        self.handle
    }
}

impl InteractiveTransition for PercentDriven<'_> {
    fn update_progress(&mut self, fraction: f32) -> Result<()> {
        let slide = self.scheduler.interactive_slide(self.handle)?;
        slide.set_progress(fraction);
        trace!(handle = ?self.handle, fraction, "interactive progress updated");
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        let slide = self.scheduler.interactive_slide(self.handle)?;
        debug!(handle = ?self.handle, from = slide.progress(), "finishing interactive transition");
        slide.settle_toward(1.0);
        Ok(())
    }

    fn cancel(&mut self) -> Result<()> {
        let slide = self.scheduler.interactive_slide(self.handle)?;
        debug!(handle = ?self.handle, from = slide.progress(), "cancelling interactive transition");
        slide.settle_toward(0.0);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn container() -> Rect {
        Rect::new(0.0, 0.0, 400.0, 800.0)
    }

    fn spec(direction: TransitionDirection, secs: f32) -> TransitionSpec {
        TransitionSpec::new(direction, secs).unwrap()
    }

    #[test]
    fn test_timed_transition_reports_completion_once() {
        let mut scheduler = TransitionScheduler::with_easing(Easing::Linear);
        let handle =
            scheduler.begin_transition(spec(TransitionDirection::Presenting, 0.5), container());

        let reported = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&reported);
        scheduler
            .on_complete(handle, move |c| sink.borrow_mut().push(c))
            .unwrap();

        assert!(scheduler.has_active_animations());
        assert!(scheduler.tick(250.0).is_empty());
        assert_eq!(scheduler.origin(handle), Some(Point::new(200.0, 0.0)));

        let completions = scheduler.tick(250.0);
        assert_eq!(completions.len(), 1);
        assert_eq!(
            completions[0],
            TransitionCompletion {
                handle,
                direction: TransitionDirection::Presenting,
                was_cancelled: false,
            }
        );
        assert_eq!(reported.borrow().as_slice(), completions.as_slice());

        assert!(scheduler.tick(250.0).is_empty());
        assert!(!scheduler.is_active(handle));
        assert_eq!(reported.borrow().len(), 1);
    }

    #[test]
    fn test_percent_driven_finish() {
        let mut scheduler = TransitionScheduler::with_easing(Easing::Linear);
        let handle =
            scheduler.begin_interactive(spec(TransitionDirection::Presenting, 1.0), container());

        assert!(!scheduler.has_active_animations());
        assert!(scheduler.tick(5000.0).is_empty());

        let mut driver = scheduler.interactive(handle);
        driver.update_progress(0.6).unwrap();
        driver.finish().unwrap();
        assert_eq!(scheduler.progress(handle), Some(0.6));
        assert!(scheduler.has_active_animations());

        assert!(scheduler.tick(200.0).is_empty());
        let completions = scheduler.tick(200.0);
        assert_eq!(completions.len(), 1);
        assert!(!completions[0].was_cancelled);
    }

    #[test]
    fn test_percent_driven_cancel() {
        let mut scheduler = TransitionScheduler::with_easing(Easing::Linear);
        let handle =
            scheduler.begin_interactive(spec(TransitionDirection::Dismissing, 1.0), container());

        let mut driver = scheduler.interactive(handle);
        driver.update_progress(0.3).unwrap();
        driver.cancel().unwrap();

        let completions = scheduler.tick(1000.0);
        assert_eq!(completions.len(), 1);
        assert!(completions[0].was_cancelled);
        assert_eq!(completions[0].direction, TransitionDirection::Dismissing);
    }

    #[test]
    fn test_progress_is_clamped() {
        let mut scheduler = TransitionScheduler::new();
        let handle =
            scheduler.begin_interactive(spec(TransitionDirection::Presenting, 1.0), container());

        scheduler.interactive(handle).update_progress(7.0).unwrap();
        assert_eq!(scheduler.progress(handle), Some(1.0));
        scheduler.interactive(handle).update_progress(-3.0).unwrap();
        assert_eq!(scheduler.progress(handle), Some(0.0));
    }

    #[test]
    fn test_cancel_at_zero_completes_next_tick() {
        let mut scheduler = TransitionScheduler::new();
        let handle =
            scheduler.begin_interactive(spec(TransitionDirection::Presenting, 1.0), container());

        scheduler.interactive(handle).cancel().unwrap();
        let completions = scheduler.tick(0.0);
        assert_eq!(completions.len(), 1);
        assert!(completions[0].was_cancelled);
    }

    #[test]
    fn test_stale_and_timed_handles_are_rejected() {
        let mut scheduler = TransitionScheduler::new();
        let timed =
            scheduler.begin_transition(spec(TransitionDirection::Presenting, 0.1), container());

        assert!(matches!(
            scheduler.interactive(timed).update_progress(0.5),
            Err(TransitionError::ProtocolMisuse(_))
        ));

        scheduler.tick(100.0);
        assert_eq!(
            scheduler.interactive(timed).finish(),
            Err(TransitionError::UnknownTransition)
        );
        assert_eq!(
            scheduler.on_complete(timed, |_| {}),
            Err(TransitionError::UnknownTransition)
        );
    }

    #[test]
    fn test_settling_rejects_second_decision() {
        let mut scheduler = TransitionScheduler::new();
        let handle =
            scheduler.begin_interactive(spec(TransitionDirection::Presenting, 1.0), container());

        scheduler.interactive(handle).finish().unwrap();
        assert!(matches!(
            scheduler.interactive(handle).cancel(),
            Err(TransitionError::ProtocolMisuse(_))
        ));
        assert_eq!(
            scheduler.drive(handle),
            Some(SlideDrive::Settling { target: 1.0 })
        );
    }
}
