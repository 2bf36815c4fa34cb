//! Frame loop lifecycle
//!
//! A [`FrameLoop`] is either Idle or Active. While Active exactly one frame
//! request is in flight between frames; while Idle none is. The pending
//! handle doubles as the re-entrancy guard: a delivered frame only runs if
//! its handle is the one the loop is waiting for.

use folio_platform::{FrameHandle, FrameScheduler};

/// Lifecycle state of a frame loop
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LoopState {
    #[default]
    Idle,
    Active,
}

/// Idle/Active frame loop with a single pending request
#[derive(Clone, Debug, Default)]
pub struct FrameLoop {
    state: LoopState,
    pending: Option<FrameHandle>,
    frames_run: u64,
}

impl FrameLoop {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> LoopState {
        self.state
    }

    pub fn is_active(&self) -> bool {
        self.state == LoopState::Active
    }

    /// Handle of the frame request currently in flight
    pub fn pending(&self) -> Option<FrameHandle> {
        self.pending
    }

    /// Number of frames accepted since creation
    pub fn frames_run(&self) -> u64 {
        self.frames_run
    }

    /// Enter the Active state, requesting a frame if none is pending
    ///
    /// Returns true if the loop was Idle before this call.
    pub fn start<S: FrameScheduler + ?Sized>(&mut self, scheduler: &mut S) -> bool {
        let was_idle = self.state == LoopState::Idle;
        self.state = LoopState::Active;
        if self.pending.is_none() {
            let handle = scheduler.request_frame();
            tracing::trace!("FrameLoop: requested frame {:?}", handle);
            self.pending = Some(handle);
        }
        was_idle
    }

    /// Enter the Idle state, cancelling any pending frame
    ///
    /// Returns true if the loop was Active before this call.
    pub fn stop<S: FrameScheduler + ?Sized>(&mut self, scheduler: &mut S) -> bool {
        let was_active = self.state == LoopState::Active;
        self.state = LoopState::Idle;
        if let Some(handle) = self.pending.take() {
            tracing::trace!("FrameLoop: cancelled frame {:?}", handle);
            scheduler.cancel_frame(handle);
        }
        was_active
    }

    /// Accept a delivered frame
    ///
    /// Returns true if the caller should run the frame. Frames that are not
    /// the pending request (stale or foreign) are ignored, as is any frame
    /// arriving while Idle.
    pub fn begin_frame(&mut self, handle: FrameHandle) -> bool {
        if self.pending != Some(handle) {
            tracing::trace!("FrameLoop: ignoring stale frame {:?}", handle);
            return false;
        }
        self.pending = None;
        if self.state != LoopState::Active {
            return false;
        }
        self.frames_run += 1;
        true
    }

    /// Request the next frame while Active
    pub fn schedule_next<S: FrameScheduler + ?Sized>(&mut self, scheduler: &mut S) {
        if self.state == LoopState::Active && self.pending.is_none() {
            self.pending = Some(scheduler.request_frame());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::manual::ManualScheduler;

    #[test]
    fn test_start_requests_exactly_one_frame() {
        let mut scheduler = ManualScheduler::new();
        let mut frames = FrameLoop::new();

        assert!(frames.start(&mut scheduler));
        assert!(!frames.start(&mut scheduler));
        assert!(!frames.start(&mut scheduler));

        assert!(frames.is_active());
        assert_eq!(scheduler.pending_count(), 1);
    }

    #[test]
    fn test_stop_cancels_pending_frame() {
        let mut scheduler = ManualScheduler::new();
        let mut frames = FrameLoop::new();

        frames.start(&mut scheduler);
        let handle = frames.pending().unwrap();

        assert!(frames.stop(&mut scheduler));
        assert_eq!(frames.pending(), None);
        assert_eq!(scheduler.pending_count(), 0);
        assert_eq!(scheduler.cancelled_count(), 1);

        // A frame for the cancelled handle must not run
        assert!(!frames.begin_frame(handle));
    }

    #[test]
    fn test_frame_cycle_keeps_one_request_in_flight() {
        let mut scheduler = ManualScheduler::new();
        let mut frames = FrameLoop::new();
        frames.start(&mut scheduler);

        for _ in 0..5 {
            let due = scheduler.take_due();
            assert_eq!(due.len(), 1);
            assert!(frames.begin_frame(due[0]));
            frames.schedule_next(&mut scheduler);
            assert_eq!(scheduler.pending_count(), 1);
        }
        assert_eq!(frames.frames_run(), 5);
    }

    #[test]
    fn test_stale_handle_is_ignored() {
        let mut scheduler = ManualScheduler::new();
        let mut frames = FrameLoop::new();
        frames.start(&mut scheduler);
        let first = frames.pending().unwrap();

        frames.stop(&mut scheduler);
        frames.start(&mut scheduler);
        let second = frames.pending().unwrap();
        assert_ne!(first, second);

        assert!(!frames.begin_frame(first));
        assert_eq!(frames.pending(), Some(second));
        assert!(frames.begin_frame(second));
    }

    #[test]
    fn test_stop_when_idle_is_noop() {
        let mut scheduler = ManualScheduler::new();
        let mut frames = FrameLoop::new();
        assert!(!frames.stop(&mut scheduler));
        assert_eq!(scheduler.cancelled_count(), 0);
    }
}
