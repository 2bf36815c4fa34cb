//! Animation driver
//!
//! Couples the Idle/Active [`FrameLoop`] with the eased pointer position.
//! Starting from Idle snaps the eased position to the target so the wave
//! does not sweep in from a stale location.

use folio_animation::{FrameLoop, Pursuit, PursuitConfig};
use folio_core::Point;
use folio_platform::{FrameHandle, FrameScheduler};

/// Frame loop plus pointer easing
#[derive(Clone, Debug)]
pub struct AnimationDriver {
    frames: FrameLoop,
    pointer: Pursuit<Point>,
}

impl AnimationDriver {
    pub fn new(easing: PursuitConfig) -> Self {
        Self {
            frames: FrameLoop::new(),
            pointer: Pursuit::new(easing, Point::ZERO),
        }
    }

    pub fn is_active(&self) -> bool {
        self.frames.is_active()
    }

    pub fn pending(&self) -> Option<FrameHandle> {
        self.frames.pending()
    }

    pub fn frames_run(&self) -> u64 {
        self.frames.frames_run()
    }

    /// Current eased pointer position
    pub fn pointer(&self) -> Point {
        *self.pointer.value()
    }

    /// Latest raw pointer position
    pub fn target(&self) -> Point {
        *self.pointer.target()
    }

    /// Retarget the pointer and make sure the loop is running
    ///
    /// Returns true if this call moved the driver from Idle to Active.
    pub fn start<S: FrameScheduler + ?Sized>(&mut self, scheduler: &mut S, target: Point) -> bool {
        if self.frames.is_active() {
            self.pointer.set_target(target);
        } else {
            self.pointer.snap_to(target);
        }
        let started = self.frames.start(scheduler);
        if started {
            tracing::debug!("AnimationDriver: active at ({}, {})", target.x, target.y);
        }
        started
    }

    /// Stop the loop and cancel its pending frame
    ///
    /// Returns true if the driver was Active.
    pub fn stop<S: FrameScheduler + ?Sized>(&mut self, scheduler: &mut S) -> bool {
        let stopped = self.frames.stop(scheduler);
        if stopped {
            tracing::debug!("AnimationDriver: idle");
        }
        stopped
    }

    /// Accept a delivered frame and ease the pointer one step
    ///
    /// Returns the eased position, or None if the frame is stale or the
    /// driver is Idle.
    pub fn advance(&mut self, handle: FrameHandle) -> Option<Point> {
        if !self.frames.begin_frame(handle) {
            return None;
        }
        Some(*self.pointer.step())
    }

    /// Request the next frame if still Active
    pub fn schedule_next<S: FrameScheduler + ?Sized>(&mut self, scheduler: &mut S) {
        self.frames.schedule_next(scheduler);
    }
}

impl Default for AnimationDriver {
    fn default() -> Self {
        Self::new(PursuitConfig::dock())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_animation::ManualScheduler;

    #[test]
    fn test_start_from_idle_snaps() {
        let mut scheduler = ManualScheduler::new();
        let mut driver = AnimationDriver::default();

        assert!(driver.start(&mut scheduler, Point::new(200.0, 740.0)));
        assert_eq!(driver.pointer(), Point::new(200.0, 740.0));
        assert_eq!(scheduler.pending_count(), 1);
    }

    #[test]
    fn test_start_while_active_retargets() {
        let mut scheduler = ManualScheduler::new();
        let mut driver = AnimationDriver::default();
        driver.start(&mut scheduler, Point::new(0.0, 740.0));

        assert!(!driver.start(&mut scheduler, Point::new(100.0, 740.0)));
        assert_eq!(driver.pointer(), Point::new(0.0, 740.0));
        assert_eq!(driver.target(), Point::new(100.0, 740.0));
        assert_eq!(scheduler.pending_count(), 1);

        let handle = scheduler.take_due()[0];
        let eased = driver.advance(handle).unwrap();
        assert!((eased.x - 22.0).abs() < 1e-4);
    }

    #[test]
    fn test_advance_rejects_stale_frames() {
        let mut scheduler = ManualScheduler::new();
        let mut driver = AnimationDriver::default();
        driver.start(&mut scheduler, Point::ZERO);
        let stale = driver.pending().unwrap();

        driver.stop(&mut scheduler);
        assert_eq!(driver.advance(stale), None);
        assert_eq!(driver.frames_run(), 0);
    }

    #[test]
    fn test_schedule_next_only_while_active() {
        let mut scheduler = ManualScheduler::new();
        let mut driver = AnimationDriver::default();
        driver.schedule_next(&mut scheduler);
        assert_eq!(scheduler.pending_count(), 0);

        driver.start(&mut scheduler, Point::ZERO);
        let handle = scheduler.take_due()[0];
        driver.advance(handle);
        driver.schedule_next(&mut scheduler);
        assert_eq!(scheduler.pending_count(), 1);
    }
}
