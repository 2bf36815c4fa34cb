//! Manually pumped frame scheduler
//!
//! Stands in for the browser's animation frame queue in tests and headless
//! runs: frame requests accumulate until the owner calls [`ManualScheduler::take_due`],
//! which returns every handle that should fire this tick in request order.

use folio_platform::{FrameHandle, FrameScheduler};
use slotmap::{new_key_type, KeyData, SlotMap};

new_key_type! {
    /// Key of a pending frame request
    struct FrameKey;
}

impl FrameKey {
    fn to_handle(self) -> FrameHandle {
        FrameHandle(self.0.as_ffi())
    }

    fn from_handle(handle: FrameHandle) -> Self {
        FrameKey::from(KeyData::from_ffi(handle.0))
    }
}

/// Deterministic frame scheduler
///
/// Handles are versioned slot keys, so cancelling a handle that already
/// fired can never cancel a newer request that reused its slot.
#[derive(Debug, Default)]
pub struct ManualScheduler {
    pending: SlotMap<FrameKey, ()>,
    order: Vec<FrameKey>,
    requested: u64,
    cancelled: u64,
    delivered: u64,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of requests waiting to fire
    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    /// Whether `handle` is waiting to fire
    pub fn is_pending(&self, handle: FrameHandle) -> bool {
        self.pending.contains_key(FrameKey::from_handle(handle))
    }

    /// Total requests made
    pub fn requested_count(&self) -> u64 {
        self.requested
    }

    /// Total requests cancelled before firing
    pub fn cancelled_count(&self) -> u64 {
        self.cancelled
    }

    /// Total requests delivered through [`ManualScheduler::take_due`]
    pub fn delivered_count(&self) -> u64 {
        self.delivered
    }

    /// Remove and return every pending request, oldest first
    ///
    /// Requests made while the returned frames are being handled belong to
    /// the next tick.
    pub fn take_due(&mut self) -> Vec<FrameHandle> {
        let order = std::mem::take(&mut self.order);
        let mut due = Vec::with_capacity(order.len());
        for key in order {
            if self.pending.remove(key).is_some() {
                due.push(key.to_handle());
            }
        }
        self.delivered += due.len() as u64;
        due
    }
}

impl FrameScheduler for ManualScheduler {
    fn request_frame(&mut self) -> FrameHandle {
        let key = self.pending.insert(());
        self.order.push(key);
        self.requested += 1;
        key.to_handle()
    }

    fn cancel_frame(&mut self, handle: FrameHandle) {
        let key = FrameKey::from_handle(handle);
        if self.pending.remove(key).is_some() {
            self.order.retain(|k| *k != key);
            self.cancelled += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_take_due_returns_requests_in_order() {
        let mut scheduler = ManualScheduler::new();
        let a = scheduler.request_frame();
        let b = scheduler.request_frame();

        assert_eq!(scheduler.take_due(), vec![a, b]);
        assert_eq!(scheduler.pending_count(), 0);
        assert_eq!(scheduler.delivered_count(), 2);
        assert!(scheduler.take_due().is_empty());
    }

    #[test]
    fn test_cancelled_request_never_fires() {
        let mut scheduler = ManualScheduler::new();
        let a = scheduler.request_frame();
        let b = scheduler.request_frame();
        scheduler.cancel_frame(a);

        assert!(!scheduler.is_pending(a));
        assert!(scheduler.is_pending(b));
        assert_eq!(scheduler.take_due(), vec![b]);
        assert_eq!(scheduler.cancelled_count(), 1);
    }

    #[test]
    fn test_cancel_after_fire_does_not_touch_reused_slot() {
        let mut scheduler = ManualScheduler::new();
        let old = scheduler.request_frame();
        assert_eq!(scheduler.take_due(), vec![old]);

        let new = scheduler.request_frame();
        assert_ne!(old, new);

        scheduler.cancel_frame(old);
        assert!(scheduler.is_pending(new));
        assert_eq!(scheduler.cancelled_count(), 0);
    }
}
