//! Frame callback scheduling

/// Opaque token for a requested frame callback
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FrameHandle(pub u64);

/// Per-frame callback scheduling
///
/// Backends deliver a requested frame as [`crate::Event::Frame`] carrying
/// the same handle. A cancelled handle must never be delivered.
pub trait FrameScheduler {
    /// Request a callback before the next repaint
    fn request_frame(&mut self) -> FrameHandle;

    /// Cancel a pending frame request
    ///
    /// Cancelling a handle that already fired or was already cancelled is
    /// a no-op.
    fn cancel_frame(&mut self, handle: FrameHandle);
}
