//! Platform events

use crate::frame::FrameHandle;
use crate::input::InputEvent;

/// Platform events
#[derive(Clone, Debug, PartialEq)]
pub enum Event {
    /// Input event (pointer, focus, click, keyboard)
    Input(InputEvent),
    /// Viewport changed in a way that moves elements on screen
    Viewport(ViewportEvent),
    /// An observed element crossed a visibility threshold
    Visibility(VisibilityEvent),
    /// A previously requested frame callback fired
    ///
    /// Carries the handle returned by [`crate::FrameScheduler::request_frame`]
    /// so receivers can ignore frames they no longer expect.
    Frame(FrameHandle),
}

/// Viewport events
///
/// Element geometry is viewport-relative, so both resizing and scrolling
/// invalidate any cached bounding boxes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ViewportEvent {
    /// Viewport was resized
    Resized {
        /// New width in CSS pixels
        width: f32,
        /// New height in CSS pixels
        height: f32,
    },
    /// Page was scrolled
    Scrolled {
        /// Vertical scroll offset in CSS pixels
        scroll_y: f32,
    },
}

/// Which observer reported a visibility change
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ObserverKind {
    /// Elements that fade in once when scrolled into view
    Reveal,
    /// Page sections tracked to highlight the matching dock link
    Section,
}

/// Visibility change of an observed element
#[derive(Clone, Debug, PartialEq)]
pub struct VisibilityEvent {
    /// Observer that produced the change
    pub observer: ObserverKind,
    /// Index of the element in the observer's target list
    pub index: usize,
    /// `id` attribute of the element, if it has one
    pub id: Option<String>,
    /// Whether the element intersects the observer's root
    pub intersecting: bool,
    /// Fraction of the element that is visible (0.0 - 1.0)
    pub ratio: f32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_events_compare_by_handle() {
        assert_eq!(Event::Frame(FrameHandle(3)), Event::Frame(FrameHandle(3)));
        assert_ne!(Event::Frame(FrameHandle(3)), Event::Frame(FrameHandle(4)));
    }
}
