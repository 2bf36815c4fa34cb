//! `requestAnimationFrame` scheduling

use crate::page::WebPage;
use folio_platform::{Event, FrameHandle, FrameScheduler};
use gloo::render::{request_animation_frame, AnimationFrame};
use rustc_hash::FxHashMap;
use std::cell::RefCell;
use std::rc::Weak;

/// Frame scheduler backed by `requestAnimationFrame`
///
/// A fired frame is delivered to the page as [`Event::Frame`]. Pending
/// frames are owned here; dropping one cancels it.
pub struct RafScheduler {
    next: u64,
    frames: FxHashMap<FrameHandle, AnimationFrame>,
    page: Weak<RefCell<WebPage>>,
}

impl RafScheduler {
    pub fn new(page: Weak<RefCell<WebPage>>) -> Self {
        Self {
            next: 1,
            frames: FxHashMap::default(),
            page,
        }
    }

    /// Forget a frame that has fired
    pub fn fired(&mut self, handle: FrameHandle) -> bool {
        self.frames.remove(&handle).is_some()
    }

    pub fn pending_count(&self) -> usize {
        self.frames.len()
    }
}

impl FrameScheduler for RafScheduler {
    fn request_frame(&mut self) -> FrameHandle {
        let handle = FrameHandle(self.next);
        self.next += 1;

        let page = self.page.clone();
        let frame = request_animation_frame(move |_timestamp| {
            WebPage::dispatch(&page, Event::Frame(handle));
        });
        self.frames.insert(handle, frame);
        handle
    }

    fn cancel_frame(&mut self, handle: FrameHandle) {
        if self.frames.remove(&handle).is_some() {
            tracing::trace!("RafScheduler: cancelled frame {}", handle.0);
        }
    }
}
