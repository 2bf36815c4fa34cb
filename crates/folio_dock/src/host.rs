//! Host capabilities the dock engine runs against
//!
//! The engine never touches a document directly. A host reads geometry
//! ([`DockSurface`]), writes styles ([`DockRenderer`]) and schedules frames
//! ([`FrameScheduler`]). Every capability tolerates missing elements: an
//! absent container or item simply reports `None`, and a renderer without a
//! tooltip element ignores tooltip calls.

use crate::tooltip::TooltipPlacement;
use crate::wave::ItemStyle;
use folio_core::Rect;
use folio_platform::FrameScheduler;

/// Read access to the dock's layout and user preferences
pub trait DockSurface {
    /// Bounding box of the dock container, if it exists
    fn container_rect(&self) -> Option<Rect>;

    /// Number of items inside the dock (0 without a container)
    fn item_count(&self) -> usize;

    /// Bounding box of the item at `index`
    fn item_rect(&self, index: usize) -> Option<Rect>;

    /// Bounding box of the item at `index`, given the container's box
    ///
    /// Hosts that measure items relative to the container override this so
    /// a pass over every item reads the container only once.
    fn item_rect_in(&self, _container: Rect, index: usize) -> Option<Rect> {
        self.item_rect(index)
    }

    /// Accessible label of the item at `index`
    fn item_label(&self, index: usize) -> Option<String>;

    /// Whether any element inside the dock currently holds focus
    fn focus_within(&self) -> bool;

    /// Whether the user asked for reduced motion
    fn prefers_reduced_motion(&self) -> bool;
}

/// Write access to item styles and the tooltip
pub trait DockRenderer {
    /// Apply lift, scale, stacking and flags to one item
    ///
    /// A style with no stacking order removes any inline stacking order.
    fn apply_item(&mut self, style: &ItemStyle);

    /// Show the tooltip with the given label and offset
    fn show_tooltip(&mut self, placement: &TooltipPlacement);

    /// Hide the tooltip
    fn hide_tooltip(&mut self);
}

/// Everything the engine needs from its host
pub trait DockHost: DockSurface + DockRenderer + FrameScheduler {}

impl<T: DockSurface + DockRenderer + FrameScheduler + ?Sized> DockHost for T {}
