//! Headless dock host
//!
//! An in-memory page with a dock container, a row of items, a tooltip and a
//! manually pumped frame queue. Used by tests, benches and the scenario
//! runner to drive [`DockEngine`] without a browser.

use crate::config::DockConfig;
use crate::engine::DockEngine;
use crate::host::{DockRenderer, DockSurface};
use crate::tooltip::TooltipPlacement;
use crate::wave::ItemStyle;
use folio_animation::ManualScheduler;
use folio_core::Rect;
use folio_platform::{FrameHandle, FrameScheduler};

/// Default dock container: 400x100 at the bottom of an 800px viewport
const CONTAINER: Rect = Rect::new(0.0, 700.0, 400.0, 100.0);

/// Item size (px)
const ITEM_SIZE: f32 = 48.0;

/// What an item currently shows
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderedItem {
    /// `--dock-lift` custom property
    pub lift: String,
    /// `--dock-scale` custom property
    pub scale: String,
    /// Inline `z-index`, if set
    pub z_index: Option<String>,
    /// `is-raised` class
    pub raised: bool,
    /// `hot` class
    pub hot: bool,
}

impl Default for RenderedItem {
    fn default() -> Self {
        Self {
            lift: "0px".to_string(),
            scale: "1".to_string(),
            z_index: None,
            raised: false,
            hot: false,
        }
    }
}

impl RenderedItem {
    pub fn is_rest(&self) -> bool {
        *self == Self::default()
    }
}

/// What the tooltip currently shows
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RenderedTooltip {
    pub visible: bool,
    pub text: String,
    pub left: String,
}

#[derive(Clone, Debug)]
struct HeadlessItem {
    rect: Rect,
    label: Option<String>,
    rendered: RenderedItem,
}

/// In-memory dock page
#[derive(Debug)]
pub struct HeadlessDock {
    container: Option<Rect>,
    items: Vec<HeadlessItem>,
    tooltip: RenderedTooltip,
    focus_within: bool,
    reduced_motion: bool,
    scheduler: ManualScheduler,
    style_writes: usize,
    tooltip_writes: usize,
}

impl HeadlessDock {
    /// A dock whose items are centered at the given x positions
    ///
    /// Items are labelled `"Item 0"`, `"Item 1"`, ... and vertically
    /// centered on the dock's default center line.
    pub fn with_centers(centers: &[f32]) -> Self {
        let line = CONTAINER.line_at(DockConfig::default().center_line_ratio);
        let items = centers
            .iter()
            .enumerate()
            .map(|(index, &center)| HeadlessItem {
                rect: Rect::new(
                    center - ITEM_SIZE / 2.0,
                    line - ITEM_SIZE / 2.0,
                    ITEM_SIZE,
                    ITEM_SIZE,
                ),
                label: Some(format!("Item {index}")),
                rendered: RenderedItem::default(),
            })
            .collect();

        Self {
            container: Some(CONTAINER),
            items,
            ..Self::without_container()
        }
    }

    /// A page with no dock at all
    pub fn without_container() -> Self {
        Self {
            container: None,
            items: Vec::new(),
            tooltip: RenderedTooltip::default(),
            focus_within: false,
            reduced_motion: false,
            scheduler: ManualScheduler::new(),
            style_writes: 0,
            tooltip_writes: 0,
        }
    }

    /// Y coordinate of the dock's default center line (0 without a dock)
    pub fn center_line(&self) -> f32 {
        self.container
            .map_or(0.0, |rect| rect.line_at(DockConfig::default().center_line_ratio))
    }

    /// Move the whole dock, as scrolling or a resize would
    pub fn move_layout(&mut self, dx: f32, dy: f32) {
        self.container = self.container.map(|rect| rect.offset(dx, dy));
        for item in &mut self.items {
            item.rect = item.rect.offset(dx, dy);
        }
    }

    pub fn set_focus_within(&mut self, focus_within: bool) {
        self.focus_within = focus_within;
    }

    pub fn set_reduced_motion(&mut self, reduced_motion: bool) {
        self.reduced_motion = reduced_motion;
    }

    /// Replace an item's accessible label
    pub fn set_label(&mut self, index: usize, label: &str) {
        if let Some(item) = self.items.get_mut(index) {
            item.label = Some(label.to_string());
        }
    }

    /// Remove an item's accessible label
    pub fn clear_label(&mut self, index: usize) {
        if let Some(item) = self.items.get_mut(index) {
            item.label = None;
        }
    }

    /// Remove and return every due frame, for callers that deliver frames
    /// as events
    pub fn take_due_frames(&mut self) -> Vec<FrameHandle> {
        self.scheduler.take_due()
    }

    /// Deliver every due frame to `engine`
    ///
    /// Returns how many frames the engine ran.
    pub fn pump_frame(&mut self, engine: &mut DockEngine) -> usize {
        let due = self.take_due_frames();
        due.into_iter()
            .filter(|&handle| engine.on_frame(self, handle))
            .count()
    }

    /// Pump `count` ticks, returning the total frames run
    pub fn pump_frames(&mut self, engine: &mut DockEngine, count: usize) -> usize {
        (0..count).map(|_| self.pump_frame(engine)).sum()
    }

    /// Rendered state of item `index`
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range.
    pub fn item(&self, index: usize) -> &RenderedItem {
        &self.items[index].rendered
    }

    pub fn items(&self) -> impl Iterator<Item = &RenderedItem> {
        self.items.iter().map(|item| &item.rendered)
    }

    /// Indices of every item showing the hot class
    pub fn hot_items(&self) -> Vec<usize> {
        self.items
            .iter()
            .enumerate()
            .filter(|(_, item)| item.rendered.hot)
            .map(|(index, _)| index)
            .collect()
    }

    pub fn tooltip(&self) -> &RenderedTooltip {
        &self.tooltip
    }

    /// Frame requests waiting to fire
    pub fn pending_frames(&self) -> usize {
        self.scheduler.pending_count()
    }

    pub fn frames(&self) -> &ManualScheduler {
        &self.scheduler
    }

    /// Item style writes so far
    pub fn style_writes(&self) -> usize {
        self.style_writes
    }

    /// Tooltip show/hide writes so far
    pub fn tooltip_writes(&self) -> usize {
        self.tooltip_writes
    }

    pub fn reset_counts(&mut self) {
        self.style_writes = 0;
        self.tooltip_writes = 0;
    }
}

impl DockSurface for HeadlessDock {
    fn container_rect(&self) -> Option<Rect> {
        self.container
    }

    fn item_count(&self) -> usize {
        if self.container.is_some() {
            self.items.len()
        } else {
            0
        }
    }

    fn item_rect(&self, index: usize) -> Option<Rect> {
        self.items.get(index).map(|item| item.rect)
    }

    fn item_label(&self, index: usize) -> Option<String> {
        self.items.get(index).and_then(|item| item.label.clone())
    }

    fn focus_within(&self) -> bool {
        self.focus_within
    }

    fn prefers_reduced_motion(&self) -> bool {
        self.reduced_motion
    }
}

impl DockRenderer for HeadlessDock {
    fn apply_item(&mut self, style: &ItemStyle) {
        self.style_writes += 1;
        let Some(item) = self.items.get_mut(style.index) else {
            return;
        };
        item.rendered = RenderedItem {
            lift: style.lift_css(),
            scale: style.scale_css(),
            z_index: style.z_index_css(),
            raised: style.raised,
            hot: style.hot,
        };
    }

    fn show_tooltip(&mut self, placement: &TooltipPlacement) {
        self.tooltip_writes += 1;
        self.tooltip.text = placement.label.clone();
        self.tooltip.left = placement.left_css();
        self.tooltip.visible = true;
    }

    fn hide_tooltip(&mut self) {
        self.tooltip_writes += 1;
        self.tooltip.visible = false;
    }
}

impl FrameScheduler for HeadlessDock {
    fn request_frame(&mut self) -> FrameHandle {
        self.scheduler.request_frame()
    }

    fn cancel_frame(&mut self, handle: FrameHandle) {
        self.scheduler.cancel_frame(handle);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_items_sit_on_center_line() {
        let host = HeadlessDock::with_centers(&[40.0, 120.0]);
        let rect = host.item_rect(1).unwrap();
        assert_eq!(rect.center_x(), 120.0);
        assert!((rect.center().y - host.center_line()).abs() < 1e-3);
        assert_eq!(host.item_label(1).as_deref(), Some("Item 1"));
    }

    #[test]
    fn test_without_container_has_no_items() {
        let host = HeadlessDock::without_container();
        assert_eq!(host.item_count(), 0);
        assert_eq!(host.center_line(), 0.0);
    }

    #[test]
    fn test_apply_item_renders_css() {
        let mut host = HeadlessDock::with_centers(&[40.0]);
        let style = ItemStyle::from_influence(0, 0.5, &DockConfig::default());
        host.apply_item(&style);

        let item = host.item(0);
        assert_eq!(item.lift, "10.00px");
        assert_eq!(item.scale, "1.200");
        assert_eq!(item.z_index.as_deref(), Some("20"));
        assert!(item.raised);

        host.apply_item(&ItemStyle::rest(0));
        assert!(host.item(0).is_rest());
        assert_eq!(host.style_writes(), 2);
    }

    #[test]
    fn test_hide_keeps_tooltip_text() {
        let mut host = HeadlessDock::with_centers(&[40.0]);
        host.show_tooltip(&TooltipPlacement {
            label: "Home".to_string(),
            left: 40.0,
        });
        host.hide_tooltip();

        assert!(!host.tooltip().visible);
        assert_eq!(host.tooltip().text, "Home");
        assert_eq!(host.tooltip_writes(), 2);
    }
}
