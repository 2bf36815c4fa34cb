//! DOM-backed dock host

use crate::frame::RafScheduler;
use crate::input::{client_rect, offset_rect};
use crate::markup::{self, class, ItemPatch};
use folio_core::Rect;
use folio_dock::{DockRenderer, DockSurface, ItemStyle, TooltipPlacement};
use folio_platform::{FrameHandle, FrameScheduler};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlElement, Node, Window};

/// Every element matching `selector` that is a `T`
pub(crate) fn query_all<T: JsCast>(document: &Document, selector: &str) -> Vec<T> {
    let Ok(nodes) = document.query_selector_all(selector) else {
        tracing::warn!("folio: invalid selector {}", selector);
        return Vec::new();
    };
    (0..nodes.length())
        .filter_map(|index| nodes.item(index))
        .filter_map(|node| node.dyn_into::<T>().ok())
        .collect()
}

/// Position of `node` in `elements`
pub(crate) fn position_of<T: AsRef<Node>>(elements: &[T], node: &Node) -> Option<usize> {
    elements
        .iter()
        .position(|element| element.as_ref().is_same_node(Some(node)))
}

/// Log a failed DOM write
pub(crate) fn check<T>(what: &str, result: Result<T, JsValue>) {
    if let Err(err) = result {
        tracing::warn!("folio: {} failed: {:?}", what, err);
    }
}

/// The dock as found in the document
pub struct WebDock {
    container: Option<HtmlElement>,
    items: Vec<HtmlElement>,
    tooltip: Option<HtmlElement>,
    reduced_motion: bool,
    frames: RafScheduler,
}

impl WebDock {
    /// Look up the dock, its items and the tooltip
    pub fn query(window: &Window, document: &Document, frames: RafScheduler) -> Self {
        let container = document
            .query_selector(markup::DOCK)
            .ok()
            .flatten()
            .and_then(|element| element.dyn_into::<HtmlElement>().ok());
        let items = query_all::<HtmlElement>(document, markup::DOCK_ITEMS);
        let tooltip = document
            .get_element_by_id(markup::TOOLTIP_ID)
            .and_then(|element| element.dyn_into::<HtmlElement>().ok());
        let reduced_motion = window
            .match_media(markup::REDUCED_MOTION_QUERY)
            .ok()
            .flatten()
            .is_some_and(|query| query.matches());

        tracing::debug!(
            "WebDock: container {}, {} items, tooltip {}",
            if container.is_some() { "found" } else { "missing" },
            items.len(),
            if tooltip.is_some() { "found" } else { "missing" }
        );

        Self {
            container,
            items,
            tooltip,
            reduced_motion,
            frames,
        }
    }

    pub fn container(&self) -> Option<&HtmlElement> {
        self.container.as_ref()
    }

    pub fn frames_mut(&mut self) -> &mut RafScheduler {
        &mut self.frames
    }

    /// Index of the dock item containing `element`
    pub fn item_containing(&self, element: &Element) -> Option<usize> {
        let item = element.closest(markup::DOCK_ITEM).ok()??;
        position_of(&self.items, &item)
    }

    /// Index of `element` if it is itself a dock item
    pub fn item_index(&self, element: &Element) -> Option<usize> {
        position_of(&self.items, element)
    }
}

impl DockSurface for WebDock {
    fn container_rect(&self) -> Option<Rect> {
        let rect = self.container.as_ref()?.get_bounding_client_rect();
        Some(client_rect(rect.left(), rect.top(), rect.width(), rect.height()))
    }

    fn item_count(&self) -> usize {
        if self.container.is_some() {
            self.items.len()
        } else {
            0
        }
    }

    fn item_rect(&self, index: usize) -> Option<Rect> {
        self.item_rect_in(self.container_rect()?, index)
    }

    fn item_rect_in(&self, container: Rect, index: usize) -> Option<Rect> {
        let item = self.items.get(index)?;
        Some(offset_rect(
            container,
            item.offset_left(),
            item.offset_top(),
            item.offset_width(),
            item.offset_height(),
        ))
    }

    fn item_label(&self, index: usize) -> Option<String> {
        self.items.get(index)?.get_attribute("aria-label")
    }

    fn focus_within(&self) -> bool {
        self.container
            .as_ref()
            .is_some_and(|container| container.matches(":focus-within").unwrap_or(false))
    }

    fn prefers_reduced_motion(&self) -> bool {
        self.reduced_motion
    }
}

impl DockRenderer for WebDock {
    fn apply_item(&mut self, style: &ItemStyle) {
        let Some(item) = self.items.get(style.index) else {
            return;
        };
        let patch = ItemPatch::from(style);
        let css = item.style();
        check("set --dock-lift", css.set_property(class::LIFT, &patch.lift));
        check("set --dock-scale", css.set_property(class::SCALE, &patch.scale));
        match &patch.z_index {
            Some(z) => check("set z-index", css.set_property("z-index", z)),
            None => check("remove z-index", css.remove_property("z-index")),
        }

        let classes = item.class_list();
        check("toggle is-raised", classes.toggle_with_force(class::RAISED, patch.raised));
        check("toggle hot", classes.toggle_with_force(class::HOT, patch.hot));
    }

    fn show_tooltip(&mut self, placement: &TooltipPlacement) {
        let Some(tooltip) = &self.tooltip else {
            return;
        };
        tooltip.set_text_content(Some(&placement.label));
        check("set tooltip left", tooltip.style().set_property("left", &placement.left_css()));
        check("show tooltip", tooltip.class_list().add_1(class::VISIBLE));
    }

    fn hide_tooltip(&mut self) {
        if let Some(tooltip) = &self.tooltip {
            check("hide tooltip", tooltip.class_list().remove_1(class::VISIBLE));
        }
    }
}

impl FrameScheduler for WebDock {
    fn request_frame(&mut self) -> FrameHandle {
        self.frames.request_frame()
    }

    fn cancel_frame(&mut self, handle: FrameHandle) {
        self.frames.cancel_frame(handle);
    }
}
