//! Tooltip positioning
//!
//! The tooltip is a single floating label inside the dock container. It is
//! centered horizontally under the hovered or focused item; vertical
//! placement is left to the stylesheet.

use crate::host::DockSurface;

/// Where and what to show
#[derive(Clone, Debug, PartialEq)]
pub struct TooltipPlacement {
    /// Item label
    pub label: String,
    /// Horizontal offset from the container's left edge (px)
    pub left: f32,
}

impl TooltipPlacement {
    /// Offset as a CSS length with one decimal
    pub fn left_css(&self) -> String {
        format!("{:.1}px", self.left)
    }
}

/// Tooltip update produced by the positioner
#[derive(Clone, Debug, PartialEq)]
pub enum TooltipCommand {
    Show(TooltipPlacement),
    Hide,
}

/// Tracks tooltip visibility and computes placements
#[derive(Clone, Debug, Default)]
pub struct TooltipPositioner {
    visible: bool,
}

impl TooltipPositioner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Place the tooltip under `item`
    ///
    /// Returns None when the container or the item cannot be measured, and
    /// [`TooltipCommand::Hide`] when the item has no label.
    pub fn place<S: DockSurface + ?Sized>(
        &mut self,
        surface: &S,
        item: usize,
    ) -> Option<TooltipCommand> {
        let container = surface.container_rect()?;
        let rect = surface.item_rect_in(container, item)?;

        let label = surface
            .item_label(item)
            .map(|label| label.trim().to_string())
            .unwrap_or_default();
        if label.is_empty() {
            return Some(self.hide());
        }

        self.visible = true;
        Some(TooltipCommand::Show(TooltipPlacement {
            label,
            left: rect.center_x() - container.left(),
        }))
    }

    /// Hide the tooltip; contents and position are kept by the renderer
    pub fn hide(&mut self) -> TooltipCommand {
        self.visible = false;
        TooltipCommand::Hide
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::headless::HeadlessDock;

    #[test]
    fn test_place_centers_under_item() {
        let host = HeadlessDock::with_centers(&[40.0, 120.0, 200.0]);
        let mut tooltip = TooltipPositioner::new();

        let command = tooltip.place(&host, 1).unwrap();
        let TooltipCommand::Show(placement) = command else {
            panic!("expected Show, got {command:?}");
        };
        assert_eq!(placement.label, "Item 1");
        assert_eq!(placement.left_css(), "120.0px");
        assert!(tooltip.is_visible());
    }

    #[test]
    fn test_offset_is_relative_to_container() {
        let mut host = HeadlessDock::with_centers(&[40.0]);
        host.move_layout(100.0, 0.0);
        let mut tooltip = TooltipPositioner::new();

        match tooltip.place(&host, 0) {
            Some(TooltipCommand::Show(placement)) => assert_eq!(placement.left, 40.0),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn test_empty_label_hides() {
        let mut host = HeadlessDock::with_centers(&[40.0, 120.0]);
        host.set_label(1, "   ");
        let mut tooltip = TooltipPositioner::new();
        tooltip.place(&host, 0);

        assert_eq!(tooltip.place(&host, 1), Some(TooltipCommand::Hide));
        assert!(!tooltip.is_visible());
    }

    #[test]
    fn test_missing_geometry_is_noop() {
        let host = HeadlessDock::without_container();
        let mut tooltip = TooltipPositioner::new();
        assert_eq!(tooltip.place(&host, 0), None);

        let host = HeadlessDock::with_centers(&[40.0]);
        assert_eq!(tooltip.place(&host, 5), None);
    }
}
