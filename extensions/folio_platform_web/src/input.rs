//! Browser input conversion (DOM -> folio_platform)
//!
//! Pure functions over the values a DOM event carries, so they can be
//! tested without a browser.

use folio_core::Rect;
use folio_platform::{
    ClickEvent, Key, KeyboardEvent, ObserverKind, PointerEvent, PointerKind, VisibilityEvent,
};

/// Convert a dock pointer event by DOM event type
///
/// Returns None for event types the dock does not listen to.
pub fn convert_pointer(
    event_type: &str,
    x: f64,
    y: f64,
    pointer_type: &str,
    item: Option<usize>,
) -> Option<PointerEvent> {
    let kind = PointerKind::from_name(pointer_type);
    let (x, y) = (x as f32, y as f32);
    match event_type {
        "pointerenter" => Some(PointerEvent::Entered { x, y, kind }),
        "pointermove" => Some(PointerEvent::Moved { x, y, kind, item }),
        "pointerleave" => Some(PointerEvent::Left),
        _ => None,
    }
}

/// Convert a DOM `KeyboardEvent.key`
pub fn convert_key(name: &str) -> KeyboardEvent {
    KeyboardEvent {
        key: Key::from_name(name),
    }
}

/// Convert the activated element's `id` and `href`
///
/// Empty attributes count as absent; None if neither is present.
pub fn convert_click(id: Option<String>, href: Option<String>) -> Option<ClickEvent> {
    let id = id.filter(|id| !id.is_empty());
    let href = href.filter(|href| !href.is_empty());
    if id.is_none() && href.is_none() {
        return None;
    }
    Some(ClickEvent { id, href })
}

/// Convert an intersection observer entry
///
/// The ratio is clamped to `[0, 1]`; a non-finite ratio becomes 0.
pub fn convert_visibility(
    observer: ObserverKind,
    index: usize,
    id: Option<String>,
    intersecting: bool,
    ratio: f64,
) -> VisibilityEvent {
    let ratio = if ratio.is_finite() {
        ratio.clamp(0.0, 1.0) as f32
    } else {
        0.0
    };
    VisibilityEvent {
        observer,
        index,
        id: id.filter(|id| !id.is_empty()),
        intersecting,
        ratio,
    }
}

/// Convert a `DOMRect` reading
pub fn client_rect(left: f64, top: f64, width: f64, height: f64) -> Rect {
    Rect::new(left as f32, top as f32, width as f32, height as f32)
}

/// Layout box of an item from its offsets inside the dock
///
/// Offsets ignore CSS transforms, so the lift and scale the dock applies
/// never feed back into the geometry it reads.
pub fn offset_rect(
    container: Rect,
    offset_left: i32,
    offset_top: i32,
    offset_width: i32,
    offset_height: i32,
) -> Rect {
    Rect::new(
        container.left() + offset_left as f32,
        container.top() + offset_top as f32,
        offset_width as f32,
        offset_height as f32,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_convert_pointer_by_type() {
        assert_eq!(
            convert_pointer("pointerenter", 10.0, 20.0, "mouse", None),
            Some(PointerEvent::Entered {
                x: 10.0,
                y: 20.0,
                kind: PointerKind::Mouse
            })
        );
        assert_eq!(
            convert_pointer("pointermove", 1.0, 2.0, "touch", Some(3)),
            Some(PointerEvent::Moved {
                x: 1.0,
                y: 2.0,
                kind: PointerKind::Touch,
                item: Some(3)
            })
        );
        assert_eq!(
            convert_pointer("pointerleave", 0.0, 0.0, "", None),
            Some(PointerEvent::Left)
        );
        assert_eq!(convert_pointer("pointerdown", 0.0, 0.0, "mouse", None), None);
    }

    #[test]
    fn test_empty_pointer_type_hovers() {
        let Some(PointerEvent::Entered { kind, .. }) =
            convert_pointer("pointerenter", 0.0, 0.0, "", None)
        else {
            panic!("expected an enter event");
        };
        assert!(kind.hovers());
    }

    #[test]
    fn test_convert_click() {
        assert_eq!(
            convert_click(Some("dock-theme".into()), None),
            Some(ClickEvent::on_id("dock-theme"))
        );
        assert_eq!(
            convert_click(Some(String::new()), Some("#code".into())),
            Some(ClickEvent::on_link("#code"))
        );
        assert_eq!(convert_click(Some(String::new()), None), None);
    }

    #[test]
    fn test_convert_visibility_clamps() {
        let event = convert_visibility(ObserverKind::Section, 2, Some("code".into()), true, 1.2);
        assert_eq!(event.ratio, 1.0);
        assert_eq!(event.id.as_deref(), Some("code"));

        let event = convert_visibility(ObserverKind::Reveal, 0, Some(String::new()), false, f64::NAN);
        assert_eq!(event.ratio, 0.0);
        assert_eq!(event.id, None);
    }

    #[test]
    fn test_offset_rect_is_relative_to_container() {
        let container = client_rect(100.0, 700.0, 400.0, 100.0);
        let rect = offset_rect(container, 56, 26, 48, 48);
        assert_eq!(rect.left(), 156.0);
        assert_eq!(rect.center_x(), 180.0);
        assert_eq!(rect.top(), 726.0);
    }

    #[test]
    fn test_convert_key() {
        assert_eq!(convert_key("Escape").key, Key::Escape);
        assert_eq!(convert_key("ArrowUp").key, Key::Unknown);
    }
}
