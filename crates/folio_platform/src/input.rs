//! Input event types for pointer, focus, click and keyboard

/// Input events
#[derive(Clone, Debug, PartialEq)]
pub enum InputEvent {
    /// Pointer event scoped to the dock container
    Pointer(PointerEvent),
    /// Focus moving into or out of the dock
    Focus(FocusEvent),
    /// An element was activated (click, tap, Enter)
    Click(ClickEvent),
    /// Keyboard event
    Keyboard(KeyboardEvent),
}

// ============================================================================
// Pointer Events
// ============================================================================

/// The kind of device behind a pointer event
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum PointerKind {
    /// A mouse or trackpad
    Mouse,
    /// A finger on a touchscreen
    Touch,
    /// A stylus
    Pen,
    /// The platform did not report a kind
    #[default]
    Unspecified,
    /// A kind this crate does not know about
    Other,
}

impl PointerKind {
    /// Parse the platform's pointer type name (`"mouse"`, `"touch"`, `"pen"`)
    ///
    /// An empty name maps to [`PointerKind::Unspecified`].
    pub fn from_name(name: &str) -> Self {
        match name {
            "" => PointerKind::Unspecified,
            "mouse" => PointerKind::Mouse,
            "touch" => PointerKind::Touch,
            "pen" => PointerKind::Pen,
            _ => PointerKind::Other,
        }
    }

    /// Whether this pointer can hover
    ///
    /// Only mouse pointers hover. Platforms that do not report a kind are
    /// assumed to be mouse-driven.
    pub fn hovers(&self) -> bool {
        matches!(self, PointerKind::Mouse | PointerKind::Unspecified)
    }
}

/// Pointer events relative to the dock container
#[derive(Clone, Debug, PartialEq)]
pub enum PointerEvent {
    /// Pointer entered the dock
    Entered {
        /// X position in viewport coordinates
        x: f32,
        /// Y position in viewport coordinates
        y: f32,
        /// Device kind
        kind: PointerKind,
    },
    /// Pointer moved inside the dock
    Moved {
        /// X position in viewport coordinates
        x: f32,
        /// Y position in viewport coordinates
        y: f32,
        /// Device kind
        kind: PointerKind,
        /// Index of the dock item under the pointer, if any
        item: Option<usize>,
    },
    /// Pointer left the dock
    Left,
}

impl PointerEvent {
    /// Get the position (returns None for Left)
    pub fn position(&self) -> Option<(f32, f32)> {
        match self {
            PointerEvent::Entered { x, y, .. } => Some((*x, *y)),
            PointerEvent::Moved { x, y, .. } => Some((*x, *y)),
            PointerEvent::Left => None,
        }
    }

    /// Get the pointer kind (returns None for Left)
    pub fn kind(&self) -> Option<PointerKind> {
        match self {
            PointerEvent::Entered { kind, .. } => Some(*kind),
            PointerEvent::Moved { kind, .. } => Some(*kind),
            PointerEvent::Left => None,
        }
    }
}

// ============================================================================
// Focus Events
// ============================================================================

/// Keyboard focus moving inside the dock
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FocusEvent {
    /// An element inside the dock received focus
    In {
        /// Index of the focused dock item, or None if the focused element
        /// is not a dock item
        item: Option<usize>,
    },
    /// An element inside the dock lost focus
    ///
    /// Focus may still be held by another element inside the dock.
    Out,
}

// ============================================================================
// Click Events
// ============================================================================

/// Activation of a page element
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ClickEvent {
    /// `id` attribute of the activated element
    pub id: Option<String>,
    /// `href` attribute of the activated element (links only)
    pub href: Option<String>,
}

impl ClickEvent {
    /// Click on an element identified by id
    pub fn on_id(id: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            href: None,
        }
    }

    /// Click on a link
    pub fn on_link(href: impl Into<String>) -> Self {
        Self {
            id: None,
            href: Some(href.into()),
        }
    }
}

// ============================================================================
// Keyboard Events
// ============================================================================

/// Keyboard event (key presses only)
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KeyboardEvent {
    /// The key that was pressed
    pub key: Key,
}

/// Key codes the page reacts to
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Key {
    Escape,
    Enter,
    Space,
    Tab,

    // Character input
    Char(char),

    // Unknown key
    Unknown,
}

impl Key {
    /// Parse a DOM `KeyboardEvent.key` value
    pub fn from_name(name: &str) -> Self {
        match name {
            "Escape" | "Esc" => Key::Escape,
            "Enter" => Key::Enter,
            " " | "Spacebar" => Key::Space,
            "Tab" => Key::Tab,
            other => {
                let mut chars = other.chars();
                match (chars.next(), chars.next()) {
                    (Some(ch), None) => Key::Char(ch),
                    _ => Key::Unknown,
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pointer_kind_from_name() {
        assert_eq!(PointerKind::from_name("mouse"), PointerKind::Mouse);
        assert_eq!(PointerKind::from_name("touch"), PointerKind::Touch);
        assert_eq!(PointerKind::from_name("pen"), PointerKind::Pen);
        assert_eq!(PointerKind::from_name(""), PointerKind::Unspecified);
        assert_eq!(PointerKind::from_name("gaze"), PointerKind::Other);
    }

    #[test]
    fn test_only_mouse_like_pointers_hover() {
        assert!(PointerKind::Mouse.hovers());
        assert!(PointerKind::Unspecified.hovers());
        assert!(!PointerKind::Touch.hovers());
        assert!(!PointerKind::Pen.hovers());
        assert!(!PointerKind::Other.hovers());
    }

    #[test]
    fn test_pointer_event_accessors() {
        let moved = PointerEvent::Moved {
            x: 1.0,
            y: 2.0,
            kind: PointerKind::Pen,
            item: None,
        };
        assert_eq!(moved.position(), Some((1.0, 2.0)));
        assert_eq!(moved.kind(), Some(PointerKind::Pen));
        assert_eq!(PointerEvent::Left.position(), None);
    }

    #[test]
    fn test_key_from_name() {
        assert_eq!(Key::from_name("Escape"), Key::Escape);
        assert_eq!(Key::from_name("Esc"), Key::Escape);
        assert_eq!(Key::from_name(" "), Key::Space);
        assert_eq!(Key::from_name("a"), Key::Char('a'));
        assert_eq!(Key::from_name("ArrowLeft"), Key::Unknown);
    }
}
