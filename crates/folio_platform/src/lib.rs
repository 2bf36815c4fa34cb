//! Folio Platform Abstraction Layer
//!
//! Platform-agnostic event types and frame scheduling for the Folio page
//! behaviours. A backend (the browser, or a headless harness) translates
//! its native events into [`Event`] values and hands them to the
//! application, and implements [`FrameScheduler`] so animations can ask for
//! a callback on the next frame.
//!
//! # Platform Implementations
//!
//! - `folio_platform_web` - Browsers via `web-sys` and `gloo`
//! - `folio_dock::headless` - Deterministic in-memory host for tests
//!
//! # Example
//!
//! ```ignore
//! use folio_platform::prelude::*;
//!
//! app.handle_event(&mut host, &Event::Input(InputEvent::Pointer(PointerEvent::Moved {
//!     x: 200.0,
//!     y: 740.0,
//!     kind: PointerKind::Mouse,
//!     item: Some(2),
//! })));
//! ```

mod error;
mod event;
mod frame;
mod input;

// Re-export all public types
pub use error::{PlatformError, Result};
pub use event::{Event, ObserverKind, ViewportEvent, VisibilityEvent};
pub use frame::{FrameHandle, FrameScheduler};
pub use input::{ClickEvent, FocusEvent, InputEvent, Key, KeyboardEvent, PointerEvent, PointerKind};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::error::{PlatformError, Result};
    pub use crate::event::{Event, ObserverKind, ViewportEvent, VisibilityEvent};
    pub use crate::frame::{FrameHandle, FrameScheduler};
    pub use crate::input::{
        ClickEvent, FocusEvent, InputEvent, Key, KeyboardEvent, PointerEvent, PointerKind,
    };
}
