//! Folio Core
//!
//! Foundational primitives shared by every Folio crate:
//!
//! - **Geometry**: viewport-space points, sizes and rectangles as read from
//!   element bounding boxes
//! - **Preferences**: a small string key/value store abstraction backing the
//!   persisted theme and language choices
//!
//! # Example
//!
//! ```rust
//! use folio_core::{MemoryStore, PreferenceStore, Rect};
//!
//! let dock = Rect::new(100.0, 600.0, 480.0, 72.0);
//! assert_eq!(dock.center_x(), 340.0);
//!
//! let mut prefs = MemoryStore::new();
//! prefs.set("theme", "light");
//! assert_eq!(prefs.get("theme").as_deref(), Some("light"));
//! ```

pub mod geometry;
pub mod store;

pub use geometry::{Point, Rect, Size};
pub use store::{MemoryStore, PreferenceStore};
