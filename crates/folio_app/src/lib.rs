//! Folio Application
//!
//! Wires the dock magnifier and the page behaviours to one event stream.
//! Backends construct a [`FolioApp`], call [`FolioApp::start`] once the
//! document is ready, then forward every [`Event`](folio_platform::Event).
//!
//! # Example
//!
//! ```rust
//! use folio_app::prelude::*;
//! use folio_core::MemoryStore;
//! use folio_dock::HeadlessDock;
//! use folio_page::RecordingPageRenderer;
//!
//! let mut host = HeadlessDock::with_centers(&[40.0, 120.0, 200.0]);
//! let mut renderer = RecordingPageRenderer::new();
//! let mut app = FolioApp::new(AppConfig::default(), MemoryStore::new())
//!     .with_links(["#home", "#profile", "#articles"]);
//! app.start(&mut host, &mut renderer);
//!
//! let click = Event::Input(InputEvent::Click(ClickEvent::on_link("#profile")));
//! assert!(app.handle_event(&mut host, &mut renderer, &click));
//! assert_eq!(renderer.active_link(), Some(1));
//! ```

mod app;
mod config;
mod error;

pub use app::FolioApp;
pub use config::AppConfig;
pub use error::{FolioError, Result};

/// Prelude module - import everything commonly needed
pub mod prelude {
    pub use crate::app::FolioApp;
    pub use crate::config::AppConfig;
    pub use crate::error::{FolioError, Result};

    pub use folio_dock::{DockConfig, DockEngine, DockHost};
    pub use folio_page::{PageController, PageRenderer, PageSettings};
    pub use folio_platform::prelude::*;
}
