//! Folio Page Behaviours
//!
//! Everything on the portfolio page besides the dock magnifier:
//!
//! - [`ColorScheme`] - light/dark theme, persisted under `theme`
//! - [`Catalog`] / [`Language`] - Spanish/English dictionary, persisted
//!   under `lang`, with Spanish fallback
//! - [`RevealTracker`] - one-shot scroll reveal
//! - [`ActiveLink`] - the highlighted dock link
//! - [`SoundToggle`] and [`Drawer`] - two small toggles
//!
//! [`PageController`] owns them all and writes through a [`PageRenderer`].
//!
//! # Example
//!
//! ```rust
//! use folio_core::MemoryStore;
//! use folio_page::{Language, PageController, PageSettings, RecordingPageRenderer};
//!
//! let store = MemoryStore::with_values([("lang", "en")]);
//! let mut page = PageController::new(PageSettings::default(), store);
//! let mut renderer = RecordingPageRenderer::with_keys(["dock.home"], []);
//! page.init(&mut renderer);
//!
//! assert_eq!(page.language(), Language::En);
//! assert_eq!(renderer.text("dock.home"), Some("Home"));
//! ```

pub mod drawer;
pub mod error;
pub mod i18n;
pub mod nav;
pub mod page;
pub mod renderer;
pub mod reveal;
pub mod settings;
pub mod sound;
pub mod theme;

pub use drawer::Drawer;
pub use error::{PageError, Result};
pub use i18n::{Catalog, Dictionary, Language};
pub use nav::ActiveLink;
pub use page::PageController;
pub use renderer::{PageRenderer, RecordingPageRenderer};
pub use reveal::RevealTracker;
pub use settings::PageSettings;
pub use sound::SoundToggle;
pub use theme::ColorScheme;
