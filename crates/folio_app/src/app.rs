//! Folio application
//!
//! The composition root for one page: a [`DockEngine`] and a
//! [`PageController`], fed from a single stream of platform events.

use crate::config::AppConfig;
use folio_core::PreferenceStore;
use folio_dock::{DockEngine, DockHost};
use folio_page::{PageController, PageRenderer};
use folio_platform::Event;

/// The page application
#[derive(Debug)]
pub struct FolioApp<S: PreferenceStore> {
    dock: DockEngine,
    page: PageController<S>,
    events: u64,
}

impl<S: PreferenceStore> FolioApp<S> {
    pub fn new(config: AppConfig, store: S) -> Self {
        Self {
            dock: DockEngine::new(config.dock),
            page: PageController::new(config.page, store),
            events: 0,
        }
    }

    /// Set the dock links, by `href`, in document order
    pub fn with_links(mut self, hrefs: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.page = self.page.with_links(hrefs);
        self
    }

    /// Set how many elements are observed for scroll reveal
    pub fn with_reveal_targets(mut self, count: usize) -> Self {
        self.page = self.page.with_reveal_targets(count);
        self
    }

    pub fn dock(&self) -> &DockEngine {
        &self.dock
    }

    pub fn dock_mut(&mut self) -> &mut DockEngine {
        &mut self.dock
    }

    pub fn page(&self) -> &PageController<S> {
        &self.page
    }

    pub fn page_mut(&mut self) -> &mut PageController<S> {
        &mut self.page
    }

    /// Events handled so far
    pub fn event_count(&self) -> u64 {
        self.events
    }

    /// Apply stored preferences and attach the dock
    pub fn start<H, R>(&mut self, host: &mut H, renderer: &mut R)
    where
        H: DockHost + ?Sized,
        R: PageRenderer + ?Sized,
    {
        self.page.init(renderer);
        self.dock.attach(host);
        tracing::info!(
            "FolioApp: started (dock {})",
            if self.dock.is_enabled() { "enabled" } else { "disabled" }
        );
    }

    /// Route one platform event to the dock and the page
    ///
    /// Returns true if either of them consumed it.
    pub fn handle_event<H, R>(&mut self, host: &mut H, renderer: &mut R, event: &Event) -> bool
    where
        H: DockHost + ?Sized,
        R: PageRenderer + ?Sized,
    {
        self.events += 1;
        let dock = self.dock.handle_event(host, event);
        let page = self.page.handle_event(renderer, event);
        dock || page
    }
}
