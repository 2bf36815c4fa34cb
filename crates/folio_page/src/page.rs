//! Page controller
//!
//! Owns theme, language, reveal, active link, sound and drawer state for
//! one page and routes platform events to them. Preferences are read from
//! and written to a [`PreferenceStore`].

use crate::drawer::Drawer;
use crate::i18n::{Catalog, Language};
use crate::nav::ActiveLink;
use crate::renderer::PageRenderer;
use crate::reveal::RevealTracker;
use crate::settings::PageSettings;
use crate::sound::SoundToggle;
use crate::theme::ColorScheme;
use folio_core::PreferenceStore;
use folio_platform::{
    ClickEvent, Event, InputEvent, Key, KeyboardEvent, ObserverKind, VisibilityEvent,
};

/// Page behaviours other than the dock
#[derive(Debug)]
pub struct PageController<S: PreferenceStore> {
    settings: PageSettings,
    store: S,
    catalog: Catalog,
    scheme: ColorScheme,
    language: Language,
    reveal: RevealTracker,
    links: ActiveLink,
    sound: SoundToggle,
    drawer: Drawer,
}

impl<S: PreferenceStore> PageController<S> {
    pub fn new(settings: PageSettings, store: S) -> Self {
        let reveal = RevealTracker::new(0, settings.reveal_threshold);
        Self {
            scheme: settings.default_scheme,
            language: settings.default_language,
            settings,
            store,
            catalog: Catalog::builtin(),
            reveal,
            links: ActiveLink::default(),
            sound: SoundToggle::new(),
            drawer: Drawer::new(),
        }
    }

    /// Set the dock links, by `href`, in document order
    pub fn with_links(mut self, hrefs: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.links = ActiveLink::new(hrefs);
        self
    }

    /// Set how many elements are observed for scroll reveal
    pub fn with_reveal_targets(mut self, count: usize) -> Self {
        self.reveal = RevealTracker::new(count, self.settings.reveal_threshold);
        self
    }

    pub fn settings(&self) -> &PageSettings {
        &self.settings
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn scheme(&self) -> ColorScheme {
        self.scheme
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn active_link(&self) -> Option<usize> {
        self.links.active()
    }

    pub fn reveal(&self) -> &RevealTracker {
        &self.reveal
    }

    pub fn is_muted(&self) -> bool {
        self.sound.is_muted()
    }

    pub fn is_drawer_open(&self) -> bool {
        self.drawer.is_open()
    }

    /// Apply stored preferences to the document
    ///
    /// The language is applied (and written back, normalized) first, then
    /// the stored color scheme.
    pub fn init<R: PageRenderer + ?Sized>(&mut self, renderer: &mut R) {
        let stored = self.store.get(&self.settings.language_key);
        let language = Language::from_stored(stored.as_deref(), self.settings.default_language);
        self.apply_language(renderer, language);

        self.scheme = match self.store.get(&self.settings.theme_key) {
            Some(value) => ColorScheme::from_stored(Some(&value)),
            None => self.settings.default_scheme,
        };
        renderer.set_color_scheme(self.scheme);
        tracing::debug!(
            "PageController: language {}, scheme {}",
            self.language,
            self.scheme.as_str()
        );
    }

    /// Translate the document and persist the choice
    pub fn apply_language<R: PageRenderer + ?Sized>(&mut self, renderer: &mut R, language: Language) {
        self.language = language;
        let dictionary = self.catalog.dictionary(language);

        renderer.translate(&dictionary);
        if let Some(title) = dictionary.page_title() {
            renderer.set_document_title(title);
        }
        if let Some(description) = dictionary.meta_description() {
            renderer.set_meta_description(description);
        }
        renderer.set_document_language(language.code());

        self.store.set(&self.settings.language_key, language.code());
    }

    pub fn toggle_language<R: PageRenderer + ?Sized>(&mut self, renderer: &mut R) -> Language {
        let next = self.language.toggled();
        self.apply_language(renderer, next);
        next
    }

    /// Flip the color scheme and persist it
    pub fn toggle_theme<R: PageRenderer + ?Sized>(&mut self, renderer: &mut R) -> ColorScheme {
        self.scheme = self.scheme.toggled();
        renderer.set_color_scheme(self.scheme);
        self.store.set(&self.settings.theme_key, self.scheme.as_str());
        self.scheme
    }

    pub fn toggle_sound<R: PageRenderer + ?Sized>(&mut self, renderer: &mut R) -> bool {
        let muted = self.sound.toggle();
        renderer.set_muted(muted);
        muted
    }

    pub fn toggle_drawer<R: PageRenderer + ?Sized>(&mut self, renderer: &mut R) -> bool {
        let open = self.drawer.toggle();
        renderer.set_drawer_open(open);
        open
    }

    /// Close the drawer if it is open; returns true if it was
    pub fn close_drawer<R: PageRenderer + ?Sized>(&mut self, renderer: &mut R) -> bool {
        let closed = self.drawer.close();
        if closed {
            renderer.set_drawer_open(false);
        }
        closed
    }

    /// Route a platform event
    ///
    /// Returns true if the event changed page state.
    pub fn handle_event<R: PageRenderer + ?Sized>(&mut self, renderer: &mut R, event: &Event) -> bool {
        match event {
            Event::Input(InputEvent::Click(click)) => self.handle_click(renderer, click),
            Event::Input(InputEvent::Keyboard(KeyboardEvent { key: Key::Escape })) => {
                self.close_drawer(renderer)
            }
            Event::Visibility(visibility) => self.handle_visibility(renderer, visibility),
            _ => false,
        }
    }

    fn handle_click<R: PageRenderer + ?Sized>(&mut self, renderer: &mut R, click: &ClickEvent) -> bool {
        if let Some(id) = click.id.as_deref() {
            if id == self.settings.theme_toggle_id {
                self.toggle_theme(renderer);
                return true;
            }
            if id == self.settings.language_toggle_id {
                self.toggle_language(renderer);
                return true;
            }
            if id == self.settings.sound_toggle_id {
                self.toggle_sound(renderer);
                return true;
            }
            if id == self.settings.drawer_toggle_id {
                self.toggle_drawer(renderer);
                return true;
            }
        }

        let Some(href) = click.href.as_deref() else {
            return false;
        };
        let activated = self.links.click(href);
        if let Some(index) = activated {
            renderer.set_active_link(index);
        }
        let closed = self.close_drawer(renderer);
        activated.is_some() || closed
    }

    fn handle_visibility<R: PageRenderer + ?Sized>(
        &mut self,
        renderer: &mut R,
        event: &VisibilityEvent,
    ) -> bool {
        match event.observer {
            ObserverKind::Reveal => match self.reveal.handle(event) {
                Some(index) => {
                    renderer.reveal(index);
                    true
                }
                None => false,
            },
            ObserverKind::Section => {
                if !event.intersecting {
                    return false;
                }
                let Some(id) = event.id.as_deref() else {
                    return false;
                };
                match self.links.section_visible(id) {
                    Some(index) => {
                        renderer.set_active_link(index);
                        true
                    }
                    None => false,
                }
            }
        }
    }
}
