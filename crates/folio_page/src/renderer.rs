//! Page rendering seam
//!
//! [`PageRenderer`] is everything the page controller writes to the
//! document. The browser backend implements it over the DOM; tests use
//! [`RecordingPageRenderer`].

use crate::i18n::Dictionary;
use crate::theme::ColorScheme;
use rustc_hash::FxHashMap;

/// Document updates issued by the page controller
pub trait PageRenderer {
    /// Switch the root color scheme
    fn set_color_scheme(&mut self, scheme: ColorScheme);

    /// Re-translate every text and aria-label key in the document
    ///
    /// Keys the dictionary does not know keep their current text.
    fn translate(&mut self, dictionary: &Dictionary<'_>);

    /// Set the document language attribute
    fn set_document_language(&mut self, code: &str);

    fn set_document_title(&mut self, title: &str);

    fn set_meta_description(&mut self, description: &str);

    /// Reveal observed element `index`
    fn reveal(&mut self, index: usize);

    /// Mark dock link `index` active and every other link inactive
    fn set_active_link(&mut self, index: usize);

    /// Show the sound toggle as muted or not
    fn set_muted(&mut self, muted: bool);

    /// Open or close the mobile drawer
    fn set_drawer_open(&mut self, open: bool);
}

/// In-memory renderer that records the resulting document state
#[derive(Clone, Debug, Default)]
pub struct RecordingPageRenderer {
    text_keys: Vec<String>,
    aria_keys: Vec<String>,
    texts: FxHashMap<String, String>,
    aria_labels: FxHashMap<String, String>,
    scheme: ColorScheme,
    language: Option<String>,
    title: Option<String>,
    meta_description: Option<String>,
    revealed: Vec<usize>,
    active_link: Option<usize>,
    muted: bool,
    drawer_open: bool,
    translations: usize,
}

impl RecordingPageRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// A document containing elements for the given text and aria keys
    pub fn with_keys<'a>(
        text_keys: impl IntoIterator<Item = &'a str>,
        aria_keys: impl IntoIterator<Item = &'a str>,
    ) -> Self {
        Self {
            text_keys: text_keys.into_iter().map(str::to_string).collect(),
            aria_keys: aria_keys.into_iter().map(str::to_string).collect(),
            ..Self::default()
        }
    }

    pub fn text(&self, key: &str) -> Option<&str> {
        self.texts.get(key).map(String::as_str)
    }

    pub fn aria_label(&self, key: &str) -> Option<&str> {
        self.aria_labels.get(key).map(String::as_str)
    }

    pub fn scheme(&self) -> ColorScheme {
        self.scheme
    }

    pub fn language(&self) -> Option<&str> {
        self.language.as_deref()
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn meta_description(&self) -> Option<&str> {
        self.meta_description.as_deref()
    }

    /// Revealed element indices in reveal order
    pub fn revealed(&self) -> &[usize] {
        &self.revealed
    }

    pub fn active_link(&self) -> Option<usize> {
        self.active_link
    }

    pub fn is_muted(&self) -> bool {
        self.muted
    }

    pub fn is_drawer_open(&self) -> bool {
        self.drawer_open
    }

    /// Number of full translation passes
    pub fn translations(&self) -> usize {
        self.translations
    }
}

impl PageRenderer for RecordingPageRenderer {
    fn set_color_scheme(&mut self, scheme: ColorScheme) {
        self.scheme = scheme;
    }

    fn translate(&mut self, dictionary: &Dictionary<'_>) {
        self.translations += 1;
        for key in &self.text_keys {
            if let Some(text) = dictionary.get(key) {
                self.texts.insert(key.clone(), text.to_string());
            }
        }
        for key in &self.aria_keys {
            if let Some(text) = dictionary.get(key) {
                self.aria_labels.insert(key.clone(), text.to_string());
            }
        }
    }

    fn set_document_language(&mut self, code: &str) {
        self.language = Some(code.to_string());
    }

    fn set_document_title(&mut self, title: &str) {
        self.title = Some(title.to_string());
    }

    fn set_meta_description(&mut self, description: &str) {
        self.meta_description = Some(description.to_string());
    }

    fn reveal(&mut self, index: usize) {
        self.revealed.push(index);
    }

    fn set_active_link(&mut self, index: usize) {
        self.active_link = Some(index);
    }

    fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }

    fn set_drawer_open(&mut self, open: bool) {
        self.drawer_open = open;
    }
}
