//! DOM page renderer

use crate::dom::{check, query_all};
use crate::markup::{self, class};
use folio_page::{ColorScheme, Dictionary, PageRenderer, PageSettings};
use web_sys::{Document, Element, IntersectionObserver};

/// Elements carrying a translation key in `attribute`
fn keyed(document: &Document, attribute: &str) -> Vec<(Element, String)> {
    query_all::<Element>(document, &format!("[{attribute}]"))
        .into_iter()
        .filter_map(|element| {
            let key = element.get_attribute(attribute)?;
            (!key.is_empty()).then_some((element, key))
        })
        .collect()
}

/// Writes page state into the document
pub struct DomRenderer {
    document: Document,
    root: Option<Element>,
    meta_description: Option<Element>,
    text_nodes: Vec<(Element, String)>,
    aria_nodes: Vec<(Element, String)>,
    reveal_targets: Vec<Element>,
    reveal_observer: Option<IntersectionObserver>,
    links: Vec<Element>,
    sound_toggle: Option<Element>,
    drawer_toggle: Option<Element>,
}

impl DomRenderer {
    pub fn query(document: &Document, settings: &PageSettings) -> Self {
        let renderer = Self {
            document: document.clone(),
            root: document.document_element(),
            meta_description: document.get_element_by_id(markup::META_DESCRIPTION_ID),
            text_nodes: keyed(document, markup::TEXT_KEY),
            aria_nodes: keyed(document, markup::ARIA_KEY),
            reveal_targets: query_all(document, markup::REVEAL),
            reveal_observer: None,
            links: query_all(document, markup::DOCK_LINKS),
            sound_toggle: document.get_element_by_id(&settings.sound_toggle_id),
            drawer_toggle: document.get_element_by_id(&settings.drawer_toggle_id),
        };
        tracing::debug!(
            "DomRenderer: {} text keys, {} aria keys, {} reveal targets, {} links",
            renderer.text_nodes.len(),
            renderer.aria_nodes.len(),
            renderer.reveal_targets.len(),
            renderer.links.len()
        );
        renderer
    }

    pub fn reveal_targets(&self) -> &[Element] {
        &self.reveal_targets
    }

    /// Dock link `href`s in document order
    pub fn link_hrefs(&self) -> Vec<String> {
        self.links
            .iter()
            .map(|link| link.get_attribute("href").unwrap_or_default())
            .collect()
    }

    /// Observer to release revealed elements from
    pub fn set_reveal_observer(&mut self, observer: IntersectionObserver) {
        self.reveal_observer = Some(observer);
    }
}

impl PageRenderer for DomRenderer {
    fn set_color_scheme(&mut self, scheme: ColorScheme) {
        let Some(root) = &self.root else {
            return;
        };
        match markup::theme_attribute(scheme) {
            Some(value) => check("set data-theme", root.set_attribute(markup::THEME, value)),
            None => check("remove data-theme", root.remove_attribute(markup::THEME)),
        }
    }

    fn translate(&mut self, dictionary: &Dictionary<'_>) {
        for (element, key) in &self.text_nodes {
            if let Some(text) = dictionary.get(key) {
                element.set_text_content(Some(text));
            }
        }
        for (element, key) in &self.aria_nodes {
            if let Some(text) = dictionary.get(key) {
                check("set aria-label", element.set_attribute("aria-label", text));
            }
        }
    }

    fn set_document_language(&mut self, code: &str) {
        if let Some(root) = &self.root {
            check("set lang", root.set_attribute("lang", code));
        }
    }

    fn set_document_title(&mut self, title: &str) {
        self.document.set_title(title);
    }

    fn set_meta_description(&mut self, description: &str) {
        if let Some(meta) = &self.meta_description {
            check("set meta description", meta.set_attribute("content", description));
        }
    }

    fn reveal(&mut self, index: usize) {
        let Some(target) = self.reveal_targets.get(index) else {
            return;
        };
        check("reveal", target.class_list().add_1(class::VISIBLE));
        if let Some(observer) = &self.reveal_observer {
            observer.unobserve(target);
        }
    }

    fn set_active_link(&mut self, index: usize) {
        for (position, link) in self.links.iter().enumerate() {
            check(
                "toggle active link",
                link.class_list().toggle_with_force(class::ACTIVE, position == index),
            );
        }
    }

    fn set_muted(&mut self, muted: bool) {
        if let Some(toggle) = &self.sound_toggle {
            check("toggle is-muted", toggle.class_list().toggle_with_force(class::MUTED, muted));
        }
    }

    fn set_drawer_open(&mut self, open: bool) {
        if let Some(root) = &self.root {
            check("toggle menu-open", root.class_list().toggle_with_force(class::MENU_OPEN, open));
        }
        if let Some(toggle) = &self.drawer_toggle {
            let expanded = if open { "true" } else { "false" };
            check("set aria-expanded", toggle.set_attribute("aria-expanded", expanded));
        }
    }
}
