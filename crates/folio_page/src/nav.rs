//! Active dock link
//!
//! Exactly one dock link is marked active: the last one clicked, or the one
//! pointing at the section currently in view.

/// Dock links by `href`, with at most one active
#[derive(Clone, Debug, Default)]
pub struct ActiveLink {
    hrefs: Vec<String>,
    active: Option<usize>,
}

impl ActiveLink {
    pub fn new(hrefs: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            hrefs: hrefs.into_iter().map(Into::into).collect(),
            active: None,
        }
    }

    pub fn active(&self) -> Option<usize> {
        self.active
    }

    pub fn hrefs(&self) -> &[String] {
        &self.hrefs
    }

    /// Index of the link with this exact `href`
    pub fn position(&self, href: &str) -> Option<usize> {
        self.hrefs.iter().position(|h| h == href)
    }

    /// A link was clicked
    ///
    /// Returns the link index; unknown links change nothing.
    pub fn click(&mut self, href: &str) -> Option<usize> {
        let index = self.position(href)?;
        self.active = Some(index);
        Some(index)
    }

    /// A section with this `id` came into view
    ///
    /// Activates the link whose `href` is `#<id>`, if there is one.
    pub fn section_visible(&mut self, id: &str) -> Option<usize> {
        if id.is_empty() {
            return None;
        }
        let index = self
            .hrefs
            .iter()
            .position(|href| href.strip_prefix('#') == Some(id))?;
        if self.active != Some(index) {
            tracing::trace!("ActiveLink: section #{} -> link {}", id, index);
        }
        self.active = Some(index);
        Some(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn links() -> ActiveLink {
        ActiveLink::new(["#home", "#profile", "#articles", "https://github.com/"])
    }

    #[test]
    fn test_click_marks_single_link() {
        let mut nav = links();
        assert_eq!(nav.click("#profile"), Some(1));
        assert_eq!(nav.click("https://github.com/"), Some(3));
        assert_eq!(nav.active(), Some(3));
        assert_eq!(nav.click("#missing"), None);
        assert_eq!(nav.active(), Some(3));
    }

    #[test]
    fn test_visible_section_activates_matching_link() {
        let mut nav = links();
        assert_eq!(nav.section_visible("articles"), Some(2));
        assert_eq!(nav.active(), Some(2));

        assert_eq!(nav.section_visible("contact"), None);
        assert_eq!(nav.section_visible(""), None);
        assert_eq!(nav.active(), Some(2));
    }
}
