//! Page markup contract
//!
//! Selectors, attributes and classes the web backend reads and writes,
//! plus the conversions from engine commands to DOM values.

use folio_app::AppConfig;
use folio_dock::ItemStyle;
use folio_page::ColorScheme;

/// The dock container
pub const DOCK: &str = ".dock";
/// Every dock item, links and toggles alike
pub const DOCK_ITEMS: &str = ".dock .dock-item";
/// A single dock item, for `closest()` lookups
pub const DOCK_ITEM: &str = ".dock-item";
/// Dock items that navigate to a section
pub const DOCK_LINKS: &str = ".dock a.dock-item";
/// Elements that fade in when scrolled into view
pub const REVEAL: &str = ".reveal";
/// Sections tracked for the active dock link
pub const SECTIONS: &str = "main section[id], footer[id]";
/// Elements whose text is translated, by key
pub const TEXT_KEY: &str = "data-i18n";
/// Elements whose `aria-label` is translated, by key
pub const ARIA_KEY: &str = "data-i18n-aria";
/// Root attribute selecting the light scheme
pub const THEME: &str = "data-theme";

pub const TOOLTIP_ID: &str = "dock-tooltip";
pub const META_DESCRIPTION_ID: &str = "meta-description";
/// `<script type="application/toml">` holding an optional [`AppConfig`]
pub const CONFIG_ID: &str = "folio-config";

pub const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";

/// Custom properties and classes
pub mod class {
    pub const LIFT: &str = "--dock-lift";
    pub const SCALE: &str = "--dock-scale";
    pub const RAISED: &str = "is-raised";
    pub const HOT: &str = "hot";
    pub const VISIBLE: &str = "visible";
    pub const ACTIVE: &str = "active";
    pub const MUTED: &str = "is-muted";
    pub const MENU_OPEN: &str = "menu-open";
}

/// DOM values for one item style
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ItemPatch {
    pub lift: String,
    pub scale: String,
    /// Inline `z-index`; None removes it
    pub z_index: Option<String>,
    pub raised: bool,
    pub hot: bool,
}

impl From<&ItemStyle> for ItemPatch {
    fn from(style: &ItemStyle) -> Self {
        Self {
            lift: style.lift_css(),
            scale: style.scale_css(),
            z_index: style.z_index_css(),
            raised: style.raised,
            hot: style.hot,
        }
    }
}

/// Value of the root theme attribute; None removes it
pub fn theme_attribute(scheme: ColorScheme) -> Option<&'static str> {
    match scheme {
        ColorScheme::Light => Some("light"),
        ColorScheme::Dark => None,
    }
}

/// Configuration embedded in the page, or the defaults
pub fn config_from_markup(source: Option<&str>) -> AppConfig {
    let Some(source) = source.map(str::trim).filter(|source| !source.is_empty()) else {
        return AppConfig::default();
    };
    match AppConfig::from_toml_str(source) {
        Ok(config) => config,
        Err(err) => {
            tracing::warn!("folio: ignoring page config: {}", err);
            AppConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_dock::DockConfig;

    #[test]
    fn test_patch_from_rest_style() {
        let patch = ItemPatch::from(&ItemStyle::rest(2));
        assert_eq!(patch.lift, "0px");
        assert_eq!(patch.scale, "1");
        assert_eq!(patch.z_index, None);
        assert!(!patch.raised && !patch.hot);
    }

    #[test]
    fn test_patch_from_full_influence() {
        let mut style = ItemStyle::from_influence(0, 1.0, &DockConfig::default());
        style.hot = true;
        let patch = ItemPatch::from(&style);
        assert_eq!(patch.lift, "20.00px");
        assert_eq!(patch.scale, "1.400");
        assert_eq!(patch.z_index.as_deref(), Some("30"));
        assert!(patch.raised && patch.hot);
    }

    #[test]
    fn test_theme_attribute() {
        assert_eq!(theme_attribute(ColorScheme::Light), Some("light"));
        assert_eq!(theme_attribute(ColorScheme::Dark), None);
    }

    #[test]
    fn test_config_from_markup() {
        assert_eq!(config_from_markup(None), AppConfig::default());
        assert_eq!(config_from_markup(Some("  \n")), AppConfig::default());
        assert_eq!(config_from_markup(Some("[dock]\nspread = -1.0")), AppConfig::default());

        let config = config_from_markup(Some("[dock]\nspread = 80.0\n[page]\ndefault_language = \"en\""));
        assert_eq!(config.dock.spread, 80.0);
        assert_eq!(config.page.default_language, folio_page::Language::En);
    }
}
