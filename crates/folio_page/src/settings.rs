//! Page settings
//!
//! Storage keys, element ids and observer thresholds. Defaults match the
//! portfolio page's markup.

use crate::error::{PageError, Result};
use crate::i18n::Language;
use crate::theme::ColorScheme;
use serde::{Deserialize, Serialize};

/// Settings for the page collaborators
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageSettings {
    /// Preference key holding the color scheme
    pub theme_key: String,
    /// Preference key holding the language
    pub language_key: String,
    /// Scheme used when nothing is stored
    pub default_scheme: ColorScheme,
    /// Language used when nothing (or something unknown) is stored
    pub default_language: Language,
    /// Fraction of an element that must be visible to reveal it
    pub reveal_threshold: f32,
    /// Fraction of a section that must be visible to activate its link
    pub section_threshold: f32,
    /// Root margin for the section observer, in CSS margin syntax
    pub section_root_margin: String,
    /// Id of the theme toggle
    pub theme_toggle_id: String,
    /// Id of the language toggle
    pub language_toggle_id: String,
    /// Id of the sound toggle
    pub sound_toggle_id: String,
    /// Id of the mobile drawer toggle
    pub drawer_toggle_id: String,
}

impl Default for PageSettings {
    fn default() -> Self {
        Self {
            theme_key: "theme".to_string(),
            language_key: "lang".to_string(),
            default_scheme: ColorScheme::Dark,
            default_language: Language::Es,
            reveal_threshold: 0.18,
            section_threshold: 0.1,
            section_root_margin: "-30% 0px -50% 0px".to_string(),
            theme_toggle_id: "dock-theme".to_string(),
            language_toggle_id: "dock-lang".to_string(),
            sound_toggle_id: "dock-sound".to_string(),
            drawer_toggle_id: "menu-toggle".to_string(),
        }
    }
}

impl PageSettings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a TOML document and validate it
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let settings: PageSettings = toml::from_str(source)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string(self)?)
    }

    pub fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("reveal_threshold", self.reveal_threshold),
            ("section_threshold", self.section_threshold),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(PageError::InvalidSettings(format!(
                    "{name} must be within [0, 1], got {value}"
                )));
            }
        }

        for (name, value) in [
            ("theme_key", &self.theme_key),
            ("language_key", &self.language_key),
        ] {
            if value.trim().is_empty() {
                return Err(PageError::InvalidSettings(format!("{name} must not be empty")));
            }
        }
        if self.theme_key == self.language_key {
            return Err(PageError::InvalidSettings(format!(
                "theme_key and language_key must differ, both are {:?}",
                self.theme_key
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = PageSettings::default();
        assert_eq!(settings.theme_key, "theme");
        assert_eq!(settings.language_key, "lang");
        assert_eq!(settings.reveal_threshold, 0.18);
        assert_eq!(settings.default_language, Language::Es);
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_partial_toml() {
        let settings =
            PageSettings::from_toml_str("default_language = \"en\"\nreveal_threshold = 0.25\n")
                .unwrap();
        assert_eq!(settings.default_language, Language::En);
        assert_eq!(settings.reveal_threshold, 0.25);
        assert_eq!(settings.theme_toggle_id, "dock-theme");
    }

    #[test]
    fn test_unknown_language_is_parse_error() {
        assert!(matches!(
            PageSettings::from_toml_str("default_language = \"fr\""),
            Err(PageError::Parse(_))
        ));
    }

    #[test]
    fn test_invalid_values_rejected() {
        assert!(matches!(
            PageSettings::from_toml_str("reveal_threshold = 1.5"),
            Err(PageError::InvalidSettings(_))
        ));
        assert!(matches!(
            PageSettings::from_toml_str("language_key = \"theme\""),
            Err(PageError::InvalidSettings(_))
        ));
    }

    #[test]
    fn test_roundtrip() {
        let settings = PageSettings {
            default_scheme: ColorScheme::Light,
            ..Default::default()
        };
        let text = settings.to_toml_string().unwrap();
        assert_eq!(PageSettings::from_toml_str(&text).unwrap(), settings);
    }
}
