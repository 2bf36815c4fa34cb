//! Application configuration
//!
//! ```toml
//! [dock]
//! spread = 92.0
//! max_scale = 1.4
//!
//! [page]
//! default_language = "es"
//! reveal_threshold = 0.18
//! ```
//!
//! Every field is optional and defaults to the tuned constants.

use crate::error::Result;
use folio_dock::DockConfig;
use folio_page::PageSettings;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Configuration for the whole page
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub dock: DockConfig,
    pub page: PageSettings,
}

impl AppConfig {
    /// Parse a TOML document and validate both sections
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let config: AppConfig = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Read and parse a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path)?;
        tracing::debug!("AppConfig: loaded {}", path.display());
        Self::from_toml_str(&source)
    }

    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string(self)?)
    }

    pub fn validate(&self) -> Result<()> {
        self.dock.validate()?;
        self.page.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FolioError;

    #[test]
    fn test_empty_document_is_default() {
        assert_eq!(AppConfig::from_toml_str("").unwrap(), AppConfig::default());
    }

    #[test]
    fn test_sections_parse_independently() {
        let config = AppConfig::from_toml_str(
            "[dock]\nspread = 110.0\n\n[page]\ndefault_language = \"en\"\n",
        )
        .unwrap();
        assert_eq!(config.dock.spread, 110.0);
        assert_eq!(config.dock.vertical_spread, 78.0);
        assert_eq!(config.page.default_language, folio_page::Language::En);
    }

    #[test]
    fn test_invalid_section_reports_its_error() {
        assert!(matches!(
            AppConfig::from_toml_str("[dock]\nmax_scale = 0.5\n"),
            Err(FolioError::Dock(_))
        ));
        assert!(matches!(
            AppConfig::from_toml_str("[page]\nreveal_threshold = -1.0\n"),
            Err(FolioError::Page(_))
        ));
    }

    #[test]
    fn test_roundtrip() {
        let mut config = AppConfig::default();
        config.dock.hot_switch_margin = 0.08;
        config.page.reveal_threshold = 0.3;
        let text = config.to_toml_string().unwrap();
        assert_eq!(AppConfig::from_toml_str(&text).unwrap(), config);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        assert!(matches!(
            AppConfig::load("/nonexistent/folio.toml"),
            Err(FolioError::Io(_))
        ));
    }
}
