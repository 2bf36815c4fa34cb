//! Light/dark color scheme

use serde::{Deserialize, Serialize};

/// Page color scheme
///
/// Dark is the stylesheet's default; light is opted into with a root
/// attribute.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorScheme {
    Light,
    #[default]
    Dark,
}

impl ColorScheme {
    /// Stored preference value
    pub fn as_str(&self) -> &'static str {
        match self {
            ColorScheme::Light => "light",
            ColorScheme::Dark => "dark",
        }
    }

    /// Interpret a stored preference
    ///
    /// Only `"light"` selects the light scheme; anything else, including no
    /// stored value, is dark.
    pub fn from_stored(value: Option<&str>) -> Self {
        match value {
            Some("light") => ColorScheme::Light,
            _ => ColorScheme::Dark,
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            ColorScheme::Light => ColorScheme::Dark,
            ColorScheme::Dark => ColorScheme::Light,
        }
    }

    pub fn is_light(&self) -> bool {
        *self == ColorScheme::Light
    }
}
