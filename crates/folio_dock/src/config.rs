//! Dock tuning constants
//!
//! The defaults are hand-tuned visual constants. They are kept as named
//! configuration so a page can adjust them without touching the engine.

use crate::error::{DockError, Result};
use folio_animation::PursuitConfig;
use serde::{Deserialize, Serialize};

/// Configuration for the dock magnifier
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DockConfig {
    /// Horizontal Gaussian falloff radius (px)
    pub spread: f32,
    /// Vertical Gaussian falloff radius (px)
    pub vertical_spread: f32,
    /// Where the effective center line sits, as a fraction of the dock's
    /// height from its top edge
    pub center_line_ratio: f32,
    /// Lift at full influence (px)
    pub max_lift: f32,
    /// Scale at full influence
    pub max_scale: f32,
    /// Influence above which an item is marked raised
    pub raise_threshold: f32,
    /// Influence above which the strongest item may become hot
    pub hot_threshold: f32,
    /// Lead a challenger needs over the hot item before it takes over
    pub hot_switch_margin: f32,
    /// Fraction of the remaining pointer distance eased per frame
    pub follow_factor: f32,
    /// Stacking order at zero influence
    pub base_z: i32,
    /// Stacking order added at full influence
    pub z_range: f32,
}

impl Default for DockConfig {
    fn default() -> Self {
        Self {
            spread: 92.0,
            vertical_spread: 78.0,
            center_line_ratio: 0.52,
            max_lift: 20.0,
            max_scale: 1.4,
            raise_threshold: 0.35,
            hot_threshold: 0.22,
            hot_switch_margin: 0.05,
            follow_factor: 0.22,
            base_z: 10,
            z_range: 20.0,
        }
    }
}

impl DockConfig {
    /// Create the default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a TOML document and validate it
    ///
    /// Missing fields take their default values.
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let config: DockConfig = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize to a TOML document
    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string(self)?)
    }

    /// Check that every value is usable
    pub fn validate(&self) -> Result<()> {
        fn positive(name: &str, value: f32) -> Result<()> {
            if value.is_finite() && value > 0.0 {
                Ok(())
            } else {
                Err(DockError::InvalidConfig(format!(
                    "{name} must be positive, got {value}"
                )))
            }
        }

        fn unit(name: &str, value: f32) -> Result<()> {
            if (0.0..=1.0).contains(&value) {
                Ok(())
            } else {
                Err(DockError::InvalidConfig(format!(
                    "{name} must be within [0, 1], got {value}"
                )))
            }
        }

        positive("spread", self.spread)?;
        positive("vertical_spread", self.vertical_spread)?;
        positive("follow_factor", self.follow_factor)?;
        unit("center_line_ratio", self.center_line_ratio)?;
        unit("raise_threshold", self.raise_threshold)?;
        unit("hot_threshold", self.hot_threshold)?;
        unit("hot_switch_margin", self.hot_switch_margin)?;
        unit("follow_factor", self.follow_factor)?;

        if !(self.max_lift.is_finite() && self.max_lift >= 0.0) {
            return Err(DockError::InvalidConfig(format!(
                "max_lift must be non-negative, got {}",
                self.max_lift
            )));
        }
        if !(self.max_scale.is_finite() && self.max_scale >= 1.0) {
            return Err(DockError::InvalidConfig(format!(
                "max_scale must be at least 1, got {}",
                self.max_scale
            )));
        }
        if !(self.z_range.is_finite() && self.z_range >= 0.0) {
            return Err(DockError::InvalidConfig(format!(
                "z_range must be non-negative, got {}",
                self.z_range
            )));
        }
        Ok(())
    }

    /// Pointer easing derived from `follow_factor`
    pub fn pursuit(&self) -> PursuitConfig {
        PursuitConfig::new(self.follow_factor)
    }

    /// Set both Gaussian radii
    pub fn spreads(mut self, horizontal: f32, vertical: f32) -> Self {
        self.spread = horizontal;
        self.vertical_spread = vertical;
        self
    }

    /// Set the peak lift and scale
    pub fn magnification(mut self, max_lift: f32, max_scale: f32) -> Self {
        self.max_lift = max_lift;
        self.max_scale = max_scale;
        self
    }

    /// Set the hot item threshold and switch margin
    pub fn hot_item(mut self, threshold: f32, switch_margin: f32) -> Self {
        self.hot_threshold = threshold;
        self.hot_switch_margin = switch_margin;
        self
    }

    /// Set the pointer easing factor
    pub fn follow_factor(mut self, factor: f32) -> Self {
        self.follow_factor = factor;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_tuned_constants() {
        let config = DockConfig::default();
        assert_eq!(config.spread, 92.0);
        assert_eq!(config.vertical_spread, 78.0);
        assert_eq!(config.center_line_ratio, 0.52);
        assert_eq!(config.max_lift, 20.0);
        assert_eq!(config.max_scale, 1.4);
        assert_eq!(config.hot_switch_margin, 0.05);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = DockConfig::from_toml_str("spread = 120.0\nmax_scale = 1.6\n").unwrap();
        assert_eq!(config.spread, 120.0);
        assert_eq!(config.max_scale, 1.6);
        assert_eq!(config.vertical_spread, 78.0);
    }

    #[test]
    fn test_toml_roundtrip() {
        let config = DockConfig::default().hot_item(0.3, 0.1);
        let text = config.to_toml_string().unwrap();
        assert_eq!(DockConfig::from_toml_str(&text).unwrap(), config);
    }

    #[test]
    fn test_invalid_values_rejected() {
        assert!(matches!(
            DockConfig::from_toml_str("spread = 0.0"),
            Err(DockError::InvalidConfig(_))
        ));
        assert!(matches!(
            DockConfig::from_toml_str("max_scale = 0.8"),
            Err(DockError::InvalidConfig(_))
        ));
        assert!(matches!(
            DockConfig::from_toml_str("hot_threshold = 1.5"),
            Err(DockError::InvalidConfig(_))
        ));
        assert!(DockConfig::default().magnification(-1.0, 1.2).validate().is_err());
    }

    #[test]
    fn test_malformed_toml_is_parse_error() {
        assert!(matches!(
            DockConfig::from_toml_str("spread = \"wide\""),
            Err(DockError::Parse(_))
        ));
    }
}
