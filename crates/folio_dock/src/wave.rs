//! Wave applier
//!
//! Maps each item's influence to a visual style and picks the single hot
//! item. Hot selection uses hysteresis: once an item is hot, a challenger
//! must beat it by more than `hot_switch_margin` to take over, which keeps
//! two neighbours of near-equal influence from flickering.

use crate::config::DockConfig;
use crate::influence::InfluenceField;
use smallvec::SmallVec;

/// Style command for one dock item
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ItemStyle {
    /// Index of the item in dock order
    pub index: usize,
    /// Upward offset in px, within `[0, max_lift]`
    pub lift: f32,
    /// Scale factor, within `[1, max_scale]`
    pub scale: f32,
    /// Stacking order, or None to clear it
    pub z_order: Option<i32>,
    /// Influence is above the raise threshold
    pub raised: bool,
    /// This is the hot item
    pub hot: bool,
}

impl ItemStyle {
    /// The resting style: no lift, no scale, default stacking, no flags
    pub fn rest(index: usize) -> Self {
        Self {
            index,
            lift: 0.0,
            scale: 1.0,
            z_order: None,
            raised: false,
            hot: false,
        }
    }

    /// Style for an item under influence `e`
    ///
    /// `e` is clamped to `[0, 1]`. The hot flag is left unset.
    pub fn from_influence(index: usize, e: f32, config: &DockConfig) -> Self {
        let e = if e.is_finite() { e.clamp(0.0, 1.0) } else { 0.0 };
        Self {
            index,
            lift: config.max_lift * e,
            scale: 1.0 + (config.max_scale - 1.0) * e,
            z_order: Some((config.base_z as f32 + e * config.z_range).round() as i32),
            raised: e > config.raise_threshold,
            hot: false,
        }
    }

    pub fn is_rest(&self) -> bool {
        *self == Self::rest(self.index)
    }

    /// Lift as a CSS length (`"0px"` at rest, otherwise two decimals)
    pub fn lift_css(&self) -> String {
        if self.lift == 0.0 {
            "0px".to_string()
        } else {
            format!("{:.2}px", self.lift)
        }
    }

    /// Scale as a CSS number (`"1"` at rest, otherwise three decimals)
    pub fn scale_css(&self) -> String {
        if self.scale == 1.0 {
            "1".to_string()
        } else {
            format!("{:.3}", self.scale)
        }
    }

    /// Stacking order as a CSS integer, or None to remove it
    pub fn z_index_css(&self) -> Option<String> {
        self.z_order.map(|z| z.to_string())
    }
}

/// Hot item selection with hysteresis
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct HotSelector {
    current: Option<usize>,
}

impl HotSelector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Option<usize> {
        self.current
    }

    pub fn clear(&mut self) {
        self.current = None;
    }

    /// Re-evaluate the hot item against this frame's influence
    ///
    /// The strongest item is a candidate only above `hot_threshold`; with
    /// no candidate the hot item is cleared. With no hot item the candidate
    /// is adopted at once. Otherwise it only takes over when its influence
    /// exceeds the incumbent's by more than `hot_switch_margin`.
    pub fn update(&mut self, field: &InfluenceField, config: &DockConfig) -> Option<usize> {
        match field.strongest() {
            Some((candidate, influence)) if influence > config.hot_threshold => match self.current
            {
                None => self.current = Some(candidate),
                Some(hot) if hot != candidate => {
                    let incumbent = field.get(hot).unwrap_or(0.0);
                    if influence > incumbent + config.hot_switch_margin {
                        tracing::trace!(
                            "HotSelector: {} -> {} ({:.3} vs {:.3})",
                            hot,
                            candidate,
                            influence,
                            incumbent
                        );
                        self.current = Some(candidate);
                    }
                }
                Some(_) => {}
            },
            _ => self.current = None,
        }
        self.current
    }
}

/// Per-item styles and hot item for the current frame
#[derive(Clone, Debug, Default)]
pub struct WaveApplier {
    styles: SmallVec<[ItemStyle; 8]>,
    hot: HotSelector,
}

impl WaveApplier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Styles produced by the last apply or reset
    pub fn styles(&self) -> &[ItemStyle] {
        &self.styles
    }

    pub fn hot(&self) -> Option<usize> {
        self.hot.current()
    }

    /// Compute every item's style from `field`
    ///
    /// At most one returned style carries the hot flag.
    pub fn apply(&mut self, field: &InfluenceField, config: &DockConfig) -> &[ItemStyle] {
        self.styles.clear();
        self.styles.extend(
            field
                .values()
                .iter()
                .enumerate()
                .map(|(index, &e)| ItemStyle::from_influence(index, e, config)),
        );

        if let Some(hot) = self.hot.update(field, config) {
            if let Some(style) = self.styles.get_mut(hot) {
                style.hot = true;
            }
        }
        &self.styles
    }

    /// Return `item_count` items to rest and clear the hot item
    ///
    /// Idempotent.
    pub fn reset(&mut self, item_count: usize) -> &[ItemStyle] {
        self.hot.clear();
        self.styles.clear();
        self.styles.extend((0..item_count).map(ItemStyle::rest));
        &self.styles
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_style_at_full_influence() {
        let config = DockConfig::default();
        let style = ItemStyle::from_influence(0, 1.0, &config);
        assert_eq!(style.lift, 20.0);
        assert!((style.scale - 1.4).abs() < 1e-6);
        assert_eq!(style.z_order, Some(30));
        assert!(style.raised);
        assert_eq!(style.lift_css(), "20.00px");
        assert_eq!(style.scale_css(), "1.400");
    }

    #[test]
    fn test_style_thresholds() {
        let config = DockConfig::default();
        assert!(!ItemStyle::from_influence(0, 0.35, &config).raised);
        assert!(ItemStyle::from_influence(0, 0.36, &config).raised);
        assert_eq!(ItemStyle::from_influence(0, 0.0, &config).z_order, Some(10));
        assert_eq!(ItemStyle::from_influence(0, 0.5, &config).z_order, Some(20));
    }

    #[test]
    fn test_style_bounds_hold_for_any_influence() {
        let config = DockConfig::default();
        for e in [-1.0, 0.0, 0.25, 0.5, 0.99, 1.0, 3.0, f32::NAN] {
            let style = ItemStyle::from_influence(0, e, &config);
            assert!((0.0..=config.max_lift).contains(&style.lift));
            assert!((1.0..=config.max_scale).contains(&style.scale));
        }
    }

    #[test]
    fn test_rest_style_css() {
        let rest = ItemStyle::rest(3);
        assert!(rest.is_rest());
        assert_eq!(rest.lift_css(), "0px");
        assert_eq!(rest.scale_css(), "1");
        assert_eq!(rest.z_index_css(), None);
    }

    #[test]
    fn test_hot_adopted_above_threshold_only() {
        let config = DockConfig::default();
        let mut hot = HotSelector::new();

        assert_eq!(hot.update(&InfluenceField::from_values(1.0, [0.1, 0.2]), &config), None);
        assert_eq!(hot.update(&InfluenceField::from_values(1.0, [0.1, 0.3]), &config), Some(1));
        // Dropping below threshold clears it again
        assert_eq!(hot.update(&InfluenceField::from_values(1.0, [0.1, 0.21]), &config), None);
    }

    #[test]
    fn test_hot_hysteresis_holds_within_margin() {
        let config = DockConfig::default();
        let mut hot = HotSelector::new();
        hot.update(&InfluenceField::from_values(1.0, [0.6, 0.4]), &config);
        assert_eq!(hot.current(), Some(0));

        // Challenger leads by 0.03 < 0.05: no switch
        let field = InfluenceField::from_values(1.0, [0.50, 0.53]);
        assert_eq!(hot.update(&field, &config), Some(0));

        // Challenger leads by 0.07 > 0.05: switch
        let field = InfluenceField::from_values(1.0, [0.50, 0.57]);
        assert_eq!(hot.update(&field, &config), Some(1));
    }

    #[test]
    fn test_apply_marks_at_most_one_hot() {
        let config = DockConfig::default();
        let mut wave = WaveApplier::new();
        let field = InfluenceField::from_values(1.0, [0.9, 0.9, 0.2]);
        let styles = wave.apply(&field, &config);
        assert_eq!(styles.iter().filter(|s| s.hot).count(), 1);
        assert!(styles[0].hot);
    }

    #[test]
    fn test_reset_is_idempotent() {
        let config = DockConfig::default();
        let mut wave = WaveApplier::new();
        wave.apply(&InfluenceField::from_values(1.0, [1.0, 0.5]), &config);
        assert_eq!(wave.hot(), Some(0));

        let once: Vec<ItemStyle> = wave.reset(2).to_vec();
        let twice: Vec<ItemStyle> = wave.reset(2).to_vec();
        assert_eq!(once, twice);
        assert!(once.iter().all(ItemStyle::is_rest));
        assert_eq!(wave.hot(), None);
    }
}
