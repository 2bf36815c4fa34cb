//! Pointer influence field
//!
//! influence(i) = exp(-(dx_i / spread)^2) * exp(-(dy / vertical_spread)^2)
//!
//! `dx_i` is the distance from the pointer to item `i`'s center and `dy`
//! the distance to the dock's effective center line. Every value lies in
//! `[0, 1]` and reaches 1 only with the pointer exactly on an item's center
//! and on the center line.

use crate::config::DockConfig;
use crate::geometry::GeometryCache;
use folio_core::Point;
use smallvec::SmallVec;

/// Gaussian falloff `exp(-(distance / spread)^2)`
///
/// Returns 0 for non-finite distances and non-positive spreads.
pub fn gaussian(distance: f32, spread: f32) -> f32 {
    if !distance.is_finite() || !(spread > 0.0) {
        return 0.0;
    }
    let r = distance.abs() / spread;
    (-(r * r)).exp()
}

/// Influence of one pointer position on every item
#[derive(Clone, Debug, Default, PartialEq)]
pub struct InfluenceField {
    vertical: f32,
    values: SmallVec<[f32; 8]>,
}

impl InfluenceField {
    /// Evaluate the field for `pointer` against cached geometry
    ///
    /// Without a container the vertical term is taken as 1 (the pointer is
    /// treated as on the center line) and the field has no items.
    pub fn compute(cache: &GeometryCache, config: &DockConfig, pointer: Point) -> Self {
        let center_line = cache
            .center_line(config.center_line_ratio)
            .unwrap_or(pointer.y);
        let vertical = gaussian(pointer.y - center_line, config.vertical_spread);

        let values = cache
            .centers()
            .iter()
            .map(|center| gaussian(pointer.x - center, config.spread) * vertical)
            .collect();

        Self { vertical, values }
    }

    /// Build a field from precomputed values
    pub fn from_values(vertical: f32, values: impl IntoIterator<Item = f32>) -> Self {
        Self {
            vertical,
            values: values.into_iter().collect(),
        }
    }

    /// Vertical term shared by every item
    pub fn vertical(&self) -> f32 {
        self.vertical
    }

    pub fn values(&self) -> &[f32] {
        &self.values
    }

    pub fn get(&self, index: usize) -> Option<f32> {
        self.values.get(index).copied()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Index and value of the strongest positive influence
    ///
    /// The first item wins ties. Returns None if no item has any influence.
    pub fn strongest(&self) -> Option<(usize, f32)> {
        let mut best: Option<(usize, f32)> = None;
        for (index, &value) in self.values.iter().enumerate() {
            let current = best.map_or(0.0, |(_, v)| v);
            if value > current {
                best = Some((index, value));
            }
        }
        best
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::headless::HeadlessDock;

    fn field_at(centers: &[f32], x: f32, dy: f32) -> (InfluenceField, f32) {
        let host = HeadlessDock::with_centers(centers);
        let mut cache = GeometryCache::new();
        cache.recompute(&host);
        let line = host.center_line();
        (
            InfluenceField::compute(&cache, &DockConfig::default(), Point::new(x, line + dy)),
            line,
        )
    }

    #[test]
    fn test_gaussian_boundaries() {
        assert_eq!(gaussian(0.0, 92.0), 1.0);
        assert!((gaussian(92.0, 92.0) - (-1.0f32).exp()).abs() < 1e-6);
        assert_eq!(gaussian(-92.0, 92.0), gaussian(92.0, 92.0));
        assert_eq!(gaussian(f32::NAN, 92.0), 0.0);
        assert_eq!(gaussian(10.0, 0.0), 0.0);
    }

    #[test]
    fn test_pointer_on_center_is_full_influence() {
        let (field, _) = field_at(&[40.0, 120.0, 200.0, 280.0, 360.0], 200.0, 0.0);
        assert_eq!(field.vertical(), 1.0);
        assert_eq!(field.get(2), Some(1.0));
        assert_eq!(field.strongest(), Some((2, 1.0)));
    }

    #[test]
    fn test_vertical_term_scales_every_item() {
        let (field, _) = field_at(&[40.0, 120.0, 200.0], 120.0, 78.0);
        let expected_vertical = (-1.0f32).exp();
        assert!((field.vertical() - expected_vertical).abs() < 1e-6);
        assert!((field.get(1).unwrap() - expected_vertical).abs() < 1e-6);
    }

    #[test]
    fn test_values_stay_in_unit_interval() {
        let centers = [40.0, 120.0, 200.0, 280.0, 360.0];
        for x in (-200..=600).step_by(7) {
            for dy in (-300..=300).step_by(13) {
                let (field, _) = field_at(&centers, x as f32, dy as f32);
                assert_eq!(field.len(), centers.len());
                for value in field.values() {
                    assert!((0.0..=1.0).contains(value), "x={x} dy={dy} value={value}");
                }
            }
        }
    }

    #[test]
    fn test_no_container_means_no_items() {
        let host = HeadlessDock::without_container();
        let mut cache = GeometryCache::new();
        cache.recompute(&host);
        let field = InfluenceField::compute(&cache, &DockConfig::default(), Point::new(10.0, 10.0));
        assert!(field.is_empty());
        assert_eq!(field.vertical(), 1.0);
        assert_eq!(field.strongest(), None);
    }

    #[test]
    fn test_strongest_prefers_first_on_tie() {
        let field = InfluenceField::from_values(1.0, [0.4, 0.6, 0.6, 0.1]);
        assert_eq!(field.strongest(), Some((1, 0.6)));
        assert_eq!(InfluenceField::from_values(1.0, [0.0, 0.0]).strongest(), None);
    }
}
