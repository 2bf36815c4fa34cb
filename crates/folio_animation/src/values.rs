//! Animatable value types
//!
//! Provides linear interpolation for the value types the page animates.

use folio_core::Point;

/// Trait for values that can be linearly interpolated
pub trait Interpolate: Clone {
    /// Linearly interpolate between self and other by factor t (0.0 to 1.0)
    fn lerp(&self, other: &Self, t: f32) -> Self;

    /// Check if two values are approximately equal (for settling detection)
    fn approx_eq(&self, other: &Self, epsilon: f32) -> bool;
}

// ============================================================================
// f32 Implementation
// ============================================================================

impl Interpolate for f32 {
    fn lerp(&self, other: &Self, t: f32) -> Self {
        self + (other - self) * t
    }

    fn approx_eq(&self, other: &Self, epsilon: f32) -> bool {
        (self - other).abs() < epsilon
    }
}

// ============================================================================
// Point Implementation
// ============================================================================

impl Interpolate for Point {
    /// Interpolates each axis independently
    fn lerp(&self, other: &Self, t: f32) -> Self {
        Point::new(
            self.x + (other.x - self.x) * t,
            self.y + (other.y - self.y) * t,
        )
    }

    fn approx_eq(&self, other: &Self, epsilon: f32) -> bool {
        (self.x - other.x).abs() < epsilon && (self.y - other.y).abs() < epsilon
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_f32_lerp() {
        assert_eq!(0.0f32.lerp(&100.0, 0.0), 0.0);
        assert_eq!(0.0f32.lerp(&100.0, 1.0), 100.0);
        assert!((0.0f32.lerp(&100.0, 0.22) - 22.0).abs() < 1e-4);
    }

    #[test]
    fn test_point_lerp_is_per_axis() {
        let from = Point::new(0.0, 100.0);
        let to = Point::new(100.0, 0.0);
        let mid = from.lerp(&to, 0.5);
        assert_eq!(mid, Point::new(50.0, 50.0));
        assert!(mid.approx_eq(&Point::new(50.001, 49.999), 0.01));
        assert!(!mid.approx_eq(&to, 0.01));
    }
}
