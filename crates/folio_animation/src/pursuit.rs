//! Exponential pursuit animation
//!
//! Each step moves the current value a fixed fraction of the remaining
//! distance toward the target. The approach is monotonic: the value never
//! passes the target, and retargeting mid-flight simply bends the path
//! toward the new target with no velocity to carry over.

use crate::values::Interpolate;

/// Configuration for a pursuit animation
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PursuitConfig {
    /// Fraction of the remaining distance covered per step, in (0, 1]
    pub factor: f32,
}

impl PursuitConfig {
    /// Create a new pursuit configuration
    ///
    /// The factor is clamped to `(0, 1]`; a factor of 1 snaps immediately.
    pub fn new(factor: f32) -> Self {
        let factor = if factor.is_finite() {
            factor.clamp(f32::EPSILON, 1.0)
        } else {
            1.0
        };
        Self { factor }
    }

    /// Pointer following for the dock magnifier (22% per frame)
    pub fn dock() -> Self {
        Self { factor: 0.22 }
    }
}

impl Default for PursuitConfig {
    fn default() -> Self {
        Self::dock()
    }
}

/// A value chasing a target
#[derive(Clone, Copy, Debug)]
pub struct Pursuit<T: Interpolate> {
    config: PursuitConfig,
    current: T,
    target: T,
}

impl<T: Interpolate> Pursuit<T> {
    pub fn new(config: PursuitConfig, initial: T) -> Self {
        Self {
            config,
            current: initial.clone(),
            target: initial,
        }
    }

    pub fn value(&self) -> &T {
        &self.current
    }

    pub fn target(&self) -> &T {
        &self.target
    }

    pub fn config(&self) -> PursuitConfig {
        self.config
    }

    pub fn set_target(&mut self, target: T) {
        self.target = target;
    }

    /// Jump both current and target to `value`
    pub fn snap_to(&mut self, value: T) {
        self.current = value.clone();
        self.target = value;
    }

    /// Check if the value has reached its target
    pub fn is_settled(&self) -> bool {
        // Sub-pixel distances are imperceptible
        const EPSILON: f32 = 0.01;
        self.current.approx_eq(&self.target, EPSILON)
    }

    /// Advance one frame and return the new value
    pub fn step(&mut self) -> &T {
        self.current = self.current.lerp(&self.target, self.config.factor);
        &self.current
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_core::Point;

    #[test]
    fn test_pursuit_moves_fraction_of_remaining_distance() {
        let mut pursuit = Pursuit::new(PursuitConfig::dock(), 0.0f32);
        pursuit.set_target(100.0);

        assert!((pursuit.step() - 22.0).abs() < 1e-4);
        // 22 + 0.22 * 78
        assert!((pursuit.step() - 39.16).abs() < 1e-3);
    }

    #[test]
    fn test_pursuit_never_overshoots() {
        let mut pursuit = Pursuit::new(PursuitConfig::dock(), 0.0f32);
        pursuit.set_target(250.0);

        let mut previous = 0.0;
        for _ in 0..200 {
            let value = *pursuit.step();
            assert!(value >= previous);
            assert!(value <= 250.0);
            previous = value;
        }
        assert!(pursuit.is_settled());
    }

    #[test]
    fn test_pursuit_axes_are_independent() {
        let mut pursuit = Pursuit::new(PursuitConfig::dock(), Point::new(0.0, 50.0));
        pursuit.set_target(Point::new(100.0, 50.0));
        let value = *pursuit.step();
        assert!((value.x - 22.0).abs() < 1e-4);
        assert_eq!(value.y, 50.0);
    }

    #[test]
    fn test_snap_to_sets_current_and_target() {
        let mut pursuit = Pursuit::new(PursuitConfig::dock(), Point::ZERO);
        pursuit.snap_to(Point::new(200.0, 740.0));
        assert_eq!(*pursuit.value(), Point::new(200.0, 740.0));
        assert!(pursuit.is_settled());
        assert_eq!(*pursuit.step(), Point::new(200.0, 740.0));
    }

    #[test]
    fn test_config_clamps_factor() {
        assert_eq!(PursuitConfig::new(3.0).factor, 1.0);
        assert!(PursuitConfig::new(-1.0).factor > 0.0);
        assert_eq!(PursuitConfig::new(f32::NAN).factor, 1.0);
    }

    #[test]
    fn test_dock_follow_leaves_geometric_remainder() {
        let mut pursuit = Pursuit::new(PursuitConfig::default(), 0.0f32);
        pursuit.set_target(100.0);
        for _ in 0..3 {
            pursuit.step();
        }
        let remaining = 100.0 - *pursuit.value();
        assert!((remaining - 100.0 * 0.78f32.powi(3)).abs() < 1e-3);
    }
}
