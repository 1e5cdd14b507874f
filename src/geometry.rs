//! 2D primitives shared by the simulation
//!
//! Positions and velocities are both `glam::Vec2`; velocity is measured in
//! distance per tick at the nominal tick rate.

pub use glam::Vec2;

/// A closed 1D interval `[min, max]`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Span {
    pub min: f32,
    pub max: f32,
}

impl Span {
    pub const fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    #[inline]
    pub fn contains(&self, value: f32) -> bool {
        value >= self.min && value <= self.max
    }

    /// Clamp into the interval. NaN has no meaningful position and yields `None`.
    #[inline]
    pub fn clamp(&self, value: f32) -> Option<f32> {
        if value.is_nan() {
            None
        } else {
            Some(value.clamp(self.min, self.max))
        }
    }
}

/// Launch velocity: `drift` times the speed sideways, full speed upward
#[inline]
pub fn launch_velocity(speed: f32, drift: f32) -> Vec2 {
    Vec2::new(speed * drift, -speed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_span_contains_is_inclusive() {
        let span = Span::new(170.0, 190.0);
        assert!(span.contains(170.0));
        assert!(span.contains(190.0));
        assert!(!span.contains(190.01));
        assert!(!span.contains(169.99));
    }

    #[test]
    fn test_span_clamp() {
        let span = Span::new(70.0, 130.0);
        assert_eq!(span.clamp(-5.0), Some(70.0));
        assert_eq!(span.clamp(500.0), Some(130.0));
        assert_eq!(span.clamp(f32::INFINITY), Some(130.0));
        assert_eq!(span.clamp(f32::NEG_INFINITY), Some(70.0));
        assert_eq!(span.clamp(f32::NAN), None);
    }

    #[test]
    fn test_launch_velocity_points_up() {
        let vel = launch_velocity(5.0, 0.5);
        assert_eq!(vel, Vec2::new(2.5, -5.0));
    }
}
