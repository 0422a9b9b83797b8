//! Pose and point types for 2D mapping.

use serde::{Deserialize, Serialize};

/// A 2D point in map units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point2D {
    /// X coordinate in map units
    pub x: f32,
    /// Y coordinate in map units
    pub y: f32,
}

impl Point2D {
    /// Create a new point.
    #[inline]
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

impl Default for Point2D {
    fn default() -> Self {
        Self { x: 0.0, y: 0.0 }
    }
}

/// Robot pose in 2D space.
///
/// Position (x, y) in map units and heading (theta) in radians.
/// Theta is normalized to [-π, π]. Poses are supplied by odometry and
/// immutable for the step they describe.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Pose2D {
    /// X position in map units
    pub x: f32,
    /// Y position in map units
    pub y: f32,
    /// Heading in radians, normalized to [-π, π]
    pub theta: f32,
}

impl Pose2D {
    /// Create a new pose with theta normalized to [-π, π].
    #[inline]
    pub fn new(x: f32, y: f32, theta: f32) -> Self {
        Self {
            x,
            y,
            theta: crate::core::math::normalize_angle(theta),
        }
    }

    /// Identity pose at origin with zero heading.
    #[inline]
    pub fn identity() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            theta: 0.0,
        }
    }
}

impl Default for Pose2D {
    fn default() -> Self {
        Self::identity()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f32::consts::PI;

    #[test]
    fn test_pose_new_normalizes_theta() {
        let p = Pose2D::new(1.0, 2.0, 3.0 * PI);
        assert_relative_eq!(p.theta, PI, epsilon = 1e-6);
    }

    #[test]
    fn test_pose_identity() {
        let p = Pose2D::identity();
        assert_eq!(p.x, 0.0);
        assert_eq!(p.y, 0.0);
        assert_eq!(p.theta, 0.0);
    }

    #[test]
    fn test_point_new() {
        let p = Point2D::new(3.0, -4.0);
        assert_eq!(p.x, 3.0);
        assert_eq!(p.y, -4.0);
    }
}
