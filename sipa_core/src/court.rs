use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::config::GameConfig;

/// Axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    /// Point inside (or on the edge of) the box closest to `point`
    pub fn closest_point(&self, point: Vec2) -> Vec2 {
        point.clamp(self.min, self.max)
    }

    /// Circle-vs-box overlap. Touching at exactly `radius` is not a hit.
    pub fn intersects_circle(&self, center: Vec2, radius: f32) -> bool {
        (center - self.closest_point(center)).length_squared() < radius * radius
    }
}

/// One half of the court, split at the net
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CourtSide {
    Left,
    Right,
}

impl CourtSide {
    /// Side a horizontal position falls on. The net line itself belongs to the right.
    pub fn of_x(x: f32, config: &GameConfig) -> Self {
        if x < config.center_x() {
            Self::Left
        } else {
            Self::Right
        }
    }

    /// Allowed range for a player's left edge on this half
    pub fn player_x_range(self, config: &GameConfig, width: f32) -> (f32, f32) {
        match self {
            Self::Left => (0.0, config.center_x() - width),
            Self::Right => (config.center_x(), config.canvas_width - width),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_closest_point_clamps() {
        let b = Aabb::new(Vec2::new(0.0, 0.0), Vec2::new(10.0, 10.0));
        assert_eq!(b.closest_point(Vec2::new(-5.0, 5.0)), Vec2::new(0.0, 5.0));
        assert_eq!(b.closest_point(Vec2::new(4.0, 4.0)), Vec2::new(4.0, 4.0));
    }

    #[test]
    fn test_circle_touching_edge_does_not_intersect() {
        let b = Aabb::new(Vec2::new(0.0, 0.0), Vec2::new(10.0, 10.0));
        assert!(!b.intersects_circle(Vec2::new(15.0, 5.0), 5.0));
        assert!(b.intersects_circle(Vec2::new(14.9, 5.0), 5.0));
        // Corner: distance 5 along a 3-4-5 diagonal
        assert!(!b.intersects_circle(Vec2::new(13.0, 14.0), 5.0));
    }

    #[test]
    fn test_side_of_centerline() {
        let config = GameConfig::new();
        assert_eq!(CourtSide::of_x(399.0, &config), CourtSide::Left);
        assert_eq!(CourtSide::of_x(400.0, &config), CourtSide::Right);
        assert_eq!(
            CourtSide::Left.player_x_range(&config, 50.0),
            (0.0, 350.0)
        );
        assert_eq!(
            CourtSide::Right.player_x_range(&config, 50.0),
            (400.0, 750.0)
        );
    }
}
