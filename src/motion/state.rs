//! Vehicle state and control types
//!
//! Plain value types passed into and out of the step functions. Everything
//! is `Copy` and serializable so callers can snapshot or replay predicted
//! states freely.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::{MAX_SPEED, MIN_SPEED};

/// Which axis a lane-constrained vehicle is currently moving along
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Axis {
    X,
    Y,
}

/// State of a vehicle restricted to one lane axis at a time
///
/// Intended usage keeps the other axis pinned at zero: a vehicle driving
/// along y has `pos.x == 0` and `vel.x == 0`, and vice versa. States that
/// satisfy neither pin take the step functions' documented fallback branch.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LaneState {
    /// Position along the intersection axes
    pub pos: Vec2,
    /// Velocity components (only the active axis is nonzero in intended use)
    pub vel: Vec2,
}

impl LaneState {
    pub fn new(pos: Vec2, vel: Vec2) -> Self {
        Self { pos, vel }
    }

    /// State moving along the x lane (y pinned at zero)
    pub fn along_x(sx: f32, vx: f32) -> Self {
        Self {
            pos: Vec2::new(sx, 0.0),
            vel: Vec2::new(vx, 0.0),
        }
    }

    /// State moving along the y lane (x pinned at zero)
    pub fn along_y(sy: f32, vy: f32) -> Self {
        Self {
            pos: Vec2::new(0.0, sy),
            vel: Vec2::new(0.0, vy),
        }
    }

    /// Axis this state is moving along, or `None` if neither axis is pinned
    ///
    /// Checked in the same order the step functions branch: the y lane wins
    /// when both axes are fully at rest.
    pub fn active_axis(&self) -> Option<Axis> {
        if self.pos.x == 0.0 && self.vel.x == 0.0 {
            Some(Axis::Y)
        } else if self.pos.y == 0.0 && self.vel.y == 0.0 {
            Some(Axis::X)
        } else {
            None
        }
    }
}

/// State of the single-track (bicycle) model
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BicycleState {
    /// Position
    pub pos: Vec2,
    /// Heading angle (radians); zero heading moves along +y
    pub heading: f32,
    /// Steering angle (radians)
    pub steer: f32,
    /// Forward speed
    pub speed: f32,
}

impl BicycleState {
    pub fn new(pos: Vec2, heading: f32, steer: f32, speed: f32) -> Self {
        Self {
            pos,
            heading,
            steer,
            speed,
        }
    }
}

/// Control input for the bicycle model
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct BicycleControl {
    /// Steering-angle rate (radians/sec)
    pub steer_rate: f32,
    /// Forward acceleration
    pub accel: f32,
}

impl BicycleControl {
    pub fn new(steer_rate: f32, accel: f32) -> Self {
        Self { steer_rate, accel }
    }

    /// Zero control (coast straight)
    pub fn coast() -> Self {
        Self::default()
    }
}

/// Speed limits applied after integrating a control
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpeedLimits {
    pub min: f32,
    pub max: f32,
}

impl Default for SpeedLimits {
    /// The fixed limits used by the non-parameterized models
    fn default() -> Self {
        Self {
            min: MIN_SPEED,
            max: MAX_SPEED,
        }
    }
}

impl SpeedLimits {
    pub fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    /// Clamp a speed into the limits
    ///
    /// Written as `max(min(v, max), min)` so inverted limits resolve to
    /// `min` instead of panicking; ordering the limits is the caller's job.
    #[inline]
    pub fn clamp(&self, v: f32) -> f32 {
        v.min(self.max).max(self.min)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_active_axis_y_lane() {
        // Moving along y, x fully pinned
        assert_eq!(LaneState::along_y(12.0, 5.0).active_axis(), Some(Axis::Y));
        // Stationary at the origin counts as the y lane (checked first)
        assert_eq!(LaneState::along_y(0.0, 0.0).active_axis(), Some(Axis::Y));
    }

    #[test]
    fn test_active_axis_x_lane() {
        assert_eq!(LaneState::along_x(-30.0, 8.0).active_axis(), Some(Axis::X));
        // Position on x alone is enough to unpin the x axis
        assert_eq!(LaneState::along_x(5.0, 0.0).active_axis(), Some(Axis::X));
    }

    #[test]
    fn test_active_axis_none_when_unpinned() {
        let state = LaneState::new(Vec2::new(1.0, 2.0), Vec2::new(0.0, 3.0));
        assert_eq!(state.active_axis(), None);
    }

    #[test]
    fn test_speed_limits_clamp() {
        let limits = SpeedLimits::default();
        assert_eq!(limits.clamp(-3.0), 0.0);
        assert_eq!(limits.clamp(17.5), 17.5);
        assert_eq!(limits.clamp(55.0), 40.0);
    }

    #[test]
    fn test_speed_limits_inverted_resolve_to_min() {
        // Degenerate limits fall back to min rather than panicking
        let limits = SpeedLimits::new(10.0, 5.0);
        assert_eq!(limits.clamp(7.0), 10.0);
    }
}
