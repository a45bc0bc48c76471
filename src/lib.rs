//! Crossway Motion - vehicle kinematics for an uncontrolled intersection
//!
//! Core modules:
//! - `motion`: Pure state-transition models (lane-constrained and bicycle)
//!
//! Every operation is a pure function of its arguments: the caller owns the
//! state, picks a control and a timestep, and stores the returned state.
//! Nothing here allocates or keeps state between calls, so the models are
//! safe to drive from any number of agent loops at once.

pub mod motion;

pub use motion::{
    Axis, BicycleControl, BicycleState, LaneState, SpeedLimits, bicycle_step,
    bicycle_step_bounded, lane_step, lane_step_averaged, lane_step_bounded,
};

/// Model constants
pub mod consts {
    /// Planning timestep used by the demo loop (10 Hz)
    pub const SIM_DT: f32 = 0.1;

    /// Lower speed limit of the fixed-limit models (vehicles never reverse)
    pub const MIN_SPEED: f32 = 0.0;
    /// Upper speed limit of the fixed-limit models
    pub const MAX_SPEED: f32 = 40.0;

    /// Wheelbase of the bicycle model (length units)
    pub const VEHICLE_LENGTH: f32 = 3.0;
}

/// Normalize an angle to [-π, π)
#[inline]
pub fn normalize_angle(mut angle: f32) -> f32 {
    use std::f32::consts::PI;
    while angle >= PI {
        angle -= 2.0 * PI;
    }
    while angle < -PI {
        angle += 2.0 * PI;
    }
    angle
}
