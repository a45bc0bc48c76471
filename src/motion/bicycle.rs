//! Single-track (bicycle) motion model
//!
//! Forward-Euler discretization with heading and steering-angle dynamics.
//! Heading convention: zero heading moves along +y (`sin` feeds x, `cos`
//! feeds y). The position update reads the pre-step heading; the heading
//! update reads the post-step steer and speed, so the line order below is
//! load-bearing.

use glam::Vec2;

use super::state::{BicycleControl, BicycleState, SpeedLimits};
use crate::consts::VEHICLE_LENGTH;

/// Advance a bicycle vehicle one step under the fixed speed limits
pub fn bicycle_step(state: BicycleState, control: BicycleControl, dt: f32) -> BicycleState {
    step(state, control, dt, SpeedLimits::default())
}

/// Advance a bicycle vehicle one step under caller-supplied speed limits
pub fn bicycle_step_bounded(
    state: BicycleState,
    control: BicycleControl,
    dt: f32,
    limits: SpeedLimits,
) -> BicycleState {
    step(state, control, dt, limits)
}

fn step(
    state: BicycleState,
    control: BicycleControl,
    dt: f32,
    limits: SpeedLimits,
) -> BicycleState {
    let speed = limits.clamp(state.speed + control.accel * dt);
    let steer = state.steer + control.steer_rate * dt;
    let pos = state.pos + speed * dt * Vec2::new(state.heading.sin(), state.heading.cos());
    let heading = state.heading + speed / VEHICLE_LENGTH * steer.tan() * dt;
    BicycleState {
        pos,
        heading,
        steer,
        speed,
    }
}
