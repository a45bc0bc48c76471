//! Lane-constrained (one-axis) motion models
//!
//! A lane vehicle moves along exactly one intersection axis while the other
//! stays pinned at zero. Each step integrates the control into the active
//! axis's velocity, clamps it into the speed limits, and advances position
//! with the trapezoid of old and new velocity. States that violate the
//! axis-exclusivity invariant take a documented fallback branch instead of
//! an error: these functions never panic and never reject an input.

use glam::Vec2;

use super::state::{Axis, LaneState, SpeedLimits};

/// Clamped velocity integration plus trapezoidal position update for one axis
#[inline]
fn integrate_axis(s: f32, v: f32, accel: f32, dt: f32, limits: SpeedLimits) -> (f32, f32) {
    let v_next = limits.clamp(v + accel * dt);
    (s + 0.5 * (v + v_next) * dt, v_next)
}

/// Advance a lane vehicle one step under the fixed speed limits
///
/// Branches on the active axis; a state pinned on neither axis is returned
/// unchanged with a diagnostic (defensive guard, not a supported path).
pub fn lane_step(state: LaneState, accel: f32, dt: f32) -> LaneState {
    step_fixed(state, accel, dt)
}

/// Advance a lane vehicle one step using the midpoint of two controls
///
/// Models a control applied as the average of two successive commands, e.g.
/// a two-ply lookahead. With equal controls this is exactly [`lane_step`].
pub fn lane_step_averaged(
    state: LaneState,
    accel_first: f32,
    accel_second: f32,
    dt: f32,
) -> LaneState {
    step_fixed(state, (accel_first + accel_second) / 2.0, dt)
}

fn step_fixed(state: LaneState, accel: f32, dt: f32) -> LaneState {
    let limits = SpeedLimits::default();
    match state.active_axis() {
        Some(Axis::Y) => {
            let (sy, vy) = integrate_axis(state.pos.y, state.vel.y, accel, dt, limits);
            LaneState {
                pos: Vec2::new(state.pos.x, sy),
                vel: Vec2::new(state.vel.x, vy),
            }
        }
        Some(Axis::X) => {
            let (sx, vx) = integrate_axis(state.pos.x, state.vel.x, accel, dt, limits);
            LaneState {
                pos: Vec2::new(sx, state.pos.y),
                vel: Vec2::new(vx, state.vel.y),
            }
        }
        None => {
            log::warn!(
                "lane_step: motion not axis-constrained (pos {:?}, vel {:?}), leaving state unchanged",
                state.pos,
                state.vel
            );
            state
        }
    }
}

/// Advance a lane vehicle one step under caller-supplied speed limits
///
/// Differs from [`lane_step`] in two deliberate, observable ways:
/// - the x branch drives the oncoming direction: the new speed is
///   `clamp(|vx| + accel*dt)` negated, and the trapezoid mixes the old
///   signed `vx` with that negated value;
/// - a state pinned on neither axis is not a no-op: it integrates the y
///   axis with the control, flooring the new velocity at zero only (no
///   upper clamp).
pub fn lane_step_bounded(state: LaneState, accel: f32, dt: f32, limits: SpeedLimits) -> LaneState {
    match state.active_axis() {
        Some(Axis::Y) => {
            let (sy, vy) = integrate_axis(state.pos.y, state.vel.y, accel, dt, limits);
            LaneState {
                pos: Vec2::new(state.pos.x, sy),
                vel: Vec2::new(state.vel.x, vy),
            }
        }
        Some(Axis::X) => {
            // Oncoming lane: speed is tracked unsigned, then negated
            let vx = -limits.clamp(state.vel.x.abs() + accel * dt);
            LaneState {
                pos: Vec2::new(state.pos.x + 0.5 * (state.vel.x + vx) * dt, state.pos.y),
                vel: Vec2::new(vx, state.vel.y),
            }
        }
        None => {
            log::warn!(
                "lane_step_bounded: motion not axis-constrained (pos {:?}, vel {:?}), integrating along y",
                state.pos,
                state.vel
            );
            // Floor at zero only; the caller's limits do not apply here
            let vy = (state.vel.y + accel * dt).max(0.0);
            LaneState {
                pos: Vec2::new(state.pos.x, state.pos.y + 0.5 * (state.vel.y + vy) * dt),
                vel: Vec2::new(state.vel.x, vy),
            }
        }
    }
}
