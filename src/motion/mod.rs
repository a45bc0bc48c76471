//! Vehicle motion models
//!
//! All state-transition logic lives here. This module must stay pure:
//! - Inputs are read, never written; every call returns a fresh state
//! - No I/O beyond `log` diagnostics on fallback paths
//! - No shared state between calls
//!
//! Callers (per-agent simulation/inference loops) are expected to keep the
//! lane models' axis-exclusivity invariant; see [`LaneState::active_axis`].

pub mod bicycle;
pub mod lane;
pub mod state;

pub use bicycle::{bicycle_step, bicycle_step_bounded};
pub use lane::{lane_step, lane_step_averaged, lane_step_bounded};
pub use state::{Axis, BicycleControl, BicycleState, LaneState, SpeedLimits};
