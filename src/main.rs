//! Intersection approach demo
//!
//! Scripted scenario exercising the caller contract: each vehicle's loop
//! holds the current state, picks a control, calls exactly one step
//! operation per tick, and stores the result. Control jitter comes from a
//! seeded RNG so runs are reproducible. Trajectories are dumped as JSON at
//! the end; progress goes through `log` (set RUST_LOG=info to see it).

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::Serialize;

use crossway_motion::consts::SIM_DT;
use crossway_motion::{
    BicycleControl, BicycleState, LaneState, SpeedLimits, bicycle_step, lane_step,
    lane_step_bounded, normalize_angle,
};

/// Per-vehicle state histories collected by the demo
#[derive(Serialize)]
struct Trajectories {
    southbound: Vec<LaneState>,
    oncoming: Vec<LaneState>,
    turning: Vec<BicycleState>,
}

fn main() {
    env_logger::init();
    log::info!("Crossway motion demo starting...");

    let seed = 7;
    let mut rng = Pcg32::seed_from_u64(seed);
    log::info!("Control jitter seeded with {}", seed);

    // Southbound vehicle closing on the intersection along the y lane
    let mut southbound = LaneState::along_y(-60.0, 12.0);
    // Oncoming vehicle on the x lane; the bounded model drives it in -x
    let mut oncoming = LaneState::along_x(45.0, 10.0);
    let oncoming_limits = SpeedLimits::new(0.0, 25.0);
    // Turning vehicle entering on a gentle arc
    let mut turning = BicycleState::new(Vec2::new(-20.0, -20.0), 0.0, 0.0, 8.0);

    let mut trajectories = Trajectories {
        southbound: vec![southbound],
        oncoming: vec![oncoming],
        turning: vec![turning],
    };

    let steps = 80;
    for step in 0..steps {
        let jitter: f32 = rng.random_range(-1.5..1.5);
        southbound = lane_step(southbound, 1.0 + jitter, SIM_DT);
        oncoming = lane_step_bounded(oncoming, 0.5, SIM_DT, oncoming_limits);

        // Steer into the turn for three seconds, then straighten out
        let control = if step < 30 {
            BicycleControl::new(0.02, 0.5)
        } else {
            BicycleControl::new(-0.02, 0.0)
        };
        turning = bicycle_step(turning, control, SIM_DT);

        trajectories.southbound.push(southbound);
        trajectories.oncoming.push(oncoming);
        trajectories.turning.push(turning);

        if step % 10 == 0 {
            log::info!(
                "t={:.1}s southbound y={:.1} v={:.1} | oncoming x={:.1} v={:.1} | turning ({:.1}, {:.1}) heading={:.2}",
                step as f32 * SIM_DT,
                southbound.pos.y,
                southbound.vel.y,
                oncoming.pos.x,
                oncoming.vel.x,
                turning.pos.x,
                turning.pos.y,
                normalize_angle(turning.heading),
            );
        }
    }

    log::info!("Demo complete after {} steps", steps);
    println!(
        "{}",
        serde_json::to_string_pretty(&trajectories).expect("trajectories serialize")
    );
}
