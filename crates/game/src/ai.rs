//! Monster steering: the idle/chase state machine.
//!
//! Chase steering blends three components: approach or retreat to hold the
//! engagement distance, and a lateral strafe whose direction re-rolls on a
//! randomized timer. The combined vector is renormalized before scaling so
//! a strafing monster never outruns its own speed stat.
//!
//! Agents glide along the terrain (`y = floor + offset` every tick); only
//! the wall flag gates their horizontal movement, never step height or
//! gravity.

use dreadhall_world::GridMap;
use glam::{Vec2, Vec3};

use crate::agent::{Agent, AgentState};
use crate::random::GameRng;

/// Advance one agent by one tick against the player's current position.
pub fn update_agent(agent: &mut Agent, player_pos: Vec3, grid: &GridMap, rng: &mut GameRng, dt: f32) {
    match agent.state {
        AgentState::Dead => {}
        AgentState::Idle => {
            let distance = horizontal(player_pos - agent.position).length();
            if distance < agent.kind.detection_radius() {
                agent.state = AgentState::Chase;
                log::debug!("{:?} spotted the player at range {distance:.1}", agent.kind);
            }
        }
        AgentState::Chase => chase(agent, player_pos, grid, rng, dt),
    }
}

fn horizontal(v: Vec3) -> Vec2 {
    Vec2::new(v.x, v.z)
}

fn chase(agent: &mut Agent, player_pos: Vec3, grid: &GridMap, rng: &mut GameRng, dt: f32) {
    let to_player = horizontal(player_pos - agent.position);
    let distance = to_player.length();
    if distance <= f32::EPSILON {
        return;
    }
    let dir = to_player / distance;
    let kind = agent.kind;

    let mut steer = Vec2::ZERO;
    if distance > kind.min_distance() {
        steer += dir;
    } else if distance < kind.min_distance() - kind.hysteresis() {
        steer -= dir;
    }

    agent.strafe_timer -= dt;
    if agent.strafe_timer <= 0.0 {
        agent.strafe_sign = rng.sign();
        agent.strafe_timer = rng.range(1.0, 3.0);
    }
    if distance < kind.strafe_radius() {
        steer += dir.perp() * agent.strafe_sign;
    }

    let steer = steer.normalize_or_zero();
    let step = steer * kind.speed() * dt;

    // Per-axis wall blocking, Z resolved with the post-X position.
    let mut x = agent.position.x;
    if !grid.is_wall(x + step.x, agent.position.z) {
        x += step.x;
    }
    let mut z = agent.position.z;
    if !grid.is_wall(x, z + step.y) {
        z += step.y;
    }

    let floor = grid.floor_height(x, z);
    agent.position = Vec3::new(x, floor + kind.height_offset(), z);
}
