//! The player entity.
//!
//! Unlike monsters, the player moves through the full resolver: step-up
//! gating, gravity integration and floor snap.

use dreadhall_physics::{resolve_move, MoveConfig};
use dreadhall_world::GridMap;
use glam::{Vec2, Vec3};
use serde::{Deserialize, Serialize};

/// The player.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    /// Tracked point (eye position).
    pub position: Vec3,
    pub vertical_velocity: f32,
    pub health: i32,
    pub grounded: bool,
}

impl Player {
    pub const MAX_HEALTH: i32 = 100;

    /// Place the player standing on the floor under `at`.
    pub fn new(at: Vec2, grid: &GridMap, config: &MoveConfig) -> Self {
        let floor = grid.floor_height(at.x, at.y);
        Self {
            position: Vec3::new(at.x, floor + config.eye_height, at.y),
            vertical_velocity: 0.0,
            health: Self::MAX_HEALTH,
            grounded: true,
        }
    }

    pub fn is_alive(&self) -> bool {
        self.health > 0
    }

    /// Apply damage, clamping at zero.
    pub fn take_damage(&mut self, amount: i32) {
        if !self.is_alive() {
            return;
        }
        self.health = (self.health - amount).max(0);
        if self.health == 0 {
            log::debug!("player died at {:?}", self.position);
        }
    }

    /// Advance one tick: integrate gravity, then resolve the desired
    /// displacement against the grid.
    pub fn update(&mut self, grid: &GridMap, intent: Vec2, speed: f32, config: &MoveConfig, dt: f32) {
        self.vertical_velocity -= config.gravity * dt;
        let delta = intent * speed * dt;

        let result = resolve_move(
            grid,
            self.position,
            delta.x,
            delta.y,
            self.vertical_velocity,
            dt,
            config,
        );
        self.position = result.position;
        self.vertical_velocity = result.vertical_velocity;
        self.grounded = result.grounded;
    }
}
