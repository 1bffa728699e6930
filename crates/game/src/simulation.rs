//! The frame-stepped world simulation.
//!
//! One `tick` per rendered frame, driven by the collaborator's `dt`.
//! Ordering within a frame is fixed: the player moves first, then every
//! agent, then weapon fire and projectile sweeps. Hit resolution therefore
//! always observes this frame's positions, never the previous frame's.

use dreadhall_physics::{instant_hit, sweep_segment, HitKind, HitTarget, MoveConfig};
use dreadhall_world::GridMap;
use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::agent::{Agent, AgentKind};
use crate::ai::update_agent;
use crate::input::PlayerInput;
use crate::player::Player;
use crate::projectile::Projectile;
use crate::random::GameRng;

/// Simulation tunables.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Movement physics configuration.
    pub movement: MoveConfig,

    /// Player horizontal speed (world units/second).
    pub player_speed: f32,

    /// Projectile muzzle speed (world units/second).
    pub projectile_speed: f32,

    /// Damage dealt by a projectile impact.
    pub projectile_damage: i32,

    /// Maximum projectile travel distance before it fizzles.
    pub projectile_range: f32,

    /// Damage dealt by the instant hitscan weapon.
    pub hitscan_damage: i32,

    /// Maximum hitscan range.
    pub hitscan_range: f32,

    /// Half-angle of the hitscan cone (radians).
    pub hitscan_cone: f32,

    /// Seed for the AI's strafe-timer RNG.
    pub rng_seed: u32,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            movement: MoveConfig::default(),
            player_speed: 5.0,
            projectile_speed: 18.0,
            projectile_damage: 20,
            projectile_range: 60.0,
            hitscan_damage: 15,
            hitscan_range: 25.0,
            hitscan_cone: 0.15,
            rng_seed: 1,
        }
    }
}

/// What a resolved hit struck, for the effects collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HitEventKind {
    Wall,
    Agent,
}

/// Impact feedback queued for the effects collaborator.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct HitEvent {
    pub point: Vec3,
    pub kind: HitEventKind,
}

/// The world simulation: grid, player, agents and projectiles.
#[derive(Debug)]
pub struct Simulation {
    grid: GridMap,
    pub config: SimulationConfig,
    pub player: Player,
    pub agents: Vec<Agent>,
    pub projectiles: Vec<Projectile>,
    events: Vec<HitEvent>,
    rng: GameRng,
    prev_fire_projectile: bool,
    prev_fire_hitscan: bool,
    /// Current frame/tick number.
    pub frame: u64,
}

/// Hit volumes of all live agents, indexed by their slot in the agent
/// list. Dead agents are simply absent, so a hit can never resolve to one.
fn hit_targets(agents: &[Agent]) -> Vec<HitTarget> {
    agents
        .iter()
        .enumerate()
        .filter(|(_, agent)| agent.is_alive())
        .map(|(index, agent)| HitTarget {
            index,
            position: agent.position,
            radius: agent.kind.body_radius(),
            half_height: agent.kind.half_height(),
        })
        .collect()
}

impl Simulation {
    /// Build a simulation from a parsed grid: the player starts at the
    /// map's start position and one agent spawns per spawn record.
    pub fn new(grid: GridMap, config: SimulationConfig) -> Self {
        let player = Player::new(grid.start_position(), &grid, &config.movement);
        let agents = grid
            .spawns()
            .iter()
            .map(|spawn| Agent::spawn(AgentKind::from_spawn(spawn.kind), spawn.position, &grid))
            .collect::<Vec<_>>();

        log::debug!(
            "simulation ready: {} agents, player at {:?}",
            agents.len(),
            player.position
        );

        Self {
            grid,
            rng: GameRng::new(config.rng_seed),
            config,
            player,
            agents,
            projectiles: Vec::new(),
            events: Vec::new(),
            prev_fire_projectile: false,
            prev_fire_hitscan: false,
            frame: 0,
        }
    }

    /// Default configuration over the built-in demo arena.
    pub fn demo() -> Self {
        Self::new(GridMap::demo(), SimulationConfig::default())
    }

    /// The level grid (read-only for the whole simulation lifetime).
    pub fn grid(&self) -> &GridMap {
        &self.grid
    }

    /// Agents still in play.
    pub fn live_agents(&self) -> impl Iterator<Item = &Agent> {
        self.agents.iter().filter(|agent| agent.is_alive())
    }

    /// Take this frame's impact events for effect spawning.
    pub fn drain_events(&mut self) -> Vec<HitEvent> {
        std::mem::take(&mut self.events)
    }

    /// Advance the whole world by one frame.
    pub fn tick(&mut self, input: &PlayerInput, dt: f32) {
        // 1. Player movement.
        if self.player.is_alive() {
            self.player.update(
                &self.grid,
                input.clamped_intent(),
                self.config.player_speed,
                &self.config.movement,
                dt,
            );
        }

        // 2. Agent AI and movement, against the player's new position.
        for agent in &mut self.agents {
            update_agent(agent, self.player.position, &self.grid, &mut self.rng, dt);
        }

        // 3. Weapon fire. Triggers are edge-detected: one shot per press.
        let pressed_projectile = input.fire_projectile && !self.prev_fire_projectile;
        let pressed_hitscan = input.fire_hitscan && !self.prev_fire_hitscan;
        self.prev_fire_projectile = input.fire_projectile;
        self.prev_fire_hitscan = input.fire_hitscan;

        let aim = Vec3::new(input.aim.x, 0.0, input.aim.y).normalize_or_zero();
        if self.player.is_alive() && aim != Vec3::ZERO {
            if pressed_hitscan {
                let targets = hit_targets(&self.agents);
                if let Some(index) = instant_hit(
                    self.player.position,
                    aim,
                    &targets,
                    self.config.hitscan_range,
                    self.config.hitscan_cone,
                ) {
                    let point = self.agents[index].position;
                    self.agents[index].take_damage(self.config.hitscan_damage);
                    self.events.push(HitEvent {
                        point,
                        kind: HitEventKind::Agent,
                    });
                }
            }
            if pressed_projectile {
                self.projectiles.push(Projectile::new(
                    self.player.position,
                    aim,
                    self.config.projectile_speed,
                ));
            }
        }

        // 4. Projectile sweeps: closest surface or body wins.
        for i in 0..self.projectiles.len() {
            self.projectiles[i].advance(dt);
            let targets = hit_targets(&self.agents);
            let swept = sweep_segment(
                &self.grid,
                &targets,
                self.projectiles[i].last_position,
                self.projectiles[i].position,
            );
            if let Some(hit) = swept {
                let kind = match hit.kind {
                    HitKind::Agent(index) => {
                        self.agents[index].take_damage(self.config.projectile_damage);
                        HitEventKind::Agent
                    }
                    HitKind::Wall => HitEventKind::Wall,
                };
                self.events.push(HitEvent {
                    point: hit.point,
                    kind,
                });
                self.projectiles[i].position = hit.point;
                self.projectiles[i].alive = false;
            } else if self.projectiles[i].traveled() > self.config.projectile_range {
                self.projectiles[i].alive = false;
            }
        }
        self.projectiles.retain(|projectile| projectile.alive);

        // 5. Kill plane: bodies that fell out of the world leave play.
        let kill_plane = self.config.movement.kill_plane;
        if self.player.is_alive() && self.player.position.y < kill_plane {
            self.player.take_damage(self.player.health);
        }
        for agent in &mut self.agents {
            if agent.is_alive() && agent.position.y < kill_plane {
                agent.take_damage(agent.health);
            }
        }

        self.frame += 1;
    }
}
