//! Monster entities and their per-kind constants.

use dreadhall_world::{GridMap, SpawnKind};
use glam::{Vec2, Vec3};
use serde::{Deserialize, Serialize};

/// Monster classes. Kind-specific numbers live in the match tables below
/// rather than in subtypes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AgentKind {
    /// Light, fast skirmisher.
    Imp,
    /// Heavy bruiser with a longer detection reach.
    Demon,
}

impl AgentKind {
    pub fn from_spawn(kind: SpawnKind) -> Self {
        match kind {
            SpawnKind::Light => AgentKind::Imp,
            SpawnKind::Heavy => AgentKind::Demon,
        }
    }

    /// Starting health.
    pub fn max_health(&self) -> i32 {
        match self {
            AgentKind::Imp => 40,
            AgentKind::Demon => 100,
        }
    }

    /// Horizontal speed (world units/second).
    pub fn speed(&self) -> f32 {
        match self {
            AgentKind::Imp => 3.5,
            AgentKind::Demon => 2.2,
        }
    }

    /// Straight-line distance at which an idle monster notices the player.
    pub fn detection_radius(&self) -> f32 {
        match self {
            AgentKind::Imp => 12.0,
            AgentKind::Demon => 16.0,
        }
    }

    /// Preferred engagement distance held during a chase.
    pub fn min_distance(&self) -> f32 {
        match self {
            AgentKind::Imp => 5.0,
            AgentKind::Demon => 3.5,
        }
    }

    /// Width of the hold band below [`Self::min_distance`] before the
    /// monster backs away.
    pub fn hysteresis(&self) -> f32 {
        match self {
            AgentKind::Imp => 1.5,
            AgentKind::Demon => 1.0,
        }
    }

    /// Distance under which lateral strafing kicks in.
    pub fn strafe_radius(&self) -> f32 {
        match self {
            AgentKind::Imp => 9.0,
            AgentKind::Demon => 7.0,
        }
    }

    /// Vertical offset of the body center above the floor.
    pub fn height_offset(&self) -> f32 {
        match self {
            AgentKind::Imp => 1.1,
            AgentKind::Demon => 1.4,
        }
    }

    /// Horizontal half-extent of the hit volume.
    pub fn body_radius(&self) -> f32 {
        match self {
            AgentKind::Imp => 0.6,
            AgentKind::Demon => 0.9,
        }
    }

    /// Vertical half-extent of the hit volume.
    pub fn half_height(&self) -> f32 {
        match self {
            AgentKind::Imp => 1.1,
            AgentKind::Demon => 1.4,
        }
    }
}

/// AI lifecycle. `Dead` is terminal: a dead agent never moves, never
/// thinks and never loses further health.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AgentState {
    Idle,
    Chase,
    Dead,
}

/// A hostile agent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Agent {
    pub kind: AgentKind,
    pub position: Vec3,
    pub health: i32,
    pub state: AgentState,
    /// Current lateral strafe direction, `-1.0` or `1.0`.
    pub(crate) strafe_sign: f32,
    /// Seconds until the strafe direction re-rolls.
    pub(crate) strafe_timer: f32,
}

impl Agent {
    /// Place an agent of `kind` on the floor under `at`.
    pub fn spawn(kind: AgentKind, at: Vec2, grid: &GridMap) -> Self {
        let floor = grid.floor_height(at.x, at.y);
        Self {
            kind,
            position: Vec3::new(at.x, floor + kind.height_offset(), at.y),
            health: kind.max_health(),
            state: AgentState::Idle,
            strafe_sign: 1.0,
            strafe_timer: 0.0,
        }
    }

    pub fn is_alive(&self) -> bool {
        self.state != AgentState::Dead
    }

    /// Apply damage. The only mutator of agent health; transitions to
    /// `Dead` exactly once and is a no-op on an already dead agent.
    pub fn take_damage(&mut self, amount: i32) {
        if self.state == AgentState::Dead {
            return;
        }
        self.health -= amount;
        if self.health <= 0 {
            self.health = 0;
            self.state = AgentState::Dead;
            log::debug!("{:?} died at {:?}", self.kind, self.position);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_grid() -> GridMap {
        GridMap::parse(&[vec![0, 0, 0]], 1.0).unwrap()
    }

    #[test]
    fn spawn_rests_on_the_floor() {
        let grid = test_grid();
        let agent = Agent::spawn(AgentKind::Imp, Vec2::new(1.0, 0.0), &grid);
        assert_eq!(agent.position.y, AgentKind::Imp.height_offset());
        assert_eq!(agent.health, 40);
        assert_eq!(agent.state, AgentState::Idle);
    }

    #[test]
    fn light_kind_dies_in_two_hits() {
        let grid = test_grid();
        let mut agent = Agent::spawn(AgentKind::Imp, Vec2::ZERO, &grid);

        agent.take_damage(20);
        assert!(agent.is_alive());
        assert_eq!(agent.health, 20);

        agent.take_damage(20);
        assert!(!agent.is_alive());
        assert_eq!(agent.state, AgentState::Dead);
    }

    #[test]
    fn heavy_kind_takes_five_hits() {
        let grid = test_grid();
        let mut agent = Agent::spawn(AgentKind::Demon, Vec2::ZERO, &grid);

        agent.take_damage(20);
        assert!(agent.is_alive());
        assert_eq!(agent.health, 80);

        for _ in 0..3 {
            agent.take_damage(20);
        }
        assert!(agent.is_alive());

        agent.take_damage(20);
        assert!(!agent.is_alive());
    }

    #[test]
    fn death_is_terminal() {
        let grid = test_grid();
        let mut agent = Agent::spawn(AgentKind::Imp, Vec2::ZERO, &grid);
        agent.take_damage(100);
        assert_eq!(agent.state, AgentState::Dead);

        let frozen_position = agent.position;
        let frozen_health = agent.health;

        agent.take_damage(500);
        assert_eq!(agent.health, frozen_health);
        assert_eq!(agent.position, frozen_position);
        assert_eq!(agent.state, AgentState::Dead);
    }

    #[test]
    fn kind_tables_are_consistent() {
        for kind in [AgentKind::Imp, AgentKind::Demon] {
            assert!(kind.max_health() > 0);
            assert!(kind.speed() > 0.0);
            assert!(kind.min_distance() > kind.hysteresis());
            assert!(kind.detection_radius() > kind.strafe_radius());
        }
        // The heavy kind sees farther, per its larger frame.
        assert!(AgentKind::Demon.detection_radius() > AgentKind::Imp.detection_radius());
    }
}
