//! Grid movement resolution.
//!
//! Horizontal axes resolve independently so a diagonal move can partially
//! succeed against a corner (sliding along the wall). The step-up decision
//! is relative to the floor the mover currently stands on: climbing out of
//! a pit works only if every adjacent rise individually stays within the
//! step height.

use dreadhall_world::GridMap;
use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Tunables for movement resolution.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MoveConfig {
    /// Maximum floor rise a mover may walk up without jumping (world units).
    pub step_height: f32,

    /// Downward acceleration callers integrate into vertical velocity each
    /// tick (world units/second²).
    pub gravity: f32,

    /// Vertical offset between the floor and the mover's tracked point.
    pub eye_height: f32,

    /// Height below which a falling body leaves play.
    pub kill_plane: f32,
}

impl Default for MoveConfig {
    fn default() -> Self {
        Self {
            step_height: 1.1,
            gravity: 25.0,
            eye_height: 1.7,
            kill_plane: -50.0,
        }
    }
}

/// Outcome of one movement resolution.
#[derive(Debug, Clone, Copy)]
pub struct MoveResult {
    /// Corrected position after collision and floor snap.
    pub position: Vec3,

    /// The X displacement was rejected; zero that velocity component.
    pub blocked_x: bool,

    /// The Z displacement was rejected; zero that velocity component.
    pub blocked_z: bool,

    /// The mover rests exactly on its floor.
    pub grounded: bool,

    /// Vertical velocity after floor contact (zeroed on landing).
    pub vertical_velocity: f32,
}

/// Whether a mover standing on `current_floor` may enter the cell under
/// `(x, z)`: the cell must be open and its floor within one step height.
/// Off-grid voids fail the wall test and so always block.
fn blocks_entry(grid: &GridMap, x: f32, z: f32, current_floor: f32, step_height: f32) -> bool {
    grid.is_wall(x, z) || grid.floor_height(x, z) > current_floor + step_height
}

/// Resolve a desired displacement against the grid.
///
/// X resolves first; Z then uses the post-X position, so diagonal moves
/// slide along blocked walls. Vertical motion integrates `vertical_velocity`
/// over `dt` and snaps to the destination floor when the mover would sink
/// below `floor + eye_height`.
pub fn resolve_move(
    grid: &GridMap,
    position: Vec3,
    delta_x: f32,
    delta_z: f32,
    vertical_velocity: f32,
    dt: f32,
    config: &MoveConfig,
) -> MoveResult {
    let current_floor = grid.floor_height(position.x, position.z);

    let mut x = position.x;
    let blocked_x = blocks_entry(
        grid,
        position.x + delta_x,
        position.z,
        current_floor,
        config.step_height,
    );
    if !blocked_x {
        x += delta_x;
    }

    let mut z = position.z;
    let blocked_z = blocks_entry(grid, x, position.z + delta_z, current_floor, config.step_height);
    if !blocked_z {
        z += delta_z;
    }

    let mut y = position.y + vertical_velocity * dt;
    let mut vertical_velocity = vertical_velocity;
    let rest_height = grid.floor_height(x, z) + config.eye_height;
    let grounded = y <= rest_height;
    if grounded {
        y = rest_height;
        vertical_velocity = 0.0;
    }

    MoveResult {
        position: Vec3::new(x, y, z),
        blocked_x,
        blocked_z,
        grounded,
        vertical_velocity,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dreadhall_world::VOID_FLOOR;

    fn flat_room() -> GridMap {
        GridMap::parse(
            &[
                vec![1, 1, 1, 1, 1],
                vec![1, 0, 0, 0, 1],
                vec![1, 0, 0, 0, 1],
                vec![1, 1, 1, 1, 1],
            ],
            1.0,
        )
        .unwrap()
    }

    fn standing_at(grid: &GridMap, x: f32, z: f32, config: &MoveConfig) -> Vec3 {
        Vec3::new(x, grid.floor_height(x, z) + config.eye_height, z)
    }

    #[test]
    fn open_floor_allows_movement() {
        let grid = flat_room();
        let config = MoveConfig::default();
        let pos = standing_at(&grid, 2.0, 2.0, &config);

        let result = resolve_move(&grid, pos, 0.4, -0.4, 0.0, 1.0 / 60.0, &config);
        assert!(!result.blocked_x);
        assert!(!result.blocked_z);
        assert_eq!(result.position.x, 2.4);
        assert_eq!(result.position.z, 1.6);
        assert!(result.grounded);
    }

    #[test]
    fn walls_block_per_axis() {
        let grid = flat_room();
        let config = MoveConfig::default();
        let pos = standing_at(&grid, 3.0, 1.0, &config);

        // Diagonal into the corner: X into the east wall is rejected, Z
        // along the wall still succeeds.
        let result = resolve_move(&grid, pos, 0.6, 0.6, 0.0, 1.0 / 60.0, &config);
        assert!(result.blocked_x);
        assert!(!result.blocked_z);
        assert_eq!(result.position.x, 3.0);
        assert_eq!(result.position.z, 1.6);
    }

    #[test]
    fn step_height_gates_entry() {
        // Floors 0 and 1.5 side by side.
        let grid = GridMap::parse(&[vec![0, 3]], 1.0).unwrap();

        let mut config = MoveConfig {
            step_height: 1.1,
            ..MoveConfig::default()
        };
        let pos = standing_at(&grid, 0.0, 0.0, &config);
        let result = resolve_move(&grid, pos, 1.0, 0.0, 0.0, 1.0 / 60.0, &config);
        assert!(result.blocked_x, "1.5 rise must exceed a 1.1 step");
        assert_eq!(result.position.x, 0.0);

        config.step_height = 2.0;
        let result = resolve_move(&grid, pos, 1.0, 0.0, 0.0, 1.0 / 60.0, &config);
        assert!(!result.blocked_x, "1.5 rise fits a 2.0 step");
        assert_eq!(result.position.x, 1.0);
    }

    #[test]
    fn stepping_down_is_always_allowed() {
        let grid = GridMap::parse(&[vec![3, 0]], 1.0).unwrap();
        let config = MoveConfig::default();
        let pos = standing_at(&grid, 0.0, 0.0, &config);

        let result = resolve_move(&grid, pos, 1.0, 0.0, 0.0, 1.0 / 60.0, &config);
        assert!(!result.blocked_x);
    }

    #[test]
    fn pit_climb_is_relative_to_current_floor() {
        // Pit (-2.0) next to flat floor: 2.0 rise blocks at step 1.1.
        let grid = GridMap::parse(&[vec![5, 0]], 1.0).unwrap();
        let config = MoveConfig::default();
        let pos = standing_at(&grid, 0.0, 0.0, &config);
        assert_eq!(grid.floor_height(0.0, 0.0), -2.0);

        let result = resolve_move(&grid, pos, 1.0, 0.0, 0.0, 1.0 / 60.0, &config);
        assert!(result.blocked_x);
    }

    #[test]
    fn falling_snaps_to_floor_and_grounds() {
        let grid = flat_room();
        let config = MoveConfig::default();
        // Hovering above the floor with downward velocity.
        let mut pos = Vec3::new(2.0, config.eye_height + 3.0, 2.0);
        let mut velocity = 0.0;
        let mut grounded = false;

        for _ in 0..120 {
            velocity -= config.gravity * (1.0 / 60.0);
            let result = resolve_move(&grid, pos, 0.0, 0.0, velocity, 1.0 / 60.0, &config);
            pos = result.position;
            velocity = result.vertical_velocity;
            grounded = result.grounded;
        }

        assert!(grounded);
        assert_eq!(pos.y, config.eye_height);
        assert_eq!(velocity, 0.0);
    }

    #[test]
    fn airborne_mover_is_not_grounded() {
        let grid = flat_room();
        let config = MoveConfig::default();
        let pos = Vec3::new(2.0, config.eye_height + 3.0, 2.0);

        let result = resolve_move(&grid, pos, 0.0, 0.0, 0.0, 1.0 / 60.0, &config);
        assert!(!result.grounded);
        assert_eq!(result.position.y, pos.y);
    }

    #[test]
    fn grounding_invariant_holds_across_terrain() {
        // Walk from flat floor down into a pit; Y always tracks at or above
        // the destination floor plus the eye offset.
        let grid = GridMap::parse(&[vec![0, 0, 5, 5]], 1.0).unwrap();
        let config = MoveConfig::default();
        let mut pos = standing_at(&grid, 0.0, 0.0, &config);
        let mut velocity = 0.0;

        for _ in 0..240 {
            velocity -= config.gravity * (1.0 / 60.0);
            let result = resolve_move(&grid, pos, 0.02, 0.0, velocity, 1.0 / 60.0, &config);
            pos = result.position;
            velocity = result.vertical_velocity;
            let floor = grid.floor_height(pos.x, pos.z);
            assert!(pos.y >= floor + config.eye_height - 1e-4);
            if result.grounded {
                assert!((pos.y - (floor + config.eye_height)).abs() < 1e-4);
            }
        }
        // Ended up down in the pit, re-grounded.
        assert_eq!(grid.floor_height(pos.x, pos.z), -2.0);
    }

    #[test]
    fn void_blocks_horizontal_entry() {
        let grid = GridMap::parse(&[vec![0]], 1.0).unwrap();
        let config = MoveConfig::default();
        let pos = standing_at(&grid, 0.0, 0.0, &config);

        let result = resolve_move(&grid, pos, 1.0, 0.0, 0.0, 1.0 / 60.0, &config);
        assert!(result.blocked_x);
        assert_eq!(grid.floor_height(1.0, 0.0), VOID_FLOOR);
    }
}
