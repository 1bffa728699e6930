//! Grid cells and the integer map-code vocabulary.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Ceiling height shared by every cell. Levels have no per-cell ceiling
/// variation.
pub const CELL_CEILING: f32 = 4.0;

/// Floor height reported for coordinates outside the grid.
pub const VOID_FLOOR: f32 = -100.0;

/// One grid square's static spatial data.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Cell {
    /// Solid wall, blocks all horizontal movement through this cell.
    pub is_wall: bool,
    /// Walkable surface height in world units.
    pub floor: f32,
    /// Overhead surface height in world units.
    pub ceiling: f32,
    /// Whether a pickup marker was placed here by the map.
    pub has_item: bool,
}

impl Cell {
    /// A walkable cell with its floor at the given height.
    pub const fn open(floor: f32) -> Self {
        Self {
            is_wall: false,
            floor,
            ceiling: CELL_CEILING,
            has_item: false,
        }
    }

    /// A solid wall cell.
    pub const fn wall() -> Self {
        Self {
            is_wall: true,
            floor: 0.0,
            ceiling: CELL_CEILING,
            has_item: false,
        }
    }
}

/// Monster classes that map codes can place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SpawnKind {
    /// Light, fast monster (40 health).
    Light,
    /// Heavy, slow monster (100 health).
    Heavy,
}

/// A monster placement extracted during parsing, at the cell's center.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Spawn {
    pub kind: SpawnKind,
    pub position: Vec2,
}

/// Translate one map code into its cell (and optional spawn marker).
///
/// Codes: 1 = wall, 0 = floor, 2 = floor with item, 3 = step (1.5),
/// 4 = high platform (3.0), 5 = pit (-2.0), 6/7 = floor with a
/// light/heavy spawn. Anything else falls back to plain floor.
pub(crate) fn decode(code: u8) -> (Cell, Option<SpawnKind>) {
    match code {
        1 => (Cell::wall(), None),
        2 => (
            Cell {
                has_item: true,
                ..Cell::open(0.0)
            },
            None,
        ),
        3 => (Cell::open(1.5), None),
        4 => (Cell::open(3.0), None),
        5 => (Cell::open(-2.0), None),
        6 => (Cell::open(0.0), Some(SpawnKind::Light)),
        7 => (Cell::open(0.0), Some(SpawnKind::Heavy)),
        _ => (Cell::open(0.0), None),
    }
}
